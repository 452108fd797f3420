//! Frame stack implementation
//!
//! This module provides the runtime stack used for blocks and procedure calls:
//! - [`FrameStack`]: an arena of frames addressed by [`FrameIndex`]
//! - [`Frame`]: one activation, owning an [`Environment`], a [`Store`] and a
//!   static link
//!
//! # Static Scoping
//!
//! Each frame records the index of its lexically enclosing frame. Name
//! resolution walks these static links, never the order in which frames were
//! pushed. A block's static link is the frame that was current when it was
//! entered. A procedure call's static link is the frame where the procedure
//! was declared, so free identifiers in the body see the declaration site and
//! not the caller.
//!
//! Frames live in a `Vec`, so a frame index stays valid for as long as the
//! frame is on the stack. Closures hold indices rather than references, which
//! keeps frames and the closures that capture them free of ownership cycles.

use super::env::Environment;
use super::store::Store;
use super::value::{Dval, FrameIndex, Location, Sval};
use crate::interpreter::errors::{InterpreterError, Result};

/// A single activation record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub env: Environment,
    pub store: Store,
    /// Lexically enclosing frame; `None` for the outermost frame
    pub static_link: Option<FrameIndex>,
}

impl Frame {
    pub fn new(static_link: Option<FrameIndex>) -> Self {
        Frame {
            env: Environment::new(),
            store: Store::new(),
            static_link,
        }
    }

    /// Allocate a slot holding `value` and bind `name` to it.
    ///
    /// `self_index` is this frame's own index in the stack, recorded in the
    /// resulting location.
    pub fn declare(&mut self, self_index: FrameIndex, name: &str, value: Sval) -> Location {
        let location = Location {
            store_index: self.store.alloc(value),
            frame_index: self_index,
        };
        self.env.bind(name, Dval::Location(location));
        location
    }
}

/// The frame stack
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        FrameStack { frames: Vec::new() }
    }

    /// Push a frame and return its index
    pub fn push(&mut self, frame: Frame) -> FrameIndex {
        self.frames.push(frame);
        self.frames.len() - 1
    }

    /// Drop every frame above `depth`
    pub fn truncate(&mut self, depth: usize) {
        self.frames.truncate(depth);
    }

    /// Index of the top frame
    pub fn current_index(&self) -> Option<FrameIndex> {
        self.frames.len().checked_sub(1)
    }

    /// Frame at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not on the stack. Frame indices come from live
    /// locations and closures, which only ever name frames on the current
    /// static chain.
    pub fn frame_at(&self, index: FrameIndex) -> &Frame {
        &self.frames[index]
    }

    /// Mutable frame at `index`; panics under the same conditions as [`Self::frame_at`]
    pub fn frame_at_mut(&mut self, index: FrameIndex) -> &mut Frame {
        &mut self.frames[index]
    }

    /// Resolve a name by searching the current frame, then following static links
    pub fn resolve(&self, name: &str) -> Result<Dval> {
        let mut current = self.current_index();
        while let Some(index) = current {
            let frame = &self.frames[index];
            if let Some(value) = frame.env.lookup(name) {
                return Ok(value.clone());
            }
            current = frame.static_link;
        }
        Err(InterpreterError::NameNotFound {
            name: name.to_string(),
        })
    }

    /// Resolve a name that must denote a variable
    pub fn resolve_location(&self, name: &str) -> Result<Location> {
        self.resolve(name)?
            .as_location()
            .ok_or_else(|| InterpreterError::NotAVariable {
                name: name.to_string(),
            })
    }

    pub fn read(&self, location: Location) -> Result<Sval> {
        self.frame_at(location.frame_index)
            .store
            .read(location.store_index)
    }

    pub fn write(&mut self, location: Location, value: Sval) -> Result<()> {
        self.frame_at_mut(location.frame_index)
            .store
            .write(location.store_index, value)
    }

    /// All frames, outermost first (for UI display)
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
