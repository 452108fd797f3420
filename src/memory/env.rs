//! Per-frame environment
//!
//! Bindings are kept in insertion order and searched newest first, so a later
//! binding of the same name shadows an earlier one within the frame. Lookup
//! never leaves the frame; following static links is the frame stack's job.

use super::value::Dval;
use crate::syntax::ast::Ide;

/// A single (name, denotable value) pair
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Ide,
    pub value: Dval,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: Vec<Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: Vec::new(),
        }
    }

    pub fn bind(&mut self, name: impl Into<Ide>, value: Dval) {
        self.bindings.push(Binding {
            name: name.into(),
            value,
        });
    }

    pub fn lookup(&self, name: &str) -> Option<&Dval> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.name == name)
            .map(|b| &b.value)
    }

    /// All bindings, oldest first
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_prefers_newest_binding() {
        let mut env = Environment::new();
        env.bind("x", Dval::Int(1));
        env.bind("y", Dval::Bool(true));
        env.bind("x", Dval::Int(2));

        assert_eq!(env.lookup("x"), Some(&Dval::Int(2)));
        assert_eq!(env.lookup("y"), Some(&Dval::Bool(true)));
        assert_eq!(env.lookup("z"), None);
        assert_eq!(env.len(), 3);
    }
}
