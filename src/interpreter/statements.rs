//! Command execution
//!
//! [`Interpreter::exec_command`] is the single dispatch point for every
//! command. It records the command as current, takes a snapshot when history
//! is enabled, and hands off to the handler for that command form. Loops,
//! procedures and pointers live in their own modules; the remaining forms are
//! handled here.
//!
//! # Blocks
//!
//! A block pushes a frame whose static link is the frame that was current on
//! entry, evaluates its declarations in order (each one may see the ones
//! before it), runs its commands, and pops the frame on every exit path.

use crate::interpreter::engine::{ensure_sufficient_stack, Interpreter};
use crate::interpreter::errors::Result;
use crate::memory::stack::Frame;
use crate::memory::value::Sval;
use crate::syntax::ast::{Com, Decl, Exp};
use crate::syntax::listing::node_key;
use tracing::trace;

impl Interpreter {
    /// Execute one command
    pub(crate) fn exec_command(&mut self, com: &Com) -> Result<()> {
        ensure_sufficient_stack(|| {
            self.enter_command(node_key(com))?;
            trace!(command = %com.headline(), depth = self.stack.depth(), "exec");

            match com {
                Com::Assign(name, value) => self.exec_assign(name, value),
                Com::While(condition, body) => self.exec_while(com, condition, body),
                Com::If(condition, then_branch, else_branch) => {
                    self.exec_if(condition, then_branch, else_branch)
                }
                Com::Procedure { name, params, body } => {
                    self.declare_procedure(name, params, body)
                }
                Com::Call(name, args) => self.call_procedure(name, args),
                Com::NewPointer(name, init) => self.new_pointer(name, init),
                Com::DestroyPointer(name) => self.destroy_pointer(name),
                Com::UpdatePointerVal(name, value) => self.update_pointer(name, value),
                Com::Block(decls, commands) => self.exec_block(decls, commands),
                Com::Show(value) => self.exec_show(value),
            }
        })
    }

    /// Execute commands in order, stopping at the first failure
    pub(crate) fn exec_commands(&mut self, commands: &[Com]) -> Result<()> {
        commands.iter().try_for_each(|com| self.exec_command(com))
    }

    /// Value to store for an assignment source or an actual parameter.
    ///
    /// A bare variable is copied slot to slot, so a pointer travels with it
    /// and both variables then share one heap cell. Any other expression is
    /// evaluated normally.
    pub(crate) fn storable_operand(&self, exp: &Exp) -> Result<Sval> {
        match exp {
            Exp::Val(name) => {
                let location = self.stack.resolve_location(name)?;
                self.stack.read(location)
            }
            _ => Ok(Sval::from(self.eval_expr(exp)?)),
        }
    }

    fn exec_assign(&mut self, name: &str, value: &Exp) -> Result<()> {
        let target = self.stack.resolve_location(name)?;
        let value = self.storable_operand(value)?;
        self.stack.write(target, value)
    }

    fn exec_if(&mut self, condition: &Exp, then_branch: &Com, else_branch: &Com) -> Result<()> {
        if self.eval_condition(condition, "if condition")? {
            self.exec_command(then_branch)
        } else {
            self.exec_command(else_branch)
        }
    }

    fn exec_block(&mut self, decls: &[Decl], commands: &[Com]) -> Result<()> {
        let static_link = self.stack.current_index();
        self.with_frame(Frame::new(static_link), |this, index| {
            for decl in decls {
                let value = Sval::from(this.eval_expr(&decl.init)?);
                this.stack.frame_at_mut(index).declare(index, &decl.name, value);
            }
            this.exec_commands(commands)
        })
    }

    fn exec_show(&mut self, value: &Exp) -> Result<()> {
        let value = self.eval_expr(value)?;
        self.emit(value);
        Ok(())
    }
}
