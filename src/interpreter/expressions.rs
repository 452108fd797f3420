//! Expression evaluation
//!
//! Expressions are side-effect free: they read the frame stack and the heap
//! but never modify either. Every operator evaluates its operands left to
//! right before checking their kinds, so a failing operand is reported ahead
//! of a kind mismatch.
//!
//! # Semantics
//!
//! - `+`, `*` and unary `-` need integers and use checked arithmetic
//! - `&&`, `||` and `!` need booleans; both operands are always evaluated
//! - `==` compares any two values; different kinds are simply unequal
//! - the conditional expression evaluates only the selected branch
//! - `*x` reads the heap cell that the pointer in `x` refers to
//! - `x` reads a variable, which must not hold a pointer

use crate::interpreter::engine::{ensure_sufficient_stack, Interpreter};
use crate::interpreter::errors::{InterpreterError, Result};
use crate::memory::value::{Eval, Sval};
use crate::syntax::ast::Exp;

impl Interpreter {
    /// Evaluate an expression in the current frame
    pub fn eval_expr(&self, exp: &Exp) -> Result<Eval> {
        ensure_sufficient_stack(|| match exp {
            Exp::Int(n) => Ok(Eval::Int(*n)),
            Exp::Bool(b) => Ok(Eval::Bool(*b)),

            Exp::Plus(left, right) => {
                let (a, b) = self.int_operands("+", left, right)?;
                a.checked_add(b)
                    .map(Eval::Int)
                    .ok_or_else(|| overflow(format!("{} + {}", a, b)))
            }
            Exp::Mult(left, right) => {
                let (a, b) = self.int_operands("*", left, right)?;
                a.checked_mul(b)
                    .map(Eval::Int)
                    .ok_or_else(|| overflow(format!("{} * {}", a, b)))
            }
            Exp::Minus(operand) => match self.eval_expr(operand)? {
                Eval::Int(n) => n
                    .checked_neg()
                    .map(Eval::Int)
                    .ok_or_else(|| overflow(format!("-({})", n))),
                other => Err(InterpreterError::type_error("unary -", "int", other)),
            },

            Exp::And(left, right) => {
                let (a, b) = self.bool_operands("&&", left, right)?;
                Ok(Eval::Bool(a && b))
            }
            Exp::Or(left, right) => {
                let (a, b) = self.bool_operands("||", left, right)?;
                Ok(Eval::Bool(a || b))
            }
            Exp::Not(operand) => match self.eval_expr(operand)? {
                Eval::Bool(b) => Ok(Eval::Bool(!b)),
                other => Err(InterpreterError::type_error("!", "bool", other)),
            },

            Exp::Equal(left, right) => {
                let a = self.eval_expr(left)?;
                let b = self.eval_expr(right)?;
                Ok(Eval::Bool(a == b))
            }

            Exp::If(cond, then_exp, else_exp) => {
                if self.eval_condition(cond, "conditional expression")? {
                    self.eval_expr(then_exp)
                } else {
                    self.eval_expr(else_exp)
                }
            }

            Exp::Deref(name) => {
                let location = self.stack.resolve_location(name)?;
                match self.stack.read(location)? {
                    Sval::Pointer(cell) => Ok(Eval::from(self.heap.read(cell)?)),
                    _ => Err(InterpreterError::NotAPointer { name: name.clone() }),
                }
            }

            Exp::Val(name) => {
                let location = self.stack.resolve_location(name)?;
                match self.stack.read(location)? {
                    Sval::Pointer(_) => {
                        Err(InterpreterError::PointerNotExpressible { name: name.clone() })
                    }
                    value => Eval::try_from(value),
                }
            }
        })
    }

    /// Evaluate a condition, which must produce a boolean
    pub(crate) fn eval_condition(&self, exp: &Exp, context: &str) -> Result<bool> {
        match self.eval_expr(exp)? {
            Eval::Bool(b) => Ok(b),
            other => Err(InterpreterError::type_error(context, "bool", other)),
        }
    }

    fn int_operands(&self, op: &str, left: &Exp, right: &Exp) -> Result<(i64, i64)> {
        match (self.eval_expr(left)?, self.eval_expr(right)?) {
            (Eval::Int(a), Eval::Int(b)) => Ok((a, b)),
            operands => Err(InterpreterError::type_error(op, "int operands", operands)),
        }
    }

    fn bool_operands(&self, op: &str, left: &Exp, right: &Exp) -> Result<(bool, bool)> {
        match (self.eval_expr(left)?, self.eval_expr(right)?) {
            (Eval::Bool(a), Eval::Bool(b)) => Ok((a, b)),
            operands => Err(InterpreterError::type_error(op, "bool operands", operands)),
        }
    }
}

fn overflow(operation: String) -> InterpreterError {
    InterpreterError::IntegerOverflow { operation }
}
