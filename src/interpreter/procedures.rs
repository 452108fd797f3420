//! Procedure declaration and calls.
//!
//! A declaration binds a closure in the current frame. The closure remembers
//! that frame's index, and a call uses it as the new frame's static link, so
//! free identifiers in the body resolve at the declaration site rather than
//! at the caller.
//!
//! Actual parameters are evaluated in the caller's frame, left to right,
//! before the callee frame is pushed. A bare variable argument is passed as
//! its raw stored value, so passing a pointer variable shares its heap cell.

use crate::interpreter::errors::{InterpreterError, Result};
use crate::interpreter::Interpreter;
use crate::memory::stack::Frame;
use crate::memory::value::{Closure, Dval};
use crate::syntax::ast::{Com, Exp, Ide};
use std::rc::Rc;
use tracing::debug;

impl Interpreter {
    pub(crate) fn declare_procedure(
        &mut self,
        name: &str,
        params: &Rc<[Ide]>,
        body: &Rc<[Com]>,
    ) -> Result<()> {
        let index = self
            .stack
            .current_index()
            .ok_or_else(|| InterpreterError::NoActiveFrame {
                command: format!("proc {}", name),
            })?;

        let closure = Closure {
            params: Rc::clone(params),
            body: Rc::clone(body),
            defining_frame: index,
        };
        self.stack
            .frame_at_mut(index)
            .env
            .bind(name, Dval::Procedure(closure));

        debug!(procedure = name, frame = index, "declare procedure");
        Ok(())
    }

    pub(crate) fn call_procedure(&mut self, name: &str, args: &[Exp]) -> Result<()> {
        let closure = match self.stack.resolve(name)? {
            Dval::Procedure(closure) => closure,
            _ => {
                return Err(InterpreterError::NotCallable {
                    name: name.to_string(),
                })
            }
        };

        if args.len() != closure.params.len() {
            return Err(InterpreterError::ArgumentCountMismatch {
                procedure: name.to_string(),
                expected: closure.params.len(),
                got: args.len(),
            });
        }

        let values = args
            .iter()
            .map(|arg| self.storable_operand(arg))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            procedure = name,
            args = values.len(),
            static_link = closure.defining_frame,
            "call"
        );

        self.with_frame(Frame::new(Some(closure.defining_frame)), |this, index| {
            let frame = this.stack.frame_at_mut(index);
            for (param, value) in closure.params.iter().zip(values) {
                frame.declare(index, param, value);
            }
            this.exec_commands(&closure.body)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::config::InterpreterConfig;
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::errors::{ErrorKind, InterpreterError};
    use crate::syntax::ast::{Com, Decl, Exp};
    use pretty_assertions::assert_eq;

    fn run(program: Com) -> (Vec<String>, Result<(), InterpreterError>) {
        let mut interp = Interpreter::new(program, InterpreterConfig::default());
        let result = interp.run();
        (interp.terminal().lines().to_vec(), result)
    }

    #[test]
    fn test_parameters_bind_positionally() {
        let program = Com::block(
            vec![],
            vec![
                Com::procedure(
                    "sub",
                    ["a", "b"],
                    vec![Com::show(Exp::plus(Exp::val("a"), Exp::minus(Exp::val("b"))))],
                ),
                Com::call("sub", vec![Exp::int(10), Exp::int(3)]),
            ],
        );
        assert_eq!(run(program), (vec!["7".to_string()], Ok(())));
    }

    #[test]
    fn test_static_scoping() {
        // The body sees the x declared next to the procedure, not the caller's x
        let program = Com::block(
            vec![Decl::new("x", Exp::int(1))],
            vec![
                Com::procedure("p", Vec::<&str>::new(), vec![Com::show(Exp::val("x"))]),
                Com::block(
                    vec![Decl::new("x", Exp::int(2))],
                    vec![Com::call("p", vec![])],
                ),
            ],
        );
        assert_eq!(run(program).0, vec!["1"]);
    }

    #[test]
    fn test_recursion_through_static_link() {
        // p(n) shows n and recurses on n - 1 until 0
        let program = Com::block(
            vec![],
            vec![
                Com::procedure(
                    "p",
                    ["n"],
                    vec![Com::if_else(
                        Exp::equal(Exp::val("n"), Exp::int(0)),
                        Com::block(vec![], vec![]),
                        Com::block(
                            vec![],
                            vec![
                                Com::show(Exp::val("n")),
                                Com::call("p", vec![Exp::plus(Exp::val("n"), Exp::int(-1))]),
                            ],
                        ),
                    )],
                ),
                Com::call("p", vec![Exp::int(3)]),
            ],
        );
        assert_eq!(run(program).0, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_unbounded_recursion_hits_limit() {
        let program = Com::block(
            vec![],
            vec![
                Com::procedure("p", Vec::<&str>::new(), vec![Com::call("p", vec![])]),
                Com::call("p", vec![]),
            ],
        );
        let config = InterpreterConfig::default().with_max_depth(32);
        let mut interp = Interpreter::new(program, config);
        assert_eq!(
            interp.run(),
            Err(InterpreterError::RecursionLimit { limit: 32 })
        );
        assert!(interp.stack().is_empty());
    }

    #[test]
    fn test_argument_count_mismatch() {
        let program = Com::block(
            vec![],
            vec![
                Com::procedure("p", ["a"], vec![]),
                Com::call("p", vec![Exp::int(1), Exp::int(2)]),
            ],
        );
        assert_eq!(
            run(program).1,
            Err(InterpreterError::ArgumentCountMismatch {
                procedure: "p".to_string(),
                expected: 1,
                got: 2
            })
        );
    }

    #[test]
    fn test_call_on_variable() {
        let program = Com::block(
            vec![Decl::new("x", Exp::int(1))],
            vec![Com::call("x", vec![])],
        );
        assert_eq!(run(program).1.unwrap_err().kind(), ErrorKind::NotCallable);
    }

    #[test]
    fn test_declare_without_frame() {
        let program = Com::procedure("p", Vec::<&str>::new(), vec![]);
        assert_eq!(run(program).1.unwrap_err().kind(), ErrorKind::NoActiveFrame);
    }
}
