//! `while` loop execution.
//!
//! The loop runs iteratively: the condition is re-evaluated before every pass
//! and the body executes in the frame that was current when the loop started,
//! so a long-running loop never deepens the native stack.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::Result;
use crate::syntax::ast::{Com, Exp};
use crate::syntax::listing::node_key;

impl Interpreter {
    /// Runs `body` while `condition` is true.
    ///
    /// `com` is the loop itself. Returning to its head before each re-check
    /// marks it current again, so stepping through history shows every test
    /// of the condition.
    pub(crate) fn exec_while(&mut self, com: &Com, condition: &Exp, body: &Com) -> Result<()> {
        while self.eval_condition(condition, "while condition")? {
            self.exec_command(body)?;
            self.enter_command(node_key(com))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::config::InterpreterConfig;
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::errors::ErrorKind;
    use crate::syntax::ast::{Com, Decl, Exp};

    fn countdown(from: i64) -> Com {
        Com::block(
            vec![Decl::new("i", Exp::int(from))],
            vec![Com::while_do(
                Exp::not(Exp::equal(Exp::val("i"), Exp::int(0))),
                Com::block(
                    vec![],
                    vec![
                        Com::show(Exp::val("i")),
                        Com::assign("i", Exp::plus(Exp::val("i"), Exp::int(-1))),
                    ],
                ),
            )],
        )
    }

    #[test]
    fn test_loop_runs_until_condition_false() {
        let mut interp = Interpreter::new(countdown(3), InterpreterConfig::default());
        interp.run().unwrap();
        assert_eq!(interp.terminal().lines(), &["3", "2", "1"]);
    }

    #[test]
    fn test_false_condition_skips_body() {
        let mut interp = Interpreter::new(countdown(0), InterpreterConfig::default());
        interp.run().unwrap();
        assert!(interp.terminal().is_empty());
    }

    #[test]
    fn test_many_iterations_do_not_hit_depth_limit() {
        let config = InterpreterConfig::default().with_max_depth(4);
        let mut interp = Interpreter::new(countdown(10_000), config);
        interp.run().unwrap();
        assert_eq!(interp.terminal().len(), 10_000);
    }

    #[test]
    fn test_non_bool_condition() {
        let program = Com::block(
            vec![],
            vec![Com::while_do(Exp::int(1), Com::show(Exp::int(1)))],
        );
        let mut interp = Interpreter::new(program, InterpreterConfig::default());
        assert_eq!(interp.run().unwrap_err().kind(), ErrorKind::TypeError);
    }
}
