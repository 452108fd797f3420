use blockimp::memory::value::Eval;
use blockimp::syntax::ast::{Com, Exp};
use blockimp::{ErrorKind, Interpreter, InterpreterConfig};

fn eval(exp: Exp) -> Result<Eval, ErrorKind> {
    let interpreter = Interpreter::new(Com::block(vec![], vec![]), InterpreterConfig::default());
    interpreter.eval_expr(&exp).map_err(|e| e.kind())
}

#[test]
fn test_integer_semantics() {
    assert_eq!(eval(Exp::plus(Exp::int(2), Exp::int(3))), Ok(Eval::Int(5)));
    assert_eq!(eval(Exp::mult(Exp::int(6), Exp::int(7))), Ok(Eval::Int(42)));
    assert_eq!(eval(Exp::minus(Exp::int(8))), Ok(Eval::Int(-8)));
    assert_eq!(
        eval(Exp::plus(Exp::mult(Exp::int(2), Exp::int(3)), Exp::minus(Exp::int(1)))),
        Ok(Eval::Int(5))
    );
}

#[test]
fn test_boolean_semantics() {
    assert_eq!(eval(Exp::and(Exp::bool(true), Exp::bool(false))), Ok(Eval::Bool(false)));
    assert_eq!(eval(Exp::or(Exp::bool(true), Exp::bool(false))), Ok(Eval::Bool(true)));
    assert_eq!(eval(Exp::not(Exp::bool(false))), Ok(Eval::Bool(true)));
}

#[test]
fn test_equality() {
    assert_eq!(eval(Exp::equal(Exp::int(3), Exp::int(3))), Ok(Eval::Bool(true)));
    assert_eq!(eval(Exp::equal(Exp::bool(true), Exp::bool(false))), Ok(Eval::Bool(false)));
    assert_eq!(eval(Exp::equal(Exp::int(1), Exp::bool(true))), Ok(Eval::Bool(false)));
}

#[test]
fn test_conditional_expression() {
    let exp = Exp::cond(
        Exp::equal(Exp::int(1), Exp::int(2)),
        Exp::int(10),
        Exp::int(20),
    );
    assert_eq!(eval(exp), Ok(Eval::Int(20)));
}

#[test]
fn test_checked_arithmetic() {
    assert_eq!(
        eval(Exp::mult(Exp::int(i64::MAX), Exp::int(2))),
        Err(ErrorKind::IntegerOverflow)
    );
    assert_eq!(
        eval(Exp::plus(Exp::int(i64::MIN), Exp::int(-1))),
        Err(ErrorKind::IntegerOverflow)
    );
}

#[test]
fn test_mismatched_operands() {
    assert_eq!(eval(Exp::mult(Exp::bool(true), Exp::int(2))), Err(ErrorKind::TypeError));
    assert_eq!(eval(Exp::or(Exp::int(0), Exp::bool(false))), Err(ErrorKind::TypeError));
}

#[test]
fn test_unbound_names_outside_any_frame() {
    assert_eq!(eval(Exp::val("x")), Err(ErrorKind::NameNotFound));
    assert_eq!(eval(Exp::deref("p")), Err(ErrorKind::NameNotFound));
}

#[test]
fn test_deep_expression_tree() {
    let mut exp = Exp::int(0);
    for _ in 0..10_000 {
        exp = Exp::plus(exp, Exp::int(1));
    }
    assert_eq!(eval(exp), Ok(Eval::Int(10_000)));
}
