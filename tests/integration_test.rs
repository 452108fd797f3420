// Integration tests for the interpreter

use blockimp::syntax::ast::{Com, Decl, Exp};
use blockimp::syntax::programs;
use blockimp::{ErrorKind, Interpreter, InterpreterConfig, InterpreterError};
use pretty_assertions::assert_eq;

/// Run a program with default settings; returns its output, result and final interpreter
fn run(program: Com) -> (Vec<String>, Result<(), InterpreterError>, Interpreter) {
    run_with(program, InterpreterConfig::default())
}

fn run_with(
    program: Com,
    config: InterpreterConfig,
) -> (Vec<String>, Result<(), InterpreterError>, Interpreter) {
    let mut interpreter = Interpreter::new(program, config);
    let result = interpreter.run();
    (interpreter.terminal().lines().to_vec(), result, interpreter)
}

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_counter_program() {
    let (output, result, interpreter) = run(programs::counter());

    assert_eq!(result, Ok(()));
    assert_eq!(
        output,
        lines(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "10"])
    );
    assert!(interpreter.stack().is_empty());
    // x and w were never freed
    assert_eq!(interpreter.heap().allocated_count(), 2);
}

#[test]
fn test_interpret_entry_point() {
    assert_eq!(blockimp::interpret(programs::scalars()), Ok(()));
    assert_eq!(
        blockimp::interpret(Com::show(Exp::val("x"))).unwrap_err().kind(),
        ErrorKind::NameNotFound
    );
}

#[test]
fn test_bundled_programs() {
    let expected: &[(&str, &[&str])] = &[
        ("pointers", &["10", "15"]),
        ("scalars", &["42", "true"]),
        ("scoping", &["1"]),
        ("by_value", &["6", "5"]),
    ];

    for (name, want) in expected {
        let program = programs::by_name(name).unwrap();
        let (output, result, _) = run(program);
        assert_eq!(result, Ok(()), "program {}", name);
        assert_eq!(output, lines(want), "program {}", name);
    }
    assert!(programs::by_name("missing").is_none());
    assert_eq!(programs::names().count(), programs::DEMOS.len());
}

#[test]
fn test_exhaustion_program() {
    let (output, result, interpreter) = run(programs::exhaustion());

    assert_eq!(result, Err(InterpreterError::HeapOverflow { capacity: 100 }));
    assert_eq!(output.len(), 100);
    assert_eq!(output.last().map(String::as_str), Some("100"));
    assert_eq!(interpreter.heap().free_count(), 0);
    assert!(interpreter.stack().is_empty());
    assert_eq!(interpreter.error().map(InterpreterError::kind), Some(ErrorKind::HeapOverflow));
}

#[test]
fn test_shadowing() {
    // Inner block sees its own x; a sibling block sees the outer x
    let program = Com::block(
        vec![Decl::new("x", Exp::int(1))],
        vec![
            Com::block(
                vec![Decl::new("x", Exp::int(2))],
                vec![Com::show(Exp::val("x")), Com::assign("x", Exp::int(3))],
            ),
            Com::block(vec![], vec![Com::show(Exp::val("x"))]),
            Com::show(Exp::val("x")),
        ],
    );
    let (output, result, _) = run(program);
    assert_eq!(result, Ok(()));
    assert_eq!(output, lines(&["2", "1", "1"]));
}

#[test]
fn test_redeclaration_in_same_block_shadows() {
    let program = Com::block(
        vec![Decl::new("x", Exp::int(1)), Decl::new("x", Exp::bool(false))],
        vec![Com::show(Exp::val("x"))],
    );
    assert_eq!(run(program).0, lines(&["false"]));
}

#[test]
fn test_lexical_scoping() {
    let program = Com::block(
        vec![Decl::new("y", Exp::int(1))],
        vec![
            Com::procedure("p", Vec::<&str>::new(), vec![Com::show(Exp::val("y"))]),
            Com::block(
                vec![Decl::new("y", Exp::int(2))],
                vec![Com::block(vec![], vec![Com::call("p", vec![])])],
            ),
        ],
    );
    assert_eq!(run(program).0, lines(&["1"]));
}

#[test]
fn test_procedure_writes_enclosing_variable() {
    let program = Com::block(
        vec![Decl::new("total", Exp::int(0))],
        vec![
            Com::procedure(
                "add",
                ["n"],
                vec![Com::assign("total", Exp::plus(Exp::val("total"), Exp::val("n")))],
            ),
            Com::call("add", vec![Exp::int(4)]),
            Com::call("add", vec![Exp::int(5)]),
            Com::show(Exp::val("total")),
        ],
    );
    assert_eq!(run(program).0, lines(&["9"]));
}

#[test]
fn test_pointer_lifecycle() {
    let program = Com::block(
        vec![],
        vec![
            Com::new_pointer("i", Exp::int(10)),
            Com::show(Exp::deref("i")),
            Com::update_pointer("i", Exp::int(15)),
            Com::show(Exp::deref("i")),
            Com::destroy_pointer("i"),
            Com::show(Exp::deref("i")),
        ],
    );
    let (output, result, _) = run(program);
    assert_eq!(output, lines(&["10", "15"]));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidHeapAccess);

    let program = Com::block(
        vec![],
        vec![
            Com::new_pointer("i", Exp::int(10)),
            Com::destroy_pointer("i"),
            Com::update_pointer("i", Exp::int(1)),
        ],
    );
    assert_eq!(run(program).1.unwrap_err().kind(), ErrorKind::InvalidHeapAccess);
}

#[test]
fn test_heap_exhaustion_and_reuse() {
    let config = InterpreterConfig::default().with_heap_size(2);

    let program = Com::block(
        vec![],
        vec![
            Com::new_pointer("a", Exp::int(1)),
            Com::new_pointer("b", Exp::int(2)),
            Com::new_pointer("c", Exp::int(3)),
        ],
    );
    let (_, result, _) = run_with(program, config.clone());
    assert_eq!(result, Err(InterpreterError::HeapOverflow { capacity: 2 }));

    let program = Com::block(
        vec![],
        vec![
            Com::new_pointer("a", Exp::int(1)),
            Com::new_pointer("b", Exp::int(2)),
            Com::destroy_pointer("a"),
            Com::new_pointer("c", Exp::int(3)),
            Com::show(Exp::deref("c")),
            Com::show(Exp::deref("b")),
        ],
    );
    let (output, result, interpreter) = run_with(program, config);
    assert_eq!(result, Ok(()));
    assert_eq!(output, lines(&["3", "2"]));
    // c reused a's cell, so a now aliases c
    assert_eq!(interpreter.heap().allocated_count(), 2);
}

#[test]
fn test_call_by_value_isolation() {
    let program = Com::block(
        vec![Decl::new("a", Exp::int(5))],
        vec![
            Com::procedure("set", ["n"], vec![Com::assign("n", Exp::int(99))]),
            Com::call("set", vec![Exp::val("a")]),
            Com::show(Exp::val("a")),
        ],
    );
    assert_eq!(run(program).0, lines(&["5"]));
}

#[test]
fn test_pointer_parameter_aliases_heap_cell() {
    let program = Com::block(
        vec![],
        vec![
            Com::new_pointer("p", Exp::int(1)),
            Com::procedure("bump", ["q"], vec![Com::update_pointer("q", Exp::int(2))]),
            Com::call("bump", vec![Exp::val("p")]),
            Com::show(Exp::deref("p")),
        ],
    );
    assert_eq!(run(program).0, lines(&["2"]));
}

#[test]
fn test_pointer_not_expressible() {
    let program = Com::block(
        vec![],
        vec![
            Com::new_pointer("p", Exp::int(1)),
            Com::show(Exp::plus(Exp::val("p"), Exp::int(1))),
        ],
    );
    assert_eq!(
        run(program).1,
        Err(InterpreterError::PointerNotExpressible {
            name: "p".to_string()
        })
    );
}

#[test]
fn test_new_pointer_at_top_level() {
    let (_, result, interpreter) = run(Com::new_pointer("p", Exp::int(1)));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::NoActiveFrame);
    assert_eq!(interpreter.heap().allocated_count(), 0);
}

#[test]
fn test_output_stops_at_first_error() {
    let program = Com::block(
        vec![],
        vec![
            Com::show(Exp::int(1)),
            Com::show(Exp::not(Exp::int(1))),
            Com::show(Exp::int(2)),
        ],
    );
    let (output, result, interpreter) = run(program);
    assert_eq!(output, lines(&["1"]));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::TypeError);
    assert!(interpreter.stack().is_empty());
}

#[test]
fn test_error_messages() {
    let program = Com::block(vec![], vec![Com::call("nowhere", vec![])]);
    let err = run(program).1.unwrap_err();
    assert_eq!(err.to_string(), "Name 'nowhere' not found");
}

#[test]
fn test_second_run_starts_fresh() {
    // The only heap cell is still allocated when the first run ends
    let program = Com::block(
        vec![],
        vec![Com::new_pointer("p", Exp::int(1)), Com::show(Exp::deref("p"))],
    );
    let mut interpreter = Interpreter::new(program, InterpreterConfig::default().with_heap_size(1));

    assert_eq!(interpreter.run(), Ok(()));
    assert_eq!(interpreter.heap().allocated_count(), 1);

    assert_eq!(interpreter.run(), Ok(()));
    assert_eq!(interpreter.terminal().lines(), lines(&["1"]).as_slice());
    assert_eq!(interpreter.heap().allocated_count(), 1);
    assert!(interpreter.stack().is_empty());
}

#[test]
fn test_rerun_after_failure() {
    let mut failing = Interpreter::new(
        Com::block(vec![], vec![Com::show(Exp::val("missing"))]),
        InterpreterConfig::default(),
    );
    assert!(failing.run().is_err());
    assert!(failing.run().is_err());
    assert_eq!(failing.error().map(InterpreterError::kind), Some(ErrorKind::NameNotFound));
    assert!(failing.terminal().is_empty());
}

#[test]
fn test_oversized_heap_request_is_capped() {
    use blockimp::interpreter::constants::MAX_HEAP_SIZE;

    let config = InterpreterConfig::default().with_heap_size(usize::MAX / 2);
    let (output, result, interpreter) = run_with(programs::pointers(), config);
    assert_eq!(result, Ok(()));
    assert_eq!(output, lines(&["10", "15"]));
    assert_eq!(interpreter.heap().capacity(), MAX_HEAP_SIZE);
}
