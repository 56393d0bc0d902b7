// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end language tests: source text through every stage.

use lispy::{run, run_captured, run_in, ErrorKind, ErrorPhase, EvalConfig, Interpreter, Scoping};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> String {
    run(source)
        .unwrap_or_else(|e| panic!("{source} failed: {e}"))
        .to_string()
}

fn eval_with(scoping: Scoping, source: &str) -> String {
    let mut interpreter = Interpreter::builder().scoping(scoping).build();
    run_in(&mut interpreter, source)
        .unwrap_or_else(|e| panic!("{source} failed under {scoping:?}: {e}"))
        .to_string()
}

fn error_kind(source: &str) -> ErrorKind {
    run(source).expect_err(source).kind()
}

#[test]
fn addition() {
    assert_eq!(run("(+ 1 2)").unwrap(), lispy::Value::Int(3));
}

#[test]
fn define_then_branch() {
    assert_eq!(eval("(define x 5) (if (> x 3) 1 0)"), "1");
    assert_eq!(eval("(if (> 5 3) 1 0)"), "1");
}

#[test]
fn begin_returns_last_value() {
    assert_eq!(eval("(begin (define y 2) (* y y))"), "4");
}

#[test]
fn wrong_argument_count() {
    assert_eq!(error_kind("((lambda (a b) a) 1)"), ErrorKind::ArityMismatch);
}

#[test]
fn undefined_symbol() {
    let err = run("(foo)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnboundSymbol);
    assert_eq!(err.phase(), ErrorPhase::Runtime);
    assert_eq!(err.span(), Some(lispy::Span::new(1, 4)));
}

#[test]
fn definitions_inside_calls_stay_local() {
    for scoping in [Scoping::Lexical, Scoping::FlatCopy] {
        let mut interpreter = Interpreter::builder().scoping(scoping).build();
        run_in(
            &mut interpreter,
            "(define f (lambda (x) (begin (define inner (* x 2)) inner)))",
        )
        .unwrap();
        assert_eq!(run_in(&mut interpreter, "(f 21)").unwrap().to_string(), "42");
        let err = run_in(&mut interpreter, "(begin inner)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnboundSymbol, "{scoping:?}");
    }
}

#[test]
fn top_level_definitions_persist() {
    let mut interpreter = Interpreter::new();
    run_in(&mut interpreter, "(define answer 42)").unwrap();
    assert_eq!(run_in(&mut interpreter, "(+ answer 0)").unwrap().to_string(), "42");
}

#[test]
fn closures_capture_their_definition_environment() {
    let source = "
        (define make-counter-step (lambda (step) (lambda (n) (+ n step))))
        (define add5 (make-counter-step 5))
        (add5 10)";
    assert_eq!(eval_with(Scoping::Lexical, source), "15");

    let mut interpreter = Interpreter::builder().scoping(Scoping::FlatCopy).build();
    let err = run_in(&mut interpreter, source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnboundSymbol);
}

#[test]
fn recursive_programs() {
    let fib = "
        (define fib (lambda (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2))))))
        (fib 15)";
    assert_eq!(eval_with(Scoping::Lexical, fib), "610");
    assert_eq!(eval_with(Scoping::FlatCopy, fib), "610");
}

#[test]
fn higher_order_procedures() {
    assert_eq!(
        eval("(map (lambda (x) (* x 10)) (list 1 2 3))"),
        "(10 20 30)"
    );
    assert_eq!(
        eval(
            "(define compose (lambda (f g) (lambda (x) (f (g x)))))
             ((compose car cdr) (list 1 2 3))"
        ),
        "2"
    );
    assert_eq!(eval("(apply max (list 4 9 2))"), "9");
}

#[test]
fn list_processing() {
    let source = "
        (define sum (lambda (xs) (if (null? xs) 0 (+ (car xs) (sum (cdr xs))))))
        (sum (list 1 2 3 4))";
    assert_eq!(eval(source), "10");
    assert_eq!(eval("(cons \"a\" (list 1.5 nil))"), "(\"a\" 1.5 nil)");
}

#[test]
fn strings_and_floats() {
    assert_eq!(eval("(+ \"hello \" \"world\")"), "hello world");
    assert_eq!(eval("(begin \"two words\")"), "two words");
    assert_eq!(eval("(/ 1 4)"), "0.25");
    assert_eq!(eval("(* 1e20 10.0)"), "1000000000000000000000.0");
    assert_eq!(eval("(* 1.0 100000000000000000)"), "100000000000000000.0");
    assert_eq!(eval("(round 3.14159 3)"), "3.142");
}

#[test]
fn if_without_else_yields_nil() {
    assert_eq!(eval("(if (< 2 1) 1)"), "nil");
}

#[test]
fn only_false_is_falsy() {
    assert_eq!(eval("(if 0 1 2)"), "1");
    assert_eq!(eval("(if (list) 1 2)"), "1");
    assert_eq!(eval("(if nil 1 2)"), "1");
    assert_eq!(eval("(if (= 1 2) 1 2)"), "2");
}

#[test]
fn empty_program_yields_nil() {
    assert_eq!(eval(""), "nil");
    assert_eq!(eval("  \n\t"), "nil");
}

#[test]
fn syntax_errors() {
    let cases = [
        "(+ 1 2",
        ")",
        "(+ 1 \"open",
        "42",
        "()",
        "(lambda x x)",
        "(define 1 2)",
        "(if)",
        "(+ 1 99999999999999999999)",
    ];
    for source in cases {
        assert_eq!(error_kind(source), ErrorKind::Syntax, "{source}");
    }
}

#[test]
fn error_phases() {
    assert_eq!(run("(\"abc").unwrap_err().phase(), ErrorPhase::Lex);
    assert_eq!(run("(1 2").unwrap_err().phase(), ErrorPhase::Parse);
    assert_eq!(run("(1 2)").unwrap_err().phase(), ErrorPhase::Runtime);
}

#[test]
fn calling_a_non_procedure() {
    assert_eq!(error_kind("(1 2 3)"), ErrorKind::NotCallable);
    assert_eq!(error_kind("(\"f\" 1)"), ErrorKind::NotCallable);
}

#[test]
fn primitive_failures() {
    assert_eq!(error_kind("(car (list))"), ErrorKind::PrimitiveFailure);
    assert_eq!(error_kind("(/ 5 0)"), ErrorKind::PrimitiveFailure);
    assert_eq!(error_kind("(- \"a\" 1)"), ErrorKind::PrimitiveFailure);
}

#[test]
fn runaway_recursion_is_bounded_when_configured() {
    let output = run_captured(
        "(define loop (lambda (n) (loop n))) (loop 1)",
        EvalConfig::new().with_max_call_depth(200),
    );
    assert!(!output.success());
    assert_eq!(output.error_phase(), Some(ErrorPhase::Runtime));
    assert_eq!(
        output.result.unwrap_err().kind(),
        ErrorKind::ResourceExhausted
    );
}

#[test]
fn captured_output() {
    let output = run_captured(
        "(write-line \"start\")
         (map write-line (list 1 (list 2 \"x\")))
         (write-line 2.5)
         (+ 1 1)",
        EvalConfig::default(),
    );
    assert!(output.success());
    assert_eq!(output.output(), "2");
    assert_eq!(output.printed, "start\n1\n(2 \"x\")\n2.5\n");
}

#[test]
fn captured_output_survives_errors() {
    let output = run_captured("(write-line 1) (car (list))", EvalConfig::default());
    assert!(!output.success());
    assert_eq!(output.output(), "");
    assert_eq!(output.printed, "1\n");
}
