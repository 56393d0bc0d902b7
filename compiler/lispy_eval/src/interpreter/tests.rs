use super::*;
use crate::{buffer_handler, Arity};
use lispy_ir::ErrorKind;
use lispy_lexer::tokenize;
use lispy_parse::parse_all;
use pretty_assertions::assert_eq;

fn run_in(interpreter: &mut Interpreter, source: &str) -> EvalResult {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => panic!("tokenize({source:?}) failed: {e}"),
    };
    let forms = match parse_all(&tokens) {
        Ok(forms) => forms,
        Err(e) => panic!("parse({source:?}) failed: {e}"),
    };
    interpreter.eval_program(&forms)
}

fn run(source: &str) -> EvalResult {
    run_in(&mut Interpreter::new(), source)
}

fn run_flat(source: &str) -> EvalResult {
    run_in(
        &mut Interpreter::builder().scoping(Scoping::FlatCopy).build(),
        source,
    )
}

fn error_kind(result: EvalResult) -> Option<ErrorKind> {
    result.err().map(|e| e.kind())
}

// Literals and symbols

#[test]
fn test_literals_evaluate_to_themselves() {
    assert_eq!(run("(begin 42)"), Ok(Value::Int(42)));
    assert_eq!(run("(begin 2.5)"), Ok(Value::Float(2.5)));
    assert_eq!(run("(begin \"hi\")"), Ok(Value::string("hi")));
}

#[test]
fn test_symbol_lookup() {
    assert_eq!(run("(begin nil)"), Ok(Value::Nil));
    assert_eq!(
        run("(begin foo)"),
        Err(EvalError::UnboundSymbol {
            name: "foo".to_string(),
            span: Span::new(7, 10),
        })
    );
}

// Application

#[test]
fn test_primitive_application() {
    assert_eq!(run("(+ 1 2)"), Ok(Value::Int(3)));
    assert_eq!(run("(* (+ 1 2) (- 10 4))"), Ok(Value::Int(18)));
}

#[test]
fn test_unbound_head() {
    assert_eq!(error_kind(run("(foo)")), Some(ErrorKind::UnboundSymbol));
}

#[test]
fn test_not_callable_head() {
    assert_eq!(
        run("(1 2 3)"),
        Err(EvalError::NotCallable {
            type_name: "integer",
            span: Span::new(1, 2),
        })
    );
}

#[test]
fn test_not_callable_is_reported_before_arguments_run() {
    // `undefined` would be an unbound-symbol error if arguments ran first.
    assert_eq!(
        error_kind(run("(\"text\" undefined)")),
        Some(ErrorKind::NotCallable)
    );
}

#[test]
fn test_empty_list_is_malformed() {
    assert_eq!(error_kind(run("()")), Some(ErrorKind::Syntax));
}

// Special forms

#[test]
fn test_if_branches() {
    assert_eq!(run("(if (> 5 3) 1 0)"), Ok(Value::Int(1)));
    assert_eq!(run("(if (< 5 3) 1 0)"), Ok(Value::Int(0)));
}

#[test]
fn test_if_without_else_yields_nil() {
    assert_eq!(run("(if (< 5 3) 1)"), Ok(Value::Nil));
}

#[test]
fn test_if_only_false_is_false() {
    assert_eq!(run("(if 0 1 2)"), Ok(Value::Int(1)));
    assert_eq!(run("(if nil 1 2)"), Ok(Value::Int(1)));
    assert_eq!(run("(if (list) 1 2)"), Ok(Value::Int(1)));
}

#[test]
fn test_if_does_not_evaluate_other_branch() {
    assert_eq!(run("(if (= 1 1) 1 (undefined))"), Ok(Value::Int(1)));
}

#[test]
fn test_malformed_if() {
    assert_eq!(error_kind(run("(if)")), Some(ErrorKind::Syntax));
    assert_eq!(error_kind(run("(if 1 2 3 4)")), Some(ErrorKind::Syntax));
}

#[test]
fn test_define_then_use() {
    assert_eq!(run("(define x 5) (if (> x 3) 1 0)"), Ok(Value::Int(1)));
}

#[test]
fn test_define_yields_nil() {
    assert_eq!(run("(define x 5)"), Ok(Value::Nil));
}

#[test]
fn test_malformed_define() {
    assert_eq!(
        run("(define 1 2)"),
        Err(EvalError::MalformedForm {
            form: "define",
            reason: "name must be a symbol",
            span: Span::new(8, 9),
        })
    );
    assert_eq!(error_kind(run("(define x)")), Some(ErrorKind::Syntax));
}

#[test]
fn test_begin_returns_last_value() {
    assert_eq!(run("(begin (define y 2) (* y y))"), Ok(Value::Int(4)));
    assert_eq!(run("(begin)"), Ok(Value::Nil));
}

#[test]
fn test_special_form_names_are_not_looked_up() {
    let mut interpreter = Interpreter::new();
    interpreter.global().define("if", Value::Int(0));
    assert_eq!(run_in(&mut interpreter, "(if 1 2 3)"), Ok(Value::Int(2)));
}

#[test]
fn test_special_form_names_round_trip() {
    for form in [
        SpecialForm::Lambda,
        SpecialForm::If,
        SpecialForm::Define,
        SpecialForm::Begin,
    ] {
        assert_eq!(SpecialForm::from_name(form.name()), Some(form));
    }
    assert_eq!(SpecialForm::from_name("let"), None);
}

#[test]
fn test_malformed_forms_name_their_head() {
    let Err(EvalError::MalformedForm { form, .. }) = run("(lambda (a a) a)") else {
        panic!("expected a malformed lambda");
    };
    assert_eq!(form, "lambda");
    let Err(EvalError::MalformedForm { form, .. }) = run("(if)") else {
        panic!("expected a malformed if");
    };
    assert_eq!(form, "if");
}

#[test]
fn test_lambda_creates_closure() {
    let value = run("(lambda (a b) (+ a b))");
    assert_eq!(value.map(|v| v.to_string()), Ok("<lambda (a b)>".to_string()));
}

#[test]
fn test_lambda_application() {
    assert_eq!(run("((lambda (a b) (+ a b)) 3 4)"), Ok(Value::Int(7)));
    assert_eq!(run("((lambda () 9))"), Ok(Value::Int(9)));
}

#[test]
fn test_malformed_lambda() {
    assert_eq!(error_kind(run("(lambda x x)")), Some(ErrorKind::Syntax));
    assert_eq!(error_kind(run("(lambda (1) 1)")), Some(ErrorKind::Syntax));
    assert_eq!(error_kind(run("(lambda (a a) a)")), Some(ErrorKind::Syntax));
    assert_eq!(error_kind(run("(lambda (a))")), Some(ErrorKind::Syntax));
}

#[test]
fn test_closure_arity_mismatch() {
    assert_eq!(
        run("((lambda (a b) a) 1)"),
        Err(EvalError::ArityMismatch {
            callee: "lambda".to_string(),
            expected: Arity::Exact(2),
            got: 1,
        })
    );
}

#[test]
fn test_recursion() {
    let source = "
        (define fact (lambda (n) (if (< n 2) 1 (* n (fact (- n 1))))))
        (fact 10)";
    assert_eq!(run(source), Ok(Value::Int(3_628_800)));
    assert_eq!(run_flat(source), Ok(Value::Int(3_628_800)));
}

// Scoping

#[test]
fn test_define_inside_call_is_not_visible_after_return() {
    let source = "
        (define f (lambda () (begin (define inner 1) inner)))
        (f)
        (begin inner)";
    assert_eq!(error_kind(run(source)), Some(ErrorKind::UnboundSymbol));
    assert_eq!(error_kind(run_flat(source)), Some(ErrorKind::UnboundSymbol));
}

#[test]
fn test_top_level_define_is_visible_to_later_forms() {
    let mut interpreter = Interpreter::new();
    assert_eq!(run_in(&mut interpreter, "(define x 5)"), Ok(Value::Nil));
    assert_eq!(run_in(&mut interpreter, "(+ x 1)"), Ok(Value::Int(6)));
    assert!(interpreter.global().contains("x"));
}

#[test]
fn test_closure_sees_later_global_definitions() {
    let source = "
        (define f (lambda () later))
        (define later 7)
        (f)";
    assert_eq!(run(source), Ok(Value::Int(7)));
    assert_eq!(run_flat(source), Ok(Value::Int(7)));
}

#[test]
fn test_lexical_closure_keeps_captured_parameters() {
    let source = "
        (define make-adder (lambda (x) (lambda (y) (+ x y))))
        (define add5 (make-adder 5))
        (add5 1)";
    assert_eq!(run(source), Ok(Value::Int(6)));
    // A flat copy of the call site has no `x`.
    assert_eq!(error_kind(run_flat(source)), Some(ErrorKind::UnboundSymbol));
}

#[test]
fn test_flat_copy_resolves_free_names_at_call_site() {
    let source = "
        (define show (lambda () x))
        (define x 1)
        (define call-with-x (lambda (x) (show)))
        (call-with-x 2)";
    assert_eq!(run(source), Ok(Value::Int(1)));
    assert_eq!(run_flat(source), Ok(Value::Int(2)));
}

#[test]
fn test_call_frame_does_not_leak_parameters() {
    let source = "
        (define id (lambda (p) p))
        (id 1)
        (begin p)";
    assert_eq!(error_kind(run(source)), Some(ErrorKind::UnboundSymbol));
}

// Configuration

#[test]
fn test_call_depth_limit() {
    let mut interpreter = Interpreter::builder().max_call_depth(50).build();
    let source = "
        (define down (lambda (n) (if (= n 0) 0 (down (- n 1)))))
        (down 100)";
    assert_eq!(
        run_in(&mut interpreter, source),
        Err(EvalError::DepthExceeded { limit: 50 })
    );
    assert_eq!(run_in(&mut interpreter, "(down 40)"), Ok(Value::Int(0)));
}

#[test]
fn test_deep_recursion_without_limit() {
    let source = "
        (define down (lambda (n) (if (= n 0) 0 (down (- n 1)))))
        (down 20000)";
    assert_eq!(run(source), Ok(Value::Int(0)));
}

#[test]
fn test_without_prelude() {
    let mut interpreter = Interpreter::builder().without_prelude().build();
    assert_eq!(error_kind(run_in(&mut interpreter, "(+ 1 2)")), Some(ErrorKind::UnboundSymbol));
}

#[test]
fn test_custom_environment_and_config() {
    let env = Environment::new();
    env.define("answer", Value::Int(42));
    let config = EvalConfig::new().with_scoping(Scoping::FlatCopy);
    let mut interpreter = Interpreter::builder().env(env.clone()).config(config).build();
    assert_eq!(run_in(&mut interpreter, "(+ answer 0)"), Ok(Value::Int(42)));
    assert!(interpreter.global().ptr_eq(&env));
    assert_eq!(interpreter.config().scoping, Scoping::FlatCopy);
}

#[test]
fn test_write_line_goes_to_print_handler() {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder().print_handler(handler.clone()).build();
    let result = run_in(
        &mut interpreter,
        "(begin (write-line \"hello\") (write-line (list 1 \"a\")) (write-line 2.0))",
    );
    assert_eq!(result, Ok(Value::Nil));
    assert_eq!(handler.get_output(), "hello\n(1 \"a\")\n2.0\n");
}

#[test]
fn test_eval_program_of_no_forms() {
    assert_eq!(Interpreter::new().eval_program(&[]), Ok(Value::Nil));
}
