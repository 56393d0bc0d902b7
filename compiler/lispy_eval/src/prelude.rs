//! The base environment: primitive procedures installed into every new
//! global environment.

mod lists;
mod numeric;
mod predicates;

use crate::{Arity, Environment, EvalResult, Interpreter, Primitive, Value};

/// Every base primitive, in installation order.
pub static PRIMITIVES: &[Primitive] = &[
    Primitive::pure("+", Arity::Exact(2), numeric::add),
    Primitive::pure("-", Arity::Exact(2), numeric::sub),
    Primitive::pure("*", Arity::Exact(2), numeric::mul),
    Primitive::pure("/", Arity::Exact(2), numeric::div),
    Primitive::pure(">", Arity::Exact(2), numeric::gt),
    Primitive::pure(">=", Arity::Exact(2), numeric::ge),
    Primitive::pure("<", Arity::Exact(2), numeric::lt),
    Primitive::pure("<=", Arity::Exact(2), numeric::le),
    Primitive::pure("=", Arity::Exact(2), predicates::equal),
    Primitive::pure("!=", Arity::Exact(2), predicates::not_equal),
    Primitive::pure("abs", Arity::Exact(1), numeric::abs),
    Primitive::pure("round", Arity::Between(1, 2), numeric::round),
    Primitive::pure("max", Arity::AtLeast(1), numeric::max),
    Primitive::pure("min", Arity::AtLeast(1), numeric::min),
    Primitive::pure("append", Arity::Exact(2), numeric::add),
    Primitive::pure("car", Arity::Exact(1), lists::car),
    Primitive::pure("cdr", Arity::Exact(1), lists::cdr),
    Primitive::pure("cons", Arity::Exact(2), lists::cons),
    Primitive::pure("list", Arity::AtLeast(0), lists::list),
    Primitive::pure("length", Arity::Exact(1), lists::length),
    Primitive::host("apply", Arity::Exact(2), lists::apply),
    Primitive::host("map", Arity::AtLeast(2), lists::map),
    Primitive::pure("eq?", Arity::Exact(2), predicates::eq),
    Primitive::pure("equal?", Arity::Exact(2), predicates::equal),
    Primitive::pure("list?", Arity::Exact(1), predicates::is_list),
    Primitive::pure("null?", Arity::Exact(1), predicates::is_null),
    Primitive::pure("procedure?", Arity::Exact(1), predicates::is_procedure),
    Primitive::pure("not", Arity::Exact(1), predicates::not),
    Primitive::host("write-line", Arity::Exact(1), write_line),
];

/// Bind every primitive, plus `nil`, in `env`.
pub fn install_prelude(env: &Environment) {
    for primitive in PRIMITIVES {
        env.define(primitive.name(), Value::Primitive(primitive));
    }
    env.define("nil", Value::Nil);
}

fn write_line(interpreter: &mut Interpreter, _env: &Environment, args: &[Value]) -> EvalResult {
    interpreter.print_handler().println(&args[0].to_string());
    Ok(Value::Nil)
}
