//! List construction and traversal.

use crate::errors::primitive_failure;
use crate::{Environment, EvalResult, Interpreter, Value};

fn expect_list<'a>(value: &'a Value, what: &str) -> Result<&'a [Value], String> {
    value
        .as_list()
        .ok_or_else(|| format!("{what} must be a list, got {}", value.type_name()))
}

pub(super) fn car(args: &[Value]) -> Result<Value, String> {
    let items = expect_list(&args[0], "argument")?;
    items
        .first()
        .cloned()
        .ok_or_else(|| "car of an empty list".to_string())
}

/// The empty list's rest is the empty list.
pub(super) fn cdr(args: &[Value]) -> Result<Value, String> {
    let items = expect_list(&args[0], "argument")?;
    Ok(Value::list(items.iter().skip(1).cloned().collect()))
}

pub(super) fn cons(args: &[Value]) -> Result<Value, String> {
    let tail = expect_list(&args[1], "second argument")?;
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(args[0].clone());
    items.extend_from_slice(tail);
    Ok(Value::list(items))
}

pub(super) fn list(args: &[Value]) -> Result<Value, String> {
    Ok(Value::list(args.to_vec()))
}

/// Element count of a list, character count of a string.
pub(super) fn length(args: &[Value]) -> Result<Value, String> {
    let len = match &args[0] {
        Value::List(items) => items.len(),
        Value::Str(s) => s.chars().count(),
        other => return Err(format!("cannot take the length of {}", other.type_name())),
    };
    i64::try_from(len)
        .map(Value::Int)
        .map_err(|_| "length out of range".to_string())
}

/// `(apply proc args)`
pub(super) fn apply(
    interpreter: &mut Interpreter,
    env: &Environment,
    args: &[Value],
) -> EvalResult {
    let callee = &args[0];
    if !callee.is_procedure() {
        return Err(primitive_failure(
            "apply",
            format!("cannot apply {}", callee.type_name()),
        ));
    }
    let call_args = expect_list(&args[1], "second argument")
        .map_err(|message| primitive_failure("apply", message))?;
    interpreter.apply(callee, call_args, env)
}

/// `(map proc list...)`: calls `proc` with the i-th element of every list,
/// stopping at the shortest list.
pub(super) fn map(interpreter: &mut Interpreter, env: &Environment, args: &[Value]) -> EvalResult {
    let (callee, lists) = (&args[0], &args[1..]);
    if !callee.is_procedure() {
        return Err(primitive_failure(
            "map",
            format!("cannot map with {}", callee.type_name()),
        ));
    }

    let lists = lists
        .iter()
        .map(|value| expect_list(value, "argument"))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|message| primitive_failure("map", message))?;
    let len = lists.iter().map(|items| items.len()).min().unwrap_or(0);

    let mut results = Vec::with_capacity(len);
    for i in 0..len {
        let call_args: Vec<Value> = lists.iter().map(|items| items[i].clone()).collect();
        results.push(interpreter.apply(callee, &call_args, env)?);
    }
    Ok(Value::list(results))
}
