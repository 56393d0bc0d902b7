//! Equality, type predicates and negation.

use crate::Value;

pub(super) fn eq(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(args[0].is_identical(&args[1])))
}

pub(super) fn equal(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(args[0].structural_eq(&args[1])))
}

pub(super) fn not_equal(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(!args[0].structural_eq(&args[1])))
}

pub(super) fn is_list(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(matches!(args[0], Value::List(_))))
}

/// True only for the empty list.
pub(super) fn is_null(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(args[0].as_list().is_some_and(<[Value]>::is_empty)))
}

pub(super) fn is_procedure(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(args[0].is_procedure()))
}

/// Same truthiness as `if`: only `false` negates to `true`.
pub(super) fn not(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(!args[0].is_truthy()))
}
