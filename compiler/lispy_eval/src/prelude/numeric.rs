//! Arithmetic, ordering, and the number-shaped helpers behind them.
//!
//! Integer arithmetic is checked; mixing an integer with a float yields a
//! float. `/` always divides as floats.

use std::cmp::Ordering;

use crate::Value;

#[derive(Copy, Clone)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn of(value: &Value) -> Option<Num> {
        match value {
            Value::Int(i) => Some(Num::Int(*i)),
            Value::Float(f) => Some(Num::Float(*f)),
            _ => None,
        }
    }

    #[expect(clippy::cast_precision_loss, reason = "int to float promotion")]
    fn to_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
        }
    }
}

fn type_error(op: &str, a: &Value, b: &Value) -> String {
    format!("cannot {op} {} and {}", a.type_name(), b.type_name())
}

fn arith(
    op: &str,
    args: &[Value],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, String> {
    let (a, b) = (&args[0], &args[1]);
    match (Num::of(a), Num::of(b)) {
        (Some(Num::Int(x)), Some(Num::Int(y))) => int_op(x, y)
            .map(Value::Int)
            .ok_or_else(|| "integer overflow".to_string()),
        (Some(x), Some(y)) => Ok(Value::Float(float_op(x.to_f64(), y.to_f64()))),
        _ => Err(type_error(op, a, b)),
    }
}

/// `+` and `append`: numbers add, strings and lists concatenate.
pub(super) fn add(args: &[Value]) -> Result<Value, String> {
    match (&args[0], &args[1]) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::string(&format!("{a}{b}"))),
        (Value::List(a), Value::List(b)) => {
            Ok(Value::list(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => arith("add", args, i64::checked_add, |x, y| x + y),
    }
}

pub(super) fn sub(args: &[Value]) -> Result<Value, String> {
    arith("subtract", args, i64::checked_sub, |x, y| x - y)
}

pub(super) fn mul(args: &[Value]) -> Result<Value, String> {
    arith("multiply", args, i64::checked_mul, |x, y| x * y)
}

pub(super) fn div(args: &[Value]) -> Result<Value, String> {
    let (a, b) = (&args[0], &args[1]);
    let (Some(x), Some(y)) = (Num::of(a), Num::of(b)) else {
        return Err(type_error("divide", a, b));
    };
    let divisor = y.to_f64();
    if divisor == 0.0 {
        return Err("division by zero".to_string());
    }
    Ok(Value::Float(x.to_f64() / divisor))
}

/// Ordering between two numbers or two strings. `None` for unordered
/// floats (NaN).
fn compare(a: &Value, b: &Value) -> Result<Option<Ordering>, String> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(Some(x.cmp(y))),
        (Value::Str(x), Value::Str(y)) => Ok(Some(x.cmp(y))),
        _ => match (Num::of(a), Num::of(b)) {
            (Some(x), Some(y)) => Ok(x.to_f64().partial_cmp(&y.to_f64())),
            _ => Err(type_error("compare", a, b)),
        },
    }
}

fn ordered(args: &[Value], accept: fn(Ordering) -> bool) -> Result<Value, String> {
    let ordering = compare(&args[0], &args[1])?;
    Ok(Value::Bool(ordering.is_some_and(accept)))
}

pub(super) fn gt(args: &[Value]) -> Result<Value, String> {
    ordered(args, Ordering::is_gt)
}

pub(super) fn ge(args: &[Value]) -> Result<Value, String> {
    ordered(args, Ordering::is_ge)
}

pub(super) fn lt(args: &[Value]) -> Result<Value, String> {
    ordered(args, Ordering::is_lt)
}

pub(super) fn le(args: &[Value]) -> Result<Value, String> {
    ordered(args, Ordering::is_le)
}

pub(super) fn abs(args: &[Value]) -> Result<Value, String> {
    match &args[0] {
        Value::Int(i) => i
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| "integer overflow".to_string()),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        other => Err(format!("expected a number, got {}", other.type_name())),
    }
}

/// `(round x)` gives the nearest integer, ties to even.
/// `(round x n)` rounds to `n` decimal places and keeps the number's kind;
/// a negative `n` rounds to tens, hundreds, and so on.
pub(super) fn round(args: &[Value]) -> Result<Value, String> {
    match args {
        [Value::Int(i)] => Ok(Value::Int(*i)),
        [Value::Float(f)] => float_to_int(f.round_ties_even()),
        [Value::Int(i), Value::Int(digits)] => round_int(*i, *digits),
        [Value::Float(f), Value::Int(digits)] => Ok(Value::Float(round_float(*f, *digits))),
        [other] | [other, Value::Int(_)] => {
            Err(format!("expected a number, got {}", other.type_name()))
        }
        [_, other] => Err(format!(
            "number of digits must be an integer, got {}",
            other.type_name()
        )),
        _ => Err("expected 1 or 2 arguments".to_string()),
    }
}

/// Round `i` to a multiple of `10^-digits`, ties to even.
fn round_int(i: i64, digits: i64) -> Result<Value, String> {
    if digits >= 0 {
        return Ok(Value::Int(i));
    }
    let Some(step) = u32::try_from(digits.unsigned_abs())
        .ok()
        .and_then(|exp| 10i64.checked_pow(exp))
    else {
        // Wider than any i64.
        return Ok(Value::Int(0));
    };

    let (quotient, remainder) = (i.div_euclid(step), i.rem_euclid(step));
    let round_up = match (2 * remainder).cmp(&step) {
        Ordering::Greater => true,
        Ordering::Equal => quotient % 2 != 0,
        Ordering::Less => false,
    };
    let quotient = if round_up { quotient + 1 } else { quotient };
    quotient
        .checked_mul(step)
        .map(Value::Int)
        .ok_or_else(|| "integer overflow".to_string())
}

fn round_float(f: f64, digits: i64) -> f64 {
    let scale = i32::try_from(digits.unsigned_abs()).map_or(f64::INFINITY, |exp| 10f64.powi(exp));
    if !f.is_finite() {
        return f;
    }
    if digits >= 0 {
        let scaled = f * scale;
        if scaled.is_finite() {
            scaled.round_ties_even() / scale
        } else {
            f
        }
    } else if scale.is_finite() {
        (f / scale).round_ties_even() * scale
    } else {
        0.0f64.copysign(f)
    }
}

#[expect(clippy::cast_possible_truncation, reason = "range checked before the cast")]
fn float_to_int(f: f64) -> Result<Value, String> {
    // 2^63 as f64; anything at or above it does not fit.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_finite() && (-LIMIT..LIMIT).contains(&f) {
        Ok(Value::Int(f as i64))
    } else {
        Err(format!("cannot convert {f:?} to an integer"))
    }
}

/// Candidates for `max`/`min`: a single list argument stands for its elements.
fn extremum_candidates(args: &[Value]) -> &[Value] {
    match args {
        [Value::List(items)] => &items[..],
        _ => args,
    }
}

/// First element that `better` prefers over every earlier one.
fn extremum(
    name: &str,
    args: &[Value],
    better: fn(Ordering) -> bool,
) -> Result<Value, String> {
    let candidates = extremum_candidates(args);
    let Some((first, rest)) = candidates.split_first() else {
        return Err(format!("{name} of an empty list"));
    };

    let mut best = first;
    for candidate in rest {
        if compare(candidate, best)?.is_some_and(better) {
            best = candidate;
        }
    }
    Ok(best.clone())
}

pub(super) fn max(args: &[Value]) -> Result<Value, String> {
    extremum("max", args, Ordering::is_gt)
}

pub(super) fn min(args: &[Value]) -> Result<Value, String> {
    extremum("min", args, Ordering::is_lt)
}
