//! Display form shared by float literals and float values.

use std::fmt;

/// Renders an `f64` in plain decimal notation with at least one digit after
/// the point: `3.0`, `0.25`, `1000000000000000000000.0`.
///
/// Non-finite values render as `inf`, `-inf` and `NaN`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloatDisplay(pub f64);

impl fmt::Display for FloatDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}
