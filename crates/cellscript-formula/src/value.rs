//! Evaluation values

use std::fmt;

/// The final value of a rendered cell: a number or a piece of text
///
/// There is no boolean or dedicated error variant. Error sentinels such as
/// `RECURSIVE A1` are ordinary text values with a recognizable prefix, and
/// logical functions speak in `1`/`0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Convert to a number, if the value parses as one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Coerce to a number for arithmetic; non-numeric text becomes NaN
    ///
    /// Arithmetic stays permissive: `-`, `*` and `/` never fail, they
    /// propagate NaN and infinities per IEEE 754.
    pub fn coerce_number(&self) -> f64 {
        self.as_number().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                // Integral numbers display without a decimal point
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}
