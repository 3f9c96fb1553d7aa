//! Numeric literals and the arithmetic used to fold them.

use crate::error::{DivisionByZero, Fault, NonFiniteResult, NonRealResult};
use crate::primitive::{float, int};
use rug::{ops::Pow, Float, Integer};
use std::fmt;
use super::BinOpKind;

/// A numeric literal: either an unbounded integer, or a float with the precision of a native
/// double.
///
/// Folding behaves like native double arithmetic: every float it produces is rounded to the
/// nearest native double, so results that underflow become zero, and a result that is not a
/// finite double is reported as an error. Literals built directly from an `f64` hold that value
/// as-is, including infinities and NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An integer, such as `2` or `-1`.
    Integer(Integer),

    /// A floating-point number, such as `0.5` or `2.0`.
    Float(Float),
}

impl Number {
    /// Returns true if this number is equal to `n`, regardless of whether it is stored as an
    /// integer or a float.
    pub fn is(&self, n: i32) -> bool {
        match self {
            Self::Integer(int) => *int == n,
            Self::Float(float) => *float == n,
        }
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(int) => int.is_zero(),
            Self::Float(float) => float.is_zero(),
        }
    }

    /// Returns true if this number is negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(int) => *int < 0,
            Self::Float(float) => float.is_sign_negative() && !float.is_zero(),
        }
    }

    /// Converts the number to a [`Float`].
    pub fn to_float(&self) -> Float {
        match self {
            Self::Integer(int) => float(int),
            Self::Float(float) => float.clone(),
        }
    }

    /// Converts the number to the nearest native float.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(int) => int.to_f64(),
            Self::Float(float) => float.to_f64(),
        }
    }

    /// Combines two numbers with the given operator.
    ///
    /// - `+`, `-`, `*`: exact if both operands are integers, floating-point otherwise.
    /// - `/`: true division; the result is always a float.
    /// - `^`: exact if the base is an integer and the exponent a non-negative integer that fits in
    ///   a `u32`, floating-point otherwise.
    pub(crate) fn fold(&self, op: BinOpKind, rhs: &Self) -> Result<Self, Fault> {
        let result = match (op, self, rhs) {
            (BinOpKind::Add, Self::Integer(lhs), Self::Integer(rhs)) => Self::Integer(int(lhs + rhs)),
            (BinOpKind::Sub, Self::Integer(lhs), Self::Integer(rhs)) => Self::Integer(int(lhs - rhs)),
            (BinOpKind::Mul, Self::Integer(lhs), Self::Integer(rhs)) => Self::Integer(int(lhs * rhs)),
            (BinOpKind::Add, lhs, rhs) => Self::Float(lhs.to_float() + rhs.to_float()),
            (BinOpKind::Sub, lhs, rhs) => Self::Float(lhs.to_float() - rhs.to_float()),
            (BinOpKind::Mul, lhs, rhs) => Self::Float(lhs.to_float() * rhs.to_float()),
            (BinOpKind::Div, lhs, rhs) => {
                if rhs.is_zero() {
                    return Err(Fault::new(DivisionByZero));
                }
                Self::Float(lhs.to_float() / rhs.to_float())
            },
            (BinOpKind::Exp, lhs, rhs) => lhs.pow(rhs)?,
        };

        match result {
            Self::Float(result) => {
                let native = result.to_f64();
                if !native.is_finite() {
                    return Err(Fault::new(NonFiniteResult));
                }
                Ok(Self::Float(float(native)))
            },
            int => Ok(int),
        }
    }

    /// Raises this number to the given power.
    fn pow(&self, exp: &Self) -> Result<Self, Fault> {
        if let (Self::Integer(base), Self::Integer(exp)) = (self, exp) {
            if let Some(exp) = exp.to_u32() {
                return Ok(Self::Integer(base.clone().pow(exp)));
            }
        }

        if self.is_zero() && exp.is_negative() {
            return Err(Fault::new(DivisionByZero));
        }

        let result = self.to_float().pow(&exp.to_float());
        if result.is_nan() && self.is_negative() {
            return Err(Fault::new(NonRealResult));
        }
        Ok(Self::Float(result))
    }
}

impl From<Integer> for Number {
    fn from(int: Integer) -> Self {
        Self::Integer(int)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Integer(int(n))
    }
}

/// Integers are formatted in full. Floats are formatted in the shortest form that reads back to the
/// same value, always with a fractional part or exponent (`2.0`, `0.5`, `1e100`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(int) => write!(f, "{}", int),
            Self::Float(float) => write!(f, "{:?}", float.to_f64()),
        }
    }
}
