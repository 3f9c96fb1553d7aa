//! Commonly used symbols, literals, and functions.
//!
//! Every item here is a static, so all uses of, say, [`X`] refer to the same variable, and all uses
//! of [`SIN`] to the same function. The differentiator builds its results out of these functions,
//! which means the derivative of `SIN.call(&*X)` compares equal to `COS.call(&*X)`.

use crate::primitive::int;
use once_cell::sync::Lazy;
use super::expr::{Expr, Function, Number, Symbol};

/// The variable `x`.
pub static X: Lazy<Symbol> = Lazy::new(|| Symbol::new("x"));

/// The variable `y`.
pub static Y: Lazy<Symbol> = Lazy::new(|| Symbol::new("y"));

/// The literal `0`.
pub static ZERO: Lazy<Expr> = Lazy::new(|| Expr::Number(Number::Integer(int(0))));

/// The literal `1`.
pub static ONE: Lazy<Expr> = Lazy::new(|| Expr::Number(Number::Integer(int(1))));

/// The cosine function.
pub static COS: Lazy<Function> = Lazy::new(|| Function::new("cos"));

/// The sine function.
pub static SIN: Lazy<Function> = Lazy::new(|| Function::new("sin"));

/// The tangent function.
pub static TAN: Lazy<Function> = Lazy::new(|| Function::new("tan"));

/// The secant function.
pub static SEC: Lazy<Function> = Lazy::new(|| Function::new("sec"));

/// The exponential function, `e^x`.
pub static EXP: Lazy<Function> = Lazy::new(|| Function::new("exp"));

/// The natural logarithm.
pub static LN: Lazy<Function> = Lazy::new(|| Function::new("ln"));
