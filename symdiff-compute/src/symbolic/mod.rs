//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes, described in the [`mod@expr`] module.
//! Trees are built with the ordinary arithmetic operators, so rules and tests read like the algebra
//! they describe:
//!
//! ```
//! use symdiff_compute::symbolic::symbols::{SIN, X};
//!
//! let expr = SIN.call(X.pow(2)) + &*X;
//! assert_eq!(expr.to_string(), "(sin((x ^ 2)) + x)");
//! ```
//!
//! # Simplification
//!
//! The [`mod@simplify`] module rewrites a tree into a smaller, equivalent one by folding numeric
//! literals and removing identities (`x + 0`, `x * 1`, `x ^ 1`, ...) and annihilators (`x * 0`).
//! A single call performs a single _pass_ over the tree; passes are repeated a fixed number of
//! times chosen by the caller with [`n_simplify`].
//!
//! ```
//! use symdiff_compute::symbolic::{n_simplify, symbols::X};
//!
//! let expr = (&*X + 0) * (1 * X.pow(1));
//! assert_eq!(n_simplify(&expr, 5).unwrap().to_string(), "(x * x)");
//! ```
//!
//! # Differentiation
//!
//! The [`mod@derivative`] module differentiates a tree with respect to a [`Symbol`], then
//! simplifies the result.
//!
//! ```
//! use symdiff_compute::symbolic::{differentiate, symbols::{COS, SIN, X}};
//!
//! let expr = SIN.call(&*X);
//! assert_eq!(differentiate(&expr, &X).unwrap(), COS.call(&*X));
//! ```
//!
//! [`Symbol`]: expr::Symbol

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod symbols;

pub use derivative::{derivative, differentiate, differentiate_with};
pub use expr::Expr;
pub use simplify::{n_simplify, simplify, simplify_fully, simplify_with, simplify_with_steps};
