//! Error kinds raised while rewriting expression trees.
//!
//! Rewrites report failures as a [`Fault`], which remembers the path from the tree's root down to
//! the node that failed. Once the fault reaches the entry point, it is [located](Fault::locate)
//! against the tree being rewritten, producing an [`Error`] whose span points at that node.

use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{Error, ErrorKind, EXPR};
use crate::symbolic::expr::Expr;

/// A numeric fold divided by zero, or raised zero to a negative power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["while folding this expression"],
    help = "the divisor of a division, or the base of a negative power, is the literal 0"
)]
pub struct DivisionByZero;

/// A numeric fold would produce a non-real number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the result of this power is not a real number",
    labels = ["while folding this expression"],
    help = "a negative base can only be raised to an integer exponent"
)]
pub struct NonRealResult;

/// A numeric fold would produce an infinite or undefined number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the result of this operation is not a finite number",
    labels = ["while folding this expression"],
)]
pub struct NonFiniteResult;

/// A function with no argument was differentiated.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate the unapplied function `{}`", name),
    labels = ["this function"],
    help = format!("apply it to an argument first, e.g. {}", format!("{}(x)", name).fg(EXPR))
)]
pub struct UnappliedFunction {
    /// The name of the function.
    pub name: String,
}

/// An error raised somewhere inside a tree during a rewrite, not yet tied to the tree's rendering.
#[derive(Debug)]
pub(crate) struct Fault {
    /// Child indices leading from the failing node back up to the root (innermost first).
    path: Vec<usize>,

    /// The kind of error that occurred.
    kind: Box<dyn ErrorKind>,
}

impl Fault {
    /// Creates a fault raised on the node currently being rewritten.
    pub(crate) fn new(kind: impl ErrorKind + 'static) -> Self {
        Self { path: Vec::new(), kind: Box::new(kind) }
    }

    /// Records that the fault was raised inside the child at the given index.
    pub(crate) fn within(mut self, child: usize) -> Self {
        self.path.push(child);
        self
    }

    /// Ties the fault to the given root, producing an [`Error`] that spans the failing node in the
    /// rendering of `root`.
    pub(crate) fn locate(mut self, root: &Expr) -> Error {
        self.path.reverse();
        let source = root.to_string();
        let span = root.span_of(&self.path)
            .unwrap_or_else(|| 0..source.chars().count());
        Error { source, spans: vec![span], kind: self.kind }
    }
}
