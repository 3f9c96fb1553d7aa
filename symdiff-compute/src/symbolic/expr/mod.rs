//! The expression tree.
//!
//! An expression is a tree of [`Expr`] nodes. Every node is one of four variants: a [`Symbol`], a
//! numeric literal ([`Number`]), a named [`Function`] that may be applied to an argument, or a
//! [`Binary`] operation. Trees are never mutated once built; the simplifier and the differentiator
//! always produce new trees.
//!
//! Nodes are usually built with the arithmetic operators, which accept either another node or a
//! "loose" value that is normalized into a node first:
//!
//! ```
//! use symdiff_compute::symbolic::expr::{Function, Symbol};
//!
//! let x = Symbol::new("x");
//! let sin = Function::new("sin");
//! let expr = sin.call(&x * 2) + x.pow(2);
//! assert_eq!(expr.to_string(), "(sin((x * 2)) + (x ^ 2))");
//! ```
//!
//! # Identity
//!
//! Each call to [`Symbol::new`] creates a symbol with a fresh identity, and symbols are only equal
//! to themselves (or their clones). Two symbols that happen to share the name `x` are **different**
//! variables. This is what the differentiator uses to decide whether a leaf is the variable being
//! differentiated with respect to. The names of functions are symbols too, which is why the
//! functions in [`symbols`](crate::symbolic::symbols) are statics: every use of them shares one
//! identity.
//!
//! Apart from symbols, the [`PartialEq`] implementation of [`Expr`] is structural: two trees are
//! equal if they have the same shape and equal leaves. Numeric literals must have the same variant
//! to be equal, so the integer `2` is not equal to the float `2.0`. Use [`Expr::is_number`] to test
//! the value of a literal regardless of its variant.

mod iter;
mod number;

use crate::primitive::{float, int};
use rug::Integer;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Range, Sub},
    sync::{atomic::{AtomicU64, Ordering}, Arc},
};

pub use iter::{Children, PostOrderIter, PreOrderIter};
pub use number::Number;

/// Source of fresh symbol identities.
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A named leaf, such as the variable `x`.
///
/// Symbols compare by identity, not by name. See the [module-level documentation](self).
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Unique identity of this symbol, shared by its clones.
    id: u64,

    /// The name of the symbol.
    name: Arc<str>,
}

impl Symbol {
    /// Creates a symbol with the given name and a fresh identity.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        }
    }

    /// Returns the name of the symbol.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if `self` and `other` are the same symbol (not merely symbols with the same
    /// name).
    pub fn is(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Raises this symbol to the given power.
    pub fn pow(&self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinOpKind::Exp, self, rhs)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A named function, such as `sin`, optionally applied to an argument.
///
/// Functions are never evaluated. Calling one with [`Function::call`] only attaches the argument,
/// producing a new node that shares the function's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The name of the function.
    name: Symbol,

    /// The argument the function is applied to, if any.
    arg: Option<Box<Expr>>,
}

impl Function {
    /// Creates an unapplied function with the given name. The name is a new [`Symbol`].
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::named(Symbol::new(name))
    }

    /// Creates an unapplied function whose name is the given symbol.
    pub fn named(name: Symbol) -> Self {
        Self { name, arg: None }
    }

    /// Returns the symbol naming this function.
    pub fn name(&self) -> &Symbol {
        &self.name
    }

    /// Returns the argument this function is applied to, if any.
    pub fn arg(&self) -> Option<&Expr> {
        self.arg.as_deref()
    }

    /// Applies this function to the given argument, returning a new node with the same name. Any
    /// argument the function was already applied to is replaced.
    pub fn call(&self, arg: impl Into<Expr>) -> Expr {
        Expr::Function(Self {
            name: self.name.clone(),
            arg: Some(Box::new(arg.into())),
        })
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "{}({})", self.name, arg),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The operator of a [`Binary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    /// `+`
    Add,

    /// `-`
    Sub,

    /// `*`
    Mul,

    /// `/`
    Div,

    /// `^`
    Exp,
}

impl BinOpKind {
    /// Returns the symbol used to render this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Two expressions combined with an operator, such as `x + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    op: BinOpKind,
    lhs: Box<Expr>,
    rhs: Box<Expr>,
}

impl Binary {
    /// Creates a binary node, normalizing both operands.
    pub fn new(op: BinOpKind, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    /// Returns the operator.
    pub fn op(&self) -> BinOpKind {
        self.op
    }

    /// Returns the left-hand side.
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    /// Returns the right-hand side.
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op, self.rhs)
    }
}

/// A node of an expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A variable, such as `x`.
    Symbol(Symbol),

    /// A numeric literal, such as `2` or `0.5`.
    Number(Number),

    /// A named function, such as `sin` or `sin(x)`.
    Function(Function),

    /// A binary operation, such as `x + 1`.
    Binary(Binary),
}

/// The rendering is diagnostic only, and fully parenthesizes every binary operation:
///
/// - a symbol renders as its name,
/// - a numeric literal renders as its value,
/// - a function renders as `name(arg)`, or `name` if unapplied,
/// - a binary operation renders as `(lhs op rhs)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Number(num) => write!(f, "{}", num),
            Self::Function(func) => write!(f, "{}", func),
            Self::Binary(bin) => write!(f, "{}", bin),
        }
    }
}

impl Expr {
    /// Creates a symbol with the given name and a fresh identity.
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// Creates a binary operation, normalizing both operands.
    pub fn binary(op: BinOpKind, lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::Binary(Binary::new(op, lhs, rhs))
    }

    /// Raises this expression to the given power.
    pub fn pow(self, rhs: impl Into<Self>) -> Self {
        Self::binary(BinOpKind::Exp, self, rhs)
    }

    /// If the expression is a [`Expr::Symbol`], returns a reference to the contained symbol.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Number`], returns a reference to the contained number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(num) => Some(num),
            _ => None,
        }
    }

    /// Returns true if the expression is a numeric literal equal to `n`.
    pub fn is_number(&self, n: i32) -> bool {
        self.as_number().is_some_and(|num| num.is(n))
    }

    /// Returns the structural children of the expression, in order: the argument of an applied
    /// function, or the left and right-hand sides of a binary operation. Leaves have no children.
    pub fn children(&self) -> Children<'_> {
        let children = match self {
            Self::Symbol(_) | Self::Number(_) => [None, None],
            Self::Function(func) => [func.arg(), None],
            Self::Binary(bin) => [Some(bin.lhs()), Some(bin.rhs())],
        };
        children.into_iter().flatten()
    }

    /// Returns an iterator that traverses the descendants of this expression in left-to-right
    /// post-order (i.e. depth-first): each child's descendants come before the child itself.
    ///
    /// The expression itself is not yielded.
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator that traverses the descendants of this expression in left-to-right
    /// pre-order: each child comes before its own descendants.
    ///
    /// The expression itself is not yielded.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Returns the range of characters in the rendering of this expression (see its [`Display`]
    /// implementation) that the node at the given path renders to.
    ///
    /// The path is a list of child indices, as numbered by [`Expr::children`]. Returns [`None`] if
    /// the path leads nowhere.
    ///
    /// [`Display`]: fmt::Display
    pub fn span_of(&self, path: &[usize]) -> Option<Range<usize>> {
        let mut start = 0;
        let mut node = self;
        for &child in path {
            node = match (node, child) {
                (Self::Function(func), 0) => {
                    // skip `name(`
                    start += func.name().name().chars().count() + 1;
                    func.arg()?
                },
                (Self::Binary(bin), 0) => {
                    start += 1;
                    bin.lhs()
                },
                (Self::Binary(bin), 1) => {
                    // skip `(lhs op `
                    start += 1 + char_len(bin.lhs()) + bin.op().symbol().len() + 2;
                    bin.rhs()
                },
                _ => return None,
            };
        }
        Some(start..start + char_len(node))
    }
}

/// Number of characters in the rendering of the expression.
fn char_len(expr: &Expr) -> usize {
    expr.to_string().chars().count()
}

impl From<Symbol> for Expr {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

/// Shares the identity of the symbol.
impl From<&Symbol> for Expr {
    fn from(sym: &Symbol) -> Self {
        Self::Symbol(sym.clone())
    }
}

impl From<Function> for Expr {
    fn from(func: Function) -> Self {
        Self::Function(func)
    }
}

impl From<&Function> for Expr {
    fn from(func: &Function) -> Self {
        Self::Function(func.clone())
    }
}

impl From<Binary> for Expr {
    fn from(bin: Binary) -> Self {
        Self::Binary(bin)
    }
}

impl From<Number> for Expr {
    fn from(num: Number) -> Self {
        Self::Number(num)
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl From<Integer> for Expr {
    fn from(n: Integer) -> Self {
        Self::Number(Number::Integer(n))
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(n: $ty) -> Self {
                    Self::Number(Number::Integer(int(n)))
                }
            }
        )*
    };
}

from_int!(i32, i64, u32);

/// Creates a float literal holding the value as given. A non-finite literal is kept in the tree,
/// but any fold that involves it fails with [`NonFiniteResult`](crate::error::NonFiniteResult).
impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Self::Number(Number::Float(float(n)))
    }
}

/// Creates a symbol with a fresh identity. Any name is accepted.
impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::symbol(name)
    }
}

/// Creates a symbol with a fresh identity. Any name is accepted.
impl From<String> for Expr {
    fn from(name: String) -> Self {
        Self::symbol(name)
    }
}

/// Implements the arithmetic operators for a node type on the left-hand side, accepting anything
/// that converts into an [`Expr`] on the right-hand side.
macro_rules! binary_ops {
    ($($lhs:ty),*) => {
        $(
            impl<T: Into<Expr>> Add<T> for $lhs {
                type Output = Expr;

                fn add(self, rhs: T) -> Expr {
                    Expr::binary(BinOpKind::Add, self, rhs)
                }
            }

            impl<T: Into<Expr>> Sub<T> for $lhs {
                type Output = Expr;

                fn sub(self, rhs: T) -> Expr {
                    Expr::binary(BinOpKind::Sub, self, rhs)
                }
            }

            impl<T: Into<Expr>> Mul<T> for $lhs {
                type Output = Expr;

                fn mul(self, rhs: T) -> Expr {
                    Expr::binary(BinOpKind::Mul, self, rhs)
                }
            }

            impl<T: Into<Expr>> Div<T> for $lhs {
                type Output = Expr;

                fn div(self, rhs: T) -> Expr {
                    Expr::binary(BinOpKind::Div, self, rhs)
                }
            }

            /// Multiplies by the literal `-1`. There is no dedicated negation node.
            impl Neg for $lhs {
                type Output = Expr;

                fn neg(self) -> Expr {
                    Expr::binary(BinOpKind::Mul, -1, self)
                }
            }
        )*
    };
}

binary_ops!(Expr, &Expr, Symbol, &Symbol, Function, &Function);

/// Implements the arithmetic operators for a native integer on the left-hand side, so that rules
/// can be written as `-1 * expr`.
macro_rules! int_lhs_ops {
    ($($rhs:ty),*) => {
        $(
            impl Add<$rhs> for i32 {
                type Output = Expr;

                fn add(self, rhs: $rhs) -> Expr {
                    Expr::binary(BinOpKind::Add, self, rhs)
                }
            }

            impl Sub<$rhs> for i32 {
                type Output = Expr;

                fn sub(self, rhs: $rhs) -> Expr {
                    Expr::binary(BinOpKind::Sub, self, rhs)
                }
            }

            impl Mul<$rhs> for i32 {
                type Output = Expr;

                fn mul(self, rhs: $rhs) -> Expr {
                    Expr::binary(BinOpKind::Mul, self, rhs)
                }
            }

            impl Div<$rhs> for i32 {
                type Output = Expr;

                fn div(self, rhs: $rhs) -> Expr {
                    Expr::binary(BinOpKind::Div, self, rhs)
                }
            }
        )*
    };
}

int_lhs_ops!(Expr, &Expr, Symbol, &Symbol);
