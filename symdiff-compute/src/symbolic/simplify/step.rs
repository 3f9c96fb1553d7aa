use crate::symbolic::expr::BinOpKind;

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`
    /// `2*0.5 = 1.0`
    /// `7/2 = 3.5`
    /// etc.
    Fold(BinOpKind),

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0-a -> a`
    SubtractZeroLeft,

    /// `a-0 -> -1*a`
    SubtractZeroRight,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `a/1 = a`
    DivideOne,

    /// `a^1 = a`
    PowerOne,
}
