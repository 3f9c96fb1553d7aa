//! Simplification rules for multiplication and division.

use crate::error::Fault;
use crate::symbolic::{expr::{Binary, Expr}, simplify::step::Step};
use super::Pass;

/// `a*b`, folded if both are literals.
///
/// `1*a = a`
/// `a*1 = a`
/// `0*a = 0`
/// `a*0 = 0`
///
/// The multiplicative identity is checked before the annihilator, so `1*0` and `0*1` are folded
/// and `0*(1*x)` is `0` without simplifying `1*x`.
pub(super) fn multiply(pass: &mut Pass, bin: &Binary) -> Result<Expr, Fault> {
    if let Some(folded) = pass.fold(bin) {
        return folded;
    }

    if bin.lhs().is_number(1) {
        pass.push(Step::MultiplyOne);
        return pass.rhs(bin);
    }

    if bin.rhs().is_number(1) {
        pass.push(Step::MultiplyOne);
        return pass.lhs(bin);
    }

    if bin.lhs().is_number(0) || bin.rhs().is_number(0) {
        // the other side is discarded without being visited
        pass.push(Step::MultiplyZero);
        return Ok(Expr::from(0));
    }

    Ok(pass.lhs(bin)? * pass.rhs(bin)?)
}

/// `a/b`, folded if both are literals.
///
/// `a/1 = a`
pub(super) fn divide(pass: &mut Pass, bin: &Binary) -> Result<Expr, Fault> {
    if let Some(folded) = pass.fold(bin) {
        return folded;
    }

    if bin.rhs().is_number(1) {
        pass.push(Step::DivideOne);
        return pass.lhs(bin);
    }

    Ok(pass.lhs(bin)? / pass.rhs(bin)?)
}
