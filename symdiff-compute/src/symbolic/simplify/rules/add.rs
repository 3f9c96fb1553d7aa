//! Simplification rules for addition and subtraction.

use crate::error::Fault;
use crate::symbolic::{expr::{Binary, Expr}, simplify::step::Step};
use super::Pass;

/// `a+b`, folded if both are literals.
///
/// `0+a = a`
/// `a+0 = a`
pub(super) fn add(pass: &mut Pass, bin: &Binary) -> Result<Expr, Fault> {
    if let Some(folded) = pass.fold(bin) {
        return folded;
    }

    if bin.lhs().is_number(0) {
        pass.push(Step::AddZero);
        return pass.rhs(bin);
    }

    if bin.rhs().is_number(0) {
        pass.push(Step::AddZero);
        return pass.lhs(bin);
    }

    Ok(pass.lhs(bin)? + pass.rhs(bin)?)
}

/// `a-b`, folded if both are literals.
///
/// `0-a -> a`
/// `a-0 -> -1*a`
///
/// Note the sign of both results: a left-hand zero is dropped as-is, and a right-hand zero negates
/// the left-hand side.
pub(super) fn subtract(pass: &mut Pass, bin: &Binary) -> Result<Expr, Fault> {
    if let Some(folded) = pass.fold(bin) {
        return folded;
    }

    if bin.lhs().is_number(0) {
        pass.push(Step::SubtractZeroLeft);
        return pass.rhs(bin);
    }

    if bin.rhs().is_number(0) {
        pass.push(Step::SubtractZeroRight);
        return Ok(-1 * pass.lhs(bin)?);
    }

    Ok(pass.lhs(bin)? - pass.rhs(bin)?)
}
