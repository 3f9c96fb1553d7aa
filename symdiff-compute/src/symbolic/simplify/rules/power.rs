//! Simplification rules for exponentiation.

use crate::error::Fault;
use crate::symbolic::{expr::{Binary, Expr}, simplify::step::Step};
use super::Pass;

/// `a^b`, folded if both are literals.
///
/// `a^1 = a`
pub(super) fn power(pass: &mut Pass, bin: &Binary) -> Result<Expr, Fault> {
    if let Some(folded) = pass.fold(bin) {
        return folded;
    }

    if bin.rhs().is_number(1) {
        pass.push(Step::PowerOne);
        return pass.lhs(bin);
    }

    Ok(pass.lhs(bin)?.pow(pass.rhs(bin)?))
}
