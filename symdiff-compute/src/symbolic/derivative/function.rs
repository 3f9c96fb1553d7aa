//! Derivatives of the predefined functions.

use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use crate::symbolic::expr::{Expr, Function};
use crate::symbolic::symbols::{COS, EXP, LN, SEC, SIN, TAN};

/// Computes the derivative of a function at the given argument, without the chain rule's inner
/// factor.
type Rule = fn(&Expr) -> Expr;

/// The functions with a known derivative, keyed by name.
static RULES: Lazy<HashMap<&'static str, Rule>> = Lazy::new(|| {
    let rules: [(&'static Function, Rule); 6] = [
        (&*SIN, |arg: &Expr| COS.call(arg)),
        (&*COS, |arg: &Expr| -1 * SIN.call(arg)),
        (&*TAN, |arg: &Expr| 1 / COS.call(arg).pow(2)),
        (&*SEC, |arg: &Expr| SEC.call(arg) * TAN.call(arg)),
        (&*LN, |arg: &Expr| 1 / arg),
        (&*EXP, |arg: &Expr| EXP.call(arg)),
    ];
    rules.into_iter()
        .map(|(func, rule)| (func.name().name(), rule))
        .collect()
});

/// Returns the derivative of the function with the given name, evaluated at `arg`, or [`None`] if
/// the function is not one of the predefined ones.
pub(super) fn outer_derivative(name: &str, arg: &Expr) -> Option<Expr> {
    RULES.get(name).map(|rule| rule(arg))
}

/// Returns the names of the predefined functions that are spelled similarly to the given name.
pub(super) fn similar_functions(name: &str) -> Vec<String> {
    let mut similar = RULES.keys()
        .filter(|known| levenshtein(known, name) < 2)
        .map(|known| known.to_string())
        .collect::<Vec<_>>();
    similar.sort();
    similar
}
