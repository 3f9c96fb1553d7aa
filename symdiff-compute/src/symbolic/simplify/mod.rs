//! Simplification of expressions.
//!
//! A simplification _pass_ walks the tree once, from the root down, and rewrites every node it
//! visits with the rule for that node's variant:
//!
//! - Binary operations on two numeric literals are folded into one literal, exactly for integers
//!   where possible.
//! - Identities are removed (`x + 0`, `x * 1`, `x / 1`, `x ^ 1`, ...), and multiplication by zero
//!   collapses to `0`.
//! - Everything else is rebuilt from its simplified children.
//!
//! Because a rule only looks at the node it is given, a single pass can expose new opportunities
//! that only a later pass will take. For example, the first pass over `(x + 0) * (1 * 1)` produces
//! `x * 1`, and only the second pass produces `x`. The entry points here therefore always run a
//! caller-chosen number of passes; [`simplify_fully`] runs passes until the tree stops changing.
//!
//! Function nodes are not looked into by default. Enable
//! [`SimplifyOptions::simplify_call_args`] to simplify their argument too.
//!
//! # Errors
//!
//! Folding can fail, for example when dividing a literal by zero. The returned [`Error`] points
//! at the failing node in the rendering of the tree that the failing pass was given:
//!
//! ```
//! use symdiff_compute::symbolic::{simplify, symbols::X, Expr};
//!
//! let err = simplify(&(&*X + Expr::from(1) / 0)).unwrap_err();
//! assert_eq!(err.source, "(x + (1 / 0))");
//! assert_eq!(err.spans, vec![5..12]);
//! ```

mod options;
mod rules;
pub mod step;

use crate::step_collector::StepCollector;
use symdiff_error::Error;
use rules::Pass;
use super::expr::Expr;

pub use options::{SimplifyOptions, SimplifyOptionsBuilder, DEFAULT_PASSES};
pub use step::Step;

/// Runs a single simplification pass over the expression.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    n_simplify(expr, 1)
}

/// Runs exactly `passes` simplification passes over the expression, each one over the output of
/// the previous one. Zero passes return a copy of the input.
pub fn n_simplify(expr: &Expr, passes: usize) -> Result<Expr, Error> {
    let options = SimplifyOptionsBuilder::new()
        .passes(passes)
        .build();
    simplify_with(expr, options, &mut ())
}

/// Simplifies the expression with the given options, reporting every rewrite that is applied to
/// the given step collector.
pub fn simplify_with(
    expr: &Expr,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let mut expr = expr.clone();
    for _ in 0..options.passes {
        expr = Pass::new(options, step_collector)
            .run(&expr)
            .map_err(|fault| fault.locate(&expr))?;
    }
    Ok(expr)
}

/// Runs exactly `passes` simplification passes over the expression, returning the result along
/// with the steps that were applied, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr, passes: usize) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let options = SimplifyOptionsBuilder::new()
        .passes(passes)
        .build();
    let simplified = simplify_with(expr, options, &mut steps)?;
    Ok((simplified, steps))
}

/// Runs simplification passes until a pass no longer changes the tree, or until `max_passes`
/// passes have run.
///
/// Returns the simplified expression and the number of passes run, including the final pass that
/// found nothing left to change. If that number is `max_passes`, the tree may not have stopped
/// changing yet.
pub fn simplify_fully(expr: &Expr, max_passes: usize) -> Result<(Expr, usize), Error> {
    let options = SimplifyOptions::default();
    let mut expr = expr.clone();
    for run in 1..=max_passes {
        let next = Pass::new(options, &mut ())
            .run(&expr)
            .map_err(|fault| fault.locate(&expr))?;
        if next == expr {
            return Ok((next, run));
        }
        expr = next;
    }
    Ok((expr, max_passes))
}

#[cfg(test)]
mod tests {
    use crate::error::{DivisionByZero, NonFiniteResult, NonRealResult};
    use crate::symbolic::expr::{BinOpKind, Expr, Function, Symbol};
    use crate::symbolic::symbols::{SIN, X, Y};
    use pretty_assertions::assert_eq;
    use rug::Integer;
    use super::*;

    /// An expression that no rule rewrites.
    fn opaque() -> Expr {
        SIN.call(&*X) * &*Y
    }

    #[test]
    fn fold_integers() {
        assert_eq!(simplify(&(Expr::from(2) + 3)).unwrap(), Expr::from(5));
        assert_eq!(simplify(&(Expr::from(2) - 7)).unwrap(), Expr::from(-5));
        assert_eq!(simplify(&(Expr::from(6) * 7)).unwrap(), Expr::from(42));
        assert_eq!(simplify(&Expr::from(2).pow(10)).unwrap(), Expr::from(1024));
    }

    #[test]
    fn fold_exact_big_power() {
        let expected = Integer::from(Integer::u_pow_u(2, 100));
        assert_eq!(simplify(&Expr::from(2).pow(100)).unwrap(), Expr::from(expected));
    }

    #[test]
    fn fold_division_is_float() {
        assert_eq!(simplify(&(Expr::from(7) / 2)).unwrap().to_string(), "3.5");
        assert_eq!(simplify(&(Expr::from(4) / 2)).unwrap().to_string(), "2.0");
    }

    #[test]
    fn fold_errors() {
        let err = simplify(&(Expr::from(1) / 0)).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![0..7]);

        let half = Expr::from(0.5);
        let err = simplify(&Expr::from(-4).pow(half)).unwrap_err();
        assert!(err.is::<NonRealResult>());
    }

    #[test]
    fn nested_error_points_at_node() {
        let expr = SIN.call(&*X) * (&*Y - Expr::from(3) / 0);
        let err = simplify(&expr).unwrap_err();
        assert_eq!(err.source, "(sin(x) * (y - (3 / 0)))");
        assert_eq!(&err.source[err.spans[0].clone()], "(3 / 0)");
    }

    #[test]
    fn error_in_later_pass_uses_that_pass_input() {
        // `(2 - 2)` only becomes the literal `0` divisor after the first pass
        let expr = &*X + Expr::from(1) / (Expr::from(2) - 2);
        let err = n_simplify(&expr, 2).unwrap_err();
        assert_eq!(err.source, "(x + (1 / 0))");
        assert_eq!(err.spans, vec![5..12]);
    }

    #[test]
    fn additive_identity() {
        let e = opaque();
        assert_eq!(simplify(&(&e + 0)).unwrap(), e);
        assert_eq!(simplify(&(0 + &e)).unwrap(), e);
    }

    #[test]
    fn subtract_zero() {
        let e = opaque();
        assert_eq!(simplify(&(0 - &e)).unwrap(), e);
        assert_eq!(simplify(&(&e - 0)).unwrap(), -1 * &e);
        assert_eq!(simplify(&(&*X - 0)).unwrap().to_string(), "(-1 * x)");
    }

    #[test]
    fn multiplicative_identity() {
        let e = opaque();
        assert_eq!(simplify(&(&e * 1)).unwrap(), e);
        assert_eq!(simplify(&(1 * &e)).unwrap(), e);
        assert_eq!(simplify(&(&e / 1)).unwrap(), e);
        assert_eq!(simplify(&e.clone().pow(1)).unwrap(), e);
    }

    #[test]
    fn multiply_by_zero() {
        let e = opaque();
        assert_eq!(simplify(&(&e * 0)).unwrap(), Expr::from(0));
        assert_eq!(simplify(&(0 * &e)).unwrap(), Expr::from(0));
    }

    #[test]
    fn multiply_by_zero_skips_other_side() {
        // the division by zero is never folded
        let expr = (Expr::from(1) / 0) * 0;
        assert_eq!(simplify(&expr).unwrap(), Expr::from(0));
    }

    #[test]
    fn one_is_checked_before_zero() {
        let expr = 1 * (&*X * 0);
        let (simplified, steps) = simplify_with_steps(&expr, 1).unwrap();
        assert_eq!(simplified, Expr::from(0));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::MultiplyZero]);
    }

    #[test]
    fn irreducible_nodes_are_rebuilt() {
        let e = opaque();
        assert_eq!(simplify(&e).unwrap(), e);
        assert_eq!(simplify(&(&e - &*X)).unwrap(), &e - &*X);
        assert_eq!(simplify(&(&*X / &*Y)).unwrap(), &*X / &*Y);
        assert_eq!(simplify(&X.pow(&*Y)).unwrap(), X.pow(&*Y));
    }

    #[test]
    fn passes_are_counted_exactly() {
        let expr = (&*X + 0) * (Expr::from(1) * 1);
        assert_eq!(n_simplify(&expr, 0).unwrap(), expr);
        assert_eq!(n_simplify(&expr, 1).unwrap(), &*X * 1);
        assert_eq!(n_simplify(&expr, 2).unwrap(), Expr::from(&*X));
        assert_eq!(n_simplify(&expr, 5).unwrap(), Expr::from(&*X));
    }

    #[test]
    fn converged_tree_is_stable() {
        let expr = (&*X + 0) * (Expr::from(2) * 3) + (Expr::from(0) * &*Y);
        let once = n_simplify(&expr, 5).unwrap();
        assert_eq!(simplify(&once).unwrap(), once);
    }

    #[test]
    fn simplify_until_unchanged() {
        // two passes rewrite the tree, and a third finds nothing left to do
        let expr = (&*X + 0) * (Expr::from(1) * 1);
        let (simplified, passes) = simplify_fully(&expr, 10).unwrap();
        assert_eq!(simplified, Expr::from(&*X));
        assert_eq!(passes, 3);

        let (simplified, passes) = simplify_fully(&expr, 1).unwrap();
        assert_eq!(simplified, &*X * 1);
        assert_eq!(passes, 1);

        let (simplified, passes) = simplify_fully(&expr, 0).unwrap();
        assert_eq!(simplified, expr);
        assert_eq!(passes, 0);

        let (simplified, passes) = simplify_fully(&Expr::from(&*Y), 10).unwrap();
        assert_eq!(simplified, Expr::from(&*Y));
        assert_eq!(passes, 1);
    }

    #[test]
    fn underflow_then_annihilate() {
        let tiny = (Expr::from(1e-200) * 1e-200) * &*X;
        assert_eq!(simplify(&tiny).unwrap().to_string(), "(0.0 * x)");
        assert_eq!(n_simplify(&tiny, 2).unwrap(), Expr::from(0));

        let err = n_simplify(&(Expr::from(1) / (Expr::from(1e-200) * 1e-200)), 2).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.source, "(1 / 0.0)");
    }

    #[test]
    fn loose_operands_fold() {
        assert_eq!(simplify(&(Expr::from(2) * 0.5)).unwrap().to_string(), "1.0");
        assert_eq!(simplify(&(&*X + "y")).unwrap().to_string(), "(x + y)");

        let err = simplify(&(Expr::from(f64::INFINITY) - 1)).unwrap_err();
        assert!(err.is::<NonFiniteResult>());
        assert_eq!(err.source, "(inf - 1)");
    }

    #[test]
    fn function_args_are_untouched_by_default() {
        let expr = SIN.call(&*X + 0);
        assert_eq!(n_simplify(&expr, 5).unwrap(), expr);

        // not even folded
        let expr = SIN.call(Expr::from(1) / 0);
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn function_args_when_enabled() {
        let options = SimplifyOptionsBuilder::new()
            .passes(1)
            .simplify_call_args(true)
            .build();
        let expr = SIN.call(&*X + 0);
        assert_eq!(simplify_with(&expr, options, &mut ()).unwrap(), SIN.call(&*X));

        let expr = &*Y + SIN.call(Expr::from(1) / 0);
        let err = simplify_with(&expr, options, &mut ()).unwrap_err();
        assert_eq!(&err.source[err.spans[0].clone()], "(1 / 0)");
    }

    #[test]
    fn unapplied_function_is_a_leaf() {
        let f = Expr::from(Function::new("f"));
        assert_eq!(simplify(&(&f * 1)).unwrap(), f);
    }

    #[test]
    fn symbols_keep_identity() {
        let other_x = Symbol::new("x");
        let expr = &other_x + 0;
        let simplified = simplify(&expr).unwrap();
        assert_eq!(simplified, Expr::from(&other_x));
        assert_ne!(simplified, Expr::from(&*X));
    }

    #[test]
    fn steps_in_order() {
        let expr = (Expr::from(2) + 3) * (&*X).pow(1);
        let (simplified, steps) = simplify_with_steps(&expr, 1).unwrap();
        assert_eq!(simplified, 5 * &*X);
        assert_eq!(steps, vec![Step::Fold(BinOpKind::Add), Step::PowerOne]);
    }

    #[test]
    fn default_options() {
        let options = SimplifyOptions::default();
        assert_eq!(options.passes, DEFAULT_PASSES);
        assert!(!options.simplify_call_args);
        assert_eq!(options.into_builder().passes(2).build().passes, 2);
    }
}
