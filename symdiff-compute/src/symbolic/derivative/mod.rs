//! Symbolic differentiation.
//!
//! [`derivative`] applies the differentiation rules once, structurally, producing a tree that is
//! correct but full of trivial terms such as `0 * x` or `x ^ (2 - 1)`. [`differentiate`] runs the
//! [simplifier](crate::symbolic::simplify) over that tree afterwards, which is usually what callers
//! want.
//!
//! The variable of differentiation is a [`Symbol`], matched by identity: a different symbol that
//! happens to share its name is treated as a constant.
//!
//! Functions are differentiated with the chain rule. The predefined functions in
//! [`symbols`](crate::symbolic::symbols) (`sin`, `cos`, `tan`, `sec`, `ln`, `exp`) have known
//! derivatives; the derivative of any other function `f` with respect to `x` is written as a new
//! function named `D_x[f]`, applied to the same argument.
//!
//! ```
//! use symdiff_compute::symbolic::{differentiate, expr::Function, symbols::X};
//!
//! let f = Function::new("f");
//! let expr = f.call(X.pow(2));
//! assert_eq!(
//!     differentiate(&expr, &X).unwrap().to_string(),
//!     "(D_x[f]((x ^ 2)) * (2 * x))",
//! );
//! ```

mod function;
pub mod step;

use crate::error::{Fault, UnappliedFunction};
use crate::step_collector::StepCollector;
use crate::symbolic::expr::{BinOpKind, Binary, Expr, Function, Symbol};
use crate::symbolic::simplify::{n_simplify, DEFAULT_PASSES};
use crate::symbolic::symbols::LN;
use symdiff_error::Error;

pub use step::Step;

/// A differentiation rule for a binary operation.
type Rule = fn(&Binary, &Symbol, &mut dyn StepCollector<Step>) -> Result<Expr, Fault>;

/// `(f + g)' = f' + g'`
/// `(f - g)' = f' - g'`
fn sum_rule(
    bin: &Binary,
    with: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Fault> {
    let (lhs, rhs) = sides(bin, with, step_collector)?;
    if bin.op() == BinOpKind::Add {
        Ok(lhs + rhs)
    } else {
        Ok(lhs - rhs)
    }
}

/// `(f * g)' = f' * g + g' * f`
fn product_rule(
    bin: &Binary,
    with: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Fault> {
    let (lhs, rhs) = sides(bin, with, step_collector)?;
    Ok(lhs * bin.rhs() + rhs * bin.lhs())
}

/// `(f / g)' = (f' * g - g' * f) / g^2`
fn quotient_rule(
    bin: &Binary,
    with: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Fault> {
    let (lhs, rhs) = sides(bin, with, step_collector)?;
    Ok((lhs * bin.rhs() - rhs * bin.lhs()) / bin.rhs().clone().pow(2))
}

/// `(f ^ g)' = g * f^(g - 1) * f' + ln(f) * f^g * g'`
///
/// Both the base and the exponent may depend on the variable. When one of them does not, its
/// derivative is `0` and the corresponding term vanishes once simplified.
fn power_rule(
    bin: &Binary,
    with: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Fault> {
    let (base, exponent) = (bin.lhs(), bin.rhs());
    let (d_base, d_exponent) = sides(bin, with, step_collector)?;
    let base_term = exponent * base.clone().pow(exponent - 1) * d_base;
    let exponent_term = LN.call(base) * base.clone().pow(exponent) * d_exponent;
    Ok(base_term + exponent_term)
}

/// `f(g)' = f'(g) * g'`
///
/// If `f` is not one of the predefined functions, `f'` is a new function named `D_x[f]`, where `x`
/// is the variable of differentiation.
fn chain_rule(
    func: &Function,
    with: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Fault> {
    let name = func.name().name();
    let Some(arg) = func.arg() else {
        return Err(Fault::new(UnappliedFunction { name: name.to_string() }));
    };

    let outer = match function::outer_derivative(name, arg) {
        Some(outer) => {
            step_collector.push(Step::Chain { function: name.to_string() });
            outer
        },
        None => {
            step_collector.push(Step::Unknown {
                function: name.to_string(),
                suggestions: function::similar_functions(name),
            });
            Function::new(format!("D_{}[{}]", with.name(), name)).call(arg)
        },
    };
    let inner = diff(arg, with, step_collector).map_err(|fault| fault.within(0))?;
    Ok(outer * inner)
}

/// Differentiates both sides of the binary node, left first.
fn sides(
    bin: &Binary,
    with: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(Expr, Expr), Fault> {
    let lhs = diff(bin.lhs(), with, step_collector).map_err(|fault| fault.within(0))?;
    let rhs = diff(bin.rhs(), with, step_collector).map_err(|fault| fault.within(1))?;
    Ok((lhs, rhs))
}

/// Dispatches on the variant of the expression.
fn diff(
    f: &Expr,
    with: &Symbol,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Fault> {
    match f {
        Expr::Symbol(sym) if sym.is(with) => {
            step_collector.push(Step::Variable);
            Ok(Expr::from(1))
        },
        Expr::Symbol(_) | Expr::Number(_) => {
            step_collector.push(Step::Constant);
            Ok(Expr::from(0))
        },
        Expr::Function(func) => chain_rule(func, with, step_collector),
        Expr::Binary(bin) => {
            let (step, rule): (Step, Rule) = match bin.op() {
                BinOpKind::Add => (Step::Sum, sum_rule),
                BinOpKind::Sub => (Step::Difference, sum_rule),
                BinOpKind::Mul => (Step::Product, product_rule),
                BinOpKind::Div => (Step::Quotient, quotient_rule),
                BinOpKind::Exp => (Step::Power, power_rule),
            };
            step_collector.push(step);
            rule(bin, with, step_collector)
        },
    }
}

/// Computes the derivative of the given expression with respect to `with`, without simplifying
/// the result.
///
/// Returns [`Err`] if the expression contains a function that is not applied to an argument.
pub fn derivative(f: &Expr, with: &Symbol) -> Result<Expr, Error> {
    diff(f, with, &mut ()).map_err(|fault| fault.locate(f))
}

/// Computes the derivative of the given expression with respect to `with`, without simplifying
/// the result, and returns it along with the rules that were applied.
pub fn derivative_with_steps(f: &Expr, with: &Symbol) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let derivative = diff(f, with, &mut steps).map_err(|fault| fault.locate(f))?;
    Ok((derivative, steps))
}

/// Computes the derivative of the given expression with respect to `with`, then simplifies it with
/// [`DEFAULT_PASSES`] passes.
pub fn differentiate(f: &Expr, with: &Symbol) -> Result<Expr, Error> {
    differentiate_with(f, with, DEFAULT_PASSES)
}

/// Computes the derivative of the given expression with respect to `with`, then simplifies it with
/// the given number of passes.
pub fn differentiate_with(f: &Expr, with: &Symbol, passes: usize) -> Result<Expr, Error> {
    n_simplify(&derivative(f, with)?, passes)
}

#[cfg(test)]
mod tests {
    use crate::error::{DivisionByZero, UnappliedFunction};
    use crate::symbolic::symbols::{COS, EXP, LN, SEC, SIN, TAN, X, Y};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Shorthand for `differentiate(f, &X)`, rendered.
    fn d_dx(f: &Expr) -> String {
        differentiate(f, &X).unwrap().to_string()
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative(&Expr::from(&*X), &X).unwrap(), Expr::from(1));
        assert_eq!(derivative(&Expr::from(&*Y), &X).unwrap(), Expr::from(0));
        assert_eq!(derivative(&Expr::from(7), &X).unwrap(), Expr::from(0));
        assert_eq!(derivative(&Expr::from(2.5), &X).unwrap(), Expr::from(0));
    }

    #[test]
    fn variable_is_matched_by_identity() {
        let other_x = Symbol::new("x");
        assert_eq!(derivative(&Expr::from(&other_x), &X).unwrap(), Expr::from(0));
        assert_eq!(derivative(&Expr::from(&other_x), &other_x).unwrap(), Expr::from(1));
        assert_eq!(d_dx(&(&other_x * &*X)), "x");
    }

    #[test]
    fn raw_rules() {
        let (x, y) = (&*X, &*Y);
        assert_eq!(derivative(&(x + y), &X).unwrap().to_string(), "(1 + 0)");
        assert_eq!(derivative(&(x - y), &X).unwrap().to_string(), "(1 - 0)");
        assert_eq!(derivative(&(x * y), &X).unwrap().to_string(), "((1 * y) + (0 * x))");
        assert_eq!(
            derivative(&(x / y), &X).unwrap().to_string(),
            "(((1 * y) - (0 * x)) / (y ^ 2))",
        );
        assert_eq!(
            derivative(&x.pow(y), &X).unwrap().to_string(),
            "(((y * (x ^ (y - 1))) * 1) + ((ln(x) * (x ^ y)) * 0))",
        );
    }

    #[test]
    fn sum_and_product() {
        assert_eq!(d_dx(&(&*X + &*Y)), "1");
        assert_eq!(d_dx(&(&*X - 5)), "1");
        assert_eq!(d_dx(&(3 * &*X)), "3");
        assert_eq!(d_dx(&(&*X * &*Y)), "y");
    }

    #[test]
    fn powers() {
        assert_eq!(d_dx(&X.pow(2)), "(2 * x)");
        assert_eq!(d_dx(&X.pow(3)), "(3 * (x ^ 2))");
        assert_eq!(d_dx(&Expr::from(2).pow(&*X)), "(ln(2) * (2 ^ x))");
    }

    #[test]
    fn quotient() {
        assert_eq!(d_dx(&(1 / &*X)), "(-1 / (x ^ 2))");

        // `y - 0` becomes `-1 * y` in the second pass
        assert_eq!(d_dx(&(&*X / &*Y)), "((-1 * y) / (y ^ 2))");
    }

    #[test]
    fn predefined_functions() {
        assert_eq!(differentiate(&SIN.call(&*X), &X).unwrap(), COS.call(&*X));
        assert_eq!(differentiate(&COS.call(&*X), &X).unwrap(), -1 * SIN.call(&*X));
        assert_eq!(differentiate(&TAN.call(&*X), &X).unwrap(), 1 / COS.call(&*X).pow(2));
        assert_eq!(differentiate(&SEC.call(&*X), &X).unwrap(), SEC.call(&*X) * TAN.call(&*X));
        assert_eq!(differentiate(&LN.call(&*X), &X).unwrap(), 1 / &*X);
        assert_eq!(differentiate(&EXP.call(&*X), &X).unwrap(), EXP.call(&*X));
    }

    #[test]
    fn functions_are_matched_by_name() {
        let sin = Function::new("sin");
        assert_eq!(d_dx(&sin.call(&*X)), "cos(x)");
    }

    #[test]
    fn chain_rule() {
        assert_eq!(d_dx(&SIN.call(X.pow(2))), "(cos((x ^ 2)) * (2 * x))");
        assert_eq!(d_dx(&EXP.call(3 * &*X)), "(exp((3 * x)) * 3)");
        assert_eq!(d_dx(&SIN.call(&*Y)), "0");
    }

    #[test]
    fn unknown_function() {
        let f = Function::new("f");
        assert_eq!(derivative(&f.call(&*X), &X).unwrap().to_string(), "(D_x[f](x) * 1)");
        assert_eq!(d_dx(&f.call(&*X)), "D_x[f](x)");
        assert_eq!(differentiate(&f.call(&*X), &Y).unwrap().to_string(), "0");
    }

    #[test]
    fn unknown_function_suggestions() {
        let son = Function::new("son");
        let (_, steps) = derivative_with_steps(&son.call(&*X), &X).unwrap();
        assert_eq!(steps, vec![
            Step::Unknown { function: "son".to_string(), suggestions: vec!["sin".to_string()] },
            Step::Variable,
        ]);
    }

    #[test]
    fn steps_in_order() {
        let (_, steps) = derivative_with_steps(&(SIN.call(&*X) * 2), &X).unwrap();
        assert_eq!(steps, vec![
            Step::Product,
            Step::Chain { function: "sin".to_string() },
            Step::Variable,
            Step::Constant,
        ]);
    }

    #[test]
    fn unapplied_function() {
        let expr = &*X + &*SIN;
        let err = derivative(&expr, &X).unwrap_err();
        assert!(err.is::<UnappliedFunction>());
        assert_eq!(err.source, "(x + sin)");
        assert_eq!(err.spans, vec![5..8]);
        assert_eq!(err.to_string(), "cannot differentiate the unapplied function `sin`");
    }

    #[test]
    fn fold_error_during_simplification() {
        let expr = &*X * (Expr::from(1) / 0);
        assert!(derivative(&expr, &X).is_ok());
        let err = differentiate(&expr, &X).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn pass_count() {
        let expr = SIN.call(X.pow(2));
        assert_eq!(differentiate_with(&expr, &X, 0).unwrap(), derivative(&expr, &X).unwrap());
        assert_eq!(
            differentiate_with(&expr, &X, 1).unwrap().to_string(),
            "(cos((x ^ 2)) * ((2 * (x ^ 1)) + 0))",
        );
    }

    #[test]
    fn concurrent_use() {
        let exprs = [SIN.call(X.pow(2)), 1 / &*X, LN.call(&*X), &*X * &*Y];
        let expected = ["(cos((x ^ 2)) * (2 * x))", "(-1 / (x ^ 2))", "(1 / x)", "y"];
        std::thread::scope(|scope| {
            let handles = exprs.iter()
                .map(|expr| scope.spawn(move || d_dx(expr)))
                .collect::<Vec<_>>();
            for (handle, expected) in handles.into_iter().zip(expected) {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
