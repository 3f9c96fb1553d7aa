//! Implementation of the simplification rules.
//!
//! A single pass dispatches on the variant of the node and applies the rule for that variant. The
//! rules of the binary operators all follow the same outline:
//!
//! 1. If both operands are numeric literals, fold them into one literal.
//! 2. Otherwise, check for the identities / annihilators of the operator, in a fixed order. A
//!    matching identity returns the _other_ operand, simplified.
//! 3. Otherwise, rebuild the node from both simplified operands.
//!
//! Symbols and numeric literals are returned as they are.

mod add;
mod multiply;
mod power;

use crate::error::Fault;
use crate::step_collector::StepCollector;
use crate::symbolic::expr::{BinOpKind, Binary, Expr, Function};
use super::{options::SimplifyOptions, step::Step};

/// State of a single simplification pass.
pub(crate) struct Pass<'a> {
    options: SimplifyOptions,
    step_collector: &'a mut dyn StepCollector<Step>,
}

impl<'a> Pass<'a> {
    /// Creates a pass with the given options, reporting its steps to `step_collector`.
    pub(crate) fn new(options: SimplifyOptions, step_collector: &'a mut dyn StepCollector<Step>) -> Self {
        Self { options, step_collector }
    }

    /// Simplifies the given expression once.
    pub(crate) fn run(&mut self, expr: &Expr) -> Result<Expr, Fault> {
        match expr {
            Expr::Symbol(_) | Expr::Number(_) => Ok(expr.clone()),
            Expr::Function(func) => self.function(func),
            Expr::Binary(bin) => match bin.op() {
                BinOpKind::Add => add::add(self, bin),
                BinOpKind::Sub => add::subtract(self, bin),
                BinOpKind::Mul => multiply::multiply(self, bin),
                BinOpKind::Div => multiply::divide(self, bin),
                BinOpKind::Exp => power::power(self, bin),
            },
        }
    }

    /// Function nodes are left as they are, unless the options ask for their argument to be
    /// simplified.
    fn function(&mut self, func: &Function) -> Result<Expr, Fault> {
        match func.arg() {
            Some(arg) if self.options.simplify_call_args => {
                let arg = self.run(arg).map_err(|fault| fault.within(0))?;
                Ok(func.call(arg))
            },
            _ => Ok(Expr::Function(func.clone())),
        }
    }

    /// Simplifies the left-hand side of the binary node.
    fn lhs(&mut self, bin: &Binary) -> Result<Expr, Fault> {
        self.run(bin.lhs()).map_err(|fault| fault.within(0))
    }

    /// Simplifies the right-hand side of the binary node.
    fn rhs(&mut self, bin: &Binary) -> Result<Expr, Fault> {
        self.run(bin.rhs()).map_err(|fault| fault.within(1))
    }

    /// If both sides of the binary node are numeric literals, combines them into one literal.
    ///
    /// Returns [`None`] if the node cannot be folded.
    fn fold(&mut self, bin: &Binary) -> Option<Result<Expr, Fault>> {
        let (lhs, rhs) = (bin.lhs().as_number()?, bin.rhs().as_number()?);
        self.step_collector.push(Step::Fold(bin.op()));
        Some(lhs.fold(bin.op(), rhs).map(Expr::Number))
    }

    /// Records a step.
    fn push(&mut self, step: Step) {
        self.step_collector.push(step);
    }
}
