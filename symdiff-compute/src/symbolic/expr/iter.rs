use super::Expr;

/// The children of an expression, as returned by [`Expr::children`].
pub type Children<'a> = std::iter::Flatten<std::array::IntoIter<Option<&'a Expr>, 2>>;

/// An iterator that traverses the descendants of an expression in left-to-right post-order (i.e.
/// depth-first). The root expression is not yielded.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct PostOrderIter<'a> {
    /// Expressions left to visit, and whether their children have already been pushed.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> PostOrderIter<'a> {
    /// Creates a new iterator over the descendants of `expr`.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: expr.children().rev().map(|child| (child, false)).collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }

            // revisit `expr` once all of its children have been yielded
            self.stack.push((expr, true));
            self.stack.extend(expr.children().rev().map(|child| (child, false)));
        }
    }
}

/// An iterator that traverses the descendants of an expression in left-to-right pre-order. The
/// root expression is not yielded.
///
/// This iterator is created by [`Expr::pre_order_iter`].
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> PreOrderIter<'a> {
    /// Creates a new iterator over the descendants of `expr`.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: expr.children().rev().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        self.stack.extend(expr.children().rev());
        Some(expr)
    }
}
