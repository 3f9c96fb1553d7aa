/// The rules applied while computing a derivative, in the order they were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `d/dx c = 0`, for a literal or a symbol other than `x`.
    Constant,

    /// `d/dx x = 1`
    Variable,

    /// `(f + g)' = f' + g'`
    Sum,

    /// `(f - g)' = f' - g'`
    Difference,

    /// `(f * g)' = f' * g + g' * f`
    Product,

    /// `(f / g)' = (f' * g - g' * f) / g^2`
    Quotient,

    /// `(f ^ g)' = g * f^(g - 1) * f' + ln(f) * f^g * g'`
    Power,

    /// `f(g)' = f'(g) * g'`, for a function with a known derivative.
    Chain {
        /// The name of the function.
        function: String,
    },

    /// `f(g)' = D_x[f](g) * g'`, for a function without a known derivative. Its derivative is left
    /// as a new, opaque function.
    Unknown {
        /// The name of the function.
        function: String,

        /// Names of functions with a known derivative that are spelled similarly, in case the
        /// name is a typo.
        suggestions: Vec<String>,
    },
}
