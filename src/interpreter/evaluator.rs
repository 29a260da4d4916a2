use tracing::{debug, trace};

use crate::{error::EvalError, interpreter::parser::core::Parser};

/// Result type returned by every grammar rule and by [`evaluate`].
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on nested factors (groups, signs, function applications,
/// and exponents).
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunable limits for an [`Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum number of factors that may be open at once.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Evaluates calculator expressions.
///
/// An evaluator carries only its options. Each call to
/// [`Evaluator::evaluate`] scans its input from scratch, so one evaluator can
/// be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    /// Creates an evaluator with the given options.
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Returns the options this evaluator was built with.
    #[must_use]
    pub const fn options(&self) -> EvalOptions {
        self.options
    }

    /// Evaluates `text` to a number.
    ///
    /// Division by zero and domain errors such as `ln(-1)` are not failures;
    /// they produce infinities or NaN like any other floating-point result.
    ///
    /// # Errors
    /// Returns an [`EvalError`] for malformed syntax, unknown identifiers,
    /// malformed numbers, or nesting beyond `max_depth`.
    ///
    /// # Example
    /// ```
    /// use scical::{EvalOptions, Evaluator};
    ///
    /// let evaluator = Evaluator::new(EvalOptions { max_depth: 4 });
    /// assert_eq!(evaluator.evaluate("((1))").unwrap(), 1.0);
    /// assert!(evaluator.evaluate("((((1))))").is_err());
    /// ```
    pub fn evaluate(&self, text: &str) -> EvalResult<f64> {
        let result = Parser::new(text, self.options.max_depth).parse();

        match &result {
            Ok(value) => trace!(input = text, value, "evaluated expression"),
            Err(e) => debug!(input = text, position = e.position(), error = %e, "evaluation failed"),
        }

        result
    }
}

/// Evaluates `text` with the default options.
///
/// # Errors
/// See [`Evaluator::evaluate`].
///
/// # Example
/// ```
/// use scical::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(evaluate("-2^2").unwrap(), -4.0);
/// assert!(evaluate("foo(1)").is_err());
/// ```
pub fn evaluate(text: &str) -> EvalResult<f64> {
    Evaluator::default().evaluate(text)
}
