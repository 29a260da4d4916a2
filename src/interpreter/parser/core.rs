use crate::{
    error::EvalError,
    interpreter::{cursor::Cursor, evaluator::EvalResult},
};

/// Fused scanner and evaluator for a single expression.
///
/// A parser is built for one input, consumed by [`Parser::parse`], and then
/// dropped. Nothing it holds outlives the call.
#[derive(Debug)]
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) cursor: Cursor<'a>,
    depth:                                     usize,
    max_depth:                                 usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` that allows at most `max_depth` nested
    /// factors.
    #[must_use]
    pub const fn new(source: &'a str, max_depth: usize) -> Self {
        Self { cursor: Cursor::new(source),
               depth: 0,
               max_depth }
    }

    /// Evaluates the whole input as one expression.
    ///
    /// Grammar: `input := expression " "*`
    ///
    /// # Errors
    /// - `UnexpectedTrailingInput` if anything other than spaces remains
    ///   after the expression.
    /// - Propagates every error raised by the grammar rules.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::parser::core::Parser;
    ///
    /// assert_eq!(Parser::new("2 + 3 * 4", 64).parse().unwrap(), 14.0);
    /// assert!(Parser::new("2 + 2 x", 64).parse().is_err());
    /// ```
    pub fn parse(mut self) -> EvalResult<f64> {
        let value = self.parse_expression()?;

        self.cursor.skip_spaces();
        if !self.cursor.is_at_end() {
            return Err(EvalError::UnexpectedTrailingInput { rest:     self.cursor.rest().to_string(),
                                                            position: self.cursor.position(), });
        }

        Ok(value)
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Every recursive path of the grammar passes through a factor, so
    /// guarding factors bounds the stack depth for any input.
    ///
    /// # Errors
    /// `NestingTooDeep` if the limit would be exceeded.
    pub(in crate::interpreter::parser) fn nested(&mut self,
                                                 rule: impl FnOnce(&mut Self) -> EvalResult<f64>)
                                                 -> EvalResult<f64> {
        if self.depth >= self.max_depth {
            return Err(EvalError::NestingTooDeep { limit:    self.max_depth,
                                                   position: self.cursor.position(), });
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
