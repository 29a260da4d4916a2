use crate::interpreter::{evaluator::EvalResult, parser::core::Parser};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// The value of the sum.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_term()?;
        loop {
            if self.cursor.eat('+') {
                left += self.parse_term()?;
            } else if self.cursor.eat('-') {
                left -= self.parse_term()?;
            } else {
                break;
            }
        }
        Ok(left)
    }

    /// Parses multiplication and division.
    ///
    /// Handles left-associative binary operators: `*` and `/`. Division by
    /// zero is not an error; it yields an infinity or NaN.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_factor()?;
        loop {
            if self.cursor.eat('*') {
                left *= self.parse_factor()?;
            } else if self.cursor.eat('/') {
                left /= self.parse_factor()?;
            } else {
                break;
            }
        }
        Ok(left)
    }
}
