use crate::{
    error::EvalError,
    interpreter::{
        evaluator::EvalResult,
        function::core::{Builtin, lookup},
        parser::core::Parser,
    },
};

impl Parser<'_> {
    /// Parses a factor.
    ///
    /// Signs are right-recursive and apply to the whole following factor,
    /// including its exponent, so `-2^2` is `-(2^2)`. The exponent after `^`
    /// is itself a factor, which makes chained powers right-associative.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | primary ("^" factor)?
    ///     primary := "(" expression ")"
    ///              | number
    ///              | constant
    ///              | function factor
    /// ```
    ///
    /// # Errors
    /// - `NestingTooDeep` if the nesting limit is reached.
    /// - Propagates errors from the primary and exponent.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> EvalResult<f64> {
        self.nested(|parser| {
                if parser.cursor.eat('+') {
                    return parser.parse_factor();
                }
                if parser.cursor.eat('-') {
                    return Ok(-parser.parse_factor()?);
                }

                let base = parser.parse_primary()?;
                if parser.cursor.eat('^') {
                    let exponent = parser.parse_factor()?;
                    return Ok(base.powf(exponent));
                }
                Ok(base)
            })
    }

    /// Parses a primary value: a group, a number, or an identifier.
    ///
    /// # Errors
    /// - `ExpectedClosingParen` if a group is not closed.
    /// - `UnexpectedCharacter` for anything that cannot start an operand.
    /// - `UnexpectedEndOfInput` if the input ends where an operand belongs.
    fn parse_primary(&mut self) -> EvalResult<f64> {
        self.cursor.skip_spaces();

        match self.cursor.peek() {
            Some('(') => {
                self.cursor.advance();
                let value = self.parse_expression()?;
                if !self.cursor.eat(')') {
                    return Err(EvalError::ExpectedClosingParen { position: self.cursor.position() });
                }
                Ok(value)
            },
            Some(c) if c.is_ascii_digit() || c == '.' => self.parse_number(),
            Some(c) if c.is_ascii_lowercase() => self.parse_identifier(),
            Some(found) => Err(EvalError::UnexpectedCharacter { found,
                                                                position: self.cursor.position() }),
            None => Err(EvalError::UnexpectedEndOfInput { position: self.cursor.position() }),
        }
    }

    /// Parses a numeric literal.
    ///
    /// The literal is the longest run of digits and decimal points. Its shape
    /// is only checked by the float conversion, so `1.2.3` is scanned whole
    /// and then rejected.
    ///
    /// # Errors
    /// `MalformedNumber` if the run is not a valid decimal number.
    fn parse_number(&mut self) -> EvalResult<f64> {
        let position = self.cursor.position();
        let literal = self.cursor.take_while(|c| c.is_ascii_digit() || c == '.');

        literal.parse()
               .map_err(|_| EvalError::MalformedNumber { literal: literal.to_string(),
                                                         position })
    }

    /// Parses a constant or a function application.
    ///
    /// The identifier is the longest run of lowercase letters. Constants
    /// stand alone. Functions take the factor that immediately follows as
    /// their only argument, so `sqrt 16^2` is `sqrt(16^2)`.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if the name is not a builtin.
    /// - Propagates errors from the argument.
    fn parse_identifier(&mut self) -> EvalResult<f64> {
        let position = self.cursor.position();
        let name = self.cursor.take_while(|c| c.is_ascii_lowercase());

        match lookup(name) {
            Some(Builtin::Constant(value)) => Ok(value),
            Some(Builtin::Unary(function)) => {
                let argument = self.parse_factor()?;
                Ok(function(argument))
            },
            None => Err(EvalError::UnknownIdentifier { name: name.to_string(),
                                                       position }),
        }
    }
}
