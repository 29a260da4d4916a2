#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// Found a character where an operand or operator was expected.
    UnexpectedCharacter {
        /// The character encountered.
        found:    char,
        /// The character position where the error occurred.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// The character position where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The character position where the error occurred.
        position: usize,
    },
    /// Input remained after a complete expression was parsed.
    UnexpectedTrailingInput {
        /// The unconsumed remainder of the input.
        rest:     String,
        /// The character position where the remainder starts.
        position: usize,
    },
    /// An identifier did not name any known function or constant.
    UnknownIdentifier {
        /// The identifier as written.
        name:     String,
        /// The character position where the identifier starts.
        position: usize,
    },
    /// A run of digits and decimal points was not a valid number.
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// The character position where the literal starts.
        position: usize,
    },
    /// Groups, signs, and function applications were nested too deeply.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// The character position where the limit was exceeded.
        position: usize,
    },
}

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected character, unmatched parenthesis, or trailing input.
    Syntax,
    /// Unrecognized function or constant name.
    UnknownIdentifier,
    /// Invalid numeric literal.
    MalformedNumber,
    /// Nesting limit exceeded.
    Resource,
}

impl EvalError {
    /// Returns the coarse classification of this error.
    ///
    /// # Example
    /// ```
    /// use scical::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("1.2.3").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::MalformedNumber);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedCharacter { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::ExpectedClosingParen { .. }
            | Self::UnexpectedTrailingInput { .. } => ErrorKind::Syntax,
            Self::UnknownIdentifier { .. } => ErrorKind::UnknownIdentifier,
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::NestingTooDeep { .. } => ErrorKind::Resource,
        }
    }

    /// Returns the character position at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingInput { position, .. }
            | Self::UnknownIdentifier { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "Error at position {position}: Unexpected character '{found}'.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingInput { rest, position } => write!(f,
                                                                       "Error at position {position}: Extra input after expression: {rest}"),

            Self::UnknownIdentifier { name, position } => {
                write!(f, "Error at position {position}: Unknown function or constant '{name}'.")
            },

            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at position {position}: Malformed number '{literal}'.")
            },

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Expression nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for EvalError {}
