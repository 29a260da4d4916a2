/// Evaluation errors.
///
/// Defines every failure that can occur while scanning, parsing, or
/// evaluating a calculator expression. Each error records the character
/// position at which it was detected. Callers that only care about the
/// external contract collapse all of them into a single failure.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
