//! # scical
//!
//! scical is a scientific calculator expression evaluator written in Rust.
//! It evaluates arithmetic with the usual precedence, parentheses, signs,
//! exponentiation, the constants `pi` and `e`, and single-argument functions
//! such as `sqrt`, `ln`, and degree-based `sin`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for evaluation.
///
/// This module defines every error that can be raised while scanning,
/// parsing, or evaluating an expression. Each error carries the character
/// position where it was detected.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes.
/// - Classifies errors into syntax, identifier, number, and resource kinds.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Scans, parses, and evaluates expressions.
///
/// This module ties together the character cursor, the grammar rules, and
/// the builtin table. It exposes the public evaluation entry points.
///
/// # Responsibilities
/// - Coordinates the cursor, parser, and builtin lookup.
/// - Provides `evaluate` and the configurable `Evaluator`.
pub mod interpreter;
/// Models the calculator keypad and its display buffer.
///
/// Key presses append text, edit the display, or evaluate it, without any
/// user interface attached.
pub mod keypad;
/// General utilities for rendering results.
pub mod util;

pub use error::{ErrorKind, EvalError};
pub use interpreter::evaluator::{
    DEFAULT_MAX_DEPTH, EvalOptions, EvalResult, Evaluator, evaluate,
};
pub use util::num::render;

/// Returns the display text for an expression.
///
/// The expression is evaluated with the default options and the outcome is
/// rendered: a number on success, `Error` on any failure.
///
/// # Examples
/// ```
/// use scical::get_result;
///
/// assert_eq!(get_result("2+3*4"), "14.0");
/// assert_eq!(get_result("1/0"), "Infinity");
///
/// // Unknown identifiers and trailing input both fail.
/// assert_eq!(get_result("foo(1)"), "Error");
/// assert_eq!(get_result("2+2 x"), "Error");
/// ```
#[must_use]
pub fn get_result(source: &str) -> String {
    render(&evaluate(source))
}
