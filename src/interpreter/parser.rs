/// Parser state and entry point.
///
/// Holds the cursor and the nesting counter, and runs the top-level rule
/// followed by the trailing input check.
pub mod core;

/// Binary operator rules.
///
/// Implements the left-associative `+ -` and `* /` levels.
pub mod binary;

/// Factor rule.
///
/// Handles unary signs, parenthesized groups, numeric literals, identifiers,
/// and the `^` operator that may follow any of them.
pub mod unary;
