/// The cursor module scans the raw input one character at a time.
///
/// There is no separate token stream. The cursor exposes the current
/// lookahead character and lets the grammar functions consume single
/// operator characters or maximal runs of digits and letters in place.
///
/// # Responsibilities
/// - Tracks the scan position, which only ever moves forward.
/// - Skips spaces at token boundaries.
/// - Hands out borrowed slices of the input for literals and identifiers.
pub mod cursor;
/// The evaluator module is the public entry point for computing results.
///
/// It owns the evaluation options, constructs a fresh parser for every call,
/// and reports failures through the logging layer before returning them.
///
/// # Responsibilities
/// - Defines `Evaluator`, `EvalOptions`, and the free `evaluate` function.
/// - Guarantees that every call is independent of every other call.
pub mod evaluator;
/// The function module maps identifiers to builtin operations.
///
/// Identifiers are looked up in a fixed table after being scanned. Each entry
/// is either a named constant or a single-argument numeric function.
///
/// # Responsibilities
/// - Declares the builtin table and the lookup routine.
/// - Implements the degree-based trigonometric functions.
pub mod function;
/// The parser module evaluates the grammar while it scans.
///
/// Parsing and evaluation are fused: every grammar rule returns the numeric
/// value of the text it consumed. No syntax tree is built.
///
/// # Responsibilities
/// - Implements the expression, term, and factor rules.
/// - Enforces the nesting limit and rejects trailing input.
pub mod parser;
