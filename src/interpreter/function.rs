/// Builtin lookup table.
///
/// Declares every recognized identifier together with the operation it
/// stands for, and resolves scanned names against that table.
pub mod core;

/// Builtin numeric operations.
///
/// Holds the operations that are not a plain `f64` method, such as the
/// degree-based trigonometric functions.
pub mod builtin;
