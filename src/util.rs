/// Number rendering helpers.
///
/// This module turns evaluation results into the text shown on a calculator
/// display. Finite values use the shortest representation that reads back to
/// the same `f64`; non-finite values use fixed words.
pub mod num;
