use crate::interpreter::evaluator::EvalResult;

/// Text shown in place of a result when evaluation fails.
pub const ERROR_TEXT: &str = "Error";

/// Renders a number for display.
///
/// Finite values always carry a fractional part or an exponent, so integral
/// results read as `14.0` rather than `14`. The output parses back to the
/// same `f64`.
///
/// ## Example
/// ```
/// use scical::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14.0");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Renders an evaluation result for display.
///
/// Every failure collapses to [`ERROR_TEXT`]; the error detail is not shown.
///
/// ## Example
/// ```
/// use scical::{evaluate, util::num::render};
///
/// assert_eq!(render(&evaluate("1/0")), "Infinity");
/// assert_eq!(render(&evaluate("2+")), "Error");
/// ```
#[must_use]
pub fn render(result: &EvalResult<f64>) -> String {
    match result {
        Ok(value) => format_number(*value),
        Err(_) => ERROR_TEXT.to_string(),
    }
}
