/// Defines a trigonometric builtin that takes its argument in degrees.
///
/// # Example
/// ```
/// use scical::interpreter::function::builtin::sin;
///
/// assert!((sin(90.0) - 1.0).abs() < 1e-12);
/// ```
macro_rules! degree_builtin {
    ($fname:ident) => {
        #[must_use]
        pub fn $fname(degrees: f64) -> f64 {
            degrees.to_radians().$fname()
        }
    };
}

degree_builtin!(sin);
degree_builtin!(cos);
degree_builtin!(tan);
