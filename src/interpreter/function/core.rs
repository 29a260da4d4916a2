use tracing::trace;

use crate::interpreter::function::builtin;

/// A builtin operation bound to an identifier.
#[derive(Debug, Clone, Copy)]
pub enum Builtin {
    /// A named constant. It takes no argument.
    Constant(f64),
    /// A function applied to the factor that follows its name.
    Unary(fn(f64) -> f64),
}

/// Defines builtins by generating a lookup table and a name list.
///
/// Each entry maps a lowercase name to a [`Builtin`]. The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_NAMES` (public list of recognized identifiers).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $def:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, Builtin)] = &[
            $(
                ($name, $def),
            )*
        ];
        /// Every identifier the evaluator recognizes.
        pub const BUILTIN_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt" => Builtin::Unary(f64::sqrt),
    "sin"  => Builtin::Unary(builtin::sin),
    "cos"  => Builtin::Unary(builtin::cos),
    "tan"  => Builtin::Unary(builtin::tan),
    "ln"   => Builtin::Unary(f64::ln),
    "log"  => Builtin::Unary(f64::log10),
    "exp"  => Builtin::Unary(f64::exp),
    "abs"  => Builtin::Unary(f64::abs),
    "pi"   => Builtin::Constant(std::f64::consts::PI),
    "e"    => Builtin::Constant(std::f64::consts::E),
}

/// Resolves a scanned identifier to its builtin.
///
/// The whole identifier must match; there is no prefix matching, so `sinh`
/// is unknown rather than `sin` followed by `h`.
///
/// # Example
/// ```
/// use scical::interpreter::function::core::{Builtin, lookup};
///
/// assert!(matches!(lookup("pi"), Some(Builtin::Constant(v)) if v == std::f64::consts::PI));
/// assert!(matches!(lookup("sqrt"), Some(Builtin::Unary(_))));
/// assert!(lookup("sinh").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    let found = BUILTIN_TABLE.iter()
                             .find(|(candidate, _)| *candidate == name)
                             .map(|(_, builtin)| *builtin);
    trace!(name, found = found.is_some(), "resolved identifier");
    found
}
