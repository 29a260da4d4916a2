use crate::{
    interpreter::evaluator::{DEFAULT_MAX_DEPTH, EvalOptions, Evaluator},
    util::num::render,
};

/// Key labels in layout order, four rows of eight.
pub const KEY_LABELS: &[&str] = &["7", "8", "9", "/", "sin", "cos", "tan", "C", "4", "5", "6",
                                  "*", "ln", "log", "sqrt", "(", "1", "2", "3", "-", "^", "e",
                                  "pi", ")", "0", ".", "=", "+", "exp", "abs", "mod", "DEL"];

/// Number of keys per row in [`KEY_LABELS`].
pub const KEYS_PER_ROW: usize = 8;

/// A single calculator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `C`: empties the display.
    Clear,
    /// `DEL`: removes the last character of the display.
    Delete,
    /// `=`: replaces the display with the result of evaluating it.
    Equals,
    /// Any other key: appends its label to the display.
    Insert(&'static str),
}

impl Key {
    /// Looks up the key with the given label.
    ///
    /// Returns `None` if no key carries that label.
    ///
    /// # Example
    /// ```
    /// use scical::keypad::Key;
    ///
    /// assert_eq!(Key::from_label("DEL"), Some(Key::Delete));
    /// assert_eq!(Key::from_label("sqrt"), Some(Key::Insert("sqrt")));
    /// assert_eq!(Key::from_label("x"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Self::Clear),
            "DEL" => Some(Self::Delete),
            "=" => Some(Self::Equals),
            _ => KEY_LABELS.iter()
                           .copied()
                           .find(|known| *known == label)
                           .map(Self::Insert),
        }
    }
}

/// The display buffer of a calculator driven by key presses.
///
/// The buffer is plain text. Evaluating it with `=` overwrites it with the
/// rendered result, or with `Error`, and further keys append to that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    display:   String,
    evaluator: Evaluator,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates a keypad with an empty display and default evaluation limits.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_evaluator(Evaluator::new(EvalOptions { max_depth: DEFAULT_MAX_DEPTH }))
    }

    /// Creates a keypad with an empty display that evaluates with
    /// `evaluator`.
    #[must_use]
    pub const fn with_evaluator(evaluator: Evaluator) -> Self {
        Self { display: String::new(),
               evaluator }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Applies one key press to the display.
    ///
    /// # Example
    /// ```
    /// use scical::keypad::{Key, Keypad};
    ///
    /// let mut keypad = Keypad::new();
    /// for label in ["2", "+", "3", "*", "4", "="] {
    ///     keypad.press(Key::from_label(label).unwrap());
    /// }
    /// assert_eq!(keypad.display(), "14.0");
    /// ```
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Clear => self.display.clear(),
            Key::Delete => {
                self.display.pop();
            },
            Key::Equals => self.display = render(&self.evaluator.evaluate(&self.display)),
            Key::Insert(text) => self.display.push_str(text),
        }
    }

    /// Presses every key in `keys` in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }
}
