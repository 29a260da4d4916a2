/// A forward-only scanning position over an expression.
///
/// The cursor only ever advances past ASCII characters, so its byte offset is
/// also the character offset reported in errors.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source:   &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               position: 0 }
    }

    /// Returns the current scan position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the lookahead character, or `None` at the end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the unconsumed remainder of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Moves past the lookahead character, if any.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    /// Skips any run of space characters.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.advance();
        }
    }

    /// Skips spaces, then consumes `expected` if it is the lookahead.
    ///
    /// Returns whether the character was consumed.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  + 1");
    /// assert!(!cursor.eat('-'));
    /// assert!(cursor.eat('+'));
    /// assert_eq!(cursor.rest(), " 1");
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_spaces();
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the longest run of characters matching `accept`.
    ///
    /// `accept` must only match ASCII characters.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("sqrt(2)");
    /// assert_eq!(cursor.take_while(|c| c.is_ascii_lowercase()), "sqrt");
    /// assert_eq!(cursor.peek(), Some('('));
    /// ```
    pub fn take_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        while let Some(c) = self.peek()
              && accept(c)
        {
            self.advance();
        }
        &self.source[start..self.position]
    }
}
