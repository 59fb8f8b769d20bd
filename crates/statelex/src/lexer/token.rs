use compact_str::CompactString;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Name given to the synthetic tokens built for unrecognized characters.
pub const ERROR_TOKEN: &str = "error";

/// Token name whose matches leave column tracking to the rule's own action.
///
/// A `newline` rule is expected to call
/// [`Lexer::advance_line`](crate::Lexer::advance_line) from its action.
pub const NEWLINE_TOKEN: &str = "newline";

/// A 1-based line and column position in the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SourceLine {
    pub line: usize,
    pub column: usize,
}

impl SourceLine {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLine {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// The value carried by a token.
///
/// Tokens start out holding the text they matched. Rule actions may replace it
/// with a converted value.
///
/// # Example
///
/// ```rust
/// use statelex::TokenValue;
///
/// let text = TokenValue::from("42");
/// assert_eq!(text.as_text(), Some("42"));
///
/// let number = TokenValue::Integer(42);
/// assert_eq!(number.as_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum TokenValue {
    /// No value (e.g. cleared by an action)
    None,
    /// Raw matched text
    Text(CompactString),
    /// Parsed integer value
    Integer(i64),
    /// Parsed floating-point value
    Float(f64),
    /// Parsed character value
    Char(char),
    /// Parsed boolean value
    Bool(bool),
}

impl TokenValue {
    /// The text of a [`TokenValue::Text`] value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The integer of a [`TokenValue::Integer`] value
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<CompactString> for TokenValue {
    fn from(text: CompactString) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<char> for TokenValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// A token produced by the lexer.
///
/// Each token has a name (one of the declared token names, a lower-case
/// rule name, or [`ERROR_TOKEN`]), a value, and the position where its match
/// started.
///
/// Rule actions receive the candidate token by value and may rename it or
/// replace its value before emitting it:
///
/// ```rust
/// use statelex::{Token, TokenValue};
///
/// let mut token = Token::new("NUMBER", "42");
/// if let Some(text) = token.text() {
///     token.value = TokenValue::Integer(text.parse().unwrap());
/// }
/// assert_eq!(token.value, TokenValue::Integer(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Token {
    /// The token's name (e.g. `NUMBER`, `IDENTIFIER`)
    pub name: CompactString,
    /// The matched text, or whatever an action replaced it with
    pub value: TokenValue,
    source_line: SourceLine,
}

impl Token {
    /// Create a token positioned at line 1, column 1.
    #[must_use]
    pub fn new(name: impl Into<CompactString>, value: impl Into<TokenValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            source_line: SourceLine::default(),
        }
    }

    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.update_line(line, column);
        self
    }

    /// The token's text if its value is still text
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.value.as_text()
    }

    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.source_line.line
    }

    #[inline]
    #[must_use]
    pub const fn column(&self) -> usize {
        self.source_line.column
    }

    #[must_use]
    pub const fn source_line(&self) -> SourceLine {
        self.source_line
    }

    /// `true` for tokens synthesized by error recovery
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.name == ERROR_TOKEN
    }

    pub(crate) fn update_line(&mut self, line: usize, column: usize) {
        self.source_line = SourceLine::new(line, column);
    }

    /// This token as a `(name, value, line, column)` tuple.
    ///
    /// ```rust
    /// use statelex::{Token, TokenValue};
    ///
    /// let token = Token::new("PLUS", "+").with_position(1, 7);
    /// assert_eq!(token.to_tuple(), ("PLUS", TokenValue::from("+"), 1, 7));
    /// ```
    #[must_use]
    pub fn to_tuple(&self) -> (&str, TokenValue, usize, usize) {
        (
            self.name.as_str(),
            self.value.clone(),
            self.line(),
            self.column(),
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({},{},{},{})",
            self.name,
            self.value,
            self.line(),
            self.column()
        )
    }
}
