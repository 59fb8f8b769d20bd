use crate::error::LexError;
use crate::lexer::engine::Lexer;
use crate::lexer::pattern::Matcher;
use crate::lexer::token::Token;
use compact_str::CompactString;
use std::fmt;
use std::sync::Arc;

/// What a rule or error action decided to do with its candidate token.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hand this token to the caller
    Emit(Token),
    /// Drop the match; the input it covered is still consumed
    Suppress,
}

impl From<Token> for Action {
    fn from(token: Token) -> Self {
        Self::Emit(token)
    }
}

/// A transform invoked with the engine and the candidate token.
///
/// Actions may reclassify the token, convert its value, switch states through
/// the engine, or abort the scan by returning an error.
pub type ActionFn = Arc<dyn Fn(&mut Lexer, Token) -> Result<Action, LexError> + Send + Sync>;

/// A compiled rule: a token name, its matcher and an optional action.
///
/// Two lexemes are equal when they produce the same token name, whatever
/// their patterns.
#[derive(Clone)]
pub struct Lexeme {
    name: CompactString,
    matcher: Matcher,
    action: Option<ActionFn>,
}

impl Lexeme {
    pub(crate) fn new(name: CompactString, matcher: Matcher, action: Option<ActionFn>) -> Self {
        Self {
            name,
            matcher,
            action,
        }
    }

    /// The token name this lexeme produces
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Byte length of the match at `offset`, if any. Never consumes input.
    #[must_use]
    pub fn match_at(&self, input: &str, offset: usize) -> Option<usize> {
        self.matcher.match_at(input, offset)
    }

    pub(crate) fn action(&self) -> Option<&ActionFn> {
        self.action.as_ref()
    }
}

impl PartialEq for Lexeme {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Lexeme {}

impl fmt::Debug for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexeme")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .field("action", &self.action.as_ref().map(|_| ".."))
            .finish()
    }
}
