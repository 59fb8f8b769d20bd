use crate::error::DefinitionError;
use crate::lexer::lexeme::Lexeme;
use compact_str::CompactString;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Name of the state every lexer starts in. It always exists and is inclusive.
pub const INITIAL_STATE: &str = "initial";

/// How a state relates to the initial state's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum StateKind {
    /// Also matches every rule of the initial state, plus its ignore and
    /// error settings unless overridden
    #[default]
    Inclusive,
    /// Matches only its own rules
    Exclusive,
}

impl StateKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inclusive => "inclusive",
            Self::Exclusive => "exclusive",
        }
    }
}

impl FromStr for StateKind {
    type Err = DefinitionError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "inclusive" => Ok(Self::Inclusive),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(DefinitionError::InvalidStateKind { kind: other.into() }),
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered rules available in one lexical state.
///
/// Lexemes keep registration order, which decides ties between equally long
/// matches. A state never holds two lexemes with the same token name.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    name: CompactString,
    lexemes: Vec<Lexeme>,
}

impl State {
    #[must_use]
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            lexemes: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a lexeme declared for this state.
    ///
    /// A lexeme of the same name that was inherited from the initial state is
    /// replaced in place.
    pub(crate) fn register(&mut self, lexeme: Lexeme) {
        match self.lexemes.iter_mut().find(|existing| **existing == lexeme) {
            Some(existing) => *existing = lexeme,
            None => self.lexemes.push(lexeme),
        }
    }

    /// Append every lexeme from `lexemes` whose name is not present yet.
    pub(crate) fn update<'a>(&mut self, lexemes: impl IntoIterator<Item = &'a Lexeme>) {
        for lexeme in lexemes {
            if !self.lexemes.contains(lexeme) {
                self.lexemes.push(lexeme.clone());
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lexeme> {
        self.lexemes.iter()
    }

    #[must_use]
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// Look up a lexeme by token name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Lexeme> {
        self.lexemes.iter().find(|lexeme| lexeme.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Lexeme;
    type IntoIter = std::slice::Iter<'a, Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
