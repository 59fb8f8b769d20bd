//! # Error Types
//!
//! Error types for lexer definition, linting and scanning.
//!
//! ## Overview
//!
//! A lexer can fail at three different points in its life:
//!
//! - **Definition errors**: malformed declarations rejected while a
//!   [`RuleSet`](crate::RuleSet) is compiled (bad token names, duplicate rules,
//!   undeclared tokens, invalid patterns, unknown states)
//! - **Lint failures**: a compiled rule set that is structurally incomplete
//!   (no tokens, no rules, a state nobody can scan in)
//! - **Scan errors**: input the current state cannot recognize and has no
//!   error handler for
//!
//! [`LexError`] wraps all of them so rule actions can propagate any failure
//! with `?`.
//!
//! ## Usage
//!
//! ```rust
//! use statelex::{LexError, Lexer, LexerBuilder, LexerConfig};
//!
//! let rules = LexerBuilder::new()
//!     .tokens(["WORD"])
//!     .rule("WORD", r"\w+")
//!     .build()?;
//! let mut lexer = Lexer::new(rules, LexerConfig::default())?;
//!
//! match lexer.tokenize("hello ?") {
//!     Err(LexError::Scan(err)) => {
//!         assert_eq!(err.line, 1);
//!         assert_eq!(err.column, 6);
//!     }
//!     other => panic!("expected a scan error, got {other:?}"),
//! }
//! # Ok::<(), LexError>(())
//! ```
//!
//! ## Diagnostics Support
//!
//! When the `diagnostics` feature is enabled, errors integrate with [`miette`]
//! and carry stable diagnostic codes.

use compact_str::CompactString;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Errors raised while compiling lexer declarations into a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum DefinitionError {
    #[error("No token list defined")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(definition::no_tokens)))]
    NoTokens,

    #[error("Bad token name `{name}`")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(definition::bad_token_name)))]
    BadTokenName { name: CompactString },

    #[error("Token `{name}` already defined")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(definition::duplicate_token)))]
    DuplicateToken { name: CompactString },

    #[error("Rule '{rule}' defined for an unspecified token {token}")]
    #[cfg_attr(
        feature = "diagnostics",
        diagnostic(
            code(definition::undeclared_token),
            help("add the token to the `tokens` declaration")
        )
    )]
    UndeclaredToken {
        rule: CompactString,
        token: CompactString,
    },

    #[error("Rule '{rule}' redefined.")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(definition::rule_redefined)))]
    RuleRedefined { rule: CompactString },

    #[error("Invalid pattern for rule '{rule}': {reason}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(definition::invalid_pattern)))]
    InvalidPattern { rule: CompactString, reason: String },

    #[error("State type `{kind}` must be inclusive or exclusive")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(definition::invalid_state_kind)))]
    InvalidStateKind { kind: CompactString },

    #[error("Undefined state: {state}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(definition::undefined_state)))]
    UndefinedState { state: CompactString },
}

impl DefinitionError {
    /// Create an undefined state error
    #[must_use]
    pub fn undefined_state(state: &str) -> Self {
        Self::UndefinedState {
            state: state.into(),
        }
    }

    /// Create a bad token name error
    #[must_use]
    pub fn bad_token_name(name: &str) -> Self {
        Self::BadTokenName { name: name.into() }
    }
}

/// Failures reported by the [`Linter`](crate::Linter) for an incomplete rule set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum LintFailure {
    #[error("No token list defined")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lint::no_tokens)))]
    NoTokens,

    #[error("Bad token name `{name}`")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lint::bad_token_name)))]
    BadTokenName { name: CompactString },

    #[error("Token `{name}` already defined")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lint::duplicate_token)))]
    DuplicateToken { name: CompactString },

    #[error("No rules are defined")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lint::no_rules)))]
    NoRules,

    #[error("No rules defined for state '{state}'")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lint::no_rules_for_state)))]
    NoRulesForState { state: CompactString },
}

/// Scan error with location information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
#[error("{kind} at line {line}, column {column}")]
pub struct ScanError {
    /// 1-based line of the offending position
    pub line: usize,
    /// 1-based column of the offending position
    pub column: usize,
    pub kind: ScanErrorKind,
}

/// Types of scan errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum ScanErrorKind {
    #[error("Illegal character `{char}`")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scan::illegal_character)))]
    IllegalCharacter { char: char },

    #[error("Cannot pop state: the state stack is empty")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(scan::state_stack_underflow)))]
    StateStackUnderflow,
}

impl ScanError {
    /// Create a new scan error
    #[must_use]
    pub const fn new(line: usize, column: usize, kind: ScanErrorKind) -> Self {
        Self { line, column, kind }
    }

    /// Create an illegal character error
    #[must_use]
    pub const fn illegal_character(char: char, line: usize, column: usize) -> Self {
        Self::new(line, column, ScanErrorKind::IllegalCharacter { char })
    }

    /// Get the kind of scan error
    #[must_use]
    pub const fn kind(&self) -> &ScanErrorKind {
        &self.kind
    }
}

/// Any error the lexer can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum LexError {
    #[error(transparent)]
    #[cfg_attr(feature = "diagnostics", diagnostic(transparent))]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    #[cfg_attr(feature = "diagnostics", diagnostic(transparent))]
    Lint(#[from] LintFailure),

    #[error(transparent)]
    #[cfg_attr(feature = "diagnostics", diagnostic(transparent))]
    Scan(#[from] ScanError),

    /// Raised by a user action to abort the scan
    #[error("{0}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::action)))]
    Action(String),
}

impl LexError {
    /// Create an error from inside a rule or error action
    #[must_use]
    pub fn action(message: impl Into<String>) -> Self {
        Self::Action(message.into())
    }

    /// `true` if this error was raised while scanning input
    #[must_use]
    pub const fn is_scan_error(&self) -> bool {
        matches!(self, Self::Scan(_) | Self::Action(_))
    }
}
