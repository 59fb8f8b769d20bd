//! # Statelex
//!
//! Declarative, stateful lexer construction for Rust.
//!
//! ## Overview
//!
//! Statelex turns a set of declarations into a runnable scanner. It supports:
//!
//! - **Token rules**: regular expressions, literals, character classes,
//!   repetitions or custom matchers, with the longest match winning
//! - **Lexical states**: inclusive states that inherit the initial state's
//!   rules and exclusive states that do not, switched with a state stack
//! - **Actions**: closures that convert, rename or drop a match and drive
//!   state changes
//! - **Ignore sets**: characters skipped silently, per state
//! - **Error recovery**: per-state handlers for unrecognized characters
//! - **Linting**: structural checks run before the first scan
//!
//! ## Quick Start
//!
//! ```rust
//! use statelex::{Action, Lexer, LexerBuilder, LexerConfig, TokenValue};
//!
//! // 1. Declare tokens and rules
//! let rules = LexerBuilder::new()
//!     .tokens(["NUMBER", "IDENTIFIER", "EQUALS", "PLUS"])
//!     .rule("IDENTIFIER", r"[_a-zA-Z][_a-zA-Z0-9]*")
//!     .rule("EQUALS", "=")
//!     .rule("PLUS", r"\+")
//!     .rule_with("NUMBER", "[0-9]+", |_lexer, mut token| {
//!         if let Some(value) = token.text().and_then(|text| text.parse::<i64>().ok()) {
//!             token.value = TokenValue::Integer(value);
//!         }
//!         Ok(Action::Emit(token))
//!     })
//!     .ignore(" \t")
//!     .build()?;
//!
//! // 2. Create an engine; the rules are linted here
//! let mut lexer = Lexer::new(rules, LexerConfig::default())?;
//!
//! // 3. Scan
//! let tokens = lexer.tokenize("x = 5 + 44")?;
//! assert_eq!(tokens[2].to_tuple(), ("NUMBER", TokenValue::Integer(5), 1, 5));
//! assert_eq!(tokens[4].to_tuple(), ("NUMBER", TokenValue::Integer(44), 1, 9));
//! # Ok::<(), statelex::LexError>(())
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] - Rule compilation, linting and the scanning engine
//! - [`error`] - Error types and diagnostics

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{DefinitionError, LexError, LintFailure, ScanError, ScanErrorKind};
pub use lexer::{
    Action, ActionFn, ERROR_TOKEN, CharSet, IgnoreSet, Lexeme, Lexer, LexerBuilder, LexerConfig, LintReport,
    LintWarning, Linter, Pattern, RuleSet, SourceLine, State, StateKind, Token, TokenValue,
    Tokens,
};
