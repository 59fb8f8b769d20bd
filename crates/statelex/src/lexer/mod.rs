//! # Lexer Module
//!
//! Rule compilation, validation and scanning.
//!
//! ## Overview
//!
//! A lexer is built in three steps:
//!
//! - **Declare**: a [`LexerBuilder`] records token names, states, rules,
//!   ignore sets and error handlers
//! - **Compile**: [`LexerBuilder::build`] resolves state prefixes, applies
//!   inclusive-state inheritance and produces an immutable [`RuleSet`]
//! - **Scan**: a [`Lexer`] lints the rule set once and then turns input into
//!   positioned [`Token`]s
//!
//! ## States
//!
//! Every lexer has an inclusive `initial` state. Additional states are either
//! inclusive (they also match every initial rule and share its ignore and
//! error settings unless they declare their own) or exclusive (they match
//! only their own rules). Rules are assigned to states by prefixing the rule
//! name: `comment_WORD` is a `WORD` rule of the `comment` state.
//!
//! ```rust
//! use statelex::{Action, Lexer, LexerConfig, StateKind};
//!
//! let mut lexer = Lexer::define(LexerConfig::default(), |rules| {
//!     rules
//!         .tokens(["WORD", "BEGINCOMMENT", "ENDCOMMENT"])
//!         .states([("comment", StateKind::Exclusive)])
//!         .rule("WORD", r"[a-z]+")
//!         .rule_with("BEGINCOMMENT", "<!--", |lexer, _| {
//!             lexer.push_state("comment")?;
//!             Ok(Action::Suppress)
//!         })
//!         .rule_with("comment_ENDCOMMENT", "-->", |lexer, _| {
//!             lexer.pop_state()?;
//!             Ok(Action::Suppress)
//!         })
//!         .rule_with("comment_WORD", r"[a-z]+", |_, _| Ok(Action::Suppress))
//!         .ignore(" ")
//!         .ignore_in("comment", " ")
//!         .error_unhandled_in("comment")
//! })?;
//!
//! let words: Vec<_> = lexer
//!     .tokenize("hello <!-- hidden --> world")?
//!     .into_iter()
//!     .map(|token| token.to_string())
//!     .collect();
//! assert_eq!(words, ["Token(WORD,hello,1,1)", "Token(WORD,world,1,23)"]);
//! # Ok::<(), statelex::LexError>(())
//! ```
//!
//! ## Error Handling
//!
//! Characters no rule matches are passed to the state's error handler as a
//! one-character `error` token. Without a handler the scan stops with a
//! [`ScanError`](crate::ScanError).

pub mod builder;
pub mod config;
pub mod engine;
pub mod lexeme;
pub mod lint;
pub mod pattern;
pub mod state;
pub mod token;

pub use builder::{IgnoreSet, LexerBuilder, RuleSet};
pub use config::LexerConfig;
pub use engine::{Lexer, Tokens};
pub use lexeme::{Action, ActionFn, Lexeme};
pub use lint::{LintReport, LintWarning, Linter};
pub use pattern::{CharSet, CustomMatcher, Pattern};
pub use state::{INITIAL_STATE, State, StateKind};
pub use token::{ERROR_TOKEN, NEWLINE_TOKEN, SourceLine, Token, TokenValue};
