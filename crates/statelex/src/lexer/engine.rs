use crate::error::{DefinitionError, LexError, ScanError, ScanErrorKind};
use crate::lexer::builder::{LexerBuilder, RuleSet};
use crate::lexer::config::LexerConfig;
use crate::lexer::lexeme::{Action, Lexeme};
use crate::lexer::lint::{LintReport, Linter};
use crate::lexer::state::INITIAL_STATE;
use crate::lexer::token::{ERROR_TOKEN, NEWLINE_TOKEN, Token};
use compact_str::CompactString;
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::info;

/// The scanning engine.
///
/// A `Lexer` walks an input with the tables of a [`RuleSet`], tracking the
/// current line and column, the current state and a stack of saved states.
/// Rule actions receive `&mut Lexer` and use it to switch states or adjust
/// positions.
///
/// Scanning continues from wherever the previous scan left the engine; call
/// [`rewind`](Self::rewind) before reusing it on unrelated input.
///
/// # Example
///
/// ```rust
/// use statelex::{Action, Lexer, LexerConfig, TokenValue};
///
/// let mut lexer = Lexer::define(LexerConfig::default(), |rules| {
///     rules
///         .tokens(["NUMBER", "PLUS"])
///         .rule_with("NUMBER", "[0-9]+", |_, mut token| {
///             if let Some(value) = token.text().and_then(|text| text.parse().ok()) {
///                 token.value = TokenValue::Integer(value);
///             }
///             Ok(Action::Emit(token))
///         })
///         .rule("PLUS", r"\+")
///         .ignore(" ")
/// })?;
///
/// let tokens = lexer.tokenize("1 + 22")?;
/// assert_eq!(tokens[2].value, TokenValue::Integer(22));
/// assert_eq!(tokens[2].column(), 5);
/// # Ok::<(), statelex::LexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Arc<RuleSet>,
    config: LexerConfig,
    current_state: CompactString,
    state_stack: Vec<CompactString>,
    current_line: usize,
    char_pos_in_line: usize,
    pending_skip: usize,
    lint_report: LintReport,
}

impl Lexer {
    /// Create an engine for `rules`, linting them first.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::Lint`] if the rule set fails the [`Linter`].
    pub fn new(rules: impl Into<Arc<RuleSet>>, config: LexerConfig) -> Result<Self, LexError> {
        let rules = rules.into();
        let lint_report = Linter::lint(&rules)?;

        Ok(Self {
            rules,
            config,
            current_state: INITIAL_STATE.into(),
            state_stack: Vec::new(),
            current_line: 1,
            char_pos_in_line: 0,
            pending_skip: 0,
            lint_report,
        })
    }

    /// Declare, build and lint a rule set in one step.
    ///
    /// # Errors
    ///
    /// Returns any definition or lint error.
    pub fn define<F>(config: LexerConfig, declare: F) -> Result<Self, LexError>
    where
        F: FnOnce(LexerBuilder) -> LexerBuilder,
    {
        Self::new(declare(LexerBuilder::new()).build()?, config)
    }

    /// Switch to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::UndefinedState`] if no such state was declared.
    pub fn begin(&mut self, state: &str) -> Result<(), LexError> {
        if !self.rules.has_state(state) {
            return Err(DefinitionError::undefined_state(state).into());
        }
        self.current_state = state.into();
        Ok(())
    }

    /// Save the current state and switch to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::UndefinedState`] if no such state was declared.
    pub fn push_state(&mut self, state: &str) -> Result<(), LexError> {
        if !self.rules.has_state(state) {
            return Err(DefinitionError::undefined_state(state).into());
        }
        let previous = std::mem::replace(&mut self.current_state, state.into());
        self.state_stack.push(previous);
        Ok(())
    }

    /// Return to the most recently saved state.
    ///
    /// # Errors
    ///
    /// Returns [`ScanErrorKind::StateStackUnderflow`] if nothing was saved.
    pub fn pop_state(&mut self) -> Result<(), LexError> {
        let state = self.state_stack.pop().ok_or_else(|| {
            ScanError::new(
                self.current_line,
                self.column(),
                ScanErrorKind::StateStackUnderflow,
            )
        })?;
        self.current_state = state;
        Ok(())
    }

    /// Skip `n` more characters once the current match has been consumed.
    ///
    /// The skip belongs to the current match only and is dropped if the scan
    /// fails before it applies.
    pub fn skip(&mut self, n: usize) {
        self.pending_skip += n;
    }

    /// Move down `n` lines and back to the first column
    pub fn advance_line(&mut self, n: usize) {
        self.current_line += n;
        self.char_pos_in_line = 0;
    }

    /// Move `n` characters right on the current line
    pub fn advance_column(&mut self, n: usize) {
        self.char_pos_in_line += n;
    }

    /// Reset position, state and state stack for a new input
    pub fn rewind(&mut self) {
        self.current_line = 1;
        self.char_pos_in_line = 0;
        self.current_state = INITIAL_STATE.into();
        self.state_stack.clear();
        self.pending_skip = 0;
    }

    /// Lazily scan `input`.
    ///
    /// The iterator yields tokens in input order and stops after the first
    /// error.
    pub fn scan<'l, 'a>(&'l mut self, input: &'a str) -> Tokens<'l, 'a> {
        // a skip requested by a failed scan never applies to new input
        self.pending_skip = 0;
        Tokens {
            rules: Arc::clone(&self.rules),
            lexer: self,
            input,
            offset: 0,
            done: false,
        }
    }

    /// Like [`scan`](Self::scan), but logs the compiled tables first when
    /// debugging is enabled
    pub fn lex<'l, 'a>(&'l mut self, input: &'a str) -> Tokens<'l, 'a> {
        if self.config.debug {
            self.log_tables();
        }
        self.scan(input)
    }

    /// Feed every token of `input` to `callback`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error.
    pub fn stream_tokens<F>(&mut self, input: &str, mut callback: F) -> Result<(), LexError>
    where
        F: FnMut(Token),
    {
        for token in self.lex(input) {
            callback(token?);
        }
        Ok(())
    }

    /// Scan all of `input` into a vector.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>, LexError> {
        self.lex(input).collect()
    }

    #[must_use]
    pub fn current_state(&self) -> &str {
        &self.current_state
    }

    #[must_use]
    pub fn state_stack(&self) -> &[CompactString] {
        &self.state_stack
    }

    #[must_use]
    pub const fn current_line(&self) -> usize {
        self.current_line
    }

    /// 1-based column of the next character to scan
    #[must_use]
    pub const fn column(&self) -> usize {
        self.char_pos_in_line + 1
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub const fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Warnings the linter produced for this engine's rules
    #[must_use]
    pub const fn lint_report(&self) -> &LintReport {
        &self.lint_report
    }

    fn log_tables(&self) {
        info!("tokens: {:?}", self.rules.tokens());
        for (state, kind) in self.rules.states() {
            let lexemes: Vec<&str> = self.rules.lexemes(state).iter().map(Lexeme::name).collect();
            info!("state {} ({}): {:?}", state, kind, lexemes);
            info!(
                "state {}: ignore {:?}, error entry {}",
                state,
                self.rules.ignore(state),
                self.rules.has_error_entry(state)
            );
        }
    }
}

/// Lazy token iterator returned by [`Lexer::scan`] and [`Lexer::lex`].
pub struct Tokens<'l, 'a> {
    rules: Arc<RuleSet>,
    lexer: &'l mut Lexer,
    input: &'a str,
    offset: usize,
    done: bool,
}

impl Tokens<'_, '_> {
    /// Byte offset of the next character to scan
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let rules = Arc::clone(&self.rules);

        while let Some(c) = self.input[self.offset..].chars().next() {
            let state = self.lexer.current_state.clone();

            if rules.ignore(&state).is_some_and(|ignore| ignore.contains(c)) {
                self.offset += c.len_utf8();
                self.lexer.advance_column(1);
                continue;
            }

            let outcome = match self.longest_match(rules.lexemes(&state)) {
                Some((lexeme, len)) => self.apply_rule(lexeme, len)?,
                None => self.recover(&rules, &state, c)?,
            };
            self.apply_pending_skip();

            if let Action::Emit(token) = outcome {
                if self.lexer.config.debug {
                    info!("{}", token);
                }
                return Ok(Some(token));
            }
        }

        Ok(None)
    }

    /// Longest match wins; on a tie the earliest registered lexeme is kept
    fn longest_match<'r>(&self, lexemes: &'r [Lexeme]) -> Option<(&'r Lexeme, usize)> {
        let mut best: Option<(&Lexeme, usize)> = None;
        for lexeme in lexemes {
            if self.lexer.config.debug {
                info!(
                    "state {}: trying {} at {}:{}",
                    self.lexer.current_state,
                    lexeme.name(),
                    self.lexer.current_line,
                    self.lexer.column()
                );
            }
            if let Some(len) = lexeme.match_at(self.input, self.offset)
                && best.is_none_or(|(_, best_len)| len > best_len)
            {
                best = Some((lexeme, len));
            }
        }
        best
    }

    fn apply_rule(&mut self, lexeme: &Lexeme, len: usize) -> Result<Action, LexError> {
        let input = self.input;
        let text = &input[self.offset..self.offset + len];
        let token = Token::new(lexeme.name(), text)
            .with_position(self.lexer.current_line, self.lexer.column());

        let outcome = match lexeme.action() {
            Some(action) => action(self.lexer, token)?,
            None => Action::Emit(token),
        };

        self.offset += len;
        if lexeme.name() != NEWLINE_TOKEN {
            self.lexer.advance_column(text.chars().count());
        }
        Ok(outcome)
    }

    fn recover(&mut self, rules: &RuleSet, state: &str, c: char) -> Result<Action, LexError> {
        let line = self.lexer.current_line;
        let column = self.lexer.column();
        let Some(handler) = rules.error_handler(state) else {
            return Err(ScanError::illegal_character(c, line, column).into());
        };

        let input = self.input;
        let text = &input[self.offset..self.offset + c.len_utf8()];
        let outcome = handler(self.lexer, Token::new(ERROR_TOKEN, text).with_position(line, column));

        self.offset += c.len_utf8();
        self.lexer.advance_column(1);
        outcome
    }

    fn apply_pending_skip(&mut self) {
        let skip = std::mem::take(&mut self.lexer.pending_skip);
        let input = self.input;
        for c in input[self.offset..].chars().take(skip) {
            self.offset += c.len_utf8();
            self.lexer.advance_column(1);
        }
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                self.lexer.pending_skip = 0;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
