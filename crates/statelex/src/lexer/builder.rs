use crate::error::{DefinitionError, LexError};
use crate::lexer::engine::Lexer;
use crate::lexer::lexeme::{Action, ActionFn, Lexeme};
use crate::lexer::pattern::{CharSet, Pattern};
use crate::lexer::state::{INITIAL_STATE, State, StateKind};
use crate::lexer::token::Token;
use compact_str::CompactString;
use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Characters a state skips silently between tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreSet {
    /// Every character of the string
    Chars(CompactString),
    /// Every character of the set
    Class(CharSet),
}

impl IgnoreSet {
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Chars(chars) => chars.contains(c),
            Self::Class(set) => set.matches(c),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Chars(chars) => chars.is_empty(),
            Self::Class(set) => set.ranges().is_empty(),
        }
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::Chars(CompactString::default())
    }
}

impl From<&str> for IgnoreSet {
    fn from(chars: &str) -> Self {
        Self::Chars(chars.into())
    }
}

impl From<String> for IgnoreSet {
    fn from(chars: String) -> Self {
        Self::Chars(chars.into())
    }
}

impl From<CharSet> for IgnoreSet {
    fn from(set: CharSet) -> Self {
        Self::Class(set)
    }
}

enum Declaration {
    Rule {
        name: CompactString,
        pattern: Pattern,
        action: Option<ActionFn>,
    },
    Ignore {
        states: Option<CompactString>,
        chars: IgnoreSet,
    },
    Error {
        states: Option<CompactString>,
        handler: Option<ActionFn>,
    },
}

/// Collects token, state and rule declarations and compiles them into a
/// [`RuleSet`].
///
/// Token and state declarations are applied before any rule, so the order in
/// which `states`, `rule`, `ignore` and `error` are chained does not matter.
/// Rules, ignore sets and error handlers are applied in the order they were
/// declared.
///
/// A rule name may be prefixed with the states it belongs to, separated by
/// `_`: `brace_RBRACE` adds an `RBRACE` rule to the `brace` state, and
/// `comment_code_WORD` adds `WORD` to both `comment` and `code`. Names
/// without a state prefix go to the initial state.
///
/// # Example
///
/// ```rust
/// use statelex::{Action, LexerBuilder, StateKind};
///
/// let rules = LexerBuilder::new()
///     .tokens(["WORD", "LBRACE", "RBRACE"])
///     .states([("brace", StateKind::Exclusive)])
///     .rule("WORD", "[a-z]+")
///     .rule_with("LBRACE", r"\{", |lexer, token| {
///         lexer.push_state("brace")?;
///         Ok(Action::Emit(token))
///     })
///     .rule_with("brace_RBRACE", r"\}", |lexer, token| {
///         lexer.pop_state()?;
///         Ok(Action::Emit(token))
///     })
///     .ignore(" ")
///     .build()?;
///
/// assert_eq!(rules.lexemes("brace").len(), 1);
/// # Ok::<(), statelex::LexError>(())
/// ```
#[derive(Default)]
pub struct LexerBuilder {
    tokens: Option<Vec<CompactString>>,
    states: Vec<(CompactString, StateKind)>,
    declarations: SmallVec<[Declaration; 16]>,
}

impl LexerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the token names. A later call replaces an earlier one.
    #[must_use]
    pub fn tokens<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CompactString>,
    {
        self.tokens = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Declare lexical states. Redeclaring a state replaces its kind.
    #[must_use]
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (S, StateKind)>,
        S: Into<CompactString>,
    {
        self.states
            .extend(states.into_iter().map(|(name, kind)| (name.into(), kind)));
        self
    }

    /// Add a rule that emits its match unchanged
    #[must_use]
    pub fn rule(mut self, name: &str, pattern: impl Into<Pattern>) -> Self {
        self.declarations.push(Declaration::Rule {
            name: name.into(),
            pattern: pattern.into(),
            action: None,
        });
        self
    }

    /// Add a rule whose action decides what happens to each match
    #[must_use]
    pub fn rule_with<F>(mut self, name: &str, pattern: impl Into<Pattern>, action: F) -> Self
    where
        F: Fn(&mut Lexer, Token) -> Result<Action, LexError> + Send + Sync + 'static,
    {
        self.declarations.push(Declaration::Rule {
            name: name.into(),
            pattern: pattern.into(),
            action: Some(Arc::new(action)),
        });
        self
    }

    /// Characters the initial state skips
    #[must_use]
    pub fn ignore(self, chars: impl Into<IgnoreSet>) -> Self {
        self.push_ignore(None, chars.into())
    }

    /// Characters skipped in `states` (one name, or several joined with `_`)
    #[must_use]
    pub fn ignore_in(self, states: &str, chars: impl Into<IgnoreSet>) -> Self {
        self.push_ignore(Some(states.into()), chars.into())
    }

    /// Error handler for the initial state
    #[must_use]
    pub fn error<F>(self, handler: F) -> Self
    where
        F: Fn(&mut Lexer, Token) -> Result<Action, LexError> + Send + Sync + 'static,
    {
        self.push_error(None, Some(Arc::new(handler)))
    }

    /// Error handler for `states` (one name, or several joined with `_`)
    #[must_use]
    pub fn error_in<F>(self, states: &str, handler: F) -> Self
    where
        F: Fn(&mut Lexer, Token) -> Result<Action, LexError> + Send + Sync + 'static,
    {
        self.push_error(Some(states.into()), Some(Arc::new(handler)))
    }

    /// Mark `states` as having an error entry without a handler.
    ///
    /// This silences the missing-handler lint for exclusive states while
    /// keeping unrecognized input fatal.
    #[must_use]
    pub fn error_unhandled_in(self, states: &str) -> Self {
        self.push_error(Some(states.into()), None)
    }

    fn push_ignore(mut self, states: Option<CompactString>, chars: IgnoreSet) -> Self {
        self.declarations
            .push(Declaration::Ignore { states, chars });
        self
    }

    fn push_error(mut self, states: Option<CompactString>, handler: Option<ActionFn>) -> Self {
        self.declarations
            .push(Declaration::Error { states, handler });
        self
    }

    /// Compile the declarations into a rule set.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefinitionError`] found: a missing, malformed or
    /// duplicated token list, a rule for an undeclared upper-case token, a
    /// rule declared twice for the same state, or an invalid pattern.
    pub fn build(self) -> Result<RuleSet, LexError> {
        let mut compiler = Compiler::new(self.tokens.unwrap_or_default())?;
        compiler.declare_states(self.states);

        for declaration in self.declarations {
            match declaration {
                Declaration::Rule {
                    name,
                    pattern,
                    action,
                } => compiler.add_rule(&name, &pattern, action)?,
                Declaration::Ignore { states, chars } => {
                    compiler.set_ignore(states.as_deref(), chars);
                }
                Declaration::Error { states, handler } => {
                    compiler.set_error(states.as_deref(), handler);
                }
            }
        }

        Ok(compiler.finish())
    }
}

/// `true` for names made only of ASCII letters and digits
pub(crate) fn is_token_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn split_states(states: Option<&str>) -> SmallVec<[&str; 4]> {
    states.map_or_else(
        || SmallVec::from_slice(&[INITIAL_STATE]),
        |states| states.split('_').collect(),
    )
}

struct Compiler {
    tokens: Vec<CompactString>,
    states: Vec<(CompactString, StateKind)>,
    tables: HashMap<CompactString, State, ahash::RandomState>,
    ignore: HashMap<CompactString, IgnoreSet, ahash::RandomState>,
    errors: HashMap<CompactString, Option<ActionFn>, ahash::RandomState>,
    rule_keys: HashSet<(CompactString, CompactString), ahash::RandomState>,
}

impl Compiler {
    fn new(tokens: Vec<CompactString>) -> Result<Self, DefinitionError> {
        let mut compiler = Self {
            tokens: Vec::new(),
            states: vec![(INITIAL_STATE.into(), StateKind::Inclusive)],
            tables: HashMap::with_hasher(ahash::RandomState::new()),
            ignore: HashMap::with_hasher(ahash::RandomState::new()),
            errors: HashMap::with_hasher(ahash::RandomState::new()),
            rule_keys: HashSet::with_hasher(ahash::RandomState::new()),
        };
        compiler.declare_tokens(tokens)?;
        compiler
            .tables
            .insert(INITIAL_STATE.into(), State::new(INITIAL_STATE));
        Ok(compiler)
    }

    fn declare_tokens(&mut self, tokens: Vec<CompactString>) -> Result<(), DefinitionError> {
        if tokens.is_empty() {
            return Err(DefinitionError::NoTokens);
        }

        for (index, name) in tokens.iter().enumerate() {
            if !is_token_name(name) {
                return Err(DefinitionError::bad_token_name(name));
            }
            if tokens[..index].contains(name) {
                return Err(DefinitionError::DuplicateToken { name: name.clone() });
            }
        }

        self.tokens = tokens;
        Ok(())
    }

    fn declare_states(&mut self, states: Vec<(CompactString, StateKind)>) {
        for (name, kind) in states {
            match self.states.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = kind,
                None => self.states.push((name, kind)),
            }
        }
    }

    fn is_state(&self, name: &str) -> bool {
        self.states.iter().any(|(state, _)| state == name)
    }

    fn inclusive_states(&self) -> SmallVec<[CompactString; 8]> {
        self.states
            .iter()
            .filter(|(name, kind)| *kind == StateKind::Inclusive && name != INITIAL_STATE)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Split a rule name into its target states and its token name.
    fn resolve_rule_name<'a>(&self, raw: &'a str) -> (SmallVec<[&'a str; 4]>, CompactString) {
        let segments: SmallVec<[&str; 4]> = raw.split('_').collect();
        match segments.iter().position(|segment| !self.is_state(segment)) {
            Some(boundary) if boundary > 0 => (
                SmallVec::from_slice(&segments[..boundary]),
                segments[boundary..].join("_").into(),
            ),
            _ => (SmallVec::from_slice(&[INITIAL_STATE]), raw.into()),
        }
    }

    fn add_rule(
        &mut self,
        raw: &str,
        pattern: &Pattern,
        action: Option<ActionFn>,
    ) -> Result<(), DefinitionError> {
        let (targets, name) = self.resolve_rule_name(raw);

        if name.is_empty() {
            return Err(DefinitionError::bad_token_name(raw));
        }
        if name.chars().all(char::is_uppercase) && !self.tokens.contains(&name) {
            return Err(DefinitionError::UndeclaredToken {
                rule: raw.into(),
                token: name,
            });
        }

        let matcher = pattern
            .compile()
            .map_err(|err| DefinitionError::InvalidPattern {
                rule: raw.into(),
                reason: err.to_string(),
            })?;
        let lexeme = Lexeme::new(name.clone(), matcher, action);

        for state in targets {
            if !self.rule_keys.insert((state.into(), name.clone())) {
                return Err(DefinitionError::RuleRedefined { rule: raw.into() });
            }
            self.tables
                .entry(state.into())
                .or_insert_with(|| State::new(state))
                .register(lexeme.clone());
        }

        self.update_inclusive_states();
        Ok(())
    }

    /// Give every inclusive state the initial state's lexemes it lacks
    fn update_inclusive_states(&mut self) {
        let initial: Vec<Lexeme> = self
            .tables
            .get(INITIAL_STATE)
            .map(|state| state.lexemes().to_vec())
            .unwrap_or_default();

        for name in self.inclusive_states() {
            self.tables
                .entry(name.clone())
                .or_insert_with(|| State::new(name))
                .update(&initial);
        }
    }

    fn set_ignore(&mut self, states: Option<&str>, chars: IgnoreSet) {
        for state in split_states(states) {
            if !self.is_state(state) {
                warn!("Ignore rule defined for undeclared state '{}'", state);
            }
            self.ignore.insert(state.into(), chars.clone());
        }
        self.backfill();
    }

    fn set_error(&mut self, states: Option<&str>, handler: Option<ActionFn>) {
        for state in split_states(states) {
            if !self.is_state(state) {
                warn!("Error rule defined for undeclared state '{}'", state);
            }
            self.errors.insert(state.into(), handler.clone());
        }
        self.backfill();
    }

    /// Inclusive states without their own ignore or error entry take the
    /// initial state's
    fn backfill(&mut self) {
        let ignore = self.ignore.get(INITIAL_STATE).cloned();
        let error = self.errors.get(INITIAL_STATE).cloned();

        for name in self.inclusive_states() {
            if let Some(ignore) = &ignore {
                self.ignore
                    .entry(name.clone())
                    .or_insert_with(|| ignore.clone());
            }
            if let Some(error) = &error {
                self.errors.entry(name).or_insert_with(|| error.clone());
            }
        }
    }

    fn finish(mut self) -> RuleSet {
        self.ignore.entry(INITIAL_STATE.into()).or_default();
        self.update_inclusive_states();
        self.backfill();

        RuleSet {
            rule_count: self.rule_keys.len(),
            tokens: self.tokens,
            states: self.states,
            tables: self.tables,
            ignore: self.ignore,
            errors: self.errors,
        }
    }
}

/// Compiled, immutable per-state rule tables.
///
/// A `RuleSet` is built once by [`LexerBuilder::build`] and can be shared by
/// any number of [`Lexer`]s.
pub struct RuleSet {
    tokens: Vec<CompactString>,
    states: Vec<(CompactString, StateKind)>,
    tables: HashMap<CompactString, State, ahash::RandomState>,
    ignore: HashMap<CompactString, IgnoreSet, ahash::RandomState>,
    errors: HashMap<CompactString, Option<ActionFn>, ahash::RandomState>,
    rule_count: usize,
}

impl RuleSet {
    /// Declared token names, in declaration order
    #[must_use]
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    /// Declared states, the initial state first
    pub fn states(&self) -> impl Iterator<Item = (&str, StateKind)> {
        self.states.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    #[must_use]
    pub fn state_kind(&self, name: &str) -> Option<StateKind> {
        self.states
            .iter()
            .find(|(state, _)| state == name)
            .map(|(_, kind)| *kind)
    }

    #[must_use]
    pub fn has_state(&self, name: &str) -> bool {
        self.state_kind(name).is_some()
    }

    #[must_use]
    pub fn state(&self, name: &str) -> Option<&State> {
        self.tables.get(name)
    }

    /// Resolved lexemes of a state, inherited ones included
    #[must_use]
    pub fn lexemes(&self, name: &str) -> &[Lexeme] {
        self.tables.get(name).map(State::lexemes).unwrap_or_default()
    }

    #[must_use]
    pub fn ignore(&self, name: &str) -> Option<&IgnoreSet> {
        self.ignore.get(name)
    }

    /// `true` if the state has an error entry, with or without a handler
    #[must_use]
    pub fn has_error_entry(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    pub(crate) fn error_handler(&self, name: &str) -> Option<&ActionFn> {
        self.errors.get(name).and_then(Option::as_ref)
    }

    /// Number of `(state, token)` rules declared, inherited copies excluded
    #[must_use]
    pub const fn rule_count(&self) -> usize {
        self.rule_count
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors: Vec<(&str, bool)> = self
            .errors
            .iter()
            .map(|(state, handler)| (state.as_str(), handler.is_some()))
            .collect();
        f.debug_struct("RuleSet")
            .field("tokens", &self.tokens)
            .field("states", &self.states)
            .field("tables", &self.tables)
            .field("ignore", &self.ignore)
            .field("errors", &errors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rules: &RuleSet, state: &str) -> Vec<String> {
        rules
            .lexemes(state)
            .iter()
            .map(|lexeme| lexeme.name().to_string())
            .collect()
    }

    fn build_err(builder: LexerBuilder) -> DefinitionError {
        match builder.build() {
            Err(LexError::Definition(err)) => err,
            other => panic!("expected a definition error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_token_list() {
        assert_eq!(
            build_err(LexerBuilder::new().rule("word", "[a-z]+")),
            DefinitionError::NoTokens
        );
        assert_eq!(
            build_err(LexerBuilder::new().tokens(Vec::<&str>::new())),
            DefinitionError::NoTokens
        );
    }

    #[test]
    fn test_bad_and_duplicate_token_names() {
        assert_eq!(
            build_err(LexerBuilder::new().tokens(["#token"])),
            DefinitionError::bad_token_name("#token")
        );
        assert_eq!(
            build_err(LexerBuilder::new().tokens(["token", "token"])),
            DefinitionError::DuplicateToken {
                name: "token".into()
            }
        );
    }

    #[test]
    fn test_undeclared_uppercase_token() {
        let err = build_err(
            LexerBuilder::new()
                .tokens(["WORD"])
                .rule("UNKNOWN", "[a-z]+"),
        );
        assert_eq!(err.to_string(), "Rule 'UNKNOWN' defined for an unspecified token UNKNOWN");
    }

    #[test]
    fn test_lowercase_rule_needs_no_token() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .rule("newline", r"\n")
            .build()
            .unwrap();
        assert_eq!(names(&rules, INITIAL_STATE), ["newline"]);
    }

    #[test]
    fn test_rule_redefined() {
        let err = build_err(
            LexerBuilder::new()
                .tokens(["WORD"])
                .rule("WORD", "[a-z]+")
                .rule("WORD", "[A-Z]+"),
        );
        assert_eq!(err.to_string(), "Rule 'WORD' redefined.");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = build_err(LexerBuilder::new().tokens(["WORD"]).rule("WORD", "(["));
        assert!(matches!(err, DefinitionError::InvalidPattern { ref rule, .. } if rule == "WORD"));
    }

    #[test]
    fn test_state_prefix_resolution() {
        let rules = LexerBuilder::new()
            .tokens(["WORD", "LANGLE", "RANGLE"])
            .states([
                ("tag", StateKind::Exclusive),
                ("attr", StateKind::Exclusive),
            ])
            .rule("tag_attr_WORD", "[a-z]+")
            .rule("tag_RANGLE", ">")
            .rule("LANGLE", "<")
            .build()
            .unwrap();

        assert_eq!(names(&rules, "tag"), ["WORD", "RANGLE"]);
        assert_eq!(names(&rules, "attr"), ["WORD"]);
        assert_eq!(names(&rules, INITIAL_STATE), ["LANGLE"]);
        assert_eq!(rules.rule_count(), 4);
    }

    #[test]
    fn test_prefix_that_is_not_a_state_stays_in_name() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .rule("block_comment", "/\\*.*\\*/")
            .build()
            .unwrap();
        assert_eq!(names(&rules, INITIAL_STATE), ["block_comment"]);
    }

    #[test]
    fn test_empty_token_name_after_prefix() {
        let err = build_err(
            LexerBuilder::new()
                .tokens(["WORD"])
                .states([("tag", StateKind::Exclusive)])
                .rule("tag_", "x"),
        );
        assert_eq!(err, DefinitionError::bad_token_name("tag_"));
    }

    #[test]
    fn test_states_declared_after_rules_still_resolve() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .rule("tag_WORD", "[a-z]+")
            .states([("tag", StateKind::Exclusive)])
            .build()
            .unwrap();
        assert_eq!(names(&rules, "tag"), ["WORD"]);
        assert!(rules.lexemes(INITIAL_STATE).is_empty());
    }

    #[test]
    fn test_inclusive_state_inherits_initial_rules() {
        let rules = LexerBuilder::new()
            .tokens(["WORD", "NUMBER", "END"])
            .states([("comment", StateKind::Inclusive)])
            .rule("WORD", "[a-z]+")
            .rule("comment_END", "-->")
            .rule("NUMBER", "[0-9]+")
            .build()
            .unwrap();

        assert_eq!(names(&rules, "comment"), ["WORD", "END", "NUMBER"]);
        assert_eq!(names(&rules, INITIAL_STATE), ["WORD", "NUMBER"]);
    }

    #[test]
    fn test_inclusive_state_overrides_inherited_rule() {
        let rules = LexerBuilder::new()
            .tokens(["WORD", "NUMBER"])
            .states([("loud", StateKind::Inclusive)])
            .rule("WORD", "[a-z]+")
            .rule("NUMBER", "[0-9]+")
            .rule("loud_WORD", "[A-Z]+")
            .build()
            .unwrap();

        assert_eq!(names(&rules, "loud"), ["WORD", "NUMBER"]);
        let word = rules.state("loud").and_then(|state| state.get("WORD")).unwrap();
        assert_eq!(word.match_at("ABC", 0), Some(3));
    }

    #[test]
    fn test_ignore_and_error_backfill() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .states([
                ("comment", StateKind::Inclusive),
                ("raw", StateKind::Exclusive),
            ])
            .rule("WORD", "[a-z]+")
            .ignore(" \t")
            .error(|_, _| Ok(Action::Suppress))
            .build()
            .unwrap();

        assert_eq!(rules.ignore("comment"), Some(&IgnoreSet::from(" \t")));
        assert!(rules.has_error_entry("comment"));
        assert!(rules.error_handler("comment").is_some());
        assert_eq!(rules.ignore("raw"), None);
        assert!(!rules.has_error_entry("raw"));
    }

    #[test]
    fn test_inclusive_state_keeps_own_ignore() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .states([("comment", StateKind::Inclusive)])
            .rule("WORD", "[a-z]+")
            .ignore_in("comment", "-")
            .ignore(" ")
            .build()
            .unwrap();

        assert_eq!(rules.ignore("comment"), Some(&IgnoreSet::from("-")));
        assert_eq!(rules.ignore(INITIAL_STATE), Some(&IgnoreSet::from(" ")));
    }

    #[test]
    fn test_initial_ignore_defaults_to_empty() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .rule("WORD", "[a-z]+")
            .build()
            .unwrap();
        assert!(rules.ignore(INITIAL_STATE).is_some_and(IgnoreSet::is_empty));
    }

    #[test]
    fn test_error_unhandled_in_multiple_states() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .states([("a", StateKind::Exclusive), ("b", StateKind::Exclusive)])
            .rule("a_b_WORD", "[a-z]+")
            .error_unhandled_in("a_b")
            .build()
            .unwrap();

        for state in ["a", "b"] {
            assert!(rules.has_error_entry(state));
            assert!(rules.error_handler(state).is_none());
        }
    }

    #[test]
    fn test_redeclared_state_replaces_kind() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .states([("s", StateKind::Inclusive)])
            .states([("s", StateKind::Exclusive)])
            .rule("WORD", "[a-z]+")
            .build()
            .unwrap();

        assert_eq!(rules.state_kind("s"), Some(StateKind::Exclusive));
        assert_eq!(rules.states().count(), 2);
        assert!(rules.lexemes("s").is_empty());
    }

    #[test]
    fn test_undeclared_state_entries_are_kept() {
        let rules = LexerBuilder::new()
            .tokens(["WORD"])
            .rule("WORD", "[a-z]+")
            .ignore_in("nowhere", " ")
            .error_in("nowhere", |_, _| Ok(Action::Suppress))
            .build()
            .unwrap();

        assert!(!rules.has_state("nowhere"));
        assert_eq!(rules.ignore("nowhere"), Some(&IgnoreSet::from(" ")));
        assert!(rules.has_error_entry("nowhere"));
        assert!(rules.error_handler("nowhere").is_some());
    }

    #[test]
    fn test_ignore_set_class() {
        let set = IgnoreSet::from(CharSet::whitespace());
        assert!(set.contains('\n'));
        assert!(!set.contains('x'));
        assert!(IgnoreSet::default().is_empty());
    }
}
