use crate::error::LintFailure;
use crate::lexer::builder::{RuleSet, is_token_name};
use crate::lexer::state::StateKind;
use compact_str::CompactString;
use hashbrown::HashSet;
use std::fmt;
use tracing::warn;

/// An advisory finding that does not stop the lexer from running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// Unrecognized input in this exclusive state is fatal
    NoErrorRule { state: CompactString },
    /// This exclusive state skips nothing
    NoIgnoreRule { state: CompactString },
    /// No rule name can carry this state as a prefix; only actions can enter it
    UnprefixableState { state: CompactString },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoErrorRule { state } => {
                write!(f, "No error rule is defined for exclusive state '{state}'")
            }
            Self::NoIgnoreRule { state } => {
                write!(f, "No ignore rule is defined for exclusive state '{state}'")
            }
            Self::UnprefixableState { state } => {
                write!(f, "State '{state}' cannot be used as a rule prefix")
            }
        }
    }
}

/// Warnings collected by a successful lint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub warnings: Vec<LintWarning>,
}

impl LintReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Checks a compiled [`RuleSet`] for problems that would make it unusable.
///
/// Three checks run in order: tokens, states, then rules. The first failing
/// check stops the lint. Exclusive states without ignore or error entries, and
/// state names no rule prefix can address, only produce warnings. Warnings are
/// logged and returned in the report.
pub struct Linter<'a> {
    rules: &'a RuleSet,
    report: LintReport,
}

impl<'a> Linter<'a> {
    #[must_use]
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            report: LintReport::default(),
        }
    }

    /// Lint `rules` in one call
    ///
    /// # Errors
    ///
    /// Returns the first [`LintFailure`] found.
    pub fn lint(rules: &'a RuleSet) -> Result<LintReport, LintFailure> {
        Self::new(rules).run()
    }

    /// Run every check
    ///
    /// # Errors
    ///
    /// Returns the first [`LintFailure`] found.
    pub fn run(mut self) -> Result<LintReport, LintFailure> {
        self.validate_tokens()?;
        self.validate_states()?;
        self.validate_rules()?;
        Ok(self.report)
    }

    fn validate_tokens(&self) -> Result<(), LintFailure> {
        let tokens = self.rules.tokens();
        if tokens.is_empty() {
            return Err(LintFailure::NoTokens);
        }

        let mut seen = HashSet::with_hasher(ahash::RandomState::new());
        for name in tokens {
            if !is_token_name(name) {
                return Err(LintFailure::BadTokenName { name: name.clone() });
            }
            if !seen.insert(name.as_str()) {
                return Err(LintFailure::DuplicateToken { name: name.clone() });
            }
        }
        Ok(())
    }

    fn validate_states(&mut self) -> Result<(), LintFailure> {
        for (name, kind) in self.rules.states() {
            if name.is_empty() || name.contains('_') {
                self.warn(LintWarning::UnprefixableState { state: name.into() });
            }
            if kind != StateKind::Exclusive {
                continue;
            }
            if !self.rules.has_error_entry(name) {
                self.warn(LintWarning::NoErrorRule { state: name.into() });
            }
            if self.rules.ignore(name).is_none() {
                self.warn(LintWarning::NoIgnoreRule { state: name.into() });
            }
        }
        Ok(())
    }

    fn validate_rules(&self) -> Result<(), LintFailure> {
        if self.rules.rule_count() == 0 {
            return Err(LintFailure::NoRules);
        }
        for (name, _) in self.rules.states() {
            if self.rules.lexemes(name).is_empty() {
                return Err(LintFailure::NoRulesForState { state: name.into() });
            }
        }
        Ok(())
    }

    fn warn(&mut self, warning: LintWarning) {
        warn!("{}", warning);
        self.report.warnings.push(warning);
    }
}
