#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Environment variable read by [`LexerConfig::from_env`].
pub const DEBUG_ENV_VAR: &str = "STATELEX_DEBUG";

/// Configuration options for the scanning engine.
///
/// # Example
///
/// ```rust
/// use statelex::LexerConfig;
///
/// // Quiet by default
/// let config = LexerConfig::default();
/// assert!(!config.debug);
///
/// // Or trace every lexeme tried and every token produced
/// let config = LexerConfig::debug();
/// assert!(config.debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LexerConfig {
    /// Log compiled tables, the lexemes tried and every token produced
    pub debug: bool,
}

impl LexerConfig {
    #[must_use]
    pub const fn debug() -> Self {
        Self { debug: true }
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Tracing is enabled when `STATELEX_DEBUG` is set to anything other than
    /// an empty string, `0` or `false`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_debug(std::env::var(DEBUG_ENV_VAR).is_ok_and(|value| is_truthy(&value)))
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}
