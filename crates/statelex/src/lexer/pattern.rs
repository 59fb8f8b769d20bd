use compact_str::CompactString;
use std::fmt;
use std::sync::Arc;

/// A user-supplied matcher: given the whole input and a byte offset, return the
/// byte length of the match starting exactly at that offset.
pub type CustomMatcher = Arc<dyn Fn(&str, usize) -> Option<usize> + Send + Sync>;

/// Declarative description of what a rule matches.
///
/// Plain strings convert into [`Pattern::Regex`], so most rules read like
/// `rule("NUMBER", r"[0-9]+")`.
///
/// # Example
///
/// ```rust
/// use statelex::{CharSet, Pattern};
///
/// let number = Pattern::repeat(Pattern::class(CharSet::digits()), 1, None);
/// let arrow = Pattern::literal("->");
/// let ident: Pattern = r"[_a-zA-Z][_0-9a-zA-Z]*".into();
/// # let _ = (number, arrow, ident);
/// ```
#[derive(Clone)]
pub enum Pattern {
    /// Exact text
    Literal(CompactString),
    /// A single character from a set
    CharClass(CharSet),
    /// Greedy repetition of an inner pattern
    Repeat {
        pattern: Box<Pattern>,
        min: usize,
        max: Option<usize>,
    },
    /// A regular expression, matched anchored at the scan position
    Regex(CompactString),
    /// A hand-written matcher
    Custom(CustomMatcher),
}

impl Pattern {
    #[must_use]
    pub fn literal(text: impl Into<CompactString>) -> Self {
        Self::Literal(text.into())
    }

    #[must_use]
    pub fn regex(source: impl Into<CompactString>) -> Self {
        Self::Regex(source.into())
    }

    #[must_use]
    pub const fn class(set: CharSet) -> Self {
        Self::CharClass(set)
    }

    #[must_use]
    pub fn repeat(pattern: Self, min: usize, max: Option<usize>) -> Self {
        Self::Repeat {
            pattern: Box::new(pattern),
            min,
            max,
        }
    }

    #[must_use]
    pub fn custom(matcher: impl Fn(&str, usize) -> Option<usize> + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(matcher))
    }

    /// Compile into a matcher. Only regular expressions can fail.
    pub(crate) fn compile(&self) -> Result<Matcher, regex::Error> {
        Ok(match self {
            Self::Literal(text) => Matcher::Literal(text.clone()),
            Self::CharClass(set) => Matcher::Class(set.clone()),
            Self::Repeat { pattern, min, max } => Matcher::Repeat {
                inner: Box::new(pattern.compile()?),
                min: *min,
                max: *max,
            },
            Self::Regex(source) => Matcher::Regex(regex::Regex::new(&format!("^(?:{source})"))?),
            Self::Custom(matcher) => Matcher::Custom(Arc::clone(matcher)),
        })
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::regex(source)
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::regex(source)
    }
}

impl From<CharSet> for Pattern {
    fn from(set: CharSet) -> Self {
        Self::class(set)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::CharClass(set) => f.debug_tuple("CharClass").field(set).finish(),
            Self::Repeat { pattern, min, max } => f
                .debug_struct("Repeat")
                .field("pattern", pattern)
                .field("min", min)
                .field("max", max)
                .finish(),
            Self::Regex(source) => f.debug_tuple("Regex").field(source).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A set of characters described by inclusive ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CharSet {
    ranges: Vec<(char, char)>,
}

impl CharSet {
    /// Create a new character set with the given ranges
    #[must_use]
    pub const fn new(ranges: Vec<(char, char)>) -> Self {
        Self { ranges }
    }

    /// A set holding exactly the characters of `chars`
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars().map(|c| (c, c)).collect())
    }

    /// Create a character set for digits [0-9]
    #[must_use]
    pub fn digits() -> Self {
        Self::new(vec![('0', '9')])
    }

    /// ASCII letters [a-zA-Z]
    #[must_use]
    pub fn alpha() -> Self {
        Self::new(vec![('a', 'z'), ('A', 'Z')])
    }

    /// Word characters [a-zA-Z0-9_]
    #[must_use]
    pub fn word() -> Self {
        Self::new(vec![('a', 'z'), ('A', 'Z'), ('0', '9'), ('_', '_')])
    }

    /// Create a character set for whitespace characters
    #[must_use]
    pub fn whitespace() -> Self {
        Self::new(vec![(' ', ' '), ('\t', '\t'), ('\r', '\r'), ('\n', '\n')])
    }

    /// Check if a character matches this character set
    #[must_use]
    pub fn matches(&self, c: char) -> bool {
        self.ranges
            .iter()
            .any(|(start, end)| c >= *start && c <= *end)
    }

    #[must_use]
    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }
}

/// Compiled form of a [`Pattern`].
#[derive(Clone)]
pub(crate) enum Matcher {
    Literal(CompactString),
    Class(CharSet),
    Repeat {
        inner: Box<Matcher>,
        min: usize,
        max: Option<usize>,
    },
    Regex(regex::Regex),
    Custom(CustomMatcher),
}

impl Matcher {
    /// Byte length of the match anchored at `offset`, without consuming anything.
    ///
    /// Zero-length matches are reported as `None` so a scan always advances.
    pub(crate) fn match_at(&self, input: &str, offset: usize) -> Option<usize> {
        self.raw_match_at(input, offset).filter(|len| *len > 0)
    }

    fn raw_match_at(&self, input: &str, offset: usize) -> Option<usize> {
        let rest = input.get(offset..)?;
        match self {
            Self::Literal(text) => rest.starts_with(text.as_str()).then_some(text.len()),
            Self::Class(set) => rest
                .chars()
                .next()
                .filter(|c| set.matches(*c))
                .map(char::len_utf8),
            Self::Repeat { inner, min, max } => {
                let mut len = 0;
                let mut count = 0;
                while max.is_none_or(|max| count < max) {
                    match inner.match_at(input, offset + len) {
                        Some(step) => {
                            len += step;
                            count += 1;
                        }
                        None => break,
                    }
                }
                (count >= *min).then_some(len)
            }
            Self::Regex(regex) => regex.find(rest).map(|m| m.end()),
            Self::Custom(matcher) => matcher(input, offset).filter(|len| {
                rest.is_char_boundary(*len) && *len <= rest.len()
            }),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text:?}"),
            Self::Class(set) => write!(f, "{:?}", set.ranges()),
            Self::Repeat { inner, min, max } => write!(f, "({inner:?}){{{min},{max:?}}}"),
            Self::Regex(regex) => write!(f, "/{}/", regex.as_str()),
            Self::Custom(_) => f.write_str("<custom>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: impl Into<Pattern>) -> Matcher {
        pattern.into().compile().unwrap()
    }

    #[test]
    fn test_literal_match() {
        let matcher = compile(Pattern::literal("</"));
        assert_eq!(matcher.match_at("a</b>", 1), Some(2));
        assert_eq!(matcher.match_at("a</b>", 0), None);
    }

    #[test]
    fn test_regex_is_anchored_at_offset() {
        let matcher = compile("[0-9]+");
        assert_eq!(matcher.match_at("x = 44", 4), Some(2));
        // The digits later in the input must not be found from offset 0
        assert_eq!(matcher.match_at("x = 44", 0), None);
    }

    #[test]
    fn test_regex_alternation_is_grouped() {
        let matcher = compile("a|b");
        assert_eq!(matcher.match_at("xb", 1), Some(1));
        assert_eq!(matcher.match_at("xb", 0), None);
    }

    #[test]
    fn test_zero_length_match_is_rejected() {
        let matcher = compile("a*");
        assert_eq!(matcher.match_at("bbb", 0), None);
        assert_eq!(matcher.match_at("aab", 0), Some(2));
    }

    #[test]
    fn test_char_class_matches_one_char() {
        let matcher = compile(CharSet::digits());
        assert_eq!(matcher.match_at("123", 0), Some(1));
        assert_eq!(matcher.match_at("abc", 0), None);
    }

    #[test]
    fn test_repeat_bounds() {
        let digits = Pattern::class(CharSet::digits());
        let at_most_two = compile(Pattern::repeat(digits.clone(), 1, Some(2)));
        assert_eq!(at_most_two.match_at("12345", 0), Some(2));

        let at_least_three = compile(Pattern::repeat(digits, 3, None));
        assert_eq!(at_least_three.match_at("12a", 0), None);
        assert_eq!(at_least_three.match_at("1234a", 0), Some(4));
    }

    #[test]
    fn test_multibyte_class() {
        let matcher = compile(Pattern::repeat(Pattern::class(CharSet::new(vec![('α', 'ω')])), 1, None));
        assert_eq!(matcher.match_at("λx", 0), Some('λ'.len_utf8()));
    }

    #[test]
    fn test_custom_matcher() {
        let matcher = compile(Pattern::custom(|input, offset| {
            input[offset..].find('!').map(|end| end + 1)
        }));
        assert_eq!(matcher.match_at("hey!", 0), Some(4));
        assert_eq!(matcher.match_at("hey", 0), None);
    }

    #[test]
    fn test_invalid_regex() {
        assert!(Pattern::regex("(unclosed").compile().is_err());
    }

    #[test]
    fn test_char_set_from_chars() {
        let set = CharSet::from_chars(" \t");
        assert!(set.matches(' '));
        assert!(set.matches('\t'));
        assert!(!set.matches('\n'));
    }
}
