use super::{SegmentationPolicy, Span, split_runs};
use crate::error::{Error, Result};
use crate::unicode::{Direction, base_char};

/// Separators used when no structured type is given: dot, colon, slash,
/// backslash.
pub const DEFAULT_SEPARATORS: &str = ".:/\\";

/// Separator-driven policy with optional literal and escape syntax.
///
/// Characters between a pair of quote characters never act as separators,
/// nor does the cluster following the escape character. An escaped quote
/// does not close a literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeparatorPolicy {
    name: String,
    separators: String,
    quotes: Vec<char>,
    escape: Option<char>,
    default_direction: Option<Direction>,
    overrides: Vec<(char, Direction)>,
}

impl SeparatorPolicy {
    /// Create a policy splitting on each character of `separators`.
    pub fn new(name: impl Into<String>, separators: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidPolicy("policy name must not be empty".into()));
        }
        Ok(Self {
            name,
            separators: separators.into(),
            quotes: Vec::new(),
            escape: None,
            default_direction: None,
            overrides: Vec::new(),
        })
    }

    /// Policy used by the default expert.
    #[must_use]
    pub fn default_policy() -> Self {
        Self::builtin("default", DEFAULT_SEPARATORS)
    }

    pub(crate) fn builtin(name: &'static str, separators: &'static str) -> Self {
        Self {
            name: name.to_string(),
            separators: separators.to_string(),
            quotes: Vec::new(),
            escape: None,
            default_direction: None,
            overrides: Vec::new(),
        }
    }

    /// Treat text between any of these quote characters as a literal.
    #[must_use]
    pub fn with_quotes(mut self, quotes: &str) -> Self {
        self.quotes = quotes.chars().collect();
        self
    }

    #[must_use]
    pub const fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    #[must_use]
    pub const fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = Some(direction);
        self
    }

    /// Force `ch` to classify as `direction` regardless of Unicode data.
    #[must_use]
    pub fn with_override(mut self, ch: char, direction: Direction) -> Self {
        self.overrides.retain(|&(existing, _)| existing != ch);
        self.overrides.push((ch, direction));
        self
    }
}

impl SegmentationPolicy for SeparatorPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn separators(&self) -> &str {
        &self.separators
    }

    fn classify(&self, ch: char) -> Option<Direction> {
        self.overrides
            .iter()
            .find_map(|&(c, dir)| (c == ch).then_some(dir))
    }

    fn default_direction(&self) -> Option<Direction> {
        self.default_direction
    }

    fn segments<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        if self.quotes.is_empty() && self.escape.is_none() {
            return split_runs(text, |g| self.separators.contains(base_char(g)));
        }

        let mut open_quote: Option<char> = None;
        let mut escaped = false;
        split_runs(text, |grapheme| {
            let ch = base_char(grapheme);
            if escaped {
                escaped = false;
                return false;
            }
            if Some(ch) == self.escape {
                escaped = true;
                return false;
            }
            if let Some(quote) = open_quote {
                if ch == quote {
                    open_quote = None;
                }
                return false;
            }
            if self.quotes.contains(&ch) {
                open_quote = Some(ch);
                return false;
            }
            self.separators.contains(ch)
        })
    }
}
