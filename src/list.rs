//! Template-based list formatting.
//!
//! Joins items into a human readable list using four two-slot patterns:
//! `two` for exactly two items, and `start`, `middle` and `end` for longer
//! lists. Each pattern contains `{0}` and `{1}` placeholders.

/// List formatter built from `{0}`/`{1}` patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFormatter {
    two: String,
    start: String,
    middle: String,
    end: String,
}

impl ListFormatter {
    #[must_use]
    pub fn new(
        two: impl Into<String>,
        start: impl Into<String>,
        middle: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            two: two.into(),
            start: start.into(),
            middle: middle.into(),
            end: end.into(),
        }
    }

    /// "A and B", "A, B, and C".
    #[must_use]
    pub fn english() -> Self {
        Self::new("{0} and {1}", "{0}, {1}", "{0}, {1}", "{0}, and {1}")
    }

    /// "A、B、C".
    #[must_use]
    pub fn japanese() -> Self {
        let pattern = "{0}\u{3001}{1}";
        Self::new(pattern, pattern, pattern, pattern)
    }

    /// Locale-neutral "A, B, C".
    #[must_use]
    pub fn root() -> Self {
        let pattern = "{0}, {1}";
        Self::new(pattern, pattern, pattern, pattern)
    }

    /// Join `items` into one string.
    #[must_use]
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [first, second] => apply(&self.two, first.as_ref(), second.as_ref()),
            [first, middle @ .., penultimate, last] => {
                let mut tail = apply(&self.end, penultimate.as_ref(), last.as_ref());
                for item in middle.iter().rev() {
                    tail = apply(&self.middle, item.as_ref(), &tail);
                }
                apply(&self.start, first.as_ref(), &tail)
            }
        }
    }
}

impl Default for ListFormatter {
    fn default() -> Self {
        Self::root()
    }
}

/// Substitute `{0}` and `{1}` in one pass so placeholder text inside the
/// arguments is never expanded.
fn apply(pattern: &str, first: &str, second: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + first.len() + second.len());
    let mut rest = pattern;
    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("{0}") {
            out.push_str(first);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{1}") {
            out.push_str(second);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
