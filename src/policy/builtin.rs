//! Built-in structured text types.

use super::SeparatorPolicy;
use crate::error::{Error, Result};
use crate::unicode::Direction;
use std::fmt;
use std::str::FromStr;

/// Well-known kinds of structured text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructuredType {
    /// Comma-delimited lists.
    Comma,
    Email,
    /// File paths on any platform.
    File,
    /// Java source expressions; string and char literals are atomic.
    Java,
    /// Arithmetic; digits-only segments default to left-to-right.
    Math,
    /// `name=value` properties.
    Property,
    /// Regular expressions; `\` escapes the next character.
    Regex,
    /// SQL statements; quoted literals and identifiers are atomic.
    Sql,
    /// `system@user` pairs.
    SystemUser,
    /// Underscore-joined identifiers.
    Underscore,
    Url,
    /// XPath expressions; quoted literals are atomic.
    XPath,
}

impl StructuredType {
    /// Every built-in type.
    pub const ALL: [Self; 12] = [
        Self::Comma,
        Self::Email,
        Self::File,
        Self::Java,
        Self::Math,
        Self::Property,
        Self::Regex,
        Self::Sql,
        Self::SystemUser,
        Self::Underscore,
        Self::Url,
        Self::XPath,
    ];

    /// Registry name of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Email => "email",
            Self::File => "file",
            Self::Java => "java",
            Self::Math => "math",
            Self::Property => "property",
            Self::Regex => "regex",
            Self::Sql => "sql",
            Self::SystemUser => "system_user",
            Self::Underscore => "underscore",
            Self::Url => "url",
            Self::XPath => "xpath",
        }
    }

    /// Separator characters for this type.
    #[must_use]
    pub const fn separators(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Email => "<>.:,;@",
            Self::File => ":/\\.",
            Self::Java => "[](){}.+-<>=~!&*/%^|?:,;\t",
            Self::Math => "+-/*()=",
            Self::Property => "=:",
            Self::Regex => "()[]{}|*+?^$.",
            Self::Sql => "\t!#%&()*+,-./:;<=>^{|}~",
            Self::SystemUser => "@",
            Self::Underscore => "_",
            Self::Url => ":?#/@.[]",
            Self::XPath => " /[]<>=!:@.|()+-*",
        }
    }

    /// Build the segmentation policy for this type.
    #[must_use]
    pub fn policy(self) -> SeparatorPolicy {
        let policy = SeparatorPolicy::builtin(self.as_str(), self.separators());
        match self {
            Self::Java => policy.with_quotes("\"'").with_escape('\\'),
            Self::Sql => policy.with_quotes("'\""),
            Self::XPath => policy.with_quotes("'\""),
            Self::Regex => policy.with_escape('\\'),
            Self::Math => policy.with_default_direction(Direction::Ltr),
            _ => policy,
        }
    }
}

impl fmt::Display for StructuredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for StructuredType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for StructuredType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == key)
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
