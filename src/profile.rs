use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which rule set the extractor follows.
///
/// `Full` is the canonical engine. `Lean` keeps the behavior of the older
/// standalone parser: a single merged keyword list, a shorter deadline
/// table with midnight deadlines, bracket/quote titles and keyword-filtered
/// rule sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    #[default]
    Full,
    Lean,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Lean => "lean",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "lean" => Ok(Self::Lean),
            other => Err(Error::UnknownProfile(other.to_string())),
        }
    }
}
