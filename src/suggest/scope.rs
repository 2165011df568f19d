use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::item::SuggestionKind;
use crate::error::SuggestError;

/// Which record categories a bound field searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SearchScope {
    Members,
    Bills,
    #[default]
    All,
}

impl SearchScope {
    /// Kinds to look up, in rendering order (members before bills)
    pub fn kinds(self) -> &'static [SuggestionKind] {
        match self {
            SearchScope::Members => &[SuggestionKind::Member],
            SearchScope::Bills => &[SuggestionKind::Bill],
            SearchScope::All => &[SuggestionKind::Member, SuggestionKind::Bill],
        }
    }

    pub fn includes(self, kind: SuggestionKind) -> bool {
        self.kinds().contains(&kind)
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::Members => write!(f, "members"),
            SearchScope::Bills => write!(f, "bills"),
            SearchScope::All => write!(f, "all"),
        }
    }
}

impl FromStr for SearchScope {
    type Err = SuggestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "members" => Ok(SearchScope::Members),
            "bills" => Ok(SearchScope::Bills),
            "all" => Ok(SearchScope::All),
            other => Err(SuggestError::Config(format!(
                "unknown search scope '{}' (expected members, bills or all)",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for SearchScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
