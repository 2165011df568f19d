//! Suggestion records
//!
//! Wire shapes returned by the lookup endpoints and the client-side
//! `SuggestionItem` that carries its kind and display label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label used for members without a party
const INDEPENDENT_PARTY: &str = "무소속";

/// Category of a suggestion record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Member,
    Bill,
}

impl SuggestionKind {
    /// Header shown above this kind's group in the dropdown
    pub fn section_label(self) -> &'static str {
        match self {
            SuggestionKind::Member => "국회의원",
            SuggestionKind::Bill => "법률안",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SuggestionKind::Member => "👤",
            SuggestionKind::Bill => "📋",
        }
    }

    /// Path segment of the lookup endpoint and of the detail page
    pub fn endpoint(self) -> &'static str {
        match self {
            SuggestionKind::Member => "members",
            SuggestionKind::Bill => "bills",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionKind::Member => write!(f, "member"),
            SuggestionKind::Bill => write!(f, "bill"),
        }
    }
}

/// Row of `/api/autocomplete/members`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Row of `/api/autocomplete/bills`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BillRecord {
    pub id: i64,
    pub name: String,
}

/// A single selectable suggestion
///
/// Built from a backend record with its kind and display label attached.
/// Lives only as long as the search response that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub display: String,
}

impl SuggestionItem {
    /// Create a member suggestion, labelled "name (party)"
    pub fn member(id: i64, name: impl Into<String>, party: Option<String>) -> Self {
        let name = name.into();
        let party = party.filter(|p| !p.trim().is_empty());
        let display = format!(
            "{} ({})",
            name,
            party.as_deref().unwrap_or(INDEPENDENT_PARTY)
        );

        Self {
            id,
            name,
            kind: SuggestionKind::Member,
            party,
            photo_url: None,
            display,
        }
    }

    /// Create a bill suggestion, labelled with its name
    pub fn bill(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            display: name.clone(),
            name,
            kind: SuggestionKind::Bill,
            party: None,
            photo_url: None,
        }
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    /// Detail page for this record, e.g. `/members/12`
    pub fn detail_route(&self) -> String {
        format!("/{}/{}", self.kind.endpoint(), self.id)
    }
}

impl From<MemberRecord> for SuggestionItem {
    fn from(record: MemberRecord) -> Self {
        let item = SuggestionItem::member(record.id, record.name, record.party);
        match record.photo_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => item.with_photo_url(url),
            None => item,
        }
    }
}

impl From<BillRecord> for SuggestionItem {
    fn from(record: BillRecord) -> Self {
        SuggestionItem::bill(record.id, record.name)
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod item_tests;
