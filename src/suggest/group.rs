//! Result grouping
//!
//! Partitions a search response into ordered sections (members, then bills)
//! and maps flat row indices back to items.

use super::item::{SuggestionItem, SuggestionKind};

/// One labelled section of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionGroup {
    pub kind: SuggestionKind,
    pub label: &'static str,
    pub items: Vec<SuggestionItem>,
}

impl SuggestionGroup {
    pub fn new(kind: SuggestionKind, items: Vec<SuggestionItem>) -> Self {
        Self {
            kind,
            label: kind.section_label(),
            items,
        }
    }
}

/// Ordered groups of one search response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResults {
    groups: Vec<SuggestionGroup>,
}

impl GroupedResults {
    pub fn new(groups: Vec<SuggestionGroup>) -> Self {
        let groups = groups.into_iter().filter(|g| !g.items.is_empty()).collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[SuggestionGroup] {
        &self.groups
    }

    /// Number of selectable rows (section headers are not rows)
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Item at a flat row index
    pub fn item(&self, index: usize) -> Option<&SuggestionItem> {
        self.items().nth(index)
    }

    /// All items in rendering order
    pub fn items(&self) -> impl Iterator<Item = &SuggestionItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Rows of each group paired with their flat index
    pub fn rows(&self) -> Vec<(&SuggestionGroup, Vec<(usize, &SuggestionItem)>)> {
        let mut next_index = 0;
        self.groups
            .iter()
            .map(|group| {
                let rows = group
                    .items
                    .iter()
                    .map(|item| {
                        let index = next_index;
                        next_index += 1;
                        (index, item)
                    })
                    .collect();
                (group, rows)
            })
            .collect()
    }
}

/// Group member and bill lookups, members first, keeping backend order
pub fn group_results(members: Vec<SuggestionItem>, bills: Vec<SuggestionItem>) -> GroupedResults {
    GroupedResults::new(vec![
        SuggestionGroup::new(SuggestionKind::Member, members),
        SuggestionGroup::new(SuggestionKind::Bill, bills),
    ])
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod group_tests;
