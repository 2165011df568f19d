//! Search and selection core
//!
//! Everything here is independent of the terminal UI and of the network,
//! so it can be driven directly from tests.

mod debouncer;
mod focus;
mod group;
mod item;
mod scope;
mod widget;

pub use debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use focus::FocusState;
pub use group::{GroupedResults, SuggestionGroup, group_results};
pub use item::{BillRecord, MemberRecord, SuggestionItem, SuggestionKind};
pub use scope::SearchScope;
pub use widget::{
    FieldBinding, KeyOutcome, SearchRequest, Selection, SuggestionWidget, WidgetKey, WidgetState,
};
