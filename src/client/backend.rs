use std::future::Future;

use crate::error::SuggestError;
use crate::suggest::{
    GroupedResults, SearchRequest, SearchScope, SuggestionItem, SuggestionKind, group_results,
};

/// Source of suggestion records for one kind
pub trait LookupBackend: Send + Sync + 'static {
    /// Fetch the records of `kind` matching `query`, in backend order
    fn lookup(
        &self,
        kind: SuggestionKind,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionItem>, SuggestError>> + Send;
}

/// Run one search across the kinds in its scope
///
/// For `All` both lookups run concurrently and are grouped once both have
/// resolved. A failure of either lookup fails the whole search.
pub async fn run_search<B: LookupBackend>(
    backend: &B,
    request: &SearchRequest,
) -> Result<GroupedResults, SuggestError> {
    let query = request.query.as_str();

    let (members, bills) = match request.scope {
        SearchScope::Members => (backend.lookup(SuggestionKind::Member, query).await?, Vec::new()),
        SearchScope::Bills => (Vec::new(), backend.lookup(SuggestionKind::Bill, query).await?),
        SearchScope::All => {
            futures::future::try_join(
                backend.lookup(SuggestionKind::Member, query),
                backend.lookup(SuggestionKind::Bill, query),
            )
            .await?
        }
    };

    Ok(group_results(members, bills))
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
