//! Lists transactions with an optional search and pagination.
//!
//! The search matches the title, the description, and the price formatted as
//! text. Matching the price as text is loose (searching "10" finds 109.95) and
//! is kept for compatibility with existing clients.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    pagination::PageRequest,
    stores::{TransactionFilter, TransactionQuery, TransactionStore},
};

use super::Transaction;

/// The raw query parameters for listing transactions.
///
/// Kept as strings so that non-numeric page numbers fall back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// The 1-indexed page number.
    pub page: Option<String>,
    /// The number of transactions per page.
    pub per_page: Option<String>,
    /// Text to search for.
    pub search: Option<String>,
}

/// One page of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    /// The transactions on this page.
    pub transactions: Vec<Transaction>,
    /// The number of transactions matching the search across all pages.
    pub total: u64,
    /// The number of pages.
    pub pages: u64,
    /// The page number that was returned.
    pub current_page: u64,
}

/// Get the page of transactions described by `page` that match `search`.
///
/// An empty search matches every transaction. Pages past the end are empty.
///
/// # Errors
/// Returns an error if the store cannot be queried.
pub fn list_transactions(
    store: &impl TransactionStore,
    search: &str,
    page: PageRequest,
) -> Result<TransactionPage, Error> {
    let filter = TransactionFilter::default().search(search);
    let total = store.count(&filter)?;

    let transactions = store.get_query(TransactionQuery {
        filter,
        limit: Some(page.per_page()),
        offset: page.offset(),
    })?;

    Ok(TransactionPage {
        transactions,
        total,
        pages: page.page_count(total),
        current_page: page.page(),
    })
}

/// Route handler for listing transactions.
pub async fn get_transactions<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TransactionPage>, Error>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let page = state
        .pagination_config
        .page_request(query.page.as_deref(), query.per_page.as_deref());
    let search = query.search.unwrap_or_default();

    list_transactions(&state.transaction_store, &search, page).map(Json)
}
