//! Counts of products per category, for the pie chart.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    month::RequestedMonth,
    stores::{TransactionFilter, TransactionStore},
};

/// The number of products in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// The category, `None` for products without one.
    pub category: Option<String>,
    /// The number of products in the category.
    pub count: u64,
}

/// Count the products listed in `month` per category, sold or not.
///
/// Products without a category are grouped under `None`, which comes first.
///
/// # Errors
/// Returns an error if the store cannot be queried.
pub fn category_counts(
    store: &impl TransactionStore,
    month: &RequestedMonth,
) -> Result<Vec<CategoryCount>, Error> {
    let Some(month) = month.month() else {
        return Ok(Vec::new());
    };

    let counts = store
        .count_by_category(&TransactionFilter::for_month(month))?
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    Ok(counts)
}
