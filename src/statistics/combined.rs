//! Combines the monthly statistics, price ranges and categories in one report.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    month::RequestedMonth,
    stores::TransactionStore,
};

use super::{
    CategoryCount, MonthlyStatistics, PriceRangeCount, category_counts, monthly_statistics,
    price_range_counts,
};

/// Everything known about one month of sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedReport {
    /// See [monthly_statistics].
    pub statistics: MonthlyStatistics,
    /// See [price_range_counts].
    pub price_range_data: Vec<PriceRangeCount>,
    /// See [category_counts].
    pub category_data: Vec<CategoryCount>,
}

/// Build the [CombinedReport] for `month`.
///
/// # Errors
/// Returns an error if the store cannot be queried.
pub fn combined_report(
    store: &impl TransactionStore,
    month: &RequestedMonth,
) -> Result<CombinedReport, Error> {
    Ok(CombinedReport {
        statistics: monthly_statistics(store, month)?,
        price_range_data: price_range_counts(store, month)?,
        category_data: category_counts(store, month)?,
    })
}
