//! Sales totals for a month.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    month::RequestedMonth,
    stores::{TransactionFilter, TransactionStore},
};

/// Sales totals for the transactions in one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    /// The sum of the prices of the sold products.
    pub total_sales: f64,
    /// The number of products that sold.
    pub sold_items: u64,
    /// The number of products that did not sell.
    pub unsold_items: u64,
}

/// Calculate the sales totals for `month`.
///
/// A month name that is not a calendar month matches no transactions, so all
/// totals are zero.
///
/// # Errors
/// Returns an error if the store cannot be queried.
pub fn monthly_statistics(
    store: &impl TransactionStore,
    month: &RequestedMonth,
) -> Result<MonthlyStatistics, Error> {
    let Some(month) = month.month() else {
        return Ok(MonthlyStatistics::default());
    };

    let sold = TransactionFilter::for_month(month).sold(true);
    let unsold = TransactionFilter::for_month(month).sold(false);

    Ok(MonthlyStatistics {
        total_sales: store.sum_price(&sold)?,
        sold_items: store.count(&sold)?,
        unsold_items: store.count(&unsold)?,
    })
}
