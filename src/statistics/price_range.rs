//! Counts of sold products per price range, for the bar chart.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    month::RequestedMonth,
    stores::{PriceBounds, TransactionFilter, TransactionStore},
};

/// A labelled price range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    /// The label shown to clients, e.g. "101-200".
    pub label: &'static str,
    /// The prices that fall in this bucket.
    pub bounds: PriceBounds,
}

const fn bucket(label: &'static str, above: Option<f64>, up_to: Option<f64>) -> PriceBucket {
    PriceBucket {
        label,
        bounds: PriceBounds { above, up_to },
    }
}

/// The ten price buckets in ascending order.
///
/// Each bucket covers the prices above the previous bucket's upper bound up to
/// and including its own, so whole-dollar prices land exactly as the labels
/// read and prices such as 100.50 land in the next bucket up. Together the
/// buckets cover every price.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    bucket("0-100", None, Some(100.0)),
    bucket("101-200", Some(100.0), Some(200.0)),
    bucket("201-300", Some(200.0), Some(300.0)),
    bucket("301-400", Some(300.0), Some(400.0)),
    bucket("401-500", Some(400.0), Some(500.0)),
    bucket("501-600", Some(500.0), Some(600.0)),
    bucket("601-700", Some(600.0), Some(700.0)),
    bucket("701-800", Some(700.0), Some(800.0)),
    bucket("801-900", Some(800.0), Some(900.0)),
    bucket("901+", Some(900.0), None),
];

/// The number of products sold in a price range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    /// The bucket label, e.g. "0-100".
    #[serde(rename = "Price Range")]
    pub price_range: String,
    /// The number of sold products in the bucket.
    #[serde(rename = "Number of Items Sold")]
    pub count: u64,
}

/// Count the products sold in `month` per price bucket.
///
/// Always returns one entry per bucket in [PRICE_BUCKETS] order, with zero
/// counts for empty buckets and for unknown months.
///
/// # Errors
/// Returns an error if the store cannot be queried.
pub fn price_range_counts(
    store: &impl TransactionStore,
    month: &RequestedMonth,
) -> Result<Vec<PriceRangeCount>, Error> {
    PRICE_BUCKETS
        .iter()
        .map(|bucket| {
            let count = match month.month() {
                Some(month) => store.count(
                    &TransactionFilter::for_month(month)
                        .sold(true)
                        .price(bucket.bounds),
                )?,
                None => 0,
            };

            Ok(PriceRangeCount {
                price_range: bucket.label.to_owned(),
                count,
            })
        })
        .collect()
}
