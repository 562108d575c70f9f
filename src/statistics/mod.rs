//! Monthly statistics over the sale transactions.
//!
//! The functions in this module are pure data queries against a
//! [TransactionStore](crate::stores::TransactionStore), they never render
//! charts. The route handlers add the optional chart rendering on top.

mod category;
mod combined;
mod handlers;
mod monthly;
mod price_range;

pub use category::{CategoryCount, category_counts};
pub use combined::{CombinedReport, combined_report};
pub use handlers::{
    MonthQuery, get_category_pie_chart, get_combined_data, get_price_range_bar_chart,
    get_statistics,
};
pub use monthly::{MonthlyStatistics, monthly_statistics};
pub use price_range::{PRICE_BUCKETS, PriceBucket, PriceRangeCount, price_range_counts};

pub(crate) use handlers::require_month;
