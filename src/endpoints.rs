//! The API endpoints URIs.

/// The route that replaces all transactions with the seed feed.
pub const INITIALIZE: &str = "/initialize";
/// The route for listing and searching transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for the sales totals of a month.
pub const STATISTICS: &str = "/statistics";
/// The route for the number of products sold per price range in a month.
pub const PRICE_RANGE_BAR_CHART: &str = "/price-range-bar-chart";
/// The route for the number of products per category in a month.
pub const CATEGORY_PIE_CHART: &str = "/category-pie-chart";
/// The route for the statistics, price ranges and categories of a month.
pub const COMBINED_DATA: &str = "/combined-data";
/// The page showing the charts for a month.
pub const CHARTS_VIEW: &str = "/charts";
