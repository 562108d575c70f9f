//! Chart presentation for the monthly statistics.
//!
//! This module contains:
//! - Builders that turn price range and category counts into ECharts options
//! - The `ChartRenderer` seam that chart endpoints render through
//! - The HTML page showing both charts for a month

mod builders;
mod page;
mod render;

pub use builders::{SalesChart, UNCATEGORISED_LABEL, category_chart, price_range_chart};
pub use page::get_charts_page;
pub use render::{ChartRenderer, HtmlChartRenderer, NoChartRenderer};
