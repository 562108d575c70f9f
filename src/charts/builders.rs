//! ECharts options for the monthly sales charts.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisType, Tooltip, Trigger},
    series::{Bar, Pie},
};

use crate::{
    month::RequestedMonth,
    statistics::{CategoryCount, PriceRangeCount},
};

/// The label used for products without a category.
pub const UNCATEGORISED_LABEL: &str = "Uncategorised";

/// A chart for one month, ready to be rendered.
pub struct SalesChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The month name the chart was requested for.
    pub month: String,
    /// The ECharts configuration.
    pub chart: Chart,
}

impl SalesChart {
    /// The HTML element ID of the price range bar chart.
    pub const PRICE_RANGE_ID: &'static str = "price-range-chart";
    /// The HTML element ID of the category pie chart.
    pub const CATEGORY_ID: &'static str = "category-chart";

    /// The file name for this chart, e.g. "price-range-chart-March.html".
    ///
    /// Only the ASCII letters and digits of the month are kept, so the name
    /// never contains a path separator.
    pub fn file_name(&self) -> String {
        let month: String = self
            .month
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        let month = if month.is_empty() {
            "unknown".to_owned()
        } else {
            month
        };

        format!("{}-{month}.html", self.id)
    }

    /// The ECharts options as a JSON string that can be embedded in a
    /// `<script>` element.
    ///
    /// Every `<` is written as the JSON escape `\u003c`, so text from a
    /// request or the seed feed cannot close the script element.
    pub fn options(&self) -> String {
        self.chart.to_string().replace('<', "\\u003c")
    }
}

/// Bar chart of the number of products sold per price range.
pub fn price_range_chart(month: &RequestedMonth, counts: &[PriceRangeCount]) -> SalesChart {
    let labels: Vec<String> = counts
        .iter()
        .map(|count| count.price_range.clone())
        .collect();
    let values: Vec<f64> = counts.iter().map(|count| count.count as f64).collect();

    let chart = Chart::new()
        .title(
            Title::new()
                .text("Price Range")
                .subtext(format!("Products sold in {month}")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Price Range")
                .data(labels),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Number of Items Sold"),
        )
        .series(Bar::new().name("Number of Items Sold").data(values));

    SalesChart {
        id: SalesChart::PRICE_RANGE_ID,
        month: month.to_string(),
        chart,
    }
}

/// Pie chart of the number of products per category.
pub fn category_chart(month: &RequestedMonth, counts: &[CategoryCount]) -> SalesChart {
    let data: Vec<(f64, &str)> = counts
        .iter()
        .map(|count| {
            (
                count.count as f64,
                count.category.as_deref().unwrap_or(UNCATEGORISED_LABEL),
            )
        })
        .collect();

    let chart = Chart::new()
        .title(
            Title::new()
                .text("Categories")
                .subtext(format!("Products listed in {month}")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("3%"))
        .series(Pie::new().name("Products").radius("55%").data(data));

    SalesChart {
        id: SalesChart::CATEGORY_ID,
        month: month.to_string(),
        chart,
    }
}
