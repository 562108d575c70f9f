//! Route handlers for the monthly statistics and chart data endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    charts::{ChartRenderer, SalesChart, category_chart, price_range_chart},
    month::RequestedMonth,
    stores::TransactionStore,
};

use super::{
    CategoryCount, CombinedReport, MonthlyStatistics, PriceRangeCount, category_counts,
    combined_report, monthly_statistics, price_range_counts,
};

/// The query parameters for the monthly endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    /// The English name of a calendar month, in any case.
    pub month: Option<String>,
}

/// Get the requested month or [Error::MissingParameter] if it is absent or
/// blank.
pub(crate) fn require_month(query: MonthQuery) -> Result<RequestedMonth, Error> {
    query
        .month
        .filter(|month| !month.trim().is_empty())
        .map(|month| RequestedMonth::parse(&month))
        .ok_or(Error::MissingParameter("month"))
}

fn render_chart(renderer: &dyn ChartRenderer, chart: &SalesChart) {
    if let Err(error) = renderer.render(chart) {
        tracing::warn!(
            "Could not render the {} for {}: {error}",
            chart.id,
            chart.month
        );
    }
}

/// Route handler for the sales totals of a month.
pub async fn get_statistics<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthlyStatistics>, Error>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let month = require_month(query)?;

    monthly_statistics(&state.transaction_store, &month).map(Json)
}

/// Route handler for the number of products sold per price range in a month.
///
/// Also renders the price range bar chart with the app's chart renderer.
pub async fn get_price_range_bar_chart<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<PriceRangeCount>>, Error>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let month = require_month(query)?;
    let counts = price_range_counts(&state.transaction_store, &month)?;

    render_chart(
        state.chart_renderer.as_ref(),
        &price_range_chart(&month, &counts),
    );

    Ok(Json(counts))
}

/// Route handler for the number of products per category in a month.
///
/// Also renders the category pie chart with the app's chart renderer.
pub async fn get_category_pie_chart<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<CategoryCount>>, Error>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let month = require_month(query)?;
    let counts = category_counts(&state.transaction_store, &month)?;

    render_chart(
        state.chart_renderer.as_ref(),
        &category_chart(&month, &counts),
    );

    Ok(Json(counts))
}

/// Route handler for the statistics, price ranges and categories of a month
/// in one response.
///
/// Renders each chart once, the same as calling both chart endpoints.
pub async fn get_combined_data<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CombinedReport>, Error>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let month = require_month(query)?;
    let report = combined_report(&state.transaction_store, &month)?;

    let renderer = state.chart_renderer.as_ref();
    render_chart(renderer, &price_range_chart(&month, &report.price_range_data));
    render_chart(renderer, &category_chart(&month, &report.category_data));

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        Error,
        charts::{ChartRenderer, SalesChart},
        endpoints,
        statistics::{CategoryCount, CombinedReport, MonthlyStatistics, PriceRangeCount},
        test_utils::{get_test_server, get_test_state, sample_transactions},
    };

    use super::{MonthQuery, require_month};

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        rendered: Mutex<Vec<String>>,
    }

    impl RecordingRenderer {
        fn rendered(&self) -> Vec<String> {
            self.rendered.lock().unwrap().clone()
        }
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&self, chart: &SalesChart) -> Result<(), Error> {
            self.rendered.lock().unwrap().push(chart.file_name());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenRenderer;

    impl ChartRenderer for BrokenRenderer {
        fn render(&self, _chart: &SalesChart) -> Result<(), Error> {
            Err(Error::ChartRender("disk full".to_owned()))
        }
    }

    #[test]
    fn blank_month_is_missing() {
        for month in [None, Some(""), Some("   ")] {
            let query = MonthQuery {
                month: month.map(str::to_owned),
            };

            assert_eq!(
                require_month(query).unwrap_err(),
                Error::MissingParameter("month")
            );
        }
    }

    #[tokio::test]
    async fn monthly_endpoints_require_month() {
        let server = get_test_server(get_test_state(sample_transactions()));

        for endpoint in [
            endpoints::STATISTICS,
            endpoints::PRICE_RANGE_BAR_CHART,
            endpoints::CATEGORY_PIE_CHART,
            endpoints::COMBINED_DATA,
        ] {
            let response = server.get(endpoint).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({"error": "Please provide a month"}));

            let response = server.get(endpoint).add_query_param("month", "").await;

            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn statistics_for_march() {
        let server = get_test_server(get_test_state(sample_transactions()));

        let response = server
            .get(endpoints::STATISTICS)
            .add_query_param("month", "March")
            .await;

        response.assert_status_ok();
        let statistics = response.json::<MonthlyStatistics>();
        assert!((statistics.total_sales - 1944.93).abs() < 1e-6);
        assert_eq!(statistics.sold_items, 5);
        assert_eq!(statistics.unsold_items, 2);
    }

    #[tokio::test]
    async fn unknown_month_is_not_an_error() {
        let server = get_test_server(get_test_state(sample_transactions()));

        let response = server
            .get(endpoints::STATISTICS)
            .add_query_param("month", "Smarch")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "total_sales": 0.0,
            "sold_items": 0,
            "unsold_items": 0
        }));
    }

    #[tokio::test]
    async fn price_range_bar_chart_returns_ten_buckets() {
        let server = get_test_server(get_test_state(sample_transactions()));

        let response = server
            .get(endpoints::PRICE_RANGE_BAR_CHART)
            .add_query_param("month", "march")
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        let buckets = body.as_array().unwrap();
        assert_eq!(buckets.len(), 10);
        assert_eq!(
            buckets[0],
            json!({"Price Range": "0-100", "Number of Items Sold": 2})
        );
        assert_eq!(
            buckets[9],
            json!({"Price Range": "901+", "Number of Items Sold": 1})
        );
    }

    #[tokio::test]
    async fn category_pie_chart_includes_missing_category() {
        let server = get_test_server(get_test_state(sample_transactions()));

        let response = server
            .get(endpoints::CATEGORY_PIE_CHART)
            .add_query_param("month", "March")
            .await;

        response.assert_status_ok();
        let counts = response.json::<Vec<CategoryCount>>();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0].category, None);
        assert_eq!(counts.iter().map(|count| count.count).sum::<u64>(), 7);
    }

    #[tokio::test]
    async fn combined_data_has_all_three_parts() {
        let server = get_test_server(get_test_state(sample_transactions()));

        let response = server
            .get(endpoints::COMBINED_DATA)
            .add_query_param("month", "April")
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        for key in ["statistics", "price_range_data", "category_data"] {
            assert!(body.get(key).is_some(), "missing {key} in {body}");
        }
        let report = response.json::<CombinedReport>();
        assert_eq!(report.statistics.sold_items, 1);
        assert_eq!(report.statistics.unsold_items, 1);
        assert_eq!(report.price_range_data.len(), 10);
        assert_eq!(
            report.price_range_data[0],
            PriceRangeCount {
                price_range: "0-100".to_owned(),
                count: 1,
            }
        );
        assert_eq!(report.category_data.len(), 2);
    }

    #[tokio::test]
    async fn chart_endpoints_render_each_chart_once() {
        let renderer = Arc::new(RecordingRenderer::default());
        let state = get_test_state(sample_transactions()).with_chart_renderer(renderer.clone());
        let server = get_test_server(state);

        server
            .get(endpoints::PRICE_RANGE_BAR_CHART)
            .add_query_param("month", "March")
            .await
            .assert_status_ok();
        server
            .get(endpoints::CATEGORY_PIE_CHART)
            .add_query_param("month", "March")
            .await
            .assert_status_ok();
        assert_eq!(
            renderer.rendered(),
            ["price-range-chart-March.html", "category-chart-March.html"]
        );

        server
            .get(endpoints::COMBINED_DATA)
            .add_query_param("month", "March")
            .await
            .assert_status_ok();
        assert_eq!(renderer.rendered().len(), 4);
    }

    #[tokio::test]
    async fn statistics_do_not_render() {
        let renderer = Arc::new(RecordingRenderer::default());
        let state = get_test_state(sample_transactions()).with_chart_renderer(renderer.clone());
        let server = get_test_server(state);

        server
            .get(endpoints::STATISTICS)
            .add_query_param("month", "March")
            .await
            .assert_status_ok();

        assert!(renderer.rendered().is_empty());
    }

    #[tokio::test]
    async fn failed_render_does_not_change_response() {
        let working = get_test_server(get_test_state(sample_transactions()));
        let broken = get_test_server(
            get_test_state(sample_transactions()).with_chart_renderer(Arc::new(BrokenRenderer)),
        );

        for endpoint in [
            endpoints::PRICE_RANGE_BAR_CHART,
            endpoints::CATEGORY_PIE_CHART,
            endpoints::COMBINED_DATA,
        ] {
            let want = working.get(endpoint).add_query_param("month", "March").await;
            let got = broken.get(endpoint).add_query_param("month", "March").await;

            got.assert_status_ok();
            assert_eq!(got.text(), want.text(), "{endpoint}");
        }
    }
}
