//! Application router configuration.

use axum::{Json, Router, http::StatusCode, middleware, response::IntoResponse, routing::get};
use serde_json::json;

use crate::{
    AppState,
    charts::get_charts_page,
    endpoints,
    logging::logging_middleware,
    seed::get_initialize,
    statistics::{
        get_category_pie_chart, get_combined_data, get_price_range_bar_chart, get_statistics,
    },
    stores::TransactionStore,
    transaction::get_transactions,
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::INITIALIZE, get(get_initialize::<S>))
        .route(endpoints::TRANSACTIONS, get(get_transactions::<S>))
        .route(endpoints::STATISTICS, get(get_statistics::<S>))
        .route(
            endpoints::PRICE_RANGE_BAR_CHART,
            get(get_price_range_bar_chart::<S>),
        )
        .route(
            endpoints::CATEGORY_PIE_CHART,
            get(get_category_pie_chart::<S>),
        )
        .route(endpoints::COMBINED_DATA, get(get_combined_data::<S>))
        .route(endpoints::CHARTS_VIEW, get(get_charts_page::<S>))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_404_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}
