//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{
    charts::{ChartRenderer, NoChartRenderer},
    pagination::PaginationConfig,
    seed::SeedSource,
    stores::TransactionStore,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: TransactionStore + Send + Sync,
{
    /// The store for the product sale [transactions](crate::Transaction).
    pub transaction_store: S,
    /// Where `/initialize` fetches the seed data from.
    pub seed_source: Arc<dyn SeedSource>,
    /// Renders the charts for the chart endpoints.
    pub chart_renderer: Arc<dyn ChartRenderer>,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl<S> AppState<S>
where
    S: TransactionStore + Send + Sync,
{
    /// Create a new [AppState] with chart rendering disabled.
    pub fn new(
        transaction_store: S,
        seed_source: Arc<dyn SeedSource>,
        pagination_config: PaginationConfig,
    ) -> Self {
        Self {
            transaction_store,
            seed_source,
            chart_renderer: Arc::new(NoChartRenderer),
            pagination_config,
        }
    }

    /// Render charts with `chart_renderer` instead.
    pub fn with_chart_renderer(mut self, chart_renderer: Arc<dyn ChartRenderer>) -> Self {
        self.chart_renderer = chart_renderer;
        self
    }
}
