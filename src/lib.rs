//! A web service for browsing product sale transactions and the monthly
//! statistics over them.
//!
//! The transactions are seeded from a JSON feed of product sales and served as
//! JSON: a searchable, paginated listing, monthly sales totals, and the data
//! behind a price range bar chart and a category pie chart.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
pub mod charts;
mod database_id;
mod db;
mod endpoints;
mod error;
mod html;
mod logging;
pub mod month;
pub mod pagination;
mod routing;
pub mod seed;
pub mod statistics;
pub mod stores;
#[cfg(test)]
mod test_utils;
pub mod transaction;

pub use app_state::AppState;
pub use database_id::{DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::Transaction;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
