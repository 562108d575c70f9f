//! Replaces the stored transactions with the seed feed.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, stores::TransactionStore};

use super::{SeedSource, transaction_from_seed};

/// The message sent after a successful reseed.
pub const INITIALIZED_MESSAGE: &str = "Database initialized with seed data.";

/// The response body for a successful reseed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Always [INITIALIZED_MESSAGE].
    pub message: String,
    /// The number of transactions now in the store.
    pub count: usize,
}

/// Replace every transaction in `store` with the entries fetched from
/// `source`, returning the number of transactions stored.
///
/// The feed is fetched before the store is touched, so a failed fetch leaves
/// the store as it was.
///
/// # Errors
/// Returns [Error::UpstreamFetch] if the feed cannot be fetched, or a store
/// error if the transactions cannot be replaced.
pub async fn reseed(
    store: &impl TransactionStore,
    source: &dyn SeedSource,
) -> Result<usize, Error> {
    let feed = source.fetch().await?;
    let transactions = feed.iter().map(transaction_from_seed).collect();

    let count = store.replace_all(transactions)?;
    tracing::info!("Replaced all transactions with {count} from the seed feed");

    Ok(count)
}

/// Route handler that reseeds the store from the app's seed source.
pub async fn get_initialize<S>(
    State(state): State<AppState<S>>,
) -> Result<(StatusCode, Json<InitializeResponse>), Error>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let count = reseed(&state.transaction_store, state.seed_source.as_ref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(InitializeResponse {
            message: INITIALIZED_MESSAGE.to_owned(),
            count,
        }),
    ))
}
