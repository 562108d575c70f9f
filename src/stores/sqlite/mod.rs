//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

mod transaction;

pub use transaction::SQLiteTransactionStore;

use std::sync::Arc;

use rusqlite::Connection;

use crate::{AppState, Error, pagination::PaginationConfig, seed::SeedSource};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteTransactionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
pub fn create_app_state(
    db_connection: Connection,
    seed_source: Arc<dyn SeedSource>,
    pagination_config: PaginationConfig,
) -> Result<SQLAppState, Error> {
    let transaction_store = SQLiteTransactionStore::new(db_connection)?;

    Ok(AppState::new(
        transaction_store,
        seed_source,
        pagination_config,
    ))
}
