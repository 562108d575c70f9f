//! Contains the trait and implementations for objects that store
//! [transactions](crate::Transaction).

mod transaction;

#[cfg(test)]
mod memory;
pub mod sqlite;

#[cfg(test)]
pub(crate) use memory::InMemoryTransactionStore;
pub use sqlite::SQLiteTransactionStore;
pub use transaction::{PriceBounds, TransactionFilter, TransactionQuery, TransactionStore};
