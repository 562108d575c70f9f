//! Product sale transactions.
//!
//! This module contains:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The listing operation with search and pagination, and its route handler

mod core;
mod list;

pub use core::{Transaction, TransactionBuilder};
pub use list::{ListQuery, TransactionPage, get_transactions, list_transactions};

pub(crate) use core::{map_transaction_row, price_as_text};
