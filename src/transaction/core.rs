//! Defines the product sale transaction models.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::database_id::TransactionId;

// ============================================================================
// MODELS
// ============================================================================

/// A product sale record, i.e. an item that was listed for sale and may or may
/// not have sold.
///
/// Transactions are only ever created by seeding the store, see
/// [crate::seed::reseed]. To create a new transaction, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// The title of the product.
    pub product_title: String,
    /// A longer text description of the product.
    pub product_description: Option<String>,
    /// The price the product was listed at.
    pub price: f64,
    /// When the sale happened, as the raw string supplied by the seed feed.
    ///
    /// It is not parsed into a date type, see [crate::month::month_of_sale]
    /// for how the month is extracted.
    pub date_of_sale: String,
    /// Whether the product sold.
    pub sold: bool,
    /// The product category, e.g. "electronics".
    pub category: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(product_title: &str, price: f64, date_of_sale: &str) -> TransactionBuilder {
        TransactionBuilder {
            product_title: product_title.to_owned(),
            product_description: None,
            price,
            date_of_sale: date_of_sale.to_owned(),
            sold: false,
            category: None,
        }
    }
}

/// A transaction that has not been inserted into a store yet.
///
/// # Examples
///
/// ```
/// use sales_stats_rs::Transaction;
///
/// let transaction = Transaction::build("Mens Casual Shirt", 329.85, "2021-11-27T20:29:54+05:30")
///     .description(Some("Slim fit cotton shirt"))
///     .category(Some("men's clothing"))
///     .sold(true);
///
/// assert!(transaction.sold);
/// assert_eq!(transaction.category.as_deref(), Some("men's clothing"));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The title of the product.
    pub product_title: String,
    /// A longer text description of the product.
    pub product_description: Option<String>,
    /// The price the product was listed at.
    pub price: f64,
    /// When the sale happened, as a raw string.
    pub date_of_sale: String,
    /// Whether the product sold. Defaults to `false`.
    pub sold: bool,
    /// The product category.
    pub category: Option<String>,
}

impl TransactionBuilder {
    /// Set the product description.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.product_description = description.map(str::to_owned);
        self
    }

    /// Set whether the product sold.
    pub fn sold(mut self, sold: bool) -> Self {
        self.sold = sold;
        self
    }

    /// Set the product category.
    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_owned);
        self
    }

    /// Attach an ID to create the stored [Transaction].
    pub(crate) fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            product_title: self.product_title,
            product_description: self.product_description,
            price: self.price,
            date_of_sale: self.date_of_sale,
            sold: self.sold,
            category: self.category,
        }
    }
}

/// Render a price as the listing search sees it, e.g. `109.0` or `329.85`.
///
/// This is Rust's shortest round-trip float formatting. It agrees with
/// SQLite's `CAST(price AS TEXT)` for prices with a few decimal places, which
/// covers the seed feed, but not in general: `0.1 + 0.2` gives
/// `0.30000000000000004` here and `0.3` in SQLite, and `1e16` gives `1e16`
/// here and `1.0e+16` in SQLite.
pub(crate) fn price_as_text(price: f64) -> String {
    format!("{price:?}")
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order they are defined in the table.
pub(crate) fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let product_title = row.get(1)?;
    let product_description = row.get(2)?;
    let price = row.get(3)?;
    let date_of_sale = row.get(4)?;
    let sold = row.get(5)?;
    let category = row.get(6)?;

    Ok(Transaction {
        id,
        product_title,
        product_description,
        price,
        date_of_sale,
        sold,
        category,
    })
}
