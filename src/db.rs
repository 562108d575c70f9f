//! Sets up the application's SQLite database.

use rusqlite::{Connection, functions::FunctionFlags};

use crate::{Error, month::month_of_sale};

/// The name of the SQL function that extracts the month number (1-12) from a
/// `date_of_sale` string, or NULL if the string has no recognisable month.
pub(crate) const SALE_MONTH_FUNCTION: &str = "sale_month";

/// Create the tables for the domain models and register the SQL functions the
/// queries rely on.
///
/// SQL functions are registered per connection, so this must be called on
/// every connection before it is used by a store.
///
/// # Errors
/// Returns an [Error::SqlError] if the function cannot be registered or the
/// table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    register_sale_month_function(connection)?;

    let transaction = rusqlite::Transaction::new_unchecked(
        connection,
        rusqlite::TransactionBehavior::Exclusive,
    )?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

fn register_sale_month_function(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.create_scalar_function(
        SALE_MONTH_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |context| {
            let date_of_sale: Option<String> = context.get(0)?;

            Ok(date_of_sale
                .as_deref()
                .and_then(month_of_sale)
                .map(|month| i64::from(u8::from(month))))
        },
    )
}

/// Create the transaction table in the database.
fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS sale_transaction (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_title TEXT NOT NULL,
                product_description TEXT,
                price REAL NOT NULL,
                date_of_sale TEXT NOT NULL,
                sold INTEGER NOT NULL,
                category TEXT
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_sale_transaction_category ON sale_transaction(category);",
        (),
    )?;

    Ok(())
}
