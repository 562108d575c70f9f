//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, params_from_iter, types::Value};

use crate::{
    Error,
    db::SALE_MONTH_FUNCTION,
    stores::transaction::{TransactionFilter, TransactionQuery, TransactionStore},
    transaction::{Transaction, TransactionBuilder, map_transaction_row},
};

const SELECT_COLUMNS: &str = "SELECT id, product_title, product_description, price, \
    date_of_sale, sold, category FROM sale_transaction";

/// Stores transactions in a SQLite database.
///
/// The connection must have been set up with [crate::db::initialize], which
/// [SQLiteTransactionStore::new] does for you.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be initialized.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        crate::db::initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Replace every transaction in the database inside a single SQL transaction.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error, in
    /// which case the previous contents are kept.
    fn replace_all(&self, transactions: Vec<TransactionBuilder>) -> Result<usize, Error> {
        let mut connection = self.lock()?;
        let tx = connection.transaction()?;

        tx.execute("DELETE FROM sale_transaction", ())?;

        let mut inserted = 0;
        {
            // Prepare the insert statement once for reuse
            let mut stmt = tx.prepare(
                "INSERT INTO sale_transaction \
                 (product_title, product_description, price, date_of_sale, sold, category) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;

            for builder in transactions {
                inserted += stmt.execute((
                    builder.product_title,
                    builder.product_description,
                    builder.price,
                    builder.date_of_sale,
                    builder.sold,
                    builder.category,
                ))?;
            }
        }

        tx.commit()?;

        Ok(inserted)
    }

    /// Query for transactions in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let (where_clause, parameters) = where_clause(&query.filter);
        let mut query_string = format!("{SELECT_COLUMNS}{where_clause} ORDER BY id ASC");

        if let Some(limit) = query.limit {
            query_string.push_str(&format!(
                " LIMIT {} OFFSET {}",
                clamp_to_i64(limit),
                clamp_to_i64(query.offset)
            ));
        } else if query.offset > 0 {
            // SQLite only accepts OFFSET together with LIMIT, -1 means no limit.
            query_string.push_str(&format!(" LIMIT -1 OFFSET {}", clamp_to_i64(query.offset)));
        }

        self.lock()?
            .prepare(&query_string)?
            .query_map(params_from_iter(parameters.iter()), map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    fn count(&self, filter: &TransactionFilter) -> Result<u64, Error> {
        let (where_clause, parameters) = where_clause(filter);
        let query_string = format!("SELECT COUNT(id) FROM sale_transaction{where_clause}");

        let count: i64 = self.lock()?.query_row(
            &query_string,
            params_from_iter(parameters.iter()),
            |row| row.get(0),
        )?;

        Ok(count.max(0) as u64)
    }

    fn sum_price(&self, filter: &TransactionFilter) -> Result<f64, Error> {
        let (where_clause, parameters) = where_clause(filter);
        let query_string =
            format!("SELECT COALESCE(SUM(price), 0.0) FROM sale_transaction{where_clause}");

        self.lock()?
            .query_row(&query_string, params_from_iter(parameters.iter()), |row| {
                row.get(0)
            })
            .map_err(|error| error.into())
    }

    fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<(Option<String>, u64)>, Error> {
        let (where_clause, parameters) = where_clause(filter);
        // NULL sorts before any text in ascending order.
        let query_string = format!(
            "SELECT category, COUNT(id) FROM sale_transaction{where_clause} \
             GROUP BY category ORDER BY category ASC"
        );

        self.lock()?
            .prepare(&query_string)?
            .query_map(params_from_iter(parameters.iter()), |row| {
                let category: Option<String> = row.get(0)?;
                let count: i64 = row.get(1)?;

                Ok((category, count.max(0) as u64))
            })?
            .map(|maybe_group| maybe_group.map_err(Error::SqlError))
            .collect()
    }
}

/// Translate `filter` into a SQL WHERE clause (with a leading space) and its
/// positional parameters.
///
/// Must agree with [TransactionFilter::matches].
fn where_clause(filter: &TransactionFilter) -> (String, Vec<Value>) {
    let mut where_clause_parts = vec![];
    let mut query_parameters = vec![];

    if let Some(search) = &filter.search {
        query_parameters.push(Value::Text(format!("%{}%", escape_like(search))));
        let parameter = query_parameters.len();
        where_clause_parts.push(format!(
            "(product_title LIKE ?{parameter} ESCAPE '\\' \
             OR product_description LIKE ?{parameter} ESCAPE '\\' \
             OR CAST(price AS TEXT) LIKE ?{parameter} ESCAPE '\\')"
        ));
    }

    if let Some(month) = filter.month {
        query_parameters.push(Value::Integer(i64::from(u8::from(month))));
        where_clause_parts.push(format!(
            "{SALE_MONTH_FUNCTION}(date_of_sale) = ?{}",
            query_parameters.len()
        ));
    }

    if let Some(sold) = filter.sold {
        query_parameters.push(Value::Integer(i64::from(sold)));
        where_clause_parts.push(format!("sold = ?{}", query_parameters.len()));
    }

    if let Some(bounds) = filter.price {
        if let Some(above) = bounds.above {
            query_parameters.push(Value::Real(above));
            where_clause_parts.push(format!("price > ?{}", query_parameters.len()));
        }

        if let Some(up_to) = bounds.up_to {
            query_parameters.push(Value::Real(up_to));
            where_clause_parts.push(format!("price <= ?{}", query_parameters.len()));
        }
    }

    let clause = if where_clause_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_clause_parts.join(" AND "))
    };

    (clause, query_parameters)
}

/// Escape the LIKE wildcards so that the search text is matched literally.
fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
