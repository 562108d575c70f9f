//! Maps seed feed entries onto transactions.

use serde_json::Value;

use crate::transaction::{Transaction, TransactionBuilder};

fn text<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}

/// Map one feed entry onto a transaction, field by field.
///
/// The feed uses the keys `title`, `description`, `price`, `dateOfSale`,
/// `sold` and `category`. A missing or wrongly typed description or category
/// becomes `None`. Any other missing or wrongly typed field takes an empty
/// value: an empty title, a price of zero, an empty sale date (which is in no
/// month) and unsold. An entry that is not an object becomes a transaction
/// with every field empty, so each entry yields exactly one transaction.
pub fn transaction_from_seed(entry: &Value) -> TransactionBuilder {
    let title = text(entry, "title").unwrap_or_default();
    let price = entry
        .get("price")
        .and_then(Value::as_f64)
        .unwrap_or_default();
    let date_of_sale = text(entry, "dateOfSale").unwrap_or_default();
    let sold = entry
        .get("sold")
        .and_then(Value::as_bool)
        .unwrap_or_default();

    Transaction::build(title, price, date_of_sale)
        .description(text(entry, "description"))
        .sold(sold)
        .category(text(entry, "category"))
}
