//! Defines the transaction store trait and the filters it understands.

use time::Month;

use crate::{
    Error,
    month::month_of_sale,
    transaction::{Transaction, TransactionBuilder, price_as_text},
};

/// Handles the persistence and retrieval of sale transactions.
///
/// There is no way to update or delete a single transaction, the whole
/// collection is replaced when the store is reseeded.
pub trait TransactionStore {
    /// Delete every transaction in the store and insert `transactions`.
    ///
    /// This is destructive: the previous contents cannot be recovered.
    /// Implementers must apply the replacement atomically, if any insert fails
    /// the store must keep its previous contents.
    ///
    /// Returns the number of transactions inserted.
    fn replace_all(&self, transactions: Vec<TransactionBuilder>) -> Result<usize, Error>;

    /// Retrieve transactions from the store in the way defined by `query`,
    /// ordered by ID.
    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;

    /// Count the transactions that match `filter`.
    fn count(&self, filter: &TransactionFilter) -> Result<u64, Error>;

    /// Sum the prices of the transactions that match `filter`.
    ///
    /// Returns zero if no transactions match.
    fn sum_price(&self, filter: &TransactionFilter) -> Result<f64, Error>;

    /// Count the transactions that match `filter`, grouped by category.
    ///
    /// Groups are ordered by category name with the uncategorised group
    /// (`None`) first.
    fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<(Option<String>, u64)>, Error>;
}

/// Defines which transactions a store operation applies to.
///
/// Every field that is set must match, unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the title, the description, or the price
    /// as text.
    pub search: Option<String>,
    /// The calendar month of the sale date.
    pub month: Option<Month>,
    /// Whether the product sold.
    pub sold: Option<bool>,
    /// The range the price must fall in.
    pub price: Option<PriceBounds>,
}

impl TransactionFilter {
    /// Match transactions sold (or not) in `month`.
    pub fn for_month(month: Month) -> Self {
        Self {
            month: Some(month),
            ..Default::default()
        }
    }

    /// Restrict the filter to sold or unsold transactions.
    pub fn sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    /// Restrict the filter to prices within `bounds`.
    pub fn price(mut self, bounds: PriceBounds) -> Self {
        self.price = Some(bounds);
        self
    }

    /// Restrict the filter to a search string. An empty string matches everything.
    pub fn search(mut self, search: &str) -> Self {
        self.search = if search.is_empty() {
            None
        } else {
            Some(search.to_owned())
        };
        self
    }

    /// Check `transaction` against the filter in memory.
    ///
    /// SQL backed stores translate the filter into a WHERE clause instead,
    /// this is the reference behaviour they must agree with.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_ascii_lowercase();
            let contains = |text: &str| text.to_ascii_lowercase().contains(&needle);

            let found = contains(&transaction.product_title)
                || transaction
                    .product_description
                    .as_deref()
                    .is_some_and(contains)
                || contains(&price_as_text(transaction.price));

            if !found {
                return false;
            }
        }

        let month_matches = self
            .month
            .is_none_or(|month| month_of_sale(&transaction.date_of_sale) == Some(month));
        let sold_matches = self.sold.is_none_or(|sold| transaction.sold == sold);
        let price_matches = self
            .price
            .is_none_or(|bounds| bounds.contains(transaction.price));

        month_matches && sold_matches && price_matches
    }
}

/// A half-open price interval `above < price <= up_to`.
///
/// A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceBounds {
    /// Prices must be strictly greater than this.
    pub above: Option<f64>,
    /// Prices must be less than or equal to this.
    pub up_to: Option<f64>,
}

impl PriceBounds {
    /// Whether `price` falls within the bounds.
    pub fn contains(&self, price: f64) -> bool {
        self.above.is_none_or(|above| price > above)
            && self.up_to.is_none_or(|up_to| price <= up_to)
    }
}

/// Defines how transactions should be fetched from [TransactionStore::get_query].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    /// Only include transactions matching the filter.
    pub filter: TransactionFilter,
    /// Selects up to the first N (`limit`) transactions.
    pub limit: Option<u64>,
    /// Skip the first N transactions.
    pub offset: u64,
}
