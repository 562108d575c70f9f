//! An in-memory transaction store for tests.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Error,
    database_id::TransactionId,
    stores::transaction::{TransactionFilter, TransactionQuery, TransactionStore},
    transaction::{Transaction, TransactionBuilder},
};

#[derive(Debug, Default)]
struct Inner {
    transactions: Vec<Transaction>,
    last_id: TransactionId,
}

/// Keeps transactions in a vector, applying filters with
/// [TransactionFilter::matches].
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryTransactionStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryTransactionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a single transaction outside of the seeding process.
    pub(crate) fn insert(&self, builder: TransactionBuilder) -> Transaction {
        let mut inner = self.lock().expect("Could not lock store");
        inner.last_id += 1;
        let transaction = builder.finalise(inner.last_id);
        inner.transactions.push(transaction.clone());
        transaction
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, Error> {
        self.inner.lock().map_err(|_| Error::DatabaseLockError)
    }

    fn matching(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error> {
        Ok(self
            .lock()?
            .transactions
            .iter()
            .filter(|transaction| filter.matches(transaction))
            .cloned()
            .collect())
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn replace_all(&self, transactions: Vec<TransactionBuilder>) -> Result<usize, Error> {
        let mut inner = self.lock()?;
        let first_id = inner.last_id + 1;

        inner.transactions = transactions
            .into_iter()
            .zip(first_id..)
            .map(|(builder, id)| builder.finalise(id))
            .collect();
        let inserted = inner.transactions.len();
        inner.last_id += inserted as TransactionId;

        Ok(inserted)
    }

    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = query
            .limit
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(self
            .matching(&query.filter)?
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    fn count(&self, filter: &TransactionFilter) -> Result<u64, Error> {
        Ok(self.matching(filter)?.len() as u64)
    }

    fn sum_price(&self, filter: &TransactionFilter) -> Result<f64, Error> {
        Ok(self
            .matching(filter)?
            .iter()
            .map(|transaction| transaction.price)
            .sum())
    }

    fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<(Option<String>, u64)>, Error> {
        let mut counts: BTreeMap<Option<String>, u64> = BTreeMap::new();

        for transaction in self.matching(filter)? {
            *counts.entry(transaction.category).or_default() += 1;
        }

        Ok(counts.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use crate::{
        stores::{
            TransactionFilter, TransactionQuery, TransactionStore, sqlite::SQLiteTransactionStore,
        },
        test_utils::sample_transactions,
    };

    use super::InMemoryTransactionStore;

    /// Both stores must give the same answers for the same data.
    #[test]
    fn agrees_with_sqlite_store() {
        let memory = InMemoryTransactionStore::new();
        let sqlite = SQLiteTransactionStore::new(rusqlite::Connection::open_in_memory().unwrap())
            .unwrap();
        memory.replace_all(sample_transactions()).unwrap();
        sqlite.replace_all(sample_transactions()).unwrap();

        let filters = [
            TransactionFilter::default(),
            TransactionFilter::default().search("inch"),
            TransactionFilter::default().search("9.9"),
            TransactionFilter::for_month(Month::March),
            TransactionFilter::for_month(Month::March).sold(false),
            TransactionFilter::for_month(Month::April).sold(true),
        ];

        for filter in filters {
            assert_eq!(
                memory.count(&filter).unwrap(),
                sqlite.count(&filter).unwrap(),
                "count differs for {filter:?}"
            );
            assert!(
                (memory.sum_price(&filter).unwrap() - sqlite.sum_price(&filter).unwrap()).abs()
                    < 1e-6,
                "sum differs for {filter:?}"
            );
            assert_eq!(
                memory.count_by_category(&filter).unwrap(),
                sqlite.count_by_category(&filter).unwrap(),
                "categories differ for {filter:?}"
            );

            let titles = |store: &dyn TransactionStore| -> Vec<String> {
                store
                    .get_query(TransactionQuery {
                        filter: filter.clone(),
                        ..Default::default()
                    })
                    .unwrap()
                    .into_iter()
                    .map(|transaction| transaction.product_title)
                    .collect()
            };
            assert_eq!(titles(&memory), titles(&sqlite));
        }
    }

    #[test]
    fn insert_assigns_new_ids() {
        let store = InMemoryTransactionStore::new();
        store.replace_all(sample_transactions()).unwrap();

        let inserted = store.insert(crate::Transaction::build("Extra", 1.0, "2022-01-01"));

        assert_eq!(inserted.id, sample_transactions().len() as i64 + 1);
    }
}
