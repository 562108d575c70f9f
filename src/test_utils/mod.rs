#![allow(missing_docs)]

pub(crate) mod html;

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};

use crate::{
    AppState, Error, Transaction, build_router,
    pagination::PaginationConfig,
    seed::SeedSource,
    stores::{InMemoryTransactionStore, TransactionStore},
    transaction::TransactionBuilder,
};

pub(crate) use html::{assert_valid_html, parse_html_document};

/// Nine dated transactions (seven in March 2022, two in April 2022) and one
/// with a sale date that has no month.
///
/// March: five sold totalling 1944.93, two unsold, one without a category.
pub(crate) fn sample_transactions() -> Vec<TransactionBuilder> {
    vec![
        Transaction::build("Laptop Backpack", 109.95, "2022-03-27T20:29:54+05:30")
            .description(Some("Fits 15 inch laptops"))
            .category(Some("men's clothing"))
            .sold(true),
        Transaction::build("Gold Bracelet", 695.0, "2022-03-02T10:00:00+05:30")
            .description(Some("Solid gold chain"))
            .category(Some("jewelery"))
            .sold(true),
        Transaction::build("SanDisk SSD 1TB", 109.0, "2022-03-05T12:30:00+05:30")
            .description(Some("Fast internal storage"))
            .category(Some("electronics")),
        Transaction::build("Rain Jacket", 39.99, "2022-03-11T08:15:00+05:30")
            .description(Some("Waterproof windbreaker"))
            .category(Some("women's clothing"))
            .sold(true),
        Transaction::build("Monitor 4K", 999.99, "2022-03-20T18:45:00+05:30")
            .description(Some("Ultra HD display"))
            .category(Some("electronics"))
            .sold(true),
        Transaction::build("Mystery Box", 100.0, "2022-03-31T23:59:59+05:30").sold(true),
        Transaction::build("Cotton T-Shirt", 15.0, "2022-03-14T09:00:00+05:30")
            .description(Some("Plain tee"))
            .category(Some("men's clothing")),
        Transaction::build("Hard Drive", 64.0, "2022-04-01T11:11:11+05:30")
            .description(Some("External 2TB"))
            .category(Some("electronics"))
            .sold(true),
        Transaction::build("Silver Ring", 168.0, "2022-04-22T16:20:00+05:30")
            .description(Some("Sterling silver"))
            .category(Some("jewelery")),
        Transaction::build("Undated Lamp", 50.0, "not a date")
            .description(Some("Desk lamp"))
            .category(Some("electronics"))
            .sold(true),
    ]
}

/// `count` sold January transactions titled "Item 1", "Item 2", ...
pub(crate) fn numbered_transactions(count: usize) -> Vec<TransactionBuilder> {
    (1..=count)
        .map(|i| Transaction::build(&format!("Item {i}"), i as f64, "2022-01-15").sold(true))
        .collect()
}

/// The seed feed entries equivalent to [sample_transactions].
pub(crate) fn sample_feed() -> Vec<Value> {
    sample_transactions()
        .into_iter()
        .map(|transaction| {
            json!({
                "title": transaction.product_title,
                "description": transaction.product_description,
                "price": transaction.price,
                "dateOfSale": transaction.date_of_sale,
                "sold": transaction.sold,
                "category": transaction.category,
            })
        })
        .collect()
}

/// A seed source that always returns the same feed and counts its calls.
#[derive(Debug, Default)]
pub(crate) struct StaticSeedSource {
    feed: Vec<Value>,
    fetches: AtomicUsize,
}

impl StaticSeedSource {
    pub(crate) fn new(feed: Vec<Value>) -> Self {
        Self {
            feed,
            fetches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn fetch(&self) -> Result<Vec<Value>, Error> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.feed.clone())
    }
}

/// A seed source whose upstream is always down.
#[derive(Debug, Default)]
pub(crate) struct FailingSeedSource;

#[async_trait]
impl SeedSource for FailingSeedSource {
    async fn fetch(&self) -> Result<Vec<Value>, Error> {
        Err(Error::UpstreamFetch("connection refused".to_owned()))
    }
}

pub(crate) fn get_test_state(
    transactions: Vec<TransactionBuilder>,
) -> AppState<InMemoryTransactionStore> {
    let store = InMemoryTransactionStore::new();
    store
        .replace_all(transactions)
        .expect("Could not seed store");

    AppState::new(
        store,
        Arc::new(StaticSeedSource::new(sample_feed())),
        PaginationConfig::default(),
    )
}

pub(crate) fn get_test_server(state: AppState<InMemoryTransactionStore>) -> TestServer {
    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}
