//! Where seed data comes from.

use std::{fmt::Debug, path::PathBuf};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::Error;

/// The product sale feed used when no other seed source is configured.
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// A source of seed data: a JSON array of product sale objects.
#[async_trait]
pub trait SeedSource: Debug + Send + Sync {
    /// Fetch the seed feed.
    ///
    /// # Errors
    /// Returns [Error::UpstreamFetch] if the feed cannot be read or is not a
    /// JSON array.
    async fn fetch(&self) -> Result<Vec<Value>, Error>;
}

/// Fetches the seed feed with an HTTP GET request.
///
/// There is no timeout or retry, a slow upstream holds the request open.
#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    client: Client,
    url: Url,
}

impl HttpSeedSource {
    /// Create a seed source for the feed at `url`.
    ///
    /// # Errors
    /// Returns [Error::UpstreamFetch] if `url` is not a valid URL.
    pub fn new(url: &str) -> Result<Self, Error> {
        let url = Url::parse(url)
            .map_err(|error| Error::UpstreamFetch(format!("invalid seed URL {url:?}: {error}")))?;

        Ok(Self {
            client: Client::new(),
            url,
        })
    }
}

fn upstream_error(error: reqwest::Error) -> Error {
    Error::UpstreamFetch(error.to_string())
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<Value>, Error> {
        tracing::debug!("Fetching seed data from {}", self.url);

        self.client
            .get(self.url.clone())
            .send()
            .await
            .map_err(upstream_error)?
            .error_for_status()
            .map_err(upstream_error)?
            .json::<Vec<Value>>()
            .await
            .map_err(upstream_error)
    }
}

/// Reads the seed feed from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    /// Create a seed source for the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn fetch(&self) -> Result<Vec<Value>, Error> {
        tracing::debug!("Reading seed data from {}", self.path.display());

        let text = tokio::fs::read_to_string(&self.path).await.map_err(|error| {
            Error::UpstreamFetch(format!("could not read {}: {error}", self.path.display()))
        })?;

        serde_json::from_str(&text).map_err(|error| {
            Error::UpstreamFetch(format!(
                "{} is not a JSON array: {error}",
                self.path.display()
            ))
        })
    }
}
