//! Seeding the transaction store from an external product sale feed.
//!
//! This module contains:
//! - The `SeedSource` trait with HTTP and file implementations
//! - The mapping from feed entries to transactions
//! - The reseed operation and its route handler

mod initialize;
mod mapping;
mod source;

pub use initialize::{INITIALIZED_MESSAGE, InitializeResponse, get_initialize, reseed};
pub use mapping::transaction_from_seed;
pub use source::{DEFAULT_SEED_URL, FileSeedSource, HttpSeedSource, SeedSource};
