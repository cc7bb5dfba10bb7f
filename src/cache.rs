//! Thread-local cache for fetched datasets.
//!
//! Views are re-mounted whenever the user navigates, and each mount asks for
//! the same public CSV files. The cache keeps the first successfully loaded
//! table per candidate list so navigation does not refetch.
//!
//! # Cache Key Structure
//! The candidate URLs joined by newlines, in the order they are tried.
//!
//! # Cache Value Structure
//! The parsed [`CsvTable`]. Failed lookups are not stored, so a later mount
//! retries the network.

use crate::config::DATASET_TIMEOUT_MS;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use race_analytics::remote::fetch_first_available;
use race_analytics::CsvTable;
use std::cell::RefCell;
use std::collections::HashMap;

pub type CacheKey = String;

thread_local! {
    /// Global cache that survives component lifetimes.
    pub static CACHE_STORE: RefCell<HashMap<CacheKey, CsvTable>> = RefCell::new(HashMap::new());
}

pub fn cache_key(urls: &[String]) -> CacheKey {
    urls.join("\n")
}

/// Cached [`fetch_first_available`], abandoned after [`DATASET_TIMEOUT_MS`].
/// Empty results are returned but not kept.
pub async fn fetch_dataset(urls: Vec<String>) -> CsvTable {
    let key = cache_key(&urls);
    if let Some(table) = CACHE_STORE.with(|c| c.borrow().get(&key).cloned()) {
        debug!("Dataset cache hit for {} candidate(s)", urls.len());
        return table;
    }

    let fetch = Box::pin(fetch_first_available(&urls));
    let table = match select(fetch, TimeoutFuture::new(DATASET_TIMEOUT_MS)).await {
        Either::Left((table, _)) => table,
        Either::Right(_) => {
            warn!("Dataset fetch timed out after {} ms", DATASET_TIMEOUT_MS);
            CsvTable::default()
        }
    };
    if !table.records.is_empty() {
        CACHE_STORE.with(|c| {
            c.borrow_mut().insert(key, table.clone());
        });
    }
    table
}
