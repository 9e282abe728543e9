//! Async key-value contract

use async_trait::async_trait;

use crate::Result;

/// A string-keyed store of string values.
///
/// Every write replaces the whole value under its key. There is no
/// transaction spanning two calls: a read followed by a write from one caller
/// can interleave with another caller's writes.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key was never written.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value stored under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
