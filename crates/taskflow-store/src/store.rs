//! Document access over a key-value backend

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use taskflow_storage::{KeyValueStore, MemoryStore};

use crate::clock::{Clock, SystemClock};
use crate::error::{ProfileError, StoreError};
use crate::item::Item;
use crate::key::{Key, ITEMS, PROFILE, SETTINGS, USER};
use crate::profile::Profile;
use crate::settings::Settings;
use crate::user::User;
use crate::Result;

/// Maps a raw backend read to a document, falling back to the default when
/// the key is absent, the backend failed, or the stored JSON does not decode.
pub fn document_or_default<T>(raw: taskflow_storage::Result<Option<String>>) -> T
where
    T: DeserializeOwned + Default,
{
    match decode_document(raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read document, using default");
            T::default()
        }
    }
}

fn decode_document<T: DeserializeOwned>(
    raw: taskflow_storage::Result<Option<String>>,
) -> Result<Option<T>> {
    match raw? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

#[derive(Clone)]
pub struct LocalStore {
    backend: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl LocalStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(backend, Arc::new(SystemClock))
    }

    pub fn with_clock(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { backend, clock }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    pub(crate) fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Reads the document under `key`. Never fails.
    pub async fn get_json<T>(&self, key: Key<T>) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = self.backend.get_item(key.name()).await;
        let _span = tracing::debug_span!("load_document", key = %key).entered();
        document_or_default(raw)
    }

    /// Overwrites the document under `key`. Returns `false` if the write failed.
    pub async fn set_json<T: Serialize>(&self, key: Key<T>, value: &T) -> bool {
        self.write_document(key.name(), value).await
    }

    pub(crate) async fn write_document<V>(&self, key: &'static str, value: &V) -> bool
    where
        V: Serialize + ?Sized,
    {
        match self.try_write(key, value).await {
            Ok(()) => {
                tracing::debug!(key = %key, "Saved document");
                true
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to save document");
                false
            }
        }
    }

    async fn try_write<V>(&self, key: &str, value: &V) -> std::result::Result<(), StoreError>
    where
        V: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.backend.set_item(key, &json).await?;
        Ok(())
    }

    // === Settings ===

    pub async fn load_settings(&self) -> Settings {
        self.get_json(SETTINGS).await
    }

    pub async fn save_settings(&self, settings: &Settings) -> bool {
        self.set_json(SETTINGS, settings).await
    }

    // === User ===

    pub async fn load_user(&self) -> User {
        self.get_json(USER).await
    }

    pub async fn save_user(&self, user: &User) -> bool {
        self.set_json(USER, user).await
    }

    // === Profile ===

    pub async fn load_profile(&self) -> Profile {
        self.get_json(PROFILE).await
    }

    pub async fn save_profile(&self, profile: &Profile) -> bool {
        self.set_json(PROFILE, profile).await
    }

    /// Saves the profile form. Name and email are trimmed and required.
    pub async fn update_profile(
        &self,
        name: &str,
        email: &str,
        interests: Vec<String>,
    ) -> std::result::Result<Profile, ProfileError> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() {
            return Err(ProfileError::MissingFields);
        }

        let profile = Profile {
            name: name.to_string(),
            email: email.to_string(),
            interests,
        };

        if !self.save_profile(&profile).await {
            return Err(ProfileError::WriteFailed);
        }
        Ok(profile)
    }

    // === Items ===

    pub async fn load_items(&self) -> Vec<Item> {
        self.get_json(ITEMS).await
    }

    pub async fn save_items(&self, items: &[Item]) -> bool {
        self.write_document(ITEMS.name(), items).await
    }
}
