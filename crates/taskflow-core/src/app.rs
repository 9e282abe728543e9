//! Application state container

use serde::Serialize;
use std::sync::Arc;

use taskflow_storage::Database;
use taskflow_store::{LocalStore, Settings, User};

use crate::config::Config;
use crate::Result;

/// What the first screen needs to know.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Startup {
    pub settings: Settings,
    pub user: User,
    /// Whether to open on the home screen instead of the login screen.
    pub authenticated: bool,
}

pub struct App {
    config: Config,
    db: Database,
    store: LocalStore,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let store = LocalStore::new(Arc::new(db.clone()));

        Ok(Self { config, db, store })
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        let store = LocalStore::new(Arc::new(db.clone()));

        Ok(Self {
            config: Config::new(std::env::temp_dir()),
            db,
            store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Loads the documents the first screen depends on.
    pub async fn startup(&self) -> Startup {
        let settings = self.store.load_settings().await;
        let user = self.store.load_user().await;
        let authenticated = user.is_logged_in;

        tracing::info!(authenticated, "App initialized");

        Startup {
            settings,
            user,
            authenticated,
        }
    }
}
