//! TaskFlow Core
//!
//! Application container: configuration, logging, and the local store the
//! screens read from and write to.

mod app;
mod config;
mod error;

pub use app::{App, Startup};
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use taskflow_catalog::{
    course, courses, filter_courses, filter_lessons, lesson, lessons, Course, Lesson,
    COURSE_CATEGORIES, LESSON_CATEGORIES,
};
pub use taskflow_storage::{Database, KeyValueStore, MemoryStore, StorageError};
pub use taskflow_store::{
    Item, ItemEdit, ItemFilter, ItemUpdate, LocalStore, LoginError, NewItem, Profile,
    ProfileError, RegistrationError, Settings, User, INTEREST_OPTIONS,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging with the default `info` fallback.
pub fn init_logging() {
    Config::default().init_logging();
}

/// Initialize logging, using `default_filter` when `RUST_LOG` is unset or invalid.
pub fn init_logging_with(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed by an embedding host or a test.
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
