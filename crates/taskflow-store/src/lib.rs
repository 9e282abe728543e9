//! TaskFlow Local Store
//!
//! Four independent JSON documents (settings, user, profile, items) kept in
//! an asynchronous key-value store. Reads never fail: an absent or unreadable
//! document yields its default. Writes report success as a `bool`.
//!
//! Every mutating helper is a full load-modify-save round trip. Two callers
//! mutating the same document concurrently race and the later write wins.

mod auth;
mod clock;
mod error;
mod item;
mod items;
mod key;
mod profile;
mod settings;
mod store;
mod user;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{LoginError, ProfileError, RegistrationError, StoreError};
pub use item::{Item, ItemEdit, ItemFilter, ItemUpdate, NewItem, DEFAULT_CATEGORY};
pub use key::{Key, ITEMS, PROFILE, SETTINGS, USER};
pub use profile::{Profile, INTEREST_OPTIONS};
pub use settings::Settings;
pub use store::{document_or_default, LocalStore};
pub use user::{User, MIN_PASSWORD_LEN};

pub type Result<T> = std::result::Result<T, StoreError>;
