//! Typed document keys

use std::fmt;
use std::marker::PhantomData;

use crate::item::Item;
use crate::profile::Profile;
use crate::settings::Settings;
use crate::user::User;

pub const SETTINGS: Key<Settings> = Key::new("app.settings");
pub const USER: Key<User> = Key::new("app.user");
pub const PROFILE: Key<Profile> = Key::new("app.profile");
pub const ITEMS: Key<Vec<Item>> = Key::new("case.items");

/// Storage key bound to the document type stored under it.
pub struct Key<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name).finish()
    }
}

impl<T> fmt::Display for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
