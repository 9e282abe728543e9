//! Single-account credential record
//!
//! The password is kept and compared in plain text.

use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub username: String,
    pub password: String,
    pub is_logged_in: bool,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            is_logged_in: false,
        }
    }

    /// Whether an account has been registered.
    pub fn has_account(&self) -> bool {
        !self.username.is_empty()
    }

    /// Exact comparison of both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
