//! Login, logout and registration against the stored user document
//!
//! Only one account exists at a time; registering replaces it.

use crate::error::{LoginError, RegistrationError};
use crate::store::LocalStore;
use crate::user::{User, MIN_PASSWORD_LEN};

impl LocalStore {
    /// Checks the credentials against the stored account and marks it logged in.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, LoginError> {
        let user = self.load_user().await;

        if !user.has_account() {
            return Err(LoginError::NoAccount);
        }

        if !user.matches(username, password) {
            tracing::info!("Login rejected: credentials do not match");
            return Err(LoginError::InvalidCredentials);
        }

        let user = User {
            is_logged_in: true,
            ..user
        };
        self.save_user(&user).await;

        tracing::info!(username = %user.username, "User logged in");
        Ok(user)
    }

    /// Login form submit: trims both fields and rejects blanks before checking.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<User, LoginError> {
        let (username, password) = (username.trim(), password.trim());
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        self.login(username, password).await
    }

    pub async fn logout(&self) -> bool {
        let user = User {
            is_logged_in: false,
            ..self.load_user().await
        };
        let saved = self.save_user(&user).await;
        tracing::info!("User logged out");
        saved
    }

    pub async fn is_logged_in(&self) -> bool {
        self.load_user().await.is_logged_in
    }

    /// Creates the account, replacing any previous one. The new account starts logged out.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, RegistrationError> {
        if username.trim().is_empty()
            || password.trim().is_empty()
            || confirm_password.trim().is_empty()
        {
            return Err(RegistrationError::MissingFields);
        }
        if password != confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }

        let user = User::new(username.trim(), password.trim());
        if !self.save_user(&user).await {
            return Err(RegistrationError::WriteFailed);
        }

        tracing::info!(username = %user.username, "Registered account");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_without_account() {
        let store = LocalStore::in_memory();
        let err = store.login("ana", "1234").await.unwrap_err();
        assert_eq!(err, LoginError::NoAccount);
        assert_eq!(
            err.to_string(),
            "Nenhuma conta encontrada. Crie uma conta primeiro."
        );
    }

    #[tokio::test]
    async fn test_login_wrong_credentials() {
        let store = LocalStore::in_memory();
        store.save_user(&User::new("ana", "1234")).await;

        let err = store.login("ana", "4321").await.unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(err.to_string(), "Usuário ou senha incorretos");
        assert!(!store.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_login_success_persists_flag() {
        let store = LocalStore::in_memory();
        store.save_user(&User::new("ana", "1234")).await;

        let user = store.login("ana", "1234").await.unwrap();
        assert!(user.is_logged_in);
        assert_eq!(store.load_user().await, user);
        assert!(store.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_logout_clears_flag() {
        let store = LocalStore::in_memory();
        store.save_user(&User::new("ana", "1234")).await;
        store.login("ana", "1234").await.unwrap();

        assert!(store.logout().await);
        let user = store.load_user().await;
        assert!(!user.is_logged_in);
        assert_eq!(user.username, "ana");
    }

    #[tokio::test]
    async fn test_logout_without_account_writes_default() {
        let store = LocalStore::in_memory();
        assert!(store.logout().await);
        assert_eq!(store.load_user().await, User::default());
        assert!(store.backend().get_item("app.user").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sign_in_trims_and_rejects_blank() {
        let store = LocalStore::in_memory();
        assert_eq!(
            store.sign_in("  ", "1234").await,
            Err(LoginError::MissingCredentials)
        );

        store.register("ana", "1234", "1234").await.unwrap();
        let user = store.sign_in(" ana ", "1234 ").await.unwrap();
        assert!(user.is_logged_in);
    }

    #[tokio::test]
    async fn test_register_validation_order() {
        let store = LocalStore::in_memory();
        assert_eq!(
            store.register("ana", "", "").await,
            Err(RegistrationError::MissingFields)
        );
        assert_eq!(
            store.register("ana", "abc", "abd").await,
            Err(RegistrationError::PasswordMismatch)
        );

        let err = store.register("ana", "abc", "abc").await.unwrap_err();
        assert_eq!(err, RegistrationError::PasswordTooShort { min: 4 });
        assert_eq!(err.to_string(), "A senha deve ter pelo menos 4 caracteres");

        assert!(!store.load_user().await.has_account());
    }

    #[tokio::test]
    async fn test_register_replaces_previous_account() {
        let store = LocalStore::in_memory();
        store.register("ana", "1234", "1234").await.unwrap();
        store.login("ana", "1234").await.unwrap();

        let user = store.register(" bia ", "abcd", "abcd").await.unwrap();
        assert_eq!(user.username, "bia");
        assert!(!user.is_logged_in);

        assert_eq!(
            store.login("ana", "1234").await,
            Err(LoginError::InvalidCredentials)
        );
        assert!(store.login("bia", "abcd").await.is_ok());
    }
}
