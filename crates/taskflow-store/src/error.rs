//! Store error types
//!
//! `Display` strings of the domain errors are the messages shown to the user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] taskflow_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Preencha usuário e senha")]
    MissingCredentials,

    #[error("Nenhuma conta encontrada. Crie uma conta primeiro.")]
    NoAccount,

    #[error("Usuário ou senha incorretos")]
    InvalidCredentials,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Preencha todos os campos")]
    MissingFields,

    #[error("As senhas não coincidem")]
    PasswordMismatch,

    #[error("A senha deve ter pelo menos {min} caracteres")]
    PasswordTooShort { min: usize },

    #[error("Não foi possível criar a conta. Tente novamente.")]
    WriteFailed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Preencha nome e email")]
    MissingFields,

    #[error("Selecione uma área de interesse")]
    NoInterestSelected,

    #[error("Esta área já está na sua lista")]
    DuplicateInterest,

    #[error("Não foi possível salvar o perfil")]
    WriteFailed,
}
