use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Email or password was empty when the login form was submitted.
    IncompleteCredential,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::IncompleteCredential => write!(f, "IncompleteCredential"),
        }
    }
}

/// Structured application error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn incomplete_credential(
        message: impl Into<String>,
        field_errors: HashMap<String, String>,
    ) -> Self {
        Self {
            kind: AppErrorKind::IncompleteCredential,
            message: message.into(),
            field_errors,
        }
    }

    /// Check that both login fields are filled in.
    ///
    /// On failure every empty field is named in `field_errors`.
    pub fn check_credential_fields(email: &str, password: &str) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if email.is_empty() {
            field_errors.insert("email".to_string(), "Email is required".to_string());
        }
        if password.is_empty() {
            field_errors.insert("password".to_string(), "Password is required".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::incomplete_credential(
                "Please enter both email and password",
                field_errors,
            ))
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
