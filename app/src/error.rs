use thiserror::Error;

use crate::i18n::LanguageStore;

/// Client-side validation failures. Each one is checked before any request
/// goes out and maps onto a translation key for the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username is required")]
    UsernameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("current password is required")]
    PasswordRequired,
    #[error("new password is too short")]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("confirmation phrase does not match")]
    ConfirmationMismatch,
}

impl ValidationError {
    pub fn message_key(self) -> (&'static str, &'static str) {
        match self {
            ValidationError::UsernameRequired => ("auth", "usernameRequired"),
            ValidationError::EmailRequired => ("auth", "emailRequired"),
            ValidationError::PasswordRequired => ("auth", "passwordRequired"),
            ValidationError::PasswordTooShort => ("auth", "passwordMinLength"),
            ValidationError::PasswordMismatch | ValidationError::ConfirmationMismatch => {
                ("errors", "validationError")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("browser storage is not available")]
    StorageUnavailable,
    #[error("storage write failed: {0}")]
    Storage(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with HTTP {status}")]
    Http { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl AppError {
    /// Text for the user-facing toast. Server-provided `detail` wins, then
    /// the validation message, then the translated fallback.
    pub fn user_message(&self, i18n: &LanguageStore, fallback: (&str, &str)) -> String {
        match self {
            AppError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            AppError::Validation(v) => {
                let (ns, key) = v.message_key();
                i18n.t(ns, key)
            }
            _ => i18n.t(fallback.0, fallback.1),
        }
    }
}

/// Pull a string `detail` out of an error body (`{"detail": "..."}`).
/// Structured details (validation arrays) are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn detail_is_read_only_when_it_is_a_string() {
        assert_eq!(
            extract_detail(r#"{"detail":"Username already taken"}"#).as_deref(),
            Some("Username already taken")
        );
        assert_eq!(extract_detail(r#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
    }

    #[test]
    fn server_detail_overrides_fallback() {
        let i18n = LanguageStore::detached(Locale::En);
        let err = AppError::Http {
            status: 400,
            detail: Some("Email already registered".into()),
        };
        assert_eq!(
            err.user_message(&i18n, ("errors", "saveFailed")),
            "Email already registered"
        );
    }

    #[test]
    fn network_error_uses_translated_fallback() {
        let i18n = LanguageStore::detached(Locale::Ru);
        let err = AppError::Network("offline".into());
        assert_eq!(
            err.user_message(&i18n, ("errors", "saveFailed")),
            i18n.t("errors", "saveFailed")
        );
    }

    #[test]
    fn validation_error_uses_its_own_key() {
        let i18n = LanguageStore::detached(Locale::En);
        let err = AppError::from(ValidationError::PasswordTooShort);
        assert_eq!(
            err.user_message(&i18n, ("errors", "saveFailed")),
            i18n.t("auth", "passwordMinLength")
        );
    }
}
