//! Account settings actions. Every check runs before the request is built,
//! so a rejected form never reaches the network.

use crate::api::{AccountApi, PasswordChange, ProfileUpdate};
use crate::error::{AppError, ValidationError};
use crate::i18n::{LanguageStore, Locale};

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_profile(username: &str, email: &str) -> Result<ProfileUpdate, ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    Ok(ProfileUpdate {
        username: username.to_string(),
        email: email.to_string(),
    })
}

pub fn validate_password(current: &str, new: &str, confirm: &str) -> Result<PasswordChange, ValidationError> {
    if current.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(PasswordChange {
        current_password: current.to_string(),
        new_password: new.to_string(),
    })
}

/// The typed phrase must equal the locale's delete word exactly, case
/// included.
pub fn validate_delete_confirmation(typed: &str, locale: Locale) -> Result<(), ValidationError> {
    if typed == locale.delete_confirmation_word() {
        Ok(())
    } else {
        Err(ValidationError::ConfirmationMismatch)
    }
}

/// "Type DELETE to confirm", in the active language.
pub fn delete_confirmation_prompt(i18n: &LanguageStore) -> String {
    i18n.t("settings", "deleteConfirmPrompt")
        .replace("{word}", i18n.delete_confirmation_word())
}

pub async fn submit_profile<A: AccountApi>(api: &A, username: &str, email: &str) -> Result<ProfileUpdate, AppError> {
    let update = validate_profile(username, email)?;
    api.update_profile(&update).await?;
    Ok(update)
}

pub async fn submit_password<A: AccountApi>(api: &A, current: &str, new: &str, confirm: &str) -> Result<(), AppError> {
    let change = validate_password(current, new, confirm)?;
    api.change_password(&change).await
}

pub async fn submit_account_deletion<A: AccountApi>(api: &A, typed: &str, locale: Locale) -> Result<(), AppError> {
    validate_delete_confirmation(typed, locale)?;
    api.delete_account().await
}
