use std::cell::RefCell;

use futures::executor::block_on;
use muslink::api::{AccountApi, PasswordChange, ProfileUpdate};
use muslink::error::{AppError, ValidationError};
use muslink::i18n::{LanguageStore, Locale};
use muslink::settings::{submit_account_deletion, submit_password, submit_profile};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Profile(ProfileUpdate),
    Password(PasswordChange),
    Delete,
}

#[derive(Default)]
struct FakeAccount {
    calls: RefCell<Vec<Call>>,
    reject_with: Option<(u16, Option<String>)>,
}

impl FakeAccount {
    fn rejecting(status: u16, detail: Option<&str>) -> Self {
        Self {
            calls: RefCell::default(),
            reject_with: Some((status, detail.map(str::to_string))),
        }
    }

    fn outcome(&self, call: Call) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        match &self.reject_with {
            Some((status, detail)) => Err(AppError::Http {
                status: *status,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl AccountApi for FakeAccount {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), AppError> {
        self.outcome(Call::Profile(update.clone()))
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<(), AppError> {
        self.outcome(Call::Password(change.clone()))
    }

    async fn delete_account(&self) -> Result<(), AppError> {
        self.outcome(Call::Delete)
    }
}

#[test]
fn blank_username_never_reaches_the_server() {
    let api = FakeAccount::default();
    let err = block_on(submit_profile(&api, "   ", "a@mus.link")).unwrap_err();
    assert!(matches!(err, AppError::Validation(ValidationError::UsernameRequired)));
    assert!(api.calls().is_empty());
}

#[test]
fn valid_profile_is_sent_once() {
    let api = FakeAccount::default();
    let update = block_on(submit_profile(&api, "nightdrive", "n@mus.link")).unwrap();
    assert_eq!(update.username, "nightdrive");
    assert_eq!(api.calls(), vec![Call::Profile(update)]);
}

#[test]
fn short_or_mismatched_passwords_are_caught_locally() {
    let api = FakeAccount::default();
    let short = block_on(submit_password(&api, "old", "12345", "12345")).unwrap_err();
    assert!(matches!(short, AppError::Validation(ValidationError::PasswordTooShort)));
    let mismatch = block_on(submit_password(&api, "old", "secret1", "secret2")).unwrap_err();
    assert!(matches!(mismatch, AppError::Validation(ValidationError::PasswordMismatch)));
    assert!(api.calls().is_empty());

    block_on(submit_password(&api, "old", "secret1", "secret1")).unwrap();
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn lowercase_delete_word_sends_nothing() {
    let api = FakeAccount::default();
    let err = block_on(submit_account_deletion(&api, "delete", Locale::En)).unwrap_err();
    assert!(matches!(err, AppError::Validation(ValidationError::ConfirmationMismatch)));
    assert!(api.calls().is_empty());
}

#[test]
fn exact_delete_word_deletes_once() {
    let api = FakeAccount::default();
    block_on(submit_account_deletion(&api, "DELETE", Locale::En)).unwrap();
    assert_eq!(api.calls(), vec![Call::Delete]);

    let api = FakeAccount::default();
    block_on(submit_account_deletion(&api, "УДАЛИТЬ", Locale::Ru)).unwrap();
    assert_eq!(api.calls(), vec![Call::Delete]);
}

#[test]
fn delete_word_follows_the_active_language() {
    let api = FakeAccount::default();
    assert!(block_on(submit_account_deletion(&api, "DELETE", Locale::Es)).is_err());
    assert!(api.calls().is_empty());
}

#[test]
fn server_detail_is_shown_to_the_user() {
    let i18n = LanguageStore::detached(Locale::En);
    let api = FakeAccount::rejecting(400, Some("Username already taken"));
    let err = block_on(submit_profile(&api, "taken", "t@mus.link")).unwrap_err();
    assert_eq!(err.user_message(&i18n, ("errors", "saveFailed")), "Username already taken");
}

#[test]
fn missing_detail_falls_back_to_translation() {
    let i18n = LanguageStore::detached(Locale::En);
    let api = FakeAccount::rejecting(500, None);
    let err = block_on(submit_account_deletion(&api, "DELETE", Locale::En)).unwrap_err();
    assert_eq!(
        err.user_message(&i18n, ("errors", "deleteFailed")),
        i18n.t("errors", "deleteFailed")
    );
}
