//! Signed-in account, as left in `localStorage` by the login flow.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config::SESSION_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub plan: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

pub fn load_session() -> Option<Session> {
    LocalStorage::get::<Session>(SESSION_STORAGE_KEY).ok()
}

pub fn save_session(session: &Session) {
    if let Err(e) = LocalStorage::set(SESSION_STORAGE_KEY, session) {
        log::warn!("could not save session: {e}");
    }
}

pub fn clear_session() {
    LocalStorage::delete(SESSION_STORAGE_KEY);
}

/// `None` when nobody is signed in.
pub type SessionContext = UseStateHandle<Option<Session>>;

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within the App providers")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_and_plan_default_to_empty() {
        let s: Session = serde_json::from_str(
            r#"{"token":"t","user":{"id":"u1","username":"nightdrive","email":"n@mus.link"}}"#,
        )
        .unwrap();
        assert_eq!(s.user.plan, "");
        assert!(!s.user.is_admin());
    }

    #[test]
    fn admin_role_is_detected() {
        let u: User = serde_json::from_str(
            r#"{"id":"1","username":"root","email":"r@mus.link","role":"admin","plan":"pro"}"#,
        )
        .unwrap();
        assert!(u.is_admin());
    }
}
