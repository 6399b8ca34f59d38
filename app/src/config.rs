//! Runtime configuration.
//!
//! Defaults are compiled in. A deployment can override any field with an
//! embedded `<script id="muslink-config" type="application/json">` block in
//! `index.html`; missing fields keep their defaults.

use serde::Deserialize;
use web_sys::window;

use crate::error::AppError;

pub const CONFIG_SCRIPT_ID: &str = "muslink-config";

pub const THEME_STORAGE_KEY: &str = "muslink_theme";
pub const LANGUAGE_STORAGE_KEY: &str = "muslink_language";
pub const SESSION_STORAGE_KEY: &str = "muslink_session";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub main_domain: String,
    /// Hostname suffixes of development previews; these read the
    /// `subdomain` query parameter instead of parsing the host.
    pub dev_host_suffixes: Vec<String>,
    pub api_base: String,
    pub privileged_plans: Vec<String>,
    pub support_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            main_domain: "mus.link".into(),
            dev_host_suffixes: vec!["preview.emergentagent.com".into()],
            api_base: "/api".into(),
            privileged_plans: vec!["pro".into(), "business".into()],
            support_email: "support@mus.link".into(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let mut cfg: AppConfig = serde_json::from_str(json)?;
        cfg.main_domain = cfg.main_domain.trim().trim_matches('.').to_lowercase();
        if cfg.main_domain.is_empty() {
            cfg.main_domain = AppConfig::default().main_domain;
        }
        Ok(cfg)
    }

    /// Reads the embedded override block. Anything unreadable falls back to
    /// the defaults with a warning.
    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        if json.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {e}");
                Self::default()
            }
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn is_privileged_plan(&self, plan: &str) -> bool {
        self.privileged_plans
            .iter()
            .any(|p| p.eq_ignore_ascii_case(plan.trim()))
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = AppConfig::from_json(r#"{"api_base":"https://api.mus.link"}"#).unwrap();
        assert_eq!(cfg.api_base, "https://api.mus.link");
        assert_eq!(cfg.main_domain, "mus.link");
        assert_eq!(cfg.privileged_plans, vec!["pro", "business"]);
    }

    #[test]
    fn main_domain_is_normalised() {
        let cfg = AppConfig::from_json(r#"{"main_domain":" .MyTrack.CC. "}"#).unwrap();
        assert_eq!(cfg.main_domain, "mytrack.cc");

        let cfg = AppConfig::from_json(r#"{"main_domain":""}"#).unwrap();
        assert_eq!(cfg.main_domain, "mus.link");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn api_url_joins_without_double_slash() {
        let cfg = AppConfig::from_json(r#"{"api_base":"/api/"}"#).unwrap();
        assert_eq!(cfg.api_url("/my-limits"), "/api/my-limits");
    }

    #[test]
    fn plan_check_ignores_case() {
        let cfg = AppConfig::default();
        assert!(cfg.is_privileged_plan("PRO"));
        assert!(!cfg.is_privileged_plan("free"));
        assert!(!cfg.is_privileged_plan(""));
    }
}
