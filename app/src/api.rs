//! REST calls to the Mus.Link backend, via `gloo-net`.
//!
//! Pages talk to the `AnalyticsApi` / `AccountApi` traits so the flows can
//! run against fakes in tests.

#![allow(async_fn_in_trait)]

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{extract_detail, AppError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkStat {
    pub id: String,
    pub platform: String,
    #[serde(default)]
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryStat {
    pub country: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityStat {
    pub city: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsReport {
    pub views: u64,
    pub total_clicks: u64,
    #[serde(default)]
    pub links: Vec<LinkStat>,
    #[serde(default)]
    pub by_country: Option<Vec<CountryStat>>,
    #[serde(default)]
    pub by_city: Option<Vec<CityStat>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PlanLimits {
    #[serde(default)]
    pub has_advanced_analytics: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LimitsResponse {
    #[serde(default)]
    pub limits: PlanLimits,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

pub trait AnalyticsApi {
    async fn analytics(&self, page_id: &str) -> Result<AnalyticsReport, AppError>;
    async fn limits(&self) -> Result<LimitsResponse, AppError>;
}

pub trait AccountApi {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), AppError>;
    async fn change_password(&self, change: &PasswordChange) -> Result<(), AppError>;
    async fn delete_account(&self) -> Result<(), AppError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(cfg: &AppConfig, token: Option<String>) -> Self {
        Self {
            base: cfg.api_url(""),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    async fn send_json<T: Serialize>(&self, req: RequestBuilder, body: &T) -> Result<Response, AppError> {
        let resp = self.authorize(req).json(body)?.send().await?;
        check_status(resp).await
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, AppError> {
        let resp = self.authorize(req).send().await?;
        check_status(resp).await
    }
}

async fn check_status(resp: Response) -> Result<Response, AppError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(AppError::Http {
        status,
        detail: extract_detail(&body),
    })
}

impl AnalyticsApi for ApiClient {
    async fn analytics(&self, page_id: &str) -> Result<AnalyticsReport, AppError> {
        let resp = self
            .send(Request::get(&self.url(&format!("/analytics/{page_id}"))))
            .await?;
        Ok(resp.json::<AnalyticsReport>().await?)
    }

    async fn limits(&self) -> Result<LimitsResponse, AppError> {
        let resp = self.send(Request::get(&self.url("/my-limits"))).await?;
        Ok(resp.json::<LimitsResponse>().await?)
    }
}

impl AccountApi for ApiClient {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), AppError> {
        self.send_json(Request::put(&self.url("/settings/profile")), update)
            .await
            .map(|_| ())
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<(), AppError> {
        self.send_json(Request::put(&self.url("/settings/password")), change)
            .await
            .map(|_| ())
    }

    async fn delete_account(&self) -> Result<(), AppError> {
        self.send(Request::delete(&self.url("/settings/account")))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_without_optional_sections() {
        let r: AnalyticsReport =
            serde_json::from_str(r#"{"views":200,"total_clicks":50}"#).unwrap();
        assert!(r.links.is_empty());
        assert!(r.by_country.is_none());
        assert!(r.by_city.is_none());
    }

    #[test]
    fn report_with_geography() {
        let r: AnalyticsReport = serde_json::from_str(
            r#"{
                "views": 10, "total_clicks": 4,
                "links": [{"id":"l1","platform":"spotify","clicks":3},{"id":"l2","platform":"tidal","clicks":1}],
                "by_country": [{"country":"RU","clicks":3}],
                "by_city": [{"city":"Moscow","clicks":2}]
            }"#,
        )
        .unwrap();
        assert_eq!(r.links[0].platform, "spotify");
        assert_eq!(r.by_country.unwrap()[0].clicks, 3);
        assert_eq!(r.by_city.unwrap()[0].city, "Moscow");
    }

    #[test]
    fn limits_default_to_no_entitlement() {
        let l: LimitsResponse = serde_json::from_str("{}").unwrap();
        assert!(!l.limits.has_advanced_analytics);
        let l: LimitsResponse =
            serde_json::from_str(r#"{"limits":{"has_advanced_analytics":true,"max_pages":10}}"#)
                .unwrap();
        assert!(l.limits.has_advanced_analytics);
    }

    #[test]
    fn client_urls() {
        let cfg = AppConfig::default();
        let c = ApiClient::new(&cfg, None);
        assert_eq!(c.url("/my-limits"), "/api/my-limits");
    }

    #[test]
    fn request_bodies_match_backend_fields() {
        let body = serde_json::to_value(PasswordChange {
            current_password: "old".into(),
            new_password: "secret1".into(),
        })
        .unwrap();
        assert_eq!(body["current_password"], "old");
        assert_eq!(body["new_password"], "secret1");
    }
}
