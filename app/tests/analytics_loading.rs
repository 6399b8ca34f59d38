use std::cell::Cell;

use futures::executor::block_on;
use muslink::analytics::load_analytics;
use muslink::api::{AnalyticsApi, AnalyticsReport, LimitsResponse, PlanLimits};
use muslink::config::AppConfig;
use muslink::error::AppError;

enum Limits {
    Entitled(bool),
    Fails,
}

struct FakeAnalytics {
    report_fails: bool,
    limits: Limits,
    limits_calls: Cell<u32>,
}

impl FakeAnalytics {
    fn new(limits: Limits) -> Self {
        Self {
            report_fails: false,
            limits,
            limits_calls: Cell::new(0),
        }
    }
}

fn report() -> AnalyticsReport {
    serde_json::from_str(
        r#"{"views":200,"total_clicks":50,
            "links":[{"id":"l1","platform":"spotify","clicks":50}],
            "by_country":[{"country":"DE","clicks":50}]}"#,
    )
    .unwrap()
}

impl AnalyticsApi for FakeAnalytics {
    async fn analytics(&self, _page_id: &str) -> Result<AnalyticsReport, AppError> {
        if self.report_fails {
            return Err(AppError::Http {
                status: 404,
                detail: None,
            });
        }
        Ok(report())
    }

    async fn limits(&self) -> Result<LimitsResponse, AppError> {
        self.limits_calls.set(self.limits_calls.get() + 1);
        match self.limits {
            Limits::Entitled(has_advanced_analytics) => Ok(LimitsResponse {
                limits: PlanLimits {
                    has_advanced_analytics,
                },
            }),
            Limits::Fails => Err(AppError::Network("offline".into())),
        }
    }
}

#[test]
fn pro_plan_unlocks_without_asking_for_limits() {
    let cfg = AppConfig::default();
    let api = FakeAnalytics::new(Limits::Entitled(false));
    let view = block_on(load_analytics(&api, &cfg, Some("pro"), "p1")).unwrap();
    assert!(view.advanced);
    assert_eq!(api.limits_calls.get(), 0);
}

#[test]
fn free_plan_without_entitlement_is_locked() {
    let cfg = AppConfig::default();
    let api = FakeAnalytics::new(Limits::Entitled(false));
    let view = block_on(load_analytics(&api, &cfg, Some("free"), "p1")).unwrap();
    assert!(!view.advanced);
    assert_eq!(view.report, report());
    assert_eq!(api.limits_calls.get(), 1);
}

#[test]
fn free_plan_with_entitlement_is_unlocked() {
    let cfg = AppConfig::default();
    let api = FakeAnalytics::new(Limits::Entitled(true));
    let view = block_on(load_analytics(&api, &cfg, Some("free"), "p1")).unwrap();
    assert!(view.advanced);
}

#[test]
fn failed_limits_lock_instead_of_failing() {
    let cfg = AppConfig::default();
    let api = FakeAnalytics::new(Limits::Fails);
    let view = block_on(load_analytics(&api, &cfg, None, "p1")).unwrap();
    assert!(!view.advanced);
}

#[test]
fn failed_report_is_an_error() {
    let cfg = AppConfig::default();
    let api = FakeAnalytics {
        report_fails: true,
        ..FakeAnalytics::new(Limits::Entitled(true))
    };
    let err = block_on(load_analytics(&api, &cfg, Some("pro"), "missing")).unwrap_err();
    assert!(matches!(err, AppError::Http { status: 404, .. }));
    assert_eq!(api.limits_calls.get(), 0);
}
