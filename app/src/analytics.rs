//! Numbers behind the analytics page: rates, platform shares, geography
//! rankings, pie slices and the advanced-section gate.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::api::{AnalyticsApi, AnalyticsReport, CityStat, CountryStat, LimitsResponse, LinkStat};
use crate::config::AppConfig;
use crate::error::AppError;

pub const GEO_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

const PLATFORMS: &[Platform] = &[
    Platform { id: "spotify", name: "Spotify", color: "#1DB954" },
    Platform { id: "apple", name: "Apple Music", color: "#FA233B" },
    Platform { id: "youtube", name: "YouTube", color: "#FF0000" },
    Platform { id: "soundcloud", name: "SoundCloud", color: "#FF5500" },
    Platform { id: "tidal", name: "Tidal", color: "#000000" },
    Platform { id: "deezer", name: "Deezer", color: "#00C7F2" },
    Platform { id: "custom", name: "Custom Link", color: "#888888" },
];

const CUSTOM: Platform = Platform { id: "custom", name: "Custom Link", color: "#888888" };

/// Display info for a platform id; unknown ids render as a custom link.
pub fn platform_info(id: &str) -> Platform {
    PLATFORMS
        .iter()
        .copied()
        .find(|p| p.id == id)
        .unwrap_or(CUSTOM)
}

/// `part / whole * 100` to one decimal place, or `"0"` when `whole` is zero.
pub fn percent_label(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0".to_string();
    }
    format!("{:.1}", part as f64 / whole as f64 * 100.0)
}

/// Click-through rate as shown on the page, without the `%` sign.
pub fn click_through_rate(report: &AnalyticsReport) -> String {
    percent_label(report.total_clicks, report.views)
}

/// Progress-bar width for a link's share of all clicks, clamped to 0..=100.
pub fn share_width(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

/// Whether geography and the platform pie are shown. View gating only;
/// the backend enforces entitlement on its own.
pub fn has_advanced_access(cfg: &AppConfig, plan: Option<&str>, limits: Option<&LimitsResponse>) -> bool {
    plan.is_some_and(|p| cfg.is_privileged_plan(p))
        || limits.is_some_and(|l| l.limits.has_advanced_analytics)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoRow {
    pub label: String,
    pub clicks: u64,
}

fn top_rows(mut rows: Vec<GeoRow>) -> Vec<GeoRow> {
    // Stable sort keeps the server's order between equal counts.
    rows.sort_by(|a, b| b.clicks.cmp(&a.clicks));
    rows.truncate(GEO_TOP_N);
    rows
}

pub fn top_countries(stats: &[CountryStat]) -> Vec<GeoRow> {
    top_rows(
        stats
            .iter()
            .map(|s| GeoRow { label: s.country.clone(), clicks: s.clicks })
            .collect(),
    )
}

pub fn top_cities(stats: &[CityStat]) -> Vec<GeoRow> {
    top_rows(
        stats
            .iter()
            .map(|s| GeoRow { label: s.city.clone(), clicks: s.clicks })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub platform: Platform,
    pub clicks: u64,
    pub fraction: f64,
    /// Radians, clockwise from 12 o'clock.
    pub start: f64,
    pub end: f64,
}

/// Clicks summed per platform, largest first. Platforms with no clicks are
/// left out; an all-zero report yields no slices.
pub fn pie_slices(links: &[LinkStat]) -> Vec<PieSlice> {
    let mut per_platform: BTreeMap<&'static str, u64> = BTreeMap::new();
    for link in links {
        *per_platform.entry(platform_info(&link.platform).id).or_default() += link.clicks;
    }
    let total: u64 = per_platform.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut totals: Vec<(&'static str, u64)> =
        per_platform.into_iter().filter(|(_, c)| *c > 0).collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    let mut angle = 0.0;
    totals
        .into_iter()
        .map(|(id, clicks)| {
            let fraction = clicks as f64 / total as f64;
            let start = angle;
            angle += fraction * 2.0 * PI;
            PieSlice {
                platform: platform_info(id),
                clicks,
                fraction,
                start,
                end: angle,
            }
        })
        .collect()
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for one slice of a pie centred on `(cx, cy)`.
pub fn slice_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    if slice.fraction >= 1.0 - f64::EPSILON {
        // A full-circle arc has coincident endpoints and would not draw.
        return format!(
            "M {cx:.3} {top:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {bottom:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {top:.3} Z",
            top = cy - r,
            bottom = cy + r,
        );
    }
    let (x0, y0) = point_on_circle(cx, cy, r, slice.start);
    let (x1, y1) = point_on_circle(cx, cy, r, slice.end);
    let large_arc = u8::from(slice.end - slice.start > PI);
    format!(
        "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    )
}

/// What the analytics page renders once loading settles.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub report: AnalyticsReport,
    pub advanced: bool,
}

/// Fetches the report and, for non-privileged plans only, the account
/// limits. A failed limits call locks the advanced sections instead of
/// failing the page.
pub async fn load_analytics<A: AnalyticsApi>(
    api: &A,
    cfg: &AppConfig,
    plan: Option<&str>,
    page_id: &str,
) -> Result<AnalyticsView, AppError> {
    let report = api.analytics(page_id).await?;

    if plan.is_some_and(|p| cfg.is_privileged_plan(p)) {
        return Ok(AnalyticsView { report, advanced: true });
    }

    let limits = match api.limits().await {
        Ok(limits) => Some(limits),
        Err(e) => {
            log::warn!("plan limits unavailable, advanced analytics locked: {e}");
            None
        }
    };
    let advanced = has_advanced_access(cfg, plan, limits.as_ref());
    Ok(AnalyticsView { report, advanced })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PlanLimits;

    fn report(views: u64, total_clicks: u64) -> AnalyticsReport {
        AnalyticsReport {
            views,
            total_clicks,
            links: Vec::new(),
            by_country: None,
            by_city: None,
        }
    }

    fn link(platform: &str, clicks: u64) -> LinkStat {
        LinkStat {
            id: format!("{platform}-{clicks}"),
            platform: platform.into(),
            clicks,
        }
    }

    #[test]
    fn ctr_with_zero_views_is_zero() {
        assert_eq!(click_through_rate(&report(0, 0)), "0");
        assert_eq!(click_through_rate(&report(0, 17)), "0");
    }

    #[test]
    fn ctr_has_one_decimal() {
        assert_eq!(click_through_rate(&report(200, 50)), "25.0");
        assert_eq!(click_through_rate(&report(3, 1)), "33.3");
    }

    #[test]
    fn unknown_platform_is_custom() {
        assert_eq!(platform_info("spotify").name, "Spotify");
        assert_eq!(platform_info("vk").name, "Custom Link");
        assert_eq!(platform_info("").color, "#888888");
    }

    #[test]
    fn share_width_is_clamped() {
        assert_eq!(share_width(5, 0), 0.0);
        assert_eq!(share_width(1, 4), 25.0);
        assert_eq!(share_width(9, 4), 100.0);
    }

    #[test]
    fn pro_plan_sees_advanced_sections() {
        let cfg = AppConfig::default();
        assert!(has_advanced_access(&cfg, Some("pro"), None));
    }

    #[test]
    fn free_plan_needs_limits_entitlement() {
        let cfg = AppConfig::default();
        assert!(!has_advanced_access(&cfg, Some("free"), None));
        assert!(!has_advanced_access(&cfg, Some("free"), Some(&LimitsResponse::default())));
        let entitled = LimitsResponse {
            limits: PlanLimits {
                has_advanced_analytics: true,
            },
        };
        assert!(has_advanced_access(&cfg, Some("free"), Some(&entitled)));
        assert!(has_advanced_access(&cfg, None, Some(&entitled)));
    }

    #[test]
    fn geography_is_ranked_and_capped() {
        let stats: Vec<CountryStat> = (0..15)
            .map(|i| CountryStat {
                country: format!("C{i}"),
                clicks: i,
            })
            .collect();
        let rows = top_countries(&stats);
        assert_eq!(rows.len(), GEO_TOP_N);
        assert_eq!(rows[0].label, "C14");
        assert_eq!(rows[9].label, "C5");
    }

    #[test]
    fn pie_aggregates_per_platform() {
        let slices = pie_slices(&[
            link("spotify", 30),
            link("apple", 10),
            link("spotify", 30),
            link("vk", 20),
            link("deezer", 0),
        ]);
        let ids: Vec<&str> = slices.iter().map(|s| s.platform.id).collect();
        assert_eq!(ids, vec!["spotify", "custom", "apple"]);
        assert_eq!(slices[0].clicks, 60);
        let sum: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((slices.last().unwrap().end - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn pie_of_nothing_is_empty() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[link("spotify", 0)]).is_empty());
    }

    #[test]
    fn single_slice_draws_full_circle() {
        let slices = pie_slices(&[link("tidal", 7)]);
        let path = slice_path(50.0, 50.0, 40.0, &slices[0]);
        assert!(path.starts_with("M 50.000 10.000 A"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn quarter_slice_path() {
        let slices = pie_slices(&[link("spotify", 1), link("apple", 3)]);
        let quarter = slices.iter().find(|s| s.platform.id == "spotify").unwrap();
        let path = slice_path(50.0, 50.0, 40.0, quarter);
        // Starts where the apple slice ended (270°) and sweeps a small arc.
        assert!(path.starts_with("M 50.000 50.000 L 10.000 50.000 A 40.000 40.000 0 0 1"));
    }
}
