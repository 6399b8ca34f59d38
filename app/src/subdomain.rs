//! Artist subdomain routing: `<artist>.mus.link` runs the app in the
//! context of that artist's page.
//!
//! Resolution is a pure function of the hostname and query string; the
//! browser wrappers below just feed it `window.location`.

use url::form_urlencoded;
use web_sys::window;

use crate::config::AppConfig;

const QUERY_PARAM: &str = "subdomain";
const RESERVED_LABEL: &str = "www";

/// Resolve the artist subdomain for `hostname`. `query` is the raw
/// `location.search` (leading `?` optional) and only matters on
/// development hosts.
pub fn resolve(cfg: &AppConfig, hostname: &str, query: &str) -> Option<String> {
    let host = hostname.trim().to_lowercase();

    if is_dev_host(cfg, &host) {
        return query_subdomain(query);
    }

    let suffix = format!(".{}", cfg.main_domain);
    let label = host.strip_suffix(&suffix)?;
    if label.is_empty() || label == RESERVED_LABEL {
        return None;
    }
    Some(label.to_string())
}

fn is_dev_host(cfg: &AppConfig, host: &str) -> bool {
    host == "localhost"
        || is_ipv4_literal(host)
        || cfg
            .dev_host_suffixes
            .iter()
            .any(|s| is_same_or_subdomain(host, &s.to_lowercase()))
}

/// `host` is `suffix` itself or a name under it, split on a label boundary.
fn is_same_or_subdomain(host: &str, suffix: &str) -> bool {
    !suffix.is_empty()
        && (host == suffix
            || host
                .strip_suffix(suffix)
                .is_some_and(|rest| rest.ends_with('.')))
}

/// Four dot-separated runs of ASCII digits. Octet ranges are not checked.
fn is_ipv4_literal(host: &str) -> bool {
    let parts: Vec<&str> = host.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

fn query_subdomain(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == QUERY_PARAM)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

pub fn subdomain_url(cfg: &AppConfig, protocol: &str, subdomain: &str, path: &str) -> String {
    format!("{protocol}//{subdomain}.{}{path}", cfg.main_domain)
}

pub fn main_url(cfg: &AppConfig, protocol: &str, path: &str) -> String {
    format!("{protocol}//{}{path}", cfg.main_domain)
}

// ---------- browser wrappers ----------

fn location_parts() -> Option<(String, String, String)> {
    let loc = window()?.location();
    Some((
        loc.hostname().ok()?,
        loc.search().unwrap_or_default(),
        loc.protocol().unwrap_or_else(|_| "https:".into()),
    ))
}

fn current_protocol() -> String {
    location_parts()
        .map(|(_, _, p)| p)
        .unwrap_or_else(|| "https:".into())
}

/// Subdomain for the live location, recomputed on every call.
pub fn get_subdomain(cfg: &AppConfig) -> Option<String> {
    let (host, search, _) = location_parts()?;
    resolve(cfg, &host, &search)
}

pub fn is_subdomain(cfg: &AppConfig) -> bool {
    get_subdomain(cfg).is_some()
}

pub fn build_subdomain_url(cfg: &AppConfig, subdomain: &str, path: &str) -> String {
    subdomain_url(cfg, &current_protocol(), subdomain, path)
}

pub fn main_domain_url(cfg: &AppConfig, path: &str) -> String {
    main_url(cfg, &current_protocol(), path)
}
