use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Analytics { page_id: String },
    Settings,
    Faq,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["analytics", page_id] => Route::Analytics {
                page_id: (*page_id).to_string(),
            },
            ["settings"] => Route::Settings,
            ["faq"] => Route::Faq,
            _ => Route::NotFound,
        }
    }

    pub fn current() -> Route {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Route::from_path(&path)
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".into(),
            Route::Analytics { page_id } => format!("/analytics/{page_id}"),
            Route::Settings => "/settings".into(),
            Route::Faq => "/faq".into(),
        }
    }
}

/// Full page navigation.
pub fn navigate(route: &Route) {
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(&route.href()) {
            log::warn!("navigation failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/settings/"), Route::Settings);
        assert_eq!(Route::from_path("/faq"), Route::Faq);
        assert_eq!(
            Route::from_path("/analytics/p-42"),
            Route::Analytics {
                page_id: "p-42".into()
            }
        );
        assert_eq!(Route::from_path("/analytics"), Route::NotFound);
        assert_eq!(Route::from_path("/admin/users"), Route::NotFound);
    }

    #[test]
    fn href_round_trips_through_the_parser() {
        for route in [
            Route::Home,
            Route::Settings,
            Route::Faq,
            Route::Analytics {
                page_id: "abc".into(),
            },
        ] {
            assert_eq!(Route::from_path(&route.href()), route);
        }
    }
}
