use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::components::navigation::NavBar;
use crate::home::Home;
use crate::not_found::NotFound;
use crate::recordings::{RecordingDetail, Recordings};
use crate::settings::Settings;

// the variant names double as the symbolic route names used for
// programmatic navigation, so renaming one is a breaking change for
// anything that calls Route::from_name
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/recordings")]
        Recordings {},
        #[route("/recordings/:id")]
        RecordingDetail { id: String },
        #[route("/settings")]
        Settings {},
        // anything unmatched falls through to here
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

pub static ACTIVE_ROUTE: GlobalSignal<ActiveRoute> = Signal::global(ActiveRoute::default);

impl Route {
    // (path pattern, name) for every declared page, in match order
    pub const TABLE: [(&'static str, &'static str); 4] = [
        ("/", "Home"),
        ("/recordings", "Recordings"),
        ("/recordings/:id", "RecordingDetail"),
        ("/settings", "Settings"),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Recordings {} => "Recordings",
            Route::RecordingDetail { .. } => "RecordingDetail",
            Route::Settings {} => "Settings",
            Route::NotFound { .. } => "NotFound",
        }
    }

    // the positional parameter captured from the path, if this route has one
    pub fn id(&self) -> Option<&str> {
        match self {
            Route::RecordingDetail { id } => Some(id.as_str()),
            _ => None,
        }
    }

    // the inverse of name() and id()
    //
    // NotFound has no name-based entry, it only catches paths that nothing
    // else matched
    pub fn from_name(name: &str, id: Option<&str>) -> Option<Route> {
        match (name, id) {
            ("Home", None) => Some(Route::Home {}),
            ("Recordings", None) => Some(Route::Recordings {}),
            ("RecordingDetail", Some(id)) if !id.is_empty() => Some(Route::RecordingDetail {
                id: id.to_owned(),
            }),
            ("Settings", None) => Some(Route::Settings {}),
            _ => None,
        }
    }

    // parse a full url path, ignoring any query string or fragment
    pub fn resolve(url: &str) -> anyhow::Result<Route> {
        let path = url.find(['?', '#']).map_or(url, |idx| &url[..idx]);
        let path = if path.is_empty() { "/" } else { path };

        path.parse::<Route>()
            .map_err(|err| anyhow::Error::msg(format!("failed to resolve {url}: {err}")))
    }

    // the top-level page that the header should highlight for this route
    pub fn section(&self) -> &'static str {
        match self {
            Route::RecordingDetail { .. } => "Recordings",
            other => other.name(),
        }
    }

    pub fn title(&self) -> String {
        let page = match self {
            Route::Home {} => return String::from("Kirki"),
            Route::Recordings {} => String::from("Recordings"),
            Route::RecordingDetail { id } => format!("Recording {id}"),
            Route::Settings {} => String::from("Settings"),
            Route::NotFound { .. } => String::from("Page not found"),
        };

        format!("{page} | Kirki")
    }
}

// the one piece of process-wide ui state: whichever route is mounted right now
//
// every navigation replaces the route wholesale, so nothing captured by an
// earlier route (e.g. a recording id) outlives it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveRoute {
    current: Option<Route>,
    navigations: u64,
}

impl ActiveRoute {
    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    // returns false if the route was already active
    pub fn enter(&mut self, route: Route) -> bool {
        if self.current.as_ref() == Some(&route) {
            return false;
        }

        self.navigations += 1;
        tracing::debug!(
            {
                from = ?self.current.as_ref().map(Route::name),
                to = route.name(),
                id = ?route.id(),
                count = self.navigations
            },
            "navigated"
        );

        self.current = Some(route);
        true
    }

    pub fn navigate(&mut self, url: &str) -> anyhow::Result<&Route> {
        let route = Route::resolve(url)?;
        self.enter(route);

        self.current
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("no active route after navigation"))
    }

    pub fn is_active(&self, target: &Route) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.section() == target.section())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn declared_paths_select_named_routes() {
        for (path, name) in Route::TABLE {
            let concrete = path.replace(":id", "7");
            let route = Route::resolve(&concrete).unwrap();
            assert_eq!(route.name(), name, "{concrete}");
        }
    }

    #[test]
    fn detail_route_exposes_id() {
        let route = Route::resolve("/recordings/42").unwrap();
        assert_eq!(
            route,
            Route::RecordingDetail {
                id: String::from("42")
            }
        );
        assert_eq!(route.id(), Some("42"));
        assert_eq!(Route::Recordings {}.id(), None);
    }

    #[test]
    fn literal_segment_beats_parameter() {
        assert_eq!(Route::resolve("/recordings").unwrap(), Route::Recordings {});
        assert_eq!(Route::resolve("/").unwrap(), Route::Home {});
        assert_eq!(Route::resolve("").unwrap(), Route::Home {});
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            Route::resolve("/recordings/9?tab=transcript#t=30").unwrap(),
            Route::RecordingDetail {
                id: String::from("9")
            }
        );
        assert_eq!(Route::resolve("/settings#top").unwrap(), Route::Settings {});
    }

    #[test]
    fn unknown_paths_fall_through() {
        let route = Route::resolve("/uploads/new").unwrap();
        assert_eq!(route.name(), "NotFound");
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec![String::from("uploads"), String::from("new")]
            }
        );

        assert_eq!(Route::resolve("/recordings/42/edit").unwrap().name(), "NotFound");
    }

    #[test]
    fn routes_render_back_to_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(
            Route::RecordingDetail {
                id: String::from("42")
            }
            .to_string(),
            "/recordings/42"
        );
        assert_eq!(Route::Settings {}.to_string(), "/settings");
    }

    #[test]
    fn route_names_are_unique() {
        let names: HashSet<&str> = Route::TABLE.iter().map(|(_, name)| *name).collect();
        assert_eq!(names.len(), Route::TABLE.len());
        assert_eq!(
            names,
            HashSet::from(["Home", "Recordings", "RecordingDetail", "Settings"])
        );
        assert!(!names.contains("NotFound"));
    }

    #[test]
    fn from_name_inverts_name_and_id() {
        for (path, name) in Route::TABLE {
            let route = Route::resolve(&path.replace(":id", "abc")).unwrap();
            assert_eq!(Route::from_name(route.name(), route.id()), Some(route));
            assert_eq!(route_name_round_trip(name), name);
        }

        assert_eq!(Route::from_name("RecordingDetail", None), None);
        assert_eq!(Route::from_name("RecordingDetail", Some("")), None);
        assert_eq!(Route::from_name("Settings", Some("1")), None);
        assert_eq!(Route::from_name("Missing", None), None);
        assert_eq!(Route::from_name("NotFound", None), None);
    }

    fn route_name_round_trip(name: &str) -> &'static str {
        let id = (name == "RecordingDetail").then_some("1");
        Route::from_name(name, id).unwrap().name()
    }

    #[test]
    fn navigation_replaces_active_route() {
        let mut active = ActiveRoute::default();
        assert_eq!(active.current(), None);

        let detail = active.navigate("/recordings/42").unwrap();
        assert_eq!(detail.id(), Some("42"));

        let settings = active.navigate("/settings").unwrap().clone();
        assert_eq!(settings, Route::Settings {});
        assert_eq!(active.current(), Some(&Route::Settings {}));
        assert_eq!(active.current().and_then(Route::id), None);
        assert_eq!(active.navigations, 2);
    }

    #[test]
    fn entering_the_same_route_is_a_no_op() {
        let mut active = ActiveRoute::default();
        assert!(active.enter(Route::Recordings {}));
        assert!(!active.enter(Route::Recordings {}));
        assert_eq!(active.navigations, 1);
    }

    #[test]
    fn detail_pages_highlight_recordings() {
        let mut active = ActiveRoute::default();
        active.enter(Route::RecordingDetail {
            id: String::from("3"),
        });

        assert!(active.is_active(&Route::Recordings {}));
        assert!(!active.is_active(&Route::Home {}));
        assert!(!active.is_active(&Route::Settings {}));
    }

    #[test]
    fn titles() {
        assert_eq!(Route::Home {}.title(), "Kirki");
        assert_eq!(
            Route::RecordingDetail {
                id: String::from("5")
            }
            .title(),
            "Recording 5 | Kirki"
        );
    }
}
