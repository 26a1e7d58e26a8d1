use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::route::{ACTIVE_ROUTE, Route};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let active = ACTIVE_ROUTE.read().is_active(&target);
    rsx! {
        Link {
            class: if active { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "container nav-container",
                Link { to: Route::Home {}, class: "logo", "Kirki" }

                nav { class: "nav-links",
                    NavBarButton {
                        name: "Home".to_owned(),
                        target: Route::Home {},
                    }
                    NavBarButton {
                        name: "Recordings".to_owned(),
                        target: Route::Recordings {},
                    }
                    NavBarButton {
                        name: "Settings".to_owned(),
                        target: Route::Settings {},
                    }
                }
            }
        }
    }
}

// layout wrapping every page
//
// the router owns which view is mounted; this just mirrors each change into
// ACTIVE_ROUTE so the header and the document title can follow along
#[component]
pub fn NavBar() -> Element {
    let route: Route = use_route();

    use_effect(use_reactive((&route,), |(route,)| {
        ACTIVE_ROUTE.with_mut(|active| {
            active.enter(route);
        });
    }));

    // follows ACTIVE_ROUTE so the title only changes once the effect above has run
    let title = ACTIVE_ROUTE
        .read()
        .current()
        .map(Route::title)
        .unwrap_or_else(|| route.title());

    rsx! {
        document::Title { "{title}" }
        NavBarInner {}
        main { class: "page-content container animate-fade-in",
            Outlet::<Route> {}
        }
    }
}
