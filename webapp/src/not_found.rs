use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "empty-state",
            h1 { class: "section-title", "Page not found" }
            p { "Nothing lives at {path}." }
            p {
                Link { to: Route::Home {}, "Back to the start page" }
            }
        }
    }
}
