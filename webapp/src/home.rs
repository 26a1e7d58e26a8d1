use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use api::{
    health::get_health,
    recording::{RecordingPage, get_recordings},
};

#[component]
pub fn Home() -> Element {
    // a single-item page is the cheapest way to get the total count
    let total_future =
        use_resource(move || async move { get_recordings(&RecordingPage::new(0, 1)).await });
    let health_future = use_resource(move || async move { get_health().await });

    let total = match &*total_future.read() {
        Some(Ok(list)) => rsx! { "{list.total}" },
        Some(Err(err)) => {
            tracing::error!("failed to count recordings: {err}");
            rsx! { "?" }
        }
        None => rsx! {
            div { class: "skeleton", style: "width: 80px; height: 32px;" }
        },
    };

    let health = match &*health_future.read() {
        Some(Ok(resp)) if resp.is_healthy() => rsx! {
            span { class: "stat-healthy", "Online" }
        },
        Some(Ok(resp)) => rsx! {
            span { class: "stat-degraded", "Storage {resp.storage}" }
        },
        Some(Err(err)) => {
            tracing::error!("health check failed: {err}");
            rsx! {
                span { class: "stat-degraded", "Unreachable" }
            }
        }
        None => rsx! {
            div { class: "skeleton", style: "width: 120px; height: 32px;" }
        },
    };

    rsx! {
        section { class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "Kirki" }
                p { class: "hero-subtitle",
                    "Transcripts, summaries and action items for every recording"
                }
                div { class: "hero-actions",
                    Link {
                        to: Route::Recordings {},
                        class: "btn btn-primary btn-lg",
                        "Browse Recordings"
                    }
                    Link {
                        to: Route::Settings {},
                        class: "btn btn-secondary btn-lg",
                        "Settings"
                    }
                }
            }
        }

        section { class: "stats-grid animate-slide-up",
            div { class: "card",
                h3 { class: "stat-value", {total} }
                p { class: "stat-label", "Recordings" }
            }
            div { class: "card",
                h3 { class: "stat-value", {health} }
                p { class: "stat-label", "Backend" }
            }
        }
    }
}
