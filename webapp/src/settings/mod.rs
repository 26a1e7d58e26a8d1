use dioxus::prelude::*;

use serde::{Deserialize, Serialize};

use crate::common::storage::Stored;
use api::{
    recording::MAX_PAGE_LIMIT,
    search::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT},
};

mod rules;
use rules::LabelingRules;

pub const MIN_POLL_INTERVAL_MS: u32 = 1_000;
pub const MAX_POLL_INTERVAL_MS: u32 = 60_000;

pub static PREFERENCES: GlobalSignal<Preferences> = Signal::global(Preferences::fetch);

// client-side settings, kept in local storage between visits
//
// serde(default) lets an older stored copy with fewer fields still load
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub page_size: u32,
    pub search_limit: u32,
    pub poll_interval_ms: u32,
    pub show_speakers: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            page_size: 25,
            search_limit: DEFAULT_SEARCH_LIMIT,
            poll_interval_ms: 5_000,
            show_speakers: true,
        }
    }
}

impl Stored for Preferences {
    const KEY: &'static str = "preferences";
}

impl Preferences {
    // pull every field back into the range the backend (or common sense) accepts
    pub fn clamped(self) -> Self {
        Preferences {
            page_size: self.page_size.clamp(1, MAX_PAGE_LIMIT),
            search_limit: self.search_limit.clamp(1, MAX_SEARCH_LIMIT),
            poll_interval_ms: self
                .poll_interval_ms
                .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS),
            show_speakers: self.show_speakers,
        }
    }

    // fields that fail to parse keep their current value
    pub fn apply_form(&self, values: &[(&str, String)]) -> Self {
        let mut next = Preferences {
            show_speakers: false,
            ..self.clone()
        };

        for (name, value) in values {
            let number = value.trim().parse::<u32>().ok();
            match (*name, number) {
                ("page_size", Some(n)) => next.page_size = n,
                ("search_limit", Some(n)) => next.search_limit = n,
                ("poll_interval_ms", Some(n)) => next.poll_interval_ms = n,
                ("show_speakers", _) => next.show_speakers = value == "true" || value == "on",
                _ => {}
            }
        }

        next.clamped()
    }
}

#[component]
pub fn Settings() -> Element {
    let mut status = use_signal(String::new);
    let prefs = PREFERENCES.read().clone();

    rsx! {
        h1 { class: "section-title", "Settings" }

        h2 { class: "subsection-title", "Preferences" }
        form {
            class: "card stack",
            onsubmit: move |event| {
                let values: Vec<(&str, String)> = ["page_size", "search_limit", "poll_interval_ms", "show_speakers"]
                    .into_iter()
                    .filter_map(|name| event.values().get(name).map(|val| (name, val.as_value())))
                    .collect();

                let next = PREFERENCES.read().apply_form(&values);
                next.store();
                tracing::info!({ prefs = ?next }, "saved preferences");

                *PREFERENCES.write() = next;
                status.set(String::from("Saved"));
            },

            div { class: "form-group",
                label { class: "form-label", r#for: "page_size", "Recordings per page" }
                input {
                    class: "form-input",
                    id: "page_size",
                    name: "page_size",
                    r#type: "number",
                    min: "1",
                    max: "{MAX_PAGE_LIMIT}",
                    value: "{prefs.page_size}",
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "search_limit", "Search results" }
                input {
                    class: "form-input",
                    id: "search_limit",
                    name: "search_limit",
                    r#type: "number",
                    min: "1",
                    max: "{MAX_SEARCH_LIMIT}",
                    value: "{prefs.search_limit}",
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "poll_interval_ms", "Refresh interval (ms)" }
                input {
                    class: "form-input",
                    id: "poll_interval_ms",
                    name: "poll_interval_ms",
                    r#type: "number",
                    min: "{MIN_POLL_INTERVAL_MS}",
                    max: "{MAX_POLL_INTERVAL_MS}",
                    step: "500",
                    value: "{prefs.poll_interval_ms}",
                }
                p { class: "form-hint",
                    "How often a recording that is still processing gets re-fetched"
                }
            }

            div { class: "form-group",
                label { class: "form-label",
                    input {
                        name: "show_speakers",
                        r#type: "checkbox",
                        value: "true",
                        checked: prefs.show_speakers,
                    }
                    " Show speaker labels in transcripts"
                }
            }

            div { class: "row",
                span { class: "muted", "{status}" }
                div { class: "row",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            Preferences::forget();
                            *PREFERENCES.write() = Preferences::default();
                            status.set(String::from("Restored defaults"));
                        },
                        "Reset"
                    }
                    input { class: "btn btn-primary", r#type: "submit", value: "Save" }
                }
            }
        }

        LabelingRules {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_respects_backend_bounds() {
        let prefs = Preferences {
            page_size: 0,
            search_limit: 500,
            poll_interval_ms: 10,
            show_speakers: false,
        }
        .clamped();

        assert_eq!(prefs.page_size, 1);
        assert_eq!(prefs.search_limit, MAX_SEARCH_LIMIT);
        assert_eq!(prefs.poll_interval_ms, MIN_POLL_INTERVAL_MS);
        assert!(!prefs.show_speakers);

        assert_eq!(Preferences::default().clamped(), Preferences::default());
    }

    #[test]
    fn older_stored_copies_still_load() {
        let prefs: Preferences = serde_json::from_str(r#"{"page_size": 50}"#).unwrap();
        assert_eq!(prefs.page_size, 50);
        assert_eq!(prefs.search_limit, DEFAULT_SEARCH_LIMIT);
        assert!(prefs.show_speakers);
    }

    #[test]
    fn form_values_are_parsed_and_clamped() {
        let current = Preferences::default();
        let next = current.apply_form(&[
            ("page_size", String::from(" 40 ")),
            ("search_limit", String::from("not a number")),
            ("poll_interval_ms", String::from("999999")),
        ]);

        assert_eq!(next.page_size, 40);
        assert_eq!(next.search_limit, current.search_limit);
        assert_eq!(next.poll_interval_ms, MAX_POLL_INTERVAL_MS);
        // unchecked boxes are simply missing from the submitted form
        assert!(!next.show_speakers);

        let checked = current.apply_form(&[("show_speakers", String::from("true"))]);
        assert!(checked.show_speakers);
    }
}
