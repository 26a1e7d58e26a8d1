use dioxus::prelude::*;

use crate::{common::storage::*, settings::PREFERENCES};
use api::{
    recording::{RecordingList, RecordingPage, get_recordings},
    search::{SearchQuery, SearchResp, search_recordings},
};

mod card;
use card::{RecordingCard, SearchResultCard};

mod detail;
pub use detail::RecordingDetail;

mod upload;
use upload::UploadPanel;

const RECORDING_SEARCH_KEY: &str = "recording_search";

// an empty filter lists everything page by page; anything else goes
// through the transcript search instead
#[derive(Clone, Debug, PartialEq)]
enum Listing {
    Page(RecordingList),
    Search(SearchResp),
}

// what a page of the plain listing should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageState {
    NothingUploaded,
    // the page is empty but earlier ones are not, e.g. after deleting the last
    // recording on the final page
    PastTheEnd,
    Rows,
}

fn page_state(list: &RecordingList) -> PageState {
    if !list.recordings.is_empty() {
        PageState::Rows
    } else if list.total <= 0 {
        PageState::NothingUploaded
    } else {
        PageState::PastTheEnd
    }
}

async fn fetch_listing(filter: String, page: u32) -> anyhow::Result<Listing> {
    let prefs = PREFERENCES.peek().clone();

    if filter.trim().is_empty() {
        let list = get_recordings(&RecordingPage::nth(page, prefs.page_size)).await?;
        Ok(Listing::Page(list))
    } else {
        let query = SearchQuery::new(&filter, prefs.search_limit)?;
        Ok(Listing::Search(search_recordings(&query).await?))
    }
}

#[derive(Clone, PartialEq, Props)]
struct RecordingsNavBarProps {
    search_signal: Signal<String>,
    page_signal: Signal<u32>,
    status: String,
}

#[component]
fn RecordingsNavBar(props: RecordingsNavBarProps) -> Element {
    let mut search_signal = props.search_signal;
    let mut page_signal = props.page_signal;
    let status = props.status;

    rsx! {
        div { class: "subnav",
            form {
                onsubmit: move |event| async move {
                    let filter = match event.values().get("search_filter") {
                        Some(val) => val.as_value(),
                        None => String::from(""),
                    };

                    search_signal.set(filter.clone());
                    page_signal.set(0);

                    set_local_storage(RECORDING_SEARCH_KEY, filter);
                },
                input {
                    class: "form-input",
                    name: "search_filter",
                    r#type: "search",
                    placeholder: "Search transcripts, summaries and filenames",
                    value: "{search_signal()}",
                }
                input { class: "btn btn-primary", r#type: "submit", value: "Search" }
            }
            span { class: "muted", "{status}" }
        }
    }
}

// a page past the end still needs the buttons to get back
fn pager_visible(page: u32, page_count: u32) -> bool {
    page_count > 1 || page > 0
}

#[derive(Clone, PartialEq, Props)]
struct PagerProps {
    page_signal: Signal<u32>,
    page_count: u32,
}

#[component]
fn Pager(props: PagerProps) -> Element {
    let mut page_signal = props.page_signal;
    let page_count = props.page_count;
    let page = page_signal();

    if !pager_visible(page, page_count) {
        return rsx! {};
    }

    rsx! {
        div { class: "pager",
            button {
                class: "btn btn-secondary",
                disabled: page == 0,
                onclick: move |_| page_signal.set(page.saturating_sub(1)),
                "Previous"
            }
            span { class: "muted", "Page {page + 1} of {page_count}" }
            button {
                class: "btn btn-secondary",
                disabled: page + 1 >= page_count,
                onclick: move |_| page_signal.set(page + 1),
                "Next"
            }
        }
    }
}

#[component]
pub fn Recordings() -> Element {
    let search_signal = use_signal::<String>(|| try_local_storage(RECORDING_SEARCH_KEY));
    let page_signal = use_signal(|| 0u32);
    // bumped after an upload so the new recordings show up
    let refresh_signal = use_signal(|| 0u64);

    let listing_future = use_resource(move || async move {
        // reading the preferences here re-runs the fetch when they change
        PREFERENCES.read();
        refresh_signal.read();

        fetch_listing(search_signal(), page_signal()).await
    });

    let (status, body) = match &*listing_future.read() {
        Some(Ok(Listing::Page(list))) => {
            let status = format!("{} recordings", list.total);
            let page_count = list.page_count(PREFERENCES.peek().page_size);

            let body = match page_state(list) {
                PageState::NothingUploaded => rsx! {
                    div { class: "empty-state", "No recordings have been uploaded yet." }
                },
                PageState::PastTheEnd => rsx! {
                    div { class: "empty-state", "There are no recordings on this page." }
                    Pager { page_signal, page_count }
                },
                PageState::Rows => rsx! {
                    div { class: "recording-list",
                        for recording in list.recordings.iter() {
                            RecordingCard { key: "{recording.id}", recording: recording.clone() }
                        }
                    }
                    Pager { page_signal, page_count }
                },
            };

            (status, body)
        }
        Some(Ok(Listing::Search(resp))) => {
            let status = format!("{} matches for \"{}\"", resp.total_results, resp.query);

            let body = if resp.results.is_empty() {
                rsx! {
                    div { class: "empty-state", "Nothing matched that search." }
                }
            } else {
                rsx! {
                    div { class: "recording-list",
                        for result in resp.results.iter() {
                            SearchResultCard { key: "{result.chunk_id}", result: result.clone() }
                        }
                    }
                }
            };

            (status, body)
        }
        Some(Err(err)) => (
            String::from("error"),
            rsx! {
                div { class: "error-state", "Failed to load recordings: {err}" }
            },
        ),
        None => (
            String::from("loading..."),
            rsx! {
                div { class: "recording-list",
                    for _ in 0..3 {
                        div { class: "card",
                            div { class: "skeleton", style: "width: 60%;" }
                        }
                    }
                }
            },
        ),
    };

    rsx! {
        h1 { class: "section-title", "Recordings" }
        UploadPanel { refresh_signal }
        RecordingsNavBar { search_signal, page_signal, status }
        {body}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(rows: usize, total: i64) -> RecordingList {
        let recording = serde_json::json!({
            "id": 1,
            "original_filename": "a.mp3",
            "media_url": "https://cdn.example/a.mp3",
            "storage_path": "a.mp3",
            "file_size": null,
            "content_type": null,
            "transcript": null,
            "transcript_with_speakers": null,
            "summary": null,
            "action_items": null,
            "decisions": null,
            "visual_summary_url": null,
            "processing_status": "pending",
            "processing_error": null,
            "duration": null,
            "created_at": "2024-05-01T09:30:00",
            "updated_at": "2024-05-01T09:30:00"
        });

        RecordingList {
            recordings: vec![serde_json::from_value(recording).unwrap(); rows],
            total,
        }
    }

    #[test]
    fn empty_pages_only_claim_no_uploads_when_the_total_is_zero() {
        assert_eq!(page_state(&listing(0, 0)), PageState::NothingUploaded);
        assert_eq!(page_state(&listing(0, 30)), PageState::PastTheEnd);
        assert_eq!(page_state(&listing(5, 30)), PageState::Rows);
    }

    #[test]
    fn pager_stays_reachable_past_the_end() {
        // five recordings fit on one page, but the user is on the second
        let list = listing(0, 5);
        assert_eq!(page_state(&list), PageState::PastTheEnd);
        assert_eq!(list.page_count(25), 1);
        assert!(pager_visible(1, list.page_count(25)));

        assert!(!pager_visible(0, 1));
        assert!(!pager_visible(0, 0));
        assert!(pager_visible(0, 3));
    }
}
