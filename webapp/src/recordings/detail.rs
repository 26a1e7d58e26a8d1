use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_timers::future::TimeoutFuture;

use crate::{
    Route,
    common::{format_duration, format_file_size, local_time},
    recordings::card::{LabelChips, StatusBadge},
    settings::PREFERENCES,
};
use api::{labeling::apply_labels, recording::*};

// RecordingDetail elements
//
// the id comes straight from the router, so it is only a String until we
// have checked that it parses
#[derive(Clone, PartialEq, Props)]
struct DetailErrorProps {
    message: String,
}

#[component]
fn DetailError(props: DetailErrorProps) -> Element {
    rsx! {
        div { class: "stack",
            div { class: "error-state", "{props.message}" }
            Link { to: Route::Recordings {}, "Back to all recordings" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AnalysisProps {
    recording: Recording,
}

#[component]
fn Analysis(props: AnalysisProps) -> Element {
    let recording = props.recording;
    let show_speakers = PREFERENCES.read().show_speakers;

    let action_items = recording.action_items.clone().unwrap_or_default();
    let decisions = recording.decisions.clone().unwrap_or_default();
    let untitled = |description: &str| match description.trim() {
        "" => String::from("(no description)"),
        text => text.to_owned(),
    };
    let transcript = recording.best_transcript(show_speakers).map(str::to_owned);

    rsx! {
        div { class: "stack",
            if let Some(summary) = recording.summary.as_ref() {
                section { class: "card detail-section",
                    h2 { "Summary" }
                    p { "{summary}" }
                }
            }

            if !action_items.is_empty() {
                section { class: "card detail-section",
                    h2 { "Action items" }
                    ul {
                        for item in action_items.iter() {
                            li {
                                {untitled(&item.description)}
                                if let Some(assignee) = item.assignee.as_ref() {
                                    span { class: "muted", " ({assignee})" }
                                }
                                if let Some(due) = item.due_date.as_ref() {
                                    span { class: "muted", " due {due}" }
                                }
                            }
                        }
                    }
                }
            }

            if !decisions.is_empty() {
                section { class: "card detail-section",
                    h2 { "Decisions" }
                    ul {
                        for decision in decisions.iter() {
                            li {
                                {untitled(&decision.description)}
                                if let Some(owner) = decision.owner.as_ref() {
                                    span { class: "muted", " ({owner})" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "card detail-section",
                h2 { "Transcript" }
                match transcript {
                    Some(text) => rsx! {
                        pre { class: "transcript", "{text}" }
                    },
                    None => rsx! {
                        p { class: "muted", "No transcript yet." }
                    },
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MetadataProps {
    recording: Recording,
    status_signal: Signal<String>,
    refresh_signal: Signal<u64>,
}

#[component]
fn Metadata(props: MetadataProps) -> Element {
    let recording = props.recording;
    let mut status_signal = props.status_signal;
    let mut refresh_signal = props.refresh_signal;
    let recording_id = recording.id;
    // labeling reads the summary, so there is nothing to label before analysis
    let can_label = recording.summary.is_some();

    let duration = recording
        .duration
        .map(format_duration)
        .unwrap_or_else(|| String::from("unknown"));
    let size = recording
        .file_size
        .map(format_file_size)
        .unwrap_or_else(|| String::from("unknown"));
    let created = local_time(&recording.created_at);
    let updated = local_time(&recording.updated_at);

    rsx! {
        aside { class: "stack",
            if let Some(url) = recording.visual_summary_url.as_ref() {
                img { class: "visual-summary card", src: "{url}", alt: "Visual summary" }
            }

            div { class: "card",
                dl { class: "meta-list",
                    dt { "Status" }
                    dd { StatusBadge { status: recording.processing_status.clone() } }
                    dt { "Duration" }
                    dd { "{duration}" }
                    dt { "Size" }
                    dd { "{size}" }
                    if let Some(content_type) = recording.content_type.as_ref() {
                        dt { "Type" }
                        dd { "{content_type}" }
                    }
                    dt { "Uploaded" }
                    dd { "{created}" }
                    dt { "Updated" }
                    dd { "{updated}" }
                }
                if let Some(labels) = recording.labels.clone().filter(|l| !l.is_empty()) {
                    LabelChips { labels }
                }
            }

            button {
                class: "btn btn-secondary",
                disabled: !can_label,
                title: if can_label { "Run the active labeling rules again" } else { "Available once analysis finishes" },
                onclick: move |_| async move {
                    status_signal.set(String::from("Applying labels..."));

                    match apply_labels(recording_id).await {
                        Ok(labels) => {
                            tracing::info!("applied {} labels to recording {recording_id}", labels.len());
                            status_signal.set(format!("{} labels applied", labels.len()));
                            *refresh_signal.write() += 1;
                        }
                        Err(err) => {
                            tracing::error!("failed to label recording {recording_id}: {err}");
                            status_signal.set(format!("Labeling failed: {err}"));
                        }
                    }
                },
                "Apply labels"
            }

            button {
                class: "btn btn-danger",
                onclick: move |_| async move {
                    let confirmed = web_sys::window()
                        .and_then(|window| {
                            window
                                .confirm_with_message("Delete this recording and its transcript?")
                                .ok()
                        })
                        .unwrap_or(false);

                    if !confirmed {
                        return;
                    }

                    match delete_recording(recording_id).await {
                        Ok(resp) => {
                            tracing::info!("deleted recording {recording_id}: {}", resp.message);
                            navigator().push(Route::Recordings {});
                        }
                        Err(err) => {
                            tracing::error!("failed to delete recording {recording_id}: {err}");
                            status_signal.set(format!("Delete failed: {err}"));
                        }
                    }
                },
                "Delete recording"
            }
        }
    }
}

pub(crate) fn parse_recording_id(id: &str) -> Result<RecordingId, String> {
    id.trim()
        .parse::<RecordingId>()
        .map_err(|_| format!("\"{id}\" is not a valid recording id"))
}

#[component]
pub fn RecordingDetail(id: String) -> Element {
    // status line shared with the buttons in the sidebar
    let status_signal = use_signal(String::new);
    let mut refresh_signal = use_signal(|| 0u64);
    let mut processing = use_signal(|| false);

    // the component is reused when only the id changes, so track it explicitly;
    // a bad id still runs every hook and is only reported when rendering
    let parsed_id = use_memo(use_reactive(&id, |id| parse_recording_id(&id)));

    let recording_future = use_resource(move || async move {
        refresh_signal.read();
        let recording_id = parsed_id()?;

        let resp = get_recording(recording_id).await;
        if let Ok(recording) = &resp {
            processing.set(!recording.processing_status.is_terminal());
        }
        resp.map_err(|err| format!("Failed to load recording {recording_id}: {err}"))
    });

    // keep re-fetching while the worker is still busy with this recording;
    // dropping the component cancels the loop
    use_future(move || async move {
        loop {
            let interval = PREFERENCES.peek().poll_interval_ms;
            TimeoutFuture::new(interval).await;

            if *processing.peek() {
                tracing::debug!("polling recording {:?} for status", parsed_id.peek().clone());
                *refresh_signal.write() += 1;
            }
        }
    });

    let recording = match &*recording_future.read() {
        Some(Ok(recording)) => recording.clone(),
        Some(Err(message)) => {
            return rsx! {
                DetailError { message: message.clone() }
            };
        }
        None => {
            return rsx! {
                div { class: "card",
                    div { class: "skeleton", style: "width: 40%; height: 2em;" }
                }
            };
        }
    };

    let is_video = recording
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("video/"));

    rsx! {
        div { class: "detail-header row",
            div {
                Link { to: Route::Recordings {}, class: "muted", "\u{2190} All recordings" }
                h1 { class: "detail-title", "{recording.original_filename}" }
            }
            span { class: "muted", "{status_signal}" }
        }

        if let Some(error) = recording.processing_error.as_ref() {
            div { class: "error-state", "Processing failed: {error}" }
        }

        section { class: "card detail-section",
            if is_video {
                video { class: "detail-player", controls: true, src: "{recording.media_url}" }
            } else {
                audio { class: "detail-player", controls: true, src: "{recording.media_url}" }
            }
        }

        div { class: "detail-grid",
            Analysis { recording: recording.clone() }
            Metadata { recording, status_signal, refresh_signal }
        }
    }
}
