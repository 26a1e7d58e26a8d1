use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::{
        colors::{StatusTone, label_color, text_on},
        format_duration, format_file_size, local_time,
    },
};
use api::{
    recording::{AppliedLabel, ProcessingStatus, Recording},
    search::SearchResult,
};

#[derive(Clone, PartialEq, Props)]
pub struct StatusBadgeProps {
    status: ProcessingStatus,
}

#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let class = StatusTone::for_status(&props.status).css_class();
    let label = props.status.label().to_owned();

    rsx! {
        span { class: "{class}", "{label}" }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LabelChipsProps {
    labels: Vec<AppliedLabel>,
}

#[component]
pub fn LabelChips(props: LabelChipsProps) -> Element {
    let chips = props.labels.iter().map(|label| {
        let background = label_color(&label.label_color);
        let style = format!("background-color: {background}; color: {};", text_on(background));
        let title = label
            .confidence
            .map(|conf| format!("{:.0}% confidence", conf * 100.0))
            .unwrap_or_default();

        (label.label_name.clone(), style, title)
    });

    rsx! {
        div {
            for (name, style, title) in chips {
                span { class: "label-chip", style: "{style}", title: "{title}", "{name}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RecordingCardProps {
    recording: Recording,
}

#[component]
pub fn RecordingCard(props: RecordingCardProps) -> Element {
    let recording = props.recording;

    let details = [
        recording.duration.map(format_duration),
        recording.file_size.map(format_file_size),
        Some(local_time(&recording.created_at)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" \u{b7} ");

    rsx! {
        Link {
            class: "card",
            to: Route::RecordingDetail {
                id: recording.id.to_string(),
            },
            div { class: "row",
                span { class: "recording-card-title", "{recording.original_filename}" }
                StatusBadge { status: recording.processing_status.clone() }
            }
            p { class: "muted", "{details}" }
            if let Some(summary) = recording.summary.as_ref() {
                p { class: "recording-card-summary", "{summary}" }
            }
            if let Some(labels) = recording.labels.clone().filter(|l| !l.is_empty()) {
                LabelChips { labels }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SearchResultCardProps {
    result: SearchResult,
}

#[component]
pub fn SearchResultCard(props: SearchResultCardProps) -> Element {
    let result = props.result;
    let created = local_time(&result.created_at);

    rsx! {
        Link {
            class: "card",
            to: Route::RecordingDetail {
                id: result.recording_id.to_string(),
            },
            div { class: "row",
                span { class: "recording-card-title", "{result.recording_title}" }
                span { class: "muted", "{created}" }
            }
            p { class: "search-excerpt", "{result.chunk_text}" }
        }
    }
}
