use gloo_net::http::Request;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{endpoint, send_json};

// structs and types

pub type RecordingId = i64;

pub const DEFAULT_PAGE_LIMIT: u32 = 100;
pub const MAX_PAGE_LIMIT: u32 = 1000;

// the backend stores the status as a free-form string, so anything we do not
// recognize is kept around rather than rejected
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Analyzing,
    GeneratingVisuals,
    Completed,
    Failed,
    Other(String),
}

impl From<String> for ProcessingStatus {
    fn from(string: String) -> ProcessingStatus {
        match string.as_str() {
            "pending" => ProcessingStatus::Pending,
            "processing" => ProcessingStatus::Processing,
            "analyzing" => ProcessingStatus::Analyzing,
            "generating_visuals" => ProcessingStatus::GeneratingVisuals,
            "completed" => ProcessingStatus::Completed,
            "failed" => ProcessingStatus::Failed,
            _ => ProcessingStatus::Other(string),
        }
    }
}

impl From<ProcessingStatus> for String {
    fn from(status: ProcessingStatus) -> String {
        match status {
            ProcessingStatus::Pending => String::from("pending"),
            ProcessingStatus::Processing => String::from("processing"),
            ProcessingStatus::Analyzing => String::from("analyzing"),
            ProcessingStatus::GeneratingVisuals => String::from("generating_visuals"),
            ProcessingStatus::Completed => String::from("completed"),
            ProcessingStatus::Failed => String::from("failed"),
            ProcessingStatus::Other(other) => other,
        }
    }
}

impl ProcessingStatus {
    // once a recording reaches one of these the worker will not touch it again
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessingStatus::Completed | ProcessingStatus::Failed)
    }

    pub fn label(&self) -> &str {
        match self {
            ProcessingStatus::Pending => "Pending",
            ProcessingStatus::Processing => "Transcribing",
            ProcessingStatus::Analyzing => "Analyzing",
            ProcessingStatus::GeneratingVisuals => "Generating visuals",
            ProcessingStatus::Completed => "Completed",
            ProcessingStatus::Failed => "Failed",
            ProcessingStatus::Other(other) => other.as_str(),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// action items and decisions are whatever json the analysis model produced,
// so every field is optional and a malformed item never sinks the recording
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliedLabel {
    pub label_name: String,
    pub label_color: String,
    // how sure the labelling model was, when it reported it at all
    #[serde(default)]
    pub confidence: Option<f64>,
}

// the core recording struct
//
// everything past storage_path is filled in asynchronously by the processing
// worker, so most of it is None until processing_status is terminal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub id: RecordingId,
    pub original_filename: String,
    pub media_url: String,
    pub storage_path: String,
    pub file_size: Option<i64>,
    pub content_type: Option<String>,
    pub transcript: Option<String>,
    pub transcript_with_speakers: Option<String>,

    pub summary: Option<String>,
    pub action_items: Option<Vec<ActionItem>>,
    pub decisions: Option<Vec<Decision>>,
    pub visual_summary_url: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<AppliedLabel>>,

    pub processing_status: ProcessingStatus,
    pub processing_error: Option<String>,
    // seconds
    pub duration: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Recording {
    // prefer the diarized transcript when it exists
    pub fn best_transcript(&self, with_speakers: bool) -> Option<&str> {
        let plain = self.transcript.as_deref().filter(|t| !t.is_empty());
        let speakers = self
            .transcript_with_speakers
            .as_deref()
            .filter(|t| !t.is_empty());

        if with_speakers {
            speakers.or(plain)
        } else {
            plain.or(speakers)
        }
    }
}

// messages

// list recordings, newest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingPage {
    pub skip: u32,
    pub limit: u32,
}

impl RecordingPage {
    pub fn new(skip: u32, limit: u32) -> Self {
        RecordingPage {
            skip,
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    // page numbers start at zero
    pub fn nth(page: u32, limit: u32) -> Self {
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        RecordingPage::new(page.saturating_mul(limit), limit)
    }
}

impl Default for RecordingPage {
    fn default() -> Self {
        RecordingPage::new(0, DEFAULT_PAGE_LIMIT)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordingList {
    pub recordings: Vec<Recording>,
    pub total: i64,
}

impl RecordingList {
    pub fn page_count(&self, limit: u32) -> u32 {
        let limit = i64::from(limit.max(1));
        let total = self.total.max(0);
        u32::try_from((total + limit - 1) / limit).unwrap_or(u32::MAX)
    }
}

pub async fn get_recordings(page: &RecordingPage) -> anyhow::Result<RecordingList> {
    let skip = page.skip.to_string();
    let limit = page.limit.to_string();

    send_json(
        Request::get(&endpoint("/recordings"))
            .query([("skip", skip.as_str()), ("limit", limit.as_str())]),
    )
    .await
}

// fetch a single recording
pub async fn get_recording(id: RecordingId) -> anyhow::Result<Recording> {
    send_json(Request::get(&endpoint(&format!("/recordings/{id}")))).await
}

// delete a recording, along with its stored media and visual summary
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteRecordingResp {
    pub message: String,
}

pub async fn delete_recording(id: RecordingId) -> anyhow::Result<DeleteRecordingResp> {
    send_json(Request::delete(&endpoint(&format!("/recordings/{id}")))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDING: &str = r##"{
        "id": 42,
        "original_filename": "standup.m4a",
        "media_url": "https://cdn.example/standup.m4a",
        "storage_path": "recordings/standup.m4a",
        "file_size": 1048576,
        "content_type": "audio/mp4",
        "transcript": "hello everyone",
        "transcript_with_speakers": "Speaker 1: hello everyone",
        "summary": "Quick sync.",
        "action_items": [{"description": "ship it", "assignee": "ana"}],
        "decisions": [{"description": "use rust", "owner": "team", "impact": "high"}],
        "visual_summary_url": null,
        "labels": [{"label_name": "Standup", "label_color": "#25c5bb", "confidence": 0.93}],
        "processing_status": "completed",
        "processing_error": null,
        "duration": 754.2,
        "created_at": "2024-05-01T09:30:00",
        "updated_at": "2024-05-01T09:41:10"
    }"##;

    #[test]
    fn recording_fixture_deserializes() {
        let recording: Recording = serde_json::from_str(RECORDING).unwrap();

        assert_eq!(recording.id, 42);
        assert_eq!(recording.processing_status, ProcessingStatus::Completed);
        assert_eq!(
            recording.action_items.as_ref().unwrap()[0].assignee.as_deref(),
            Some("ana")
        );
        assert_eq!(recording.decisions.as_ref().unwrap()[0].context, None);
        assert_eq!(recording.labels.as_ref().unwrap()[0].confidence, Some(0.93));
        assert_eq!(recording.visual_summary_url, None);
    }

    #[test]
    fn labels_may_be_absent() {
        let mut value: serde_json::Value = serde_json::from_str(RECORDING).unwrap();
        value.as_object_mut().unwrap().remove("labels");

        let recording: Recording = serde_json::from_value(value).unwrap();
        assert_eq!(recording.labels, None);
    }

    #[test]
    fn items_without_a_description_still_load() {
        let mut value: serde_json::Value = serde_json::from_str(RECORDING).unwrap();
        value["action_items"] = serde_json::json!([{"task": "ship it", "assignee": "ana"}]);
        value["decisions"] = serde_json::json!([{"description": null, "owner": "team"}]);

        let recording: Recording = serde_json::from_value(value).unwrap();

        let item = &recording.action_items.as_ref().unwrap()[0];
        assert_eq!(item.description, "");
        assert_eq!(item.assignee.as_deref(), Some("ana"));
        assert_eq!(recording.decisions.as_ref().unwrap()[0].description, "");
        assert_eq!(recording.summary.as_deref(), Some("Quick sync."));
    }

    #[test]
    fn processing_status_strings() {
        assert_eq!(
            ProcessingStatus::from(String::from("generating_visuals")),
            ProcessingStatus::GeneratingVisuals
        );
        assert_eq!(
            ProcessingStatus::from(String::from("queued")),
            ProcessingStatus::Other(String::from("queued"))
        );
        assert_eq!(String::from(ProcessingStatus::Analyzing), "analyzing");
        assert_eq!(
            serde_json::to_string(&ProcessingStatus::Failed).unwrap(),
            r#""failed""#
        );
    }

    #[test]
    fn only_completed_and_failed_are_terminal() {
        assert!(ProcessingStatus::Completed.is_terminal());
        assert!(ProcessingStatus::Failed.is_terminal());
        assert!(!ProcessingStatus::Pending.is_terminal());
        assert!(!ProcessingStatus::GeneratingVisuals.is_terminal());
        assert!(!ProcessingStatus::Other(String::from("queued")).is_terminal());
    }

    #[test]
    fn best_transcript_falls_back() {
        let mut recording: Recording = serde_json::from_str(RECORDING).unwrap();
        assert_eq!(
            recording.best_transcript(true),
            Some("Speaker 1: hello everyone")
        );
        assert_eq!(recording.best_transcript(false), Some("hello everyone"));

        recording.transcript_with_speakers = Some(String::new());
        assert_eq!(recording.best_transcript(true), Some("hello everyone"));

        recording.transcript = None;
        assert_eq!(recording.best_transcript(true), None);
    }

    #[test]
    fn page_limit_is_clamped() {
        assert_eq!(RecordingPage::new(0, 0).limit, 1);
        assert_eq!(RecordingPage::new(0, 5000).limit, MAX_PAGE_LIMIT);
        assert_eq!(RecordingPage::default(), RecordingPage::new(0, 100));
        assert_eq!(RecordingPage::nth(3, 25), RecordingPage { skip: 75, limit: 25 });
    }

    #[test]
    fn page_count_rounds_up() {
        let list = RecordingList {
            recordings: Vec::new(),
            total: 101,
        };
        assert_eq!(list.page_count(50), 3);
        assert_eq!(list.page_count(0), 101);

        let empty = RecordingList {
            recordings: Vec::new(),
            total: 0,
        };
        assert_eq!(empty.page_count(50), 0);
    }
}
