use gloo_net::http::Request;
use mime_guess::MimeGuess;
use serde::{Deserialize, Serialize};
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::{endpoint, read_json, recording::Recording};

// structs and types

// the backend refuses anything larger with a 413
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

// a file picked in the browser, read into memory and ready to send
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    // the browser only hands over the name and the contents, so the content
    // type is guessed from the extension the same way the backend would
    pub fn new(filename: &str, bytes: Vec<u8>) -> anyhow::Result<Self> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(anyhow::Error::msg("file has no name"));
        }

        if bytes.is_empty() {
            return Err(anyhow::Error::msg(format!("{filename} is empty")));
        }

        let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        if size > MAX_UPLOAD_BYTES {
            return Err(anyhow::Error::msg(format!(
                "{filename} is larger than the {} MB upload limit",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        Ok(UploadFile {
            filename: filename.to_owned(),
            content_type: content_type_for(filename),
            bytes,
        })
    }

    fn blob(&self) -> anyhow::Result<Blob> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(self.bytes.as_slice()));

        let options = BlobPropertyBag::new();
        options.set_type(&self.content_type);

        Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|err| anyhow::Error::msg(format!("failed to wrap {}: {err:?}", self.filename)))
    }
}

pub fn content_type_for(filename: &str) -> String {
    MimeGuess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

// every file goes into the same multipart field, as the backend expects
fn form_data(field: &str, files: &[UploadFile]) -> anyhow::Result<FormData> {
    let form = FormData::new()
        .map_err(|err| anyhow::Error::msg(format!("failed to create form: {err:?}")))?;

    for file in files {
        form.append_with_blob_and_filename(field, &file.blob()?, &file.filename)
            .map_err(|err| anyhow::Error::msg(format!("failed to attach {}: {err:?}", file.filename)))?;
    }

    Ok(form)
}

// messages

// upload one file; the backend creates the recording and queues it for
// transcription straight away
pub async fn upload_recording(file: &UploadFile) -> anyhow::Result<Recording> {
    tracing::debug!(
        { filename = %file.filename, content_type = %file.content_type, bytes = file.bytes.len() },
        "uploading"
    );

    let form = form_data("file", std::slice::from_ref(file))?;

    read_json(
        Request::post(&endpoint("/upload"))
            .body(form)?
            .send()
            .await?,
    )
    .await
}

// upload several files in one request
//
// a file the backend rejects does not fail the request, it is reported in
// failed_files instead
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileDetails {
    pub original_filename: String,
    pub storage_path: String,
    pub public_url: String,
    pub file_size: i64,
    pub content_type: Option<String>,
    pub upload_timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailedUpload {
    #[serde(default)]
    pub filename: Option<String>,
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultipleUploadResp {
    pub message: String,
    pub successful_uploads: usize,
    pub failed_uploads: usize,
    pub file_details: Vec<FileDetails>,
    pub failed_files: Vec<FailedUpload>,
}

impl MultipleUploadResp {
    pub fn summary(&self) -> String {
        let mut summary = format!("{} uploaded", self.successful_uploads);

        if self.failed_uploads > 0 {
            let failures = self
                .failed_files
                .iter()
                .map(|failed| {
                    format!(
                        "{} ({})",
                        failed.filename.as_deref().unwrap_or("unnamed file"),
                        failed.error
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");

            summary.push_str(&format!(", {} failed: {failures}", self.failed_uploads));
        }

        summary
    }
}

pub async fn upload_recordings(files: &[UploadFile]) -> anyhow::Result<MultipleUploadResp> {
    if files.is_empty() {
        return Err(anyhow::Error::msg("no files to upload"));
    }

    tracing::debug!({ count = files.len() }, "uploading batch");

    let form = form_data("files", files)?;

    read_json(
        Request::post(&endpoint("/upload-multiple"))
            .body(form)?
            .send()
            .await?,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_files_are_checked_up_front() {
        let file = UploadFile::new(" standup.mp3 ", vec![1, 2, 3]).unwrap();
        assert_eq!(file.filename, "standup.mp3");
        assert_eq!(file.content_type, "audio/mpeg");

        assert!(UploadFile::new("", vec![1]).is_err());
        assert!(UploadFile::new("silence.wav", Vec::new()).is_err());
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(content_type_for("notes.kirkiblob"), "application/octet-stream");
        assert_eq!(content_type_for("no_extension"), "application/octet-stream");
        assert_eq!(content_type_for("demo.mp4"), "video/mp4");
    }

    #[test]
    fn batch_summary_names_the_failures() {
        let resp: MultipleUploadResp = serde_json::from_str(
            r#"{
                "message": "Uploaded 1 files successfully",
                "successful_uploads": 1,
                "failed_uploads": 1,
                "file_details": [{
                    "original_filename": "a.mp3",
                    "storage_path": "uploads/a.mp3",
                    "public_url": "https://cdn.example/a.mp3",
                    "file_size": 2048,
                    "content_type": "audio/mpeg",
                    "upload_timestamp": "2024-05-01T09:30:00"
                }],
                "failed_files": [{"filename": "b.exe", "error": "File type not allowed"}]
            }"#,
        )
        .unwrap();

        assert_eq!(resp.file_details[0].file_size, 2048);
        assert_eq!(resp.summary(), "1 uploaded, 1 failed: b.exe (File type not allowed)");

        let clean = MultipleUploadResp {
            failed_uploads: 0,
            failed_files: Vec::new(),
            ..resp
        };
        assert_eq!(clean.summary(), "1 uploaded");
    }
}
