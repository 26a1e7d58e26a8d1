use dioxus::prelude::*;

use api::upload::{MAX_UPLOAD_BYTES, UploadFile, upload_recording, upload_recordings};

// one file goes through the single upload so the new recording comes back
// directly; anything more is sent as a batch
async fn send_files(files: Vec<UploadFile>) -> anyhow::Result<String> {
    match files.as_slice() {
        [] => Err(anyhow::Error::msg("nothing to upload")),
        [file] => {
            let recording = upload_recording(file).await?;
            tracing::info!({ id = recording.id }, "uploaded {}", recording.original_filename);
            Ok(format!("Uploaded {}", recording.original_filename))
        }
        batch => {
            let resp = upload_recordings(batch).await?;
            tracing::info!({ ok = resp.successful_uploads, failed = resp.failed_uploads }, "{}", resp.message);
            Ok(resp.summary())
        }
    }
}

// files that never left the browser are listed after whatever the backend said
fn upload_report(sent: Option<anyhow::Result<String>>, skipped: &[String]) -> String {
    let mut report = match sent {
        Some(Ok(summary)) => summary,
        Some(Err(err)) => format!("Upload failed: {err}"),
        None => String::from("Nothing uploaded"),
    };

    if !skipped.is_empty() {
        report.push_str(&format!("; skipped {}", skipped.join(", ")));
    }

    report
}

#[derive(Clone, PartialEq, Props)]
pub struct UploadPanelProps {
    refresh_signal: Signal<u64>,
}

#[component]
pub fn UploadPanel(props: UploadPanelProps) -> Element {
    let mut refresh_signal = props.refresh_signal;
    let mut status = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let limit_mb = MAX_UPLOAD_BYTES / (1024 * 1024);

    rsx! {
        div { class: "card upload-panel",
            label { class: "form-label", r#for: "upload_files", "Upload recordings" }
            input {
                class: "form-input",
                id: "upload_files",
                r#type: "file",
                multiple: true,
                accept: "audio/*,video/*",
                disabled: busy(),
                onchange: move |event| async move {
                    let Some(engine) = event.files() else {
                        return;
                    };

                    busy.set(true);
                    status.set(String::from("Uploading..."));

                    let mut files = Vec::new();
                    let mut skipped = Vec::new();
                    for name in engine.files() {
                        if engine.file_size(&name).await.is_some_and(|size| size > MAX_UPLOAD_BYTES) {
                            skipped.push(format!("{name} (too large)"));
                            continue;
                        }

                        let file = match engine.read_file(&name).await {
                            Some(bytes) => UploadFile::new(&name, bytes),
                            None => Err(anyhow::Error::msg("could not be read")),
                        };

                        match file {
                            Ok(file) => files.push(file),
                            Err(err) => {
                                tracing::warn!("skipping {name}: {err}");
                                skipped.push(format!("{name} ({err})"));
                            }
                        }
                    }

                    let sent = if files.is_empty() { None } else { Some(send_files(files).await) };
                    let uploaded = matches!(sent, Some(Ok(_)));

                    status.set(upload_report(sent, &skipped));
                    busy.set(false);

                    if uploaded {
                        *refresh_signal.write() += 1;
                    }
                },
            }
            p { class: "form-hint",
                "Audio or video up to {limit_mb} MB. Transcription starts once the upload finishes."
            }
            span { class: "muted", "{status}" }
        }
    }
}
