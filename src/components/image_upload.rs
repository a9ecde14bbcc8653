//! Image Upload Button
//!
//! File picker that reads a local image into an embedded card image.

use dioxus::prelude::*;
use rfd::FileDialog;

use cardsmith_core::ImageSource;

/// Button opening a native file picker for the card's main picture.
///
/// The picker runs on a blocking task so the UI stays responsive; the
/// selected file's bytes are embedded and handed to `on_upload` when the
/// read completes. The owner applies them to whatever the card is by then.
#[component]
pub fn ImageUploadButton(
    /// Callback with the embedded image on success
    on_upload: EventHandler<ImageSource>,
    /// Optional button label
    #[props(default = "Upload".to_string())]
    label: String,
) -> Element {
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_upload = move |_| {
        uploading.set(true);
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Card Image")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match tokio::fs::read(&path).await {
                    Ok(bytes) => match image::guess_format(&bytes) {
                        Ok(format) => {
                            let source =
                                ImageSource::from_bytes(bytes, format.to_mime_type());
                            uploading.set(false);
                            on_upload.call(source);
                        }
                        Err(e) => {
                            error.set(Some(format!("Not a recognized image: {}", e)));
                            uploading.set(false);
                        }
                    },
                    Err(e) => {
                        error.set(Some(format!("Failed to read file: {}", e)));
                        uploading.set(false);
                    }
                },
                Ok(None) => {
                    // User cancelled
                    uploading.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {}", e)));
                    uploading.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "image-upload",
            button {
                class: "btn btn-secondary",
                onclick: handle_upload,
                disabled: uploading(),
                if uploading() {
                    "Reading..."
                } else {
                    "{label}"
                }
            }

            if let Some(err) = error() {
                div { class: "image-upload__error",
                    "\u{26a0} {err}"
                }
            }
        }
    }
}
