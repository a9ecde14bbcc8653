//! Toolbar - export/import controller.
//!
//! Three operations, each independently triggerable and none blocking the
//! others: export the rendered card as PNG, export the card document as
//! JSON, and import a card document. (Image import lives next to the image
//! field in the editor.) Failures surface as a blocking notice and never
//! leave a partial file or a half-updated card.

use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::FileDialog;

use cardsmith_core::{document, render, Card};

use super::Notice;

/// Props for the Toolbar component
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Snapshot of the card at render time; export uses the card as it was
    /// when the button was clicked
    pub card: Card,
    /// Handler replacing the whole card after a successful import
    pub on_replace: EventHandler<Card>,
    /// Handler surfacing a blocking notice
    pub on_notice: EventHandler<Notice>,
}

#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    let mut exporting = use_signal(|| false);
    let on_notice = props.on_notice;
    let on_replace = props.on_replace;

    let export_image = {
        let card = props.card.clone();
        move |_| {
            let card = card.clone();
            exporting.set(true);
            spawn(async move {
                match export_png(card).await {
                    Ok(Some(path)) => {
                        tracing::info!("Exported card image to {:?}", path);
                    }
                    Ok(None) => {} // dialog cancelled
                    Err(e) => {
                        tracing::error!("Image export failed: {}", e);
                        on_notice.call(Notice::error(format!("Export failed: {}", e)));
                    }
                }
                exporting.set(false);
            });
        }
    };

    let export_data = {
        let card = props.card.clone();
        move |_| {
            let card = card.clone();
            spawn(async move {
                match export_document(card).await {
                    Ok(Some(path)) => {
                        tracing::info!("Exported card document to {:?}", path);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!("Document export failed: {}", e);
                        on_notice.call(Notice::error(format!("Export failed: {}", e)));
                    }
                }
            });
        }
    };

    let import_data = move |_| {
        spawn(async move {
            match import_document().await {
                Ok(Some(card)) => {
                    tracing::info!("Imported card '{}'", card.name);
                    on_replace.call(card);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("Document import failed: {}", e);
                    on_notice.call(Notice::error(format!("Import failed: {}", e)));
                }
            }
        });
    };

    rsx! {
        div { class: "toolbar",
            span { class: "toolbar-brand", "Cardsmith" }
            div { class: "toolbar-actions",
                button {
                    class: "btn btn-primary",
                    disabled: exporting(),
                    onclick: export_image,
                    if exporting() { "Rendering..." } else { "Export PNG" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: export_data,
                    "Export JSON"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: import_data,
                    "Import JSON"
                }
            }
        }
    }
}

/// Rasterize first, ask where to save second: a failed render never leaves a
/// file behind.
async fn export_png(card: Card) -> Result<Option<PathBuf>, String> {
    let name = card.name.clone();
    let png = tokio::task::spawn_blocking(move || render::render_card(&card))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())?;

    let Some(path) = save_dialog(document::png_file_name(&name), "png").await? else {
        return Ok(None);
    };
    tokio::fs::write(&path, png).await.map_err(|e| e.to_string())?;
    Ok(Some(path))
}

async fn export_document(card: Card) -> Result<Option<PathBuf>, String> {
    let text = document::export_json(&card).map_err(|e| e.to_string())?;

    let Some(path) = save_dialog(document::json_file_name(&card.name), "json").await? else {
        return Ok(None);
    };
    tokio::fs::write(&path, text).await.map_err(|e| e.to_string())?;
    Ok(Some(path))
}

async fn import_document() -> Result<Option<Card>, String> {
    let picked = tokio::task::spawn_blocking(|| {
        FileDialog::new()
            .add_filter("card document", &["json"])
            .set_title("Import Card")
            .pick_file()
    })
    .await
    .map_err(|e| e.to_string())?;

    let Some(path) = picked else {
        return Ok(None);
    };
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| e.to_string())?;
    document::import_json(&text)
        .map(Some)
        .map_err(|e| e.to_string())
}

async fn save_dialog(file_name: String, ext: &'static str) -> Result<Option<PathBuf>, String> {
    tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter(ext, &[ext])
            .set_file_name(file_name)
            .set_title("Save Card")
            .save_file()
    })
    .await
    .map_err(|e| e.to_string())
}
