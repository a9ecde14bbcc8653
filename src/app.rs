use dioxus::prelude::*;

use cardsmith_core::{document, Card, CardField};

use crate::components::{CardEditor, CardPreview, Notice, NoticeModal, Toolbar};
use crate::startup_card_path;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the single card for the session plus the notice signal behind the
/// blocking notification modal. Children receive the card and event handlers
/// as props; every edit funnels back here so the preview re-renders from one
/// source of truth.
#[component]
pub fn App() -> Element {
    let mut card: Signal<Card> = use_signal(Card::default);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);

    // Load a card document passed on the command line
    use_effect(move || {
        if let Some(path) = startup_card_path() {
            spawn(async move {
                let loaded = match tokio::fs::read_to_string(&path).await {
                    Ok(text) => document::import_json(&text),
                    Err(e) => Err(e.into()),
                };
                match loaded {
                    Ok(opened) => {
                        tracing::info!("Loaded card '{}' from {:?}", opened.name, path);
                        card.set(opened);
                    }
                    Err(e) => {
                        tracing::error!("Failed to open {:?}: {}", path, e);
                        notice.set(Some(Notice::error(format!(
                            "Could not open {}: {}",
                            path.display(),
                            e
                        ))));
                    }
                }
            });
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell",
            Toolbar {
                card: card(),
                on_replace: move |next| card.set(next),
                on_notice: move |n| notice.set(Some(n)),
            }
            div { class: "workspace",
                CardEditor {
                    card: card(),
                    on_edit: move |(field, value): (CardField, String)| {
                        // Always apply against the latest card: signals are
                        // read at call time, never captured stale
                        let next = card.peek().with_field(field, &value);
                        card.set(next);
                    },
                    on_image: move |source| {
                        // Merge into whatever the card is now, not the card
                        // as it was when the file read started
                        let next = card.peek().with_image(source);
                        card.set(next);
                    },
                }
                CardPreview { card: card() }
            }
            if let Some(n) = notice() {
                NoticeModal {
                    notice: n,
                    on_close: move |_| notice.set(None),
                }
            }
        }
    }
}
