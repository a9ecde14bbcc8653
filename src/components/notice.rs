//! Blocking notification modal.
//!
//! Import and export failures are reported here; the card underneath is
//! never left partially updated.

use dioxus::prelude::*;

/// A message for the user, shown until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn error(body: impl Into<String>) -> Self {
        Self {
            title: "Something went wrong".to_string(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Modal dialog blocking the app until acknowledged.
#[component]
pub fn NoticeModal(notice: Notice, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                h3 { class: "modal-title", "{notice.title}" }
                p { class: "modal-body", "{notice.body}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notice_has_default_title() {
        let n = Notice::error("disk full");
        assert_eq!(n.title, "Something went wrong");
        assert_eq!(n.body, "disk full");
    }

    #[test]
    fn info_notice_keeps_both_parts() {
        let n = Notice::info("Saved", "card exported");
        assert_eq!(n.title, "Saved");
        assert_eq!(n.body, "card exported");
    }
}
