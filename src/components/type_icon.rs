//! Category icon disc.

use dioxus::prelude::*;

use cardsmith_core::catalog;

/// Round energy-type icon, styled from the Type Catalog.
///
/// Unknown labels fall back to the catalog's default entry, so this never
/// fails to render.
#[component]
pub fn TypeIcon(
    /// Category label to display
    label: String,
    /// Larger disc for the card header
    #[props(default = false)]
    large: bool,
) -> Element {
    let style = catalog::style(&label);
    let size_class = if large { "type-icon type-icon--large" } else { "type-icon" };
    let disc_style = format!(
        "background-color: {}; color: {}; border-color: {};",
        style.icon_fill.css(),
        style.icon_ink.css(),
        style.icon_ink.css(),
    );

    rsx! {
        span {
            class: "{size_class}",
            title: "{style.label}",
            style: "{disc_style}",
            "{style.glyph}"
        }
    }
}
