//! Card Preview - pure projection of the card onto the fixed 400x560 layout.
//!
//! No signals and no side effects: the preview is a function of the card and
//! the Type Catalog, mirroring the scene the exporter rasterizes.

use dioxus::prelude::*;

use cardsmith_core::{catalog, render, AttackSlot, Card};

use super::TypeIcon;

/// Live styled preview of the card being edited.
#[component]
pub fn CardPreview(card: Card) -> Element {
    let frame = catalog::frame_for_background(&card.card_background);
    let frame_style = format!(
        "width: {}px; height: {}px; background: linear-gradient(160deg, {} 0%, {} 100%);",
        render::CARD_WIDTH,
        render::CARD_HEIGHT,
        frame[0].css(),
        frame[1].css(),
    );
    let image_src = card.image.as_src();

    rsx! {
        div { class: "preview-pane",
            div { class: "card-face", style: "{frame_style}",
                // Header
                div { class: "card-header",
                    h3 { class: "card-name", "{card.name}" }
                    span { class: "card-hp", "HP {card.hp}" }
                    TypeIcon { label: card.card_type.clone(), large: true }
                }

                // Main picture
                div { class: "card-picture",
                    if card.image.is_available() {
                        img { src: "{image_src}", alt: "{card.name}" }
                    }
                }

                // Type line and description
                div { class: "card-panel",
                    div { class: "card-type-line",
                        TypeIcon { label: card.card_type.clone() }
                        span { "{card.card_type} Pok\u{e9}mon" }
                    }
                    p { class: "card-description", "{card.description}" }
                }

                // Attacks
                for slot in AttackSlot::ALL {
                    {
                        let attack = card.attack(slot).clone();
                        rsx! {
                            div { class: "card-panel card-attack",
                                div { class: "card-attack-cost",
                                    for label in attack.cost.iter() {
                                        TypeIcon { label: label.clone() }
                                    }
                                }
                                span { class: "card-attack-name", "{attack.name}" }
                                span { class: "card-attack-damage", "{attack.damage}" }
                            }
                        }
                    }
                }

                // Footer
                div { class: "card-panel card-footer",
                    div { class: "card-footer-group",
                        span { "Weakness" }
                        TypeIcon { label: card.weakness.clone() }
                    }
                    div { class: "card-footer-group",
                        span { "Resistance" }
                        TypeIcon { label: card.resistance.clone() }
                    }
                    div { class: "card-footer-group",
                        span { "Retreat" }
                        for _ in 0..card.retreat_cost {
                            TypeIcon { label: "Colorless" }
                        }
                    }
                }
            }
        }
    }
}
