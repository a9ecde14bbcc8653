//! Card Editor - one bound control per card field.
//!
//! Controls display the current card and emit `(CardField, value)` pairs on
//! every change; the owner runs them through the update protocol against the
//! latest card, so invalid input simply snaps back on the next render.

use dioxus::prelude::*;

use cardsmith_core::{catalog, AttackSlot, Card, CardField, ImageSource};

use super::ImageUploadButton;

/// Props for the CardEditor component
#[derive(Props, Clone, PartialEq)]
pub struct CardEditorProps {
    /// The card being edited
    pub card: Card,
    /// Handler for a single field edit
    pub on_edit: EventHandler<(CardField, String)>,
    /// Handler for a locally read image file
    pub on_image: EventHandler<ImageSource>,
}

/// Editor form for every editable card field.
#[component]
pub fn CardEditor(props: CardEditorProps) -> Element {
    let card = &props.card;
    let on_edit = props.on_edit;
    let on_image = props.on_image;

    // Image URL box shows nothing while an embedded image is set, like the
    // original editor: the data URI would be unreadable noise
    let image_url_value = match &card.image {
        ImageSource::Remote(url) => url.clone(),
        ImageSource::Embedded { .. } => String::new(),
    };

    rsx! {
        div { class: "editor-pane",
            h2 { class: "editor-title", "Card Editor" }

            div { class: "field-row",
                TextField {
                    label: "Name",
                    value: card.name.clone(),
                    field: CardField::Name,
                    on_edit,
                }
                NumberField {
                    label: "HP",
                    value: card.hp.to_string(),
                    field: CardField::Hp,
                    max: cardsmith_core::HP_MAX as i64,
                    on_edit,
                }
            }

            SelectField {
                label: "Type",
                value: card.card_type.clone(),
                field: CardField::CardType,
                on_edit,
            }

            div { class: "form-field",
                label { class: "input-label", "Image URL (optional)" }
                div { class: "field-row",
                    input {
                        class: "input-field",
                        r#type: "text",
                        value: "{image_url_value}",
                        placeholder: "https:// or local path",
                        oninput: move |e| on_edit.call((CardField::ImageUrl, e.value())),
                    }
                    ImageUploadButton { on_upload: move |source| on_image.call(source) }
                }
            }

            div { class: "form-field",
                label { class: "input-label", "Description" }
                textarea {
                    class: "input-field textarea",
                    rows: "3",
                    value: "{card.description}",
                    oninput: move |e| on_edit.call((CardField::Description, e.value())),
                }
            }

            for slot in AttackSlot::ALL {
                AttackFields {
                    slot,
                    attack: card.attack(slot).clone(),
                    on_edit,
                }
            }

            div { class: "field-row",
                SelectField {
                    label: "Weakness",
                    value: card.weakness.clone(),
                    field: CardField::Weakness,
                    on_edit,
                }
                SelectField {
                    label: "Resistance",
                    value: card.resistance.clone(),
                    field: CardField::Resistance,
                    on_edit,
                }
                NumberField {
                    label: "Retreat Cost",
                    value: card.retreat_cost.to_string(),
                    field: CardField::RetreatCost,
                    max: cardsmith_core::RETREAT_MAX as i64,
                    on_edit,
                }
            }
        }
    }
}

/// Sub-form for one attack: name, damage, and its fixed cost slots.
#[component]
fn AttackFields(
    slot: AttackSlot,
    attack: cardsmith_core::Attack,
    on_edit: EventHandler<(CardField, String)>,
) -> Element {
    let number = slot.number();
    rsx! {
        div { class: "attack-group",
            h3 { class: "attack-group-title", "Attack {number}" }
            div { class: "field-row",
                TextField {
                    label: "Name",
                    value: attack.name.clone(),
                    field: CardField::AttackName(slot),
                    on_edit,
                }
                TextField {
                    label: "Damage",
                    value: attack.damage.clone(),
                    field: CardField::AttackDamage(slot),
                    on_edit,
                }
            }
            div { class: "form-field",
                label { class: "input-label", "Energy Cost" }
                div { class: "field-row",
                    for (idx, cost) in attack.cost.iter().enumerate() {
                        SelectField {
                            value: cost.clone(),
                            field: CardField::CostSlot(slot, idx),
                            on_edit,
                        }
                    }
                }
            }
        }
    }
}

/// Labelled free-text input.
#[component]
fn TextField(
    label: String,
    value: String,
    field: CardField,
    on_edit: EventHandler<(CardField, String)>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", "{label}" }
            input {
                class: "input-field",
                r#type: "text",
                value: "{value}",
                oninput: move |e| on_edit.call((field, e.value())),
            }
        }
    }
}

/// Labelled bounded number input.
#[component]
fn NumberField(
    label: String,
    value: String,
    field: CardField,
    max: i64,
    on_edit: EventHandler<(CardField, String)>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", "{label}" }
            input {
                class: "input-field",
                r#type: "number",
                min: "0",
                max: "{max}",
                value: "{value}",
                oninput: move |e| on_edit.call((field, e.value())),
            }
        }
    }
}

/// Labelled select fed from the Type Catalog.
#[component]
fn SelectField(
    #[props(default)] label: Option<String>,
    value: String,
    field: CardField,
    on_edit: EventHandler<(CardField, String)>,
) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &label {
                label { class: "input-label", "{label}" }
            }
            select {
                class: "input-field select",
                value: "{value}",
                onchange: move |e| on_edit.call((field, e.value())),
                for option_label in catalog::labels() {
                    option {
                        value: "{option_label}",
                        selected: value == option_label,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
