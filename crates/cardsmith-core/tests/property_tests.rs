//! Property-based tests for the card update protocol and document format.
//!
//! Uses proptest to verify the editing invariants: numeric bounds always
//! hold, invalid labels never change the card, the background always tracks
//! the type, and documents round-trip.

use proptest::prelude::*;

use cardsmith_core::{catalog, document, AttackSlot, Card, CardField, ImageSource};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any known category label
fn known_label_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(catalog::labels().map(String::from).collect::<Vec<_>>())
}

/// Strings that are never catalog labels
fn unknown_label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}")
        .expect("valid regex")
        .prop_filter("not a catalog label", |s| !catalog::is_known(s))
}

/// Arbitrary free text, including empty
fn free_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,60}").expect("valid regex")
}

/// Raw input for a numeric field: digits, garbage, or empty
fn numeric_input_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (-50i64..1500).prop_map(|n| n.to_string()),
        free_text_strategy(),
    ]
}

/// A fully editable card built through the update protocol plus import
fn card_strategy() -> impl Strategy<Value = Card> {
    (
        free_text_strategy(),
        0u16..=999,
        known_label_strategy(),
        free_text_strategy(),
        prop::collection::vec(known_label_strategy(), 1..=1),
        prop::collection::vec(known_label_strategy(), 2..=2),
        known_label_strategy(),
        known_label_strategy(),
        0u8..=4,
    )
        .prop_map(
            |(name, hp, card_type, description, cost1, cost2, weakness, resistance, retreat)| {
                let mut card = Card::default()
                    .with_field(CardField::Name, &name)
                    .with_field(CardField::Hp, &hp.to_string())
                    .with_field(CardField::CardType, &card_type)
                    .with_field(CardField::Description, &description)
                    .with_field(CardField::Weakness, &weakness)
                    .with_field(CardField::Resistance, &resistance)
                    .with_field(CardField::RetreatCost, &retreat.to_string());
                for (i, label) in cost1.iter().enumerate() {
                    card = card.with_field(CardField::CostSlot(AttackSlot::First, i), label);
                }
                for (i, label) in cost2.iter().enumerate() {
                    card = card.with_field(CardField::CostSlot(AttackSlot::Second, i), label);
                }
                card
            },
        )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// HP stays within bounds no matter what the input is
    #[test]
    fn hp_always_in_bounds(card in card_strategy(), input in numeric_input_strategy()) {
        let edited = card.with_field(CardField::Hp, &input);
        prop_assert!(edited.hp <= 999);
        // an applied edit means the input parsed to exactly that value
        if edited.hp != card.hp {
            prop_assert_eq!(input.trim().parse::<i64>().unwrap(), edited.hp as i64);
        }
    }

    /// Retreat cost stays within bounds no matter what the input is
    #[test]
    fn retreat_always_in_bounds(card in card_strategy(), input in numeric_input_strategy()) {
        let edited = card.with_field(CardField::RetreatCost, &input);
        prop_assert!(edited.retreat_cost <= 4);
    }

    /// Unknown labels are exact no-ops for every label-validated field
    #[test]
    fn unknown_labels_are_noops(card in card_strategy(), label in unknown_label_strategy()) {
        prop_assert_eq!(&card.with_field(CardField::CardType, &label), &card);
        prop_assert_eq!(&card.with_field(CardField::Weakness, &label), &card);
        prop_assert_eq!(&card.with_field(CardField::Resistance, &label), &card);
        prop_assert_eq!(
            &card.with_field(CardField::CostSlot(AttackSlot::First, 0), &label),
            &card
        );
        prop_assert_eq!(
            &card.with_field(CardField::CostSlot(AttackSlot::Second, 1), &label),
            &card
        );
    }

    /// After any type edit the background is the catalog's mapping for the
    /// current type - never a stale label's asset
    #[test]
    fn background_tracks_type(card in card_strategy(), label in known_label_strategy()) {
        let edited = card.with_field(CardField::CardType, &label);
        prop_assert_eq!(edited.card_type.as_str(), label.as_str());
        prop_assert_eq!(
            edited.card_background.as_str(),
            catalog::background(&label)
        );
    }

    /// Export then import yields a deeply equal card
    #[test]
    fn document_roundtrip(card in card_strategy()) {
        let text = document::export_json(&card).unwrap();
        let reimported = document::import_json(&text).unwrap();
        prop_assert_eq!(reimported, card);
    }

    /// Embedded images survive the document round-trip byte for byte
    #[test]
    fn embedded_image_roundtrip(card in card_strategy(), data in prop::collection::vec(any::<u8>(), 1..256)) {
        let card = card.with_image(ImageSource::from_bytes(data, "image/png"));
        let text = document::export_json(&card).unwrap();
        prop_assert_eq!(document::import_json(&text).unwrap(), card);
    }

    /// Removing any required key makes import fail
    #[test]
    fn missing_any_required_field_fails(card in card_strategy(), idx in 0..document::REQUIRED_FIELDS.len()) {
        let text = document::export_json(&card).unwrap();
        let mut doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        let removed = document::REQUIRED_FIELDS[idx];
        doc.as_object_mut().unwrap().remove(removed);
        prop_assert!(document::import_json(&doc.to_string()).is_err());
    }

    /// The composed scene always shows exactly `retreat_cost` retreat icons
    #[test]
    fn scene_retreat_icon_count(card in card_strategy()) {
        use cardsmith_core::render::{compose, PaintOp};
        let ops = compose(&card);
        let discs = ops.iter().filter(|op| matches!(op, PaintOp::Disc { .. })).count();
        let base = 3 // type + weakness + resistance
            + card.attack(AttackSlot::First).cost.len()
            + card.attack(AttackSlot::Second).cost.len();
        prop_assert_eq!(discs, base + card.retreat_cost as usize);
    }

    /// Scene composition is deterministic
    #[test]
    fn scene_is_deterministic(card in card_strategy()) {
        use cardsmith_core::render::compose;
        prop_assert_eq!(compose(&card), compose(&card));
    }
}
