//! Field update protocol.
//!
//! Every form edit flows through [`Card::with_field`]: given the current card
//! and one field/value pair, produce a new card. Invalid input never partially
//! writes - the previous value is retained and no other field moves.

use crate::catalog;

use super::{AttackSlot, Card, ImageSource, HP_MAX, RETREAT_MAX};

/// Addressable card fields.
///
/// Attack fields name their slot explicitly instead of being reconstructed
/// from strings like `attack1Cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Name,
    Hp,
    CardType,
    ImageUrl,
    Description,
    AttackName(AttackSlot),
    AttackDamage(AttackSlot),
    /// One position in an attack's ordered cost list
    CostSlot(AttackSlot, usize),
    Weakness,
    Resistance,
    RetreatCost,
}

impl Card {
    /// Produce a copy of this card with one field edited.
    ///
    /// Validation rules, in order:
    /// 1. `CardType` must be a catalog label; on success `card_background` is
    ///    re-derived from the catalog, on failure the card is unchanged.
    /// 2. `Hp` and `RetreatCost` parse as integers within their bounds;
    ///    unparsable or out-of-range input retains the previous value.
    /// 3. Cost slots, weakness, and resistance are catalog-validated exactly
    ///    like the type; invalid values are dropped.
    /// 4. Free-text fields are set verbatim.
    pub fn with_field(&self, field: CardField, value: &str) -> Card {
        let mut next = self.clone();
        match field {
            CardField::Name => next.name = value.to_string(),
            CardField::Hp => {
                if let Some(hp) = parse_bounded(value, HP_MAX as i64) {
                    next.hp = hp as u16;
                }
            }
            CardField::CardType => {
                if catalog::is_known(value) {
                    next.card_type = value.to_string();
                    next.card_background = catalog::background(value).to_string();
                } else {
                    tracing::debug!(label = value, "rejected unknown card type");
                }
            }
            CardField::ImageUrl => next.image = ImageSource::parse(value),
            CardField::Description => next.description = value.to_string(),
            CardField::AttackName(slot) => {
                next.attacks[slot.index()].name = value.to_string();
            }
            CardField::AttackDamage(slot) => {
                next.attacks[slot.index()].damage = value.to_string();
            }
            CardField::CostSlot(slot, idx) => {
                let cost = &mut next.attacks[slot.index()].cost;
                if idx < cost.len() && catalog::is_known(value) {
                    cost[idx] = value.to_string();
                }
            }
            CardField::Weakness => {
                if catalog::is_known(value) {
                    next.weakness = value.to_string();
                }
            }
            CardField::Resistance => {
                if catalog::is_known(value) {
                    next.resistance = value.to_string();
                }
            }
            CardField::RetreatCost => {
                if let Some(rc) = parse_bounded(value, RETREAT_MAX as i64) {
                    next.retreat_cost = rc as u8;
                }
            }
        }
        next
    }
}

/// Parse an integer in `[0, max]`; `None` keeps the previous value.
fn parse_bounded(value: &str, max: i64) -> Option<i64> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (0..=max).contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_fields_set_verbatim() {
        let card = Card::default();
        let edited = card
            .with_field(CardField::Name, "Raichu")
            .with_field(CardField::Description, "Evolved form.")
            .with_field(CardField::AttackName(AttackSlot::First), "Thunderbolt")
            .with_field(CardField::AttackDamage(AttackSlot::First), "50+");
        assert_eq!(edited.name, "Raichu");
        assert_eq!(edited.description, "Evolved form.");
        assert_eq!(edited.attack(AttackSlot::First).name, "Thunderbolt");
        assert_eq!(edited.attack(AttackSlot::First).damage, "50+");
    }

    #[test]
    fn hp_clamped_to_bounds() {
        let card = Card::default();
        assert_eq!(card.with_field(CardField::Hp, "120").hp, 120);
        assert_eq!(card.with_field(CardField::Hp, "0").hp, 0);
        assert_eq!(card.with_field(CardField::Hp, "999").hp, 999);
        // out of range or unparsable keeps the previous value
        assert_eq!(card.with_field(CardField::Hp, "1000").hp, 60);
        assert_eq!(card.with_field(CardField::Hp, "-5").hp, 60);
        assert_eq!(card.with_field(CardField::Hp, "abc").hp, 60);
        assert_eq!(card.with_field(CardField::Hp, "").hp, 60);
    }

    #[test]
    fn retreat_cost_clamped_to_bounds() {
        let card = Card::default();
        assert_eq!(card.with_field(CardField::RetreatCost, "4").retreat_cost, 4);
        assert_eq!(card.with_field(CardField::RetreatCost, "0").retreat_cost, 0);
        assert_eq!(card.with_field(CardField::RetreatCost, "5").retreat_cost, 1);
        assert_eq!(card.with_field(CardField::RetreatCost, "x").retreat_cost, 1);
    }

    #[test]
    fn type_change_rederives_background() {
        let card = Card::default();
        let fire = card.with_field(CardField::CardType, "Fire");
        assert_eq!(fire.card_type, "Fire");
        assert_eq!(fire.card_background, catalog::background("Fire"));

        let water = fire.with_field(CardField::CardType, "Water");
        assert_eq!(water.card_background, catalog::background("Water"));
        assert_ne!(water.card_background, catalog::background("Fire"));
    }

    #[test]
    fn invalid_type_is_a_noop() {
        let card = Card::default();
        assert_eq!(card.with_field(CardField::CardType, "NotAType"), card);
        assert_eq!(card.with_field(CardField::Weakness, "NotAType"), card);
        assert_eq!(card.with_field(CardField::Resistance, "NotAType"), card);
    }

    #[test]
    fn cost_slot_validated_and_bounded() {
        let card = Card::default();
        let edited = card.with_field(CardField::CostSlot(AttackSlot::Second, 0), "Fire");
        assert_eq!(edited.attack(AttackSlot::Second).cost, vec!["Fire", "Lightning"]);

        // invalid label dropped
        assert_eq!(
            card.with_field(CardField::CostSlot(AttackSlot::First, 0), "NotAType"),
            card
        );
        // out-of-range slot index dropped
        assert_eq!(
            card.with_field(CardField::CostSlot(AttackSlot::First, 3), "Fire"),
            card
        );
    }

    #[test]
    fn image_url_parses_into_tagged_source() {
        let card = Card::default();
        let edited = card.with_field(CardField::ImageUrl, "/tmp/pic.png");
        assert_eq!(edited.image, ImageSource::Remote("/tmp/pic.png".to_string()));
    }

    #[test]
    fn update_is_pure() {
        let card = Card::default();
        let before = card.clone();
        let _ = card.with_field(CardField::Hp, "500");
        assert_eq!(card, before);
    }

    /// End-to-end edit sequence: bad HP keeps 60, type edit re-derives the
    /// background, bad cost label is dropped.
    #[test]
    fn pikachu_editing_scenario() {
        let card = Card::default();

        let card = card.with_field(CardField::Hp, "1000");
        assert_eq!(card.hp, 60);

        let card = card.with_field(CardField::CardType, "Fire");
        assert_eq!(card.card_background, catalog::background("Fire"));

        let card = card.with_field(CardField::CostSlot(AttackSlot::First, 0), "NotAType");
        assert_eq!(card.attack(AttackSlot::First).cost, vec!["Lightning"]);
    }
}
