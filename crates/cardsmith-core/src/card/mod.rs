//! Card model - the single editable record behind an editing session.

mod image;
mod update;

pub use image::ImageSource;
pub use update::CardField;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Upper bound for hit points.
pub const HP_MAX: u16 = 999;
/// Upper bound for retreat cost.
pub const RETREAT_MAX: u8 = 4;

/// One of the card's two attacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    /// Kept as text so annotations like "20+" survive
    pub damage: String,
    /// Ordered energy cost, each entry a catalog label
    pub cost: Vec<String>,
}

impl Attack {
    pub fn new(name: &str, damage: &str, cost: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            damage: damage.to_string(),
            cost: cost.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Which of the two attack records a field edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackSlot {
    First,
    Second,
}

impl AttackSlot {
    pub const ALL: [AttackSlot; 2] = [AttackSlot::First, AttackSlot::Second];

    /// Index into [`Card::attacks`].
    pub fn index(&self) -> usize {
        match self {
            AttackSlot::First => 0,
            AttackSlot::Second => 1,
        }
    }

    /// Number of cost slots the editor offers for this attack.
    pub fn cost_arity(&self) -> usize {
        match self {
            AttackSlot::First => 1,
            AttackSlot::Second => 2,
        }
    }

    /// 1-based number for labels ("Attack 1", "Attack 2").
    pub fn number(&self) -> usize {
        self.index() + 1
    }
}

/// The editable card record.
///
/// One instance exists per session: initialized to [`Card::default`],
/// replaced wholesale on document import, and updated field-by-field through
/// [`Card::with_field`]. All updates are pure copies so signal equality can
/// drive re-renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub hp: u16,
    /// Category label from the Type Catalog
    pub card_type: String,
    pub image: ImageSource,
    /// Background asset id, derived from `card_type` on every type edit
    pub card_background: String,
    pub description: String,
    pub attacks: [Attack; 2],
    pub weakness: String,
    pub resistance: String,
    pub retreat_cost: u8,
}

impl Card {
    /// Borrow the attack record for a slot.
    pub fn attack(&self, slot: AttackSlot) -> &Attack {
        &self.attacks[slot.index()]
    }

    /// Replace the main image, keeping every other field.
    ///
    /// Used by the asynchronous file-read path: applied to whatever card is
    /// current when the read completes, so concurrent edits to other fields
    /// are preserved.
    pub fn with_image(&self, image: ImageSource) -> Card {
        let mut next = self.clone();
        next.image = image;
        next
    }
}

impl Default for Card {
    /// The sample card shown when a session starts.
    fn default() -> Self {
        Card {
            name: "Pikachu".to_string(),
            hp: 60,
            card_type: "Lightning".to_string(),
            image: ImageSource::Remote(
                "https://images.unsplash.com/photo-1638611831248-c74d3c7b43c5?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            card_background: catalog::background("Lightning").to_string(),
            description: "Mouse Pok\u{e9}mon. Length: 1'04\", Weight: 13 lbs.".to_string(),
            attacks: [
                Attack::new("Thunder Shock", "20", &["Lightning"]),
                Attack::new("Quick Attack", "10", &["Colorless", "Lightning"]),
            ],
            weakness: "Fighting".to_string(),
            resistance: "Psychic".to_string(),
            retreat_cost: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_is_pikachu() {
        let card = Card::default();
        assert_eq!(card.name, "Pikachu");
        assert_eq!(card.hp, 60);
        assert_eq!(card.card_type, "Lightning");
        assert_eq!(card.card_background, catalog::background("Lightning"));
        assert_eq!(card.attack(AttackSlot::First).cost, vec!["Lightning"]);
        assert_eq!(
            card.attack(AttackSlot::Second).cost,
            vec!["Colorless", "Lightning"]
        );
    }

    #[test]
    fn default_card_uses_known_labels() {
        let card = Card::default();
        assert!(catalog::is_known(&card.card_type));
        assert!(catalog::is_known(&card.weakness));
        assert!(catalog::is_known(&card.resistance));
        for attack in &card.attacks {
            for label in &attack.cost {
                assert!(catalog::is_known(label), "unknown cost label {label}");
            }
        }
    }

    #[test]
    fn slot_arity_matches_default_costs() {
        let card = Card::default();
        for slot in AttackSlot::ALL {
            assert_eq!(card.attack(slot).cost.len(), slot.cost_arity());
        }
    }

    #[test]
    fn with_image_keeps_other_fields() {
        let card = Card::default();
        let edited = card.with_image(ImageSource::from_bytes(vec![9, 9], "image/png"));
        assert_eq!(edited.name, card.name);
        assert_eq!(edited.attacks, card.attacks);
        assert_ne!(edited.image, card.image);
    }
}
