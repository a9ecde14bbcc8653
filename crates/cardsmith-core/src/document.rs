//! Card document format - JSON export/import of the whole card.
//!
//! The document is a flat object keyed exactly like the card's editable
//! fields (`attack1Cost`, `retreatCost`, ...). Import validation is
//! structural only: every required key must be present, but values are not
//! type- or range-checked. Out-of-bounds numbers are accepted verbatim and
//! only re-enter the bounds rules on the next edit through the update
//! protocol.

use serde_json::{json, Map, Value};

use crate::card::{Attack, AttackSlot, Card, ImageSource};
use crate::error::{CardError, CardResult};

/// Keys a document must contain to be importable.
pub const REQUIRED_FIELDS: [&str; 14] = [
    "name",
    "hp",
    "type",
    "imageUrl",
    "description",
    "attack1",
    "attack1Damage",
    "attack1Cost",
    "attack2",
    "attack2Damage",
    "attack2Cost",
    "weakness",
    "resistance",
    "retreatCost",
];

/// Serialize a card to document text.
pub fn export_json(card: &Card) -> CardResult<String> {
    let attack1 = card.attack(AttackSlot::First);
    let attack2 = card.attack(AttackSlot::Second);
    let doc = json!({
        "name": card.name,
        "hp": card.hp,
        "type": card.card_type,
        "imageUrl": card.image.as_src(),
        "cardBackground": card.card_background,
        "description": card.description,
        "attack1": attack1.name,
        "attack1Damage": attack1.damage,
        "attack1Cost": attack1.cost,
        "attack2": attack2.name,
        "attack2Damage": attack2.damage,
        "attack2Cost": attack2.cost,
        "weakness": card.weakness,
        "resistance": card.resistance,
        "retreatCost": card.retreat_cost,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse document text into a card, replacing the session's card wholesale.
///
/// Fails on unparsable text or any missing required key; on failure the
/// caller keeps its current card untouched.
pub fn import_json(text: &str) -> CardResult<Card> {
    let value: Value = serde_json::from_str(text)?;
    let doc = value
        .as_object()
        .ok_or_else(|| CardError::InvalidDocument("not a JSON object".to_string()))?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|key| !doc.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(CardError::MissingField(missing.join(", ")));
    }

    let card_type = text_field(doc, "type");
    // cardBackground is optional: derived again from the type when absent
    let card_background = match doc.get("cardBackground") {
        Some(Value::String(s)) => s.clone(),
        _ => crate::catalog::background(&card_type).to_string(),
    };

    Ok(Card {
        name: text_field(doc, "name"),
        hp: int_field(doc, "hp").clamp(0, u16::MAX as i64) as u16,
        card_type,
        image: ImageSource::parse(&text_field(doc, "imageUrl")),
        card_background,
        description: text_field(doc, "description"),
        attacks: [
            Attack {
                name: text_field(doc, "attack1"),
                damage: text_field(doc, "attack1Damage"),
                cost: cost_field(doc, "attack1Cost"),
            },
            Attack {
                name: text_field(doc, "attack2"),
                damage: text_field(doc, "attack2Damage"),
                cost: cost_field(doc, "attack2Cost"),
            },
        ],
        weakness: text_field(doc, "weakness"),
        resistance: text_field(doc, "resistance"),
        retreat_cost: int_field(doc, "retreatCost").clamp(0, u8::MAX as i64) as u8,
    })
}

/// Download file name for the raster artifact.
pub fn png_file_name(card_name: &str) -> String {
    format!("pokemon-card-{}.png", card_name)
}

/// Download file name for the document artifact.
pub fn json_file_name(card_name: &str) -> String {
    format!("pokemon-card-{}.json", card_name)
}

// Lenient value readers: presence is validated, shape is not, so wrong-typed
// values coerce to something the field can hold instead of failing import.

fn text_field(doc: &Map<String, Value>, key: &str) -> String {
    match doc.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn int_field(doc: &Map<String, Value>, key: &str) -> i64 {
    match doc.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn cost_field(doc: &Map<String, Value>, key: &str) -> Vec<String> {
    match doc.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}
