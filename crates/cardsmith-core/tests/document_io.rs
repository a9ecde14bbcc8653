//! File-level export/import tests for the card document format.
//!
//! Mirrors what the toolbar does: write the document artifact to disk, read
//! it back, and replace the session card.

use std::fs;

use cardsmith_core::{document, Card, CardError, CardField, ImageSource};

#[test]
fn export_to_file_and_reimport() {
    let dir = tempfile::tempdir().unwrap();
    let card = Card::default()
        .with_field(CardField::Name, "Charizard")
        .with_field(CardField::CardType, "Fire")
        .with_field(CardField::Hp, "180");

    let path = dir.path().join(document::json_file_name(&card.name));
    fs::write(&path, document::export_json(&card).unwrap()).unwrap();
    assert!(path.ends_with("pokemon-card-Charizard.json"));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(document::import_json(&text).unwrap(), card);
}

#[test]
fn failed_import_leaves_session_card_untouched() {
    let session = Card::default();
    let result = document::import_json("{\"name\": \"only a name\"}");
    assert!(matches!(result, Err(CardError::MissingField(_))));
    // the caller still holds the untouched card
    assert_eq!(session, Card::default());
}

#[test]
fn imported_card_reenters_update_protocol() {
    // Out-of-bounds hp is accepted on import and only corrected when the
    // field is next edited through the protocol.
    let card = Card::default();
    let text = document::export_json(&card).unwrap();
    let mut doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    doc["hp"] = serde_json::json!(5000);

    let imported = document::import_json(&doc.to_string()).unwrap();
    assert_eq!(imported.hp, 5000);

    let edited = imported.with_field(CardField::Hp, "6000");
    assert_eq!(edited.hp, 5000); // rejected, previous value retained
    let edited = imported.with_field(CardField::Hp, "120");
    assert_eq!(edited.hp, 120);
}

#[test]
fn local_image_file_embeds_and_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sprite.png");

    // tiny valid PNG via the image crate
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(2, 2));
    img.save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let card = Card::default().with_image(ImageSource::from_bytes(bytes, "image/png"));

    let text = document::export_json(&card).unwrap();
    let reimported = document::import_json(&text).unwrap();
    assert_eq!(reimported.image, card.image);
    assert!(reimported.image.as_src().starts_with("data:image/png;base64,"));
}
