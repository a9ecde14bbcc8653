//! Cardsmith Core Library
//!
//! Domain model for a custom trading-card studio: the editable card record
//! and its update protocol, the static Type Catalog, the JSON card document
//! format, and a deterministic card rasterizer for PNG export.
//!
//! ## Overview
//!
//! One [`Card`] exists per editing session. Every form edit flows through the
//! pure [`Card::with_field`] update protocol, which validates category labels
//! against the [`catalog`] and clamps numeric fields, so the UI can treat
//! card equality as its re-render trigger. Export rasterizes the card's
//! composed scene; import replaces the card wholesale from a JSON document.
//!
//! ## Quick Start
//!
//! ```
//! use cardsmith_core::{document, Card, CardField};
//!
//! let card = Card::default()
//!     .with_field(CardField::Name, "Raichu")
//!     .with_field(CardField::Hp, "90")
//!     .with_field(CardField::CardType, "Lightning");
//!
//! let json = document::export_json(&card).unwrap();
//! assert_eq!(document::import_json(&json).unwrap(), card);
//! ```

pub mod card;
pub mod catalog;
pub mod document;
pub mod error;
pub mod render;

// Re-exports
pub use card::{Attack, AttackSlot, Card, CardField, ImageSource, HP_MAX, RETREAT_MAX};
pub use catalog::TypeStyle;
pub use error::{CardError, CardResult};
