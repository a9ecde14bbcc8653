//! Type Catalog - static mapping from category labels to display assets.
//!
//! The catalog is the closed set of energy types a card, attack cost slot,
//! weakness, or resistance may reference. Each entry carries the asset ids
//! stored in card documents plus the color metadata both the live preview and
//! the rasterizer style themselves with. Lookup for an unrecognized label
//! falls back to the Colorless entry rather than failing.

/// An RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex form, e.g. `#facc15`.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// One catalog entry: a category label and its display assets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeStyle {
    /// The category label ("Fire", "Water", ...)
    pub label: &'static str,
    /// Icon asset id referenced by the preview
    pub icon: &'static str,
    /// Card background asset id, stored in `cardBackground`
    pub background: &'static str,
    /// Single glyph drawn inside the icon disc
    pub glyph: char,
    /// Icon disc fill color
    pub icon_fill: Rgb,
    /// Ink color for the glyph on the disc
    pub icon_ink: Rgb,
    /// Card frame gradient, top and bottom stops
    pub frame: [Rgb; 2],
}

/// All known category labels, in display order.
pub static TYPES: [TypeStyle; 8] = [
    TypeStyle {
        label: "Colorless",
        icon: "/assets/types/colorless.png",
        background: "/assets/cards/normal-card.webp",
        glyph: '*',
        icon_fill: Rgb(0xe5, 0xe7, 0xeb),
        icon_ink: Rgb(0x37, 0x41, 0x51),
        frame: [Rgb(0xf9, 0xfa, 0xfb), Rgb(0xd1, 0xd5, 0xdb)],
    },
    TypeStyle {
        label: "Darkness",
        icon: "/assets/types/dark.png",
        background: "/assets/cards/dark-card.webp",
        glyph: 'D',
        icon_fill: Rgb(0x3b, 0x2d, 0x4f),
        icon_ink: Rgb(0xf5, 0xf5, 0xf5),
        frame: [Rgb(0x4c, 0x1d, 0x95), Rgb(0x1e, 0x1b, 0x4b)],
    },
    TypeStyle {
        label: "Fighting",
        icon: "/assets/types/fighting.png",
        background: "/assets/cards/fighting-card.webp",
        glyph: 'F',
        icon_fill: Rgb(0xc2, 0x41, 0x0c),
        icon_ink: Rgb(0xff, 0xf7, 0xed),
        frame: [Rgb(0xfb, 0x92, 0x3c), Rgb(0x9a, 0x34, 0x12)],
    },
    TypeStyle {
        label: "Fire",
        icon: "/assets/types/fire.png",
        background: "/assets/cards/fire-card.webp",
        glyph: 'R',
        icon_fill: Rgb(0xef, 0x44, 0x44),
        icon_ink: Rgb(0xff, 0xf1, 0xf2),
        frame: [Rgb(0xfc, 0xa5, 0xa5), Rgb(0xb9, 0x1c, 0x1c)],
    },
    TypeStyle {
        label: "Grass",
        icon: "/assets/types/grass.png",
        background: "/assets/cards/grass-card.webp",
        glyph: 'G',
        icon_fill: Rgb(0x22, 0xc5, 0x5e),
        icon_ink: Rgb(0xf0, 0xfd, 0xf4),
        frame: [Rgb(0x86, 0xef, 0xac), Rgb(0x15, 0x80, 0x3d)],
    },
    TypeStyle {
        label: "Lightning",
        icon: "/assets/types/lightning.png",
        background: "/assets/cards/lightning-card.webp",
        glyph: 'L',
        icon_fill: Rgb(0xfa, 0xcc, 0x15),
        icon_ink: Rgb(0x42, 0x20, 0x06),
        frame: [Rgb(0xfe, 0xf0, 0x8a), Rgb(0xca, 0x8a, 0x04)],
    },
    TypeStyle {
        label: "Psychic",
        icon: "/assets/types/psychic.png",
        background: "/assets/cards/psychic-card.webp",
        glyph: 'P',
        icon_fill: Rgb(0xa8, 0x55, 0xf7),
        icon_ink: Rgb(0xfa, 0xf5, 0xff),
        frame: [Rgb(0xd8, 0xb4, 0xfe), Rgb(0x6b, 0x21, 0xa8)],
    },
    TypeStyle {
        label: "Water",
        icon: "/assets/types/water.png",
        background: "/assets/cards/water-card.webp",
        glyph: 'W',
        icon_fill: Rgb(0x3b, 0x82, 0xf6),
        icon_ink: Rgb(0xef, 0xf6, 0xff),
        frame: [Rgb(0x93, 0xc5, 0xfd), Rgb(0x1d, 0x4e, 0xd8)],
    },
];

/// Fallback entry for unrecognized labels.
pub static DEFAULT_TYPE: &TypeStyle = &TYPES[0];

/// Look up a catalog entry, falling back to [`DEFAULT_TYPE`] on a miss.
pub fn style(label: &str) -> &'static TypeStyle {
    TYPES.iter().find(|t| t.label == label).unwrap_or(DEFAULT_TYPE)
}

/// Whether a label belongs to the catalog's known set.
pub fn is_known(label: &str) -> bool {
    TYPES.iter().any(|t| t.label == label)
}

/// Background asset id derived from a card type label.
pub fn background(label: &str) -> &'static str {
    style(label).background
}

/// Resolve a stored background asset id back to its frame gradient.
///
/// Imported documents carry `cardBackground` verbatim, so this matches by
/// asset id rather than by type label, defaulting on a miss.
pub fn frame_for_background(asset: &str) -> [Rgb; 2] {
    TYPES
        .iter()
        .find(|t| t.background == asset)
        .unwrap_or(DEFAULT_TYPE)
        .frame
}

/// All known labels, in display order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    TYPES.iter().map(|t| t.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve_to_their_own_entry() {
        for entry in &TYPES {
            assert_eq!(style(entry.label).label, entry.label);
            assert!(is_known(entry.label));
        }
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        assert_eq!(style("NotAType").label, "Colorless");
        assert!(!is_known("NotAType"));
        assert!(!is_known("fire")); // labels are case-sensitive
    }

    #[test]
    fn background_tracks_type() {
        assert_eq!(background("Fire"), "/assets/cards/fire-card.webp");
        assert_eq!(background("Bogus"), DEFAULT_TYPE.background);
    }

    #[test]
    fn frame_reverse_lookup() {
        let fire = style("Fire");
        assert_eq!(frame_for_background(fire.background), fire.frame);
        assert_eq!(frame_for_background("/no/such/asset"), DEFAULT_TYPE.frame);
    }

    #[test]
    fn css_hex_format() {
        assert_eq!(Rgb(0xfa, 0xcc, 0x15).css(), "#facc15");
        assert_eq!(Rgb(0, 0, 0).css(), "#000000");
    }
}
