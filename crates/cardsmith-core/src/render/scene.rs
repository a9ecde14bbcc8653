//! Deterministic card scene.
//!
//! [`compose`] projects a card into an ordered list of paint operations for
//! the fixed 400x560 export surface. It is a pure function: identical cards
//! always compose identical scenes, which is what makes export reproduce the
//! preview exactly.

use crate::card::{AttackSlot, Card, ImageSource};
use crate::catalog::{self, Rgb, TypeStyle};

/// Export surface width in pixels.
pub const CARD_WIDTH: u32 = 400;
/// Export surface height in pixels.
pub const CARD_HEIGHT: u32 = 560;

const MARGIN: i32 = 16;
const PANEL_FILL: Rgb = Rgb(0xfe, 0xfc, 0xe8);
const PANEL_BORDER: Rgb = Rgb(0xfe, 0xf0, 0x8a);
const INK: Rgb = Rgb(0x1f, 0x29, 0x37);
const INK_SOFT: Rgb = Rgb(0x4b, 0x55, 0x63);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Horizontal anchoring for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `x` is the left edge
    Left,
    /// `x` is the right edge
    Right,
}

/// One paint operation. Painted in order, back to front.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Vertical gradient covering a rect
    Frame { rect: Rect, stops: [Rgb; 2] },
    /// Translucent panel with a 1px border
    Panel { rect: Rect, fill: Rgb, alpha: u8, border: Rgb },
    /// Rectangle outline
    Outline { rect: Rect, color: Rgb, thickness: u32 },
    /// Category icon disc with its glyph
    Disc {
        cx: i32,
        cy: i32,
        radius: u32,
        style: &'static TypeStyle,
    },
    /// Single line of text
    Text {
        x: i32,
        y: i32,
        px: f32,
        color: Rgb,
        align: Align,
        content: String,
    },
    /// The card's main picture, scaled to cover the rect
    Image { rect: Rect, source: ImageSource },
}

/// Compose the card into its paint operations.
pub fn compose(card: &Card) -> Vec<PaintOp> {
    let mut ops = Vec::new();
    let inner_w = CARD_WIDTH as i32 - 2 * MARGIN;

    // Card frame
    ops.push(PaintOp::Frame {
        rect: Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT),
        stops: catalog::frame_for_background(&card.card_background),
    });

    // Header: name left, type disc far right, HP beside it
    let header_y = MARGIN + 14;
    let disc_r = 14;
    let disc_cx = CARD_WIDTH as i32 - MARGIN - disc_r as i32;
    ops.push(PaintOp::Text {
        x: MARGIN,
        y: header_y,
        px: 22.0,
        color: INK,
        align: Align::Left,
        content: card.name.clone(),
    });
    ops.push(PaintOp::Disc {
        cx: disc_cx,
        cy: header_y,
        radius: disc_r,
        style: catalog::style(&card.card_type),
    });
    ops.push(PaintOp::Text {
        x: disc_cx - disc_r as i32 - 8,
        y: header_y,
        px: 18.0,
        color: INK,
        align: Align::Right,
        content: format!("HP {}", card.hp),
    });

    // Main picture with frame outline
    let picture = Rect::new(MARGIN, 48, inner_w as u32, 192);
    ops.push(PaintOp::Panel {
        rect: picture,
        fill: PANEL_FILL,
        alpha: 255,
        border: PANEL_BORDER,
    });
    ops.push(PaintOp::Image {
        rect: picture,
        source: card.image.clone(),
    });
    ops.push(PaintOp::Outline {
        rect: picture,
        color: Rgb(0xca, 0x8a, 0x04),
        thickness: 3,
    });

    // Description panel, text wrapped to the panel width
    let desc = Rect::new(MARGIN, picture.bottom() + 12, inner_w as u32, 58);
    ops.push(PaintOp::Panel {
        rect: desc,
        fill: PANEL_FILL,
        alpha: 217,
        border: PANEL_BORDER,
    });
    ops.push(PaintOp::Text {
        x: desc.x + 10,
        y: desc.y + 16,
        px: 13.0,
        color: INK,
        align: Align::Left,
        content: format!("{} Pok\u{e9}mon", card.card_type),
    });
    let max_chars = ((desc.width as i32 - 20) / 6).max(1) as usize;
    for (i, line) in wrap_text(&card.description, max_chars).into_iter().take(2).enumerate() {
        ops.push(PaintOp::Text {
            x: desc.x + 10,
            y: desc.y + 32 + (i as i32) * 14,
            px: 11.0,
            color: INK_SOFT,
            align: Align::Left,
            content: line,
        });
    }

    // Attacks
    let mut attack_y = desc.bottom() + 12;
    for slot in AttackSlot::ALL {
        let attack = card.attack(slot);
        let row = Rect::new(MARGIN, attack_y, inner_w as u32, 44);
        ops.push(PaintOp::Panel {
            rect: row,
            fill: PANEL_FILL,
            alpha: 217,
            border: PANEL_BORDER,
        });
        let cy = row.y + 22;
        let mut x = row.x + 12;
        for label in &attack.cost {
            ops.push(PaintOp::Disc {
                cx: x + 10,
                cy,
                radius: 10,
                style: catalog::style(label),
            });
            x += 26;
        }
        ops.push(PaintOp::Text {
            x: x + 6,
            y: cy,
            px: 15.0,
            color: INK,
            align: Align::Left,
            content: attack.name.clone(),
        });
        ops.push(PaintOp::Text {
            x: row.right() - 12,
            y: cy,
            px: 16.0,
            color: INK,
            align: Align::Right,
            content: attack.damage.clone(),
        });
        attack_y = row.bottom() + 10;
    }

    // Footer: weakness, resistance, retreat icons
    let footer = Rect::new(
        MARGIN,
        CARD_HEIGHT as i32 - MARGIN - 40,
        inner_w as u32,
        40,
    );
    ops.push(PaintOp::Panel {
        rect: footer,
        fill: PANEL_FILL,
        alpha: 217,
        border: PANEL_BORDER,
    });
    let cy = footer.y + 20;

    ops.push(PaintOp::Text {
        x: footer.x + 10,
        y: cy,
        px: 11.0,
        color: INK_SOFT,
        align: Align::Left,
        content: "Weakness".to_string(),
    });
    ops.push(PaintOp::Disc {
        cx: footer.x + 72,
        cy,
        radius: 9,
        style: catalog::style(&card.weakness),
    });

    ops.push(PaintOp::Text {
        x: footer.x + 104,
        y: cy,
        px: 11.0,
        color: INK_SOFT,
        align: Align::Left,
        content: "Resistance".to_string(),
    });
    ops.push(PaintOp::Disc {
        cx: footer.x + 174,
        cy,
        radius: 9,
        style: catalog::style(&card.resistance),
    });

    ops.push(PaintOp::Text {
        x: footer.x + 206,
        y: cy,
        px: 11.0,
        color: INK_SOFT,
        align: Align::Left,
        content: "Retreat".to_string(),
    });
    for i in 0..card.retreat_cost {
        ops.push(PaintOp::Disc {
            cx: footer.x + 258 + (i as i32) * 22,
            cy,
            radius: 9,
            style: catalog::style("Colorless"),
        });
    }

    ops
}

/// Greedy word wrap to a character budget per line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if !cur.is_empty() && cur.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(word);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}
