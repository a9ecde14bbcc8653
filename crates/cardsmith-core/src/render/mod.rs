//! Card rendering: deterministic scene composition plus software
//! rasterization to PNG.

mod font;
mod raster;
pub mod scene;

pub use raster::{paint, render_card, FrameBuffer};
pub use scene::{compose, Align, PaintOp, Rect, CARD_HEIGHT, CARD_WIDTH};
