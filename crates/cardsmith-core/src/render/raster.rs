//! Software rasterizer for card export.
//!
//! Paints a composed scene into a pixel buffer and encodes PNG bytes. No GPU,
//! no toolkit: plain pixel pushing plus fontdue for glyph coverage.

use std::io::Cursor;

use fontdue::Font;
use image::{imageops::FilterType, GenericImageView, ImageFormat, RgbaImage};

use crate::card::{Card, ImageSource};
use crate::catalog::Rgb;
use crate::error::{CardError, CardResult};

use super::font::load_system_font;
use super::scene::{self, Align, PaintOp, Rect, CARD_HEIGHT, CARD_WIDTH};

/// Rasterize a card to PNG bytes at the fixed export size.
///
/// Fails without producing partial output when no system font exists, when
/// the card image cannot be decoded, or when the image source would need a
/// network fetch to read pixel data.
pub fn render_card(card: &Card) -> CardResult<Vec<u8>> {
    let font = load_system_font()?;
    let ops = scene::compose(card);
    let fb = paint(&ops, &font)?;
    fb.into_png()
}

/// RGB pixel buffer, one `u32` per pixel as `0xRRGGBB`.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFFFFFF; width * height],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Blend a pixel with 0-255 coverage.
    fn blend_pixel(&mut self, x: i32, y: i32, color: u32, alpha: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let t = alpha as f32 / 255.0;
        self.pixels[idx] = lerp_color(self.pixels[idx], color, t);
    }

    fn fill_rect(&mut self, rect: Rect, color: u32, alpha: u8) {
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = (rect.right().min(self.width as i32)).max(0) as usize;
        let y1 = (rect.bottom().min(self.height as i32)).max(0) as usize;
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = py * self.width + px;
                self.pixels[idx] = if alpha == 255 {
                    color
                } else {
                    lerp_color(self.pixels[idx], color, alpha as f32 / 255.0)
                };
            }
        }
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: u32, thickness: u32) {
        let t = thickness;
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), color, 255);
        self.fill_rect(
            Rect::new(rect.x, rect.bottom() - t as i32, rect.width, t),
            color,
            255,
        );
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height), color, 255);
        self.fill_rect(
            Rect::new(rect.right() - t as i32, rect.y, t, rect.height),
            color,
            255,
        );
    }

    /// Vertical gradient between two stops.
    fn fill_gradient(&mut self, rect: Rect, top: u32, bottom: u32) {
        let y0 = rect.y.max(0);
        let y1 = rect.bottom().min(self.height as i32);
        let span = (rect.height.max(1) - 1).max(1) as f32;
        for py in y0..y1 {
            let t = (py - rect.y) as f32 / span;
            let color = lerp_color(top, bottom, t);
            self.fill_rect(Rect::new(rect.x, py, rect.width, 1), color, 255);
        }
    }

    /// Filled disc with a one-pixel soft edge and a thin ring.
    fn fill_disc(&mut self, cx: i32, cy: i32, radius: u32, fill: u32, ring: u32) {
        let r = radius as f32;
        let ring_inner = r - 1.8;
        let reach = radius as i32 + 1;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                if dist > r + 0.5 {
                    continue;
                }
                let color = if dist >= ring_inner { ring } else { fill };
                // soft outer edge
                let coverage = ((r + 0.5 - dist).min(1.0) * 255.0) as u8;
                self.blend_pixel(cx + dx, cy + dy, color, coverage);
            }
        }
    }

    /// Draw one line of text. `y` is the vertical center of the line.
    fn draw_text(&mut self, font: &Font, x: i32, y: i32, px: f32, color: u32, align: Align, text: &str) {
        let start_x = match align {
            Align::Left => x,
            Align::Right => x - text_width(font, px, text) as i32,
        };
        let baseline = y + (px * 0.36) as i32;
        let mut pen = start_x as f32;
        for ch in text.chars() {
            let (metrics, coverage) = font.rasterize(ch, px);
            let gx = pen as i32 + metrics.xmin;
            let gy = baseline - metrics.ymin - metrics.height as i32;
            for (i, &alpha) in coverage.iter().enumerate() {
                if alpha == 0 {
                    continue;
                }
                let dx = (i % metrics.width) as i32;
                let dy = (i / metrics.width) as i32;
                self.blend_pixel(gx + dx, gy + dy, color, alpha);
            }
            pen += metrics.advance_width;
        }
    }

    /// Copy decoded image pixels, scaled to cover the rect.
    fn draw_image(&mut self, rect: Rect, img: &image::DynamicImage) {
        let scaled = img.resize_to_fill(rect.width, rect.height, FilterType::Triangle);
        for (px, py, pixel) in scaled.pixels() {
            let [r, g, b, a] = pixel.0;
            self.blend_pixel(
                rect.x + px as i32,
                rect.y + py as i32,
                pack(Rgb(r, g, b)),
                a,
            );
        }
    }

    /// Encode the buffer as PNG bytes.
    pub fn into_png(self) -> CardResult<Vec<u8>> {
        let mut img = RgbaImage::new(self.width as u32, self.height as u32);
        for (i, &pixel) in self.pixels.iter().enumerate() {
            let x = (i % self.width) as u32;
            let y = (i / self.width) as u32;
            img.put_pixel(
                x,
                y,
                image::Rgba([
                    ((pixel >> 16) & 0xFF) as u8,
                    ((pixel >> 8) & 0xFF) as u8,
                    (pixel & 0xFF) as u8,
                    255,
                ]),
            );
        }
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }
}

/// Paint a scene into a fresh card-sized buffer.
pub fn paint(ops: &[PaintOp], font: &Font) -> CardResult<FrameBuffer> {
    let mut fb = FrameBuffer::new(CARD_WIDTH as usize, CARD_HEIGHT as usize);
    for op in ops {
        match op {
            PaintOp::Frame { rect, stops } => {
                fb.fill_gradient(*rect, pack(stops[0]), pack(stops[1]));
            }
            PaintOp::Panel { rect, fill, alpha, border } => {
                fb.fill_rect(*rect, pack(*fill), *alpha);
                fb.draw_rect_outline(*rect, pack(*border), 1);
            }
            PaintOp::Outline { rect, color, thickness } => {
                fb.draw_rect_outline(*rect, pack(*color), *thickness);
            }
            PaintOp::Disc { cx, cy, radius, style } => {
                fb.fill_disc(*cx, *cy, *radius, pack(style.icon_fill), pack(style.icon_ink));
                let glyph_px = *radius as f32 * 1.1;
                fb.draw_text(
                    font,
                    *cx - (glyph_px * 0.32) as i32,
                    *cy,
                    glyph_px,
                    pack(style.icon_ink),
                    Align::Left,
                    &style.glyph.to_string(),
                );
            }
            PaintOp::Text { x, y, px, color, align, content } => {
                fb.draw_text(font, *x, *y, *px, pack(*color), *align, content);
            }
            PaintOp::Image { rect, source } => {
                if let Some(img) = decode_source(source)? {
                    fb.draw_image(*rect, &img);
                }
            }
        }
    }
    Ok(fb)
}

/// Decode an image source into pixels, or `None` when there is nothing to draw.
fn decode_source(source: &ImageSource) -> CardResult<Option<image::DynamicImage>> {
    if !source.is_available() {
        return Ok(None);
    }
    if source.is_network() {
        // Pixel data behind a URL cannot be read without a network fetch
        return Err(CardError::Unrasterizable(source.as_src()));
    }
    let bytes = match source {
        ImageSource::Embedded { data, .. } => data.clone(),
        ImageSource::Remote(path) => std::fs::read(path)
            .map_err(|e| CardError::Unrasterizable(format!("{path}: {e}")))?,
    };
    Ok(Some(image::load_from_memory(&bytes)?))
}

fn pack(color: Rgb) -> u32 {
    ((color.0 as u32) << 16) | ((color.1 as u32) << 8) | color.2 as u32
}

fn lerp_color(c1: u32, c2: u32, t: f32) -> u32 {
    let r1 = ((c1 >> 16) & 0xFF) as f32;
    let g1 = ((c1 >> 8) & 0xFF) as f32;
    let b1 = (c1 & 0xFF) as f32;
    let r2 = ((c2 >> 16) & 0xFF) as f32;
    let g2 = ((c2 >> 8) & 0xFF) as f32;
    let b2 = (c2 & 0xFF) as f32;
    let r = (r1 + (r2 - r1) * t).round().clamp(0.0, 255.0) as u32;
    let g = (g1 + (g2 - g1) * t).round().clamp(0.0, 255.0) as u32;
    let b = (b1 + (b2 - b1) * t).round().clamp(0.0, 255.0) as u32;
    (r << 16) | (g << 8) | b
}

fn text_width(font: &Font, px: f32, text: &str) -> f32 {
    text.chars()
        .map(|ch| font.metrics(ch, px).advance_width)
        .sum()
}
