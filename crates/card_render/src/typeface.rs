//! Glyph sources for measuring and painting text.

use crate::error::RenderError;
use crate::primitives::{Color, Weight};
use crate::raster::blend_pixel;
use image::RgbaImage;
use rusttype::{point, Font, Scale};
use std::path::Path;

/// Something that can measure and paint a single line of text.
pub trait Typeface: Send + Sync {
    /// Advance width of `text` at `size` px.
    fn measure(&self, text: &str, size: f32) -> f32;

    /// Paint `text` starting at `x` with its alphabetic baseline at `baseline`.
    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        baseline: f32,
        size: f32,
        color: Color,
    );
}

/// TrueType face backed by `rusttype`.
pub struct TtfTypeface {
    font: Font<'static>,
}

impl TtfTypeface {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RenderError> {
        let font = Font::try_from_vec(data)
            .ok_or_else(|| RenderError::InvalidFont("not a TrueType/OpenType font".to_string()))?;
        Ok(Self { font })
    }

    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path).map_err(|source| RenderError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded font {} ({} bytes)", path.display(), data.len());
        Self::from_bytes(data)
    }
}

impl Typeface for TtfTypeface {
    fn measure(&self, text: &str, size: f32) -> f32 {
        let scale = Scale::uniform(size);
        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            let glyph = self.font.glyph(ch).scaled(scale);
            if let Some(prev_id) = prev {
                width += self.font.pair_kerning(scale, prev_id, glyph.id());
            }
            width += glyph.h_metrics().advance_width;
            prev = Some(glyph.id());
        }
        width
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        baseline: f32,
        size: f32,
        color: Color,
    ) {
        let scale = Scale::uniform(size);
        for glyph in self.font.layout(text, scale, point(x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                blend_pixel(canvas, px, py, color, v);
            });
        }
    }
}

/// Built-in face that paints each visible character as a solid block on a
/// fixed advance. Needs no font files, so layouts render anywhere.
#[derive(Debug, Clone, Copy)]
pub struct BlockTypeface {
    /// Advance per character as a fraction of the font size.
    pub advance: f32,
    /// Block height as a fraction of the font size.
    pub cap_height: f32,
}

impl Default for BlockTypeface {
    fn default() -> Self {
        Self {
            advance: 0.6,
            cap_height: 0.7,
        }
    }
}

impl Typeface for BlockTypeface {
    fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance * size
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        baseline: f32,
        size: f32,
        color: Color,
    ) {
        let step = self.advance * size;
        let block_w = (step * 0.8).max(1.0);
        let top = baseline - self.cap_height * size;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = x + i as f32 * step;
            for py in top.round() as i32..baseline.round() as i32 {
                for px in left.round() as i32..(left + block_w).round() as i32 {
                    blend_pixel(canvas, px, py, color, 1.0);
                }
            }
        }
    }
}

/// One face per weight.
pub struct FontSet {
    bold: Box<dyn Typeface>,
    heavy: Box<dyn Typeface>,
}

impl FontSet {
    pub fn new(bold: Box<dyn Typeface>, heavy: Box<dyn Typeface>) -> Self {
        Self { bold, heavy }
    }

    /// Block faces for both weights; heavy text gets a wider advance.
    pub fn builtin() -> Self {
        Self::new(
            Box::new(BlockTypeface::default()),
            Box::new(BlockTypeface {
                advance: 0.66,
                ..BlockTypeface::default()
            }),
        )
    }

    pub fn from_files(bold: &Path, heavy: &Path) -> Result<Self, RenderError> {
        Ok(Self::new(
            Box::new(TtfTypeface::from_file(bold)?),
            Box::new(TtfTypeface::from_file(heavy)?),
        ))
    }

    pub fn face(&self, weight: Weight) -> &dyn Typeface {
        match weight {
            Weight::Bold => self.bold.as_ref(),
            Weight::Heavy => self.heavy.as_ref(),
        }
    }

    pub fn measure(&self, weight: Weight, text: &str, size: f32) -> f32 {
        self.face(weight).measure(text, size)
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::builtin()
    }
}
