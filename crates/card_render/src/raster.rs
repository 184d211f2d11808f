//! Paints a [`CardSpec`] onto an RGBA buffer and encodes it as PNG.

use crate::error::RenderError;
use crate::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::spec::CardSpec;
use crate::typeface::FontSet;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgba, RgbaImage};

/// Source-over blend of `color` at `coverage` (0..=1) onto an opaque pixel.
/// Out-of-bounds coordinates are ignored.
pub(crate) fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let sa = coverage.clamp(0.0, 1.0) * color.a as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    let inv = 1.0 - sa;
    dst.0[0] = (color.r as f32 * sa + dst.0[0] as f32 * inv).round() as u8;
    dst.0[1] = (color.g as f32 * sa + dst.0[1] as f32 * inv).round() as u8;
    dst.0[2] = (color.b as f32 * sa + dst.0[2] as f32 * inv).round() as u8;
    dst.0[3] = 255;
}

/// Whether pixel center (px, py) lies inside the rounded rectangle.
fn rounded_rect_contains(px: f32, py: f32, origin: Point, w: f32, h: f32, r: f32) -> bool {
    let (x, y) = (px - origin.x, py - origin.y);
    if x < 0.0 || y < 0.0 || x > w || y > h {
        return false;
    }
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    if (x >= r && x <= w - r) || (y >= r && y <= h - r) {
        return true;
    }
    let cx = if x < r { r } else { w - r };
    let cy = if y < r { r } else { h - r };
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= r * r
}

/// Integer pixel range whose centers fall in [lo, hi).
fn span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<i32> {
    let start = (lo - 0.5).ceil().max(0.0) as i32;
    let end = ((hi - 0.5).ceil() as i32).min(limit as i32);
    start..end.max(start)
}

pub struct Rasterizer<'a> {
    fonts: &'a FontSet,
}

impl<'a> Rasterizer<'a> {
    pub fn new(fonts: &'a FontSet) -> Self {
        Self { fonts }
    }

    pub fn rasterize(&self, spec: &CardSpec) -> Result<RgbaImage, RenderError> {
        if spec.width == 0 || spec.height == 0 {
            return Err(RenderError::EmptyCanvas {
                width: spec.width,
                height: spec.height,
            });
        }
        let bg = spec.background;
        let mut canvas =
            RgbaImage::from_pixel(spec.width, spec.height, Rgba([bg.r, bg.g, bg.b, 255]));
        for shape in &spec.shapes {
            self.paint(&mut canvas, shape);
        }
        Ok(canvas)
    }

    fn paint(&self, canvas: &mut RgbaImage, shape: &Shape) {
        match shape {
            Shape::Rect {
                origin,
                width,
                height,
                fill,
            } => fill_rect(canvas, *origin, *width, *height, *fill),
            Shape::RoundedRect {
                origin,
                width,
                height,
                radius,
                fill,
                stroke,
            } => {
                if let Some(fill) = fill {
                    fill_rounded(canvas, *origin, *width, *height, *radius, *fill);
                }
                if let Some(stroke) = stroke {
                    stroke_rounded(canvas, *origin, *width, *height, *radius, stroke);
                }
            }
            Shape::Line { from, to, stroke } => draw_line(canvas, *from, *to, stroke),
            Shape::Circle {
                center,
                radius,
                fill,
            } => fill_circle(canvas, *center, *radius, *fill),
            Shape::Text {
                position,
                content,
                size,
                weight,
                color,
                anchor,
            } => {
                let face = self.fonts.face(*weight);
                let x = match anchor {
                    TextAnchor::Start => position.x,
                    TextAnchor::Middle => position.x - face.measure(content, *size) / 2.0,
                    TextAnchor::End => position.x - face.measure(content, *size),
                };
                face.draw(canvas, content, x, position.y, *size, *color);
            }
        }
    }
}

fn fill_rect(canvas: &mut RgbaImage, origin: Point, w: f32, h: f32, fill: Color) {
    for py in span(origin.y, origin.y + h, canvas.height()) {
        for px in span(origin.x, origin.x + w, canvas.width()) {
            blend_pixel(canvas, px, py, fill, 1.0);
        }
    }
}

fn fill_rounded(canvas: &mut RgbaImage, origin: Point, w: f32, h: f32, r: f32, fill: Color) {
    for py in span(origin.y, origin.y + h, canvas.height()) {
        for px in span(origin.x, origin.x + w, canvas.width()) {
            if rounded_rect_contains(px as f32 + 0.5, py as f32 + 0.5, origin, w, h, r) {
                blend_pixel(canvas, px, py, fill, 1.0);
            }
        }
    }
}

/// Band of `stroke.width` centered on the outline.
fn stroke_rounded(
    canvas: &mut RgbaImage,
    origin: Point,
    w: f32,
    h: f32,
    r: f32,
    stroke: &Stroke,
) {
    let half = stroke.width / 2.0;
    let outer = Point::new(origin.x - half, origin.y - half);
    let inner = Point::new(origin.x + half, origin.y + half);
    for py in span(outer.y, outer.y + h + stroke.width, canvas.height()) {
        for px in span(outer.x, outer.x + w + stroke.width, canvas.width()) {
            let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
            let (ow, oh) = (w + stroke.width, h + stroke.width);
            let (iw, ih) = (w - stroke.width, h - stroke.width);
            let in_outer = rounded_rect_contains(cx, cy, outer, ow, oh, r + half);
            let in_inner = rounded_rect_contains(cx, cy, inner, iw, ih, (r - half).max(0.0));
            if in_outer && !in_inner {
                blend_pixel(canvas, px, py, stroke.color, 1.0);
            }
        }
    }
}

fn fill_circle(canvas: &mut RgbaImage, center: Point, r: f32, fill: Color) {
    for py in span(center.y - r, center.y + r, canvas.height()) {
        for px in span(center.x - r, center.x + r, canvas.width()) {
            let dx = px as f32 + 0.5 - center.x;
            let dy = py as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= r * r {
                blend_pixel(canvas, px, py, fill, 1.0);
            }
        }
    }
}

/// Pixels whose center lies within `width / 2` of the segment.
fn draw_line(canvas: &mut RgbaImage, from: Point, to: Point, stroke: &Stroke) {
    let half = (stroke.width / 2.0).max(0.5);
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len2 = dx * dx + dy * dy;
    let x_range = span(from.x.min(to.x) - half, from.x.max(to.x) + half, canvas.width());
    for py in span(from.y.min(to.y) - half, from.y.max(to.y) + half, canvas.height()) {
        for px in x_range.clone() {
            let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
            let t = if len2 > 0.0 {
                (((cx - from.x) * dx + (cy - from.y) * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (nx, ny) = (from.x + t * dx - cx, from.y + t * dy - cy);
            if nx * nx + ny * ny <= half * half {
                blend_pixel(canvas, px, py, stroke.color, 1.0);
            }
        }
    }
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
    )?;
    Ok(buf)
}
