use serde::{Deserialize, Serialize};

/// Point in canvas pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Color::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Same color with alpha set from a 0.0..=1.0 opacity.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Color {
            a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

/// Stroke style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Horizontal alignment of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    Bold,
    /// ExtraBold (800) in the TrueType set.
    Heavy,
}

/// Shape primitives for card rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Rect {
        origin: Point,
        width: f32,
        height: f32,
        fill: Color,
    },
    RoundedRect {
        origin: Point,
        width: f32,
        height: f32,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Color,
    },
    /// Single line of text; `position.y` is the alphabetic baseline.
    Text {
        position: Point,
        content: String,
        size: f32,
        weight: Weight,
        color: Color,
        anchor: TextAnchor,
    },
}
