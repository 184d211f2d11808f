use crate::primitives::{Color, Point, Shape, Stroke, TextAnchor, Weight};
use serde::{Deserialize, Serialize};

/// Card specification - declarative description of one card to rasterize.
/// Shapes are painted in order over the background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub shapes: Vec<Shape>,
}

impl CardSpec {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            shapes: Vec::new(),
        }
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Color) {
        self.shapes.push(Shape::Rect {
            origin: Point::new(x, y),
            width,
            height,
            fill,
        });
    }

    pub fn rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32, fill: Color) {
        self.shapes.push(Shape::RoundedRect {
            origin: Point::new(x, y),
            width,
            height,
            radius,
            fill: Some(fill),
            stroke: None,
        });
    }

    pub fn rounded_outline(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        stroke: Stroke,
    ) {
        self.shapes.push(Shape::RoundedRect {
            origin: Point::new(x, y),
            width,
            height,
            radius,
            fill: None,
            stroke: Some(stroke),
        });
    }

    pub fn hline(&mut self, x1: f32, x2: f32, y: f32, color: Color) {
        self.shapes.push(Shape::Line {
            from: Point::new(x1, y),
            to: Point::new(x2, y),
            stroke: Stroke { color, width: 1.0 },
        });
    }

    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32, fill: Color) {
        self.shapes.push(Shape::Circle {
            center: Point::new(cx, cy),
            radius,
            fill,
        });
    }

    /// Push a text run. Empty strings are dropped.
    pub fn text(&mut self, content: &str, x: f32, baseline: f32, style: TextStyle, anchor: TextAnchor) {
        if content.is_empty() {
            return;
        }
        self.shapes.push(Shape::Text {
            position: Point::new(x, baseline),
            content: content.to_string(),
            size: style.size,
            weight: style.weight,
            color: style.color,
            anchor,
        });
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Font size, weight and fill for a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: Weight,
    pub color: Color,
}

impl TextStyle {
    pub const fn bold(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: Weight::Bold,
            color,
        }
    }

    pub const fn heavy(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: Weight::Heavy,
            color,
        }
    }
}
