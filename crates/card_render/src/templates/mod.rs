//! Card layouts. Each template turns [`CardTextFields`] into a [`CardSpec`]
//! using absolute coordinates on the requested canvas.

mod chat;
mod checklist;
mod diagnostico;
mod minimal;
mod notes;
mod tarot;

use crate::fields::{CanvasSize, CardTextFields, VisualFormat};
use crate::primitives::{Color, TextAnchor};
use crate::spec::{CardSpec, TextStyle};
use crate::typeface::FontSet;
use crate::wrap::wrap_text;

pub fn layout(
    format: VisualFormat,
    fields: &CardTextFields,
    canvas: CanvasSize,
    fonts: &FontSet,
) -> CardSpec {
    log::debug!(
        "Laying out {} card at {}x{}",
        format,
        canvas.width,
        canvas.height
    );
    match format {
        VisualFormat::Notes => notes::layout(fields, Composer::new(canvas, fonts, notes::BACKGROUND)),
        VisualFormat::Chat => chat::layout(fields, Composer::new(canvas, fonts, chat::BACKGROUND)),
        VisualFormat::Checklist => {
            checklist::layout(fields, Composer::new(canvas, fonts, checklist::BACKGROUND))
        }
        VisualFormat::Diagnostico => {
            diagnostico::layout(fields, Composer::new(canvas, fonts, diagnostico::BACKGROUND))
        }
        VisualFormat::Minimal => {
            minimal::layout(fields, Composer::new(canvas, fonts, minimal::BACKGROUND))
        }
        VisualFormat::Tarot => tarot::layout(fields, Composer::new(canvas, fonts, tarot::BACKGROUND)),
    }
}

/// Where and how a wrapped paragraph is drawn.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Block {
    x: f32,
    max_width: f32,
    line_height: f32,
    style: TextStyle,
    anchor: TextAnchor,
    max_lines: usize,
}

impl Block {
    pub(crate) fn left(x: f32, max_width: f32, line_height: f32, style: TextStyle) -> Self {
        Self {
            x,
            max_width,
            line_height,
            style,
            anchor: TextAnchor::Start,
            max_lines: usize::MAX,
        }
    }

    pub(crate) fn centered(x: f32, max_width: f32, line_height: f32, style: TextStyle) -> Self {
        Self {
            anchor: TextAnchor::Middle,
            ..Self::left(x, max_width, line_height, style)
        }
    }

    pub(crate) fn max_lines(self, max_lines: usize) -> Self {
        Self { max_lines, ..self }
    }
}

/// Shared drawing state for one layout pass.
pub(crate) struct Composer<'a> {
    spec: CardSpec,
    fonts: &'a FontSet,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl<'a> Composer<'a> {
    fn new(canvas: CanvasSize, fonts: &'a FontSet, background: Color) -> Self {
        Self {
            spec: CardSpec::new(canvas.width, canvas.height, background),
            fonts,
            width: canvas.width as f32,
            height: canvas.height as f32,
        }
    }

    pub(crate) fn spec(&mut self) -> &mut CardSpec {
        &mut self.spec
    }

    pub(crate) fn measure(&self, style: TextStyle, text: &str) -> f32 {
        self.fonts.measure(style.weight, text, style.size)
    }

    /// Wrapped lines; blank text yields none.
    pub(crate) fn wrap(&self, style: TextStyle, text: &str, max_width: f32) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        wrap_text(|s| self.measure(style, s), text, max_width)
    }

    pub(crate) fn text(
        &mut self,
        content: &str,
        x: f32,
        baseline: f32,
        style: TextStyle,
        anchor: TextAnchor,
    ) {
        self.spec.text(content, x, baseline, style, anchor);
    }

    /// Draw `text` wrapped per `block` with the first baseline at `y`.
    /// Returns `y` advanced by one line height per line drawn.
    pub(crate) fn paragraph(&mut self, text: &str, y: f32, block: Block) -> f32 {
        let mut y = y;
        let lines = self.wrap(block.style, text, block.max_width);
        for line in lines.iter().take(block.max_lines) {
            self.spec.text(line, block.x, y, block.style, block.anchor);
            y += block.line_height;
        }
        y
    }

    pub(crate) fn watermark(
        &mut self,
        fields: &CardTextFields,
        baseline: f32,
        size: f32,
        color: Color,
    ) {
        let x = self.width / 2.0;
        self.spec.text(
            &fields.watermark_text,
            x,
            baseline,
            TextStyle::bold(size, color),
            TextAnchor::Middle,
        );
    }

    pub(crate) fn finish(self) -> CardSpec {
        self.spec
    }
}
