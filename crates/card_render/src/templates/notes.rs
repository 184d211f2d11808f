//! Notes-app screenshot: cream ruled paper, hook as the note title.

use super::{Block, Composer};
use crate::fields::CardTextFields;
use crate::primitives::{Color, TextAnchor};
use crate::spec::{CardSpec, TextStyle};

pub(super) const BACKGROUND: Color = Color::hex(0xFFF8DC);
const STATUS_BAR: Color = Color::hex(0xF5F0D0);
const HEADER: Color = Color::hex(0xF5EFC8);
const ACCENT: Color = Color::hex(0xC7A030);

const RULE_START: f32 = 230.0;
const RULE_STEP: f32 = 52.0;
const MARGIN: f32 = 70.0;

pub(super) fn layout(fields: &CardTextFields, mut c: Composer) -> CardSpec {
    let (w, h) = (c.width, c.height);

    c.spec().rect(0.0, 0.0, w, 90.0, STATUS_BAR);
    c.text("9:41", w - 40.0, 60.0, TextStyle::bold(28.0, Color::hex(0x888888)), TextAnchor::End);

    c.spec().rect(0.0, 90.0, w, 80.0, HEADER);
    c.text("< Notas", 30.0, 142.0, TextStyle::bold(32.0, ACCENT), TextAnchor::Start);
    c.text("Listo", w - 30.0, 142.0, TextStyle::bold(28.0, ACCENT), TextAnchor::End);

    let rule = Color::rgb(200, 185, 140).with_opacity(0.3);
    let mut ry = RULE_START;
    while ry < h - 100.0 {
        c.spec().hline(60.0, w - 60.0, ry, rule);
        ry += RULE_STEP;
    }

    let max_w = w - 2.0 * MARGIN;
    let mut y = 270.0;

    y = c.paragraph(
        &fields.hook,
        y,
        Block::left(MARGIN, max_w, 60.0, TextStyle::heavy(48.0, Color::hex(0x1A1A1A))),
    );
    y += 25.0;

    y = c.paragraph(
        &fields.pain_point,
        y,
        Block::left(MARGIN, max_w, 48.0, TextStyle::bold(36.0, Color::hex(0x444444))),
    );
    y += 30.0;

    y = c.paragraph(
        &fields.explanation,
        y,
        Block::left(MARGIN, max_w, 46.0, TextStyle::bold(34.0, Color::hex(0x6B5B00))),
    );
    y += 30.0;

    if !fields.action_step.trim().is_empty() {
        y = c.paragraph(
            &format!("> {}", fields.action_step),
            y,
            Block::left(MARGIN, max_w, 46.0, TextStyle::bold(34.0, Color::hex(0x2D6A2D))),
        );
    }
    y += 50.0;

    c.text(
        &fields.call_to_action,
        MARGIN,
        y.max(h - 250.0),
        TextStyle::bold(30.0, Color::hex(0xAAAAAA)),
        TextAnchor::Start,
    );

    c.watermark(fields, h - 60.0, 22.0, Color::BLACK.with_opacity(0.12));
    c.finish()
}
