//! Clinical "test result" card: symptom, cause and action boxes.

use super::{Block, Composer};
use crate::fields::CardTextFields;
use crate::primitives::{Color, TextAnchor};
use crate::spec::{CardSpec, TextStyle};

pub(super) const BACKGROUND: Color = Color::hex(0xF5F5F0);

const MARGIN: f32 = 70.0;
const BOX_HEIGHT: f32 = 110.0;
const BOX_LINES: usize = 2;
const ARROW: Color = Color::hex(0xBBBBBB);

struct Section<'t> {
    label: &'static str,
    color: Color,
    text: &'t str,
}

/// Label above a tinted box holding the first two wrapped lines. Returns
/// the y just below the box.
fn section(c: &mut Composer, s: &Section, y: f32) -> f32 {
    let max_w = c.width - 2.0 * MARGIN;
    c.text(s.label, MARGIN, y, TextStyle::bold(24.0, s.color), TextAnchor::Start);
    let top = y + 15.0;
    c.spec()
        .rounded_rect(MARGIN, top, max_w, BOX_HEIGHT, 8.0, s.color.with_opacity(0.06));
    c.paragraph(
        s.text,
        top + 42.0,
        Block::left(MARGIN + 20.0, max_w - 40.0, 44.0, TextStyle::bold(34.0, Color::hex(0x333333)))
            .max_lines(BOX_LINES),
    );
    top + BOX_HEIGHT
}

pub(super) fn layout(fields: &CardTextFields, mut c: Composer) -> CardSpec {
    let (w, h) = (c.width, c.height);
    let max_w = w - 2.0 * MARGIN;

    let mut y = 200.0;
    c.text("RESULTADO", MARGIN, y, TextStyle::bold(26.0, Color::hex(0x999999)), TextAnchor::Start);
    y += 15.0;
    c.spec().hline(MARGIN, w - MARGIN, y, Color::hex(0xDDDDDD));
    y += 50.0;

    y = c.paragraph(
        &fields.hook,
        y,
        Block::left(MARGIN, max_w, 62.0, TextStyle::heavy(48.0, Color::hex(0x1A1A1A))),
    );
    y += 50.0;

    let sections = [
        Section {
            label: "SÍNTOMA",
            color: Color::hex(0xCC3333),
            text: &fields.pain_point,
        },
        Section {
            label: "CAUSA",
            color: Color::hex(0xCC8800),
            text: &fields.explanation,
        },
        Section {
            label: "ACCIÓN",
            color: Color::hex(0x338833),
            text: &fields.action_step,
        },
    ];
    for (i, s) in sections.iter().enumerate() {
        if i > 0 {
            y += 10.0;
            c.text("↓", w / 2.0, y + 25.0, TextStyle::bold(36.0, ARROW), TextAnchor::Middle);
            y += 50.0;
        }
        y = section(&mut c, s, y);
    }

    c.text(
        &fields.call_to_action,
        MARGIN,
        (y + 80.0).max(h - 200.0),
        TextStyle::bold(28.0, ARROW),
        TextAnchor::Start,
    );
    c.watermark(fields, h - 60.0, 20.0, Color::BLACK.with_opacity(0.08));
    c.finish()
}
