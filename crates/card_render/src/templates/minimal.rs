//! One bold statement on black.

use super::{Block, Composer};
use crate::fields::CardTextFields;
use crate::primitives::{Color, TextAnchor};
use crate::spec::{CardSpec, TextStyle};

pub(super) const BACKGROUND: Color = Color::BLACK;

const HOOK_LINE: f32 = 85.0;

pub(super) fn layout(fields: &CardTextFields, mut c: Composer) -> CardSpec {
    let (w, h) = (c.width, c.height);
    let cx = w / 2.0;

    let hook_style = TextStyle::heavy(68.0, Color::WHITE);
    let hook_lines = c.wrap(hook_style, &fields.hook, w - 160.0).len();
    let mut y = h / 2.0 - (hook_lines as f32 * HOOK_LINE) / 2.0 + 30.0;
    y = c.paragraph(&fields.hook, y, Block::centered(cx, w - 160.0, HOOK_LINE, hook_style));

    y += 30.0;
    c.paragraph(
        &fields.pain_point,
        y,
        Block::centered(cx, w - 200.0, 46.0, TextStyle::bold(34.0, Color::WHITE.with_opacity(0.45))),
    );

    c.text(
        &fields.call_to_action,
        cx,
        h - 150.0,
        TextStyle::bold(26.0, Color::WHITE.with_opacity(0.2)),
        TextAnchor::Middle,
    );
    c.watermark(fields, h - 60.0, 20.0, Color::WHITE.with_opacity(0.06));
    c.finish()
}
