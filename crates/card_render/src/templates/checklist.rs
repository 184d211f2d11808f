//! Dark to-do list with a fixed checked/unchecked pattern.

use super::{Block, Composer};
use crate::fields::CardTextFields;
use crate::primitives::{Color, TextAnchor};
use crate::spec::{CardSpec, TextStyle};

pub(super) const BACKGROUND: Color = Color::hex(0x111111);

const MARGIN: f32 = 80.0;
const CHECKED: Color = Color::hex(0x4CAF50);

/// Applied by position; slots past the pattern are unchecked.
pub(crate) const CHECK_PATTERN: [bool; 5] = [true, true, false, true, false];

pub(crate) const MAX_EXTRA_ITEMS: usize = 2;

/// Items in slot order: pain, explanation, action, then up to two on-screen
/// lines. Blank slots stay in the list so the pattern keeps its positions.
pub(crate) fn items(fields: &CardTextFields) -> Vec<&str> {
    let mut items = vec![
        fields.pain_point.as_str(),
        fields.explanation.as_str(),
        fields.action_step.as_str(),
    ];
    items.extend(fields.extra_lines().take(MAX_EXTRA_ITEMS));
    items
}

pub(super) fn layout(fields: &CardTextFields, mut c: Composer) -> CardSpec {
    let (w, h) = (c.width, c.height);
    let max_w = w - 2.0 * MARGIN;

    let mut y = c.paragraph(
        &fields.hook,
        300.0,
        Block::left(MARGIN, max_w, 64.0, TextStyle::heavy(50.0, Color::WHITE)),
    );

    y += 20.0;
    c.spec().hline(MARGIN, w - MARGIN, y, Color::WHITE.with_opacity(0.15));
    y += 45.0;

    for (i, item) in items(fields).into_iter().enumerate() {
        if item.trim().is_empty() {
            continue;
        }
        let checked = CHECK_PATTERN.get(i).copied().unwrap_or(false);
        let (mark, mark_color, text_color) = if checked {
            ("✓", CHECKED, Color::WHITE)
        } else {
            ("☐", Color::WHITE.with_opacity(0.3), Color::WHITE.with_opacity(0.5))
        };
        c.text(mark, MARGIN, y, TextStyle::bold(38.0, mark_color), TextAnchor::Start);
        y = c.paragraph(
            item,
            y,
            Block::left(MARGIN + 55.0, max_w - 60.0, 46.0, TextStyle::bold(34.0, text_color)),
        );
        y += 28.0;
    }

    c.text(
        &fields.call_to_action,
        MARGIN,
        (y + 60.0).max(h - 220.0),
        TextStyle::bold(28.0, Color::WHITE.with_opacity(0.3)),
        TextAnchor::Start,
    );
    c.watermark(fields, h - 60.0, 20.0, Color::WHITE.with_opacity(0.08));
    c.finish()
}
