//! Pick-a-card spread: three numbered cards under the hook.

use super::{Block, Composer};
use crate::fields::CardTextFields;
use crate::primitives::{Color, Stroke, TextAnchor};
use crate::spec::{CardSpec, TextStyle};

pub(super) const BACKGROUND: Color = Color::hex(0x1A1520);
const INK: Color = Color::rgb(232, 221, 208);

pub(crate) const CARD_WIDTH: f32 = 280.0;
pub(crate) const CARD_HEIGHT: f32 = 420.0;
const CARD_GAP: f32 = 30.0;
const CARD_RADIUS: f32 = 14.0;
pub(crate) const CARD_LINES: usize = 5;
const CARD_FILLS: [Color; 3] = [Color::hex(0x2A2235), Color::hex(0x252030), Color::hex(0x2A2235)];

pub(super) fn layout(fields: &CardTextFields, mut c: Composer) -> CardSpec {
    let (w, h) = (c.width, c.height);
    let cx = w / 2.0;

    let mut y = c.paragraph(
        &fields.hook,
        280.0,
        Block::centered(cx, w - 140.0, 60.0, TextStyle::heavy(46.0, INK)),
    );

    y += 20.0;
    c.text(
        "Elige 1, 2 o 3",
        cx,
        y,
        TextStyle::bold(30.0, INK.with_opacity(0.5)),
        TextAnchor::Middle,
    );
    y += 70.0;

    let start_x = (w - (CARD_WIDTH * 3.0 + CARD_GAP * 2.0)) / 2.0;
    let texts = [&fields.pain_point, &fields.explanation, &fields.action_step];
    let border = Stroke {
        color: INK.with_opacity(0.15),
        width: 1.0,
    };

    for (i, text) in texts.iter().enumerate() {
        let x = start_x + i as f32 * (CARD_WIDTH + CARD_GAP);
        let mid = x + CARD_WIDTH / 2.0;
        c.spec()
            .rounded_rect(x, y, CARD_WIDTH, CARD_HEIGHT, CARD_RADIUS, CARD_FILLS[i]);
        c.spec()
            .rounded_outline(x, y, CARD_WIDTH, CARD_HEIGHT, CARD_RADIUS, border);
        c.text(
            &(i + 1).to_string(),
            mid,
            y + 80.0,
            TextStyle::heavy(72.0, INK.with_opacity(0.25)),
            TextAnchor::Middle,
        );
        c.paragraph(
            text,
            y + 140.0,
            Block::centered(mid, CARD_WIDTH - 40.0, 38.0, TextStyle::bold(28.0, INK))
                .max_lines(CARD_LINES),
        );
    }

    c.text(
        &fields.call_to_action,
        cx,
        y + CARD_HEIGHT + 70.0,
        TextStyle::bold(28.0, INK.with_opacity(0.35)),
        TextAnchor::Middle,
    );
    c.watermark(fields, h - 60.0, 20.0, Color::WHITE.with_opacity(0.06));
    c.finish()
}
