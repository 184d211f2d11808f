//! Messaging-app thread. The conversation order is fixed: pain (left),
//! hook (right), explanation (left), action (right), CTA (left).

use super::Composer;
use crate::fields::CardTextFields;
use crate::primitives::{Color, TextAnchor};
use crate::spec::{CardSpec, TextStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

pub(super) const BACKGROUND: Color = Color::hex(0x0B141A);
const BAR: Color = Color::hex(0x1F2C34);
const FIELD: Color = Color::hex(0x2A3942);
const MUTED: Color = Color::hex(0x8696A0);
const TEXT: Color = Color::hex(0xE9EDEF);
const SENT: Color = Color::hex(0x005C4B);

const WALLPAPER_DOTS: usize = 200;
const BUBBLE_TEXT: TextStyle = TextStyle::bold(32.0, TEXT);
const BUBBLE_LINE: f32 = 42.0;
pub(crate) const BUBBLE_PADDING_Y: f32 = 45.0;
pub(crate) const BUBBLE_PADDING_X: f32 = 60.0;
const BUBBLE_RADIUS: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Message text, side and timestamp in display order.
pub(crate) fn thread(fields: &CardTextFields) -> [(&str, Side, &'static str); 5] {
    [
        (fields.pain_point.as_str(), Side::Left, "3:42 PM"),
        (fields.hook.as_str(), Side::Right, "3:43 PM"),
        (fields.explanation.as_str(), Side::Left, "3:43 PM"),
        (fields.action_step.as_str(), Side::Right, "3:44 PM"),
        (fields.call_to_action.as_str(), Side::Left, "3:44 PM"),
    ]
}

/// Seed for the wallpaper dots, derived from the card text so identical
/// fields always give identical images.
fn wallpaper_seed(fields: &CardTextFields) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in [
        &fields.hook,
        &fields.pain_point,
        &fields.explanation,
        &fields.action_step,
        &fields.call_to_action,
        &fields.watermark_text,
    ] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&hasher.finalize());
    seed
}

fn bubble(c: &mut Composer, text: &str, side: Side, time: &str, y: f32) -> f32 {
    let max_bubble_w = c.width - 250.0;
    let lines = c.wrap(BUBBLE_TEXT, text, max_bubble_w - 50.0);
    let widest = lines
        .iter()
        .map(|l| c.measure(BUBBLE_TEXT, l))
        .fold(0.0, f32::max);
    let bubble_h = lines.len() as f32 * BUBBLE_LINE + BUBBLE_PADDING_Y;
    let bubble_w = max_bubble_w.min(widest + BUBBLE_PADDING_X);

    let (bx, fill) = match side {
        Side::Right => (c.width - 50.0 - bubble_w, SENT),
        Side::Left => (50.0, BAR),
    };
    c.spec()
        .rounded_rect(bx, y, bubble_w, bubble_h, BUBBLE_RADIUS, fill);

    let mut ty = y + 38.0;
    for line in &lines {
        c.text(line, bx + 20.0, ty, BUBBLE_TEXT, TextAnchor::Start);
        ty += BUBBLE_LINE;
    }
    c.text(
        time,
        bx + bubble_w - 15.0,
        y + bubble_h - 12.0,
        TextStyle::bold(20.0, Color::WHITE.with_opacity(0.4)),
        TextAnchor::End,
    );
    y + bubble_h + 18.0
}

pub(super) fn layout(fields: &CardTextFields, mut c: Composer) -> CardSpec {
    let (w, h) = (c.width, c.height);

    let dot = Color::WHITE.with_opacity(0.02);
    let mut rng = ChaCha20Rng::from_seed(wallpaper_seed(fields));
    for _ in 0..WALLPAPER_DOTS {
        let x = rng.gen::<f32>() * w;
        let y = rng.gen::<f32>() * h;
        c.spec().rect(x, y, 2.0, 2.0, dot);
    }

    c.spec().rect(0.0, 0.0, w, 130.0, BAR);
    c.spec().circle(75.0, 65.0, 28.0, FIELD);
    c.text("★", 75.0, 73.0, TextStyle::bold(24.0, MUTED), TextAnchor::Middle);
    c.text("tu mejor amiga", 120.0, 58.0, TextStyle::bold(34.0, TEXT), TextAnchor::Start);
    c.text("en línea", 120.0, 92.0, TextStyle::bold(24.0, MUTED), TextAnchor::Start);
    c.text("3:42 PM", w - 30.0, 45.0, TextStyle::bold(24.0, MUTED), TextAnchor::End);

    let mut y = 200.0;
    let mut first = true;
    for (text, side, time) in thread(fields) {
        if text.trim().is_empty() {
            continue;
        }
        if !first {
            y += 8.0;
        }
        y = bubble(&mut c, text, side, time, y);
        first = false;
    }

    c.spec().rect(0.0, h - 100.0, w, 100.0, BAR);
    c.spec()
        .rounded_rect(20.0, h - 85.0, w - 120.0, 65.0, 30.0, FIELD);
    c.text("Mensaje", 50.0, h - 44.0, TextStyle::bold(28.0, MUTED), TextAnchor::Start);
    c.spec().circle(w - 55.0, h - 52.0, 28.0, Color::hex(0x00A884));

    c.watermark(fields, h - 115.0, 20.0, Color::WHITE.with_opacity(0.08));
    c.finish()
}
