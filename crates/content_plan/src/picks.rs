//! Randomised choices for a day's posts. The generator is injected so a
//! seeded plan can be replayed.

use crate::types::{ContentType, Topic};
use rand::seq::SliceRandom;
use rand::Rng;
use selene::DailyAstroContext;

pub const POSTS_PER_DAY: usize = 4;

pub const CTA_VARIANTS: [&str; 4] = [
    "🔮 Descubre más en natala.online",
    "✨ Pregúntale a Luna → natala.online",
    "🌙 Tu lectura personalizada te espera en natala.online",
    "💫 natala.online — tu guía espiritual",
];

/// Four distinct content types. `FaseLunar` is always present, `Transitos`
/// whenever a retrograde is active; the rest come from a shuffled pool and
/// the final order is shuffled too.
pub fn pick_daily_content<R: Rng + ?Sized>(ctx: &DailyAstroContext, rng: &mut R) -> Vec<ContentType> {
    let mut picks = vec![ContentType::FaseLunar];
    let mut pool: Vec<ContentType> = ContentType::ALL
        .into_iter()
        .filter(|t| *t != ContentType::FaseLunar)
        .collect();

    if ctx.has_retrogrades() {
        picks.push(ContentType::Transitos);
        pool.retain(|t| *t != ContentType::Transitos);
    }

    pool.shuffle(rng);
    let missing = POSTS_PER_DAY - picks.len();
    picks.extend(pool.into_iter().take(missing));
    picks.shuffle(rng);
    picks
}

/// amor 60%, dinero 30%, salud y propósito 10%.
pub fn pick_topic<R: Rng + ?Sized>(rng: &mut R) -> Topic {
    let r: f64 = rng.gen();
    if r < 0.6 {
        Topic::Amor
    } else if r < 0.9 {
        Topic::Dinero
    } else {
        Topic::SaludYProposito
    }
}

pub fn pick_cta<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CTA_VARIANTS[rng.gen_range(0..CTA_VARIANTS.len())]
}

/// Half of the posts carry a call to action.
pub fn maybe_cta<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static str> {
    if rng.gen_bool(0.5) {
        Some(pick_cta(rng))
    } else {
        None
    }
}
