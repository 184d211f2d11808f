//! Uniform picks over the static tables. Callers supply the generator so
//! results can be reproduced from a seed.

use crate::tarot::{TarotCard, MAJOR_ARCANA};
use crate::zodiac::{ZodiacSign, ZODIAC};
use rand::Rng;

pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> &'static ZodiacSign {
    &ZODIAC[rng.gen_range(0..ZODIAC.len())]
}

/// Two distinct signs, each ordered pair equally likely.
pub fn random_sign_pair<R: Rng + ?Sized>(rng: &mut R) -> (&'static ZodiacSign, &'static ZodiacSign) {
    let i = rng.gen_range(0..ZODIAC.len());
    let mut j = rng.gen_range(0..ZODIAC.len() - 1);
    if j >= i {
        j += 1;
    }
    (&ZODIAC[i], &ZODIAC[j])
}

pub fn random_tarot_card<R: Rng + ?Sized>(rng: &mut R) -> &'static TarotCard {
    &MAJOR_ARCANA[rng.gen_range(0..MAJOR_ARCANA.len())]
}
