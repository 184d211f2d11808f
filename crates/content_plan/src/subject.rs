use crate::types::ContentType;
use rand::Rng;
use selene::random::{random_sign, random_sign_pair, random_tarot_card};
use selene::{TarotCard, ZodiacSign};
use serde::Serialize;

/// What a post is about, beyond the day's sky.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    Sign { sign: ZodiacSign },
    Card { card: TarotCard },
    Matchup { first: ZodiacSign, second: ZodiacSign },
    Sky,
}

impl Subject {
    /// Draw the subject a content type needs: a sign for horoscopes, a card
    /// for the card of the day, a pair for sign-vs-sign. Everything else
    /// is about the sky itself and draws nothing.
    pub fn pick<R: Rng + ?Sized>(content_type: ContentType, rng: &mut R) -> Subject {
        match content_type {
            ContentType::Horoscopo => Subject::Sign {
                sign: *random_sign(rng),
            },
            ContentType::CartaDelDia => Subject::Card {
                card: *random_tarot_card(rng),
            },
            ContentType::SignoVsSigno => {
                let (first, second) = random_sign_pair(rng);
                Subject::Matchup {
                    first: *first,
                    second: *second,
                }
            }
            ContentType::FaseLunar | ContentType::DolorPost | ContentType::Transitos => Subject::Sky,
        }
    }
}
