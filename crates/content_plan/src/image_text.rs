//! Short on-image copy for a planned post, used as a draft card before the
//! generated caption arrives.

use crate::plan::PlannedPost;
use crate::subject::Subject;
use crate::types::ContentType;
use card_render::CardTextFields;
use rand::Rng;
use selene::DailyAstroContext;
use serde::Serialize;

const HOROSCOPE_HOOKS: [&str; 5] = [
    "El universo tiene un mensaje para ti hoy",
    "Lo que viene para ti nadie lo espera",
    "Hoy todo cambia para ti",
    "No ignores esta señal",
    "El cosmos habla, ¿estás escuchando?",
];

const DOLOR_HOOKS: [&str; 4] = [
    "Si estás leyendo esto,\nno es casualidad",
    "El universo te puso\neste mensaje por algo",
    "Esto es para ti,\naunque no lo creas",
    "Lo que perdiste\nva a volver multiplicado",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageText {
    pub headline: String,
    #[serde(rename = "bodyLines")]
    pub body_lines: Vec<String>,
}

pub fn image_text<R: Rng + ?Sized>(post: &PlannedPost, ctx: &DailyAstroContext, rng: &mut R) -> ImageText {
    let (headline, body_lines) = match (post.content_type, &post.subject) {
        (ContentType::Horoscopo, Subject::Sign { sign }) => (
            HOROSCOPE_HOOKS[rng.gen_range(0..HOROSCOPE_HOOKS.len())].to_string(),
            vec![format!("{} {}", sign.name, sign.symbol)],
        ),
        (ContentType::CartaDelDia, Subject::Card { card }) => (
            "Tu carta del día no es coincidencia".to_string(),
            vec![card.name.to_string()],
        ),
        (ContentType::SignoVsSigno, Subject::Matchup { first, second }) => (
            format!(
                "{} {} vs {} {}",
                first.name, first.symbol, second.name, second.symbol
            ),
            vec!["¿Quién gana en el amor?".to_string()],
        ),
        (ContentType::FaseLunar, _) => (
            ctx.moon.phase_name.clone(),
            vec![
                format!("en {}", ctx.moon.moon_sign),
                "Lo que hagas hoy define tu mes entero".to_string(),
            ],
        ),
        (ContentType::DolorPost, _) => (
            DOLOR_HOOKS[rng.gen_range(0..DOLOR_HOOKS.len())].to_string(),
            Vec::new(),
        ),
        (ContentType::Transitos, _) => {
            let planets = if ctx.has_retrogrades() {
                ctx.active_bodies()
                    .iter()
                    .map(|b| b.name())
                    .collect::<Vec<_>>()
                    .join(" y ")
            } else {
                "Mercurio".to_string()
            };
            (
                format!("{} Retrógrado", planets),
                vec!["Lo que NADIE te dice".to_string()],
            )
        }
        _ => ("El universo tiene un mensaje para ti".to_string(), Vec::new()),
    };
    ImageText {
        headline,
        body_lines,
    }
}

impl ImageText {
    /// Card fields for a draft render: the headline as the hook, body lines
    /// as the pain point, the post's CTA if it has one.
    pub fn card_fields(&self, post: &PlannedPost, watermark: &str) -> CardTextFields {
        CardTextFields {
            hook: self.headline.clone(),
            pain_point: self.body_lines.join("\n"),
            call_to_action: post.cta.unwrap_or_default().to_string(),
            on_screen_lines: self.body_lines.clone(),
            watermark_text: watermark.to_string(),
            visual_format: post.visual_format,
            ..Default::default()
        }
    }
}
