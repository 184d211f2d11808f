use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of daily post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Horoscopo,
    CartaDelDia,
    FaseLunar,
    DolorPost,
    SignoVsSigno,
    Transitos,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::Horoscopo,
        ContentType::CartaDelDia,
        ContentType::FaseLunar,
        ContentType::DolorPost,
        ContentType::SignoVsSigno,
        ContentType::Transitos,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ContentType::Horoscopo => "horoscopo",
            ContentType::CartaDelDia => "carta_del_dia",
            ContentType::FaseLunar => "fase_lunar",
            ContentType::DolorPost => "dolor_post",
            ContentType::SignoVsSigno => "signo_vs_signo",
            ContentType::Transitos => "transitos",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "amor")]
    Amor,
    #[serde(rename = "dinero")]
    Dinero,
    #[serde(rename = "salud y propósito")]
    SaludYProposito,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Amor => "amor",
            Topic::Dinero => "dinero",
            Topic::SaludYProposito => "salud y propósito",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
