use crate::types::{ContentType, Topic};

pub const BASE_TAGS: &str =
    "#tarot #horoscopo #signoszodiacales #astrologia #tarotdeldia #universo #espiritualidad";
pub const AMOR_TAGS: &str = "#amor #expareja #almasgemelas #tarotdelamor #relaciones";
pub const DINERO_TAGS: &str = "#abundancia #prosperidad #dinero #manifestar #leydelaatraccion";
pub const LUNA_TAGS: &str = "#lunallena #lunanueva #fasesdeluna #energia #ritual";
pub const SIGNOS_TAGS: &str = "#aries #tauro #geminis #cancer #leo #virgo #libra #escorpio \
#sagitario #capricornio #acuario #piscis";

/// Base set, then the topic set, then the content-type set.
pub fn hashtags(content_type: ContentType, topic: Topic) -> String {
    let mut sets = vec![BASE_TAGS];
    match topic {
        Topic::Amor => sets.push(AMOR_TAGS),
        Topic::Dinero => sets.push(DINERO_TAGS),
        Topic::SaludYProposito => {}
    }
    match content_type {
        ContentType::FaseLunar => sets.push(LUNA_TAGS),
        ContentType::Horoscopo | ContentType::SignoVsSigno => sets.push(SIGNOS_TAGS),
        _ => {}
    }
    sets.join(" ")
}
