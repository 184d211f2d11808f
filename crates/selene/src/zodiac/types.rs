use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const SIGN_ORDER: [Sign; 12] = [
    Sign::Aries, Sign::Taurus, Sign::Gemini, Sign::Cancer,
    Sign::Leo, Sign::Virgo, Sign::Libra, Sign::Scorpio,
    Sign::Sagittarius, Sign::Capricorn, Sign::Aquarius, Sign::Pisces,
];

impl Sign {
    /// Sign at `index` in zodiac order, wrapping past Pisces.
    pub fn from_index(index: usize) -> Sign {
        SIGN_ORDER[index % 12]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn meta(&self) -> &'static ZodiacSign {
        &ZODIAC[self.index()]
    }

    /// Display name used in post copy.
    pub fn name(&self) -> &'static str {
        self.meta().name
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fuego",
            Element::Earth => "Tierra",
            Element::Air => "Aire",
            Element::Water => "Agua",
        }
    }
}

/// Static description of one tropical sign. `start` and `end` are inclusive
/// bounds encoded as `month * 100 + day`; Capricorn's range wraps the year end
/// so `start > end` for that entry only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub sign: Sign,
    pub name: &'static str,
    pub symbol: char,
    pub element: Element,
    pub start: u16,
    pub end: u16,
}

impl ZodiacSign {
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date_num: u16) -> bool {
        if self.wraps_year() {
            date_num >= self.start || date_num <= self.end
        } else {
            date_num >= self.start && date_num <= self.end
        }
    }
}

pub static ZODIAC: [ZodiacSign; 12] = [
    ZodiacSign { sign: Sign::Aries, name: "Aries", symbol: '♈', element: Element::Fire, start: 321, end: 419 },
    ZodiacSign { sign: Sign::Taurus, name: "Tauro", symbol: '♉', element: Element::Earth, start: 420, end: 520 },
    ZodiacSign { sign: Sign::Gemini, name: "Géminis", symbol: '♊', element: Element::Air, start: 521, end: 620 },
    ZodiacSign { sign: Sign::Cancer, name: "Cáncer", symbol: '♋', element: Element::Water, start: 621, end: 722 },
    ZodiacSign { sign: Sign::Leo, name: "Leo", symbol: '♌', element: Element::Fire, start: 723, end: 822 },
    ZodiacSign { sign: Sign::Virgo, name: "Virgo", symbol: '♍', element: Element::Earth, start: 823, end: 922 },
    ZodiacSign { sign: Sign::Libra, name: "Libra", symbol: '♎', element: Element::Air, start: 923, end: 1022 },
    ZodiacSign { sign: Sign::Scorpio, name: "Escorpio", symbol: '♏', element: Element::Water, start: 1023, end: 1121 },
    ZodiacSign { sign: Sign::Sagittarius, name: "Sagitario", symbol: '♐', element: Element::Fire, start: 1122, end: 1221 },
    ZodiacSign { sign: Sign::Capricorn, name: "Capricornio", symbol: '♑', element: Element::Earth, start: 1222, end: 119 },
    ZodiacSign { sign: Sign::Aquarius, name: "Acuario", symbol: '♒', element: Element::Air, start: 120, end: 218 },
    ZodiacSign { sign: Sign::Pisces, name: "Piscis", symbol: '♓', element: Element::Water, start: 219, end: 320 },
];
