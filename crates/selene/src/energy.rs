//! The day's "energy" descriptor.

use crate::lunar::{MoonPhase, MoonPhaseReading};
use crate::retrograde::{Body, RetrogradeWindow};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    Chaotic,
    Intense,
    Seeding,
    Nostalgic,
    Introspection,
    Action,
    Healing,
    Abundance,
}

impl Energy {
    pub fn label(&self) -> &'static str {
        match self {
            Energy::Chaotic => {
                "Caótica — Mercurio retrógrado trae confusión en comunicación y decisiones"
            }
            Energy::Intense => "Intensa — La Luna Llena amplifica emociones y revelaciones",
            Energy::Seeding => "De siembra — Luna Nueva perfecta para manifestar intenciones",
            Energy::Nostalgic => "Nostálgica — Venus retrógrado trae recuerdos de amores pasados",
            Energy::Introspection => "De introspección — buen día para escuchar tu intuición",
            Energy::Action => "De acción — la energía cósmica te impulsa hacia adelante",
            Energy::Healing => "De sanación — el universo te pide soltar lo que ya no sirve",
            Energy::Abundance => {
                "De abundancia — alineación favorable para manifestar prosperidad"
            }
        }
    }
}

/// Generic labels for days with no retrograde or new/full moon.
pub const FALLBACK_ENERGIES: [Energy; 4] = [
    Energy::Introspection,
    Energy::Action,
    Energy::Healing,
    Energy::Abundance,
];

/// Stable per-date pick: `day_of_year % FALLBACK_ENERGIES.len()`, with
/// `day_of_year` 1-based.
pub fn fallback_energy(date: NaiveDate) -> Energy {
    FALLBACK_ENERGIES[date.ordinal() as usize % FALLBACK_ENERGIES.len()]
}

/// First match wins: mercury retrograde, full moon, new moon, venus
/// retrograde, then the date-seeded fallback.
pub fn daily_energy(
    moon: &MoonPhaseReading,
    retrogrades: &BTreeMap<Body, RetrogradeWindow>,
    date: NaiveDate,
) -> Energy {
    if retrogrades.contains_key(&Body::Mercury) {
        Energy::Chaotic
    } else if moon.phase == MoonPhase::FullMoon {
        Energy::Intense
    } else if moon.phase == MoonPhase::NewMoon {
        Energy::Seeding
    } else if retrogrades.contains_key(&Body::Venus) {
        Energy::Nostalgic
    } else {
        fallback_energy(date)
    }
}
