use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};

/// The eight named phases of the lunar cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Display name used in post copy.
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "Luna Nueva",
            MoonPhase::WaxingCrescent => "Luna Creciente",
            MoonPhase::FirstQuarter => "Cuarto Creciente",
            MoonPhase::WaxingGibbous => "Gibosa Creciente",
            MoonPhase::FullMoon => "Luna Llena",
            MoonPhase::WaningGibbous => "Gibosa Menguante",
            MoonPhase::LastQuarter => "Cuarto Menguante",
            MoonPhase::WaningCrescent => "Luna Menguante",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    /// Symbolic illumination level, not a photometric value.
    pub fn illumination(&self) -> u8 {
        match self {
            MoonPhase::NewMoon => 0,
            MoonPhase::WaxingCrescent | MoonPhase::WaningCrescent => 25,
            MoonPhase::FirstQuarter | MoonPhase::LastQuarter => 50,
            MoonPhase::WaxingGibbous | MoonPhase::WaningGibbous => 75,
            MoonPhase::FullMoon => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseReading {
    pub phase: MoonPhase,
    #[serde(rename = "phaseName")]
    pub phase_name: String,
    #[serde(rename = "phaseEmoji")]
    pub phase_emoji: String,
    pub illumination: u8,
    #[serde(rename = "daysIntoCycle")]
    pub days_into_cycle: f64, // 0 <= x < SYNODIC_MONTH
    #[serde(rename = "moonSign")]
    pub moon_sign: Sign,
}

impl MoonPhaseReading {
    pub fn new(phase: MoonPhase, days_into_cycle: f64, moon_sign: Sign) -> Self {
        Self {
            phase,
            phase_name: phase.name().to_string(),
            phase_emoji: phase.emoji().to_string(),
            illumination: phase.illumination(),
            days_into_cycle,
            moon_sign,
        }
    }
}
