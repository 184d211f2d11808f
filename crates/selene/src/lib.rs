//! Daily astrological context: moon phase, sun sign, retrograde windows and
//! the energy label derived from them.
//!
//! Everything here is a pure function of a calendar date plus compiled-in
//! reference tables. The only fallible entry point is loading a replacement
//! retrograde table.

pub mod daily;
pub mod energy;
pub mod lunar;
pub mod random;
pub mod retrograde;
pub mod tarot;
pub mod zodiac;

pub use daily::{astro_data_with_table, today_astro_data, DailyAstroContext};
pub use energy::{daily_energy, Energy};
pub use lunar::{moon_phase, MoonPhase, MoonPhaseReading, SYNODIC_MONTH};
pub use retrograde::{retrogrades, Body, RetrogradeTable, RetrogradeWindow, TableError};
pub use tarot::{TarotCard, MAJOR_ARCANA};
pub use zodiac::{sun_sign, Element, Sign, ZodiacSign, ZODIAC};
