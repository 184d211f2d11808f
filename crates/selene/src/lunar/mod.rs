pub mod phase;
pub mod types;

pub use phase::{days_into_cycle, moon_phase, moon_sign_for_day, phase_for_day, SYNODIC_MONTH};
pub use types::{MoonPhase, MoonPhaseReading};
