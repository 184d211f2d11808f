use crate::energy::{daily_energy, Energy};
use crate::lunar::{moon_phase, MoonPhaseReading};
use crate::retrograde::{Body, RetrogradeTable, RetrogradeWindow};
use crate::zodiac::{sun_sign, ZodiacSign};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the content pipeline needs to know about one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAstroContext {
    pub date: NaiveDate,
    pub moon: MoonPhaseReading,
    pub retrogrades: BTreeMap<Body, RetrogradeWindow>,
    #[serde(rename = "sunSign")]
    pub sun_sign: ZodiacSign,
    pub energy: Energy,
    #[serde(rename = "energyLabel")]
    pub energy_label: &'static str,
}

impl DailyAstroContext {
    /// Retrograde bodies in mercury, venus, mars order.
    pub fn active_bodies(&self) -> Vec<Body> {
        self.retrogrades.keys().copied().collect()
    }

    pub fn has_retrogrades(&self) -> bool {
        !self.retrogrades.is_empty()
    }

    pub fn summary_line(&self) -> String {
        let retro = if self.retrogrades.is_empty() {
            "none".to_string()
        } else {
            self.active_bodies()
                .iter()
                .map(Body::id)
                .collect::<Vec<_>>()
                .join(",")
        };
        format!(
            "{} moon={} {} ({:.2}d, {}) sun={} retro={} energy={:?}",
            self.date,
            self.moon.phase_emoji,
            self.moon.phase_name,
            self.moon.days_into_cycle,
            self.moon.moon_sign,
            self.sun_sign.name,
            retro,
            self.energy
        )
    }
}

/// Context for the UTC calendar day of `instant`, using the built-in table.
pub fn today_astro_data(instant: DateTime<Utc>) -> DailyAstroContext {
    astro_data_with_table(instant, RetrogradeTable::builtin())
}

pub fn astro_data_with_table(instant: DateTime<Utc>, table: &RetrogradeTable) -> DailyAstroContext {
    let date = instant.date_naive();
    let moon = moon_phase(instant);
    let retrogrades = table.active_on(date);
    let energy = daily_energy(&moon, &retrogrades, date);
    let ctx = DailyAstroContext {
        date,
        moon,
        retrogrades,
        sun_sign: *sun_sign(date),
        energy,
        energy_label: energy.label(),
    };
    log::debug!("Astro context: {}", ctx.summary_line());
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_is_utc_calendar_day() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 20, 23, 59, 0).unwrap();
        let ctx = today_astro_data(instant);
        assert_eq!(ctx.date, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
        assert_eq!(ctx.active_bodies(), vec![Body::Mercury, Body::Venus]);
        assert_eq!(ctx.energy, Energy::Chaotic);
    }

    #[test]
    fn test_active_bodies_follow_table() {
        let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
        let table = RetrogradeTable::default()
            .with_window(Body::Mars, d(3, 1), d(3, 31))
            .with_window(Body::Mercury, d(3, 15), d(4, 7));
        let instant = Utc.with_ymd_and_hms(2025, 3, 20, 23, 59, 0).unwrap();
        let ctx = astro_data_with_table(instant, &table);
        assert_eq!(ctx.active_bodies(), vec![Body::Mercury, Body::Mars]);
    }

    #[test]
    fn test_empty_table_has_no_retrogrades() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let ctx = astro_data_with_table(instant, &RetrogradeTable::default());
        assert!(!ctx.has_retrogrades());
        assert!(ctx.summary_line().contains("retro=none"));
    }
}
