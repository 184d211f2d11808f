use crate::zodiac::types::{Sign, ZodiacSign, ZODIAC};
use chrono::{Datelike, NaiveDate};

/// `month * 100 + day`, the encoding the sign table bounds use.
pub fn date_num(date: NaiveDate) -> u16 {
    (date.month() * 100 + date.day()) as u16
}

/// Tropical sun sign for a calendar date.
pub fn sun_sign(date: NaiveDate) -> &'static ZodiacSign {
    let n = date_num(date);

    // Capricorn spans the year boundary
    if n >= 1222 || n <= 119 {
        return Sign::Capricorn.meta();
    }

    ZODIAC
        .iter()
        .find(|sign| n >= sign.start && n <= sign.end)
        .unwrap_or_else(|| Sign::Capricorn.meta())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_num() {
        assert_eq!(date_num(NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()), 321);
        assert_eq!(date_num(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()), 1201);
    }

    #[test]
    fn test_cusp_days() {
        let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
        assert_eq!(sun_sign(d(3, 20)).sign, Sign::Pisces);
        assert_eq!(sun_sign(d(3, 21)).sign, Sign::Aries);
        assert_eq!(sun_sign(d(12, 21)).sign, Sign::Sagittarius);
        assert_eq!(sun_sign(d(12, 22)).sign, Sign::Capricorn);
    }
}
