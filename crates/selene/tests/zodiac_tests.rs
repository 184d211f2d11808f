use chrono::{Duration, NaiveDate};
use selene::zodiac::{date_num, sun_sign, Element, Sign, ZODIAC};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_every_day_has_exactly_one_sign() {
    let mut date = d(2024, 1, 1);
    while date <= d(2024, 12, 31) {
        let n = date_num(date);
        let matches = ZODIAC.iter().filter(|s| s.contains(n)).count();
        assert_eq!(matches, 1, "{} matched {} signs", date, matches);
        assert!(sun_sign(date).contains(n));
        date += Duration::days(1);
    }
}

#[test]
fn test_capricorn_wraps_year() {
    assert_eq!(sun_sign(d(2025, 12, 25)).sign, Sign::Capricorn);
    assert_eq!(sun_sign(d(2025, 1, 5)).sign, Sign::Capricorn);
    assert_eq!(sun_sign(d(2025, 1, 19)).sign, Sign::Capricorn);
    assert_eq!(sun_sign(d(2025, 1, 20)).sign, Sign::Aquarius);
}

#[test]
fn test_sign_metadata() {
    let leo = sun_sign(d(2025, 8, 1));
    assert_eq!(leo.name, "Leo");
    assert_eq!(leo.symbol, '♌');
    assert_eq!(leo.element, Element::Fire);
    assert_eq!(Sign::Scorpio.name(), "Escorpio");
    assert_eq!(Sign::from_index(13), Sign::Taurus);
}

#[test]
fn test_table_order_matches_sign_index() {
    for (i, entry) in ZODIAC.iter().enumerate() {
        assert_eq!(entry.sign.index(), i);
    }
}
