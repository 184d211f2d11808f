use card_render::VisualFormat;
use chrono::{NaiveDate, TimeZone, Utc};
use content_plan::hashtags::{AMOR_TAGS, BASE_TAGS, DINERO_TAGS, LUNA_TAGS, SIGNOS_TAGS};
use content_plan::{
    format_for, hashtags, image_text, pick_cta, pick_daily_content, pick_topic, plan_day,
    ContentType, Subject, Topic, CTA_VARIANTS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selene::{today_astro_data, DailyAstroContext};
use std::collections::HashSet;

fn retro_day() -> DailyAstroContext {
    today_astro_data(Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap())
}

fn quiet_day() -> DailyAstroContext {
    today_astro_data(Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap())
}

#[test]
fn test_four_distinct_types_with_moon() {
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let picks = pick_daily_content(&quiet_day(), &mut rng);
        assert_eq!(picks.len(), 4);
        assert_eq!(picks.iter().collect::<HashSet<_>>().len(), 4);
        assert!(picks.contains(&ContentType::FaseLunar));
    }
}

#[test]
fn test_retrogrades_force_transitos() {
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let picks = pick_daily_content(&retro_day(), &mut rng);
        assert!(picks.contains(&ContentType::Transitos));
        assert!(picks.contains(&ContentType::FaseLunar));
        assert_eq!(picks.iter().collect::<HashSet<_>>().len(), 4);
    }
}

#[test]
fn test_final_order_is_shuffled() {
    let firsts: HashSet<ContentType> = (0..100)
        .map(|seed| pick_daily_content(&quiet_day(), &mut ChaCha8Rng::seed_from_u64(seed))[0])
        .collect();
    assert!(firsts.len() > 1);
}

#[test]
fn test_topic_weights() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let n = 10_000;
    let mut counts = [0usize; 3];
    for _ in 0..n {
        match pick_topic(&mut rng) {
            Topic::Amor => counts[0] += 1,
            Topic::Dinero => counts[1] += 1,
            Topic::SaludYProposito => counts[2] += 1,
        }
    }
    let share = |c: usize| c as f64 / n as f64;
    assert!((share(counts[0]) - 0.6).abs() < 0.03);
    assert!((share(counts[1]) - 0.3).abs() < 0.03);
    assert!((share(counts[2]) - 0.1).abs() < 0.03);
}

#[test]
fn test_cta_is_a_variant() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..50 {
        assert!(CTA_VARIANTS.contains(&pick_cta(&mut rng)));
    }
}

#[test]
fn test_hashtag_composition() {
    assert_eq!(
        hashtags(ContentType::FaseLunar, Topic::Amor),
        format!("{} {} {}", BASE_TAGS, AMOR_TAGS, LUNA_TAGS)
    );
    assert_eq!(
        hashtags(ContentType::SignoVsSigno, Topic::Dinero),
        format!("{} {} {}", BASE_TAGS, DINERO_TAGS, SIGNOS_TAGS)
    );
    assert_eq!(
        hashtags(ContentType::Horoscopo, Topic::SaludYProposito),
        format!("{} {}", BASE_TAGS, SIGNOS_TAGS)
    );
    assert_eq!(hashtags(ContentType::Transitos, Topic::Dinero), format!("{} {}", BASE_TAGS, DINERO_TAGS));
}

#[test]
fn test_formats_rotate_from_day_of_year() {
    // 2025-01-05 is ordinal 5
    let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    assert_eq!(format_for(date, 0), VisualFormat::ALL[5]);
    assert_eq!(format_for(date, 1), VisualFormat::ALL[0]);
    let next = date.succ_opt().unwrap();
    assert_eq!(format_for(next, 0), format_for(date, 1));
}

#[test]
fn test_plan_day_is_reproducible() {
    let ctx = retro_day();
    let a = plan_day(&ctx, &mut ChaCha8Rng::seed_from_u64(20250320));
    let b = plan_day(&ctx, &mut ChaCha8Rng::seed_from_u64(20250320));
    assert_eq!(a, b);
    assert_eq!(a.date, ctx.date);
    assert_eq!(a.posts.len(), 4);
    let formats: HashSet<VisualFormat> = a.posts.iter().map(|p| p.visual_format).collect();
    assert_eq!(formats.len(), 4);
    for post in &a.posts {
        assert_eq!(post.hashtags, hashtags(post.content_type, post.topic));
        match post.content_type {
            ContentType::Horoscopo => assert!(matches!(post.subject, Subject::Sign { .. })),
            ContentType::CartaDelDia => assert!(matches!(post.subject, Subject::Card { .. })),
            ContentType::SignoVsSigno => match post.subject {
                Subject::Matchup { first, second } => assert_ne!(first.sign, second.sign),
                other => panic!("unexpected subject {:?}", other),
            },
            _ => assert_eq!(post.subject, Subject::Sky),
        }
    }
}

#[test]
fn test_transit_image_text_names_bodies() {
    let ctx = retro_day();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let plan = plan_day(&ctx, &mut rng);
    let post = plan
        .posts
        .iter()
        .find(|p| p.content_type == ContentType::Transitos)
        .unwrap();
    let text = image_text(post, &ctx, &mut rng);
    assert_eq!(text.headline, "Mercurio y Venus Retrógrado");
    assert_eq!(text.body_lines, vec!["Lo que NADIE te dice"]);

    let fields = text.card_fields(post, "natala.online");
    assert_eq!(fields.hook, text.headline);
    assert_eq!(fields.visual_format, post.visual_format);
    assert_eq!(fields.call_to_action, post.cta.unwrap_or(""));
}

#[test]
fn test_moon_image_text() {
    let ctx = quiet_day();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let plan = plan_day(&ctx, &mut rng);
    let post = plan
        .posts
        .iter()
        .find(|p| p.content_type == ContentType::FaseLunar)
        .unwrap();
    let text = image_text(post, &ctx, &mut rng);
    assert_eq!(text.headline, ctx.moon.phase_name);
    assert_eq!(text.body_lines[0], format!("en {}", ctx.moon.moon_sign));
}

#[test]
fn test_plan_serializes() {
    let plan = plan_day(&quiet_day(), &mut ChaCha8Rng::seed_from_u64(1));
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["date"], "2025-05-01");
    assert_eq!(json["posts"].as_array().map(Vec::len), Some(4));
}
