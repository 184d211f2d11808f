use anyhow::Context;
use card_render::{render_card, CanvasSize, CardTextFields, FontSet, VisualFormat};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use content_plan::{image_text, DailyPlan};
use natala_config::NatalaSettings;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use selene::{DailyAstroContext, RetrogradeTable};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Noon UTC on `date`, or now when no date is given.
pub(crate) fn resolve_instant(date: Option<NaiveDate>) -> DateTime<Utc> {
    match date.and_then(|d| d.and_hms_opt(12, 0, 0)) {
        Some(noon) => Utc.from_utc_datetime(&noon),
        None => Utc::now(),
    }
}

/// `yyyymmdd`, so reruns for the same day plan the same posts.
pub(crate) fn date_seed(date: NaiveDate) -> u64 {
    (date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64) as u64
}

pub(crate) fn plan_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

pub(crate) fn load_table(settings: &NatalaSettings) -> anyhow::Result<Cow<'static, RetrogradeTable>> {
    match &settings.retrogrades {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read retrograde table {}", path.display()))?;
            let table = RetrogradeTable::from_toml_str(&text)
                .with_context(|| format!("Invalid retrograde table {}", path.display()))?;
            log::info!("Using retrograde table {}", path.display());
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(RetrogradeTable::builtin())),
    }
}

pub(crate) fn load_fonts(settings: &NatalaSettings) -> anyhow::Result<FontSet> {
    match settings.render.font_paths() {
        Some((bold, heavy)) => FontSet::from_files(bold, heavy).context("Failed to load fonts"),
        None => {
            log::warn!("No fonts configured, using built-in block face");
            Ok(FontSet::builtin())
        }
    }
}

pub(crate) fn canvas(settings: &NatalaSettings) -> CanvasSize {
    CanvasSize::new(settings.render.width, settings.render.height)
}

pub(crate) fn day_dir(out_dir: &Path, date: NaiveDate) -> anyhow::Result<PathBuf> {
    let dir = out_dir.join(date.format("%Y-%m-%d").to_string());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output dir {}", dir.display()))?;
    Ok(dir)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

pub(crate) fn read_fields(path: &Path) -> anyhow::Result<CardTextFields> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fields {}", path.display()))?;
    CardTextFields::from_json(&text)
        .with_context(|| format!("Invalid card fields in {}", path.display()))
}

pub(crate) fn write_card(
    path: &Path,
    format: VisualFormat,
    fields: &CardTextFields,
    canvas: CanvasSize,
    fonts: &FontSet,
) -> anyhow::Result<()> {
    let png = render_card(format, fields, canvas, fonts)
        .with_context(|| format!("Failed to render {} card", format))?;
    fs::write(path, &png).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {} ({} KB)", path.display(), png.len() / 1024);
    Ok(())
}

/// Render one draft card per planned post from its on-image copy.
pub(crate) fn write_drafts(
    dir: &Path,
    plan: &DailyPlan,
    ctx: &DailyAstroContext,
    settings: &NatalaSettings,
    fonts: &FontSet,
    seed: u64,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut rng = plan_rng(seed.wrapping_add(1));
    let mut written = Vec::with_capacity(plan.posts.len());
    for (i, post) in plan.posts.iter().enumerate() {
        let text = image_text(post, ctx, &mut rng);
        let fields = text.card_fields(post, &settings.render.watermark);
        let path = dir.join(format!(
            "post-{}-{}-{}.png",
            i + 1,
            post.content_type,
            post.visual_format
        ));
        write_card(&path, post.visual_format, &fields, canvas(settings), fonts)?;
        written.push(path);
    }
    Ok(written)
}
