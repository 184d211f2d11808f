mod pipeline;

use anyhow::Context;
use card_render::VisualFormat;
use chrono::NaiveDate;
use clap::Parser;
use selene::astro_data_with_table;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Day to compute (YYYY-MM-DD, UTC). Defaults to now.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Config file (otherwise configs/natala.toml is searched, then defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON card fields to render (English or Spanish keys).
    #[arg(long)]
    fields: Option<PathBuf>,

    /// Visual format override: notes, chat, checklist, diagnostico, minimal, tarot.
    /// Unknown names fall back to minimal.
    #[arg(long)]
    format: Option<String>,

    /// Output directory override.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Plan seed (0 = derived from the date).
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Also render a draft card for each planned post.
    #[arg(long, default_value_t = false)]
    drafts: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = natala_config::load_settings(args.config.as_deref())?;
    natala_config::validate_assets(&settings)?;
    match &settings.source {
        Some(path) => log::info!("Config: {}", path.display()),
        None => log::info!("Config: defaults"),
    }

    let table = pipeline::load_table(&settings)?;
    let ctx = astro_data_with_table(pipeline::resolve_instant(args.date), &table);
    log::info!("{}", ctx.summary_line());
    log::info!("Energía: {}", ctx.energy_label);

    let out_dir = args.out_dir.clone().unwrap_or_else(|| settings.output_dir.clone());
    let day = pipeline::day_dir(&out_dir, ctx.date)?;
    pipeline::write_json(&day.join("astro.json"), &ctx)?;

    let seed = if args.seed == 0 {
        pipeline::date_seed(ctx.date)
    } else {
        args.seed
    };
    let plan = content_plan::plan_day(&ctx, &mut pipeline::plan_rng(seed));
    for (i, post) in plan.posts.iter().enumerate() {
        log::info!(
            "Post {}: {} [{}] topic={} cta={}",
            i + 1,
            post.content_type,
            post.visual_format,
            post.topic,
            post.cta.unwrap_or("-")
        );
    }
    pipeline::write_json(&day.join("plan.json"), &plan)?;

    if args.fields.is_none() && !args.drafts {
        return Ok(());
    }

    let fonts = pipeline::load_fonts(&settings)?;
    let canvas = pipeline::canvas(&settings);

    if let Some(fields_path) = &args.fields {
        let mut fields = pipeline::read_fields(fields_path)?;
        if fields.watermark_text.is_empty() {
            fields.watermark_text = settings.render.watermark.clone();
        }
        let format = match &args.format {
            Some(name) => name.parse::<VisualFormat>().unwrap_or_default(),
            None => fields.visual_format,
        };
        let path = day.join(format!("card-{}.png", format));
        pipeline::write_card(&path, format, &fields, canvas, &fonts)
            .with_context(|| format!("Card from {}", fields_path.display()))?;
    }

    if args.drafts {
        let written = pipeline::write_drafts(&day, &plan, &ctx, &settings, &fonts, seed)?;
        log::info!("Rendered {} draft cards", written.len());
    }

    Ok(())
}
