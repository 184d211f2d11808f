use crate::hashtags::hashtags;
use crate::picks::{maybe_cta, pick_daily_content, pick_topic};
use crate::subject::Subject;
use crate::types::{ContentType, Topic};
use card_render::VisualFormat;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use selene::DailyAstroContext;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedPost {
    pub content_type: ContentType,
    pub topic: Topic,
    pub subject: Subject,
    pub cta: Option<&'static str>,
    pub hashtags: String,
    pub visual_format: VisualFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub posts: Vec<PlannedPost>,
}

/// Visual format for the `index`-th post of the day. Consecutive days start
/// one format further along.
pub fn format_for(date: NaiveDate, index: usize) -> VisualFormat {
    let all = VisualFormat::ALL;
    all[(date.ordinal() as usize + index) % all.len()]
}

pub fn plan_day<R: Rng + ?Sized>(ctx: &DailyAstroContext, rng: &mut R) -> DailyPlan {
    let posts: Vec<PlannedPost> = pick_daily_content(ctx, rng)
        .into_iter()
        .enumerate()
        .map(|(i, content_type)| {
            let topic = pick_topic(rng);
            let subject = Subject::pick(content_type, rng);
            PlannedPost {
                content_type,
                topic,
                subject,
                cta: maybe_cta(rng),
                hashtags: hashtags(content_type, topic),
                visual_format: format_for(ctx.date, i),
            }
        })
        .collect();
    log::debug!(
        "Planned {} posts for {}: {}",
        posts.len(),
        ctx.date,
        posts
            .iter()
            .map(|p| format!("{}/{}", p.content_type, p.visual_format))
            .collect::<Vec<_>>()
            .join(", ")
    );
    DailyPlan {
        date: ctx.date,
        posts,
    }
}
