//! Which posts a day gets: content types, topics, calls to action,
//! hashtags, visual formats and draft on-image copy.
//!
//! All randomness comes from a caller-supplied `rand::Rng`.

pub mod hashtags;
pub mod image_text;
pub mod picks;
pub mod plan;
pub mod subject;
pub mod types;

pub use hashtags::hashtags;
pub use image_text::{image_text, ImageText};
pub use picks::{maybe_cta, pick_cta, pick_daily_content, pick_topic, CTA_VARIANTS, POSTS_PER_DAY};
pub use plan::{format_for, plan_day, DailyPlan, PlannedPost};
pub use subject::Subject;
pub use types::{ContentType, Topic};
