pub mod sun;
pub mod types;

pub use sun::{date_num, sun_sign};
pub use types::{Element, Sign, ZodiacSign, SIGN_ORDER, ZODIAC};
