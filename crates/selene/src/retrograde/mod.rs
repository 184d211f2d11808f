pub mod table;
pub mod types;

pub use table::{retrogrades, RetrogradeTable, TableError};
pub use types::{Body, RetrogradeWindow};
