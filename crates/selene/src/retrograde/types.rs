use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bodies whose retrograde windows are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Mercury,
    Venus,
    Mars,
}

impl Body {
    pub const ALL: [Body; 3] = [Body::Mercury, Body::Venus, Body::Mars];

    pub fn id(&self) -> &'static str {
        match self {
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
        }
    }

    /// Display name used in post copy.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "Mercurio",
            Body::Venus => "Venus",
            Body::Mars => "Marte",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrogradeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RetrogradeWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
