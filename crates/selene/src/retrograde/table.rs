use crate::retrograde::types::{Body, RetrogradeWindow};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

const BUILTIN_TOML: &str = include_str!("../../data/retrogrades.toml");

/// Errors that can occur when loading a retrograde table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid retrograde table: {0}")]
    InvalidToml(String),
    #[error("Retrograde window for {body} ends before it starts: {start} > {end}")]
    InvertedWindow {
        body: Body,
        start: NaiveDate,
        end: NaiveDate,
    },
}

lazy_static::lazy_static! {
    static ref BUILTIN: RetrogradeTable = RetrogradeTable::from_toml_str(BUILTIN_TOML)
        .expect("bundled retrograde table is valid");
}

/// On-disk shape: one array of tables per body, unknown bodies rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RetrogradeTableToml {
    #[serde(default)]
    mercury: Vec<RetrogradeWindow>,
    #[serde(default)]
    venus: Vec<RetrogradeWindow>,
    #[serde(default)]
    mars: Vec<RetrogradeWindow>,
}

/// Per-body lists of retrograde windows, kept in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetrogradeTable {
    windows: BTreeMap<Body, Vec<RetrogradeWindow>>,
}

impl RetrogradeTable {
    /// The compiled-in table of known windows.
    pub fn builtin() -> &'static RetrogradeTable {
        &BUILTIN
    }

    /// Parse a table from TOML, one array of tables per body:
    ///
    /// ```toml
    /// [[mercury]]
    /// start = "2025-03-15"
    /// end = "2025-04-07"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, TableError> {
        let raw: RetrogradeTableToml =
            toml::from_str(text).map_err(|e| TableError::InvalidToml(e.to_string()))?;
        let table = RetrogradeTable {
            windows: [
                (Body::Mercury, raw.mercury),
                (Body::Venus, raw.venus),
                (Body::Mars, raw.mars),
            ]
            .into_iter()
            .filter(|(_, windows)| !windows.is_empty())
            .collect(),
        };
        table.validate()?;
        log::debug!(
            "Loaded retrograde table: {} windows across {} bodies",
            table.windows.values().map(Vec::len).sum::<usize>(),
            table.windows.len()
        );
        Ok(table)
    }

    /// Append a window for `body`. Fixture builder; does not validate.
    pub fn with_window(mut self, body: Body, start: NaiveDate, end: NaiveDate) -> Self {
        self.windows
            .entry(body)
            .or_default()
            .push(RetrogradeWindow::new(start, end));
        self
    }

    pub fn windows(&self, body: Body) -> &[RetrogradeWindow] {
        self.windows.get(&body).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Windows containing `date`, at most one per body. When a body's windows
    /// overlap, the first one listed wins.
    pub fn active_on(&self, date: NaiveDate) -> BTreeMap<Body, RetrogradeWindow> {
        self.windows
            .iter()
            .filter_map(|(body, windows)| {
                windows
                    .iter()
                    .find(|w| w.contains(date))
                    .map(|w| (*body, *w))
            })
            .collect()
    }

    fn validate(&self) -> Result<(), TableError> {
        for (body, windows) in &self.windows {
            for w in windows {
                if w.start > w.end {
                    return Err(TableError::InvertedWindow {
                        body: *body,
                        start: w.start,
                        end: w.end,
                    });
                }
            }
            for pair in windows.windows(2) {
                if pair[0].contains(pair[1].start) || pair[1].contains(pair[0].start) {
                    log::warn!(
                        "Overlapping {} retrograde windows: {}..{} and {}..{}",
                        body,
                        pair[0].start,
                        pair[0].end,
                        pair[1].start,
                        pair[1].end
                    );
                }
            }
        }
        Ok(())
    }
}

/// Active windows for `date` in the built-in table.
pub fn retrogrades(date: NaiveDate) -> BTreeMap<Body, RetrogradeWindow> {
    RetrogradeTable::builtin().active_on(date)
}
