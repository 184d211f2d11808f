use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One of the six card layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualFormat {
    Notes,
    Chat,
    Checklist,
    Diagnostico,
    #[default]
    Minimal,
    Tarot,
}

impl VisualFormat {
    pub const ALL: [VisualFormat; 6] = [
        VisualFormat::Notes,
        VisualFormat::Chat,
        VisualFormat::Checklist,
        VisualFormat::Diagnostico,
        VisualFormat::Minimal,
        VisualFormat::Tarot,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            VisualFormat::Notes => "notes",
            VisualFormat::Chat => "chat",
            VisualFormat::Checklist => "checklist",
            VisualFormat::Diagnostico => "diagnostico",
            VisualFormat::Minimal => "minimal",
            VisualFormat::Tarot => "tarot",
        }
    }
}

impl fmt::Display for VisualFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Case-insensitive; anything unrecognised selects `Minimal`.
impl FromStr for VisualFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Ok(VisualFormat::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| {
                if !wanted.is_empty() {
                    log::debug!("Unknown visual format {:?}, using minimal", wanted);
                }
                VisualFormat::Minimal
            }))
    }
}

/// Output canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1080, 1920)
    }
}

/// Text content for one card. Every field is optional on input and empty
/// fields are simply not drawn. Accepts the Spanish keys model output uses
/// (`dolor`, `explicacion`, `accion`, `cta`, `textoEnPantalla`, `formato`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardTextFields {
    #[serde(deserialize_with = "string_or_null")]
    pub hook: String,
    #[serde(alias = "dolor", deserialize_with = "string_or_null")]
    pub pain_point: String,
    #[serde(alias = "explicacion", deserialize_with = "string_or_null")]
    pub explanation: String,
    #[serde(alias = "accion", deserialize_with = "string_or_null")]
    pub action_step: String,
    #[serde(alias = "cta", deserialize_with = "string_or_null")]
    pub call_to_action: String,
    #[serde(alias = "textoEnPantalla", deserialize_with = "lines_or_text")]
    pub on_screen_lines: Vec<String>,
    #[serde(alias = "watermark", deserialize_with = "string_or_null")]
    pub watermark_text: String,
    #[serde(alias = "formato", deserialize_with = "format_or_minimal")]
    pub visual_format: VisualFormat,
}

impl CardTextFields {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Non-blank on-screen lines, splitting any embedded newlines.
    pub fn extra_lines(&self) -> impl Iterator<Item = &str> {
        self.on_screen_lines
            .iter()
            .flat_map(|l| l.split('\n'))
            .filter(|l| !l.trim().is_empty())
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinesOrText {
    Lines(Vec<String>),
    Text(String),
}

fn lines_or_text<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<LinesOrText>::deserialize(d)? {
        Some(LinesOrText::Lines(lines)) => lines,
        Some(LinesOrText::Text(text)) => text.split('\n').map(str::to_string).collect(),
        None => Vec::new(),
    })
}

fn format_or_minimal<'de, D: Deserializer<'de>>(d: D) -> Result<VisualFormat, D::Error> {
    let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
    // FromStr never fails
    Ok(raw.parse().unwrap_or_default())
}
