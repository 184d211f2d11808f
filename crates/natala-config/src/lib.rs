use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 1920;
pub const DEFAULT_WATERMARK: &str = "natala.online";

/// Tried in order when no explicit path is given.
pub const SEARCH_PATHS: [&str; 2] = ["configs/natala.toml", "../../configs/natala.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// TrueType faces; when unset the built-in block face is used.
    pub font_bold: Option<PathBuf>,
    pub font_heavy: Option<PathBuf>,
    pub watermark: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_bold: None,
            font_heavy: None,
            watermark: DEFAULT_WATERMARK.to_string(),
        }
    }
}

impl RenderSettings {
    /// Both font paths, or `None` if neither is configured.
    pub fn font_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.font_bold, &self.font_heavy) {
            (Some(bold), Some(heavy)) => Some((bold.as_path(), heavy.as_path())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NatalaSettings {
    pub render: RenderSettings,
    pub output_dir: PathBuf,
    /// Replacement retrograde table; the bundled one is used when unset.
    pub retrogrades: Option<PathBuf>,
    /// File the settings came from, if any.
    pub source: Option<PathBuf>,
}

impl Default for NatalaSettings {
    fn default() -> Self {
        Self {
            render: RenderSettings::default(),
            output_dir: default_output_dir(),
            retrogrades: None,
            source: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderToml {
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    font_bold: Option<PathBuf>,
    #[serde(default)]
    font_heavy: Option<PathBuf>,
    #[serde(default)]
    watermark: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputToml {
    #[serde(default = "default_output_dir")]
    dir: PathBuf,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AstroToml {
    #[serde(default)]
    retrogrades: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    render: RenderToml,
    #[serde(default)]
    output: OutputToml,
    #[serde(default)]
    astro: AstroToml,
}

/// First readable file from [`SEARCH_PATHS`], with its path.
pub fn read_config_toml_text() -> Option<(PathBuf, String)> {
    SEARCH_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

pub fn parse_settings(text: &str) -> anyhow::Result<NatalaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse natala.toml: {e}"))?;
    let RootConfigToml {
        render,
        output,
        astro,
    } = root;
    let defaults = RenderSettings::default();
    let settings = NatalaSettings {
        render: RenderSettings {
            width: render.width.unwrap_or(defaults.width),
            height: render.height.unwrap_or(defaults.height),
            font_bold: render.font_bold,
            font_heavy: render.font_heavy,
            watermark: render.watermark.unwrap_or(defaults.watermark),
        },
        output_dir: output.dir,
        retrogrades: astro.retrogrades,
        source: None,
    };
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn validate_settings(settings: &NatalaSettings) -> anyhow::Result<()> {
    let render = &settings.render;
    if render.width == 0 || render.height == 0 {
        anyhow::bail!(
            "render.width and render.height must be positive (got {}x{})",
            render.width,
            render.height
        );
    }
    if render.font_bold.is_some() != render.font_heavy.is_some() {
        anyhow::bail!("render.font_bold and render.font_heavy must be set together");
    }
    Ok(())
}

/// Check that configured files exist before any work starts.
pub fn validate_assets(settings: &NatalaSettings) -> anyhow::Result<()> {
    if let Some((bold, heavy)) = settings.render.font_paths() {
        for p in [bold, heavy] {
            if !p.exists() {
                anyhow::bail!("Missing font file: {}", p.display());
            }
        }
    }
    if let Some(table) = &settings.retrogrades {
        if !table.exists() {
            anyhow::bail!("astro.retrogrades does not exist: {}", table.display());
        }
    }
    Ok(())
}

/// Load from `explicit` (which must exist), else the first of
/// [`SEARCH_PATHS`], else defaults.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<NatalaSettings> {
    let found = match explicit {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Could not read config {}: {e}", path.display())
            })?;
            Some((path.to_path_buf(), text))
        }
        None => read_config_toml_text(),
    };
    match found {
        Some((path, text)) => {
            let mut settings = parse_settings(&text)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
            settings.source = Some(path);
            Ok(settings)
        }
        None => Ok(NatalaSettings::default()),
    }
}
