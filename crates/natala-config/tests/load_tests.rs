use natala_config::{load_settings, validate_assets, DEFAULT_WATERMARK};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_partial_file_merges_with_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("natala.toml");
    fs::write(&path, "[render]\nwidth = 720\n\n[output]\ndir = \"out/daily\"\n")?;

    let settings = load_settings(Some(&path))?;
    assert_eq!(settings.render.width, 720);
    assert_eq!(settings.render.height, 1920);
    assert_eq!(settings.render.watermark, DEFAULT_WATERMARK);
    assert_eq!(settings.output_dir, PathBuf::from("out/daily"));
    assert_eq!(settings.source.as_deref(), Some(path.as_path()));
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = load_settings(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_parse_error_names_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[render\nwidth = 1")?;
    let err = load_settings(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    Ok(())
}

#[test]
fn test_assets_must_exist() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let bold = dir.path().join("Bold.ttf");
    fs::write(&bold, b"not really a font")?;
    let path = dir.path().join("natala.toml");
    fs::write(
        &path,
        format!(
            "[render]\nfont_bold = {:?}\nfont_heavy = {:?}\n",
            bold.display().to_string(),
            dir.path().join("Heavy.ttf").display().to_string()
        ),
    )?;
    let settings = load_settings(Some(&path))?;
    let err = validate_assets(&settings).unwrap_err();
    assert!(err.to_string().contains("Heavy.ttf"));
    Ok(())
}

#[test]
fn test_retrograde_table_path() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let table = dir.path().join("retro.toml");
    fs::write(&table, "")?;
    let path = dir.path().join("natala.toml");
    fs::write(&path, format!("[astro]\nretrogrades = {:?}\n", table.display().to_string()))?;
    let settings = load_settings(Some(&path))?;
    assert_eq!(settings.retrogrades.as_deref(), Some(table.as_path()));
    validate_assets(&settings)?;
    Ok(())
}
