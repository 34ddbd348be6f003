pub mod config;
pub mod demo;
pub mod render;
pub mod streaks;

use habitmap_core::{HeatmapRenderer, Locale, RenderConfig};
use std::path::{Path, PathBuf};

/// Load the config file, either from `path` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => RenderConfig::load_from(path)?,
        None => RenderConfig::load()?,
    })
}

/// Build a renderer, letting command-line flags override the config.
pub fn build_renderer(
    mut config: RenderConfig,
    locale: Option<Locale>,
    multiplier: Option<f64>,
) -> Result<HeatmapRenderer, Box<dyn std::error::Error>> {
    if let Some(locale) = locale {
        config.locale = locale;
    }
    if let Some(multiplier) = multiplier {
        config.multiplier = multiplier;
    }
    let style = config.style()?;
    let fonts = config.font_store()?;
    tracing::debug!("Using font family '{}' ({} faces)", fonts.family(), fonts.face_count());
    Ok(HeatmapRenderer::new(style, fonts))
}

/// Directory for generated files when no explicit output path is given.
pub fn output_dir(config: &RenderConfig) -> PathBuf {
    config
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}
