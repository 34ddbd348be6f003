//! # habitmap Core Library
//!
//! Renders a year-long habit streak calendar as a PNG: twelve month grids
//! whose day cells are colored by how long the habit streak has run.
//!
//! ## Pipeline
//!
//! - **Streaks**: [`StreakMap`] walks every day of the year over an
//!   [`ActivityLog`]
//! - **Layout**: [`CalendarLayout`] places month panels and day cells
//! - **Palette**: [`intensity_level`] buckets streaks, [`Palette`] colors them
//! - **Render**: [`HeatmapRenderer`] paints the canvas with shared fonts
//! - **Export**: PNG bytes or an [`Artifact`] on disk
//!
//! Every render call is self-contained; only the [`FontStore`] is shared.

pub mod activity;
pub mod config;
pub mod error;
pub mod export;
pub mod fonts;
pub mod labels;
pub mod layout;
pub mod palette;
pub mod render;
pub mod streak;

pub use activity::ActivityLog;
pub use config::RenderConfig;
pub use error::{ConfigError, CoreError, RenderError, Result};
pub use export::Artifact;
pub use fonts::FontStore;
pub use labels::Locale;
pub use layout::{CalendarLayout, CanvasSize, DayCell, LayoutConfig, MonthPanel};
pub use palette::{intensity_level, Palette, Rgb};
pub use render::{truncate_label, HeatmapRenderer, Style};
pub use streak::{StreakMap, StreakSummary};

use std::collections::HashMap;
use std::sync::OnceLock;

static SYSTEM_FONTS: OnceLock<FontStore> = OnceLock::new();

/// System fonts, loaded on first use and shared afterwards.
///
/// # Errors
///
/// Returns an error if the host has no fonts installed.
pub fn system_fonts() -> Result<FontStore> {
    if let Some(fonts) = SYSTEM_FONTS.get() {
        return Ok(fonts.clone());
    }
    let fonts = FontStore::system()?;
    Ok(SYSTEM_FONTS.get_or_init(|| fonts).clone())
}

/// Render `year` for `habit_label` with the default style and system fonts.
///
/// `entries` maps `YYYY-MM-DD` keys to whether the habit was kept; malformed
/// keys are ignored.
///
/// # Errors
///
/// Returns a render error if no fonts are available or drawing fails.
pub fn render(year: i32, habit_label: &str, entries: &HashMap<String, bool>) -> Result<Vec<u8>> {
    let renderer = HeatmapRenderer::new(Style::default(), system_fonts()?);
    renderer.render(year, habit_label, &ActivityLog::from_map(entries))
}
