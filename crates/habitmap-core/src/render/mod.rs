//! Year calendar renderer.
//!
//! Combines streaks, layout and palette into a scene, then rasterizes it.
//! A render call owns all of its intermediate state; the only shared piece is
//! the read-only [`FontStore`].

mod raster;
mod scene;

use scene::{Anchor, Baseline};

use resvg::tiny_skia::Pixmap;
use std::path::Path;

use crate::activity::ActivityLog;
use crate::error::Result;
use crate::export::{self, Artifact};
use crate::fonts::FontStore;
use crate::labels::Locale;
use crate::layout::{CalendarLayout, LayoutConfig};
use crate::palette::{Palette, Rgb};
use crate::streak::StreakMap;
use scene::SceneBuilder;

/// Default title length limit, in characters.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 100;

/// Marker appended to truncated titles.
pub const ELLIPSIS: &str = "...";

const SUBTITLE_COLOR: Rgb = Rgb::new(0x66, 0x66, 0x66);
const WEEKDAY_COLOR: Rgb = Rgb::new(0x80, 0x80, 0x80);
const WEEK_NUMBER_COLOR: Rgb = Rgb::new(0xb3, 0xb3, 0xb3);

/// Font sizes before scaling.
const TITLE_SIZE: f64 = 48.0;
const SUBTITLE_SIZE: f64 = 24.0;
const MONTH_SIZE: f64 = 22.0;
const WEEKDAY_SIZE: f64 = 12.0;
const WEEK_NUMBER_SIZE: f64 = 10.0;

/// Shorten `label` to at most `max_chars` characters.
///
/// Longer labels keep their first `max_chars - 3` characters followed by
/// `...`. Counting is per Unicode scalar value. A limit too small to hold
/// the ellipsis cuts the label without one.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let ellipsis_len = ELLIPSIS.chars().count();
    if max_chars <= ellipsis_len {
        return label.chars().take(max_chars).collect();
    }
    let keep = max_chars - ellipsis_len;
    let mut out: String = label.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Immutable visual configuration for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub layout: LayoutConfig,
    pub palette: Palette,
    pub locale: Locale,
    pub title_max_chars: usize,
    pub background: Rgb,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            palette: Palette::default(),
            locale: Locale::default(),
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            background: Rgb::WHITE,
        }
    }
}

/// Renders habit calendars. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct HeatmapRenderer {
    style: Style,
    fonts: FontStore,
}

impl HeatmapRenderer {
    pub fn new(style: Style, fonts: FontStore) -> Self {
        Self { style, fonts }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn fonts(&self) -> &FontStore {
        &self.fonts
    }

    /// Build the SVG scene for one calendar.
    pub fn scene(&self, year: i32, habit_label: &str, log: &ActivityLog) -> String {
        let streaks = StreakMap::compute(year, log);
        let layout = CalendarLayout::compute(year, &self.style.layout);
        self.paint(&layout, &streaks, habit_label)
    }

    fn paint(&self, layout: &CalendarLayout, streaks: &StreakMap, habit_label: &str) -> String {
        let style = &self.style;
        let geo = &style.layout;
        let locale = style.locale;
        let canvas = layout.canvas;
        let center_x = canvas.width as f64 / 2.0;

        let mut scene = SceneBuilder::new(canvas.width, canvas.height, self.fonts.family());
        scene.background(style.background);

        let title = truncate_label(habit_label, style.title_max_chars);
        scene.text(
            center_x,
            geo.title_y(),
            &title,
            geo.scaled(TITLE_SIZE),
            Rgb::BLACK,
            Anchor::Middle,
            Baseline::Central,
        );
        scene.text(
            center_x,
            geo.subtitle_y(),
            &locale.subtitle(layout.year),
            geo.scaled(SUBTITLE_SIZE),
            SUBTITLE_COLOR,
            Anchor::Middle,
            Baseline::Central,
        );

        let pitch = geo.cell_pitch();
        let cell_size = geo.cell_size();
        let radius = geo.corner_radius();

        for panel in &layout.panels {
            scene.text(
                panel.x,
                panel.y - geo.month_label_rise(),
                locale.month_name(panel.month),
                geo.scaled(MONTH_SIZE),
                Rgb::BLACK,
                Anchor::Start,
                Baseline::Alphabetic,
            );

            for (i, day) in locale.weekdays().iter().enumerate() {
                scene.text(
                    panel.x + i as f64 * pitch + cell_size / 2.0,
                    panel.y,
                    day,
                    geo.scaled(WEEKDAY_SIZE),
                    WEEKDAY_COLOR,
                    Anchor::Middle,
                    Baseline::Central,
                );
            }

            for cell in &panel.cells {
                let fill = style.palette.color_for_streak(streaks.streak_on(cell.date));
                scene.rounded_rect(cell.x, cell.y, cell.size, radius, fill);

                if let Some(week) = cell.week_number {
                    scene.text(
                        panel.x - geo.week_label_inset(),
                        cell.y + cell.size / 2.0,
                        &week.to_string(),
                        geo.scaled(WEEK_NUMBER_SIZE),
                        WEEK_NUMBER_COLOR,
                        Anchor::Middle,
                        Baseline::Central,
                    );
                }
            }
        }

        scene.build()
    }

    /// Paint the calendar onto a pixmap.
    ///
    /// # Errors
    ///
    /// Returns a render error if the canvas cannot be allocated or the scene
    /// is rejected.
    pub fn render_pixmap(&self, year: i32, habit_label: &str, log: &ActivityLog) -> Result<Pixmap> {
        let layout = CalendarLayout::compute(year, &self.style.layout);
        let streaks = StreakMap::compute(year, log);
        let svg = self.paint(&layout, &streaks, habit_label);
        Ok(raster::rasterize(&svg, layout.canvas, &self.fonts)?)
    }

    /// Render the calendar to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns a render error if drawing or encoding fails.
    pub fn render(&self, year: i32, habit_label: &str, log: &ActivityLog) -> Result<Vec<u8>> {
        let pixmap = self.render_pixmap(year, habit_label, log)?;
        Ok(export::encode_png(&pixmap)?)
    }

    /// Render the calendar and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an IO-kind error if the file cannot be written.
    pub fn render_to_file(
        &self,
        year: i32,
        habit_label: &str,
        log: &ActivityLog,
        path: &Path,
    ) -> Result<Artifact> {
        let png = self.render(year, habit_label, log)?;
        export::write_artifact(path, &png)
    }

    /// Render the calendar into `dir` under a name unique to this call.
    ///
    /// # Errors
    ///
    /// Returns an IO-kind error if the file cannot be written.
    pub fn render_to_dir(
        &self,
        year: i32,
        habit_label: &str,
        log: &ActivityLog,
        dir: &Path,
    ) -> Result<Artifact> {
        let path = dir.join(export::unique_file_name("stats"));
        self.render_to_file(year, habit_label, log, &path)
    }
}
