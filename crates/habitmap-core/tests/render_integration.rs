//! Integration tests for the calendar rendering pipeline.
//!
//! This test file verifies:
//! - The sample streak scenario end to end
//! - File output and cleanup
//! - Concurrent renders sharing one font store
//! - Rendering with real system fonts, when the host has any

use chrono::NaiveDate;
use habitmap_core::{
    intensity_level, ActivityLog, CalendarLayout, FontStore, HeatmapRenderer, LayoutConfig,
    Locale, Palette, RenderError, StreakMap, Style,
};
use resvg::usvg::fontdb;
use std::collections::HashMap;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_entries() -> HashMap<String, bool> {
    let mut entries = HashMap::new();
    for day in 3..=13 {
        entries.insert(format!("2026-01-{day:02}"), true);
    }
    entries.insert("2026-01-15".to_string(), true);
    entries
}

fn small_renderer() -> HeatmapRenderer {
    let style = Style {
        layout: LayoutConfig::with_multiplier(1.0),
        ..Style::default()
    };
    HeatmapRenderer::new(style, FontStore::from_database(fontdb::Database::new()))
}

#[test]
fn test_sample_scenario_levels() {
    let log = ActivityLog::from_map(&sample_entries());
    let streaks = StreakMap::compute(2026, &log);

    assert_eq!(streaks.get(date(2026, 1, 13)), Some(11));
    assert_eq!(intensity_level(11), 4);
    assert_eq!(streaks.get(date(2026, 1, 14)), Some(0));
    assert_eq!(intensity_level(0), 0);
    assert_eq!(streaks.get(date(2026, 1, 15)), Some(1));
    assert_eq!(intensity_level(1), 1);
}

#[test]
fn test_sample_scenario_pixels() {
    let renderer = small_renderer();
    let log = ActivityLog::from_map(&sample_entries());
    let pixmap = renderer.render_pixmap(2026, "Sweets", &log).unwrap();
    let layout = CalendarLayout::compute(2026, &renderer.style().layout);
    let palette = Palette::default();

    assert_eq!(pixmap.width(), layout.canvas.width);
    assert_eq!(pixmap.height(), layout.canvas.height);

    let mut counts = [0usize; 5];
    for cell in layout.cells() {
        let (cx, cy) = cell.center();
        let px = pixmap.pixel(cx as u32, cy as u32).unwrap();
        let level = palette
            .colors()
            .iter()
            .position(|c| (c.r, c.g, c.b) == (px.red(), px.green(), px.blue()))
            .expect("cell pixel matches a palette color");
        counts[level] += 1;
    }
    assert_eq!(counts, [353, 3, 3, 3, 3]);
}

#[test]
fn test_dates_outside_year_are_ignored() {
    let mut entries = sample_entries();
    entries.insert("2025-12-31".to_string(), true);
    entries.insert("2027-01-01".to_string(), true);
    entries.insert("garbage".to_string(), true);

    let renderer = small_renderer();
    let with_noise = renderer.render(2026, "x", &ActivityLog::from_map(&entries)).unwrap();
    let clean = renderer
        .render(2026, "x", &ActivityLog::from_map(&sample_entries()))
        .unwrap();
    assert_eq!(with_noise, clean);
}

#[test]
fn test_render_to_dir_writes_unique_files() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = small_renderer();
    let log = ActivityLog::from_map(&sample_entries());

    let a = renderer.render_to_dir(2026, "x", &log, dir.path()).unwrap();
    let b = renderer.render_to_dir(2026, "x", &log, dir.path()).unwrap();
    assert_ne!(a.path, b.path);
    assert_eq!(std::fs::read(&a.path).unwrap(), std::fs::read(&b.path).unwrap());

    a.remove().unwrap();
    b.remove().unwrap();
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.png");
    let err = small_renderer()
        .render_to_file(2026, "x", &ActivityLog::new(), &path)
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_concurrent_renders_match() {
    let renderer = Arc::new(small_renderer());
    let log = Arc::new(ActivityLog::from_map(&sample_entries()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let renderer = Arc::clone(&renderer);
            let log = Arc::clone(&log);
            std::thread::spawn(move || renderer.render(2026, "x", &log).unwrap())
        })
        .collect();

    let outputs: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_render_with_system_fonts() {
    let fonts = match FontStore::system() {
        Ok(fonts) => fonts,
        Err(e) => {
            eprintln!("Skipping test: no system fonts available ({e})");
            return;
        }
    };
    let style = Style {
        layout: LayoutConfig::with_multiplier(1.0),
        locale: Locale::Ru,
        ..Style::default()
    };
    let renderer = HeatmapRenderer::new(style, fonts);
    let log = ActivityLog::from_map(&sample_entries());

    let label = "НЕ ЕСТЬ СЛАДКУЮ ЕДУ 🍰".repeat(10);
    let a = renderer.render(2026, &label, &log).unwrap();
    let b = renderer.render(2026, &label, &log).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_system_font_draws_latin_title() {
    let fonts = match FontStore::system() {
        Ok(fonts) => fonts,
        Err(e) => {
            eprintln!("Skipping test: no system fonts available ({e})");
            return;
        }
    };
    let style = Style {
        layout: LayoutConfig::with_multiplier(1.0),
        ..Style::default()
    };
    let renderer = HeatmapRenderer::new(style, fonts);
    let log = ActivityLog::new();

    let blank = renderer.render(2026, "", &log).unwrap();
    let titled = renderer.render(2026, "Stretch", &log).unwrap();
    let other = renderer.render(2026, "Reading", &log).unwrap();
    assert_ne!(blank, titled, "family {}", renderer.fonts().family());
    assert_ne!(titled, other);
}

#[test]
fn test_unknown_family_fails_before_rendering() {
    let fonts = match FontStore::system() {
        Ok(fonts) => fonts,
        Err(e) => {
            eprintln!("Skipping test: no system fonts available ({e})");
            return;
        }
    };
    let err = fonts.with_family("NoSuchFamily").unwrap_err();
    assert!(matches!(err, RenderError::FontMissing { .. }));
}
