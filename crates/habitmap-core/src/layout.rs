//! Calendar geometry.
//!
//! Twelve month panels in a 4×3 grid, each holding a Monday-first 7×6 grid of
//! day cells. All lengths are base values scaled by a single quality
//! multiplier, so the whole canvas scales linearly with it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month panels per canvas row.
pub const PANEL_COLUMNS: u32 = 4;
/// Month panel rows.
pub const PANEL_ROWS: u32 = 3;
/// Days per week row.
pub const WEEK_DAYS: u32 = 7;
/// Week rows reserved in every panel. A 31-day month starting on Sunday
/// spans six rows.
pub const MAX_WEEK_ROWS: u32 = 6;

/// Largest accepted quality multiplier. At this value the canvas is
/// 9056×8016 pixels.
pub const MAX_MULTIPLIER: f64 = 8.0;

/// Base geometry constants, before scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub multiplier: f64,
    pub cell_size: f64,
    pub spacing: f64,
    pub padding: f64,
    /// Extra panel width beyond the cell grid.
    pub panel_extra_width: f64,
    /// Extra panel height beyond the cell grid (month name, weekday row).
    pub panel_extra_height: f64,
    /// Space above the first panel row for title and subtitle.
    pub header_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::with_multiplier(2.0)
    }
}

impl LayoutConfig {
    pub fn with_multiplier(multiplier: f64) -> Self {
        Self {
            multiplier,
            cell_size: 20.0,
            spacing: 4.0,
            padding: 60.0,
            panel_extra_width: 40.0,
            panel_extra_height: 60.0,
            header_height: 150.0,
        }
    }

    /// Scale a base length by the multiplier.
    pub fn scaled(&self, base: f64) -> f64 {
        base * self.multiplier
    }

    pub fn cell_size(&self) -> f64 {
        self.scaled(self.cell_size)
    }

    pub fn spacing(&self) -> f64 {
        self.scaled(self.spacing)
    }

    pub fn padding(&self) -> f64 {
        self.scaled(self.padding)
    }

    /// Distance between neighbouring cell origins.
    pub fn cell_pitch(&self) -> f64 {
        self.cell_size() + self.spacing()
    }

    pub fn corner_radius(&self) -> f64 {
        self.scaled(4.0)
    }

    pub fn panel_width(&self) -> f64 {
        WEEK_DAYS as f64 * self.cell_pitch() + self.scaled(self.panel_extra_width)
    }

    pub fn panel_height(&self) -> f64 {
        MAX_WEEK_ROWS as f64 * self.cell_pitch() + self.scaled(self.panel_extra_height)
    }

    pub fn header_height(&self) -> f64 {
        self.scaled(self.header_height)
    }

    pub fn canvas_width(&self) -> f64 {
        PANEL_COLUMNS as f64 * self.panel_width() + (PANEL_COLUMNS + 1) as f64 * self.padding()
    }

    pub fn canvas_height(&self) -> f64 {
        PANEL_ROWS as f64 * self.panel_height()
            + (PANEL_ROWS + 1) as f64 * self.padding()
            + self.header_height()
    }

    /// Canvas size in whole pixels.
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize {
            width: self.canvas_width().round() as u32,
            height: self.canvas_height().round() as u32,
        }
    }

    /// Vertical centre of the title line.
    pub fn title_y(&self) -> f64 {
        self.scaled(60.0)
    }

    /// Vertical centre of the subtitle line.
    pub fn subtitle_y(&self) -> f64 {
        self.scaled(100.0)
    }

    /// Month name baseline, relative to the panel origin.
    pub fn month_label_rise(&self) -> f64 {
        self.scaled(15.0)
    }

    /// First cell row, relative to the panel origin.
    pub fn grid_drop(&self) -> f64 {
        self.scaled(25.0)
    }

    /// Horizontal distance from the panel origin to the week-number centre.
    pub fn week_label_inset(&self) -> f64 {
        self.scaled(15.0)
    }
}

/// Pixel dimensions of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// One calendar day placed inside its month panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Zero-based day of month.
    pub day_index: u32,
    pub column: u32,
    pub row: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// ISO week number, present only for the first column.
    pub week_number: Option<u32>,
}

impl DayCell {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// One month's region of the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPanel {
    /// Calendar month, 1..=12.
    pub month: u32,
    pub x: f64,
    pub y: f64,
    /// Monday-based weekday of day 1 (Monday = 0, Sunday = 6).
    pub offset: u32,
    pub cells: Vec<DayCell>,
}

impl MonthPanel {
    /// Number of week rows actually used.
    pub fn rows_used(&self) -> u32 {
        self.cells.last().map(|c| c.row + 1).unwrap_or(0)
    }
}

/// Monday-based weekday offset of the first day of `month`.
pub fn month_offset(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.weekday().num_days_from_monday())
}

/// Full geometry for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarLayout {
    pub year: i32,
    pub canvas: CanvasSize,
    pub panels: Vec<MonthPanel>,
}

impl CalendarLayout {
    /// Lay out every month of `year`.
    pub fn compute(year: i32, config: &LayoutConfig) -> Self {
        let panels = (1..=12)
            .filter_map(|month| Self::panel(year, month, config))
            .collect();
        let canvas = config.canvas_size();

        tracing::debug!(
            year,
            width = canvas.width,
            height = canvas.height,
            multiplier = config.multiplier,
            "Computed calendar layout"
        );

        Self {
            year,
            canvas,
            panels,
        }
    }

    fn panel(year: i32, month: u32, config: &LayoutConfig) -> Option<MonthPanel> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset = first.weekday().num_days_from_monday();

        let index = month - 1;
        let panel_col = index % PANEL_COLUMNS;
        let panel_row = index / PANEL_COLUMNS;
        let padding = config.padding();
        let x = padding + panel_col as f64 * (config.panel_width() + padding);
        let y = config.header_height() + panel_row as f64 * (config.panel_height() + padding);

        let pitch = config.cell_pitch();
        let cells = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| {
                let day_index = date.day0();
                let slot = day_index + offset;
                let column = slot % WEEK_DAYS;
                let row = slot / WEEK_DAYS;
                DayCell {
                    date,
                    day_index,
                    column,
                    row,
                    x: x + column as f64 * pitch,
                    y: y + config.grid_drop() + row as f64 * pitch,
                    size: config.cell_size(),
                    week_number: (column == 0).then(|| date.iso_week().week()),
                }
            })
            .collect();

        Some(MonthPanel {
            month,
            x,
            y,
            offset,
            cells,
        })
    }

    /// Find the cell for `date`.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        if date.year() != self.year {
            return None;
        }
        self.panels
            .get(date.month0() as usize)?
            .cells
            .get(date.day0() as usize)
    }

    /// All cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.panels.iter().flat_map(|p| p.cells.iter())
    }
}
