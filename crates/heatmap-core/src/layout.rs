// File: crates/heatmap-core/src/layout.rs
// Summary: Shared geometry: font-derived insets, plot and legend boxes.

/// Base font size in pixels; the insets are multiples of it.
pub const FONT_SIZE: f64 = 10.0;
/// Height of one month row in pixels.
pub const CELL_HEIGHT: f64 = 33.0;
/// Horizontal pixels per year column.
pub const YEAR_WIDTH: f64 = 3.0;
/// Total width of the legend strip in pixels.
pub const LEGEND_WIDTH: f64 = 400.0;
/// Vertical space divided across legend swatches.
const LEGEND_BAND: f64 = 300.0;
/// Axis tick mark length in pixels.
pub const TICK_SIZE: f64 = 10.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 {
        self.left + self.right
    }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    /// Left/right host month labels and the rotated axis title; the bottom
    /// hosts the year axis and the legend strip.
    fn default() -> Self {
        Self::new(9.0 * FONT_SIZE, 9.0 * FONT_SIZE, FONT_SIZE, 8.0 * FONT_SIZE)
    }
}

/// Derived chart geometry for one dataset.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub insets: Insets,
    pub plot_width: f64,
    pub plot_height: f64,
    pub legend_swatch_height: f64,
}

impl Layout {
    /// Geometry for `record_count` monthly records: the plot widens with the
    /// number of year columns, the height is fixed at twelve month rows.
    pub fn for_records(record_count: usize, palette_len: usize) -> Self {
        let year_columns = (record_count as f64 / 12.0).ceil();
        Self {
            insets: Insets::default(),
            plot_width: YEAR_WIDTH * year_columns,
            plot_height: CELL_HEIGHT * 12.0,
            legend_swatch_height: LEGEND_BAND / palette_len.max(1) as f64,
        }
    }

    pub fn surface_width(&self) -> f64 {
        self.plot_width + self.insets.hsum()
    }

    pub fn surface_height(&self) -> f64 {
        self.plot_height + self.insets.vsum()
    }

    /// Top-left corner of the legend group, inside the bottom inset.
    pub fn legend_origin(&self) -> (f64, f64) {
        (
            self.insets.left,
            self.insets.top + self.plot_height + self.insets.bottom
                - 2.0 * self.legend_swatch_height,
        )
    }
}
