// File: crates/heatmap-core/src/scene.rs
// Summary: Pure scene construction: cells, axes, legend, heading.

use std::collections::HashMap;

use crate::axis::{month_ticks, year_ticks, Tick};
use crate::data::Dataset;
use crate::error::{HeatmapError, HeatmapResult};
use crate::layout::{Layout, TICK_SIZE};
use crate::legend::{build_legend, LegendNode};
use crate::palette;
use crate::scale::{BandScale, ThresholdScale};

/// One heatmap cell, carrying the attributes external checks inspect.
#[derive(Clone, Copy, Debug)]
pub struct CellNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// 0-based month.
    pub month: u32,
    pub year: i32,
    /// Absolute temperature (base + variance).
    pub temp: f64,
    pub color_index: usize,
}

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Bottom,
}

/// Axis line, ticks, and title, positioned in surface coordinates.
#[derive(Clone, Debug)]
pub struct AxisNode {
    pub orientation: Orientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub tick_size: f64,
    pub ticks: Vec<Tick>,
    pub title: String,
}

/// Complete render output. Painting it to PNG or SVG is a separate pass,
/// so the mapping logic stays testable without a display.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub heading: String,
    pub cells: Vec<CellNode>,
    pub y_axis: AxisNode,
    pub x_axis: AxisNode,
    pub legend: LegendNode,
}

impl Scene {
    /// Cell under a surface-space point, if any.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&CellNode> {
        self.cells
            .iter()
            .find(|c| x >= c.x && x < c.x + c.width && y >= c.y && y < c.y + c.height)
    }
}

/// Build the full scene for a dataset.
///
/// Fails on an empty record list (no color domain to derive) and on months
/// outside 0-11 in hand-constructed datasets.
pub fn build_scene(data: &Dataset) -> HeatmapResult<Scene> {
    if data.monthly_variance.is_empty() {
        return Err(HeatmapError::EmptyDataset);
    }

    let colors = palette::heat_palette();
    let layout = Layout::for_records(data.monthly_variance.len(), colors.len());
    let years = data.distinct_years();
    let year_index: HashMap<i32, usize> =
        years.iter().enumerate().map(|(i, y)| (*y, i)).collect();

    let y_scale = BandScale::new(12, 0.0, layout.plot_height, true);
    let x_scale = BandScale::new(years.len(), 0.0, layout.plot_width, true);

    let temp_range = data.temp_range();
    let thresholds = ThresholdScale::equal_width(temp_range.0, temp_range.1, colors.len());

    let insets = layout.insets;
    let mut cells = Vec::with_capacity(data.monthly_variance.len());
    for rec in &data.monthly_variance {
        if rec.month > 11 {
            return Err(HeatmapError::MonthOutOfRange {
                year: rec.year,
                month: rec.month,
            });
        }
        let Some(&col) = year_index.get(&rec.year) else {
            continue;
        };
        let temp = data.absolute_temperature(rec);
        cells.push(CellNode {
            x: insets.left + x_scale.position(col),
            y: insets.top + y_scale.position(rec.month as usize),
            width: x_scale.bandwidth(),
            height: y_scale.bandwidth(),
            month: rec.month,
            year: rec.year,
            temp,
            color_index: thresholds.index_of(temp),
        });
    }

    let y_axis = AxisNode {
        orientation: Orientation::Left,
        x: insets.left,
        y: insets.top,
        length: layout.plot_height,
        tick_size: TICK_SIZE,
        ticks: month_ticks(&y_scale),
        title: "Months".to_string(),
    };
    let x_axis = AxisNode {
        orientation: Orientation::Bottom,
        x: insets.left,
        y: insets.top + layout.plot_height,
        length: layout.plot_width,
        tick_size: TICK_SIZE,
        ticks: year_ticks(&years, &x_scale),
        title: "Years".to_string(),
    };
    let legend = build_legend(&thresholds, temp_range, &layout);

    Ok(Scene {
        width: layout.surface_width(),
        height: layout.surface_height(),
        heading: data.heading(),
        cells,
        y_axis,
        x_axis,
        legend,
    })
}
