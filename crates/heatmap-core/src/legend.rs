// File: crates/heatmap-core/src/legend.rs
// Summary: Legend synthesis: one swatch per color over the threshold segments.

use crate::axis::{legend_ticks, Tick};
use crate::layout::{Layout, LEGEND_WIDTH};
use crate::scale::{LinearScale, ThresholdScale};

/// One legend rectangle covering a threshold segment.
#[derive(Clone, Copy, Debug)]
pub struct Swatch {
    pub x: f64,
    pub width: f64,
    pub color_index: usize,
}

/// Horizontal legend strip: swatches over a linear value axis.
#[derive(Clone, Debug)]
pub struct LegendNode {
    pub x: f64,
    pub y: f64,
    pub swatch_height: f64,
    pub swatches: Vec<Swatch>,
    pub ticks: Vec<Tick>,
}

/// Map each threshold segment through a linear scale onto the fixed legend
/// width; the unbounded outer segments are clamped to the temperature range.
pub fn build_legend(
    thresholds: &ThresholdScale,
    temp_range: (f64, f64),
    layout: &Layout,
) -> LegendNode {
    let scale = LinearScale::new(temp_range.0, temp_range.1, 0.0, LEGEND_WIDTH);
    let swatches = (0..thresholds.buckets())
        .map(|i| {
            let (lo, hi) = thresholds.extent_of(i);
            let lo = lo.unwrap_or(temp_range.0);
            let hi = hi.unwrap_or(temp_range.1);
            let x = scale.to_px(lo);
            Swatch {
                x,
                width: scale.to_px(hi) - x,
                color_index: i,
            }
        })
        .collect();

    let (x, y) = layout.legend_origin();
    LegendNode {
        x,
        y,
        swatch_height: layout.legend_swatch_height,
        swatches,
        ticks: legend_ticks(thresholds.breakpoints(), &scale),
    }
}
