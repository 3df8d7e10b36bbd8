// File: crates/heatmap-core/src/axis.rs
// Summary: Tick synthesis for the month, year, and legend axes.

use chrono::NaiveDate;

use crate::scale::{BandScale, LinearScale};

/// A single tick: offset along the axis plus its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Full month name for a 0-based month index, via a reference date.
pub fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(1970, month + 1, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

/// One tick per month row, centered in its band.
pub fn month_ticks(scale: &BandScale) -> Vec<Tick> {
    (0..scale.len())
        .map(|m| Tick {
            offset: scale.position(m) + scale.bandwidth() / 2.0,
            label: month_name(m as u32),
        })
        .collect()
}

/// Ticks for years divisible by 10 only, to avoid axis crowding.
/// Labels use the full 4-digit year.
pub fn year_ticks(years: &[i32], scale: &BandScale) -> Vec<Tick> {
    years
        .iter()
        .enumerate()
        .filter(|(_, year)| *year % 10 == 0)
        .map(|(i, year)| Tick {
            offset: scale.position(i) + scale.bandwidth() / 2.0,
            label: format!("{year:04}"),
        })
        .collect()
}

/// One tick per threshold breakpoint, formatted to one decimal place.
pub fn legend_ticks(breakpoints: &[f64], scale: &LinearScale) -> Vec<Tick> {
    breakpoints
        .iter()
        .map(|b| Tick {
            offset: scale.to_px(*b),
            label: format!("{b:.1}"),
        })
        .collect()
}
