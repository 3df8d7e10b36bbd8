// File: crates/heatmap-core/src/tooltip.rs
// Summary: Typed tooltip content, pure formatting, and hover visibility state.

use crate::axis::month_name;
use crate::data::{Dataset, MonthlyRecord};
use crate::scene::CellNode;

/// What the tooltip panel displays for one hovered cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipContent {
    pub year: i32,
    /// 0-based month.
    pub month: u32,
    pub absolute_temp: f64,
    pub variance: f64,
}

impl TooltipContent {
    pub fn for_record(data: &Dataset, rec: &MonthlyRecord) -> Self {
        Self {
            year: rec.year,
            month: rec.month,
            absolute_temp: data.absolute_temperature(rec),
            variance: rec.variance,
        }
    }

    pub fn for_cell(cell: &CellNode, base_temperature: f64) -> Self {
        Self {
            year: cell.year,
            month: cell.month,
            absolute_temp: cell.temp,
            variance: cell.temp - base_temperature,
        }
    }

    /// Year and full month name, e.g. "1753 - January".
    pub fn date_line(&self) -> String {
        format!("{} - {}", self.year, month_name(self.month))
    }

    /// Absolute temperature to one decimal place.
    pub fn temperature_line(&self) -> String {
        format!("{:.1}", self.absolute_temp)
    }

    /// Signed variance to one decimal place with the degree suffix.
    pub fn variance_line(&self) -> String {
        format!("{:+.1}°C", self.variance)
    }
}

/// Hover panel state: shown with content on pointer enter, hidden on leave.
/// The last content (and with it the hovered year) survives a leave; hiding
/// only toggles visibility.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tooltip {
    visible: bool,
    content: Option<TooltipContent>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, content: TooltipContent) {
        self.content = Some(content);
        self.visible = true;
    }

    pub fn leave(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// Year of the most recently hovered cell.
    pub fn data_year(&self) -> Option<i32> {
        self.content.map(|c| c.year)
    }
}
