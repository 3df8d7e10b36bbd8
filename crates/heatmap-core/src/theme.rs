// File: crates/heatmap-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome colors.

use crate::palette::Rgba;

/// Colors for everything around the cells: background, axes, labels, and the
/// tooltip panel. The cell palette itself is fixed and not themed.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub tooltip_panel: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::new(250, 250, 252, 255),
            axis_line: Rgba::new(60, 60, 70, 255),
            axis_label: Rgba::new(20, 20, 30, 255),
            tick: Rgba::new(100, 100, 110, 255),
            tooltip_panel: Rgba::new(30, 30, 34, 230),
            tooltip_text: Rgba::new(245, 245, 250, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::new(18, 18, 20, 255),
            axis_line: Rgba::new(180, 180, 190, 255),
            axis_label: Rgba::new(235, 235, 245, 255),
            tick: Rgba::new(150, 150, 160, 255),
            tooltip_panel: Rgba::new(240, 240, 244, 230),
            tooltip_text: Rgba::new(20, 20, 24, 255),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
