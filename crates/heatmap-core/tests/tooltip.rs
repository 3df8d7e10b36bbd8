// File: crates/heatmap-core/tests/tooltip.rs
// Purpose: Validate tooltip content formatting and hover state transitions.

use heatmap_core::{build_scene, Dataset, Tooltip, TooltipContent};

fn sample_dataset() -> Dataset {
    Dataset::from_json(
        r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -6.976},
                {"year": 1753, "month": 2, "variance": 0.301}
            ]
        }"#,
    )
    .expect("parse")
}

#[test]
fn content_formats_date_temperature_and_variance() {
    let data = sample_dataset();
    let content = TooltipContent::for_record(&data, &data.monthly_variance[0]);

    assert_eq!(content.date_line(), "1753 - January");
    assert_eq!(content.temperature_line(), "1.7");
    assert_eq!(content.variance_line(), "-7.0°C");
}

#[test]
fn positive_variance_keeps_an_explicit_sign() {
    let data = sample_dataset();
    let content = TooltipContent::for_record(&data, &data.monthly_variance[1]);
    assert_eq!(content.date_line(), "1753 - February");
    assert_eq!(content.variance_line(), "+0.3°C");
}

#[test]
fn enter_shows_and_leave_hides() {
    let data = sample_dataset();
    let content = TooltipContent::for_record(&data, &data.monthly_variance[0]);

    let mut tip = Tooltip::new();
    assert!(!tip.is_visible());

    tip.enter(content);
    assert!(tip.is_visible());
    assert_eq!(tip.data_year(), Some(1753));

    tip.leave();
    assert!(!tip.is_visible());
    // The panel keeps its last attributes after hiding.
    assert_eq!(tip.data_year(), Some(1753));

    tip.leave();
    assert!(!tip.is_visible(), "leave is idempotent");
}

#[test]
fn cell_hover_produces_consistent_content() {
    let data = sample_dataset();
    let scene = build_scene(&data).expect("scene");
    let cell = &scene.cells[0];

    let content = TooltipContent::for_cell(cell, data.base_temperature);
    assert_eq!(content.year, 1753);
    assert_eq!(content.month, 0);
    assert!((content.variance - (-6.976)).abs() < 1e-9);
    assert!((content.absolute_temp - 1.684).abs() < 1e-9);
}
