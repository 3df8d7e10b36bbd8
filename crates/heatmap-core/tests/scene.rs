// File: crates/heatmap-core/tests/scene.rs
// Purpose: Validate scene construction: cells, axes, legend, hit-testing.

use heatmap_core::{build_scene, Dataset, HeatmapError, MonthlyRecord, ThresholdScale};

fn synthetic_dataset(first_year: i32, last_year: i32) -> Dataset {
    let mut records = Vec::new();
    for year in first_year..=last_year {
        for month in 0..12u32 {
            let variance = ((year as f64 * 12.0 + month as f64) % 25.0) * 0.1 - 1.2;
            records.push(MonthlyRecord {
                year,
                month,
                variance,
            });
        }
    }
    Dataset {
        base_temperature: 8.66,
        monthly_variance: records,
    }
}

#[test]
fn one_cell_per_record_with_matching_attributes() {
    let data = synthetic_dataset(1753, 1755);
    let scene = build_scene(&data).expect("scene");
    assert_eq!(scene.cells.len(), data.monthly_variance.len());

    for (cell, rec) in scene.cells.iter().zip(&data.monthly_variance) {
        assert_eq!(cell.month, rec.month);
        assert_eq!(cell.year, rec.year);
        let temp = data.base_temperature + rec.variance;
        assert!((cell.temp - temp).abs() < 1e-9);
    }
}

#[test]
fn surface_geometry_follows_record_count() {
    let data = synthetic_dataset(1753, 1755); // 36 records, 3 year columns
    let scene = build_scene(&data).expect("scene");
    assert!((scene.width - (3.0 * 3.0 + 180.0)).abs() < 1e-9);
    assert!((scene.height - (33.0 * 12.0 + 90.0)).abs() < 1e-9);
}

#[test]
fn x_axis_ticks_only_on_decade_years() {
    let data = synthetic_dataset(1750, 2015);
    let scene = build_scene(&data).expect("scene");

    let labels: Vec<&str> = scene.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    let expected: Vec<String> = (0..27).map(|i| format!("{}", 1750 + i * 10)).collect();
    assert_eq!(labels, expected.iter().map(String::as_str).collect::<Vec<_>>());

    let mut prev = f64::NEG_INFINITY;
    for tick in &scene.x_axis.ticks {
        assert!(tick.offset > prev, "decade ticks out of order");
        prev = tick.offset;
    }
}

#[test]
fn y_axis_has_twelve_full_month_names() {
    let data = synthetic_dataset(1753, 1755);
    let scene = build_scene(&data).expect("scene");
    let labels: Vec<&str> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(labels[0], "January");
    assert_eq!(labels[5], "June");
    assert_eq!(labels[11], "December");
}

#[test]
fn legend_swatches_tile_the_fixed_width() {
    let data = synthetic_dataset(1753, 1800);
    let scene = build_scene(&data).expect("scene");
    let legend = &scene.legend;

    assert_eq!(legend.swatches.len(), 11);
    assert_eq!(legend.ticks.len(), 10);

    let total: f64 = legend.swatches.iter().map(|s| s.width).sum();
    assert!((total - 400.0).abs() < 1e-6, "swatches cover {total}px");
    assert!(legend.swatches[0].x.abs() < 1e-9);
    let last = &legend.swatches[10];
    assert!((last.x + last.width - 400.0).abs() < 1e-6);
}

#[test]
fn cell_fill_agrees_with_the_threshold_mapping() {
    let data = synthetic_dataset(1753, 1800);
    let scene = build_scene(&data).expect("scene");

    let (lo, hi) = data.temp_range();
    let thresholds = ThresholdScale::equal_width(lo, hi, 11);
    for cell in &scene.cells {
        assert_eq!(cell.color_index, thresholds.index_of(cell.temp));
        assert!(cell.color_index < 11);
    }
}

#[test]
fn empty_dataset_does_not_render() {
    let data = Dataset {
        base_temperature: 8.66,
        monthly_variance: Vec::new(),
    };
    let err = build_scene(&data).expect_err("empty dataset must fail");
    assert!(matches!(err, HeatmapError::EmptyDataset));
}

#[test]
fn unnormalized_month_is_rejected_by_the_scene() {
    let data = Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![MonthlyRecord {
            year: 2000,
            month: 12,
            variance: 0.0,
        }],
    };
    let err = build_scene(&data).expect_err("month 12 must fail");
    assert!(matches!(
        err,
        HeatmapError::MonthOutOfRange { year: 2000, month: 12 }
    ));
}

#[test]
fn cell_at_finds_the_hovered_cell() {
    let data = synthetic_dataset(1753, 1755);
    let scene = build_scene(&data).expect("scene");

    let target = &scene.cells[14];
    let hit = scene
        .cell_at(target.x + target.width / 2.0, target.y + target.height / 2.0)
        .expect("hover over a cell center must hit");
    assert_eq!(hit.year, target.year);
    assert_eq!(hit.month, target.month);

    assert!(scene.cell_at(0.0, 0.0).is_none(), "inset area is not a cell");
}
