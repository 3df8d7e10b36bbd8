// File: crates/heatmap-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNG and SVG.

use heatmap_core::{Dataset, HeatmapChart, MonthlyRecord, RenderOptions};

fn synthetic_dataset() -> Dataset {
    let mut records = Vec::new();
    for year in 1900..1920 {
        for month in 0..12u32 {
            records.push(MonthlyRecord {
                year,
                month,
                variance: ((year - 1900) as f64 * 0.1) - 1.0 + month as f64 * 0.05,
            });
        }
    }
    Dataset {
        base_temperature: 8.66,
        monthly_variance: records,
    }
}

#[test]
fn render_smoke_png() {
    let chart = HeatmapChart::new(synthetic_dataset());
    let opts = RenderOptions::default();

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_png_with_hover_tooltip() {
    let chart = HeatmapChart::new(synthetic_dataset());
    let scene = chart.scene().expect("scene");
    let cell = &scene.cells[30];

    let mut opts = RenderOptions::default();
    opts.hover = Some((cell.x + cell.width / 2.0, cell.y + cell.height / 2.0));

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_svg() {
    let chart = HeatmapChart::new(synthetic_dataset());
    let opts = RenderOptions::default();

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&opts, &out).expect("render should succeed");

    let svg = std::fs::read_to_string(&out).expect("output exists");
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
}
