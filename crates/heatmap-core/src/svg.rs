// File: crates/heatmap-core/src/svg.rs
// Summary: SVG document writer for a rendered scene.

use crate::layout::FONT_SIZE;
use crate::palette;
use crate::scene::{AxisNode, Orientation, Scene};
use crate::theme::Theme;

/// Serialize a scene as a standalone SVG document.
///
/// Cell rects carry `data-month` (0-based), `data-year`, and `data-temp`
/// attributes so the output can be inspected without re-deriving the scales.
pub fn scene_to_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    ));
    out.push('\n');
    out.push_str(&format!("  <title>{}</title>\n", escape(&scene.heading)));
    out.push_str(&format!(
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        scene.width,
        scene.height,
        theme.background.to_hex()
    ));
    out.push('\n');

    write_axis(&mut out, &scene.y_axis, theme);
    write_axis(&mut out, &scene.x_axis, theme);
    write_cells(&mut out, scene);
    write_legend(&mut out, scene, theme);

    out.push_str("</svg>\n");
    out
}

fn write_axis(out: &mut String, axis: &AxisNode, theme: &Theme) {
    let id = match axis.orientation {
        Orientation::Left => "y-axis",
        Orientation::Bottom => "x-axis",
    };
    out.push_str(&format!(
        r#"  <g id="{id}" class="{id}" transform="translate({},{})">"#,
        axis.x, axis.y
    ));
    out.push('\n');

    let line = theme.axis_line.to_hex();
    let label = theme.axis_label.to_hex();
    let tick_color = theme.tick.to_hex();
    match axis.orientation {
        Orientation::Left => {
            out.push_str(&format!(
                r#"    <line x1="0" y1="0" x2="0" y2="{}" stroke="{line}"/>"#,
                axis.length
            ));
            out.push('\n');
            for tick in &axis.ticks {
                out.push_str(&format!(
                    r#"    <line x1="{}" y1="{o}" x2="0" y2="{o}" stroke="{tick_color}"/>"#,
                    -axis.tick_size,
                    o = tick.offset
                ));
                out.push('\n');
                out.push_str(&format!(
                    r#"    <text x="{}" y="{}" text-anchor="end" dominant-baseline="middle" font-size="{FONT_SIZE}" fill="{label}">{}</text>"#,
                    -axis.tick_size - 3.0,
                    tick.offset,
                    escape(&tick.label)
                ));
                out.push('\n');
            }
            out.push_str(&format!(
                r#"    <text transform="translate({},{}) rotate(-90)" text-anchor="middle" font-size="{FONT_SIZE}" fill="{label}">{}</text>"#,
                -7.0 * FONT_SIZE,
                axis.length / 2.0,
                escape(&axis.title)
            ));
            out.push('\n');
        }
        Orientation::Bottom => {
            out.push_str(&format!(
                r#"    <line x1="0" y1="0" x2="{}" y2="0" stroke="{line}"/>"#,
                axis.length
            ));
            out.push('\n');
            for tick in &axis.ticks {
                out.push_str(&format!(
                    r#"    <line x1="{o}" y1="0" x2="{o}" y2="{}" stroke="{tick_color}"/>"#,
                    axis.tick_size,
                    o = tick.offset
                ));
                out.push('\n');
                out.push_str(&format!(
                    r#"    <text x="{}" y="{}" text-anchor="middle" font-size="{FONT_SIZE}" fill="{label}">{}</text>"#,
                    tick.offset,
                    axis.tick_size + FONT_SIZE,
                    escape(&tick.label)
                ));
                out.push('\n');
            }
            out.push_str(&format!(
                r#"    <text x="{}" y="{}" text-anchor="middle" font-size="{FONT_SIZE}" fill="{label}">{}</text>"#,
                axis.length / 2.0,
                3.0 * FONT_SIZE,
                escape(&axis.title)
            ));
            out.push('\n');
        }
    }
    out.push_str("  </g>\n");
}

fn write_cells(out: &mut String, scene: &Scene) {
    let colors = palette::heat_palette();
    out.push_str("  <g class=\"map\">\n");
    for cell in &scene.cells {
        let fill = colors
            .get(cell.color_index)
            .map(|c| c.to_hex())
            .unwrap_or_else(|| "#000000".to_string());
        out.push_str(&format!(
            r#"    <rect class="cell" data-month="{}" data-year="{}" data-temp="{}" x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
            cell.month, cell.year, cell.temp, cell.x, cell.y, cell.width, cell.height
        ));
        out.push('\n');
    }
    out.push_str("  </g>\n");
}

fn write_legend(out: &mut String, scene: &Scene, theme: &Theme) {
    let colors = palette::heat_palette();
    let legend = &scene.legend;
    out.push_str(&format!(
        r#"  <g id="legend" class="legend" transform="translate({},{})">"#,
        legend.x, legend.y
    ));
    out.push('\n');
    for swatch in &legend.swatches {
        let fill = colors
            .get(swatch.color_index)
            .map(|c| c.to_hex())
            .unwrap_or_else(|| "#000000".to_string());
        out.push_str(&format!(
            r#"    <rect x="{}" y="0" width="{}" height="{}" fill="{fill}"/>"#,
            swatch.x, swatch.width, legend.swatch_height
        ));
        out.push('\n');
    }
    let tick_color = theme.tick.to_hex();
    let label = theme.axis_label.to_hex();
    for tick in &legend.ticks {
        out.push_str(&format!(
            r#"    <line x1="{o}" y1="{}" x2="{o}" y2="{}" stroke="{tick_color}"/>"#,
            legend.swatch_height,
            legend.swatch_height + 10.0,
            o = tick.offset
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"    <text x="{}" y="{}" text-anchor="middle" font-size="{FONT_SIZE}" fill="{label}">{}</text>"#,
            tick.offset,
            legend.swatch_height + 10.0 + FONT_SIZE,
            escape(&tick.label)
        ));
        out.push('\n');
    }
    out.push_str("  </g>\n");
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
