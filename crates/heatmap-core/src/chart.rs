// File: crates/heatmap-core/src/chart.rs
// Summary: Heatmap chart and headless PNG rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::data::Dataset;
use crate::error::HeatmapResult;
use crate::layout::FONT_SIZE;
use crate::palette::{self, Rgba};
use crate::scene::{build_scene, AxisNode, Orientation, Scene};
use crate::svg::scene_to_svg;
use crate::theme::Theme;
use crate::tooltip::{Tooltip, TooltipContent};

pub struct RenderOptions {
    pub theme: Theme,
    pub draw_labels: bool,
    /// Pointer position in surface coordinates; when it sits over a cell the
    /// tooltip panel is painted next to it.
    pub hover: Option<(f64, f64)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            draw_labels: true,
            hover: None,
        }
    }
}

pub struct HeatmapChart {
    pub dataset: Dataset,
}

impl HeatmapChart {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Pure render stage: dataset to scene graph. No surface is touched.
    pub fn scene(&self) -> HeatmapResult<Scene> {
        build_scene(&self.dataset)
    }

    /// Render the chart to an SVG string.
    pub fn svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let scene = self.scene()?;
        Ok(scene_to_svg(&scene, &opts.theme))
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let svg = self.svg_string(opts)?;
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, svg)?;
        Ok(())
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let scene = self.scene()?;
        let mut surface =
            skia::surfaces::raster_n32_premul((scene.width as i32, scene.height as i32))
                .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(to_skia(opts.theme.background));

        draw_cells(canvas, &scene);
        draw_axis(canvas, &scene.y_axis, opts);
        draw_axis(canvas, &scene.x_axis, opts);
        draw_legend(canvas, &scene, opts);

        if let Some((hx, hy)) = opts.hover {
            if let Some(cell) = scene.cell_at(hx, hy) {
                let mut tip = Tooltip::new();
                tip.enter(TooltipContent::for_cell(cell, self.dataset.base_temperature));
                draw_tooltip(canvas, &tip, (hx as f32, hy as f32), opts);
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn label_font() -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(FONT_SIZE as f32);
    font
}

fn draw_cells(canvas: &skia::Canvas, scene: &Scene) {
    let colors = palette::heat_palette();
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Fill);

    for cell in &scene.cells {
        if let Some(color) = colors.get(cell.color_index) {
            paint.set_color(to_skia(*color));
        }
        let rect = skia::Rect::from_xywh(
            cell.x as f32,
            cell.y as f32,
            cell.width as f32,
            cell.height as f32,
        );
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_axis(canvas: &skia::Canvas, axis: &AxisNode, opts: &RenderOptions) {
    let mut line_paint = skia::Paint::default();
    line_paint.set_color(to_skia(opts.theme.axis_line));
    line_paint.set_anti_alias(true);
    line_paint.set_stroke_width(1.0);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(to_skia(opts.theme.tick));
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let mut text_paint = skia::Paint::default();
    text_paint.set_color(to_skia(opts.theme.axis_label));
    text_paint.set_anti_alias(true);
    let font = label_font();

    let ox = axis.x as f32;
    let oy = axis.y as f32;
    let ts = axis.tick_size as f32;

    match axis.orientation {
        Orientation::Left => {
            canvas.draw_line((ox, oy), (ox, oy + axis.length as f32), &line_paint);
            for tick in &axis.ticks {
                let y = oy + tick.offset as f32;
                canvas.draw_line((ox - ts, y), (ox, y), &tick_paint);
                if opts.draw_labels {
                    let (advance, _) = font.measure_str(&tick.label, Some(&text_paint));
                    canvas.draw_str(
                        &tick.label,
                        (ox - ts - 3.0 - advance, y + FONT_SIZE as f32 * 0.35),
                        &font,
                        &text_paint,
                    );
                }
            }
            if opts.draw_labels {
                canvas.draw_str(
                    &axis.title,
                    (ox - 7.0 * FONT_SIZE as f32, oy - 4.0),
                    &font,
                    &text_paint,
                );
            }
        }
        Orientation::Bottom => {
            canvas.draw_line((ox, oy), (ox + axis.length as f32, oy), &line_paint);
            for tick in &axis.ticks {
                let x = ox + tick.offset as f32;
                canvas.draw_line((x, oy), (x, oy + ts), &tick_paint);
                if opts.draw_labels {
                    let (advance, _) = font.measure_str(&tick.label, Some(&text_paint));
                    canvas.draw_str(
                        &tick.label,
                        (x - advance / 2.0, oy + ts + FONT_SIZE as f32),
                        &font,
                        &text_paint,
                    );
                }
            }
            if opts.draw_labels {
                let (advance, _) = font.measure_str(&axis.title, Some(&text_paint));
                canvas.draw_str(
                    &axis.title,
                    (
                        ox + axis.length as f32 / 2.0 - advance / 2.0,
                        oy + 3.0 * FONT_SIZE as f32,
                    ),
                    &font,
                    &text_paint,
                );
            }
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    let colors = palette::heat_palette();
    let legend = &scene.legend;
    let ox = legend.x as f32;
    let oy = legend.y as f32;
    let sh = legend.swatch_height as f32;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(false);
    fill.set_style(skia::paint::Style::Fill);
    for swatch in &legend.swatches {
        if let Some(color) = colors.get(swatch.color_index) {
            fill.set_color(to_skia(*color));
        }
        let rect = skia::Rect::from_xywh(ox + swatch.x as f32, oy, swatch.width as f32, sh);
        canvas.draw_rect(rect, &fill);
    }

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(to_skia(opts.theme.tick));
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let mut text_paint = skia::Paint::default();
    text_paint.set_color(to_skia(opts.theme.axis_label));
    text_paint.set_anti_alias(true);
    let font = label_font();

    for tick in &legend.ticks {
        let x = ox + tick.offset as f32;
        canvas.draw_line((x, oy + sh), (x, oy + sh + 10.0), &tick_paint);
        if opts.draw_labels {
            let (advance, _) = font.measure_str(&tick.label, Some(&text_paint));
            canvas.draw_str(
                &tick.label,
                (x - advance / 2.0, oy + sh + 10.0 + FONT_SIZE as f32),
                &font,
                &text_paint,
            );
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tip: &Tooltip, at: (f32, f32), opts: &RenderOptions) {
    if !tip.is_visible() {
        return;
    }
    let Some(content) = tip.content() else {
        return;
    };

    let lines = [
        content.date_line(),
        content.temperature_line(),
        content.variance_line(),
    ];

    let mut text_paint = skia::Paint::default();
    text_paint.set_color(to_skia(opts.theme.tooltip_text));
    text_paint.set_anti_alias(true);
    let font = label_font();

    let line_height = FONT_SIZE as f32 + 4.0;
    let pad = 6.0f32;
    let width = lines
        .iter()
        .map(|l| font.measure_str(l, Some(&text_paint)).0)
        .fold(0.0f32, f32::max);
    let height = line_height * lines.len() as f32;

    // Panel sits north of the pointer, offset 10px up.
    let left = at.0 - (width + 2.0 * pad) / 2.0;
    let top = at.1 - 10.0 - height - 2.0 * pad;

    let mut panel = skia::Paint::default();
    panel.set_color(to_skia(opts.theme.tooltip_panel));
    panel.set_anti_alias(true);
    let rect = skia::Rect::from_xywh(left, top, width + 2.0 * pad, height + 2.0 * pad);
    canvas.draw_rect(rect, &panel);

    for (i, line) in lines.iter().enumerate() {
        canvas.draw_str(
            line,
            (left + pad, top + pad + line_height * (i as f32 + 1.0) - 4.0),
            &font,
            &text_paint,
        );
    }
}
