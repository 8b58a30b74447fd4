use std::path::Path;

use chrono::Local;
use log::debug;
use palette::Srgb;
use plotters::element::{Polygon, Rectangle, Text};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;

use super::plan::{DrawPlan, ShapeKind};
use super::{PlotError, Variant, X_MAX, X_MIN, Y_MAX, Y_MIN};

type Result<T> = core::result::Result<T, PlotError>;

const CANVAS_SIZE: (u32, u32) = (1000, 1000);

/// Luminosity header string. Two near-identical versions existed in the
/// source scripts; this is the canonical, later one, used for both
/// variants.
const LUMI_TEXT: &str = "35.9-101 fb⁻¹ (13 TeV)";

/// Output filename for a run: `comparison_v{variant}_{YYYYMMDD}.png`.
pub fn output_filename(variant: Variant) -> String {
    format!(
        "comparison_v{}_{}.png",
        variant.index(),
        Local::now().format("%Y%m%d")
    )
}

// ---------------------------------------------------------------------------
// Chart rendering
// ---------------------------------------------------------------------------

/// Draw the comparison chart for a resolved plan and write it to `output`.
///
/// The plan is fully resolved before this is called, so the only failures
/// left here are backend ones; a failed run leaves no partial figure
/// behind beyond what the backend itself aborts on.
pub fn render_chart(plan: &DrawPlan, variant: Variant, output: &Path) -> Result<()> {
    debug!(
        "rendering {} shapes, {} legend entries to {}",
        plan.shapes.len(),
        plan.legend.len(),
        output.display()
    );

    let root = BitMapBackend::new(output, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(60)
        .x_label_area_size(80)
        .y_label_area_size(110)
        .build_cartesian_2d((X_MIN..X_MAX).log_scale(), (Y_MIN..Y_MAX).log_scale())
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(variant.x_label())
        .y_desc(variant.y_label())
        .axis_desc_style(("sans-serif", 30))
        .label_style(("sans-serif", 22))
        .x_label_formatter(&|x| format!("{x}"))
        .y_label_formatter(&|y| format!("{y:.0e}"))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // ---- Excluded regions: fill first, outline on top ----
    for shape in &plan.shapes {
        let fill = solid(shape.fill_color).mix(shape.fill_alpha).filled();
        chart
            .draw_series(std::iter::once(Polygon::new(
                shape.fill_boundary.clone(),
                fill,
            )))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        // Bands only outline the curve itself, like the source plot;
        // closed regions get their boundary redrawn by the polygon line.
        let mut line = shape.outline.clone();
        if shape.kind == ShapeKind::Closed {
            if let Some(&first) = shape.outline.first() {
                line.push(first);
            }
        }
        chart
            .draw_series(LineSeries::new(line, solid(shape.outline_color)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    // Pixel extents of the plot area, for overlay placement.
    let (px, py) = chart.plotting_area().get_pixel_range();
    let (width, height) = (px.end - px.start, py.end - py.start);

    draw_legend(&root, plan, variant, (px.start, py.end))?;

    // ---- Branching-fraction annotation at axes-fraction (0.04, 0.37) ----
    let ann_style = match variant {
        Variant::V0 => ("sans-serif", 24).into_font(),
        Variant::V1 => ("sans-serif", 24).into_font().style(FontStyle::Italic),
    };
    root.draw(&Text::new(
        "B(h → 2γ_D / 2Z_D) = 1%",
        (
            px.start + (0.04 * width as f64) as i32,
            py.start + (0.63 * height as f64) as i32,
        ),
        ann_style.color(&BLACK),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    draw_header(&root, (px.start, px.end, py.start))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

/// The manually assembled legend in the lower-left corner: one patch per
/// category, each with a search caption and journal reference line.
fn draw_legend(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plan: &DrawPlan,
    variant: Variant,
    (left, bottom): (i32, i32),
) -> Result<()> {
    let (font_size, font_style) = match variant {
        Variant::V0 => (22, FontStyle::Normal),
        Variant::V1 => (20, FontStyle::Bold),
    };
    let caption_font = ("sans-serif", font_size).into_font().style(font_style);

    const ENTRY_HEIGHT: i32 = 72;
    const PATCH_W: i32 = 38;
    const PATCH_H: i32 = 32;

    let x0 = left + 20;
    let block_top = bottom - 20 - ENTRY_HEIGHT * plan.legend.len() as i32;

    for (i, entry) in plan.legend.iter().enumerate() {
        let y0 = block_top + ENTRY_HEIGHT * i as i32;

        // Patch: half-opacity fill with a solid border, matching the
        // source plot's legend patches.
        root.draw(&Rectangle::new(
            [(x0, y0), (x0 + PATCH_W, y0 + PATCH_H)],
            solid(entry.fill_color).mix(0.5).filled(),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
        root.draw(&Rectangle::new(
            [(x0, y0), (x0 + PATCH_W, y0 + PATCH_H)],
            solid(entry.outline_color).stroke_width(2),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

        let text_x = x0 + PATCH_W + 12;
        root.draw(&Text::new(
            entry.caption[0],
            (text_x, y0),
            caption_font.clone().color(&BLACK),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
        root.draw(&Text::new(
            entry.caption[1],
            (text_x, y0 + font_size + 6),
            caption_font.clone().color(&BLACK),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}

/// Standard scientific-plot header: experiment watermark on the left,
/// luminosity string right-aligned, both above the axes frame.
fn draw_header(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    (left, right, top): (i32, i32, i32),
) -> Result<()> {
    let y = top - 40;

    root.draw(&Text::new(
        "CMS",
        (left, y),
        ("sans-serif", 34)
            .into_font()
            .style(FontStyle::Bold)
            .color(&BLACK),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.draw(&Text::new(
        "Preliminary",
        (left + 90, y),
        ("sans-serif", 30)
            .into_font()
            .style(FontStyle::Italic)
            .color(&BLACK),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let right_anchor = Pos::new(HPos::Right, VPos::Top);
    root.draw(&Text::new(
        LUMI_TEXT,
        (right, y),
        ("sans-serif", 30).into_font().color(&BLACK).pos(right_anchor),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn solid(color: Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}
