//! Visualization: render annotated bar charts to **SVG** or **PNG**.
//!
//! - [`chart::BarChart`] describes what to draw; builders exist for the solved-count
//!   histogram and the per-problem solver chart
//! - [`render`] picks the backend from the file extension (`.svg`, anything else PNG)
//! - Locale-aware y tick labels (`30,000` vs `30.000`)

pub mod chart;
pub mod util;

pub use chart::{
    Annotation, Bar, BarChart, LegendEntry, Rgb, histogram_file_name, problem_chart_file_name,
    problem_solves_chart, solved_histogram_chart,
};

use crate::error::{Error, Result};
use log::debug;
use num_format::Locale;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use util::{compute_left_label_area_px, format_count_label, map_locale, office_color, to_rgb};

/// One-time registration for a "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        // from `src/viz/mod.rs` → project root → `assets/DejaVuSans.ttf`
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render `chart` to `out_path` (`width` × `height` pixels).
///
/// `locale_tag` selects thousands separators of the y-axis (`"en"`, `"de"`, ...).
///
/// ### Errors
/// [`Error::Render`] when the chart has no bars or the backend fails (e.g. the output
/// directory does not exist).
pub fn render<P: AsRef<Path>>(
    chart: &BarChart,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
) -> Result<()> {
    if chart.bars.is_empty() {
        return Err(Error::Render("no bars to plot".to_string()));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let locale = map_locale(locale_tag);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, chart, locale)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, chart, locale)?;
    }
    debug!("rendered {} bars to {}", chart.bars.len(), out_path.display());
    Ok(())
}

fn annotation_style(color: Rgb) -> TextStyle<'static> {
    (FontFamily::SansSerif, 13.0)
        .into_font()
        .color(&to_rgb(color))
        .pos(Pos::new(HPos::Center, VPos::Bottom))
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, chart: &BarChart, locale: &Locale) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: u32 = 16;
    const Y_TICKS: usize = 10;

    root.fill(&WHITE).map_err(Error::render)?;

    let n = chart.bars.len();
    let y_max = chart.y_max();
    let left_label_width_px = compute_left_label_area_px(y_max, Y_TICKS, 12, locale);

    let mut ctx = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(chart.title.as_str(), (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, left_label_width_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..y_max)
        .map_err(Error::render)?;

    // Bars sit on integer x positions; ticks that land between them get no label.
    let x_label_fmt = |x: &f64| {
        let i = x.round();
        if (x - i).abs() > 1e-6 || i < 0.0 {
            return String::new();
        }
        chart
            .bars
            .get(i as usize)
            .map(|b| b.label.clone())
            .unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| format_count_label(*v, locale);

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .x_labels(n)
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(Error::render)?;

    let half = chart.bar_width / 2.0;
    let fill = office_color(0);
    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, b)| {
        let x = i as f64;
        Rectangle::new([(x - half, 0.0), (x + half, b.value)], fill.filled())
    }))
    .map_err(Error::render)?;
    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, b)| {
        let x = i as f64;
        Rectangle::new([(x - half, 0.0), (x + half, b.value)], BLACK.stroke_width(1))
    }))
    .map_err(Error::render)?;

    ctx.draw_series(chart.bars.iter().enumerate().flat_map(|(i, b)| {
        b.annotations.iter().enumerate().map(move |(slot, a)| {
            Text::new(
                a.text.clone(),
                (i as f64, chart.annotation_y(b.value, slot)),
                annotation_style(a.color),
            )
        })
    }))
    .map_err(Error::render)?;

    if !chart.legend.is_empty() {
        if !chart.legend_title.is_empty() {
            ctx.draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
                .map_err(Error::render)?
                .label(chart.legend_title.clone())
                .legend(|(x, y)| EmptyElement::<(i32, i32), DB>::at((x, y)));
        }
        for entry in &chart.legend {
            let color = to_rgb(entry.color);
            ctx.draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
                .map_err(Error::render)?
                .label(entry.label.clone())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        }
        ctx.configure_series_labels()
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, 14))
            .draw()
            .map_err(Error::render)?;
    }

    root.present().map_err(Error::render)?;
    Ok(())
}
