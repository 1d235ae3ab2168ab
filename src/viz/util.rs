//! Utility functions for visualization: colors, locale mapping, tick labels.

use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

use super::chart::Rgb;

/// Microsoft Office (2013+) chart series palette.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBColor {
    OFFICE10[idx % OFFICE10.len()]
}

#[inline]
pub fn to_rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Y tick label: whole numbers with thousands separators, one decimal otherwise.
pub fn format_count_label(v: f64, locale: &Locale) -> String {
    if (v - v.round()).abs() < 1e-9 {
        (v.round() as i64).to_formatted_string(locale)
    } else {
        format!("{:.1}", v)
    }
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Left label area width (pixels) that fits the widest y tick label between 0 and `y_max`.
pub fn compute_left_label_area_px(y_max: f64, ticks: usize, font_px: u32, locale: &Locale) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let s = format_count_label((y_max * t).round(), locale);
        max_px = max_px.max(estimate_text_width_px(&s, font_px));
    }
    // Tick marks plus the rotated axis description.
    max_px.saturating_add(40).clamp(60, 160)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_labels_use_locale_separators() {
        assert_eq!(format_count_label(12345.0, map_locale("en")), "12,345");
        assert_eq!(format_count_label(12345.0, map_locale("de")), "12.345");
        assert_eq!(format_count_label(2.5, map_locale("en")), "2.5");
    }

    #[test]
    fn label_area_is_clamped() {
        let english = map_locale("en");
        assert_eq!(compute_left_label_area_px(1.0, 10, 12, english), 60);
        assert!(compute_left_label_area_px(1e15, 10, 12, english) <= 160);
    }
}
