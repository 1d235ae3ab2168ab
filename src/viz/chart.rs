//! Chart description independent of any drawing backend.
//!
//! A [`BarChart`] is plain data: bars with labels, stacked text annotations above each
//! bar and legend swatches. [`crate::viz::render`] turns it into an SVG or PNG.

use crate::stats::{ProblemSolves, SolvedHistogram};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const RED: Rgb = Rgb(220, 20, 20);
pub const BLUE: Rgb = Rgb(30, 60, 220);

/// Text drawn above a bar. Annotations of one bar stack upward in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// A categorical bar chart with per-bar annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub bars: Vec<Bar>,
    pub legend_title: String,
    pub legend: Vec<LegendEntry>,
    /// Fraction of a category slot covered by its bar, in `(0, 1]`.
    pub bar_width: f64,
    /// Y-axis upper bound as a multiple of the tallest bar, leaves room for annotations.
    pub headroom: f64,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_desc: String::new(),
            y_desc: String::new(),
            bars: Vec::new(),
            legend_title: String::new(),
            legend: Vec::new(),
            bar_width: 0.8,
            headroom: 1.25,
        }
    }

    pub fn axes(mut self, x_desc: impl Into<String>, y_desc: impl Into<String>) -> Self {
        self.x_desc = x_desc.into();
        self.y_desc = y_desc.into();
        self
    }

    pub fn bar_width(mut self, width: f64) -> Self {
        self.bar_width = width.clamp(0.05, 1.0);
        self
    }

    pub fn headroom(mut self, factor: f64) -> Self {
        self.headroom = factor.max(1.0);
        self
    }

    pub fn legend_entry(mut self, label: impl Into<String>, color: Rgb) -> Self {
        self.legend.push(LegendEntry {
            label: label.into(),
            color,
        });
        self
    }

    pub fn legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    pub fn push_bar(&mut self, label: impl Into<String>, value: f64, annotations: Vec<Annotation>) {
        self.bars.push(Bar {
            label: label.into(),
            value,
            annotations,
        });
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    /// Upper bound of the y-axis; at least 1 so an all-zero chart still has a range.
    pub fn y_max(&self) -> f64 {
        (self.max_value() * self.headroom).max(1.0)
    }

    /// Vertical position of annotation `slot` above a bar of height `value`.
    pub fn annotation_y(&self, value: f64, slot: usize) -> f64 {
        value + self.max_value() * (0.02 + 0.04 * slot as f64)
    }
}

fn pct(v: f64, color: Rgb) -> Annotation {
    Annotation {
        text: format!("{:.1}%", v),
        color,
    }
}

/// `img/`-relative file name of the solved-count histogram.
pub fn histogram_file_name(contest_id: u32) -> String {
    format!("contest_{}_histogram.png", contest_id)
}

/// `img/`-relative file name of the per-problem chart.
pub fn problem_chart_file_name(contest_id: u32) -> String {
    format!("contest_{}_solves_per_problem.png", contest_id)
}

/// Histogram of solved counts: bin %, cumulative % and reverse cumulative % on every
/// non-empty bar.
pub fn solved_histogram_chart(contest_id: u32, hist: &SolvedHistogram) -> BarChart {
    let mut chart = BarChart::new(format!(
        "Contest {} — Problems Solved Distribution",
        contest_id
    ))
    .axes("Number of Problems Solved", "Number of Contestants")
    .bar_width(0.8)
    .headroom(1.25)
    .legend_title("Percentages")
    .legend_entry("Bin %", BLACK)
    .legend_entry("Cumulative %", RED)
    .legend_entry("Reverse cumulative %", BLUE);

    for bin in &hist.bins {
        let annotations = if bin.count == 0 {
            Vec::new()
        } else {
            vec![
                pct(bin.percent, BLACK),
                pct(bin.cumulative_percent, RED),
                pct(bin.reverse_cumulative_percent, BLUE),
            ]
        };
        chart.push_bar(bin.solved.to_string(), bin.count as f64, annotations);
    }
    chart
}

/// Solvers per problem, labelled by problem index, with the bin % on non-empty bars.
pub fn problem_solves_chart(contest_id: u32, solves: &[ProblemSolves]) -> BarChart {
    let mut chart = BarChart::new(format!("Contest {} — Solvers per Problem", contest_id))
        .axes("Problem", "Number of Solvers")
        .bar_width(0.6)
        .headroom(1.10)
        .legend_title("Annotation")
        .legend_entry("Bin %", BLACK);

    for p in solves {
        let annotations = if p.solvers == 0 {
            Vec::new()
        } else {
            vec![pct(p.percent, BLACK)]
        };
        chart.push_bar(p.index.clone(), p.solvers as f64, annotations);
    }
    chart
}
