//! Terminal chart of an emissions breakdown
//!
//! One bar per category scaled against the largest category, each labelled
//! with kg CO2/year and its share of the raw total.

use colored::Colorize;
use crate::types::{Category, EmissionsBreakdown};

/// Bar width for the largest category, in cells
pub const BAR_WIDTH: usize = 40;

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Use ANSI colours
    pub color: bool,
    /// Show raw total and reductions under the headline
    pub verbose: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { color: true, verbose: false }
    }
}

/// Headline line shown above the chart
pub fn headline(breakdown: &EmissionsBreakdown) -> String {
    format!("Your Total Carbon Footprint: {:.2} kg CO2/year", breakdown.total)
}

/// Number of filled cells for a value
fn bar_cells(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round() as usize
}

/// Render the breakdown as a text chart
pub fn render_chart(breakdown: &EmissionsBreakdown, style: ChartStyle) -> String {
    let max = breakdown
        .contributions
        .iter()
        .map(|c| c.value)
        .fold(0.0_f64, f64::max);
    let label_width = Category::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let title = headline(breakdown);
    if style.color {
        out.push_str(&title.bold().to_string());
    } else {
        out.push_str(&title);
    }
    out.push('\n');

    if style.verbose {
        out.push_str(&format!(
            "  raw total {:.2} | energy reduction {:.2} | recycling reduction {:.2}\n",
            breakdown.raw_total, breakdown.energy_reduction, breakdown.recycling_reduction
        ));
    }
    if breakdown.is_net_negative() {
        out.push_str("  (reductions exceed the raw total)\n");
    }
    out.push('\n');
    out.push_str("Carbon Footprint by Category (kg CO2/year)\n");

    for c in &breakdown.contributions {
        let cells = bar_cells(c.value, max);
        let bar = "█".repeat(cells);
        let pad = " ".repeat(BAR_WIDTH - cells.min(BAR_WIDTH));
        let bar = if style.color {
            bar.color(c.category.color()).to_string()
        } else {
            bar
        };
        out.push_str(&format!(
            "{:<width$} │{}{} {:>10.2} {:>5.1}%\n",
            c.category.label(),
            bar,
            pad,
            c.value,
            breakdown.share_percent(c.category),
            width = label_width,
        ));
    }

    out
}
