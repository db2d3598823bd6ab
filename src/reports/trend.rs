//! Month-by-month spending trend

use crate::display::format_bar;
use crate::metrics::MonthlyTrendPoint;

const BAR_WIDTH: usize = 30;

/// One line per month with a bar scaled to the busiest month
pub fn format_trend(points: &[MonthlyTrendPoint], symbol: &str) -> String {
    let mut output = String::from("Monthly spending\n");

    let largest = points
        .iter()
        .map(|p| p.total.to_f64())
        .fold(0.0_f64, f64::max);

    for point in points {
        output.push_str(&format!(
            "  {}  {:>12}  {}  ({})\n",
            point.month,
            point.total.format_with_symbol(symbol),
            format_bar(point.total.to_f64(), largest, BAR_WIDTH),
            point.count
        ));
    }

    output
}
