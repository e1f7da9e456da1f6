//! Display-ready rows for a calculation.

use serde::Serialize;

use super::entities::{PriceQuote, RoiResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub metric: &'static str,
    pub value: String,
    /// Rows whose sign carries meaning (profit, ROI) get gain/loss colouring.
    pub signed: bool,
}

pub fn quote_metrics(quote: &PriceQuote, grading_cost: f64) -> Vec<Metric> {
    vec![
        Metric {
            label: "Ungraded Avg Sold",
            value: format_currency(quote.ungraded_price),
        },
        Metric {
            label: "PSA-10 Avg Sold",
            value: format_currency(quote.graded_price),
        },
        Metric {
            label: "Grading Cost",
            value: format_currency(grading_cost),
        },
    ]
}

pub fn breakdown_rows(roi: &RoiResult) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow {
            metric: "Total Investment",
            value: format_currency(roi.investment),
            signed: false,
        },
        BreakdownRow {
            metric: "Potential Profit",
            value: format_currency(roi.profit),
            signed: true,
        },
        BreakdownRow {
            metric: "ROI %",
            value: format_signed_percent(roi.roi_percent),
            signed: true,
        },
        BreakdownRow {
            metric: "Break-even PSA-10",
            value: format_currency(roi.break_even()),
            signed: false,
        },
    ]
}

/// Formats dollars with thousands separators and two decimals, e.g. `-$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{fraction:02}", group_thousands(whole))
}

pub fn format_signed_percent(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    // Avoid "-0.0%" for tiny negatives that round to zero.
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        return "+0.0%".to_string();
    }
    format!("{rounded:+.1}%")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roi::compute_roi;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(41.99), "$41.99");
        assert_eq!(format_currency(-11.99), "-$11.99");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(257.228), "+257.2%");
        assert_eq!(format_signed_percent(-23.06), "-23.1%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
        assert_eq!(format_signed_percent(-0.01), "+0.0%");
    }

    #[test]
    fn test_breakdown_rows_for_loss() {
        let roi = compute_roi(30.0, 40.0, 21.99);
        let rows = breakdown_rows(&roi);
        let rendered: Vec<_> = rows.iter().map(|r| (r.metric, r.value.as_str())).collect();
        assert_eq!(
            rendered,
            vec![
                ("Total Investment", "$51.99"),
                ("Potential Profit", "-$11.99"),
                ("ROI %", "-23.1%"),
                ("Break-even PSA-10", "$51.99"),
            ]
        );
    }

    #[test]
    fn test_quote_metrics() {
        let quote = PriceQuote::new(20.0, 1500.0, "Test Card");
        let metrics = quote_metrics(&quote, 21.99);
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].value, "$20.00");
        assert_eq!(metrics[1].value, "$1,500.00");
        assert_eq!(metrics[2].label, "Grading Cost");
        assert_eq!(metrics[2].value, "$21.99");
    }
}
