use crate::models::{KpiRecord, Metric};

pub const CURRENCY: &str = "CHF";
pub const DASH: &str = "-";

/// Group the integer digits with apostrophes: 1234567 -> 1'234'567
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Format a whole amount with Swiss-style grouping: 1'234'567
pub fn format_number(val: Metric) -> String {
    let Some(val) = val.value() else {
        return DASH.to_string();
    };
    let rounded = format!("{val:.0}");
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(&rounded),
    }
}

/// Format a ratio as a percentage with one decimal: 0.1534 -> 15.3%
pub fn format_percent(val: Metric) -> String {
    match val.value() {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => DASH.to_string(),
    }
}

pub fn format_currency(val: Metric) -> String {
    match val {
        Metric::Value(_) => format!("{} {CURRENCY}", format_number(val)),
        _ => DASH.to_string(),
    }
}

/// The five labelled KPI lines shown on screen and in the PDF.
pub fn summary_rows(kpis: &KpiRecord) -> [(&'static str, String); 5] {
    [
        ("Revenue", format_currency(kpis.revenue)),
        ("EBIT", format_currency(kpis.ebit)),
        ("EBIT margin", format_percent(kpis.ebit_margin)),
        ("Equity ratio", format_percent(kpis.equity_ratio)),
        ("Liquidity ratio II", format_percent(kpis.liquidity_ratio_2)),
    ]
}
