use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::{format_number, summary_rows};
use crate::report::{build_report, Report, ReportRequest};
use crate::settings::load_settings;
use crate::workbook::read_upload;

pub fn run(
    file: &str,
    org: Option<String>,
    period: Option<String>,
    details: bool,
    json: bool,
) -> Result<()> {
    let bytes = read_upload(Path::new(file))?;
    let request = ReportRequest::with_defaults(org, period, &load_settings());
    let report = build_report(&bytes, request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.kpis)?);
    } else {
        println!("{}", format_summary(&report));
        if details {
            println!("{}", format_details(&report));
        }
    }
    Ok(())
}

pub fn format_summary(report: &Report) -> String {
    let mut table = Table::new();
    table.set_header(vec!["KPI", "Value"]);
    for (label, value) in summary_rows(&report.kpis) {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    format!(
        "{}\n{}\n{table}",
        report.organization.bold(),
        report.period
    )
}

pub fn format_details(report: &Report) -> String {
    let f = &report.figures;
    let mut table = Table::new();
    table.set_header(vec!["Line item", "Amount"]);

    table.add_row(vec![Cell::new("BALANCE SHEET".cyan().bold()), Cell::new("")]);
    for (label, val) in [
        ("  cash", f.cash),
        ("  receivables", f.receivables),
        ("  inventory", f.inventory),
        ("  current_liabilities", f.current_liabilities),
        ("  equity", f.equity),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(format_number(val))]);
    }
    table.add_row(vec![
        Cell::new("  Total (all rows)".bold()),
        Cell::new(format_number(f.balance_total)),
    ]);

    table.add_row(vec![Cell::new("PROFIT & LOSS".cyan().bold()), Cell::new("")]);
    for (label, val) in [
        ("  revenue", f.revenue),
        ("  cogs", f.cogs),
        ("  personnel", f.personnel),
        ("  depr", f.depreciation),
        ("  interest", f.interest),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(format_number(val))]);
    }
    format!("Line items\n{table}")
}
