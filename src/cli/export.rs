use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::{build_report, ReportRequest};
use crate::settings::{get_export_dir, load_settings};
use crate::workbook::read_upload;

fn write_pdf(bytes: &[u8], path: &Path) -> Result<String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    let display = format!("{}", path.display());
    println!("Wrote {display}");
    Ok(display)
}

pub fn run(
    file: &str,
    org: Option<String>,
    period: Option<String>,
    output: Option<String>,
) -> Result<String> {
    let bytes = read_upload(Path::new(file))?;
    let request = ReportRequest::with_defaults(org, period, &load_settings());
    let report = build_report(&bytes, request)?;
    let pdf = crate::pdf::render_report(&report)?;
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| get_export_dir().join("report.pdf"));
    write_pdf(&pdf, &path)
}
