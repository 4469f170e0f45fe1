use serde::Serialize;

use crate::error::Result;
use crate::kpi::{compute_kpis, Figures};
use crate::models::KpiRecord;
use crate::settings::Settings;
use crate::workbook::load_tables;

/// Per-upload parameters supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub organization: String,
    pub period: String,
}

impl ReportRequest {
    /// Blank fields fall back to the configured defaults.
    pub fn with_defaults(organization: Option<String>, period: Option<String>, settings: &Settings) -> Self {
        let pick = |v: Option<String>, default: &str| match v {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => default.to_string(),
        };
        Self {
            organization: pick(organization, &settings.organization),
            period: pick(period, &settings.period),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub organization: String,
    pub period: String,
    pub figures: Figures,
    pub kpis: KpiRecord,
}

pub fn build_report(bytes: &[u8], request: ReportRequest) -> Result<Report> {
    let (balance, profit_loss) = load_tables(bytes)?;
    let kpis = compute_kpis(&balance, &profit_loss);
    let figures = Figures::collect(&balance, &profit_loss);
    tracing::info!(
        organization = %request.organization,
        balance_rows = balance.len(),
        profit_loss_rows = profit_loss.len(),
        "computed KPIs"
    );
    Ok(Report {
        organization: request.organization,
        period: request.period,
        figures,
        kpis,
    })
}
