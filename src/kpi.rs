use serde::Serialize;

use crate::models::{AccountTable, KpiRecord, Metric};

// Balance sheet keys
pub const CASH: &str = "cash";
pub const RECEIVABLES: &str = "receivables";
pub const INVENTORY: &str = "inventory";
pub const CURRENT_LIABILITIES: &str = "current_liabilities";
pub const EQUITY: &str = "equity";

// Profit & loss keys
pub const REVENUE: &str = "revenue";
pub const COGS: &str = "cogs";
pub const PERSONNEL: &str = "personnel";
pub const DEPRECIATION: &str = "depr";
pub const INTEREST: &str = "interest";

impl AccountTable {
    /// Amount of the first row whose label equals `key`, ignoring case.
    /// Absent labels count as zero.
    pub fn lookup(&self, key: &str) -> Metric {
        let key = key.to_lowercase();
        match self.rows().iter().find(|r| r.account.to_lowercase() == key) {
            Some(row) => row.amount.as_metric(),
            None => {
                tracing::debug!(account = %key, "account not found, using 0");
                Metric::Value(0.0)
            }
        }
    }
}

/// Every line item the ratios are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Figures {
    pub cash: Metric,
    pub receivables: Metric,
    pub inventory: Metric,
    pub current_liabilities: Metric,
    pub equity: Metric,
    pub balance_total: Metric,
    pub revenue: Metric,
    pub cogs: Metric,
    pub personnel: Metric,
    pub depreciation: Metric,
    pub interest: Metric,
}

impl Figures {
    pub fn collect(balance: &AccountTable, profit_loss: &AccountTable) -> Self {
        Self {
            cash: balance.lookup(CASH),
            receivables: balance.lookup(RECEIVABLES),
            inventory: balance.lookup(INVENTORY),
            current_liabilities: balance.lookup(CURRENT_LIABILITIES),
            equity: balance.lookup(EQUITY),
            balance_total: balance.total(),
            revenue: profit_loss.lookup(REVENUE),
            cogs: profit_loss.lookup(COGS),
            personnel: profit_loss.lookup(PERSONNEL),
            depreciation: profit_loss.lookup(DEPRECIATION),
            interest: profit_loss.lookup(INTEREST),
        }
    }

    pub fn kpis(&self) -> KpiRecord {
        let ebit = self.revenue - self.cogs - self.personnel - self.depreciation - self.interest;
        KpiRecord {
            revenue: self.revenue,
            ebit,
            ebit_margin: Metric::ratio(ebit, self.revenue),
            equity_ratio: Metric::ratio(self.equity, self.balance_total),
            liquidity_ratio_2: Metric::ratio(self.cash + self.receivables, self.current_liabilities),
        }
    }
}

pub fn compute_kpis(balance: &AccountTable, profit_loss: &AccountTable) -> KpiRecord {
    Figures::collect(balance, profit_loss).kpis()
}
