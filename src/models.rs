use std::ops::{Add, Sub};

use serde::{Serialize, Serializer};

/// A computed figure. Division by zero and malformed inputs are carried as
/// explicit variants instead of float NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    /// Ratio whose denominator was zero.
    Undefined,
    /// Derived from a cell that was not a number.
    NotANumber,
}

impl Metric {
    pub fn from_f64(val: f64) -> Self {
        if val.is_nan() {
            Self::NotANumber
        } else {
            Self::Value(val)
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `num / den`. A contaminated denominator wins over a zero one, and a zero
    /// denominator wins over a contaminated numerator.
    pub fn ratio(num: Metric, den: Metric) -> Metric {
        match (num, den) {
            (_, Self::NotANumber) => Self::NotANumber,
            (_, Self::Undefined) => Self::Undefined,
            (_, Self::Value(d)) if d == 0.0 => Self::Undefined,
            (Self::NotANumber, _) => Self::NotANumber,
            (Self::Undefined, _) => Self::Undefined,
            (Self::Value(n), Self::Value(d)) => Self::from_f64(n / d),
        }
    }

    fn combine(self, rhs: Metric, op: impl Fn(f64, f64) -> f64) -> Metric {
        match (self, rhs) {
            (Self::NotANumber, _) | (_, Self::NotANumber) => Self::NotANumber,
            (Self::Undefined, _) | (_, Self::Undefined) => Self::Undefined,
            (Self::Value(a), Self::Value(b)) => Self::from_f64(op(a, b)),
        }
    }
}

impl Add for Metric {
    type Output = Metric;

    fn add(self, rhs: Metric) -> Metric {
        self.combine(rhs, |a, b| a + b)
    }
}

impl Sub for Metric {
    type Output = Metric;

    fn sub(self, rhs: Metric) -> Metric {
        self.combine(rhs, |a, b| a - b)
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            _ => serializer.serialize_none(),
        }
    }
}

/// Amount cell as read from the sheet, before any arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Empty,
    Invalid(String),
}

impl Amount {
    pub fn as_metric(&self) -> Metric {
        match self {
            Self::Number(n) => Metric::from_f64(*n),
            Self::Empty | Self::Invalid(_) => Metric::NotANumber,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub account: String,
    pub amount: Amount,
}

/// Ordered (account, amount) rows of one sheet. Labels may repeat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountTable {
    rows: Vec<AccountRow>,
}

impl AccountTable {
    pub fn new(rows: Vec<AccountRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AccountRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(account, amount)| AccountRow {
                    account: account.to_string(),
                    amount: Amount::Number(*amount),
                })
                .collect(),
        )
    }

    /// Sum of every amount in the table. Blank cells are skipped; any invalid
    /// cell makes the whole sum `NotANumber`.
    pub fn total(&self) -> Metric {
        self.rows
            .iter()
            .filter(|r| r.amount != Amount::Empty)
            .fold(Metric::Value(0.0), |acc, r| acc + r.amount.as_metric())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiRecord {
    pub revenue: Metric,
    pub ebit: Metric,
    pub ebit_margin: Metric,
    pub equity_ratio: Metric,
    pub liquidity_ratio_2: Metric,
}
