use calamine::{Data, Range};

use crate::error::{ReportError, Result};
use crate::models::{AccountRow, AccountTable, Amount};

fn label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn amount(cell: &Data) -> Amount {
    match cell {
        Data::Float(f) => Amount::Number(*f),
        Data::Int(i) => Amount::Number(*i as f64),
        Data::Bool(b) => Amount::Number(if *b { 1.0 } else { 0.0 }),
        Data::Empty => Amount::Empty,
        Data::String(s) if s.trim().is_empty() => Amount::Empty,
        Data::String(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Amount::Number(n),
            _ => Amount::Invalid(s.clone()),
        },
        other => Amount::Invalid(other.to_string()),
    }
}

/// Project a sheet onto its first two columns as (account, amount) rows.
///
/// Columns are counted from the start of the used range. Every row is kept,
/// in order, even when its amount is blank or not a number.
pub fn normalize(range: &Range<Data>) -> Result<AccountTable> {
    let width = range.width();
    if width < 2 {
        return Err(ReportError::TooFewColumns(width));
    }

    let mut rows = Vec::with_capacity(range.height());
    for (i, row) in range.rows().enumerate() {
        let account = label(&row[0]);
        let amount = amount(&row[1]);
        if let Amount::Invalid(raw) = &amount {
            tracing::warn!(row = i + 1, account = %account, value = %raw, "amount is not a number");
        }
        rows.push(AccountRow { account, amount });
    }
    tracing::debug!(rows = rows.len(), "normalized account table");
    Ok(AccountTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(cells: Vec<Vec<Data>>) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_keeps_first_two_columns_and_trims_labels() {
        let r = range(vec![
            vec![s("  cash "), Data::Float(50000.0), s("note")],
            vec![s("Equity"), Data::Int(80000), Data::Float(1.0)],
        ]);
        let table = normalize(&r).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].account, "cash");
        assert_eq!(table.rows()[0].amount, Amount::Number(50000.0));
        assert_eq!(table.rows()[1].account, "Equity");
        assert_eq!(table.rows()[1].amount, Amount::Number(80000.0));
    }

    #[test]
    fn test_preserves_row_count_with_missing_amounts() {
        let r = range(vec![
            vec![s("cash"), Data::Empty],
            vec![Data::Empty, Data::Empty],
            vec![s("equity"), s("abc")],
        ]);
        let table = normalize(&r).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].amount, Amount::Empty);
        assert_eq!(table.rows()[1].account, "");
        assert_eq!(table.rows()[2].amount, Amount::Invalid("abc".to_string()));
    }

    #[test]
    fn test_numeric_text_is_a_number() {
        let r = range(vec![vec![s("revenue"), s(" 1234.5 ")]]);
        let table = normalize(&r).unwrap();
        assert_eq!(table.rows()[0].amount, Amount::Number(1234.5));
    }

    #[test]
    fn test_non_finite_text_is_invalid() {
        let r = range(vec![
            vec![s("revenue"), s("inf")],
            vec![s("cogs"), s("-Infinity")],
            vec![s("depr"), s("1e400")],
            vec![s("interest"), s("NaN")],
        ]);
        let table = normalize(&r).unwrap();
        assert_eq!(table.rows()[0].amount, Amount::Invalid("inf".to_string()));
        assert_eq!(table.rows()[1].amount, Amount::Invalid("-Infinity".to_string()));
        assert_eq!(table.rows()[2].amount, Amount::Invalid("1e400".to_string()));
        assert_eq!(table.rows()[3].amount, Amount::Invalid("NaN".to_string()));
        assert_eq!(crate::fmt::format_currency(table.lookup("revenue")), "-");
    }

    #[test]
    fn test_bool_cells_are_one_or_zero() {
        let r = range(vec![
            vec![s("cash"), Data::Bool(true)],
            vec![s("equity"), Data::Bool(false)],
        ]);
        let table = normalize(&r).unwrap();
        assert_eq!(table.rows()[0].amount, Amount::Number(1.0));
        assert_eq!(table.rows()[1].amount, Amount::Number(0.0));
    }

    #[test]
    fn test_numeric_label_is_rendered_as_text() {
        let r = range(vec![vec![Data::Float(1000.0), Data::Float(5.0)]]);
        let table = normalize(&r).unwrap();
        assert_eq!(table.rows()[0].account, "1000");
    }

    #[test]
    fn test_single_column_is_rejected() {
        let r = range(vec![vec![s("cash")], vec![s("equity")]]);
        let err = normalize(&r).unwrap_err();
        assert!(matches!(err, ReportError::TooFewColumns(1)));
    }

    #[test]
    fn test_empty_sheet_is_rejected() {
        let err = normalize(&Range::empty()).unwrap_err();
        assert!(matches!(err, ReportError::TooFewColumns(0)));
    }
}
