use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::error::{ReportError, Result};
use crate::models::AccountTable;
use crate::normalize::normalize;

pub const BALANCE_SHEET: &str = "balance_sheet";
pub const PROFIT_LOSS: &str = "profit_loss";

pub fn read_upload(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

fn read_sheet(workbook: &mut Sheets<Cursor<&[u8]>>, name: &str) -> Result<AccountTable> {
    if !workbook.sheet_names().iter().any(|s| s == name) {
        return Err(ReportError::MissingSheet(name.to_string()));
    }
    let range: Range<Data> = workbook.worksheet_range(name)?;
    normalize(&range).map_err(|e| ReportError::InSheet {
        sheet: name.to_string(),
        source: Box::new(e),
    })
}

/// Parse an uploaded workbook into its balance sheet and profit & loss tables.
pub fn load_tables(bytes: &[u8]) -> Result<(AccountTable, AccountTable)> {
    if bytes.is_empty() {
        return Err(ReportError::EmptyInput);
    }
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    tracing::debug!(sheets = ?workbook.sheet_names(), "opened workbook");

    let balance = read_sheet(&mut workbook, BALANCE_SHEET)?;
    let profit_loss = read_sheet(&mut workbook, PROFIT_LOSS)?;
    Ok((balance, profit_loss))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metric;
    use rust_xlsxwriter::Workbook;

    fn workbook(sheets: Vec<(&str, Vec<(&str, f64)>)>) -> Vec<u8> {
        let mut wb = Workbook::new();
        for (name, rows) in sheets {
            let ws = wb.add_worksheet();
            ws.set_name(name).unwrap();
            for (i, (account, amount)) in rows.into_iter().enumerate() {
                ws.write_string(i as u32, 0, account).unwrap();
                ws.write_number(i as u32, 1, amount).unwrap();
            }
        }
        wb.save_to_buffer().unwrap()
    }

    #[test]
    fn test_load_tables_reads_both_sheets() {
        let bytes = workbook(vec![
            (BALANCE_SHEET, vec![("cash", 50000.0), ("equity", 80000.0)]),
            (PROFIT_LOSS, vec![("revenue", 500000.0)]),
            ("notes", vec![("ignored", 1.0)]),
        ]);
        let (balance, profit_loss) = load_tables(&bytes).unwrap();
        assert_eq!(balance.len(), 2);
        assert_eq!(balance.lookup("cash"), Metric::Value(50000.0));
        assert_eq!(profit_loss.lookup("revenue"), Metric::Value(500000.0));
    }

    #[test]
    fn test_missing_profit_loss_sheet() {
        let bytes = workbook(vec![(BALANCE_SHEET, vec![("cash", 1.0)])]);
        let err = load_tables(&bytes).unwrap_err();
        assert!(matches!(err, ReportError::MissingSheet(ref s) if s == PROFIT_LOSS));
        assert!(err.is_input_read());
    }

    #[test]
    fn test_sheet_names_are_case_sensitive() {
        let bytes = workbook(vec![
            ("Balance_Sheet", vec![("cash", 1.0)]),
            (PROFIT_LOSS, vec![("revenue", 1.0)]),
        ]);
        let err = load_tables(&bytes).unwrap_err();
        assert!(matches!(err, ReportError::MissingSheet(ref s) if s == BALANCE_SHEET));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(load_tables(&[]).unwrap_err(), ReportError::EmptyInput));
    }

    #[test]
    fn test_corrupt_input() {
        let err = load_tables(b"this is not a spreadsheet").unwrap_err();
        assert!(err.is_input_read());
    }

    #[test]
    fn test_single_column_sheet_names_sheet() {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet();
        ws.set_name(BALANCE_SHEET).unwrap();
        ws.write_string(0, 0, "cash").unwrap();
        let ws = wb.add_worksheet();
        ws.set_name(PROFIT_LOSS).unwrap();
        ws.write_string(0, 0, "revenue").unwrap();
        ws.write_number(0, 1, 10.0).unwrap();
        let bytes = wb.save_to_buffer().unwrap();

        let err = load_tables(&bytes).unwrap_err();
        assert!(err.to_string().contains("balance_sheet"));
    }

    #[test]
    fn test_read_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.xlsx");
        std::fs::write(&path, b"abc").unwrap();
        assert_eq!(read_upload(&path).unwrap(), b"abc");
        assert!(read_upload(&dir.path().join("missing.xlsx")).is_err());
    }
}
