use crate::error::CollectError;
use crate::writers::{Sheet, SheetWriter};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Writes a single-worksheet Excel workbook with a bold header row.
pub struct XlsxWriter;

impl SheetWriter for XlsxWriter {
    fn extension(&self) -> &str {
        "xlsx"
    }

    fn write(&self, sheet: &Sheet, path: &Path) -> Result<(), CollectError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let bold = Format::new().set_bold();

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &bold)?;
        }
        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                worksheet.write_string(row as u32 + 1, col as u16, cell)?;
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
