use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use gridform_model::Table;

/// UTF-8 byte-order marker. Spreadsheet applications use it to pick the
/// right encoding when importing comma-separated text.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Write a table as UTF-8 comma-separated text with a leading BOM.
///
/// Every row is written at the header width: short rows pad with empty
/// cells, long rows truncate. A table with zero rows still writes its
/// header record.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create csv: {}", path.display()))?;
    file.write_all(UTF8_BOM)
        .with_context(|| format!("write bom: {}", path.display()))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(&table.headers)
        .with_context(|| format!("write headers: {}", path.display()))?;
    for row_idx in 0..table.row_count() {
        let record: Vec<String> = (0..table.column_count())
            .map(|col_idx| table.cell(row_idx, col_idx).to_text())
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write row {row_idx}: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "csv table written"
    );
    Ok(())
}
