use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use dealership_sales::{Ledger, Transaction};

/// File name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "CarTransactions.xlsx";

/// Worksheet holding the ledger in xlsx exports.
pub const SHEET_NAME: &str = "Transactions";

/// Header row, in column order.
pub const COLUMNS: [&str; 3] = ["Transaction ID", "Customer Name", "Purchased Car ID"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] XlsxError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    #[serde(rename = "Transaction ID")]
    pub transaction_id: u64,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Purchased Car ID")]
    pub purchased_car_id: u32,
}

impl From<&Transaction> for TransactionRecord {
    fn from(t: &Transaction) -> Self {
        Self {
            transaction_id: t.id.get(),
            customer_name: t.customer_name.clone(),
            purchased_car_id: t.purchased_car_unit_id.get(),
        }
    }
}

/// Write the ledger to `out` in ledger order. Returns the number of data rows.
pub fn write_ledger<W: Write>(
    ledger: &Ledger,
    format: ExportFormat,
    out: W,
) -> Result<usize, ExportError> {
    let records: Vec<TransactionRecord> = ledger.iter().map(TransactionRecord::from).collect();

    match format {
        ExportFormat::Csv => {
            // Header is written by hand so an empty ledger still gets one.
            let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
            writer.write_record(COLUMNS)?;
            for record in &records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        ExportFormat::Xlsx => {
            let mut out = out;
            out.write_all(&workbook_bytes(&records)?)?;
            out.flush()?;
        }
        ExportFormat::Json => {
            let mut out = out;
            serde_json::to_writer_pretty(&mut out, &records)?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
    }

    Ok(records.len())
}

/// Single-sheet workbook: header in row 1, one transaction per row after it.
fn workbook_bytes(records: &[TransactionRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in (0u16..).zip(COLUMNS) {
        sheet.write_string(0, col, title)?;
    }
    for (row, record) in (1u32..).zip(records) {
        // Excel stores every number as f64.
        sheet.write_number(row, 0, record.transaction_id as f64)?;
        sheet.write_string(row, 1, record.customer_name.as_str())?;
        sheet.write_number(row, 2, record.purchased_car_id)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Write the ledger to a file, creating parent directories as needed.
pub fn export_ledger(
    ledger: &Ledger,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = BufWriter::new(File::create(path)?);
    let rows = write_ledger(ledger, format, file)?;
    info!(path = %path.display(), rows, ?format, "ledger exported");
    Ok(rows)
}
