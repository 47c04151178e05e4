//! Ledger export: one spreadsheet row per open transaction.

pub mod sheet;

pub use sheet::{
    COLUMNS, DEFAULT_EXPORT_FILE, ExportError, ExportFormat, SHEET_NAME, TransactionRecord,
    export_ledger, write_ledger,
};
