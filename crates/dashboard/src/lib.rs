pub mod catalog;
pub mod export;
pub mod reports;

pub use export::{ExportPaths, export_reports, write_report_note};
pub use reports::{ReportSummary, ReportsView, StatusTab, format_timestamp};
