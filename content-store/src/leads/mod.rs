//! 线索管理 - 筛选与导出

pub mod export;
pub mod filter;

pub use export::{CSV_HEADER, export_csv, export_csv_in, export_file_name};
pub use filter::{DateRange, LeadFilter, MAX_RANGE_DAYS, distinct_sources};
