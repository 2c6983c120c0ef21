//! Per-file metadata features: GPS decoding, file stats, tag tables and CSV export.
pub mod csv_export;
pub mod error;
pub mod file_stats;
pub mod geo_info;
pub mod gps;
pub mod media_kind;
pub mod meta_table;
