use crate::features::meta_table::MetaTable;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const HEADER: [&str; 2] = ["Meta Tags", "Value"];

/// Renders a table as CSV with a `Meta Tags,Value` header.
pub fn to_csv(table: &MetaTable) -> String {
    let mut out = String::new();
    push_record(&mut out, HEADER[0], HEADER[1]);
    for row in table.rows() {
        push_record(&mut out, &row.tag, &row.value);
    }
    out
}

/// Download name for an export made at `now`, e.g. `metadata_result_20240309-140559_.csv`.
pub fn export_file_name(now: &DateTime<Local>) -> String {
    format!("metadata_result_{}_.csv", now.format("%Y%m%d-%H%M%S"))
}

/// Writes `table` into `dir` under [`export_file_name`] and returns the written path.
///
/// Existing files are never overwritten: if the name is taken, a counter is added
/// (`metadata_result_20240309-140559_1_.csv`, `_2_`, ...).
pub fn write_csv(dir: &Path, table: &MetaTable, now: &DateTime<Local>) -> std::io::Result<PathBuf> {
    let csv = to_csv(table);
    let stamp = now.format("%Y%m%d-%H%M%S");
    for attempt in 0u32.. {
        let name = match attempt {
            0 => export_file_name(now),
            n => format!("metadata_result_{stamp}_{n}_.csv"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(csv.as_bytes())?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(ErrorKind::AlreadyExists.into())
}

fn push_record(out: &mut String, tag: &str, value: &str) {
    push_field(out, tag);
    out.push(',');
    push_field(out, value);
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
