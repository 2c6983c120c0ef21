use crate::features::meta_table::MetaTable;
use chrono::{DateTime, Local};
use mime_guess::MimeGuess;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub file_name: String,
    pub file_size: u64,
    /// Guessed MIME type, empty when the extension is unknown.
    pub file_type: String,
    pub accessed: Option<DateTime<Local>>,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
}

impl FileStats {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let local = |time: std::io::Result<SystemTime>| time.ok().map(DateTime::<Local>::from);

        Ok(Self {
            file_name: path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
            file_size: metadata.len(),
            file_type: guess_file_type(path),
            accessed: local(metadata.accessed()),
            created: local(metadata.created()),
            modified: local(metadata.modified()),
        })
    }

    pub fn to_table(&self) -> MetaTable {
        let readable = |time: &Option<DateTime<Local>>| {
            time.as_ref().map(readable_time).unwrap_or_default()
        };

        let mut table = MetaTable::new();
        table.push("FileName", &self.file_name);
        table.push("FileSize", self.file_size.to_string());
        table.push("FileType", &self.file_type);
        table.push("Accessed_Time", readable(&self.accessed));
        table.push("Creation Time", readable(&self.created));
        table.push("Modified_Time", readable(&self.modified));
        table
    }
}

pub fn guess_file_type(path: &Path) -> String {
    MimeGuess::from_path(path)
        .first()
        .map(|mime| mime.to_string())
        .unwrap_or_default()
}

/// Minute-resolution timestamp such as `2024-03-09-14-05`.
pub fn readable_time(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d-%H-%M").to_string()
}
