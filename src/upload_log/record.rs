use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One logged upload. Rows are never updated or deleted, and the same file uploaded twice
/// produces two records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub file_name: String,
    /// MIME type, or an empty string when unknown.
    pub file_type: String,
    pub file_size: u64,
    pub upload_date: NaiveDateTime,
}

impl UploadRecord {
    pub fn new(
        file_name: impl Into<String>,
        file_type: impl Into<String>,
        file_size: u64,
        upload_date: NaiveDateTime,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_type: file_type.into(),
            file_size,
            upload_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTypeCount {
    pub file_type: String,
    pub count: u64,
}
