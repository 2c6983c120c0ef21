use thiserror::Error;

/// The primary error type for the metadata-extractor crate.
#[derive(Error, Debug)]
pub enum MetadataExtractorError {
    #[error("Exiftool failed to execute or process the file")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize the result: {0}")]
    Json(#[from] serde_json::Error),

    // --- Custom Module Errors ---
    #[error("GPS decoding failed: {0}")]
    Geo(#[from] crate::features::error::GeoError),

    #[error("Upload log failed: {0}")]
    Storage(#[from] crate::upload_log::StorageError),
}
