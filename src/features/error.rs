use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Invalid coordinate in {tag}: {reason}")]
    InvalidCoordinate { tag: &'static str, reason: String },

    #[error("Could not parse EXIF data: {0}")]
    Exif(#[from] exif::Error),

    #[error("I/O error while reading EXIF data")]
    Io(#[from] std::io::Error),
}
