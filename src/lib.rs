//! # Metadata Extractor
//!
//! Extract metadata from uploaded images, audio files and PDF documents, and keep a durable
//! log of every upload.
//!
//! ## Key Features
//!
//! - **GPS Coordinates**: Decodes the EXIF GPS rational triples of a photo into signed decimal degrees.
//! - **Tag Tables**: Reads EXIF, ID3/Vorbis and PDF document tags through `exiftool` into a "Meta Tags / Value" table.
//! - **File Stats**: Name, size, MIME type and access/creation/modification times.
//! - **CSV Export**: Renders any tag table as a downloadable CSV file.
//! - **Upload Log**: An append-only SQLite table of uploads, safe to share between threads, with a file-type breakdown.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use metadata_extractor::{MetadataExtractor, UploadLog};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let upload_log = Arc::new(UploadLog::open("data.db")?);
//!     let mut extractor = MetadataExtractor::builder()
//!         .upload_log(Arc::clone(&upload_log))
//!         .build()?;
//!
//!     let result = extractor.extract(Path::new("assets/sunset.jpg"))?;
//!     match result.coordinates {
//!         Some(coordinates) => println!("Taken at {:?}", coordinates.as_pair()),
//!         None => println!("No geotag"),
//!     }
//!     println!("{} uploads so far", upload_log.list_all()?.len());
//!
//!     Ok(())
//! }
//! ```

mod error;
mod extractor;
pub mod features;
pub mod structs;
pub mod upload_log;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use error::MetadataExtractorError;
pub use extractor::MetadataExtractor;
pub use features::gps::{Coordinates, decode_coordinates};
pub use structs::ExtractResult;
pub use upload_log::{StorageError, UploadLog, UploadRecord};
