use crate::MetadataExtractorError;
use crate::features::file_stats::FileStats;
use crate::features::geo_info::read_geo_info;
use crate::features::gps::{Coordinates, decode_coordinates};
use crate::features::media_kind::MediaKind;
use crate::features::meta_table::MetaTable;
use crate::structs::ExtractResult;
use crate::upload_log::{UploadLog, UploadRecord};
use bon::bon;
use chrono::Local;
use exiftool::ExifTool;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// The main entry point for extracting metadata from uploaded files.
///
/// Holds the `exiftool` process and a handle to the shared [`UploadLog`]. Create it once and
/// reuse it for every upload; the log itself can be shared with other extractors or readers.
///
/// ```rust,no_run
/// # use std::path::Path;
/// # use std::sync::Arc;
/// # use metadata_extractor::{MetadataExtractor, MetadataExtractorError, UploadLog};
/// # fn main() -> Result<(), MetadataExtractorError> {
/// let upload_log = Arc::new(UploadLog::open("data.db")?);
/// let mut extractor = MetadataExtractor::builder()
///     .upload_log(upload_log)
///     .build()?;
///
/// let result = extractor.extract(Path::new("assets/sunset.jpg"))?;
/// println!("{:?}", result.coordinates);
/// # Ok(())
/// # }
/// ```
pub struct MetadataExtractor {
    exiftool: ExifTool,
    upload_log: Arc<UploadLog>,
}

#[bon]
impl MetadataExtractor {
    /// Constructs a `MetadataExtractor` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `upload_log: Arc<UploadLog>` - The log every extracted file is recorded in.
    /// * `exiftool_path: Option<PathBuf>` - An optional path to a specific `exiftool` executable. If `None`, `exiftool` will be searched for in the system's PATH.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataExtractorError::Exiftool`] if the `exiftool` executable cannot be found
    /// or fails to start.
    #[builder]
    pub fn new(
        upload_log: Arc<UploadLog>,
        exiftool_path: Option<PathBuf>,
    ) -> Result<Self, MetadataExtractorError> {
        let exiftool = match exiftool_path {
            Some(path) => ExifTool::with_executable(&path)?,
            None => ExifTool::new()?,
        };
        Ok(Self {
            exiftool,
            upload_log,
        })
    }

    pub fn upload_log(&self) -> &Arc<UploadLog> {
        &self.upload_log
    }

    /// Records the upload of `file` and extracts its metadata.
    ///
    /// The upload is logged before any tag parsing, so a file that exiftool cannot read still
    /// shows up in the log.
    ///
    /// # Returns
    ///
    /// An [`ExtractResult`] with:
    /// * `kind`: image, audio, document or other, from the guessed MIME type.
    /// * `file_stats`: name, size, type and filesystem timestamps.
    /// * `tags`: the file stats rows followed by the exiftool tags relevant to `kind`.
    /// * `coordinates`: decoded GPS position for geotagged images.
    /// * `exif`: the raw `-G` JSON output from `exiftool`.
    ///
    /// # Errors
    ///
    /// * [`MetadataExtractorError::Io`]: the file cannot be read.
    /// * [`MetadataExtractorError::Storage`]: the upload could not be logged.
    /// * [`MetadataExtractorError::Exiftool`]: `exiftool` fails on the file.
    /// * [`MetadataExtractorError::Geo`]: the image has malformed GPS tags.
    pub fn extract(&mut self, file: &Path) -> Result<ExtractResult, MetadataExtractorError> {
        let file_stats = record_upload(&self.upload_log, file)?;
        let kind = MediaKind::from_mime(&file_stats.file_type);
        debug!(path = %file.display(), ?kind, "extracting metadata");

        let exif = self.exiftool.json(file, &["-G"])?;
        let mut tags = file_stats.to_table();
        tags.concat(MetaTable::from_exiftool_json(&exif, kind.tag_groups()));

        let coordinates = coordinates_for(kind, file)?;

        Ok(ExtractResult {
            kind,
            file_stats,
            tags,
            coordinates,
            exif,
        })
    }
}

/// Stats the file and logs its upload. A file that cannot be stat'ed is not logged.
fn record_upload(upload_log: &UploadLog, file: &Path) -> Result<FileStats, MetadataExtractorError> {
    let file_stats = FileStats::from_path(file)?;
    upload_log.append(&UploadRecord::new(
        file_stats.file_name.clone(),
        file_stats.file_type.clone(),
        file_stats.file_size,
        Local::now().naive_local(),
    ))?;
    Ok(file_stats)
}

/// Decoded GPS position; only images are read.
fn coordinates_for(kind: MediaKind, file: &Path) -> Result<Option<Coordinates>, MetadataExtractorError> {
    match kind {
        MediaKind::Image => Ok(decode_coordinates(&read_geo_info(file)?)?),
        _ => Ok(None),
    }
}
