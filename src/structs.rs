use crate::features::file_stats::FileStats;
use crate::features::gps::Coordinates;
use crate::features::media_kind::MediaKind;
use crate::features::meta_table::MetaTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResult {
    pub kind: MediaKind,
    pub file_stats: FileStats,
    /// File stats rows followed by the tags relevant to `kind`; this is what gets exported.
    pub tags: MetaTable,
    /// `None` when the file is not an image or carries no geotag.
    pub coordinates: Option<Coordinates>,
    /// The raw `-G` JSON output from `exiftool`.
    pub exif: Value,
}
