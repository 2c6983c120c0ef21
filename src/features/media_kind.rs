use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Image,
    Audio,
    Document,
    Other,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else if mime == "application/pdf" {
            Self::Document
        } else {
            Self::Other
        }
    }

    /// exiftool groups worth showing for this kind of file, `None` meaning all of them.
    pub const fn tag_groups(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Image => Some(&["EXIF", "JFIF", "PNG", "XMP", "Composite"]),
            Self::Audio => Some(&["ID3", "Vorbis", "MPEG", "FLAC", "QuickTime"]),
            Self::Document => Some(&["PDF", "XMP"]),
            Self::Other => None,
        }
    }
}
