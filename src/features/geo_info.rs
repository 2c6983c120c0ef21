use crate::features::error::GeoError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// An unsigned EXIF rational, stored as its raw numerator and denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rational {
    pub num: u32,
    pub den: u32,
}

impl Rational {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Returns `None` when the denominator is zero.
    pub fn to_f64(self) -> Option<f64> {
        (self.den != 0).then(|| f64::from(self.num) / f64::from(self.den))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum TagValue {
    Number(f64),
    Rationals(Vec<Rational>),
    Text(String),
}

impl TagValue {
    pub fn as_rationals(&self) -> Option<&[Rational]> {
        match self {
            Self::Rationals(rationals) => Some(rationals),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// GPS tags this crate knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum GpsTag {
    VersionId,
    Latitude,
    LatitudeRef,
    Longitude,
    LongitudeRef,
    Altitude,
    AltitudeRef,
    TimeStamp,
    DateStamp,
    ImgDirection,
    ImgDirectionRef,
    MapDatum,
}

impl GpsTag {
    pub const ALL: [Self; 12] = [
        Self::VersionId,
        Self::Latitude,
        Self::LatitudeRef,
        Self::Longitude,
        Self::LongitudeRef,
        Self::Altitude,
        Self::AltitudeRef,
        Self::TimeStamp,
        Self::DateStamp,
        Self::ImgDirection,
        Self::ImgDirectionRef,
        Self::MapDatum,
    ];

    /// The EXIF tag name, e.g. `GPSLatitude`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::VersionId => "GPSVersionID",
            Self::Latitude => "GPSLatitude",
            Self::LatitudeRef => "GPSLatitudeRef",
            Self::Longitude => "GPSLongitude",
            Self::LongitudeRef => "GPSLongitudeRef",
            Self::Altitude => "GPSAltitude",
            Self::AltitudeRef => "GPSAltitudeRef",
            Self::TimeStamp => "GPSTimeStamp",
            Self::DateStamp => "GPSDateStamp",
            Self::ImgDirection => "GPSImgDirection",
            Self::ImgDirectionRef => "GPSImgDirectionRef",
            Self::MapDatum => "GPSMapDatum",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

/// GPS tags of a single image, keyed by tag.
///
/// Tags without a [`GpsTag`] variant are kept by their raw name so nothing read from a file is
/// lost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoInfo {
    known: BTreeMap<GpsTag, TagValue>,
    unknown: BTreeMap<String, TagValue>,
}

impl GeoInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: TagValue) {
        match GpsTag::from_name(name) {
            Some(tag) => {
                self.known.insert(tag, value);
            }
            None => {
                self.unknown.insert(name.to_string(), value);
            }
        }
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: TagValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, tag: GpsTag) -> Option<&TagValue> {
        self.known.get(&tag)
    }

    pub fn get_unknown(&self, name: &str) -> Option<&TagValue> {
        self.unknown.get(name)
    }

    pub fn len(&self) -> usize {
        self.known.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unknown.is_empty()
    }

    /// Collects every field of the primary image's GPS IFD.
    pub fn from_exif(exif: &exif::Exif) -> Self {
        let mut info = Self::new();
        for field in exif.fields().filter(|f| {
            f.ifd_num == exif::In::PRIMARY && f.tag.context() == exif::Context::Gps
        }) {
            info.insert(&field.tag.to_string(), tag_value(field));
        }
        info
    }
}

fn tag_value(field: &exif::Field) -> TagValue {
    match &field.value {
        exif::Value::Rational(rationals) => TagValue::Rationals(
            rationals
                .iter()
                .map(|r| Rational::new(r.num, r.denom))
                .collect(),
        ),
        exif::Value::Ascii(parts) => TagValue::Text(
            parts
                .first()
                .map(|bytes| {
                    String::from_utf8_lossy(bytes)
                        .trim_end_matches('\0')
                        .trim()
                        .to_string()
                })
                .unwrap_or_default(),
        ),
        exif::Value::Byte(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        exif::Value::Short(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        exif::Value::Long(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        _ => TagValue::Text(field.display_value().to_string()),
    }
}

/// Reads the GPS tags of an image file.
///
/// A file without EXIF data, or in a container the EXIF reader does not support (GIF, BMP),
/// yields an empty [`GeoInfo`].
pub fn read_geo_info(path: &Path) -> Result<GeoInfo, GeoError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => {
            let info = GeoInfo::from_exif(&exif);
            debug!(path = %path.display(), tags = info.len(), "read GPS tags");
            Ok(info)
        }
        Err(exif::Error::NotFound(_) | exif::Error::InvalidFormat(_)) => {
            debug!(path = %path.display(), "no readable EXIF data");
            Ok(GeoInfo::default())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gps::decode_coordinates;
    use crate::test_utils::{gif_1x1, jpeg_with_gps, jpeg_without_exif};

    #[test]
    fn test_known_tags_round_trip_through_names() {
        for tag in GpsTag::ALL {
            assert_eq!(GpsTag::from_name(tag.name()), Some(tag));
        }
        assert_eq!(GpsTag::from_name("GPSSpeed"), None);
    }

    #[test]
    fn test_insert_routes_unknown_tags_to_fallback_bucket() {
        let info = GeoInfo::new()
            .with("GPSLatitudeRef", TagValue::Text("N".into()))
            .with("GPSSpeed", TagValue::Number(12.0));

        assert_eq!(
            info.get(GpsTag::LatitudeRef),
            Some(&TagValue::Text("N".into()))
        );
        assert_eq!(info.get_unknown("GPSSpeed"), Some(&TagValue::Number(12.0)));
        assert!(info.get_unknown("GPSLatitudeRef").is_none());
        assert_eq!(info.len(), 2);
    }

    #[test]
    fn test_rational_rejects_zero_denominator() {
        assert_eq!(Rational::new(3, 2).to_f64(), Some(1.5));
        assert_eq!(Rational::new(3, 0).to_f64(), None);
    }

    #[test]
    fn test_reads_gps_ifd_from_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geotagged.jpg");
        std::fs::write(
            &path,
            jpeg_with_gps('N', [(40, 1), (26, 1), (46, 1)], 'W', [(79, 1), (58, 1), (5600, 100)]),
        )
        .unwrap();

        let info = read_geo_info(&path).unwrap();

        assert_eq!(
            info.get(GpsTag::LatitudeRef),
            Some(&TagValue::Text("N".into()))
        );
        assert_eq!(
            info.get(GpsTag::Longitude),
            Some(&TagValue::Rationals(vec![
                Rational::new(79, 1),
                Rational::new(58, 1),
                Rational::new(5600, 100),
            ]))
        );

        let coordinates = decode_coordinates(&info).unwrap().unwrap();
        assert!((coordinates.latitude - 40.4461).abs() < 1e-3);
        assert!((coordinates.longitude + 79.9822).abs() < 1e-3);
    }

    #[test]
    fn test_jpeg_without_exif_yields_empty_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jpg");
        std::fs::write(&path, jpeg_without_exif()).unwrap();

        let info = read_geo_info(&path).unwrap();
        assert!(info.is_empty());
        assert!(decode_coordinates(&info).unwrap().is_none());
    }

    #[test]
    fn test_unsupported_image_container_yields_empty_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        std::fs::write(&path, gif_1x1()).unwrap();

        let info = read_geo_info(&path).unwrap();
        assert!(info.is_empty());
        assert!(decode_coordinates(&info).unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_geo_info(Path::new("does/not/exist.jpg"));
        assert!(matches!(result, Err(GeoError::Io(_))));
    }
}
