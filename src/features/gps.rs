use crate::features::error::GeoError;
use crate::features::geo_info::{GeoInfo, GpsTag, Rational, TagValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// `[latitude, longitude]`, the order map widgets expect.
    pub const fn as_pair(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

struct Axis {
    magnitude: GpsTag,
    reference: GpsTag,
    negative_ref: &'static str,
}

const LATITUDE: Axis = Axis {
    magnitude: GpsTag::Latitude,
    reference: GpsTag::LatitudeRef,
    negative_ref: "S",
};

const LONGITUDE: Axis = Axis {
    magnitude: GpsTag::Longitude,
    reference: GpsTag::LongitudeRef,
    negative_ref: "W",
};

/// Converts the EXIF GPS tags of an image into signed decimal degrees.
///
/// Returns `Ok(None)` when either axis lacks its value or its hemisphere reference; that is the
/// normal result for images without a geotag. A reference other than `S`/`W` keeps the axis
/// positive.
///
/// # Errors
///
/// [`GeoError::InvalidCoordinate`] if a coordinate value is not three rationals or has a zero
/// denominator.
pub fn decode_coordinates(info: &GeoInfo) -> Result<Option<Coordinates>, GeoError> {
    let latitude = decode_axis(info, &LATITUDE)?;
    let longitude = decode_axis(info, &LONGITUDE)?;

    Ok(match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    })
}

fn decode_axis(info: &GeoInfo, axis: &Axis) -> Result<Option<f64>, GeoError> {
    let (Some(value), Some(reference)) = (info.get(axis.magnitude), info.get(axis.reference))
    else {
        return Ok(None);
    };

    let tag = axis.magnitude.name();
    let degrees = dms_to_degrees(tag, value)?;
    let is_negative = reference.as_text() == Some(axis.negative_ref);

    Ok(Some(if is_negative { -degrees } else { degrees }))
}

fn dms_to_degrees(tag: &'static str, value: &TagValue) -> Result<f64, GeoError> {
    let Some([degrees, minutes, seconds]) = value.as_rationals().and_then(as_triple) else {
        return Err(GeoError::InvalidCoordinate {
            tag,
            reason: format!("expected three rationals, got {value:?}"),
        });
    };

    let part = |rational: Rational| {
        rational.to_f64().ok_or_else(|| GeoError::InvalidCoordinate {
            tag,
            reason: format!("zero denominator in {}/{}", rational.num, rational.den),
        })
    };

    Ok(part(degrees)? + part(minutes)? / 60.0 + part(seconds)? / 3600.0)
}

fn as_triple(rationals: &[Rational]) -> Option<[Rational; 3]> {
    rationals.try_into().ok()
}
