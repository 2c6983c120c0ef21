//! Builders for small in-memory test files.

/// A degrees/minutes/seconds triple of `(numerator, denominator)` pairs.
pub type Dms = [(u32, u32); 3];

/// A minimal JPEG whose only content is an EXIF segment with a GPS IFD holding latitude and
/// longitude with their refs.
pub fn jpeg_with_gps(lat_ref: char, lat: Dms, lon_ref: char, lon: Dms) -> Vec<u8> {
    const IFD0_OFFSET: u32 = 8;
    const GPS_IFD_OFFSET: u32 = IFD0_OFFSET + 2 + 12 + 4;
    const LAT_DATA_OFFSET: u32 = GPS_IFD_OFFSET + 2 + 4 * 12 + 4;
    const LON_DATA_OFFSET: u32 = LAT_DATA_OFFSET + 24;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&IFD0_OFFSET.to_le_bytes());

    // IFD0: only the GPSInfo pointer.
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x8825, 4, 1, GPS_IFD_OFFSET.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    // GPS IFD.
    tiff.extend_from_slice(&4u16.to_le_bytes());
    push_entry(&mut tiff, 0x0001, 2, 2, ascii_ref(lat_ref));
    push_entry(&mut tiff, 0x0002, 5, 3, LAT_DATA_OFFSET.to_le_bytes());
    push_entry(&mut tiff, 0x0003, 2, 2, ascii_ref(lon_ref));
    push_entry(&mut tiff, 0x0004, 5, 3, LON_DATA_OFFSET.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    for (num, den) in lat.into_iter().chain(lon) {
        tiff.extend_from_slice(&num.to_le_bytes());
        tiff.extend_from_slice(&den.to_le_bytes());
    }

    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("EXIF segment fits in u16");
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// A JPEG without any EXIF segment.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

/// A valid 1x1 GIF89a; GIF has no EXIF container.
pub fn gif_1x1() -> Vec<u8> {
    let mut gif = b"GIF89a".to_vec();
    gif.extend_from_slice(&[
        0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, // screen descriptor
        0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, // palette
        0x2C, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, // image descriptor
        0x02, 0x02, 0x44, 0x01, 0x00, // image data
        0x3B,
    ]);
    gif
}

fn push_entry(out: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&value);
}

fn ascii_ref(hemisphere: char) -> [u8; 4] {
    let mut value = [0; 4];
    hemisphere.encode_utf8(&mut value[..1]);
    value
}
