// Dictionary binary format: header parsing, validation

use crate::FormatError;

/// Dictionary header magic constants (little-endian).
const COOKIE1: u32 = 0x5748_4431;
const COOKIE2: u32 = 0x0057_4C42;

/// Current format version.
pub const FORMAT_VERSION: u16 = 1;

/// Number of filters a dictionary is made of.
pub const FILTER_COUNT: usize = 4;

/// Size of the dictionary binary header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Parsed dictionary file header.
///
/// The header occupies the first 16 bytes:
/// - bytes 0..4: cookie1 (magic number)
/// - bytes 4..8: cookie2 (magic number)
/// - bytes 8..10: format version
/// - bytes 10..12: filter count
/// - bytes 12..16: reserved (zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryHeader {
    pub version: u16,
    pub filter_count: u16,
}

/// Serialize a header for the current version.
pub fn write_header(out: &mut Vec<u8>, filter_count: u16) {
    out.extend_from_slice(&COOKIE1.to_le_bytes());
    out.extend_from_slice(&COOKIE2.to_le_bytes());
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&filter_count.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
}

/// Parse and validate the 16-byte dictionary header.
///
/// Rejects unknown versions and any filter count other than
/// [`FILTER_COUNT`].
pub fn parse_header(data: &[u8]) -> Result<DictionaryHeader, FormatError> {
    if data.len() < HEADER_SIZE {
        return Err(FormatError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let cookie1 = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let cookie2 = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    if cookie1 != COOKIE1 || cookie2 != COOKIE2 {
        return Err(FormatError::InvalidMagic);
    }

    let version = u16::from_le_bytes([data[8], data[9]]);
    if version != FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion(version));
    }

    let filter_count = u16::from_le_bytes([data[10], data[11]]);
    if filter_count as usize != FILTER_COUNT {
        return Err(FormatError::FilterCount {
            expected: FILTER_COUNT,
            actual: filter_count as usize,
        });
    }

    Ok(DictionaryHeader {
        version,
        filter_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_header(filter_count: u16) -> Vec<u8> {
        let mut buf = Vec::new();
        write_header(&mut buf, filter_count);
        buf
    }

    #[test]
    fn parse_valid_header() {
        let data = make_header(4);
        assert_eq!(data.len(), HEADER_SIZE);
        let header = parse_header(&data).unwrap();
        assert_eq!(header.version, FORMAT_VERSION);
        assert_eq!(header.filter_count, 4);
    }

    #[test]
    fn reject_too_short() {
        let data = [0u8; 8];
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(
            err,
            FormatError::TooShort {
                expected: 16,
                actual: 8
            }
        ));
    }

    #[test]
    fn reject_invalid_magic() {
        let mut data = make_header(4);
        data[0] = 0xFF;
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(err, FormatError::InvalidMagic));
    }

    #[test]
    fn reject_unknown_version() {
        let mut data = make_header(4);
        data[8..10].copy_from_slice(&7u16.to_le_bytes());
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedVersion(7)));
    }

    #[test]
    fn reject_wrong_filter_count() {
        let data = make_header(3);
        let err = parse_header(&data).unwrap_err();
        assert!(matches!(
            err,
            FormatError::FilterCount {
                expected: 4,
                actual: 3
            }
        ));
    }
}
