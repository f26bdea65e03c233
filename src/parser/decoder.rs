//! Little-endian field decoding for BON records

/// Decode an unsigned little-endian integer of arbitrary width.
///
/// `bytes[0]` is the least significant byte. Widths up to 8 bytes are exact;
/// for longer slices only the low 8 bytes contribute.
pub fn decode_uint_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Decode a 16-bit little-endian field at `offset`
pub(crate) fn read_u16_le(record: &[u8], offset: usize) -> u16 {
    decode_uint_le(&record[offset..offset + 2]) as u16
}

/// Decode a 32-bit little-endian field at `offset`
pub(crate) fn read_u32_le(record: &[u8], offset: usize) -> u32 {
    decode_uint_le(&record[offset..offset + 4]) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uint_le_widths() {
        assert_eq!(decode_uint_le(&[]), 0);
        assert_eq!(decode_uint_le(&[0x7f]), 0x7f);
        assert_eq!(decode_uint_le(&[0xE8, 0x03]), 1000);
        assert_eq!(decode_uint_le(&[0xE7, 0x07]), 2023);
        assert_eq!(decode_uint_le(&[0x80, 0x96, 0x98, 0x00]), 10_000_000);
        assert_eq!(decode_uint_le(&[0xff, 0xff, 0xff, 0xff]), u32::MAX as u64);
    }

    #[test]
    fn test_decode_uint_le_high_bit_is_unsigned() {
        // 0x80 must not sign-extend
        assert_eq!(decode_uint_le(&[0x00, 0x80]), 0x8000);
        assert_eq!(decode_uint_le(&[0x00, 0x00, 0x00, 0x80]), 0x8000_0000);
    }

    #[test]
    fn test_decode_uint_le_matches_byte_composition() {
        let samples: [&[u8]; 4] = [
            &[0x12],
            &[0x34, 0x12],
            &[0x78, 0x56, 0x34, 0x12],
            &[0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01],
        ];
        for bytes in samples {
            let value = decode_uint_le(bytes);
            let resplit = value.to_le_bytes();
            assert_eq!(&resplit[..bytes.len()], bytes);
        }
    }

    #[test]
    fn test_read_fields_at_offset() {
        let record = [0u8, 0, 0xE8, 0x03, 0x80, 0x96, 0x98, 0x00];
        assert_eq!(read_u16_le(&record, 2), 1000);
        assert_eq!(read_u32_le(&record, 4), 10_000_000);
    }
}
