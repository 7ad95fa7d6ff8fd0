//! On-disk barrel format
//!
//! A barrel file is a checksummed posting map:
//! - vbyte entry count
//! - per entry: vbyte word_id, vbyte bitmap length, roaring bitmap bytes
//! - 4-byte LE crc32 of everything before it
//!
//! BTreeMap iteration plus roaring's canonical serialization make the
//! encoding deterministic: identical posting maps produce identical
//! bytes, so re-flushing unchanged data rewrites files byte-for-byte.

use std::collections::BTreeMap;
use std::io;

use roaring::RoaringBitmap;

use crate::types::WordId;

/// Variable-byte encoding for integers (commonly used in search engines)
pub fn encode_vbyte(value: u32, output: &mut Vec<u8>) {
    let mut v = value;
    loop {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            output.push(byte | 0x80); // Set high bit to indicate last byte
            break;
        } else {
            output.push(byte);
        }
    }
}

/// Decode a variable-byte encoded integer
pub fn decode_vbyte(input: &[u8], pos: &mut usize) -> io::Result<u32> {
    let mut result: u32 = 0;
    let mut shift = 0;

    loop {
        if *pos >= input.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Unexpected end of vbyte",
            ));
        }

        let byte = input[*pos];
        *pos += 1;

        result |= ((byte & 0x7F) as u32) << shift;

        if byte & 0x80 != 0 {
            return Ok(result);
        }

        shift += 7;
        if shift > 28 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "VByte value too large",
            ));
        }
    }
}

/// Encode a barrel's posting map, appending the crc32 footer
pub fn encode_barrel(postings: &BTreeMap<WordId, RoaringBitmap>) -> Vec<u8> {
    let mut payload = Vec::new();

    encode_vbyte(postings.len() as u32, &mut payload);
    for (word_id, doc_ids) in postings {
        encode_vbyte(word_id.as_u32(), &mut payload);
        encode_vbyte(doc_ids.serialized_size() as u32, &mut payload);
        doc_ids.serialize_into(&mut payload).unwrap();
    }

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&payload);
    payload.extend_from_slice(&hasher.finalize().to_le_bytes());
    payload
}

/// Decode a barrel file, verifying its checksum
pub fn decode_barrel(data: &[u8]) -> io::Result<BTreeMap<WordId, RoaringBitmap>> {
    if data.len() < 4 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Barrel file truncated",
        ));
    }

    let (payload, footer) = data.split_at(data.len() - 4);
    let expected = u32::from_le_bytes([footer[0], footer[1], footer[2], footer[3]]);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload);
    if hasher.finalize() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Barrel checksum mismatch",
        ));
    }

    let mut pos = 0;
    let count = decode_vbyte(payload, &mut pos)? as usize;

    let mut postings = BTreeMap::new();
    for _ in 0..count {
        let word_id = decode_vbyte(payload, &mut pos)?;
        let len = decode_vbyte(payload, &mut pos)? as usize;

        if pos + len > payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Not enough bytes for posting list",
            ));
        }

        let doc_ids = RoaringBitmap::deserialize_from(&payload[pos..pos + len])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        pos += len;

        postings.insert(WordId(word_id), doc_ids);
    }

    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(doc_ids: &[u32]) -> RoaringBitmap {
        doc_ids.iter().copied().collect()
    }

    #[test]
    fn test_vbyte_encoding() {
        let values = [0u32, 1, 127, 128, 16_383, 16_384, u32::MAX];

        for &value in &values {
            let mut encoded = Vec::new();
            encode_vbyte(value, &mut encoded);

            let mut pos = 0;
            let decoded = decode_vbyte(&encoded, &mut pos).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(pos, encoded.len());
        }
    }

    #[test]
    fn test_vbyte_truncated_input() {
        let mut encoded = Vec::new();
        encode_vbyte(16_384, &mut encoded);
        encoded.pop();

        let mut pos = 0;
        assert!(decode_vbyte(&encoded, &mut pos).is_err());
    }

    #[test]
    fn test_barrel_round_trip() {
        let mut postings = BTreeMap::new();
        postings.insert(WordId(0), bitmap(&[0, 2]));
        postings.insert(WordId(1), bitmap(&[0, 1]));

        let encoded = encode_barrel(&postings);
        let decoded = decode_barrel(&encoded).unwrap();

        assert_eq!(decoded, postings);
    }

    #[test]
    fn test_empty_barrel_round_trip() {
        let postings = BTreeMap::new();
        let encoded = encode_barrel(&postings);
        let decoded = decode_barrel(&encoded).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let mut postings = BTreeMap::new();
        postings.insert(WordId(7), bitmap(&[3, 1, 2]));
        postings.insert(WordId(2), bitmap(&[9]));

        assert_eq!(encode_barrel(&postings), encode_barrel(&postings));
    }

    #[test]
    fn test_checksum_mismatch_detected() {
        let mut postings = BTreeMap::new();
        postings.insert(WordId(0), bitmap(&[1]));

        let mut encoded = encode_barrel(&postings);
        let mid = encoded.len() / 2;
        encoded[mid] ^= 0xFF;

        let err = decode_barrel(&encoded).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_truncated_barrel_detected() {
        let mut postings = BTreeMap::new();
        postings.insert(WordId(0), bitmap(&[1, 5, 9]));

        let encoded = encode_barrel(&postings);
        assert!(decode_barrel(&encoded[..2]).is_err());
        assert!(decode_barrel(&[]).is_err());
    }
}
