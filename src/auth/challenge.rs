//! Challenge-response computation for the legacy MD5 login
//!
//! The device hashes `<challenge>-<password>` as UTF-16LE with MD5 and
//! expects `<challenge>-<hex digest>` back. MD5 is weak, but the device
//! accepts nothing else on this login path.

use md5::{Digest, Md5};

/// Compute the login response for a challenge
pub fn solve(challenge: &str, password: &str) -> String {
    let input = format!("{}-{}", challenge, password);

    let mut hasher = Md5::new();
    hasher.update(encode_utf16le(&input));
    let digest = hasher.finalize();

    format!("{}-{}", challenge, hex::encode(digest))
}

/// Encode a string as UTF-16 code units in little-endian byte order
pub fn encode_utf16le(input: &str) -> Vec<u8> {
    input.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Decode UTF-16LE bytes back into a string
///
/// Returns `None` for an odd byte count or unpaired surrogates.
pub fn decode_utf16le(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).ok()
}
