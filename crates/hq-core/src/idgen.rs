//! SHA256 + base36 ID generation for new entities.

use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};

/// Base36 alphabet (0-9, a-z).
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default hash length for generated ids.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Converts a byte slice to a base36 string of the specified length.
pub fn encode_base36(data: &[u8], length: usize) -> String {
    let mut num = BigUint::from_bytes_be(data);
    let base = BigUint::from(36u32);
    let zero = BigUint::zero();

    // Build the string in reverse.
    let mut chars: Vec<u8> = Vec::with_capacity(length);
    while num > zero {
        let rem = &num % &base;
        num /= &base;
        // rem is guaranteed to be < 36, so fits in a u8 index.
        let idx = rem.to_u32_digits();
        let i = if idx.is_empty() { 0 } else { idx[0] as usize };
        chars.push(BASE36_ALPHABET[i]);
    }

    // Reverse to get most-significant digit first.
    chars.reverse();

    let mut s = String::from_utf8(chars).expect("base36 chars are valid UTF-8");

    // Pad with zeros if needed.
    if s.len() < length {
        let padding = "0".repeat(length - s.len());
        s = padding + &s;
    }

    // Truncate to exact length (keep least significant digits).
    if s.len() > length {
        s = s[s.len() - length..].to_owned();
    }

    s
}

/// Creates a hash-based ID for a new entity, e.g. `"hq-3f9ka2"`.
///
/// Uses base36 encoding (0-9, a-z) for better information density than hex.
/// The `nonce` lets the caller retry on the (unlikely) collision with an
/// existing id.
pub fn generate_hash_id(
    prefix: &str,
    title: &str,
    creator: &str,
    timestamp: DateTime<Utc>,
    length: usize,
    nonce: i32,
) -> String {
    // Combine inputs into a stable content string.
    let content = format!(
        "{}|{}|{}|{}",
        title,
        creator,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        nonce
    );

    let hash = Sha256::digest(content.as_bytes());

    // 5 bytes = 40 bits ~ 7.73 base36 chars, enough for lengths up to 7;
    // longer ids take more input bytes.
    let num_bytes = if length <= 7 { 5 } else { 6 };

    let short_hash = encode_base36(&hash[..num_bytes], length);
    format!("{}-{}", prefix, short_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_base36_basic() {
        // 0 bytes -> all zeros
        let result = encode_base36(&[], 4);
        assert_eq!(result, "0000");
    }

    #[test]
    fn encode_base36_length() {
        let data = [0xFF, 0xFF];
        let result = encode_base36(&data, 4);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn encode_base36_truncates() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF];
        let result = encode_base36(&data, 3);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn generate_hash_id_format() {
        let ts = chrono::Utc::now();
        let id = generate_hash_id("hq", "New Task", "me", ts, 6, 0);
        assert!(id.starts_with("hq-"));
        // prefix "hq-" + 6 chars = 9 total
        assert_eq!(id.len(), 9);
    }

    #[test]
    fn generate_hash_id_deterministic() {
        let ts = DateTime::parse_from_rfc3339("2026-02-18T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let id1 = generate_hash_id("hq", "Title", "me", ts, 6, 0);
        let id2 = generate_hash_id("hq", "Title", "me", ts, 6, 0);
        assert_eq!(id1, id2);
    }

    #[test]
    fn generate_hash_id_nonce_changes_output() {
        let ts = chrono::Utc::now();
        let id1 = generate_hash_id("hq", "Title", "me", ts, 6, 0);
        let id2 = generate_hash_id("hq", "Title", "me", ts, 6, 1);
        assert_ne!(id1, id2);
    }
}
