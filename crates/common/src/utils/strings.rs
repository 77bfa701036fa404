use alloy::primitives::{I256, U256};
use eyre::{bail, eyre, Result};

/// Reinterprets the bits of an unsigned integer as a two's-complement signed integer
pub fn sign_uint(unsigned: U256) -> I256 {
    I256::from_raw(unsigned)
}

/// Decodes a hex string into a vector of bytes. A leading `0x` is optional.
///
/// ```
/// use lunar_common::utils::strings::decode_hex;
///
/// let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
///
/// assert!(decode_hex("0x123").is_err());
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    // normalize
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);

    if s.len() % 2 != 0 {
        bail!("invalid hex string: odd length {}", s.len());
    }
    if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        bail!("invalid hex string: unexpected character '{c}'");
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| eyre!("invalid hex string: {}", s))
}
