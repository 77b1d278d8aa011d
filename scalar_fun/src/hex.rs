//! Utility module for hex encoding and decoding
use alloc::{string::String, vec::Vec};
use core::fmt;

/// Error representing a failed conversion from hex into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// The string contained a character that is not a hex digit.
    InvalidHex,
    /// The string had an odd number of hex digits.
    OddLength,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use HexError::*;
        match self {
            InvalidHex => write!(f, "invalid hex string"),
            OddLength => write!(f, "hex string had an odd length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

fn hex_val(c: u8) -> Result<u8, HexError> {
    match c {
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(HexError::InvalidHex),
    }
}

/// Writes `bytes` as lowercase hex.
pub(crate) fn write_hex(f: &mut impl fmt::Write, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?
    }
    Ok(())
}

/// Encode some bytes as a hex String.
///
/// # Examples
/// ```
/// use scalar_fun::hex;
/// assert_eq!(hex::encode(&[0x00, 0xbe, 0xef]), "00beef");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    // writing to a String can't fail
    let _ = write_hex(&mut hex, bytes);
    hex
}

/// Decode hex into a `Vec<u8>`. Upper and lower case digits are accepted.
///
/// # Examples
/// ```
/// use scalar_fun::hex::{self, HexError};
/// assert_eq!(hex::decode("00BEef").unwrap(), vec![0x00, 0xbe, 0xef]);
/// assert_eq!(hex::decode("abc"), Err(HexError::OddLength));
/// assert_eq!(hex::decode("zz"), Err(HexError::InvalidHex));
/// ```
pub fn decode(hex: &str) -> Result<Vec<u8>, HexError> {
    if hex.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    hex.as_bytes()
        .chunks(2)
        .map(|pair| Ok(hex_val(pair[0])? << 4 | hex_val(pair[1])?))
        .collect()
}
