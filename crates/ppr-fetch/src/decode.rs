//! Windows-1252 decoding for register downloads.

use encoding_rs::WINDOWS_1252;
use thiserror::Error;

/// Bytes Windows-1252 leaves unassigned.
const UNASSIGNED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Error for bytes that have no Windows-1252 mapping.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Byte 0x{byte:02X} at offset {offset} is not valid Windows-1252")]
pub struct DecodeError {
    /// Offset of the offending byte.
    pub offset: usize,
    /// The offending byte.
    pub byte: u8,
}

/// Decodes register bytes as Windows-1252.
///
/// The register is published in Windows-1252, so `€` arrives as `0x80`.
/// Decoding is strict: the five unassigned code points are rejected instead
/// of being passed through as C1 controls.
///
/// # Errors
///
/// Returns an error at the first unassigned byte.
///
/// # Example
///
/// ```
/// use ppr_fetch::decode_cp1252;
///
/// let text = decode_cp1252(b"Price (\x80)").unwrap();
/// assert_eq!(text, "Price (€)");
/// ```
pub fn decode_cp1252(bytes: &[u8]) -> Result<String, DecodeError> {
    if let Some(offset) = bytes.iter().position(|b| UNASSIGNED.contains(b)) {
        return Err(DecodeError {
            offset,
            byte: bytes[offset],
        });
    }

    // Every remaining byte has a mapping, so no replacement happens here.
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}
