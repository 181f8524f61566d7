//! # Base64 Encoding/Decoding
//!
//! Strict standard-alphabet base64 helpers.
//!
//! Decoding only accepts the standard alphabet (`A-Z a-z 0-9 + /`), a length
//! that is a multiple of 4 and canonical `=` padding at the end. Anything else
//! is rejected with [`Error::FailToB64Decode`]. Non-zero bits left over in the
//! last symbol are ignored.

use base64::{
    alphabet,
    engine::{general_purpose, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

/// Standard alphabet, canonical padding required, trailing bits tolerated.
const STRICT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Encode UTF-8 text to standard padded base64.
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Strictly decode a standard padded base64 string to bytes.
pub fn b64_decode(b64: &str) -> Result<Vec<u8>, Error> {
    STRICT_STANDARD
        .decode(b64)
        .map_err(|_| Error::FailToB64Decode)
}

/// Strictly decode a standard padded base64 string to UTF-8 text.
///
/// Decoded bytes that are not valid UTF-8 count as a decode failure.
pub fn b64_decode_to_string(b64: &str) -> Result<String, Error> {
    b64_decode(b64)
        .and_then(|bytes| String::from_utf8(bytes).map_err(|_| Error::FailToB64Decode))
}

/// Check whether `input` is non-empty, strictly valid base64.
///
/// The decoded bytes do not have to be UTF-8.
pub fn is_base64_encoded(input: &str) -> bool {
    !input.is_empty() && b64_decode(input).is_ok()
}

// region:    --- Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

// endregion: --- Tests
