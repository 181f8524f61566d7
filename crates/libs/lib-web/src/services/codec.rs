//! # Codec Service
//!
//! Builds the `/encode` and `/decode` response bodies.

use lib_core::dto::{DecodeResponse, EncodeResponse};
use lib_core::Result;
use lib_utils::b64::{b64_decode_to_string, b64_encode};

/// Encode `data` as standard padded base64.
pub fn encode(data: String) -> EncodeResponse {
    let encoded = b64_encode(&data);
    EncodeResponse {
        original: data,
        encoded,
    }
}

/// Strictly decode `data`; the decoded bytes must be UTF-8.
///
/// Unlike the payload resolver, the empty string is accepted and decodes to
/// an empty string.
pub fn decode(data: String) -> Result<DecodeResponse> {
    let decoded = b64_decode_to_string(&data)?;
    Ok(DecodeResponse {
        original_b64: data,
        decoded,
    })
}

// endregion: --- Tests
