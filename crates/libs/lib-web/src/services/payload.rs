//! # Payload Resolution
//!
//! `/redirect`, `/html` and `/document/write` accept their input either as
//! plain text or as standard base64. A value is decoded only when it is
//! strictly valid base64 *and* decodes to UTF-8; otherwise it is used
//! verbatim.

use lib_utils::b64::{b64_decode_to_string, is_base64_encoded};
use std::borrow::Cow;
use tracing::debug;

/// Decode `input` when it is base64-encoded UTF-8 text, else return it as is.
pub fn resolve_payload(input: &str) -> Cow<'_, str> {
    if !is_base64_encoded(input) {
        return Cow::Borrowed(input);
    }

    match b64_decode_to_string(input) {
        Ok(decoded) => {
            debug!("[PAYLOAD] Decoded {} base64 chars to {} bytes", input.len(), decoded.len());
            Cow::Owned(decoded)
        }
        Err(_) => {
            debug!("[PAYLOAD] Valid base64 but not UTF-8, passing through");
            Cow::Borrowed(input)
        }
    }
}

// endregion: --- Tests
