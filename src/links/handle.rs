//! Base64 handle codec.
//!
//! Service handles are 64-bit integers serialized as unpadded URL-safe base64
//! in links. Decoding accepts short tokens (fewer than 8 bytes) and
//! zero-extends them, matching the service SDK's handle serialization
//! bit-for-bit.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// A 64-bit user/resource identifier within the service.
pub type Handle = i64;

/// Reserved sentinel distinct from every valid handle.
pub const INVALID_HANDLE: Handle = -1;

/// Decode an unpadded URL-safe base64 token into a handle.
///
/// Returns `None` for empty tokens, tokens with characters outside the
/// alphabet, or tokens encoding more than 8 bytes.
pub fn base64_to_handle(token: &str) -> Option<Handle> {
    let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
    if bytes.is_empty() || bytes.len() > 8 {
        return None;
    }
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(&bytes);
    Some(Handle::from_le_bytes(buf))
}

/// Encode a handle as unpadded URL-safe base64.
pub fn handle_to_base64(handle: Handle) -> String {
    URL_SAFE_NO_PAD.encode(handle.to_le_bytes())
}
