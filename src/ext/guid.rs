use crate::utils::error::{ExtError, Result};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use uuid::Uuid;

pub trait GuidExt {
    /// Standard Base64 of the 16 raw bytes (24 characters).
    fn to_base64(&self) -> String;
    /// URL-safe Base64 without padding (22 characters).
    fn to_short_string(&self) -> String;
    /// 32 lowercase hex digits, no hyphens.
    fn to_compact_string(&self) -> String;
    /// XORs the first 8 bytes of both GUIDs; the last 8 bytes come from `self`.
    fn combine_xor(&self, other: &Uuid) -> Uuid;
    fn is_empty(&self) -> bool;
}

impl GuidExt for Uuid {
    fn to_base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }

    fn to_short_string(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.as_bytes())
    }

    fn to_compact_string(&self) -> String {
        self.simple().to_string()
    }

    fn combine_xor(&self, other: &Uuid) -> Uuid {
        let mut bytes = *self.as_bytes();
        for (byte, other_byte) in bytes.iter_mut().zip(other.as_bytes()).take(8) {
            *byte ^= other_byte;
        }
        Uuid::from_bytes(bytes)
    }

    fn is_empty(&self) -> bool {
        self.is_nil()
    }
}

pub fn guid_from_base64(value: &str) -> Result<Uuid> {
    let bytes = STANDARD.decode(value.trim())?;
    Ok(Uuid::from_slice(&bytes)?)
}

pub fn guid_from_short_string(value: &str) -> Result<Uuid> {
    let bytes = URL_SAFE_NO_PAD.decode(value.trim())?;
    Uuid::from_slice(&bytes).map_err(ExtError::from)
}

/// Flattens GUIDs back into their raw bytes, 16 per GUID.
pub fn guids_to_bytes(guids: &[Uuid]) -> Vec<u8> {
    guids.iter().flat_map(|g| g.as_bytes().iter().copied()).collect()
}
