//! Punycode representer
//!
//! Normalizes a UTF-8 (or already-ASCII) domain name into its
//! ASCII-compatible encoding: each label independently IDNA-encoded,
//! trailing dot stripped, result lowercased. Idempotent on input that is
//! already ASCII-compatible.

use crate::error::PunycodeError;

/// Maximum octets a single encoded label may occupy (RFC 1035 §3.1).
const MAX_LABEL_LEN: usize = 63;

/// Convert `name` to its ASCII-compatible (punycode) form.
///
/// This is the single place hostname normalization happens; both the
/// dictionary builder (storage path) and the query handler (lookup path)
/// call through here so internationalized lookups never silently miss.
pub fn to_ascii(name: &str) -> Result<String, PunycodeError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let ascii = idna::domain_to_ascii(trimmed)
        .map_err(|_| PunycodeError::InvalidHostname(name.to_string()))?;

    for label in ascii.split('.') {
        if label.len() > MAX_LABEL_LEN {
            return Err(PunycodeError::LabelTooLong(label.to_string()));
        }
    }

    Ok(ascii.to_lowercase())
}
