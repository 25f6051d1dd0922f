//! CNAME record factory

use crate::error::RecordError;
use crate::name::punycode;
use crate::records::{RecordData, RecordType};

/// Build a CNAME record from a single hostname string, punycode-normalized.
pub fn build(value: &str) -> Result<RecordData, RecordError> {
    let target = punycode::to_ascii(value)
        .map_err(|e| RecordError::context_from(RecordType::Cname, value, e))?;
    Ok(RecordData::Cname(target))
}
