//! A record factory

use std::net::Ipv4Addr;

use crate::error::RecordError;
use crate::records::{RecordData, RecordType};

/// Build an A record from a dotted-quad string literal.
pub fn build(value: &str) -> Result<RecordData, RecordError> {
    let addr: Ipv4Addr = value
        .parse()
        .map_err(|e| RecordError::context_from(RecordType::A, value, e))?;
    Ok(RecordData::A(addr))
}
