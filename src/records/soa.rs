//! SOA record factory

use crate::error::RecordError;
use crate::name::punycode;
use crate::records::{RecordData, RecordType, RecordValue};

/// Build an SOA record from the structured seven-field value. Domain-name
/// fields are punycode-normalized; integer fields must already fit a
/// `u32`, which callers guarantee by parsing them as `u32` up front
/// (the bounds check lives at the deserialization boundary, so a value of
/// `2^32` never reaches this function as a valid `u32`).
pub fn build(value: &RecordValue) -> Result<RecordData, RecordError> {
    let RecordValue::Soa {
        mname,
        rname,
        serial,
        refresh,
        retry,
        expire,
        minimum,
    } = value
    else {
        return Err(RecordError::context(RecordType::Soa, "<non-soa value>"));
    };

    let mname = punycode::to_ascii(mname)
        .map_err(|e| RecordError::context_from(RecordType::Soa, mname.clone(), e))?;
    let rname = punycode::to_ascii(rname)
        .map_err(|e| RecordError::context_from(RecordType::Soa, rname.clone(), e))?;

    Ok(RecordData::Soa {
        mname,
        rname,
        serial: *serial,
        refresh: *refresh,
        retry: *retry,
        expire: *expire,
        minimum: *minimum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soa_value(serial: u32) -> RecordValue {
        RecordValue::Soa {
            mname: "ns1.example.com".to_string(),
            rname: "hostmaster.example.com".to_string(),
            serial,
            refresh: 3600,
            retry: 600,
            expire: 86400,
            minimum: 300,
        }
    }

    #[test]
    fn structured_value_builds_single_rr() {
        let rr = build(&soa_value(1)).unwrap();
        assert!(matches!(rr, RecordData::Soa { .. }));
    }

    #[test]
    fn max_u32_serial_succeeds() {
        let rr = build(&soa_value(u32::MAX)).unwrap();
        match rr {
            RecordData::Soa { serial, .. } => assert_eq!(serial, u32::MAX),
            _ => panic!("expected SOA"),
        }
    }

    #[test]
    fn non_soa_value_rejected() {
        assert!(build(&RecordValue::Text("nope".to_string())).is_err());
    }
}
