//! AAAA record factory

use std::net::Ipv6Addr;

use crate::error::RecordError;
use crate::records::{RecordData, RecordType};

/// Build an AAAA record from a colon-hex string literal.
pub fn build(value: &str) -> Result<RecordData, RecordError> {
    let addr: Ipv6Addr = value
        .parse()
        .map_err(|e| RecordError::context_from(RecordType::Aaaa, value, e))?;
    Ok(RecordData::Aaaa(addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ipv6_literal() {
        assert_eq!(
            build("::1").unwrap(),
            RecordData::Aaaa("::1".parse().unwrap())
        );
    }

    #[test]
    fn ipv4_literal_rejected_for_aaaa_record() {
        assert!(build("1.2.3.4").is_err());
    }

    #[test]
    fn invalid_literal_errors_with_context() {
        let err = build("garbage").unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidRecordContext { record_type: RecordType::Aaaa, .. }
        ));
    }
}
