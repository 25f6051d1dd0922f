//! PTR record factory

use crate::error::RecordError;
use crate::name::punycode;
use crate::records::{RecordData, RecordType};

/// Build a PTR record from a single hostname string, punycode-normalized.
///
/// The owner-side reverse-arpa canonicalization (invariant 2) happens in
/// the dictionary builder, not here: this factory only ever sees the
/// target hostname the PTR points at.
pub fn build(value: &str) -> Result<RecordData, RecordError> {
    let target =
        punycode::to_ascii(value).map_err(|e| RecordError::context_from(RecordType::Ptr, value, e))?;
    Ok(RecordData::Ptr(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_stored_as_punycode() {
        assert_eq!(
            build("domain_1.com").unwrap(),
            RecordData::Ptr("domain_1.com".to_string())
        );
    }
}
