//! NS record factory

use crate::error::RecordError;
use crate::name::punycode;
use crate::records::{RecordData, RecordType};

/// Build an NS record from a single hostname string, punycode-normalized.
pub fn build(value: &str) -> Result<RecordData, RecordError> {
    let target =
        punycode::to_ascii(value).map_err(|e| RecordError::context_from(RecordType::Ns, value, e))?;
    Ok(RecordData::Ns(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_stored_as_punycode() {
        assert_eq!(
            build("ns1.example.com").unwrap(),
            RecordData::Ns("ns1.example.com".to_string())
        );
    }
}
