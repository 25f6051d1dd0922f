//! TXT record factory

use crate::error::RecordError;
use crate::records::{RecordData, RecordType};

/// Maximum length, in octets, of a single DNS character-string.
const MAX_CHARACTER_STRING_LEN: usize = 255;

/// Build a TXT record from a single character-string.
pub fn build(value: &str) -> Result<RecordData, RecordError> {
    if value.len() > MAX_CHARACTER_STRING_LEN {
        return Err(RecordError::context(RecordType::Txt, value));
    }
    Ok(RecordData::Txt(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_255_octets_succeeds() {
        let text = "a".repeat(255);
        assert!(build(&text).is_ok());
    }

    #[test]
    fn length_256_octets_fails() {
        let text = "a".repeat(256);
        assert!(build(&text).is_err());
    }

    #[test]
    fn short_text_preserved() {
        assert_eq!(
            build("hello").unwrap(),
            RecordData::Txt("hello".to_string())
        );
    }
}
