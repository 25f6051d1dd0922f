//! Domain name handling: punycode normalization and reverse-DNS literals.

pub mod punycode;
pub mod reverse;

use crate::error::DictionaryError;

/// Normalize a dictionary outer key (hostname or IP literal) to the owner
/// name it is stored under, per invariant 1 and invariant 2.
///
/// IPv4/IPv6 literals become their reverse-arpa form; everything else is
/// lowercased, de-trailing-dotted, and punycode-encoded.
pub fn normalize_owner(key: &str) -> Result<String, DictionaryError> {
    if reverse::is_ip_literal(key) {
        Ok(reverse::reverse_name(key)?)
    } else {
        Ok(punycode::to_ascii(key)?)
    }
}

/// Normalize an inbound query QNAME the same way stored owners are
/// normalized, so lookups never miss due to case or trailing-dot drift.
///
/// The wire form is already ASCII (hickory-proto decodes labels as-is), so
/// this only lowercases and strips the trailing dot; it does not re-run
/// punycode encoding, since a punycode name fed back through the encoder
/// is idempotent but doing the extra work on every query is needless.
pub fn normalize_query_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn ascii_domain_strategy() -> impl Strategy<Value = String> {
        let label = "[a-z][a-z0-9]{0,9}";
        proptest::collection::vec(label, 1..4).prop_map(|labels| labels.join("."))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// ASCII/UTF-8 query equivalence: a dictionary declared with a
        /// hostname key and a query arriving for that same hostname (already
        /// ASCII on the wire, as every resolver sends it) must normalize to
        /// the identical lookup key, whichever of the two normalization
        /// paths (storage-side `normalize_owner`, query-side
        /// `normalize_query_name`) is taken.
        #[test]
        fn prop_owner_and_query_normalization_agree(name in ascii_domain_strategy()) {
            let owner = normalize_owner(&name).unwrap();
            let query = normalize_query_name(&name);
            prop_assert_eq!(owner, query);
        }
    }
}
