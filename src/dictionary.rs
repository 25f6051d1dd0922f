//! Dictionary builder
//!
//! Walks the user-supplied record mapping, dispatches each `(owner, type,
//! value)` triple to the matching factory, and assembles the immutable
//! dictionary the query handler consults.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{DictionaryError, RecordError};
use crate::name;
use crate::records::{self, mx::ParsedMx, RecordData, RecordType, RecordValue};

/// User-supplied records: `owner -> { type_tag -> value }`, per spec.md
/// §6's input schema.
pub type RecordMap = HashMap<String, HashMap<String, RecordValue>>;

/// The authoritative mapping consulted at query time. Immutable once
/// built; `MockDnsServer::assign_mocks` replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<(String, RecordType), Vec<RecordData>>,
}

impl Dictionary {
    /// Look up the stored RRs for a normalized `(owner, type)` key.
    pub fn lookup(&self, owner: &str, record_type: RecordType) -> Option<&[RecordData]> {
        self.entries
            .get(&(owner.to_string(), record_type))
            .map(|v| v.as_slice())
    }

    /// Number of distinct `(owner, type)` keys stored, for diagnostics and
    /// tests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a [`Dictionary`] from the loose user-supplied mapping.
///
/// Fails fast: the first factory failure aborts the build and no partial
/// dictionary is ever returned.
pub fn build(records: RecordMap) -> Result<Dictionary, DictionaryError> {
    let mut entries: HashMap<(String, RecordType), Vec<RecordData>> = HashMap::new();

    for (owner_key, type_map) in records {
        let owner = name::normalize_owner(&owner_key)?;

        for (type_tag, value) in type_map {
            let record_type = RecordType::from_str(&type_tag)?;
            let built = build_for_type(record_type, value)?;
            entries.entry((owner.clone(), record_type)).or_default().extend(built);
        }
    }

    Ok(Dictionary { entries })
}

/// Dispatch a single `(type, value)` pair to its factory, expanding lists
/// and applying MX priority auto-assignment.
fn build_for_type(record_type: RecordType, value: RecordValue) -> Result<Vec<RecordData>, DictionaryError> {
    match record_type {
        RecordType::Cname => Ok(vec![records::build_cname(&as_text(&value, record_type)?)?]),
        RecordType::Soa => Ok(vec![records::build_soa(&value)?]),
        RecordType::Mx => {
            let items = as_list(value);
            let mut parsed: Vec<ParsedMx> = Vec::with_capacity(items.len());
            for item in &items {
                parsed.push(records::build_mx(item)?);
            }
            Ok(records::assign_mx_preferences(parsed))
        }
        RecordType::A => build_each(value, record_type, |s| records::build_a(s)),
        RecordType::Aaaa => build_each(value, record_type, |s| records::build_aaaa(s)),
        RecordType::Ns => build_each(value, record_type, |s| records::build_ns(s)),
        RecordType::Ptr => build_each(value, record_type, |s| records::build_ptr(s)),
        RecordType::Txt => build_each(value, record_type, |s| records::build_txt(s)),
    }
}

fn build_each(
    value: RecordValue,
    record_type: RecordType,
    factory: impl Fn(&str) -> Result<RecordData, RecordError>,
) -> Result<Vec<RecordData>, DictionaryError> {
    let items = as_list(value);
    let mut out = Vec::with_capacity(items.len());
    for item in &items {
        out.push(factory(&as_text(item, record_type)?)?);
    }
    Ok(out)
}

/// Expand a value into an ordered list: a `List` is iterated as given, a
/// scalar is treated as a singleton list (the dictionary's mapping is a
/// loose, human-friendly format that should not force list-wrapping of a
/// single entry).
fn as_list(value: RecordValue) -> Vec<RecordValue> {
    match value {
        RecordValue::List(items) => items,
        other => vec![other],
    }
}

fn as_text(value: &RecordValue, record_type: RecordType) -> Result<String, RecordError> {
    match value {
        RecordValue::Text(s) => Ok(s.clone()),
        _ => Err(RecordError::context(record_type, "<non-scalar value>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RecordValue {
        RecordValue::Text(s.to_string())
    }

    fn list(items: &[&str]) -> RecordValue {
        RecordValue::List(items.iter().map(|s| text(s)).collect())
    }

    #[test]
    fn builds_a_record_from_list() {
        let mut records = RecordMap::new();
        let mut types = HashMap::new();
        types.insert("a".to_string(), list(&["1.2.3.4"]));
        records.insert("example.com".to_string(), types);

        let dict = build(records).unwrap();
        let stored = dict.lookup("example.com", RecordType::A).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], RecordData::A("1.2.3.4".parse().unwrap()));
    }

    #[test]
    fn builds_a_record_from_scalar() {
        let mut records = RecordMap::new();
        let mut types = HashMap::new();
        types.insert("a".to_string(), text("1.2.3.4"));
        records.insert("example.com".to_string(), types);

        let dict = build(records).unwrap();
        assert_eq!(dict.lookup("example.com", RecordType::A).unwrap().len(), 1);
    }

    #[test]
    fn ptr_owner_normalized_to_reverse_form() {
        let mut records = RecordMap::new();
        let mut types = HashMap::new();
        types.insert("ptr".to_string(), list(&["domain_1.com", "domain_2.com"]));
        records.insert("1.2.3.4".to_string(), types);

        let dict = build(records).unwrap();
        let stored = dict
            .lookup("4.3.2.1.in-addr.arpa", RecordType::Ptr)
            .unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn mx_priorities_assigned_per_owner() {
        let mut records = RecordMap::new();
        let mut types = HashMap::new();
        types.insert(
            "mx".to_string(),
            list(&[".:0", "mx1.domain.com:10", "mx2.domain.com:10", "mx3.domain.com"]),
        );
        records.insert("example.com".to_string(), types);

        let dict = build(records).unwrap();
        let stored = dict.lookup("example.com", RecordType::Mx).unwrap();
        let prefs: Vec<u16> = stored
            .iter()
            .map(|r| match r {
                RecordData::Mx { preference, .. } => *preference,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(prefs, vec![0, 10, 10, 40]);
    }

    #[test]
    fn unicode_owner_and_mx_exchange_punycoded() {
        let mut records = RecordMap::new();
        let mut types = HashMap::new();
        types.insert("mx".to_string(), list(&["másletras.mañana.com"]));
        records.insert("mañana.com".to_string(), types);

        let dict = build(records).unwrap();
        let stored = dict
            .lookup("xn--maana-pta.com", RecordType::Mx)
            .unwrap();
        match &stored[0] {
            RecordData::Mx { exchange, preference } => {
                assert_eq!(exchange, "xn--msletras-8ya.xn--maana-pta.com");
                assert_eq!(*preference, 10);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn first_factory_failure_aborts_whole_build() {
        let mut records = RecordMap::new();
        let mut types = HashMap::new();
        types.insert("a".to_string(), list(&["not-an-ip"]));
        records.insert("example.com".to_string(), types);

        assert!(build(records).is_err());
    }

    #[test]
    fn soa_is_single_rr_not_a_list() {
        let mut records = RecordMap::new();
        let mut types = HashMap::new();
        types.insert(
            "soa".to_string(),
            RecordValue::Soa {
                mname: "ns1.example.com".to_string(),
                rname: "hostmaster.example.com".to_string(),
                serial: 1,
                refresh: 3600,
                retry: 600,
                expire: 86400,
                minimum: 300,
            },
        );
        records.insert("example.com".to_string(), types);

        let dict = build(records).unwrap();
        assert_eq!(dict.lookup("example.com", RecordType::Soa).unwrap().len(), 1);
    }
}
