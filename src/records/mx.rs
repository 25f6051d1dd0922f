//! MX record factory and priority auto-assignment
//!
//! A single MX entry may specify `"exchange"`, `"exchange:preference"`, or
//! the structured `{ preference, exchange }` shape. Preference assignment
//! for the whole owner happens in `assign_mx_preferences`, which the
//! dictionary builder calls once all of an owner's MX entries have been
//! parsed (invariant 3).

use crate::error::RecordError;
use crate::name::punycode;
use crate::records::{RecordData, RecordType, RecordValue};

/// One parsed-but-not-yet-prioritized MX entry.
pub struct ParsedMx {
    pub exchange: String,
    pub explicit_preference: Option<u16>,
}

/// Parse a single MX value into its exchange and optional explicit
/// preference, without assigning a default preference yet.
pub fn build(value: &RecordValue) -> Result<ParsedMx, RecordError> {
    match value {
        RecordValue::Mx { preference, exchange } => {
            let exchange = encode_exchange(exchange)?;
            Ok(ParsedMx { exchange, explicit_preference: *preference })
        }
        RecordValue::Text(s) => parse_string_form(s),
        RecordValue::Soa { .. } => Err(RecordError::context(RecordType::Mx, "<soa value>")),
        RecordValue::List(_) => Err(RecordError::context(RecordType::Mx, "<nested list value>")),
    }
}

fn parse_string_form(s: &str) -> Result<ParsedMx, RecordError> {
    match s.rsplit_once(':') {
        Some((exchange, pref)) => {
            let preference: u16 = pref
                .parse()
                .map_err(|e| RecordError::context_from(RecordType::Mx, s, e))?;
            Ok(ParsedMx {
                exchange: encode_exchange(exchange)?,
                explicit_preference: Some(preference),
            })
        }
        None => Ok(ParsedMx {
            exchange: encode_exchange(s)?,
            explicit_preference: None,
        }),
    }
}

/// The null-MX exchange (`.`) encodes to the root label, not a punycode
/// form of an empty string.
fn encode_exchange(exchange: &str) -> Result<String, RecordError> {
    if exchange == "." {
        return Ok(String::new());
    }
    punycode::to_ascii(exchange).map_err(|e| RecordError::context_from(RecordType::Mx, exchange, e))
}

/// Assign preferences to a list of MX entries for one owner, per
/// invariant 3: entries with an explicit preference use it verbatim;
/// entries without one get `10 * (original index + 1)`. The step is based
/// on each entry's original position, not a running counter — an explicit
/// value at one position does not change the step any other position
/// receives (§9 Design Notes, resolved Open Question).
pub fn assign_mx_preferences(entries: Vec<ParsedMx>) -> Vec<RecordData> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let preference = entry
                .explicit_preference
                .unwrap_or_else(|| 10 * (index as u16 + 1));
            RecordData::Mx { preference, exchange: entry.exchange }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ParsedMx {
        build(&RecordValue::Text(s.to_string())).unwrap()
    }

    #[test]
    fn bare_exchange_has_no_explicit_preference() {
        let mx = parse("mail.example.com");
        assert_eq!(mx.exchange, "mail.example.com");
        assert!(mx.explicit_preference.is_none());
    }

    #[test]
    fn exchange_with_preference_suffix() {
        let mx = parse("mail.example.com:20");
        assert_eq!(mx.exchange, "mail.example.com");
        assert_eq!(mx.explicit_preference, Some(20));
    }

    #[test]
    fn null_mx_exchange_is_root_label() {
        let mx = parse(".:0");
        assert_eq!(mx.exchange, "");
        assert_eq!(mx.explicit_preference, Some(0));
    }

    #[test]
    fn changelog_scenario_mixed_explicit_and_implicit() {
        let entries = vec![
            parse(".:0"),
            parse("mx1.domain.com:10"),
            parse("mx2.domain.com:10"),
            parse("mx3.domain.com"),
        ];
        let assigned = assign_mx_preferences(entries);
        let prefs: Vec<u16> = assigned
            .iter()
            .map(|r| match r {
                RecordData::Mx { preference, .. } => *preference,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(prefs, vec![0, 10, 10, 40]);
    }

    #[test]
    fn all_implicit_entries_step_by_ten() {
        let entries = vec![parse("a.com"), parse("b.com"), parse("c.com")];
        let assigned = assign_mx_preferences(entries);
        let prefs: Vec<u16> = assigned
            .iter()
            .map(|r| match r {
                RecordData::Mx { preference, .. } => *preference,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(prefs, vec![10, 20, 30]);
    }
}
