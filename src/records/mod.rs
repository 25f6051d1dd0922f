//! Resource record types and factories
//!
//! One factory function per supported record type, dispatched from an
//! exhaustively-matched tagged enum rather than the stringly-typed
//! dispatch the original dictionary builder used (per REDESIGN FLAGS).

mod a;
mod aaaa;
mod cname;
mod mx;
mod ns;
mod ptr;
mod soa;
mod txt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Fixed TTL used for every record this server emits: tests want
/// freshness, not caching.
pub const TTL: u32 = 1;

/// Supported DNS record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Txt,
}

impl RecordType {
    pub fn to_hickory(self) -> hickory_proto::rr::RecordType {
        use hickory_proto::rr::RecordType as H;
        match self {
            RecordType::A => H::A,
            RecordType::Aaaa => H::AAAA,
            RecordType::Cname => H::CNAME,
            RecordType::Mx => H::MX,
            RecordType::Ns => H::NS,
            RecordType::Ptr => H::PTR,
            RecordType::Soa => H::SOA,
            RecordType::Txt => H::TXT,
        }
    }

    pub fn from_hickory(rt: hickory_proto::rr::RecordType) -> Option<Self> {
        use hickory_proto::rr::RecordType as H;
        match rt {
            H::A => Some(RecordType::A),
            H::AAAA => Some(RecordType::Aaaa),
            H::CNAME => Some(RecordType::Cname),
            H::MX => Some(RecordType::Mx),
            H::NS => Some(RecordType::Ns),
            H::PTR => Some(RecordType::Ptr),
            H::SOA => Some(RecordType::Soa),
            H::TXT => Some(RecordType::Txt),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
            RecordType::Soa => "SOA",
            RecordType::Txt => "TXT",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RecordType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(RecordType::A),
            "aaaa" => Ok(RecordType::Aaaa),
            "cname" => Ok(RecordType::Cname),
            "mx" => Ok(RecordType::Mx),
            "ns" => Ok(RecordType::Ns),
            "ptr" => Ok(RecordType::Ptr),
            "soa" => Ok(RecordType::Soa),
            "txt" => Ok(RecordType::Txt),
            other => Err(RecordError::UnknownRecordType(other.to_string())),
        }
    }
}

/// The loose, human-friendly shape a dictionary value can take before it
/// is run through a factory. Mirrors the input schema in spec.md §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// A plain string: an address literal, hostname, TXT payload, or the
    /// `"exchange"` / `"exchange:preference"` MX shorthand.
    Text(String),
    /// Structured `(preference, exchange)` pair for MX.
    Mx { preference: Option<u16>, exchange: String },
    /// Structured SOA value; all seven fields required.
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    /// An ordered list of values, for types that accept repeated entries.
    List(Vec<RecordValue>),
}

/// A fully-typed resource record, as stored in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub owner: String,
    pub data: RecordData,
}

/// The per-type payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(std::net::Ipv4Addr),
    Aaaa(std::net::Ipv6Addr),
    Cname(String),
    Mx { preference: u16, exchange: String },
    Ns(String),
    Ptr(String),
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    Txt(String),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::Aaaa,
            RecordData::Cname(_) => RecordType::Cname,
            RecordData::Mx { .. } => RecordType::Mx,
            RecordData::Ns(_) => RecordType::Ns,
            RecordData::Ptr(_) => RecordType::Ptr,
            RecordData::Soa { .. } => RecordType::Soa,
            RecordData::Txt(_) => RecordType::Txt,
        }
    }
}

pub use a::build as build_a;
pub use aaaa::build as build_aaaa;
pub use cname::build as build_cname;
pub use mx::{assign_mx_preferences, build as build_mx};
pub use ns::build as build_ns;
pub use ptr::build as build_ptr;
pub use soa::build as build_soa;
pub use txt::build as build_txt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_from_str_is_case_insensitive() {
        assert_eq!(RecordType::from_str("A").unwrap(), RecordType::A);
        assert_eq!(RecordType::from_str("aaaa").unwrap(), RecordType::Aaaa);
        assert_eq!(RecordType::from_str("Mx").unwrap(), RecordType::Mx);
    }

    #[test]
    fn record_type_display_matches_wire_convention() {
        assert_eq!(RecordType::A.to_string(), "A");
        assert_eq!(RecordType::Soa.to_string(), "SOA");
    }

    #[test]
    fn record_type_invalid_tag_errors() {
        assert!(RecordType::from_str("bogus").is_err());
    }
}
