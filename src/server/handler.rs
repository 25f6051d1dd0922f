//! Query handler
//!
//! Parses one inbound DNS datagram, looks up matching answers in the
//! dictionary, and assembles the response message. Performs no I/O of its
//! own — the caller owns the socket.

use std::str::FromStr;

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::RecordNotFound;
use crate::name;
use crate::records::{RecordData, RecordType, TTL};

/// Outcome of handling one datagram.
pub struct HandledQuery {
    /// Bytes to write back to the client, if the datagram parsed at all.
    /// `None` means the datagram was malformed and must be dropped
    /// silently (§7: a malformed query must not crash the server, and
    /// gets no response).
    pub response_bytes: Option<Vec<u8>>,
    /// Set when strict mode is enabled and the query had no dictionary
    /// match; the wire response has already been assembled as an empty
    /// NOERROR regardless.
    pub not_found: Option<RecordNotFound>,
}

/// Handle one inbound datagram against `dictionary`.
pub fn handle(datagram: &[u8], dictionary: &Dictionary, strict: bool) -> HandledQuery {
    let message = match Message::from_bytes(datagram) {
        Ok(m) => m,
        Err(e) => {
            debug!("dropping malformed DNS datagram: {}", e);
            return HandledQuery { response_bytes: None, not_found: None };
        }
    };

    let Some(question) = message.queries().first() else {
        debug!("dropping DNS datagram with no question section");
        return HandledQuery { response_bytes: None, not_found: None };
    };

    let qname = name::normalize_query_name(&question.name().to_string());
    let qtype = RecordType::from_hickory(question.query_type());
    let qclass_is_in = question.query_class() == DNSClass::IN;

    let (answers, not_found) = match (qtype, qclass_is_in) {
        (Some(rt), true) => match dictionary.lookup(&qname, rt) {
            Some(records) => (records.to_vec(), None),
            None => {
                let not_found = strict.then(|| RecordNotFound { name: qname.clone(), record_type: rt });
                (Vec::new(), not_found)
            }
        },
        // Non-IN class, or a query type this server does not model:
        // always an empty match, never a strict-mode signal.
        _ => (Vec::new(), None),
    };

    let response_bytes = assemble_response(&message, question, &answers);

    HandledQuery { response_bytes: Some(response_bytes), not_found }
}

fn assemble_response(request: &Message, question: &Query, answers: &[RecordData]) -> Vec<u8> {
    let mut response = Message::new();
    response.set_id(request.id());
    response.set_message_type(MessageType::Response);
    response.set_op_code(request.op_code());
    response.set_authoritative(false);
    response.set_truncated(false);
    response.set_recursion_desired(request.recursion_desired());
    response.set_recursion_available(false);
    response.set_response_code(ResponseCode::NoError);
    response.add_query(question.clone());

    for data in answers {
        if let Some(record) = to_hickory_record(question.name(), data) {
            response.add_answer(record);
        }
    }

    // Malformed internal state (a record that somehow fails to encode)
    // must not crash the server; fall back to an empty NOERROR body.
    response
        .to_bytes()
        .unwrap_or_else(|_| servfail_fallback(request.id()))
}

fn servfail_fallback(id: u16) -> Vec<u8> {
    let mut response = Message::new();
    response.set_id(id);
    response.set_message_type(MessageType::Response);
    response.set_op_code(OpCode::Query);
    response.set_response_code(ResponseCode::ServFail);
    response.to_bytes().unwrap_or_default()
}

/// Convert one stored [`RecordData`] into a hickory-proto [`Record`]
/// answering `owner` (the question's QNAME).
fn to_hickory_record(owner: &Name, data: &RecordData) -> Option<Record> {
    let rdata = match data {
        RecordData::A(ip) => RData::A((*ip).into()),
        RecordData::Aaaa(ip) => RData::AAAA((*ip).into()),
        RecordData::Cname(target) => RData::CNAME(hickory_proto::rr::rdata::CNAME(parse_name(target)?)),
        RecordData::Mx { preference, exchange } => {
            RData::MX(hickory_proto::rr::rdata::MX::new(*preference, parse_name(exchange)?))
        }
        RecordData::Ns(target) => RData::NS(hickory_proto::rr::rdata::NS(parse_name(target)?)),
        RecordData::Ptr(target) => RData::PTR(hickory_proto::rr::rdata::PTR(parse_name(target)?)),
        RecordData::Soa { mname, rname, serial, refresh, retry, expire, minimum } => {
            RData::SOA(hickory_proto::rr::rdata::SOA::new(
                parse_name(mname)?,
                parse_name(rname)?,
                *serial,
                *refresh as i32,
                *retry as i32,
                *expire as i32,
                *minimum,
            ))
        }
        RecordData::Txt(text) => RData::TXT(hickory_proto::rr::rdata::TXT::new(vec![text.clone()])),
    };

    Some(Record::from_rdata(owner.clone(), TTL, rdata))
}

/// Parse a stored, already-normalized domain name. An empty string is the
/// null-MX exchange and maps to the DNS root.
fn parse_name(s: &str) -> Option<Name> {
    if s.is_empty() {
        Some(Name::root())
    } else {
        Name::from_str(s).ok()
    }
}
