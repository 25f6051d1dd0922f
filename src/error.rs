//! Error types for the mock DNS server
//!
//! Each component gets a narrow error type; `DictionaryError` aggregates
//! them at the dictionary-build boundary the way the original `AppError`
//! aggregated component errors at the application boundary.

use thiserror::Error;

use crate::records::RecordType;

/// Errors raised by the punycode representer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PunycodeError {
    #[error("invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("label too long after encoding: {0}")]
    LabelTooLong(String),
}

/// Errors raised by the reverse-DNS representer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseNameError {
    #[error("invalid IP address: {0}")]
    InvalidIpAddress(String),
}

/// Errors raised by a record factory.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("cannot interpret as DNS name: {value}. Invalid {record_type} record context")]
    InvalidRecordContext {
        record_type: RecordType,
        value: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    #[error("unknown record type tag: {0}")]
    UnknownRecordType(String),
}

impl RecordError {
    /// Wrap a lower-level parse failure with record-type context, per the
    /// surfaced-error format required of every factory, preserving the
    /// original failure as the error's `source`.
    pub fn context_from(
        record_type: RecordType,
        value: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RecordError::InvalidRecordContext {
            record_type,
            value: value.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap a context failure with no underlying error to preserve (the
    /// value itself was the problem, e.g. a non-scalar dictionary entry).
    pub fn context(record_type: RecordType, value: impl Into<String>) -> Self {
        RecordError::InvalidRecordContext {
            record_type,
            value: value.into(),
            source: None,
        }
    }
}

/// Errors raised while building a dictionary from user-supplied records.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error(transparent)]
    Punycode(#[from] PunycodeError),

    #[error(transparent)]
    ReverseName(#[from] ReverseNameError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors raised by server lifecycle operations.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind UDP socket to {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// `(name, type)` of a query that had no dictionary match, delivered on the
/// not-found channel only when strict mode is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordNotFound {
    pub name: String,
    pub record_type: crate::records::RecordType,
}

impl std::fmt::Display for RecordNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no mock record for {} {}", self.name, self.record_type)
    }
}

impl std::error::Error for RecordNotFound {}
