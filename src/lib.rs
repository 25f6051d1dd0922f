//! mockdns
//!
//! A mock DNS server for automated test suites: declare a dictionary of
//! pre-canned answers, start one or more servers on ephemeral or fixed
//! UDP ports, and issue real DNS queries against them. No recursion, no
//! upstream forwarding, no caching — tests want determinism, not a real
//! resolver.
//!
//! ```no_run
//! # async fn example() -> Result<(), mockdns::error::ServerError> {
//! use std::collections::HashMap;
//! use mockdns::records::RecordValue;
//!
//! let mut example_com = HashMap::new();
//! example_com.insert(
//!     "a".to_string(),
//!     RecordValue::List(vec![RecordValue::Text("1.2.3.4".to_string())]),
//! );
//! let mut records = HashMap::new();
//! records.insert("example.com".to_string(), example_com);
//!
//! let server = mockdns::start_server(records, 5300, false).await?;
//! assert_eq!(server.port(), 5300);
//! server.stop().await;
//! # Ok(())
//! # }
//! ```

pub mod dictionary;
pub mod error;
pub mod name;
pub mod records;
pub mod registry;
pub mod server;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

pub use dictionary::RecordMap;
pub use error::ServerError;
pub use server::MockDnsServer;

/// Default port used when the caller does not specify one.
pub const DEFAULT_PORT: u16 = 5300;

/// Build a dictionary from `records`, bind a UDP server, and register it
/// with the process-wide registry.
///
/// `port = 0` requests an OS-assigned ephemeral port. When
/// `exception_if_not_found` is set, a query with no dictionary match is
/// still answered with an empty NOERROR, and additionally has its
/// `(name, type)` published on [`MockDnsServer::take_not_found_errors`].
///
/// No server is registered if the dictionary fails to build.
pub async fn start_server(
    records: RecordMap,
    port: u16,
    exception_if_not_found: bool,
) -> Result<Arc<MockDnsServer>, ServerError> {
    let server = MockDnsServer::start(records, port, exception_if_not_found).await?;
    registry::register(server.clone());
    Ok(server)
}

/// Start a server with no pre-declared records, on [`DEFAULT_PORT`], in
/// non-strict mode.
pub async fn start_server_default() -> Result<Arc<MockDnsServer>, ServerError> {
    start_server(RecordMap::new(), DEFAULT_PORT, false).await
}

/// Snapshot of every currently-registered server.
pub fn running_servers() -> Vec<Arc<MockDnsServer>> {
    registry::running_servers()
}

/// Stop every registered server and empty the registry. Always returns
/// `true`, even when the registry was already empty.
pub async fn stop_running_servers() -> bool {
    registry::stop_running_servers().await
}
