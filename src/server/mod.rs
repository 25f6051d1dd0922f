//! DNS server: per-query handling and the UDP listener.

pub mod handler;
pub mod udp;

pub use udp::MockDnsServer;
