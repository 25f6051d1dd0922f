//! Server registry
//!
//! The only process-wide state in the crate: every server started via
//! [`crate::start_server`] registers itself here so `running_servers()`
//! and `stop_running_servers()` can reach across every mock server a test
//! process has spawned, without the caller needing to track handles.

use std::sync::{Mutex, OnceLock};
use std::sync::Arc;

use crate::server::MockDnsServer;

fn registry() -> &'static Mutex<Vec<Arc<MockDnsServer>>> {
    static REGISTRY: OnceLock<Mutex<Vec<Arc<MockDnsServer>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
}

/// Register a successfully started server.
pub fn register(server: Arc<MockDnsServer>) {
    registry().lock().unwrap().push(server);
}

/// Remove a server from the registry, if present.
pub fn unregister(server: &Arc<MockDnsServer>) {
    let mut servers = registry().lock().unwrap();
    servers.retain(|s| !Arc::ptr_eq(s, server));
}

/// A snapshot of every currently-registered server.
pub fn running_servers() -> Vec<Arc<MockDnsServer>> {
    registry().lock().unwrap().clone()
}

/// Stop every registered server and empty the registry. Always succeeds,
/// even when the registry is already empty.
pub async fn stop_running_servers() -> bool {
    let servers = {
        let mut servers = registry().lock().unwrap();
        std::mem::take(&mut *servers)
    };
    for server in servers {
        server.stop().await;
    }
    true
}
