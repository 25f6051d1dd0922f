//! UDP mock DNS server
//!
//! Binds a datagram socket, accepts queries on a background task, and
//! answers each one against the current dictionary. Lifecycle mirrors the
//! teacher's `UdpDnsServer`: `Arc<Self>::run` spawned once, `stop()`
//! aborts the accept task, which drops the socket and unblocks any
//! in-flight `recv_from`.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock, RwLock, Weak};

use tokio::net::UdpSocket;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::dictionary::{self, Dictionary, RecordMap};
use crate::error::{RecordNotFound, ServerError};
use crate::registry;
use crate::server::handler;

/// A running mock DNS server instance.
pub struct MockDnsServer {
    socket: Arc<UdpSocket>,
    bind_addr: SocketAddr,
    dictionary: RwLock<Arc<Dictionary>>,
    strict: bool,
    not_found_tx: mpsc::UnboundedSender<RecordNotFound>,
    not_found_rx: Mutex<mpsc::UnboundedReceiver<RecordNotFound>>,
    accept_task: Mutex<Option<JoinHandle<()>>>,
    /// Set once, right after construction, so `stop()` can unregister this
    /// server from the process-wide registry without needing `self:
    /// Arc<Self>` on a spec-mandated `&self` method.
    self_ref: OnceLock<Weak<Self>>,
}

impl MockDnsServer {
    /// Bind a new server and build its initial dictionary. `port = 0`
    /// requests an OS-assigned ephemeral port; the bound port is read
    /// back from the kernel rather than probed in user space.
    pub async fn start(
        records: RecordMap,
        port: u16,
        exception_if_not_found: bool,
    ) -> Result<Arc<Self>, ServerError> {
        let dictionary = dictionary::build(records)?;

        let addr: SocketAddr = ([0, 0, 0, 0], port).into();
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| ServerError::Bind { addr, source: e })?;
        let bind_addr = socket
            .local_addr()
            .map_err(|e| ServerError::Bind { addr, source: e })?;

        info!("mock DNS server bound to {}", bind_addr);

        let (not_found_tx, not_found_rx) = mpsc::unbounded_channel();

        let server = Arc::new(Self {
            socket: Arc::new(socket),
            bind_addr,
            dictionary: RwLock::new(Arc::new(dictionary)),
            strict: exception_if_not_found,
            not_found_tx,
            not_found_rx: Mutex::new(not_found_rx),
            accept_task: Mutex::new(None),
            self_ref: OnceLock::new(),
        });
        let _ = server.self_ref.set(Arc::downgrade(&server));

        let accept_handle = {
            let server = server.clone();
            tokio::spawn(async move { server.accept_loop().await })
        };
        *server.accept_task.lock().await = Some(accept_handle);

        Ok(server)
    }

    /// The port this server is bound to.
    pub fn port(&self) -> u16 {
        self.bind_addr.port()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Rebuild the dictionary from `records` and atomically swap it into
    /// place. In-flight queries observe either the whole old dictionary
    /// or the whole new one, never a mix.
    pub fn assign_mocks(&self, records: RecordMap) -> Result<(), ServerError> {
        let dictionary = dictionary::build(records)?;
        *self.dictionary.write().unwrap() = Arc::new(dictionary);
        Ok(())
    }

    /// Drain any `RecordNotFound` signals accumulated since the last
    /// call. Only meaningful when the server was started in strict mode.
    pub async fn take_not_found_errors(&self) -> Vec<RecordNotFound> {
        let mut rx = self.not_found_rx.lock().await;
        let mut out = Vec::new();
        while let Ok(err) = rx.try_recv() {
            out.push(err);
        }
        out
    }

    /// Stop the server: abort the accept task, await its exit, and remove
    /// it from the process-wide registry (spec §4.7's `unregister(server)`
    /// on stop), whether `stop()` was reached directly or via
    /// `stop_running_servers()`. This is the mock-server analogue of
    /// closing the socket to unblock the accept loop's `recv_from`.
    pub async fn stop(&self) {
        let handle = self.accept_task.lock().await.take();
        if let Some(handle) = handle {
            handle.abort();
            let _ = handle.await;
            info!("mock DNS server on {} stopped", self.bind_addr);
        }

        if let Some(server) = self.self_ref.get().and_then(Weak::upgrade) {
            registry::unregister(&server);
        }
    }

    async fn accept_loop(self: Arc<Self>) {
        let mut buf = vec![0u8; 4096];
        loop {
            match self.socket.recv_from(&mut buf).await {
                Ok((len, src)) => {
                    debug!("received {} bytes from {}", len, src);
                    let datagram = buf[..len].to_vec();
                    let server = self.clone();
                    tokio::spawn(async move {
                        server.handle_and_respond(&datagram, src).await;
                    });
                }
                Err(e) => {
                    error!("error receiving UDP datagram: {}", e);
                }
            }
        }
    }

    async fn handle_and_respond(&self, datagram: &[u8], src: SocketAddr) {
        let dictionary = self.dictionary.read().unwrap().clone();
        let handled = handler::handle(datagram, &dictionary, self.strict);

        if let Some(response_bytes) = handled.response_bytes {
            if let Err(e) = self.socket.send_to(&response_bytes, src).await {
                warn!("failed to send response to {}: {}", src, e);
            }
        }

        if let Some(not_found) = handled.not_found {
            let _ = self.not_found_tx.send(not_found);
        }
    }
}
