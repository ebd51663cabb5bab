//! Webserver state management

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use producer::{ChatProvider, ContentWorkflow};

/// State shared by every request handler
pub struct WebServerState<P: ChatProvider> {
    pub bind_address: SocketAddr,
    pub workflow: ContentWorkflow<P>,
    pub server_start_time: Instant,
    requests_served: AtomicU64,
}

impl<P: ChatProvider> WebServerState<P> {
    pub fn new(bind_address: SocketAddr, workflow: ContentWorkflow<P>) -> Self {
        Self {
            bind_address,
            workflow,
            server_start_time: Instant::now(),
            requests_served: AtomicU64::new(0),
        }
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count one handled generation request, returning the new total
    pub fn record_request(&self) -> u64 {
        self.requests_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests_served(&self) -> u64 {
        self.requests_served.load(Ordering::Relaxed)
    }
}
