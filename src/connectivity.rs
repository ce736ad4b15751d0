//! Local network reachability checks.
//!
//! The repository asks a [`ConnectivityProbe`] before every request and
//! fails fast when the host has no usable route.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::net::UdpSocket;

use crate::config::ConnectivityConfig;

#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Whether the host currently has an internet-capable network path.
    async fn is_available(&self) -> bool;
}

/// Checks for a route to a public address.
///
/// Connecting a UDP socket only consults the routing table; no packet
/// leaves the machine. It fails with "network unreachable" when there is
/// no default route.
#[derive(Debug, Clone)]
pub struct RouteProbe {
    target: SocketAddr,
}

impl RouteProbe {
    pub fn new(target: SocketAddr) -> Self {
        Self { target }
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

#[async_trait]
impl ConnectivityProbe for RouteProbe {
    async fn is_available(&self) -> bool {
        let bind_addr: SocketAddr = if self.target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };

        let socket = match UdpSocket::bind(bind_addr).await {
            Ok(socket) => socket,
            Err(e) => {
                tracing::warn!(error = %e, "connectivity probe could not bind");
                return false;
            }
        };

        match socket.connect(self.target).await {
            Ok(()) => true,
            Err(e) => {
                tracing::info!(addr = %self.target, error = %e, "no route to network");
                false
            }
        }
    }
}

/// Probe with a fixed answer. Used when the check is disabled and in tests.
#[derive(Debug)]
pub struct StaticProbe {
    online: AtomicBool,
}

impl StaticProbe {
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    pub fn online() -> Self {
        Self::new(true)
    }

    pub fn offline() -> Self {
        Self::new(false)
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConnectivityProbe for StaticProbe {
    async fn is_available(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

/// Builds the probe described by `config`.
pub fn probe_from_config(config: &ConnectivityConfig) -> Box<dyn ConnectivityProbe> {
    if !config.enabled {
        return Box::new(StaticProbe::online());
    }
    match config.probe_addr.parse::<SocketAddr>() {
        Ok(target) => Box::new(RouteProbe::new(target)),
        Err(e) => {
            // Validated at load time; only reachable with a hand-built config.
            tracing::warn!(
                addr = %config.probe_addr,
                error = %e,
                "invalid probe address, check disabled"
            );
            Box::new(StaticProbe::online())
        }
    }
}
