use std::future::Future;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use tracing::{info, warn};

use crate::connector::web::WebServer;

use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Runs the web form until Ctrl-C.
    pub async fn serve(&self, host: Option<IpAddr>, port: u16, public: bool) -> Result<String> {
        let addr = SocketAddr::new(bind_ip(host, public), port);

        info!("Serving web form with model {}", self.container.model());
        println!("Starting Solar Industry AI Assistant on http://{addr}");

        WebServer::new(self.container.ask_use_case())
            .run(addr, wait_for_shutdown(tokio::signal::ctrl_c()))
            .await?;

        Ok("Server stopped.".to_string())
    }
}

/// Resolves once `signal` fires. A signal that cannot be installed ends the
/// server too, so say why.
async fn wait_for_shutdown(signal: impl Future<Output = io::Result<()>>) {
    if let Err(e) = signal.await {
        warn!("Failed to listen for Ctrl-C, shutting down: {e}");
    }
}

/// An explicit `--host` wins; `--public` is shorthand for 0.0.0.0.
fn bind_ip(host: Option<IpAddr>, public: bool) -> IpAddr {
    match host {
        Some(ip) => ip,
        None if public => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        None => IpAddr::V4(Ipv4Addr::LOCALHOST),
    }
}
