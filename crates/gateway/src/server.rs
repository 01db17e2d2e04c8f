//! The JSON-RPC front-end.

use std::net::SocketAddr;

use jsonrpsee::server::{ServerBuilder, ServerHandle};
use tracing::info;

use crate::eth::{EthApiServer, EthService};

/// Builds and launches the gateway's RPC server.
#[derive(Debug, Clone, Copy)]
pub struct GatewayRpc {
    socket: SocketAddr,
}

impl GatewayRpc {
    /// Creates a launcher bound to the given socket address.
    pub const fn new(socket: SocketAddr) -> Self {
        Self { socket }
    }

    /// The socket address the server will bind.
    pub const fn socket(&self) -> SocketAddr {
        self.socket
    }

    /// Binds the socket and starts serving the method set.
    pub async fn launch(self, service: EthService) -> std::io::Result<ServerHandle> {
        let server = ServerBuilder::default().build(self.socket).await?;
        info!(socket = %self.socket, "gateway rpc server listening");
        Ok(server.start(service.into_rpc()))
    }
}
