//! CLI flags for the gateway.

use std::path::PathBuf;

use clap::Parser;

/// Ethereum JSON-RPC gateway over a permissioned ledger.
#[derive(Parser, Debug, Clone)]
#[command(name = "fabevm-gateway", version, about)]
pub struct GatewayArgs {
    /// Path to the ledger SDK connection profile.
    #[arg(long, env = "FABEVM_CONFIG", help = "Path to the SDK connection profile")]
    pub config: Option<PathBuf>,

    /// The identity the gateway submits transactions as.
    #[arg(long, env = "FABEVM_USER", default_value = "User1")]
    pub user: String,

    /// Port the RPC server listens on.
    #[arg(long, short = 'p', env = "FABEVM_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Name of the EVM chaincode to target.
    #[arg(long, env = "FABEVM_CCID", default_value = "evmcc")]
    pub ccid: String,

    /// Channel the chaincode is committed on.
    #[arg(long, env = "FABEVM_CHANNEL", default_value = "mychannel")]
    pub channel: String,

    /// Serve the embedded in-memory dev ledger instead of an SDK transport.
    #[arg(long)]
    pub dev: bool,
}
