//! Gateway entry point.

use std::{net::SocketAddr, sync::Arc};

use anyhow::bail;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fabevm_gateway::{ChannelClient, EthService, GatewayRpc, LedgerClient, QsccLedgerClient};

mod devledger;
mod flags;

use devledger::DevLedger;
use flags::GatewayArgs;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = GatewayArgs::parse();
    init_tracing();

    if !args.dev {
        bail!(
            "no ledger SDK transport is built into this binary; implement \
             fabevm_gateway::ChannelClient against your SDK and serve it through the \
             library API, or run with --dev for the embedded in-memory ledger"
        );
    }
    if let Some(config) = &args.config {
        info!(config = %config.display(), "dev mode ignores the SDK connection profile");
    }

    let dev = Arc::new(DevLedger::new(&args.ccid, &args.channel));
    let channel: Arc<dyn ChannelClient> = dev;
    let ledger: Arc<dyn LedgerClient> =
        Arc::new(QsccLedgerClient::new(channel.clone(), &args.channel));
    let service = EthService::new(channel, ledger, &args.ccid);

    let socket = SocketAddr::from(([0, 0, 0, 0], args.port));
    let handle = GatewayRpc::new(socket).launch(service).await?;
    info!(user = %args.user, port = args.port, "dev gateway up");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    let _ = handle.stop();
    handle.stopped().await;
    Ok(())
}
