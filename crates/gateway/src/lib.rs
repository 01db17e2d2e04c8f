//! The Ethereum JSON-RPC translation gateway.
//!
//! Clients written against the Ethereum RPC dialect talk to this service;
//! their requests are translated into ledger queries and executions, and the
//! ledger's envelope-shaped responses are reshaped back into the
//! transactions, receipts, blocks, and logs those clients expect, including
//! fabricated block hashes, positional transaction indices, and log bloom
//! filters the ledger itself has no notion of.
//!
//! The ledger SDK is an external collaborator reached through the traits in
//! [`client`]; everything else in this crate is request-scoped and stateless.

pub mod bloom;
pub use bloom::logs_bloom;

pub mod client;
pub use client::{ChannelClient, ChannelRequest, ChannelResponse, ClientError, LedgerClient};

pub mod default_block;
pub use default_block::DefaultBlock;

mod error;
pub use error::GatewayError;

pub mod eth;
pub use eth::{EthApiServer, EthService};

mod receipt;

pub mod qscc;
pub use qscc::QsccLedgerClient;

mod server;
pub use server::GatewayRpc;

mod types;
pub use types::{BlockTransaction, EthArgs, RpcBlock, RpcLog, RpcTransaction, TxReceipt};
