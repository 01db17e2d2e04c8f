//! The seam to the external ledger SDK.

use async_trait::async_trait;
use fabevm_ledger::proto::{Block, BlockchainInfo, ProcessedTransaction};
use thiserror::Error;

/// An opaque failure reported by the SDK transport.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ClientError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl ClientError {
    /// Wraps a plain message as a client failure.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

/// One chaincode request: target, function, and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRequest {
    /// Name of the chaincode to invoke.
    pub chaincode_id: String,
    /// The invoked function; the chaincode sees it as its first argument.
    pub fcn: String,
    /// The remaining arguments.
    pub args: Vec<Vec<u8>>,
}

/// The chaincode's response payload and, for executions, the transaction id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelResponse {
    /// The chaincode's return payload.
    pub payload: Vec<u8>,
    /// The ledger transaction id; empty for plain queries.
    pub transaction_id: String,
}

/// Submits chaincode queries and executions on a channel.
///
/// Implementations are shared across requests and must be thread-safe. A
/// query simulates without committing; an execution is submitted for
/// ordering and, once this call returns, cannot be withdrawn.
#[async_trait]
pub trait ChannelClient: Send + Sync {
    /// Simulates a chaincode invocation and returns its payload.
    async fn query(&self, request: ChannelRequest) -> Result<ChannelResponse, ClientError>;

    /// Submits a chaincode invocation for commit.
    async fn execute(&self, request: ChannelRequest) -> Result<ChannelResponse, ClientError>;
}

/// Reads committed chain data: info, blocks, and transactions.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// The chain's current height and hashes.
    async fn query_info(&self) -> Result<BlockchainInfo, ClientError>;

    /// A block by number.
    async fn query_block(&self, number: u64) -> Result<Block, ClientError>;

    /// The block containing the given transaction.
    async fn query_block_by_txid(&self, tx_id: &str) -> Result<Block, ClientError>;

    /// A committed transaction by id.
    async fn query_transaction(&self, tx_id: &str)
        -> Result<ProcessedTransaction, ClientError>;
}
