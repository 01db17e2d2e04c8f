//! Gateway error type and its JSON-RPC mapping.

use jsonrpsee::types::{error::INTERNAL_ERROR_CODE, ErrorObject, ErrorObjectOwned};
use thiserror::Error;

use crate::client::ClientError;

/// Failures surfaced by the gateway.
///
/// Messages wrap the underlying failure without discarding it; clients see
/// the full chain as one string, the way the RPC dialect expects.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A ledger query failed.
    #[error("Failed to query the ledger: {0}")]
    Query(#[source] ClientError),
    /// A ledger execution failed.
    #[error("Failed to execute transaction: {0}")]
    Execute(#[source] ClientError),
    /// A transaction envelope failed to unmarshal.
    #[error("Failed to unmarshal transaction: {0}")]
    Decode(#[from] fabevm_ledger::DecodeError),
    /// The chaincode event attached to a transaction failed to unmarshal.
    #[error("Failed to decode chaincode event: {0}")]
    EventDecode(#[source] fabevm_ledger::DecodeError),
    /// The event payload was not a valid event record.
    #[error("Failed to unmarshal chaincode event payload: {0}")]
    EventPayload(#[source] serde_json::Error),
    /// The callee recovered from a transaction was not valid hex.
    #[error("Failed to decode to address: {0}")]
    CalleeHex(#[source] alloy_primitives::hex::FromHexError),
    /// A block arrived without its header.
    #[error("block is missing its header")]
    MissingBlockHeader,
    /// A committed transaction arrived without its envelope.
    #[error("transaction is missing its envelope")]
    MissingEnvelope,
    /// A transaction lookup was given an empty id.
    #[error("txID was empty")]
    EmptyTransactionId,
    /// The default-block parameter was neither a named block nor hex.
    #[error("not a named block or a hex block number: {0:?}")]
    BadDefaultBlock(String),
    /// Pending blocks do not exist on this ledger.
    #[error("Unimplemented: the ledger has no concept of in-progress blocks being visible")]
    PendingUnsupported,
}

impl From<GatewayError> for ErrorObjectOwned {
    fn from(err: GatewayError) -> Self {
        ErrorObject::owned(INTERNAL_ERROR_CODE, err.to_string(), None::<()>)
    }
}
