//! Error types for the executor, one per failure domain.

use alloy_primitives::hex;
use revm::database_interface::DBErrorMarker;
use thiserror::Error;

/// An opaque failure reported by the host ledger runtime.
///
/// The host is an external collaborator; its errors propagate through the
/// executor unchanged.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct LedgerError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl LedgerError {
    /// Wraps a plain message as a ledger failure.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

/// Failures while deriving an account address from a creator identity.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The serialized identity envelope failed to unmarshal.
    #[error("failed to unmarshal creator identity: {0}")]
    Identity(#[from] prost::DecodeError),
    /// The identity carried no PEM block.
    #[error("no pem data found")]
    NoPemData,
    /// The PEM block did not parse as an X.509 certificate.
    #[error("failed to parse certificate: {0}")]
    CertParse(String),
    /// The certificate's subject public key could not be recovered in DER form.
    #[error("unable to marshal public key")]
    PubKeyMarshal,
}

/// Failures in the ledger-backed state view.
#[derive(Debug, Error)]
pub enum StateError {
    /// The underlying ledger read or write failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// A stored account record failed to decode.
    #[error("failed to decode account record: {0}")]
    AccountDecode(#[source] serde_json::Error),
    /// An account record failed to encode.
    #[error("failed to encode account record: {0}")]
    AccountEncode(#[source] serde_json::Error),
    /// A stored storage value does not fit in a 32-byte word.
    #[error("storage value under {key} is {len} bytes, larger than the 32-byte word")]
    OversizedStorage {
        /// The composite storage key that was read.
        key: String,
        /// Length of the stored value.
        len: usize,
    },
    /// Block hashes are unreachable inside a ledger transaction.
    #[error("block hash lookup is not available inside a ledger transaction")]
    BlockHashUnreachable,
    /// Bytecode is always supplied inline with the account, never by hash.
    #[error("bytecode lookup by hash is not available")]
    CodeByHashUnreachable,
}

impl DBErrorMarker for StateError {}

/// Failures in the per-invocation event buffer.
#[derive(Debug, Error)]
pub enum EventError {
    /// The `EventID` tag was missing or not a string.
    #[error("type mismatch: expected string event id, received {0}")]
    TagTypeMismatch(String),
    /// The published message was not a log event.
    #[error("type mismatch: expected a log event, received {0}")]
    MessageTypeMismatch(#[source] serde_json::Error),
    /// The buffered events failed to serialize.
    #[error("failed to marshal event messages: {0}")]
    Encode(#[source] serde_json::Error),
    /// Attaching the event to the transaction failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Failures reported by the VM or while applying its results.
#[derive(Debug, Error)]
pub enum VmError {
    /// Execution reverted; the output carries the revert data.
    #[error("execution reverted: {output}")]
    Reverted {
        /// The revert data returned by the VM.
        output: alloy_primitives::Bytes,
    },
    /// Execution halted before completing.
    #[error("execution halted: {reason}")]
    Halted {
        /// The VM's halt reason.
        reason: String,
    },
    /// The state view failed underneath the VM.
    #[error(transparent)]
    State(#[from] StateError),
    /// The VM rejected the invocation before executing it.
    #[error("vm failure: {0}")]
    Evm(String),
    /// An emitted log could not be handed to the event buffer.
    #[error("failed to publish log event: {0}")]
    Event(#[from] EventError),
    /// A deploy completed without reporting the created address.
    #[error("deploy returned no contract address")]
    MissingCreateAddress,
}

/// Failures surfaced by the invocation dispatcher.
///
/// Every variant aborts the ledger transaction with a descriptive message;
/// atomicity of any partial effects is the ledger's own guarantee.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The argument vector had the wrong shape.
    #[error("expects 2 args, got {count}: {first}")]
    ArgCount {
        /// Number of arguments received.
        count: usize,
        /// The first argument, for the error message.
        first: String,
    },
    /// The callee address was not valid hex.
    #[error("failed to decode callee address from {value}: {source}")]
    CalleeDecode {
        /// The raw callee argument.
        value: String,
        /// The underlying hex error.
        source: hex::FromHexError,
    },
    /// The callee address had the wrong length.
    #[error("failed to get callee address: expected 20 bytes, got {0}")]
    CalleeLength(usize),
    /// The input bytes were not valid hex.
    #[error("failed to decode input bytes: {0}")]
    InputDecode(#[source] hex::FromHexError),
    /// The caller address could not be derived from the creator identity.
    #[error("failed to get caller address: {0}")]
    Address(#[from] AddressError),
    /// A call targeted an address with no account.
    #[error("failed to retrieve contract code: no account at {0}")]
    NoContract(String),
    /// The state view failed.
    #[error(transparent)]
    State(#[from] StateError),
    /// The VM failed.
    #[error("failed to execute contract: {0}")]
    Vm(#[from] VmError),
    /// Flushing the event buffer failed.
    #[error("error in flush: {0}")]
    Event(#[from] EventError),
    /// The host ledger failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
