//! The seam to the host chaincode runtime.

use crate::errors::LedgerError;

/// The slice of the host transaction context the executor depends on.
///
/// An implementation is supplied per invocation by the host runtime (or by an
/// in-memory harness). Methods take `&self`; implementations provide their
/// own interior mutability, which lets the state view and the event buffer
/// borrow the same stub for the duration of an invocation.
pub trait LedgerStub {
    /// The raw invocation argument vector.
    fn args(&self) -> Vec<Vec<u8>>;

    /// The ledger transaction id of the current invocation.
    fn tx_id(&self) -> String;

    /// The serialized identity of the transaction's creator.
    fn creator(&self) -> Result<Vec<u8>, LedgerError>;

    /// Reads a value from the ledger. Empty means absent.
    fn get_state(&self, key: &str) -> Result<Vec<u8>, LedgerError>;

    /// Writes a value to the ledger.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Deletes a key from the ledger.
    fn del_state(&self, key: &str) -> Result<(), LedgerError>;

    /// Attaches the transaction's single event. The name must be valid UTF-8
    /// when it reaches the host's event marshalling.
    fn set_event(&self, name: &str, payload: &[u8]) -> Result<(), LedgerError>;
}
