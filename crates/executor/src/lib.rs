//! The ledger-embedded EVM contract executor.
//!
//! This crate runs inside a ledger peer's transaction-execution sandbox. Each
//! invocation arrives as an opaque argument vector, is dispatched as an
//! account lookup, a bytecode query, a contract deploy, or a contract call,
//! and drives the EVM against a key/value view of the ledger. Account and
//! storage mutations are written back through the host, and any log events
//! the VM emits are buffered and attached to the transaction as a single
//! serialized event record.
//!
//! The host runtime is reached exclusively through the [`LedgerStub`] trait;
//! the VM is consumed as a black box behind the adapter in [`vm`].

pub mod account;
pub use account::{Account, Permissions};

pub mod address;
pub use address::identity_to_address;

pub mod dispatch;
pub use dispatch::EvmChaincode;

pub mod errors;
pub use errors::{
    AddressError, DispatchError, EventError, LedgerError, StateError, VmError,
};

pub mod events;
pub use events::EventManager;

pub mod state;
pub use state::StateManager;

pub mod stub;
pub use stub::LedgerStub;

mod db;
mod vm;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
