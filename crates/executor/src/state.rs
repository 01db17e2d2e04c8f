//! The ledger-backed state view the VM executes against.

use std::collections::HashMap;

use alloy_primitives::{hex, Address, B256};

use crate::{
    account::Account,
    errors::StateError,
    stub::LedgerStub,
};

/// Ledger key of an account record: lowercase hex of the address.
pub(crate) fn account_key(address: Address) -> String {
    format!("{address:x}")
}

/// Ledger key of a storage cell: account key followed by the word key's hex.
pub(crate) fn storage_key(address: Address, key: B256) -> String {
    format!("{address:x}{}", hex::encode(key))
}

/// Maps VM account and storage access onto ledger key/value operations.
///
/// Storage is keyed and valued in 32-byte words; the zero word is identical
/// to an absent cell, and writing it deletes the underlying key. A
/// per-invocation cache fronts storage reads and is written through on
/// stores. The cache is sound because the VM is single-threaded within an
/// invocation and the manager never outlives one.
#[derive(Debug)]
pub struct StateManager<'a, S: LedgerStub> {
    stub: &'a S,
    cache: HashMap<String, B256>,
}

impl<'a, S: LedgerStub> StateManager<'a, S> {
    /// Creates a state view over the given host stub.
    pub fn new(stub: &'a S) -> Self {
        Self { stub, cache: HashMap::new() }
    }

    /// Reads an account record. Absent accounts are `None`, not an error.
    pub fn get_account(&self, address: Address) -> Result<Option<Account>, StateError> {
        let bytes = self.stub.get_state(&account_key(address))?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Account::decode(&bytes).map(Some)
    }

    /// Writes an account record under the hex of its address.
    pub fn update_account(&self, account: &Account) -> Result<(), StateError> {
        let encoded = account.encode()?;
        self.stub.put_state(&account_key(account.address), &encoded)?;
        Ok(())
    }

    /// Deletes an account record.
    pub fn remove_account(&self, address: Address) -> Result<(), StateError> {
        self.stub.del_state(&account_key(address))?;
        Ok(())
    }

    /// Reads a storage word, consulting the invocation cache first.
    ///
    /// Missing keys read as the zero word. Values persisted by older writers
    /// may be shorter than a word and are left-padded; anything longer than a
    /// word is corrupt.
    pub fn get_storage(&mut self, address: Address, key: B256) -> Result<B256, StateError> {
        let composite = storage_key(address, key);
        if let Some(value) = self.cache.get(&composite) {
            return Ok(*value);
        }

        let bytes = self.stub.get_state(&composite)?;
        if bytes.len() > 32 {
            return Err(StateError::OversizedStorage { key: composite, len: bytes.len() });
        }
        Ok(B256::left_padding_from(&bytes))
    }

    /// Writes a storage word. The zero word deletes the key.
    ///
    /// The cache is updated only after the ledger write succeeds, and on
    /// deletes as well, so a read after a delete observes the zero word.
    pub fn set_storage(
        &mut self,
        address: Address,
        key: B256,
        value: B256,
    ) -> Result<(), StateError> {
        let composite = storage_key(address, key);
        if value.is_zero() {
            self.stub.del_state(&composite)?;
        } else {
            self.stub.put_state(&composite, value.as_slice())?;
        }
        self.cache.insert(composite, value);
        Ok(())
    }
}
