//! The VM's read view over the ledger state.

use alloy_primitives::{Address, B256, U256};
use revm::{
    primitives::KECCAK_EMPTY,
    state::{AccountInfo, Bytecode},
    Database,
};

use crate::{errors::StateError, state::StateManager, stub::LedgerStub};

/// Adapts the [`StateManager`] to the VM's database interface.
///
/// Balances are always zero and bytecode is supplied inline with each
/// account. The invocation's caller is answered from an in-memory override
/// carrying the derived nonce rather than from the ledger; caller identities
/// are not persisted accounts.
///
/// `block_hash` must stay unreachable: block data would differ between peers
/// replaying the same transaction, so any reach into it fails the invocation
/// outright.
#[derive(Debug)]
pub(crate) struct ExecutionDb<'a, 'b, S: LedgerStub> {
    state: &'a mut StateManager<'b, S>,
    caller: Address,
    caller_nonce: u64,
}

impl<'a, 'b, S: LedgerStub> ExecutionDb<'a, 'b, S> {
    pub(crate) fn new(
        state: &'a mut StateManager<'b, S>,
        caller: Address,
        caller_nonce: u64,
    ) -> Self {
        Self { state, caller, caller_nonce }
    }
}

impl<S: LedgerStub> Database for ExecutionDb<'_, '_, S> {
    type Error = StateError;

    fn basic(&mut self, address: Address) -> Result<Option<AccountInfo>, Self::Error> {
        if address == self.caller {
            return Ok(Some(AccountInfo { nonce: self.caller_nonce, ..Default::default() }));
        }

        let Some(account) = self.state.get_account(address)? else {
            return Ok(None);
        };

        if account.code.is_empty() {
            return Ok(Some(AccountInfo { nonce: account.nonce, ..Default::default() }));
        }

        let bytecode = Bytecode::new_raw(account.code.clone());
        Ok(Some(AccountInfo {
            nonce: account.nonce,
            code_hash: bytecode.hash_slow(),
            code: Some(bytecode),
            ..Default::default()
        }))
    }

    fn code_by_hash(&mut self, code_hash: B256) -> Result<Bytecode, Self::Error> {
        if code_hash == KECCAK_EMPTY {
            return Ok(Bytecode::default());
        }
        Err(StateError::CodeByHashUnreachable)
    }

    fn storage(&mut self, address: Address, index: U256) -> Result<U256, Self::Error> {
        let word = self.state.get_storage(address, B256::from(index))?;
        Ok(U256::from_be_bytes(word.0))
    }

    fn block_hash(&mut self, _number: u64) -> Result<B256, Self::Error> {
        Err(StateError::BlockHashUnreachable)
    }
}
