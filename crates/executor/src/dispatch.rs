//! The chaincode entry point: argument parsing and deploy/call orchestration.

use alloy_primitives::{hex, Address, Bytes};
use sha3::{Digest, Sha3_256};
use tracing::debug;

use crate::{
    account::{Account, Permissions},
    address::identity_to_address,
    errors::DispatchError,
    events::EventManager,
    state::StateManager,
    stub::LedgerStub,
    vm::{self, CallParams},
};

/// The invocation dispatcher.
///
/// The argument protocol is positional:
///
/// - `["account"]` returns the caller's derived address in lowercase hex.
/// - `["getCode", addr_hex]` returns a contract's runtime bytecode hex, or
///   empty bytes for an absent account.
/// - `[callee_hex, input_hex]` with the zero-address callee deploys; the
///   payload is the new contract's address hex.
/// - `[callee_hex, input_hex]` otherwise calls; the payload is the raw VM
///   output.
///
/// Anything else is rejected. Any failure aborts the ledger transaction; the
/// ledger's own atomicity discards partial effects.
#[derive(Debug, Default)]
pub struct EvmChaincode;

impl EvmChaincode {
    /// Instantiation hook required by the host lifecycle; nothing to set up.
    pub fn init<S: LedgerStub>(&self, _stub: &S) -> Result<Vec<u8>, DispatchError> {
        debug!("init is a no-op");
        Ok(Vec::new())
    }

    /// Dispatches one invocation.
    pub fn invoke<S: LedgerStub>(&self, stub: &S) -> Result<Vec<u8>, DispatchError> {
        let args = stub.args();

        if args.len() == 1 && args[0] == b"account" {
            return self.account(stub);
        }
        if args.len() != 2 {
            let first =
                args.first().map(|arg| String::from_utf8_lossy(arg).into_owned()).unwrap_or_default();
            return Err(DispatchError::ArgCount { count: args.len(), first });
        }
        if args[0] == b"getCode" {
            return self.get_code(stub, &args[1]);
        }

        let callee = decode_address(&args[0])?;
        let caller = caller_address(stub)?;
        let input_hex = String::from_utf8_lossy(&args[1]).into_owned();
        let input: Bytes =
            hex::decode(&input_hex).map_err(DispatchError::InputDecode)?.into();
        let nonce = invocation_nonce(caller, stub.tx_id().as_bytes());

        let mut state = StateManager::new(stub);
        let mut events = EventManager::new(stub);

        if callee == Address::ZERO {
            self.deploy(&mut state, &mut events, caller, input, nonce)
        } else {
            self.call(&mut state, &mut events, caller, callee, input, input_hex, nonce)
        }
    }

    fn deploy<S: LedgerStub>(
        &self,
        state: &mut StateManager<'_, S>,
        events: &mut EventManager<'_, S>,
        caller: Address,
        input: Bytes,
        nonce: u64,
    ) -> Result<Vec<u8>, DispatchError> {
        let contract_address = caller.create(nonce);
        debug!(caller = %caller, nonce, contract = %contract_address, "deploying contract");

        // The account must exist before the VM stores code on it.
        state.update_account(&Account::new(contract_address, Permissions::CONTRACT))?;

        vm::execute(
            state,
            events,
            CallParams { caller, callee: None, input, nonce },
        )?;

        // The event name is hex of the first 4 address bytes, 8 chars, so the
        // host's UTF-8 event marshalling always accepts it.
        events.flush(&hex::encode(&contract_address.as_slice()[..4]))?;

        Ok(format!("{contract_address:x}").into_bytes())
    }

    #[allow(clippy::too_many_arguments)]
    fn call<S: LedgerStub>(
        &self,
        state: &mut StateManager<'_, S>,
        events: &mut EventManager<'_, S>,
        caller: Address,
        callee: Address,
        input: Bytes,
        input_hex: String,
        nonce: u64,
    ) -> Result<Vec<u8>, DispatchError> {
        debug!(callee = %callee, "invoking contract");

        state
            .get_account(callee)?
            .ok_or_else(|| DispatchError::NoContract(format!("{callee:x}")))?;

        let outcome = vm::execute(
            state,
            events,
            CallParams { caller, callee: Some(callee), input, nonce },
        )?;

        // The event name is the 4-byte method selector of the input, already
        // hex in the argument.
        let name_len = input_hex.len().min(8);
        events.flush(&input_hex[..name_len])?;

        Ok(outcome.output.to_vec())
    }

    fn account<S: LedgerStub>(&self, stub: &S) -> Result<Vec<u8>, DispatchError> {
        let caller = caller_address(stub)?;
        Ok(format!("{caller:x}").into_bytes())
    }

    fn get_code<S: LedgerStub>(&self, stub: &S, address_arg: &[u8]) -> Result<Vec<u8>, DispatchError> {
        let address = decode_address(address_arg)?;
        let state = StateManager::new(stub);
        match state.get_account(address)? {
            None => Ok(Vec::new()),
            Some(account) => Ok(hex::encode(&account.code).into_bytes()),
        }
    }
}

/// Derives the caller address from the transaction's creator identity.
fn caller_address<S: LedgerStub>(stub: &S) -> Result<Address, DispatchError> {
    let creator = stub.creator()?;
    Ok(identity_to_address(&creator)?)
}

/// Decodes a 20-byte address from a hex argument.
fn decode_address(arg: &[u8]) -> Result<Address, DispatchError> {
    let value = String::from_utf8_lossy(arg).into_owned();
    let bytes = hex::decode(&value)
        .map_err(|source| DispatchError::CalleeDecode { value, source })?;
    if bytes.len() != Address::len_bytes() {
        return Err(DispatchError::CalleeLength(bytes.len()));
    }
    Ok(Address::from_slice(&bytes))
}

/// The invocation nonce: a hash of the caller address and transaction id.
///
/// Deploys derive the contract address from this value, so it must be unique
/// per transaction and identical on every peer replaying it.
pub fn invocation_nonce(caller: Address, tx_id: &[u8]) -> u64 {
    let mut hasher = Sha3_256::new();
    hasher.update(caller.as_slice());
    hasher.update(tx_id);
    let digest = hasher.finalize();

    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALLER: Address = alloy_primitives::address!("b60e8dd61c5d32be8058bb8eb970870f07233155");

    #[test]
    fn nonce_is_deterministic_per_transaction() {
        assert_eq!(
            invocation_nonce(CALLER, b"tx-1"),
            invocation_nonce(CALLER, b"tx-1")
        );
        assert_ne!(
            invocation_nonce(CALLER, b"tx-1"),
            invocation_nonce(CALLER, b"tx-2")
        );
        assert_ne!(
            invocation_nonce(CALLER, b"tx-1"),
            invocation_nonce(Address::ZERO, b"tx-1")
        );
    }

    #[test]
    fn contract_addresses_differ_across_transactions() {
        assert_ne!(
            CALLER.create(invocation_nonce(CALLER, b"tx-1")),
            CALLER.create(invocation_nonce(CALLER, b"tx-2"))
        );
    }

    #[test]
    fn short_addresses_are_rejected() {
        assert!(matches!(decode_address(b"abcd"), Err(DispatchError::CalleeLength(2))));
    }

    #[test]
    fn non_hex_addresses_are_rejected() {
        assert!(matches!(
            decode_address(b"zz373458a0043ce2bbaeb4963dcef962c78c762d"),
            Err(DispatchError::CalleeDecode { .. })
        ));
    }
}
