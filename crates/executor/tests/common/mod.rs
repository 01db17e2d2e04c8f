#![allow(dead_code)]

pub use fabevm_executor::test_utils::fixtures;

use alloy_primitives::{hex, Address};
use fabevm_executor::{
    test_utils::{marshal_creator, MemoryStub, USER0_CERT},
    DispatchError, EvmChaincode,
};
use fabevm_ledger::ZERO_ADDRESS_HEX;

/// A stub acting as user0 with the given transaction id.
pub fn user0_stub(tx_id: &str) -> MemoryStub {
    MemoryStub::new(marshal_creator("TestOrg", USER0_CERT.as_bytes()), tx_id)
}

/// Runs one invocation with the given arguments and transaction id.
pub fn invoke(
    stub: &MemoryStub,
    tx_id: &str,
    args: &[&str],
) -> Result<Vec<u8>, DispatchError> {
    stub.set_tx_id(tx_id);
    stub.set_args(args.iter().map(|arg| arg.as_bytes().to_vec()).collect());
    EvmChaincode.invoke(stub)
}

/// Deploys the given init code and returns the new contract's address hex.
pub fn deploy(stub: &MemoryStub, tx_id: &str, init_code: &str) -> String {
    let payload = invoke(stub, tx_id, &[ZERO_ADDRESS_HEX, init_code]).expect("deploy failed");
    let address_hex = String::from_utf8(payload).expect("address payload is utf-8");
    assert_eq!(address_hex.len(), 40);
    address_hex
}

/// Parses a 40-char hex payload into an address.
pub fn parse_address(address_hex: &str) -> Address {
    Address::from_slice(&hex::decode(address_hex).expect("address payload is hex"))
}

/// Left-pads an address to a 32-byte ABI word, hex-encoded.
pub fn address_word(address: Address) -> String {
    format!("{:0>64}", format!("{address:x}"))
}

/// A 32-byte ABI word holding the given integer, hex-encoded.
pub fn uint_word(value: u64) -> String {
    format!("{value:064x}")
}
