//! Account records persisted in the ledger.

use alloy_primitives::{Address, Bytes};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::errors::StateError;

bitflags! {
    /// The permission bitset recorded on an account.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Permissions: u64 {
        /// May call contracts.
        const CALL = 1 << 0;
        /// May send value transactions.
        const SEND = 1 << 1;
        /// May create contracts.
        const CREATE_CONTRACT = 1 << 2;
    }
}

impl Permissions {
    /// The set granted to every account, users and contracts alike.
    pub const CONTRACT: Self =
        Self::CALL.union(Self::SEND).union(Self::CREATE_CONTRACT);
}

/// A persistent account: address, deployed bytecode, permissions, and nonce.
///
/// Stored in the ledger as JSON under the lowercase hex of the address. The
/// address never changes once assigned; later writes replace only code,
/// permissions, and nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The 20-byte account address.
    pub address: Address,
    /// Deployed runtime bytecode; empty for non-contract accounts.
    #[serde(default)]
    pub code: Bytes,
    /// The account's permission bitset.
    pub permissions: Permissions,
    /// The account nonce.
    #[serde(default)]
    pub nonce: u64,
}

impl Account {
    /// Creates an account record with no code and a zero nonce.
    pub fn new(address: Address, permissions: Permissions) -> Self {
        Self { address, code: Bytes::new(), permissions, nonce: 0 }
    }

    /// Serializes the record for the ledger.
    pub fn encode(&self) -> Result<Vec<u8>, StateError> {
        serde_json::to_vec(self).map_err(StateError::AccountEncode)
    }

    /// Deserializes a record read from the ledger.
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        serde_json::from_slice(bytes).map_err(StateError::AccountDecode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn record_round_trips() {
        let account = Account {
            address: address!("82373458a0043ce2bbaeb4963dcef962c78c762d"),
            code: Bytes::from(vec![0x60, 0x60, 0x60, 0x40]),
            permissions: Permissions::CONTRACT,
            nonce: 1,
        };
        let encoded = account.encode().unwrap();
        assert_eq!(Account::decode(&encoded).unwrap(), account);
    }

    #[test]
    fn contract_permissions_cover_all_three() {
        assert!(Permissions::CONTRACT.contains(Permissions::CALL));
        assert!(Permissions::CONTRACT.contains(Permissions::SEND));
        assert!(Permissions::CONTRACT.contains(Permissions::CREATE_CONTRACT));
    }

    #[test]
    fn garbage_record_fails_to_decode() {
        assert!(matches!(Account::decode(b"not json"), Err(StateError::AccountDecode(_))));
    }
}
