//! The default-block parameter of the RPC dialect.

use std::str::FromStr;

use crate::error::GatewayError;

/// `latest | earliest | pending | <hex-number>`, already stripped of `0x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultBlock {
    /// The newest committed block.
    Latest,
    /// The genesis block.
    Earliest,
    /// The in-progress block; unsupported on this ledger.
    Pending,
    /// A concrete block number.
    Number(u64),
}

impl FromStr for DefaultBlock {
    type Err = GatewayError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            "pending" => Ok(Self::Pending),
            _ => u64::from_str_radix(input, 16)
                .map(Self::Number)
                .map_err(|_| GatewayError::BadDefaultBlock(input.to_string())),
        }
    }
}
