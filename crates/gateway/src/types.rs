//! RPC-shape objects returned to Ethereum clients.
//!
//! Hex convention: inputs tolerate an optional `0x` prefix, outputs always
//! carry one, and numbers are lowercase hex quantities.

use alloy_primitives::Bloom;
use serde::{Deserialize, Serialize};

/// The transaction argument object of `eth_call` and `eth_sendTransaction`.
///
/// Everything is optional hex. Gas, price, value, and nonce are accepted and
/// ignored: the bridge meters no gas and transfers no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EthArgs {
    /// Target address; empty for a contract deployment.
    pub to: String,
    /// Sender address; unused, the ledger identity decides the caller.
    pub from: String,
    /// Gas limit; ignored.
    pub gas: String,
    /// Gas price; ignored.
    pub gas_price: String,
    /// Transferred value; ignored.
    pub value: String,
    /// Input data hex.
    pub data: String,
    /// Nonce; ignored.
    pub nonce: String,
}

/// A transaction receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// The transaction hash, `0x`-prefixed.
    pub transaction_hash: String,
    /// Positional index of the transaction in its block, hex.
    pub transaction_index: String,
    /// Hash of the containing block, hex.
    pub block_hash: String,
    /// Number of the containing block, hex.
    pub block_number: String,
    /// The created contract's address hex, for deploys; empty otherwise.
    pub contract_address: String,
    /// Always zero; the bridge meters no gas.
    pub gas_used: u64,
    /// Always zero.
    pub cumulative_gas_used: u64,
    /// The callee, `0x`-prefixed, for calls; empty for deploys.
    pub to: String,
    /// The logs emitted by the transaction.
    pub logs: Vec<RpcLog>,
    /// Bloom filter over the logs' addresses and topics.
    pub logs_bloom: Bloom,
    /// Always `0x1`: only committed transactions are visible.
    pub status: String,
}

/// One log entry of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcLog {
    /// Address of the emitting contract, `0x`-prefixed lowercase.
    pub address: String,
    /// The log's topics, each `0x`-prefixed.
    pub topics: Vec<String>,
    /// The log data, `0x`-prefixed.
    pub data: String,
    /// Number of the containing block, hex.
    pub block_number: String,
    /// Hash of the transaction, `0x`-prefixed.
    #[serde(rename = "transactionHash")]
    pub tx_hash: String,
    /// Index of the transaction in its block, hex.
    #[serde(rename = "transactionIndex")]
    pub tx_index: String,
    /// Hash of the containing block, `0x`-prefixed.
    pub block_hash: String,
    /// Index of the log within the transaction, hex.
    #[serde(rename = "logIndex")]
    pub index: String,
    /// Always `mined`.
    #[serde(rename = "type")]
    pub log_type: String,
}

/// A transaction as returned by `eth_getTransactionByHash`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    /// Hash of the containing block.
    pub block_hash: String,
    /// Number of the containing block.
    pub block_number: String,
    /// The callee, `0x`-prefixed; `0x` alone when the invocation had none.
    pub to: String,
    /// The input data, `0x`-prefixed.
    pub input: String,
    /// Positional index in the block.
    pub transaction_index: String,
    /// The transaction hash.
    pub hash: String,
}

/// A block as returned by `eth_getBlockByNumber`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlock {
    /// The block number, hex.
    pub number: String,
    /// The block hash, hex.
    pub hash: String,
    /// The previous block's hash, hex.
    pub parent_hash: String,
    /// The block's transactions: hashes, or full objects when requested.
    pub transactions: Vec<BlockTransaction>,
}

/// Either a transaction hash or a full transaction object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockTransaction {
    /// The `0x`-prefixed transaction id.
    Hash(String),
    /// The full transaction.
    Full(RpcTransaction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_serializes_under_rpc_field_names() {
        let receipt = TxReceipt {
            transaction_hash: "0xabc".to_string(),
            transaction_index: "0x0".to_string(),
            block_hash: "0xdef".to_string(),
            block_number: "0x1".to_string(),
            contract_address: String::new(),
            gas_used: 0,
            cumulative_gas_used: 0,
            to: "0x82373458a0043ce2bbaeb4963dcef962c78c762d".to_string(),
            logs: Vec::new(),
            logs_bloom: Bloom::ZERO,
            status: "0x1".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&receipt).unwrap();
        for field in [
            "transactionHash",
            "transactionIndex",
            "blockHash",
            "blockNumber",
            "contractAddress",
            "gasUsed",
            "cumulativeGasUsed",
            "to",
            "logs",
            "logsBloom",
            "status",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert!(json["logsBloom"].as_str().unwrap().starts_with("0x"));
    }

    #[test]
    fn log_serializes_under_rpc_field_names() {
        let log = RpcLog {
            address: "0x82373458a0043ce2bbaeb4963dcef962c78c762d".to_string(),
            topics: vec!["0xaa".to_string()],
            data: "0x".to_string(),
            block_number: "0x1".to_string(),
            tx_hash: "0xabc".to_string(),
            tx_index: "0x0".to_string(),
            block_hash: "0xdef".to_string(),
            index: "0x0".to_string(),
            log_type: "mined".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&log).unwrap();
        for field in
            ["address", "topics", "data", "blockNumber", "transactionHash", "transactionIndex", "blockHash", "logIndex", "type"]
        {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }

    #[test]
    fn block_transactions_render_as_hashes_or_objects() {
        let block = RpcBlock {
            number: "0x1".to_string(),
            hash: "0xaa".to_string(),
            parent_hash: "0xbb".to_string(),
            transactions: vec![
                BlockTransaction::Hash("0xcc".to_string()),
                BlockTransaction::Full(RpcTransaction::default()),
            ],
        };
        let json = serde_json::to_value(&block).unwrap();
        assert!(json["transactions"][0].is_string());
        assert!(json["transactions"][1].is_object());
    }

    #[test]
    fn eth_args_accept_partial_objects() {
        let args: EthArgs =
            serde_json::from_str(r#"{"to":"0xabc","data":"0x6d4ce63c"}"#).unwrap();
        assert_eq!(args.to, "0xabc");
        assert_eq!(args.data, "0x6d4ce63c");
        assert!(args.gas.is_empty());
    }
}
