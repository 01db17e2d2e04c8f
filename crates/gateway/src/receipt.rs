//! Assembly of receipts, transactions, and blocks from ledger data.

use alloy_primitives::hex;
use fabevm_ledger::{
    chaincode_event, decode_envelope, transaction_details,
    proto::{Block, BlockHeader, ChaincodeAction},
    EventRecord, TransactionDetails,
};
use tracing::debug;

use crate::{
    bloom::logs_bloom,
    error::GatewayError,
    types::{BlockTransaction, RpcBlock, RpcLog, RpcTransaction, TxReceipt},
};

/// The zero address a deploy targets.
const ZERO_ADDRESS: [u8; 20] = [0u8; 20];

fn header(block: &Block) -> Result<&BlockHeader, GatewayError> {
    block.header.as_ref().ok_or(GatewayError::MissingBlockHeader)
}

fn block_hash_hex(header: &BlockHeader) -> String {
    format!("0x{}", hex::encode(&header.data_hash))
}

fn quantity(value: u64) -> String {
    format!("0x{value:x}")
}

/// Builds the receipt for `tx_id` from its decoded details and its block.
///
/// The transaction index is the position of the matching envelope in the
/// block's data list. A deploy's receipt carries the executor's payload (the
/// new contract's address hex) as `contractAddress`; everything else carries
/// `to`. Gas is always zero and the status is always success; failed
/// invocations never commit.
pub(crate) fn build_receipt(
    tx_id: &str,
    details: &TransactionDetails,
    block: &Block,
) -> Result<TxReceipt, GatewayError> {
    let header = header(block)?;
    let block_hash = block_hash_hex(header);
    let block_number = quantity(header.number);

    let mut transaction_index = String::new();
    if let Some(index) = find_transaction_index(block, tx_id)? {
        transaction_index = quantity(index as u64);
    }

    let callee_hex = details.callee.clone().unwrap_or_default();
    let callee = hex::decode(&callee_hex).map_err(GatewayError::CalleeHex)?;

    let mut contract_address = String::new();
    let mut to = String::new();
    if callee == ZERO_ADDRESS {
        if let Some(action) = &details.action {
            contract_address = response_payload_string(action);
        }
    } else {
        to = format!("0x{callee_hex}");
    }

    let logs = match &details.action {
        Some(action) if !action.events.is_empty() => decode_logs(
            action,
            &LogContext {
                block_hash: block_hash.clone(),
                block_number: block_number.clone(),
                tx_hash: format!("0x{tx_id}"),
                tx_index: transaction_index.clone(),
            },
        )?,
        _ => Vec::new(),
    };
    let logs_bloom = logs_bloom(&logs);

    Ok(TxReceipt {
        transaction_hash: format!("0x{tx_id}"),
        transaction_index,
        block_hash,
        block_number,
        contract_address,
        gas_used: 0,
        cumulative_gas_used: 0,
        to,
        logs,
        logs_bloom,
        status: "0x1".to_string(),
    })
}

/// Builds the transaction view for `tx_id` from its containing block.
pub(crate) fn build_transaction(tx_id: &str, block: &Block) -> Result<RpcTransaction, GatewayError> {
    let header = header(block)?;
    let mut transaction = RpcTransaction {
        hash: format!("0x{tx_id}"),
        block_hash: block_hash_hex(header),
        block_number: quantity(header.number),
        ..Default::default()
    };

    for (index, entry) in block_entries(block) {
        let decoded = decode_envelope(entry)?;
        if decoded.channel_header.tx_id != tx_id {
            continue;
        }

        transaction.transaction_index = quantity(index as u64);
        let details = transaction_details(&decoded.payload)?;
        transaction.to = format!("0x{}", details.callee.unwrap_or_default());
        transaction.input = format!("0x{}", details.input.unwrap_or_default());
        break;
    }

    Ok(transaction)
}

/// Builds the block view, with transactions as hashes or full objects.
pub(crate) fn build_block(block: &Block, full_transactions: bool) -> Result<RpcBlock, GatewayError> {
    let header = header(block)?;
    let block_hash = block_hash_hex(header);
    let block_number = quantity(header.number);

    let mut transactions = Vec::new();
    for (index, entry) in block_entries(block) {
        let decoded = decode_envelope(entry)?;
        let tx_id = decoded.channel_header.tx_id;
        debug!(block = header.number, %tx_id, "block transaction");

        if full_transactions {
            let details = transaction_details(&decoded.payload)?;
            transactions.push(BlockTransaction::Full(RpcTransaction {
                block_hash: block_hash.clone(),
                block_number: block_number.clone(),
                to: format!("0x{}", details.callee.unwrap_or_default()),
                input: format!("0x{}", details.input.unwrap_or_default()),
                transaction_index: quantity(index as u64),
                hash: format!("0x{tx_id}"),
            }));
        } else {
            transactions.push(BlockTransaction::Hash(format!("0x{tx_id}")));
        }
    }

    Ok(RpcBlock {
        number: block_number,
        hash: block_hash,
        parent_hash: format!("0x{}", hex::encode(&header.previous_hash)),
        transactions,
    })
}

/// The block/transaction context stamped onto every log of a receipt.
struct LogContext {
    block_hash: String,
    block_number: String,
    tx_hash: String,
    tx_index: String,
}

/// Decodes the event record attached to an action into RPC-shape logs.
fn decode_logs(action: &ChaincodeAction, ctx: &LogContext) -> Result<Vec<RpcLog>, GatewayError> {
    let event = chaincode_event(action).map_err(GatewayError::EventDecode)?;
    let record: EventRecord =
        serde_json::from_slice(&event.payload).map_err(GatewayError::EventPayload)?;

    Ok(record
        .into_events()
        .into_iter()
        .enumerate()
        .map(|(index, log)| RpcLog {
            address: format!("0x{:x}", log.address),
            topics: log.topics.iter().map(|topic| format!("0x{}", hex::encode(topic))).collect(),
            data: format!("0x{}", hex::encode(&log.data)),
            block_number: ctx.block_number.clone(),
            tx_hash: ctx.tx_hash.clone(),
            tx_index: ctx.tx_index.clone(),
            block_hash: ctx.block_hash.clone(),
            index: quantity(index as u64),
            log_type: "mined".to_string(),
        })
        .collect())
}

/// Position of the envelope whose transaction id matches, if any.
fn find_transaction_index(block: &Block, tx_id: &str) -> Result<Option<usize>, GatewayError> {
    for (index, entry) in block_entries(block) {
        let decoded = decode_envelope(entry)?;
        if decoded.channel_header.tx_id == tx_id {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// The non-empty envelope entries of a block, with their positions.
fn block_entries(block: &Block) -> impl Iterator<Item = (usize, &Vec<u8>)> {
    block
        .data
        .iter()
        .flat_map(|data| data.data.iter())
        .enumerate()
        .filter(|(_, entry)| !entry.is_empty())
}

fn response_payload_string(action: &ChaincodeAction) -> String {
    action
        .response
        .as_ref()
        .map(|response| String::from_utf8_lossy(&response.payload).into_owned())
        .unwrap_or_default()
}
