//! Method-set scenarios against mock SDK clients.

use std::sync::{Arc, Mutex};

use alloy_primitives::{address, Bloom, Bytes, B256};
use async_trait::async_trait;
use fabevm_gateway::{
    ChannelClient, ChannelRequest, ChannelResponse, ClientError, EthApiServer, EthArgs,
    EthService, LedgerClient, BlockTransaction,
};
use fabevm_ledger::{
    proto::{
        Block, BlockData, BlockHeader, BlockchainInfo, ChaincodeAction, ChaincodeActionPayload,
        ChaincodeEndorsedAction, ChaincodeEvent, ChaincodeInput, ChaincodeInvocationSpec,
        ChaincodeProposalPayload, ChaincodeSpec, ChannelHeader, Envelope, Header, Payload,
        ProcessedTransaction, ProposalResponsePayload, Response, Transaction, TransactionAction,
    },
    EventRecord, LogEvent, ZERO_ADDRESS_HEX,
};
use prost::Message;

const CONTRACT_HEX: &str = "82373458a0043ce2bbaeb4963dcef962c78c762d";

// ---------------------------------------------------------------------------
// envelope builders

fn build_payload(tx_id: &str, args: Vec<Vec<u8>>, output: &[u8], events: Vec<u8>) -> Payload {
    let spec = ChaincodeInvocationSpec {
        chaincode_spec: Some(ChaincodeSpec {
            r#type: 1,
            chaincode_id: None,
            input: Some(ChaincodeInput { args }),
        }),
    };
    let chaincode_action = ChaincodeAction {
        results: Vec::new(),
        events,
        response: Some(Response { status: 200, message: String::new(), payload: output.to_vec() }),
    };
    let response_payload = ProposalResponsePayload {
        proposal_hash: Vec::new(),
        extension: chaincode_action.encode_to_vec(),
    };
    let action_payload = ChaincodeActionPayload {
        chaincode_proposal_payload: ChaincodeProposalPayload { input: spec.encode_to_vec() }
            .encode_to_vec(),
        action: Some(ChaincodeEndorsedAction {
            proposal_response_payload: response_payload.encode_to_vec(),
        }),
    };
    let transaction = Transaction {
        actions: vec![TransactionAction {
            header: Vec::new(),
            payload: action_payload.encode_to_vec(),
        }],
    };
    let channel_header = ChannelHeader {
        r#type: 3,
        version: 0,
        channel_id: "mychannel".to_string(),
        tx_id: tx_id.to_string(),
        epoch: 0,
    };
    Payload {
        header: Some(Header {
            channel_header: channel_header.encode_to_vec(),
            signature_header: Vec::new(),
        }),
        data: transaction.encode_to_vec(),
    }
}

fn build_envelope(tx_id: &str, args: Vec<Vec<u8>>, output: &[u8], events: Vec<u8>) -> Envelope {
    Envelope {
        payload: build_payload(tx_id, args, output, events).encode_to_vec(),
        signature: Vec::new(),
    }
}

fn build_block(number: u64, envelopes: Vec<Envelope>) -> Block {
    Block {
        header: Some(BlockHeader {
            number,
            previous_hash: vec![0x11; 32],
            data_hash: vec![0x22; 32],
        }),
        data: Some(BlockData {
            data: envelopes.into_iter().map(|envelope| envelope.encode_to_vec()).collect(),
        }),
    }
}

fn event_bytes(tx_id: &str, name: &str, record: &EventRecord) -> Vec<u8> {
    ChaincodeEvent {
        chaincode_id: "evmcc".to_string(),
        tx_id: tx_id.to_string(),
        event_name: name.to_string(),
        payload: serde_json::to_vec(record).unwrap(),
    }
    .encode_to_vec()
}

// ---------------------------------------------------------------------------
// mock clients

#[derive(Default)]
struct MockChannel {
    queries: Mutex<Vec<ChannelRequest>>,
    executes: Mutex<Vec<ChannelRequest>>,
    payload: Vec<u8>,
    transaction_id: String,
    fail: bool,
}

#[async_trait]
impl ChannelClient for MockChannel {
    async fn query(&self, request: ChannelRequest) -> Result<ChannelResponse, ClientError> {
        if self.fail {
            return Err(ClientError::msg("boom"));
        }
        self.queries.lock().unwrap().push(request);
        Ok(ChannelResponse { payload: self.payload.clone(), transaction_id: String::new() })
    }

    async fn execute(&self, request: ChannelRequest) -> Result<ChannelResponse, ClientError> {
        if self.fail {
            return Err(ClientError::msg("boom"));
        }
        self.executes.lock().unwrap().push(request);
        Ok(ChannelResponse {
            payload: self.payload.clone(),
            transaction_id: self.transaction_id.clone(),
        })
    }
}

#[derive(Default)]
struct MockLedger {
    info: Option<BlockchainInfo>,
    block: Option<Block>,
    transaction: Option<ProcessedTransaction>,
    block_requests: Mutex<Vec<u64>>,
    fail: bool,
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn query_info(&self) -> Result<BlockchainInfo, ClientError> {
        if self.fail {
            return Err(ClientError::msg("boom"));
        }
        Ok(self.info.clone().expect("mock info"))
    }

    async fn query_block(&self, number: u64) -> Result<Block, ClientError> {
        if self.fail {
            return Err(ClientError::msg("boom"));
        }
        self.block_requests.lock().unwrap().push(number);
        Ok(self.block.clone().expect("mock block"))
    }

    async fn query_block_by_txid(&self, _tx_id: &str) -> Result<Block, ClientError> {
        if self.fail {
            return Err(ClientError::msg("boom"));
        }
        Ok(self.block.clone().expect("mock block"))
    }

    async fn query_transaction(&self, _tx_id: &str) -> Result<ProcessedTransaction, ClientError> {
        if self.fail {
            return Err(ClientError::msg("boom"));
        }
        Ok(self.transaction.clone().expect("mock transaction"))
    }
}

fn service(channel: Arc<MockChannel>, ledger: Arc<MockLedger>) -> EthService {
    EthService::new(channel, ledger, "evmcc")
}

// ---------------------------------------------------------------------------
// queries and executions

#[tokio::test]
async fn get_code_strips_the_prefix_and_prefixes_the_reply() {
    let channel = Arc::new(MockChannel {
        payload: b"60016002".to_vec(),
        ..Default::default()
    });
    let eth = service(channel.clone(), Arc::new(MockLedger::default()));

    let code = eth.get_code(format!("0x{CONTRACT_HEX}")).await.unwrap();
    assert_eq!(code, "0x60016002");

    let queries = channel.queries.lock().unwrap();
    assert_eq!(queries[0].fcn, "getCode");
    assert_eq!(queries[0].args, vec![CONTRACT_HEX.as_bytes().to_vec()]);
}

#[tokio::test]
async fn get_code_wraps_ledger_failures() {
    let channel = Arc::new(MockChannel { fail: true, ..Default::default() });
    let eth = service(channel, Arc::new(MockLedger::default()));

    let err = eth.get_code(CONTRACT_HEX.to_string()).await.unwrap_err();
    assert!(err.message().contains("Failed to query the ledger"));
}

#[tokio::test]
async fn call_hex_encodes_the_simulation_output() {
    let channel = Arc::new(MockChannel { payload: vec![0x00, 0x2a], ..Default::default() });
    let eth = service(channel.clone(), Arc::new(MockLedger::default()));

    let args = EthArgs {
        to: format!("0x{CONTRACT_HEX}"),
        data: "0x6d4ce63c".to_string(),
        ..Default::default()
    };
    let reply = eth.call(args, None).await.unwrap();
    assert_eq!(reply, "0x002a");

    let queries = channel.queries.lock().unwrap();
    assert_eq!(queries[0].fcn, CONTRACT_HEX);
    assert_eq!(queries[0].args, vec![b"6d4ce63c".to_vec()]);
}

#[tokio::test]
async fn send_transaction_returns_the_ledger_transaction_id() {
    let channel = Arc::new(MockChannel {
        transaction_id: "feedface".to_string(),
        ..Default::default()
    });
    let eth = service(channel.clone(), Arc::new(MockLedger::default()));

    let args = EthArgs {
        to: format!("0x{CONTRACT_HEX}"),
        data: "0x60fe47b1".to_string(),
        ..Default::default()
    };
    assert_eq!(eth.send_transaction(args).await.unwrap(), "feedface");

    let executes = channel.executes.lock().unwrap();
    assert_eq!(executes[0].fcn, CONTRACT_HEX);
    assert_eq!(executes[0].args, vec![b"60fe47b1".to_vec()]);
}

#[tokio::test]
async fn deployments_target_the_zero_address() {
    let channel = Arc::new(MockChannel {
        transaction_id: "feedface".to_string(),
        ..Default::default()
    });
    let eth = service(channel.clone(), Arc::new(MockLedger::default()));

    let args = EthArgs { data: "0x6060".to_string(), ..Default::default() };
    eth.send_transaction(args).await.unwrap();

    let executes = channel.executes.lock().unwrap();
    assert_eq!(executes[0].fcn, ZERO_ADDRESS_HEX);
}

#[tokio::test]
async fn accounts_returns_the_lowercased_prefixed_address() {
    let channel = Arc::new(MockChannel {
        payload: b"82373458A0043CE2BBAEB4963DCEF962C78C762D".to_vec(),
        ..Default::default()
    });
    let eth = service(channel.clone(), Arc::new(MockLedger::default()));

    let accounts = eth.accounts().await.unwrap();
    assert_eq!(accounts, vec![format!("0x{CONTRACT_HEX}")]);

    let queries = channel.queries.lock().unwrap();
    assert_eq!(queries[0].fcn, "account");
    assert!(queries[0].args.is_empty());
}

#[tokio::test]
async fn gas_and_balance_are_always_zero() {
    let eth = service(Arc::new(MockChannel::default()), Arc::new(MockLedger::default()));
    assert_eq!(eth.estimate_gas(None).await.unwrap(), "0x0");
    assert_eq!(eth.get_balance(None, None).await.unwrap(), "0x0");
}

// ---------------------------------------------------------------------------
// receipts

fn processed(envelope: &Envelope) -> ProcessedTransaction {
    ProcessedTransaction {
        transaction_envelope: Some(envelope.clone()),
        validation_code: 0,
    }
}

#[tokio::test]
async fn receipt_for_a_contract_call() {
    let tx_id = "1234567123";
    let other = build_envelope("aaaa", vec![b"account".to_vec()], b"", Vec::new());
    let target = build_envelope(
        tx_id,
        vec![CONTRACT_HEX.as_bytes().to_vec(), b"60fe47b1002a".to_vec()],
        b"",
        Vec::new(),
    );
    let ledger = Arc::new(MockLedger {
        block: Some(build_block(31, vec![other, target.clone()])),
        transaction: Some(processed(&target)),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger);

    let receipt = eth.get_transaction_receipt(tx_id.to_string()).await.unwrap();
    assert_eq!(receipt.transaction_hash, format!("0x{tx_id}"));
    assert_eq!(receipt.transaction_index, "0x1");
    assert_eq!(receipt.block_number, "0x1f");
    assert_eq!(receipt.block_hash, format!("0x{}", "22".repeat(32)));
    assert_eq!(receipt.to, format!("0x{CONTRACT_HEX}"));
    assert_eq!(receipt.contract_address, "");
    assert!(receipt.logs.is_empty());
    assert_eq!(receipt.logs_bloom, Bloom::ZERO);
    assert_eq!(receipt.gas_used, 0);
    assert_eq!(receipt.status, "0x1");
}

#[tokio::test]
async fn receipt_for_a_deploy_carries_the_contract_address() {
    let tx_id = "deploy1";
    let envelope = build_envelope(
        tx_id,
        vec![ZERO_ADDRESS_HEX.as_bytes().to_vec(), b"6060".to_vec()],
        CONTRACT_HEX.as_bytes(),
        Vec::new(),
    );
    let ledger = Arc::new(MockLedger {
        block: Some(build_block(5, vec![envelope.clone()])),
        transaction: Some(processed(&envelope)),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger);

    let receipt = eth.get_transaction_receipt(tx_id.to_string()).await.unwrap();
    assert_eq!(receipt.contract_address, CONTRACT_HEX);
    assert_eq!(receipt.to, "");
    assert!(receipt.logs.is_empty());
    assert_eq!(receipt.logs_bloom, Bloom::ZERO);
}

#[tokio::test]
async fn receipt_logs_are_hydrated_from_the_event_record() {
    let tx_id = "55eb21bd";
    let record = EventRecord::new(vec![
        LogEvent {
            address: address!("82373458a0043ce2bbaeb4963dcef962c78c762d"),
            topics: vec![B256::repeat_byte(0x07), B256::repeat_byte(0xec)],
            data: Bytes::from(vec![0x20, 0x10]),
            height: 0,
        },
        LogEvent {
            address: address!("82373458a0043ce2bbaeb4963dcef962c78c762d"),
            topics: vec![B256::repeat_byte(0x07)],
            data: Bytes::new(),
            height: 0,
        },
    ]);
    let envelope = build_envelope(
        tx_id,
        vec![CONTRACT_HEX.as_bytes().to_vec(), b"f1b6dc2e".to_vec()],
        b"",
        event_bytes(tx_id, "f1b6dc2e", &record),
    );
    let ledger = Arc::new(MockLedger {
        block: Some(build_block(9, vec![envelope.clone()])),
        transaction: Some(processed(&envelope)),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger);

    let receipt = eth.get_transaction_receipt(format!("0x{tx_id}")).await.unwrap();
    assert_eq!(receipt.logs.len(), 2);

    let log = &receipt.logs[0];
    assert_eq!(log.address, format!("0x{CONTRACT_HEX}"));
    assert_eq!(log.topics, vec![
        format!("0x{}", "07".repeat(32)),
        format!("0x{}", "ec".repeat(32)),
    ]);
    assert_eq!(log.data, "0x2010");
    assert_eq!(log.block_number, "0x9");
    assert_eq!(log.tx_hash, format!("0x{tx_id}"));
    assert_eq!(log.tx_index, "0x0");
    assert_eq!(log.index, "0x0");
    assert_eq!(log.log_type, "mined");
    assert_eq!(receipt.logs[1].index, "0x1");

    // The bloom covers both logs.
    let bloom = fabevm_gateway::logs_bloom(&receipt.logs);
    assert_eq!(receipt.logs_bloom, bloom);
    assert_ne!(receipt.logs_bloom, Bloom::ZERO);
}

// ---------------------------------------------------------------------------
// transactions and blocks

#[tokio::test]
async fn transaction_by_hash_recovers_to_input_and_index() {
    let tx_id = "cafef00d";
    let other = build_envelope("other", vec![b"account".to_vec()], b"", Vec::new());
    let target = build_envelope(
        tx_id,
        vec![CONTRACT_HEX.as_bytes().to_vec(), b"6d4ce63c".to_vec()],
        b"",
        Vec::new(),
    );
    let ledger = Arc::new(MockLedger {
        block: Some(build_block(12, vec![other, target])),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger);

    let transaction = eth.get_transaction_by_hash(format!("0x{tx_id}")).await.unwrap();
    assert_eq!(transaction.hash, format!("0x{tx_id}"));
    assert_eq!(transaction.block_number, "0xc");
    assert_eq!(transaction.transaction_index, "0x1");
    assert_eq!(transaction.to, format!("0x{CONTRACT_HEX}"));
    assert_eq!(transaction.input, "0x6d4ce63c");
}

#[tokio::test]
async fn transaction_by_hash_rejects_an_empty_id() {
    let eth = service(Arc::new(MockChannel::default()), Arc::new(MockLedger::default()));
    let err = eth.get_transaction_by_hash(String::new()).await.unwrap_err();
    assert!(err.message().contains("txID was empty"));
}

#[tokio::test]
async fn block_by_number_with_transaction_hashes() {
    let envelope = build_envelope("tx-a", vec![b"account".to_vec()], b"", Vec::new());
    let ledger = Arc::new(MockLedger {
        block: Some(build_block(436, vec![envelope])),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger.clone());

    let block = eth.get_block_by_number("0x1b4".to_string(), false).await.unwrap();
    assert_eq!(block.number, "0x1b4");
    assert_eq!(block.hash, format!("0x{}", "22".repeat(32)));
    assert_eq!(block.parent_hash, format!("0x{}", "11".repeat(32)));
    assert_eq!(block.transactions, vec![BlockTransaction::Hash("0xtx-a".to_string())]);
    assert_eq!(*ledger.block_requests.lock().unwrap(), vec![436]);
}

#[tokio::test]
async fn block_by_number_with_full_transactions() {
    let envelope = build_envelope(
        "tx-b",
        vec![CONTRACT_HEX.as_bytes().to_vec(), b"6d4ce63c".to_vec()],
        b"",
        Vec::new(),
    );
    let ledger = Arc::new(MockLedger {
        block: Some(build_block(2, vec![envelope])),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger);

    let block = eth.get_block_by_number("2".to_string(), true).await.unwrap();
    match &block.transactions[0] {
        BlockTransaction::Full(transaction) => {
            assert_eq!(transaction.hash, "0xtx-b");
            assert_eq!(transaction.to, format!("0x{CONTRACT_HEX}"));
            assert_eq!(transaction.input, "0x6d4ce63c");
            assert_eq!(transaction.transaction_index, "0x0");
        }
        BlockTransaction::Hash(_) => panic!("expected a full transaction"),
    }
}

#[tokio::test]
async fn latest_resolves_to_height_minus_one() {
    let envelope = build_envelope("tx-c", vec![b"account".to_vec()], b"", Vec::new());
    let ledger = Arc::new(MockLedger {
        info: Some(BlockchainInfo {
            height: 7,
            current_block_hash: Vec::new(),
            previous_block_hash: Vec::new(),
        }),
        block: Some(build_block(6, vec![envelope])),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger.clone());

    let block = eth.get_block_by_number("latest".to_string(), false).await.unwrap();
    assert_eq!(block.number, "0x6");
    assert_eq!(*ledger.block_requests.lock().unwrap(), vec![6]);
}

#[tokio::test]
async fn earliest_resolves_to_block_zero() {
    let envelope = build_envelope("tx-d", vec![b"account".to_vec()], b"", Vec::new());
    let ledger = Arc::new(MockLedger {
        block: Some(build_block(0, vec![envelope])),
        ..Default::default()
    });
    let eth = service(Arc::new(MockChannel::default()), ledger.clone());

    eth.get_block_by_number("earliest".to_string(), false).await.unwrap();
    assert_eq!(*ledger.block_requests.lock().unwrap(), vec![0]);
}

#[tokio::test]
async fn pending_blocks_are_unimplemented() {
    let eth = service(Arc::new(MockChannel::default()), Arc::new(MockLedger::default()));
    let err = eth.get_block_by_number("pending".to_string(), false).await.unwrap_err();
    assert!(err.message().contains("Unimplemented"));
}

#[tokio::test]
async fn unparseable_block_tags_are_rejected() {
    let eth = service(Arc::new(MockChannel::default()), Arc::new(MockLedger::default()));
    let err = eth.get_block_by_number("newest".to_string(), false).await.unwrap_err();
    assert!(err.message().contains("not a named block"));
}

// ---------------------------------------------------------------------------
// method registration

#[test]
fn methods_are_registered_under_every_namespace() {
    let eth = service(Arc::new(MockChannel::default()), Arc::new(MockLedger::default()));
    let module = eth.into_rpc();

    for method in [
        "eth_getCode",
        "eth_call",
        "eth_sendTransaction",
        "eth_getTransactionReceipt",
        "eth_accounts",
        "eth_estimateGas",
        "eth_getBalance",
        "eth_getBlockByNumber",
        "eth_getTransactionByHash",
        "web3_getCode",
        "net_getCode",
        "eth.getCode",
        "web3_getBlockByNumber",
        "net_getTransactionByHash",
        "eth.sendTransaction",
    ] {
        assert!(module.method(method).is_some(), "missing {method}");
    }
}
