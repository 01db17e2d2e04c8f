//! An embedded in-memory ledger for development and end-to-end testing.
//!
//! Executes chaincode invocations in-process against a heap key/value store
//! under a fixed dev identity, seals one protobuf block per executed
//! transaction, and answers the system chaincode's block and transaction
//! queries from that chain. Queries simulate against a snapshot and discard
//! their writes, the way an endorsing peer would.

use std::{
    collections::HashMap,
    sync::Mutex,
};

use async_trait::async_trait;
use prost::Message;
use sha3::{Digest, Sha3_256};
use tracing::{debug, info};

use alloy_primitives::hex;
use fabevm_executor::{
    test_utils::{marshal_creator, MemoryStub, USER0_CERT},
    EvmChaincode,
};
use fabevm_gateway::{ChannelClient, ChannelRequest, ChannelResponse, ClientError};
use fabevm_ledger::proto::{
    Block, BlockData, BlockHeader, BlockchainInfo, ChaincodeAction, ChaincodeActionPayload,
    ChaincodeEndorsedAction, ChaincodeEvent, ChaincodeId, ChaincodeInput,
    ChaincodeInvocationSpec, ChaincodeProposalPayload, ChaincodeSpec, ChannelHeader, Envelope,
    Header, Payload, ProcessedTransaction, ProposalResponsePayload, Response, Transaction,
    TransactionAction,
};

/// Name of the system chaincode the gateway's block queries target.
const QSCC: &str = "qscc";

/// Message type of endorser transactions in channel headers.
const ENDORSER_TRANSACTION: i32 = 3;

/// The in-memory dev ledger: one chaincode, one channel, one identity.
pub struct DevLedger {
    ccid: String,
    channel_id: String,
    creator: Vec<u8>,
    chain: Mutex<DevChain>,
}

#[derive(Default)]
struct DevChain {
    kv: HashMap<String, Vec<u8>>,
    blocks: Vec<Block>,
    tx_ids: Vec<String>,
}

impl DevLedger {
    /// Creates an empty chain for the given chaincode and channel names.
    pub fn new(ccid: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            ccid: ccid.into(),
            channel_id: channel_id.into(),
            creator: marshal_creator("DevMSP", USER0_CERT.as_bytes()),
            chain: Mutex::new(DevChain::default()),
        }
    }

    /// Runs one invocation against a snapshot of the given state.
    fn run(
        &self,
        kv: &HashMap<String, Vec<u8>>,
        tx_id: &str,
        fcn: &str,
        args: &[Vec<u8>],
    ) -> (MemoryStub, Result<Vec<u8>, String>) {
        let stub = MemoryStub::new(self.creator.clone(), tx_id);
        *stub.kv.lock().unwrap() = kv.clone();

        let mut full_args = vec![fcn.as_bytes().to_vec()];
        full_args.extend_from_slice(args);
        stub.set_args(full_args);

        let result = EvmChaincode.invoke(&stub).map_err(|err| err.to_string());
        (stub, result)
    }

    fn qscc(&self, request: &ChannelRequest) -> Result<ChannelResponse, ClientError> {
        let channel = request.args.first().map(|arg| String::from_utf8_lossy(arg).into_owned());
        if channel.as_deref() != Some(self.channel_id.as_str()) {
            return Err(ClientError::msg(format!(
                "unknown channel: {}",
                channel.unwrap_or_default()
            )));
        }
        let chain = self.chain.lock().unwrap();

        let payload = match request.fcn.as_str() {
            "GetChainInfo" => {
                let current = chain.blocks.last().and_then(|block| block.header.as_ref());
                let previous = chain.blocks.len().checked_sub(2).and_then(|index| {
                    chain.blocks.get(index).and_then(|block| block.header.as_ref())
                });
                BlockchainInfo {
                    height: chain.blocks.len() as u64,
                    current_block_hash: current.map(|header| header.data_hash.clone()).unwrap_or_default(),
                    previous_block_hash: previous.map(|header| header.data_hash.clone()).unwrap_or_default(),
                }
                .encode_to_vec()
            }
            "GetBlockByNumber" => {
                let number: usize = request
                    .args
                    .get(1)
                    .and_then(|arg| String::from_utf8_lossy(arg).parse().ok())
                    .ok_or_else(|| ClientError::msg("bad block number"))?;
                chain
                    .blocks
                    .get(number)
                    .ok_or_else(|| ClientError::msg(format!("no block at height {number}")))?
                    .encode_to_vec()
            }
            "GetBlockByTxID" => self.find_block(&chain, request)?.encode_to_vec(),
            "GetTransactionByID" => {
                let block = self.find_block(&chain, request)?;
                let entry = block
                    .data
                    .as_ref()
                    .and_then(|data| data.data.first())
                    .ok_or_else(|| ClientError::msg("empty block"))?;
                let envelope = Envelope::decode(entry.as_slice())
                    .map_err(|err| ClientError::msg(err.to_string()))?;
                ProcessedTransaction {
                    transaction_envelope: Some(envelope),
                    validation_code: 0,
                }
                .encode_to_vec()
            }
            other => return Err(ClientError::msg(format!("unknown qscc function: {other}"))),
        };

        Ok(ChannelResponse { payload, transaction_id: String::new() })
    }

    fn find_block<'a>(
        &self,
        chain: &'a DevChain,
        request: &ChannelRequest,
    ) -> Result<&'a Block, ClientError> {
        let tx_id = request
            .args
            .get(1)
            .map(|arg| String::from_utf8_lossy(arg).into_owned())
            .ok_or_else(|| ClientError::msg("missing transaction id"))?;
        let index = chain
            .tx_ids
            .iter()
            .position(|candidate| *candidate == tx_id)
            .ok_or_else(|| ClientError::msg(format!("no transaction {tx_id}")))?;
        Ok(&chain.blocks[index])
    }

    fn seal_block(
        &self,
        chain: &mut DevChain,
        tx_id: &str,
        fcn: &str,
        args: &[Vec<u8>],
        payload: &[u8],
        event: Option<(String, Vec<u8>)>,
    ) {
        let mut full_args = vec![fcn.as_bytes().to_vec()];
        full_args.extend_from_slice(args);

        let spec = ChaincodeInvocationSpec {
            chaincode_spec: Some(ChaincodeSpec {
                r#type: 1,
                chaincode_id: Some(ChaincodeId {
                    path: String::new(),
                    name: self.ccid.clone(),
                    version: String::new(),
                }),
                input: Some(ChaincodeInput { args: full_args }),
            }),
        };

        let events = event
            .map(|(name, event_payload)| {
                ChaincodeEvent {
                    chaincode_id: self.ccid.clone(),
                    tx_id: tx_id.to_string(),
                    event_name: name,
                    payload: event_payload,
                }
                .encode_to_vec()
            })
            .unwrap_or_default();

        let chaincode_action = ChaincodeAction {
            results: Vec::new(),
            events,
            response: Some(Response {
                status: 200,
                message: String::new(),
                payload: payload.to_vec(),
            }),
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
            r#type: ENDORSER_TRANSACTION,
            version: 0,
            channel_id: self.channel_id.clone(),
            tx_id: tx_id.to_string(),
            epoch: 0,
        };
        let envelope = Envelope {
            payload: Payload {
                header: Some(Header {
                    channel_header: channel_header.encode_to_vec(),
                    signature_header: Vec::new(),
                }),
                data: transaction.encode_to_vec(),
            }
            .encode_to_vec(),
            signature: Vec::new(),
        }
        .encode_to_vec();

        let previous_hash = chain
            .blocks
            .last()
            .and_then(|block| block.header.as_ref())
            .map(|header| header.data_hash.clone())
            .unwrap_or_else(|| vec![0u8; 32]);
        let data_hash = Sha3_256::digest(&envelope).to_vec();

        chain.blocks.push(Block {
            header: Some(BlockHeader {
                number: chain.blocks.len() as u64,
                previous_hash,
                data_hash,
            }),
            data: Some(BlockData { data: vec![envelope] }),
        });
        chain.tx_ids.push(tx_id.to_string());
        info!(tx_id, height = chain.blocks.len(), "sealed dev block");
    }

    fn next_tx_id(&self, chain: &DevChain, request: &ChannelRequest) -> String {
        let mut hasher = Sha3_256::new();
        hasher.update(chain.blocks.len().to_be_bytes());
        hasher.update(request.fcn.as_bytes());
        for arg in &request.args {
            hasher.update(arg);
        }
        hasher.update(&self.creator);
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl ChannelClient for DevLedger {
    async fn query(&self, request: ChannelRequest) -> Result<ChannelResponse, ClientError> {
        if request.chaincode_id == QSCC {
            return self.qscc(&request);
        }
        if request.chaincode_id != self.ccid {
            return Err(ClientError::msg(format!("unknown chaincode: {}", request.chaincode_id)));
        }

        let chain = self.chain.lock().unwrap();
        let (_, result) = self.run(&chain.kv, "dev-query", &request.fcn, &request.args);
        debug!(fcn = %request.fcn, ok = result.is_ok(), "dev query");
        let payload = result.map_err(ClientError::msg)?;
        Ok(ChannelResponse { payload, transaction_id: String::new() })
    }

    async fn execute(&self, request: ChannelRequest) -> Result<ChannelResponse, ClientError> {
        if request.chaincode_id != self.ccid {
            return Err(ClientError::msg(format!("unknown chaincode: {}", request.chaincode_id)));
        }

        let mut chain = self.chain.lock().unwrap();
        let tx_id = self.next_tx_id(&chain, &request);

        let (stub, result) = self.run(&chain.kv, &tx_id, &request.fcn, &request.args);
        let payload = result.map_err(|err| ClientError::msg(format!("endorsement failed: {err}")))?;

        chain.kv = stub.kv.lock().unwrap().clone();
        let event = stub.events.lock().unwrap().first().cloned();
        self.seal_block(&mut chain, &tx_id, &request.fcn, &request.args, &payload, event);

        Ok(ChannelResponse { payload, transaction_id: tx_id })
    }
}

impl std::fmt::Debug for DevLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevLedger")
            .field("ccid", &self.ccid)
            .field("channel_id", &self.channel_id)
            .finish()
    }
}
