//! Block and transaction lookups through the ledger's system chaincode.

use std::sync::Arc;

use async_trait::async_trait;
use prost::Message;

use fabevm_ledger::proto::{Block, BlockchainInfo, ProcessedTransaction};

use crate::client::{ChannelClient, ChannelRequest, ChannelResponse, ClientError, LedgerClient};

/// Name of the system chaincode serving chain queries.
const QSCC: &str = "qscc";

/// A [`LedgerClient`] implemented over a [`ChannelClient`].
///
/// The system chaincode answers chain-info, block, and transaction queries
/// with serialized protobuf, so one transport seam covers both halves of the
/// SDK surface.
#[derive(Clone)]
pub struct QsccLedgerClient {
    channel: Arc<dyn ChannelClient>,
    channel_id: String,
}

impl QsccLedgerClient {
    /// Creates the client for the given channel.
    pub fn new(channel: Arc<dyn ChannelClient>, channel_id: impl Into<String>) -> Self {
        Self { channel, channel_id: channel_id.into() }
    }

    async fn query(&self, fcn: &str, args: Vec<Vec<u8>>) -> Result<ChannelResponse, ClientError> {
        let mut full_args = vec![self.channel_id.clone().into_bytes()];
        full_args.extend(args);
        self.channel
            .query(ChannelRequest {
                chaincode_id: QSCC.to_string(),
                fcn: fcn.to_string(),
                args: full_args,
            })
            .await
    }
}

impl std::fmt::Debug for QsccLedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QsccLedgerClient").field("channel_id", &self.channel_id).finish()
    }
}

#[async_trait]
impl LedgerClient for QsccLedgerClient {
    async fn query_info(&self) -> Result<BlockchainInfo, ClientError> {
        let response = self.query("GetChainInfo", Vec::new()).await?;
        BlockchainInfo::decode(response.payload.as_slice()).map_err(|err| ClientError::msg(err.to_string()))
    }

    async fn query_block(&self, number: u64) -> Result<Block, ClientError> {
        let response = self
            .query("GetBlockByNumber", vec![number.to_string().into_bytes()])
            .await?;
        Block::decode(response.payload.as_slice()).map_err(|err| ClientError::msg(err.to_string()))
    }

    async fn query_block_by_txid(&self, tx_id: &str) -> Result<Block, ClientError> {
        let response = self
            .query("GetBlockByTxID", vec![tx_id.as_bytes().to_vec()])
            .await?;
        Block::decode(response.payload.as_slice()).map_err(|err| ClientError::msg(err.to_string()))
    }

    async fn query_transaction(&self, tx_id: &str) -> Result<ProcessedTransaction, ClientError> {
        let response = self
            .query("GetTransactionByID", vec![tx_id.as_bytes().to_vec()])
            .await?;
        ProcessedTransaction::decode(response.payload.as_slice())
            .map_err(|err| ClientError::msg(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingChannel {
        requests: Mutex<Vec<ChannelRequest>>,
        payload: Vec<u8>,
    }

    #[async_trait]
    impl ChannelClient for RecordingChannel {
        async fn query(&self, request: ChannelRequest) -> Result<ChannelResponse, ClientError> {
            self.requests.lock().unwrap().push(request);
            Ok(ChannelResponse { payload: self.payload.clone(), transaction_id: String::new() })
        }

        async fn execute(&self, _request: ChannelRequest) -> Result<ChannelResponse, ClientError> {
            Err(ClientError::msg("qscc is query-only"))
        }
    }

    #[tokio::test]
    async fn chain_info_goes_through_qscc() {
        let info = BlockchainInfo {
            height: 7,
            current_block_hash: vec![0xaa],
            previous_block_hash: vec![0xbb],
        };
        let channel = Arc::new(RecordingChannel {
            requests: Mutex::new(Vec::new()),
            payload: info.encode_to_vec(),
        });
        let client = QsccLedgerClient::new(channel.clone(), "mychannel");

        let decoded = client.query_info().await.unwrap();
        assert_eq!(decoded.height, 7);

        let requests = channel.requests.lock().unwrap();
        assert_eq!(requests[0].chaincode_id, "qscc");
        assert_eq!(requests[0].fcn, "GetChainInfo");
        assert_eq!(requests[0].args, vec![b"mychannel".to_vec()]);
    }

    #[tokio::test]
    async fn block_numbers_are_passed_as_decimal_strings() {
        let block = Block { header: None, data: None };
        let channel = Arc::new(RecordingChannel {
            requests: Mutex::new(Vec::new()),
            payload: block.encode_to_vec(),
        });
        let client = QsccLedgerClient::new(channel.clone(), "mychannel");

        client.query_block(436).await.unwrap();

        let requests = channel.requests.lock().unwrap();
        assert_eq!(requests[0].fcn, "GetBlockByNumber");
        assert_eq!(requests[0].args, vec![b"mychannel".to_vec(), b"436".to_vec()]);
    }

    #[tokio::test]
    async fn transaction_lookups_carry_the_id() {
        let transaction = ProcessedTransaction { transaction_envelope: None, validation_code: 0 };
        let channel = Arc::new(RecordingChannel {
            requests: Mutex::new(Vec::new()),
            payload: transaction.encode_to_vec(),
        });
        let client = QsccLedgerClient::new(channel.clone(), "mychannel");

        client.query_transaction("deadbeef").await.unwrap();
        client.query_block_by_txid("deadbeef").await.unwrap();

        let requests = channel.requests.lock().unwrap();
        assert_eq!(requests[0].fcn, "GetTransactionByID");
        assert_eq!(requests[1].fcn, "GetBlockByTxID");
        assert_eq!(requests[1].args[1], b"deadbeef".to_vec());
    }
}
