//! The Ethereum RPC method set, translated onto ledger operations.

use std::sync::Arc;

use alloy_primitives::hex;
use fabevm_ledger::{strip_0x, transaction_details, proto::Payload, ZERO_ADDRESS_HEX};
use jsonrpsee::{
    core::{async_trait, RpcResult},
    proc_macros::rpc,
};
use prost::Message;
use tracing::debug;

use crate::{
    client::{ChannelClient, ChannelRequest, ChannelResponse, LedgerClient},
    default_block::DefaultBlock,
    error::GatewayError,
    receipt::{build_block, build_receipt, build_transaction},
    types::{EthArgs, RpcBlock, RpcTransaction, TxReceipt},
};

/// The RPC surface served to Ethereum clients.
///
/// Methods are registered under the `eth` namespace with `web3_`/`net_` and
/// dotted-form aliases, so dispatch is namespace-agnostic; unknown methods
/// fall through to the framework's method-not-found error.
#[rpc(server, namespace = "eth")]
pub trait EthApi {
    /// Returns a contract's runtime bytecode.
    #[method(name = "getCode", aliases = ["web3_getCode", "net_getCode", "eth.getCode"])]
    async fn get_code(&self, address: String) -> RpcResult<String>;

    /// Simulates a contract call and returns its output.
    #[method(name = "call", aliases = ["web3_call", "net_call", "eth.call"])]
    async fn call(&self, args: EthArgs, block: Option<String>) -> RpcResult<String>;

    /// Submits a transaction and returns the ledger transaction id.
    #[method(name = "sendTransaction", aliases = ["web3_sendTransaction", "net_sendTransaction", "eth.sendTransaction"])]
    async fn send_transaction(&self, args: EthArgs) -> RpcResult<String>;

    /// Returns the receipt of a committed transaction.
    #[method(name = "getTransactionReceipt", aliases = ["web3_getTransactionReceipt", "net_getTransactionReceipt", "eth.getTransactionReceipt"])]
    async fn get_transaction_receipt(&self, tx_id: String) -> RpcResult<TxReceipt>;

    /// Returns the caller's account address.
    #[method(name = "accounts", aliases = ["web3_accounts", "net_accounts", "eth.accounts"])]
    async fn accounts(&self) -> RpcResult<Vec<String>>;

    /// Accepts anything and estimates zero: the bridge meters no gas.
    #[method(name = "estimateGas", aliases = ["web3_estimateGas", "net_estimateGas", "eth.estimateGas"])]
    async fn estimate_gas(&self, args: Option<EthArgs>) -> RpcResult<String>;

    /// Accepts anything and returns zero: accounts hold no balance.
    #[method(name = "getBalance", aliases = ["web3_getBalance", "net_getBalance", "eth.getBalance"])]
    async fn get_balance(
        &self,
        address: Option<String>,
        block: Option<String>,
    ) -> RpcResult<String>;

    /// Returns a block by number or tag, with hashes or full transactions.
    #[method(name = "getBlockByNumber", aliases = ["web3_getBlockByNumber", "net_getBlockByNumber", "eth.getBlockByNumber"])]
    async fn get_block_by_number(&self, number: String, full: bool) -> RpcResult<RpcBlock>;

    /// Returns a committed transaction by id.
    #[method(name = "getTransactionByHash", aliases = ["web3_getTransactionByHash", "net_getTransactionByHash", "eth.getTransactionByHash"])]
    async fn get_transaction_by_hash(&self, tx_id: String) -> RpcResult<RpcTransaction>;
}

/// The gateway service: stateless per request, clients shared.
pub struct EthService {
    channel: Arc<dyn ChannelClient>,
    ledger: Arc<dyn LedgerClient>,
    ccid: String,
}

impl EthService {
    /// Creates the service over the given SDK clients and chaincode name.
    pub fn new(
        channel: Arc<dyn ChannelClient>,
        ledger: Arc<dyn LedgerClient>,
        ccid: impl Into<String>,
    ) -> Self {
        Self { channel, ledger, ccid: ccid.into() }
    }

    async fn query(
        &self,
        fcn: &str,
        args: Vec<Vec<u8>>,
    ) -> Result<ChannelResponse, GatewayError> {
        self.channel
            .query(ChannelRequest { chaincode_id: self.ccid.clone(), fcn: fcn.to_string(), args })
            .await
            .map_err(GatewayError::Query)
    }

    async fn block_by_default_block(
        &self,
        block: DefaultBlock,
    ) -> Result<fabevm_ledger::proto::Block, GatewayError> {
        let number = match block {
            DefaultBlock::Latest => {
                let info = self.ledger.query_info().await.map_err(GatewayError::Query)?;
                // Height counts the block being worked on; the newest
                // committed block is one below it.
                info.height.saturating_sub(1)
            }
            DefaultBlock::Earliest => 0,
            DefaultBlock::Pending => return Err(GatewayError::PendingUnsupported),
            DefaultBlock::Number(number) => number,
        };
        self.ledger.query_block(number).await.map_err(GatewayError::Query)
    }
}

#[async_trait]
impl EthApiServer for EthService {
    async fn get_code(&self, address: String) -> RpcResult<String> {
        let stripped = strip_0x(&address);
        let response = self.query("getCode", vec![stripped.as_bytes().to_vec()]).await?;
        Ok(format!("0x{}", String::from_utf8_lossy(&response.payload)))
    }

    async fn call(&self, args: EthArgs, _block: Option<String>) -> RpcResult<String> {
        let response = self
            .query(strip_0x(&args.to), vec![strip_0x(&args.data).as_bytes().to_vec()])
            .await?;
        // Clients expect the prefix on responses.
        Ok(format!("0x{}", hex::encode(&response.payload)))
    }

    async fn send_transaction(&self, args: EthArgs) -> RpcResult<String> {
        let to = if args.to.is_empty() { ZERO_ADDRESS_HEX } else { strip_0x(&args.to) };
        let response = self
            .channel
            .execute(ChannelRequest {
                chaincode_id: self.ccid.clone(),
                fcn: to.to_string(),
                args: vec![strip_0x(&args.data).as_bytes().to_vec()],
            })
            .await
            .map_err(GatewayError::Execute)?;
        Ok(response.transaction_id)
    }

    async fn get_transaction_receipt(&self, tx_id: String) -> RpcResult<TxReceipt> {
        let stripped = strip_0x(&tx_id).to_string();

        let transaction = self
            .ledger
            .query_transaction(&stripped)
            .await
            .map_err(GatewayError::Query)?;
        let envelope =
            transaction.transaction_envelope.ok_or(GatewayError::MissingEnvelope)?;
        let payload = Payload::decode(envelope.payload.as_slice())
            .map_err(|err| GatewayError::Decode(err.into()))?;
        let details = transaction_details(&payload).map_err(GatewayError::Decode)?;

        let block =
            self.ledger.query_block_by_txid(&stripped).await.map_err(GatewayError::Query)?;

        Ok(build_receipt(&stripped, &details, &block)?)
    }

    async fn accounts(&self) -> RpcResult<Vec<String>> {
        let response = self.query("account", Vec::new()).await?;
        let address = String::from_utf8_lossy(&response.payload).to_lowercase();
        Ok(vec![format!("0x{address}")])
    }

    async fn estimate_gas(&self, _args: Option<EthArgs>) -> RpcResult<String> {
        debug!("estimateGas called");
        Ok("0x0".to_string())
    }

    async fn get_balance(
        &self,
        _address: Option<String>,
        _block: Option<String>,
    ) -> RpcResult<String> {
        debug!("getBalance called");
        Ok("0x0".to_string())
    }

    async fn get_block_by_number(&self, number: String, full: bool) -> RpcResult<RpcBlock> {
        let tag: DefaultBlock = strip_0x(&number).parse()?;
        let block = self.block_by_default_block(tag).await?;
        Ok(build_block(&block, full)?)
    }

    async fn get_transaction_by_hash(&self, tx_id: String) -> RpcResult<RpcTransaction> {
        if tx_id.is_empty() {
            return Err(GatewayError::EmptyTransactionId.into());
        }
        let stripped = strip_0x(&tx_id).to_string();
        debug!(tx_id = %stripped, "getTransactionByHash");

        let block =
            self.ledger.query_block_by_txid(&stripped).await.map_err(GatewayError::Query)?;
        Ok(build_transaction(&stripped, &block)?)
    }
}
