//! Protobuf messages for the ledger's transaction and block envelopes.
//!
//! Field numbers follow the ledger's canonical definitions. Only the fields
//! the bridge reads are declared; unknown fields are skipped on decode, and
//! the bridge never re-emits an envelope it did not build itself.

/// A signed wrapper around a serialized [`Payload`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Envelope {
    /// Serialized [`Payload`].
    #[prost(bytes = "vec", tag = "1")]
    pub payload: Vec<u8>,
    /// Creator signature over the payload bytes.
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

/// The content of an [`Envelope`]: a header plus type-dependent data.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Payload {
    /// Header describing the channel and transaction.
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    /// For endorser transactions, a serialized [`Transaction`].
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

/// Paired channel and signature headers, both serialized.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
    /// Serialized [`ChannelHeader`].
    #[prost(bytes = "vec", tag = "1")]
    pub channel_header: Vec<u8>,
    /// Serialized signature header (creator identity + nonce).
    #[prost(bytes = "vec", tag = "2")]
    pub signature_header: Vec<u8>,
}

/// Channel-scoped metadata for a transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelHeader {
    /// Message type (endorser transactions are type 3).
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    /// Header version.
    #[prost(int32, tag = "2")]
    pub version: i32,
    /// Channel this transaction was committed on.
    #[prost(string, tag = "4")]
    pub channel_id: String,
    /// The ledger transaction id, unique per channel.
    #[prost(string, tag = "5")]
    pub tx_id: String,
    /// Epoch in which the message was generated.
    #[prost(uint64, tag = "6")]
    pub epoch: u64,
}

/// An ordered ledger block.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
    /// Block header.
    #[prost(message, optional, tag = "1")]
    pub header: Option<BlockHeader>,
    /// Block data: one serialized [`Envelope`] per transaction.
    #[prost(message, optional, tag = "2")]
    pub data: Option<BlockData>,
}

/// Number, previous hash, and data hash of a block.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockHeader {
    /// Position of the block in the chain.
    #[prost(uint64, tag = "1")]
    pub number: u64,
    /// Hash of the previous block header.
    #[prost(bytes = "vec", tag = "2")]
    pub previous_hash: Vec<u8>,
    /// Hash over the block's data list.
    #[prost(bytes = "vec", tag = "3")]
    pub data_hash: Vec<u8>,
}

/// The ordered list of serialized transaction envelopes in a block.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockData {
    /// Serialized [`Envelope`]s, in commit order.
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub data: Vec<Vec<u8>>,
}

/// Chain height and current hashes, as returned by the ledger's info query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockchainInfo {
    /// Current chain height (number of blocks).
    #[prost(uint64, tag = "1")]
    pub height: u64,
    /// Hash of the newest block.
    #[prost(bytes = "vec", tag = "2")]
    pub current_block_hash: Vec<u8>,
    /// Hash of the block before the newest one.
    #[prost(bytes = "vec", tag = "3")]
    pub previous_block_hash: Vec<u8>,
}

/// The action list of an endorser transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    /// The actions, each carrying a serialized [`ChaincodeActionPayload`].
    #[prost(message, repeated, tag = "1")]
    pub actions: Vec<TransactionAction>,
}

/// One action of a [`Transaction`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionAction {
    /// Serialized signature header of the action's creator.
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    /// Serialized [`ChaincodeActionPayload`].
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
}

/// The proposal and its endorsed result for a chaincode action.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeActionPayload {
    /// Serialized [`ChaincodeProposalPayload`] the endorsers signed over.
    #[prost(bytes = "vec", tag = "1")]
    pub chaincode_proposal_payload: Vec<u8>,
    /// The endorsed action.
    #[prost(message, optional, tag = "2")]
    pub action: Option<ChaincodeEndorsedAction>,
}

/// The endorsements over a proposal response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeEndorsedAction {
    /// Serialized [`ProposalResponsePayload`].
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_response_payload: Vec<u8>,
}

/// The payload an endorser signed: a proposal hash plus an extension.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProposalResponsePayload {
    /// Hash binding the response to its proposal.
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_hash: Vec<u8>,
    /// Serialized [`ChaincodeAction`].
    #[prost(bytes = "vec", tag = "2")]
    pub extension: Vec<u8>,
}

/// The effects of a chaincode invocation: result, events, and response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeAction {
    /// Serialized read/write set.
    #[prost(bytes = "vec", tag = "1")]
    pub results: Vec<u8>,
    /// Serialized [`ChaincodeEvent`], empty when the invocation emitted none.
    #[prost(bytes = "vec", tag = "2")]
    pub events: Vec<u8>,
    /// The chaincode's response.
    #[prost(message, optional, tag = "3")]
    pub response: Option<Response>,
}

/// Status, message, and payload returned by a chaincode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    /// Status code, following HTTP conventions (200 = OK).
    #[prost(int32, tag = "1")]
    pub status: i32,
    /// Human-readable message.
    #[prost(string, tag = "2")]
    pub message: String,
    /// The chaincode's return payload.
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

/// The single event a chaincode may attach to its transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeEvent {
    /// Name of the chaincode that emitted the event.
    #[prost(string, tag = "1")]
    pub chaincode_id: String,
    /// Transaction the event belongs to.
    #[prost(string, tag = "2")]
    pub tx_id: String,
    /// Event name; must be valid UTF-8.
    #[prost(string, tag = "3")]
    pub event_name: String,
    /// Opaque event payload.
    #[prost(bytes = "vec", tag = "4")]
    pub payload: Vec<u8>,
}

/// The invocation spec recovered from a chaincode proposal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeInvocationSpec {
    /// The chaincode spec carrying the target and arguments.
    #[prost(message, optional, tag = "1")]
    pub chaincode_spec: Option<ChaincodeSpec>,
}

/// Identifies a chaincode and the arguments it was invoked with.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeSpec {
    /// Chaincode language type.
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    /// The target chaincode.
    #[prost(message, optional, tag = "2")]
    pub chaincode_id: Option<ChaincodeId>,
    /// The invocation arguments.
    #[prost(message, optional, tag = "3")]
    pub input: Option<ChaincodeInput>,
}

/// Path, name, and version of a chaincode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeId {
    /// Install path.
    #[prost(string, tag = "1")]
    pub path: String,
    /// Chaincode name.
    #[prost(string, tag = "2")]
    pub name: String,
    /// Chaincode version.
    #[prost(string, tag = "3")]
    pub version: String,
}

/// The ordered argument byte arrays of an invocation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeInput {
    /// Arguments; the first entry is the invoked function.
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub args: Vec<Vec<u8>>,
}

/// The proposal payload carried inside a [`ChaincodeActionPayload`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeProposalPayload {
    /// Serialized [`ChaincodeInvocationSpec`].
    #[prost(bytes = "vec", tag = "1")]
    pub input: Vec<u8>,
}

/// A committed transaction envelope plus its validation code.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProcessedTransaction {
    /// The committed envelope.
    #[prost(message, optional, tag = "1")]
    pub transaction_envelope: Option<Envelope>,
    /// Validation result assigned by the committer (0 = valid).
    #[prost(int32, tag = "2")]
    pub validation_code: i32,
}

/// A creator identity: the MSP it belongs to and its PEM certificate.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SerializedIdentity {
    /// Identifier of the membership service provider.
    #[prost(string, tag = "1")]
    pub mspid: String,
    /// PEM-encoded X.509 certificate.
    #[prost(bytes = "vec", tag = "2")]
    pub id_bytes: Vec<u8>,
}
