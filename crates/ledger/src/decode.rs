//! Unwrapping of the ledger's nested transaction envelopes.
//!
//! The layering is `Envelope` → `Payload` → `Transaction` →
//! `TransactionAction` → `ChaincodeActionPayload` →
//! `{ChaincodeProposalPayload, ProposalResponsePayload → ChaincodeAction}`.
//! The helpers here unwrap exactly that path and interpret the recovered
//! invocation arguments.

use prost::Message;
use thiserror::Error;

use crate::proto::{
    ChaincodeAction, ChaincodeActionPayload, ChaincodeEvent, ChaincodeInvocationSpec,
    ChaincodeProposalPayload, ChannelHeader, Envelope, Payload, ProposalResponsePayload,
    Transaction, TransactionAction,
};

/// Failures while unwrapping transaction envelopes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A protobuf layer failed to unmarshal.
    #[error("failed to unmarshal transaction: {0}")]
    Protobuf(#[from] prost::DecodeError),
    /// The payload carried no header.
    #[error("transaction payload is missing its header")]
    MissingHeader,
    /// The transaction carried no actions.
    #[error("transaction has no actions")]
    NoActions,
    /// The chaincode action payload carried no endorsed action.
    #[error("no payload in chaincode action payload")]
    MissingAction,
    /// The proposal response payload carried no extension.
    #[error("response payload is missing extension")]
    MissingExtension,
    /// The chaincode invocation spec carried no input.
    #[error("chaincode spec is missing its input")]
    MissingInput,
}

/// A transaction envelope unwrapped one level: its channel header and payload.
#[derive(Debug, Clone)]
pub struct DecodedEnvelope {
    /// The channel header, carrying the transaction id.
    pub channel_header: ChannelHeader,
    /// The payload, carrying the serialized transaction.
    pub payload: Payload,
}

/// Unmarshals a serialized [`Envelope`] down to its channel header and payload.
pub fn decode_envelope(bytes: &[u8]) -> Result<DecodedEnvelope, DecodeError> {
    let envelope = Envelope::decode(bytes)?;
    let payload = Payload::decode(envelope.payload.as_slice())?;
    let header = payload.header.as_ref().ok_or(DecodeError::MissingHeader)?;
    let channel_header = ChannelHeader::decode(header.channel_header.as_slice())?;
    Ok(DecodedEnvelope { channel_header, payload })
}

/// Unwraps a [`TransactionAction`] into its proposal payload and endorsed
/// chaincode action.
pub fn endorsed_payloads(
    action: &TransactionAction,
) -> Result<(ChaincodeProposalPayload, ChaincodeAction), DecodeError> {
    let cc_payload = ChaincodeActionPayload::decode(action.payload.as_slice())?;
    let endorsed = cc_payload.action.as_ref().ok_or(DecodeError::MissingAction)?;
    if endorsed.proposal_response_payload.is_empty() {
        return Err(DecodeError::MissingAction);
    }

    let proposal_payload =
        ChaincodeProposalPayload::decode(cc_payload.chaincode_proposal_payload.as_slice())?;

    let response_payload =
        ProposalResponsePayload::decode(endorsed.proposal_response_payload.as_slice())?;
    if response_payload.extension.is_empty() {
        return Err(DecodeError::MissingExtension);
    }

    let chaincode_action = ChaincodeAction::decode(response_payload.extension.as_slice())?;
    Ok((proposal_payload, chaincode_action))
}

/// What the bridge can recover about an invocation from a committed payload.
///
/// `account` and `getCode` transactions carry no callee or input; for the
/// deploy/call shape, `callee` is the target address hex and `input` the
/// input data hex, both exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct TransactionDetails {
    /// Hex of the callee address, when the invocation had one.
    pub callee: Option<String>,
    /// Hex of the input data, when the invocation had one.
    pub input: Option<String>,
    /// The endorsed chaincode action, when the invocation had a callee.
    pub action: Option<ChaincodeAction>,
}

/// Recovers the invocation arguments and endorsed action from a transaction
/// payload.
///
/// The argument list is interpreted by its first entry: a lone `account`, a
/// `getCode` lookup, or the standard `(callee hex, input hex)` pair. Only the
/// last shape yields details; anything else decodes to an empty
/// [`TransactionDetails`].
pub fn transaction_details(payload: &Payload) -> Result<TransactionDetails, DecodeError> {
    let transaction = Transaction::decode(payload.data.as_slice())?;
    let action = transaction.actions.first().ok_or(DecodeError::NoActions)?;
    let (proposal_payload, chaincode_action) = endorsed_payloads(action)?;

    let spec = ChaincodeInvocationSpec::decode(proposal_payload.input.as_slice())?;
    let args = spec
        .chaincode_spec
        .and_then(|spec| spec.input)
        .ok_or(DecodeError::MissingInput)?
        .args;

    if (args.len() == 1 && args[0] == b"account") || args.len() != 2 {
        return Ok(TransactionDetails::default());
    }
    if args[0] == b"getCode" {
        return Ok(TransactionDetails::default());
    }

    Ok(TransactionDetails {
        callee: Some(String::from_utf8_lossy(&args[0]).into_owned()),
        input: Some(String::from_utf8_lossy(&args[1]).into_owned()),
        action: Some(chaincode_action),
    })
}

/// Unmarshals the chaincode event attached to an endorsed action.
pub fn chaincode_event(action: &ChaincodeAction) -> Result<ChaincodeEvent, DecodeError> {
    Ok(ChaincodeEvent::decode(action.events.as_slice())?)
}
