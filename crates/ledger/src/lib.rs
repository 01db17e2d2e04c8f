//! Wire layer shared by the EVM chaincode executor and the JSON-RPC gateway.
//!
//! The permissioned ledger wraps every committed transaction in a stack of
//! nested protobuf envelopes. This crate carries hand-written [`prost`]
//! message types for the slice of that surface the bridge traverses, the
//! decoding helpers that unwrap it, and the JSON event-record schema both
//! sides of the bridge must agree on bit-for-bit.

pub mod proto;

mod decode;
pub use decode::{
    chaincode_event, decode_envelope, endorsed_payloads, transaction_details, DecodeError,
    DecodedEnvelope, TransactionDetails,
};

mod event;
pub use event::{EventPayload, EventRecord, LogEvent};

mod hex;
pub use hex::{strip_0x, ZERO_ADDRESS_HEX};
