//! The event-record schema attached to ledger transactions.
//!
//! A single chaincode event carries all log events of one invocation as JSON
//! in the exact nested form `{"payloads":[{"message":{...}}]}`. Both the
//! executor (which writes it) and the gateway (which reads it back into RPC
//! logs) use these types, so the wire shape cannot drift between the two.

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// One log event emitted by the VM during an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Address of the contract that emitted the log.
    pub address: Address,
    /// The indexed 32-byte topics, in emission order.
    pub topics: Vec<B256>,
    /// Opaque log data.
    pub data: Bytes,
    /// Nominal block height; the executor always records 0.
    pub height: u64,
}

/// One entry of an [`EventRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// The wrapped log event.
    pub message: LogEvent,
}

/// The ordered list of log events for a single transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The buffered log events, in emission order.
    pub payloads: Vec<EventPayload>,
}

impl EventRecord {
    /// Wraps a list of log events in the wire shape.
    pub fn new(events: Vec<LogEvent>) -> Self {
        Self { payloads: events.into_iter().map(|message| EventPayload { message }).collect() }
    }

    /// Unwraps the record back into its log events.
    pub fn into_events(self) -> Vec<LogEvent> {
        self.payloads.into_iter().map(|payload| payload.message).collect()
    }
}
