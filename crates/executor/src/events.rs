//! The per-invocation event buffer.

use fabevm_ledger::{EventRecord, LogEvent};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{errors::EventError, stub::LedgerStub};

/// Collects the VM's log events during one invocation.
///
/// The VM side-channels more than logs through its event sink; only events
/// whose `EventID` tag begins with `Log` are kept, everything else is
/// accepted and dropped. The buffer is flushed at most once, as the
/// transaction's single chaincode event.
#[derive(Debug)]
pub struct EventManager<'a, S: LedgerStub> {
    stub: &'a S,
    buffer: Vec<LogEvent>,
}

impl<'a, S: LedgerStub> EventManager<'a, S> {
    /// Creates an empty buffer over the given host stub.
    pub fn new(stub: &'a S) -> Self {
        Self { stub, buffer: Vec::new() }
    }

    /// Number of buffered log events.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer holds no events.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Offers an event to the buffer.
    ///
    /// `tags` must carry a string `EventID`; the message must be a log event
    /// when the id is `Log`-prefixed. Non-log events return success without
    /// being buffered; they must never fail the transaction.
    pub fn publish(&mut self, message: Value, tags: &Map<String, Value>) -> Result<(), EventError> {
        let event_id = match tags.get("EventID") {
            Some(Value::String(id)) => id.as_str(),
            Some(other) => return Err(EventError::TagTypeMismatch(type_name(other).to_string())),
            None => return Err(EventError::TagTypeMismatch("nothing".to_string())),
        };

        if !event_id.starts_with("Log") {
            debug!(event_id, "dropping non-log event");
            return Ok(());
        }

        let event: LogEvent =
            serde_json::from_value(message).map_err(EventError::MessageTypeMismatch)?;
        self.buffer.push(event);
        Ok(())
    }

    /// Attaches the buffered events to the transaction under `name`.
    ///
    /// A flush of an empty buffer is a no-op. The payload is the stable JSON
    /// event record; `name` must be hex so the host's UTF-8 event marshalling
    /// cannot reject it.
    pub fn flush(&mut self, name: &str) -> Result<(), EventError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let record = EventRecord::new(std::mem::take(&mut self.buffer));
        let payload = serde_json::to_vec(&record).map_err(EventError::Encode)?;
        self.stub.set_event(name, &payload)?;
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
