//! The adapter that drives the black-box EVM for one invocation.

use alloy_primitives::{Address, Bytes, Log, B256, U256};
use fabevm_ledger::LogEvent;
use revm::{
    context::{
        result::{EVMError, ExecutionResult, Output, ResultAndState},
        BlockEnv, TxEnv,
    },
    context_interface::block::BlobExcessGasAndPrice,
    primitives::TxKind,
    state::EvmState,
    Context, ExecuteEvm, MainBuilder, MainContext,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    account::{Account, Permissions},
    errors::{EventError, StateError, VmError},
    events::EventManager,
    state::StateManager,
    stub::LedgerStub,
};

/// Fixed gas ceiling for every invocation.
///
/// Gas is not metered or reported by the bridge; the ceiling exists to bound
/// runaway loops. The VM meters the real EVM schedule underneath, so the
/// ceiling is sized for any reasonable contract rather than as a budget.
pub(crate) const GAS_CEILING: u64 = 10_000_000;

/// Parameters of one VM execution. The transaction origin is always the
/// caller; the bridge does not support nested ledger transactions.
#[derive(Debug)]
pub(crate) struct CallParams {
    /// The caller derived from the creator identity.
    pub caller: Address,
    /// The callee account, or `None` to deploy.
    pub callee: Option<Address>,
    /// Input data; for a deploy this is also the init code.
    pub input: Bytes,
    /// The invocation nonce derived from caller and transaction id.
    pub nonce: u64,
}

/// What an execution produced.
#[derive(Debug)]
pub(crate) struct VmOutcome {
    /// The VM's output bytes: call return data, or runtime code for a deploy.
    pub output: Bytes,
    /// The created contract address, for deploys.
    #[allow(dead_code)]
    pub created: Option<Address>,
}

/// Runs the VM once against the state view and forwards its effects.
///
/// On success the resulting state delta is written back through the state
/// view and every emitted log is published to the event buffer. On revert or
/// halt nothing is written and the invocation fails.
pub(crate) fn execute<S: LedgerStub>(
    state: &mut StateManager<'_, S>,
    sink: &mut EventManager<'_, S>,
    params: CallParams,
) -> Result<VmOutcome, VmError> {
    let caller = params.caller;
    let kind = match params.callee {
        Some(callee) => TxKind::Call(callee),
        None => TxKind::Create,
    };

    let tx = TxEnv {
        tx_type: 0,
        caller,
        gas_limit: GAS_CEILING,
        gas_price: 0,
        kind,
        value: U256::ZERO,
        data: params.input,
        nonce: params.nonce,
        chain_id: None,
        ..Default::default()
    };

    // Pinned block context: the ledger has no block view a VM may observe.
    let block = BlockEnv {
        number: 0,
        beneficiary: Address::ZERO,
        timestamp: 0,
        gas_limit: GAS_CEILING,
        basefee: 0,
        difficulty: U256::ZERO,
        prevrandao: Some(B256::ZERO),
        blob_excess_gas_and_price: Some(BlobExcessGasAndPrice::new(0, false)),
    };

    let db = crate::db::ExecutionDb::new(&mut *state, caller, params.nonce);
    let mut evm = Context::mainnet()
        .with_db(db)
        .with_block(block)
        .modify_cfg_chained(|cfg| cfg.disable_nonce_check = true)
        .build_mainnet();

    let outcome = evm.transact(tx).map_err(|err| match err {
        EVMError::Database(err) => VmError::State(err),
        other => VmError::Evm(other.to_string()),
    });
    drop(evm);
    let ResultAndState { result, state: delta } = outcome?;

    match result {
        ExecutionResult::Success { logs, output, gas_used, .. } => {
            debug!(gas_used, logs = logs.len(), "vm execution succeeded");
            apply_delta(state, caller, delta)?;
            publish_logs(sink, &logs)?;
            match output {
                Output::Call(bytes) => Ok(VmOutcome { output: bytes, created: None }),
                Output::Create(bytes, address) => {
                    let created = address.ok_or(VmError::MissingCreateAddress)?;
                    Ok(VmOutcome { output: bytes, created: Some(created) })
                }
            }
        }
        ExecutionResult::Revert { output, .. } => Err(VmError::Reverted { output }),
        ExecutionResult::Halt { reason, .. } => {
            Err(VmError::Halted { reason: format!("{reason:?}") })
        }
    }
}

/// Writes a successful execution's state delta back to the ledger.
///
/// The caller's pseudo-account is never persisted, and accounts the VM merely
/// touched without leaving code, nonce, or storage behind are skipped.
/// Deployed bytecode lands on the account record exactly once, when the
/// account is created.
fn apply_delta<S: LedgerStub>(
    state: &mut StateManager<'_, S>,
    caller: Address,
    delta: EvmState,
) -> Result<(), StateError> {
    for (address, entry) in delta {
        if address == caller || !entry.is_touched() {
            continue;
        }
        if entry.is_selfdestructed() {
            state.remove_account(address)?;
            continue;
        }

        let code = entry
            .info
            .code
            .as_ref()
            .map(|code| code.original_bytes())
            .unwrap_or_default();
        let changed: Vec<(U256, U256)> = entry
            .storage
            .iter()
            .filter(|(_, slot)| slot.is_changed())
            .map(|(key, slot)| (*key, slot.present_value))
            .collect();

        let existing = state.get_account(address)?;
        if existing.is_none() && code.is_empty() && changed.is_empty() && entry.info.nonce == 0 {
            continue;
        }

        let mut record =
            existing.unwrap_or_else(|| Account::new(address, Permissions::CONTRACT));
        if record.code.is_empty() && !code.is_empty() {
            record.code = code;
        }
        record.nonce = entry.info.nonce;
        state.update_account(&record)?;

        for (key, value) in changed {
            state.set_storage(address, B256::from(key), B256::from(value))?;
        }
    }
    Ok(())
}

/// Forwards the VM's logs into the event buffer, tagged as log events.
fn publish_logs<S: LedgerStub>(
    sink: &mut EventManager<'_, S>,
    logs: &[Log],
) -> Result<(), EventError> {
    for log in logs {
        let event = LogEvent {
            address: log.address,
            topics: log.data.topics().to_vec(),
            data: log.data.data.clone(),
            height: 0,
        };
        let mut tags = Map::new();
        tags.insert(
            "EventID".to_string(),
            Value::String(format!("Log/{:x}", log.address)),
        );
        let message = serde_json::to_value(&event).map_err(EventError::Encode)?;
        sink.publish(message, &tags)?;
    }
    Ok(())
}
