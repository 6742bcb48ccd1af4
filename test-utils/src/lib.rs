use std::sync::Mutex;

use alloy::dyn_abi::DynSolValue;
use async_trait::async_trait;

use content_gateway_sdk::gateway::Error;
use content_gateway_sdk::{CallOutcome, FeeOptions, RemoteInvoker};

/// Initializes test logging. Pass `true` for debug-level output.
pub fn init_logger(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .is_test(true)
        .try_init();
}

/// One invocation recorded by [`EchoInvoker`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// On-chain function name the gateway dispatched.
    pub operation: &'static str,
    /// Encoded argument list, after validation and sanitization.
    pub args: Vec<DynSolValue>,
    /// Fee hints passed through the gateway, if any.
    pub fees: Option<FeeOptions>,
}

/// A stub remote primitive that records every invocation and echoes the
/// argument list back as the decoded result. The call counter lets tests
/// assert that rejected arguments never reach the network layer.
#[derive(Default)]
pub struct EchoInvoker {
    calls: Mutex<Vec<RecordedCall>>,
}

impl EchoInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invocations that reached the remote layer.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded invocations so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteInvoker for EchoInvoker {
    async fn invoke(
        &self,
        operation: &'static str,
        args: Vec<DynSolValue>,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation,
            args: args.clone(),
            fees,
        });
        Ok(CallOutcome::Values(args))
    }
}

/// A stub remote primitive that rejects every invocation with a fixed
/// message, standing in for reverts and transport failures.
pub struct RejectingInvoker {
    message: String,
}

impl RejectingInvoker {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RemoteInvoker for RejectingInvoker {
    async fn invoke(
        &self,
        _operation: &'static str,
        _args: Vec<DynSolValue>,
        _fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        Err(Error::RemoteCallFailed(self.message.clone()))
    }
}
