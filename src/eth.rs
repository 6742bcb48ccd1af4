use std::sync::Arc;

use alloy::consensus::SignableTransaction;
use alloy::dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy::eips::eip2718::Encodable2718;
use alloy::json_abi::{Function, JsonAbi, StateMutability};
use alloy::network::TransactionBuilder;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;

use crate::artifact;
use crate::gateway::{Error, FeeOptions};
use crate::signers::TransactionSigner;
use crate::wallet::Wallet;

/// The result of one remote invocation.
#[derive(Debug)]
pub enum CallOutcome {
    /// Values decoded from a read-only call.
    Values(Vec<DynSolValue>),
    /// Receipt of a mined state-changing transaction.
    Receipt(TransactionReceipt),
}

impl CallOutcome {
    /// The decoded values of a read-only call, if that is what this is.
    pub fn values(&self) -> Option<&[DynSolValue]> {
        match self {
            CallOutcome::Values(values) => Some(values),
            CallOutcome::Receipt(_) => None,
        }
    }

    /// The receipt of a state-changing call, if that is what this is.
    pub fn receipt(&self) -> Option<&TransactionReceipt> {
        match self {
            CallOutcome::Receipt(receipt) => Some(receipt),
            CallOutcome::Values(_) => None,
        }
    }
}

/// The remote invocation primitive: one operation name, an ordered ABI
/// argument list, optional fee hints, exactly one network interaction.
#[async_trait]
pub trait RemoteInvoker: Send + Sync {
    /// Issues one remote call and returns its decoded outcome.
    async fn invoke(
        &self,
        operation: &'static str,
        args: Vec<DynSolValue>,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error>;
}

/// Invoker backed by an alloy provider and the bundled contract interface.
///
/// View and pure functions become a single `eth_call`; everything else is
/// signed through the wallet's signer and submitted as a raw transaction,
/// waiting for the receipt. No retries, no fee bumping.
pub struct EthInvoker {
    provider: DynProvider,
    signer: Arc<dyn TransactionSigner>,
    chain_id: u64,
    contract: Address,
    abi: &'static JsonAbi,
}

impl EthInvoker {
    /// Builds an invoker for `contract`, signing and sending through `wallet`.
    pub fn new(wallet: &Wallet, contract: Address) -> Self {
        Self {
            provider: wallet.network().provider(),
            signer: wallet.signer(),
            chain_id: wallet.network().chain_id(),
            contract,
            abi: artifact::content_abi(),
        }
    }

    fn remote_err(e: impl std::fmt::Display) -> Error {
        Error::RemoteCallFailed(e.to_string())
    }

    /// Runs a read-only call and decodes the outputs.
    async fn read(&self, function: &Function, tx: TransactionRequest) -> Result<CallOutcome, Error> {
        let output = self.provider.call(tx).await.map_err(Self::remote_err)?;
        let values = function
            .abi_decode_output(&output)
            .map_err(Self::remote_err)?;
        Ok(CallOutcome::Values(values))
    }

    /// Signs and submits a state-changing transaction, waiting for the receipt.
    async fn transact(
        &self,
        mut tx: TransactionRequest,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        let from = self.signer.address();
        let nonce = self
            .provider
            .get_transaction_count(from)
            .await
            .map_err(Self::remote_err)?;
        tx = tx.with_from(from).with_chain_id(self.chain_id).with_nonce(nonce);

        tx = match fees {
            Some(fees) => tx.with_gas_limit(fees.gas_limit).with_gas_price(fees.gas_price),
            None => {
                let gas = self
                    .provider
                    .estimate_gas(tx.clone())
                    .await
                    .map_err(|e| Error::RemoteCallFailed(format!("Failed to estimate gas: {}", e)))?;
                let price = self
                    .provider
                    .get_gas_price()
                    .await
                    .map_err(Self::remote_err)?;
                tx.with_gas_limit(gas).with_gas_price(price)
            }
        };

        let unsigned = tx.build_unsigned().map_err(Self::remote_err)?;
        let signature = self
            .signer
            .sign(&unsigned.encoded_for_signing())
            .await
            .map_err(Self::remote_err)?;
        let signed = unsigned.into_signed(signature);

        let mut encoded = Vec::new();
        signed.eip2718_encode(&mut encoded);
        log::trace!(
            "RLP encoded transaction (hash: 0x{:x}): 0x{}",
            signed.hash(),
            hex::encode(&encoded)
        );

        let pending = self
            .provider
            .send_raw_transaction(&encoded)
            .await
            .map_err(|e| Error::RemoteCallFailed(format!("Failed to send transaction: {}", e)))?;
        let receipt = pending.get_receipt().await.map_err(Self::remote_err)?;
        if !receipt.status() {
            return Err(Error::RemoteCallFailed(format!(
                "Transaction {} reverted",
                receipt.transaction_hash
            )));
        }
        Ok(CallOutcome::Receipt(receipt))
    }
}

#[async_trait]
impl RemoteInvoker for EthInvoker {
    async fn invoke(
        &self,
        operation: &'static str,
        args: Vec<DynSolValue>,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        let function = self
            .abi
            .functions
            .get(operation)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| {
                Error::RemoteCallFailed(format!("Unknown contract function {}", operation))
            })?;
        let input = function.abi_encode_input(&args).map_err(Self::remote_err)?;
        let tx = TransactionRequest::default()
            .with_to(self.contract)
            .with_input(input);
        log::debug!("Invoking {} on {}", operation, self.contract);

        match function.state_mutability {
            StateMutability::Pure | StateMutability::View => self.read(function, tx).await,
            StateMutability::NonPayable | StateMutability::Payable => {
                self.transact(tx, fees).await
            }
        }
    }
}
