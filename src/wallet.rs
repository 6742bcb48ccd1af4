use std::sync::Arc;

use alloy::primitives::{Address, B256};
use alloy::signers::local::coins_bip39::{English, Mnemonic};
use displaydoc::Display;
use rand::thread_rng;
use thiserror::Error;

use crate::network::Network;
use crate::signers::{ExternalAccount, InMemorySigner, TransactionSigner};

/// Represents errors that can occur while constructing a wallet identity.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Invalid mnemonic phrase: {0}
    InvalidMnemonic(String),
    /// Invalid private key material: {0}
    InvalidPrivateKey(String),
    /// Account handle is not a capable signer
    UnsupportedAccount,
}

/// An immutable signing identity bound to a network endpoint.
///
/// The key material lives inside the signer and is never exposed after
/// construction. Rebinding to another network yields a new value and leaves
/// the original untouched, so no two call sites can disagree about which
/// network an identity targets.
#[derive(Clone)]
pub struct Wallet {
    signer: Arc<dyn TransactionSigner>,
    network: Network,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

impl Wallet {
    /// Creates an identity with a fresh random key.
    /// Aborts only if the operating system entropy source fails.
    pub fn random(network: Network) -> Self {
        Self {
            signer: Arc::new(InMemorySigner::generate()),
            network,
        }
    }

    /// Imports an identity from a BIP-39 mnemonic phrase.
    /// The standard Ethereum derivation path is used unless `path` is given.
    pub fn from_mnemonic(phrase: &str, path: Option<&str>, network: Network) -> Result<Self, Error> {
        Ok(Self {
            signer: Arc::new(InMemorySigner::from_mnemonic(phrase, path)?),
            network,
        })
    }

    /// Imports an identity from raw 32-byte private key material.
    pub fn from_private_key(bytes: &B256, network: Network) -> Result<Self, Error> {
        Ok(Self {
            signer: Arc::new(InMemorySigner::from_bytes(bytes)?),
            network,
        })
    }

    /// Wraps an externally managed account handle.
    /// Fails when the handle does not carry the capable-signer marker.
    pub fn from_external(
        account: impl ExternalAccount + 'static,
        network: Network,
    ) -> Result<Self, Error> {
        if !account.is_signer() {
            return Err(Error::UnsupportedAccount);
        }
        Ok(Self {
            signer: Arc::new(account),
            network,
        })
    }

    /// The address of this identity.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The network endpoint this identity targets.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The signer backing this identity.
    pub fn signer(&self) -> Arc<dyn TransactionSigner> {
        self.signer.clone()
    }

    /// Returns a new identity bound to `network`; this one is unchanged.
    pub fn rebind(&self, network: Network) -> Self {
        Self {
            signer: self.signer.clone(),
            network,
        }
    }
}

/// Generates a fresh 12-word BIP-39 mnemonic phrase.
pub fn generate_mnemonic() -> Result<String, Error> {
    let mnemonic = Mnemonic::<English>::new_with_count(&mut thread_rng(), 12)
        .map_err(|e| Error::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_phrase())
}
