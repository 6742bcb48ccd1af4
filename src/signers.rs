use alloy::primitives::{Address, B256, keccak256};
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English};
use alloy::signers::{Signature, SignerSync};
use async_trait::async_trait;

use crate::wallet::Error;

/// A signer that can authorize transactions for one address.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// The address the signer signs for.
    fn address(&self) -> Address;

    /// Signs the keccak hash of `data`.
    async fn sign(&self, data: &[u8]) -> anyhow::Result<Signature>;
}

/// A signer that keeps the private key in memory
pub struct InMemorySigner {
    signer: PrivateKeySigner,
}

impl InMemorySigner {
    /// Generates a new random private key
    pub fn generate() -> Self {
        let signer = PrivateKeySigner::random();
        Self { signer }
    }

    /// Derives a key from a BIP-39 mnemonic phrase.
    /// The standard Ethereum derivation path is used unless `path` is given.
    pub fn from_mnemonic(phrase: &str, path: Option<&str>) -> Result<Self, Error> {
        let mut builder = MnemonicBuilder::<English>::default().phrase(phrase);
        if let Some(path) = path {
            builder = builder
                .derivation_path(path)
                .map_err(|e| Error::InvalidMnemonic(e.to_string()))?;
        }
        let signer = builder
            .build()
            .map_err(|e| Error::InvalidMnemonic(e.to_string()))?;
        Ok(Self { signer })
    }

    /// Loads a key from raw 32-byte key material
    pub fn from_bytes(bytes: &B256) -> Result<Self, Error> {
        let signer = PrivateKeySigner::from_bytes(bytes)
            .map_err(|e| Error::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { signer })
    }
}

#[async_trait]
impl TransactionSigner for InMemorySigner {
    fn address(&self) -> Address {
        self.signer.address()
    }

    async fn sign(&self, data: &[u8]) -> anyhow::Result<Signature> {
        let hash = keccak256(data);
        Ok(self.signer.sign_hash_sync(&hash)?)
    }
}

/// An account handle managed outside the SDK, such as a browser-injected or
/// hardware-backed signer. `is_signer` is the capability marker checked when
/// the handle is turned into a wallet identity.
pub trait ExternalAccount: TransactionSigner {
    /// Whether the handle is actually able to sign transactions.
    fn is_signer(&self) -> bool;
}
