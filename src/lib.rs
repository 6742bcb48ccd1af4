//! # Content Gateway SDK
//!
//! A Rust SDK for the Content contract family deployed on EVM-compatible
//! networks. The contract records content items, registers staking tokens,
//! tracks ad delivery, subscriptions and sharing, and settles creator
//! earnings; this crate wraps its operations behind a validated,
//! statically-typed call surface.
//!
//! Three pieces cooperate:
//! 1. A [`Wallet`] identity, created from a random key, an imported BIP-39
//!    mnemonic, raw key material, or an externally managed account handle,
//!    and bound to a [`Network`] endpoint. Rebinding an identity to another
//!    network yields a new value and leaves the original untouched.
//! 2. A [`ContentGateway`] bound to one deployed contract address, exposing
//!    one async method per on-chain function. Every call validates its
//!    arguments locally before anything is sent: numeric and address
//!    parameters are shape-checked, and short text destined for a `bytes32`
//!    slot is padded into the fixed-width word the interface expects.
//! 3. The bundled contract artifact carrying the ABI and the known
//!    deployment addresses per network.
//!
//! Exactly one RPC interaction happens per gateway call: an `eth_call` for
//! view functions, or a signed raw transaction plus a receipt wait for
//! state-changing ones. Nothing is retried, batched, or cached.

/// Re-export commonly used types from `alloy`.
pub use alloy::dyn_abi::DynSolValue;
pub use alloy::primitives::{Address, B256, U256};
pub use alloy::signers::Signature;
pub use alloy::signers::local::PrivateKeySigner;
pub use alloy::transports::http::reqwest::Url;

pub use calls::{ContentCall, Param, ParamKind};
pub use eth::{CallOutcome, RemoteInvoker};
pub use gateway::{ContentGateway, FeeOptions};
pub use network::Network;
pub use wallet::{Wallet, generate_mnemonic};

/// Module for the bundled contract interface descriptor.
/// Parses the ABI artifact and resolves known deployment addresses.
pub mod artifact;

/// Module enumerating the contract operation surface.
/// One variant per on-chain function, with its declared parameter signature.
pub mod calls;

/// Module for the remote invocation primitive.
/// Dispatches read-only calls and signed transactions through `alloy`.
pub mod eth;

/// Module for the contract gateway.
/// Validates, sanitizes, and dispatches operation calls.
pub mod gateway;

/// Module for network endpoint descriptors.
pub mod network;

/// Module for signer abstractions.
/// The signing trait, the in-memory key signer, and external account handles.
pub mod signers;

/// Module with utility functions for token amount conversions.
pub mod utils;

/// Module for argument validation and sanitization.
pub mod validate;

/// Module for wallet identities.
/// Factory constructors and network rebinding.
pub mod wallet;
