use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use url::Url;

/// A network endpoint a wallet or gateway targets.
/// Pairs the numeric chain ID with the JSON-RPC URL used to reach the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    chain_id: u64,
    rpc_url: Url,
}

impl Network {
    /// Creates a network descriptor from a chain ID and a JSON-RPC URL.
    pub fn new(chain_id: u64, rpc_url: Url) -> Self {
        Self { chain_id, rpc_url }
    }

    /// Connects to the endpoint and reads the chain ID from the node.
    pub async fn detect(rpc_url: Url) -> anyhow::Result<Self> {
        let provider = ProviderBuilder::new()
            .connect_http(rpc_url.clone())
            .erased();
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get chain ID: {}", e))?;
        Ok(Self { chain_id, rpc_url })
    }

    /// The numeric chain identifier.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The JSON-RPC endpoint URL.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Builds a fresh provider for this endpoint.
    pub fn provider(&self) -> DynProvider {
        ProviderBuilder::new()
            .connect_http(self.rpc_url.clone())
            .erased()
    }
}
