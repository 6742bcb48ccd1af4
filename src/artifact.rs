use std::collections::BTreeMap;
use std::sync::OnceLock;

use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use serde::Deserialize;

/// A deployed instance of the contract on one network.
#[derive(Debug, Clone, Deserialize)]
pub struct Deployment {
    /// The address the contract is deployed at.
    pub address: Address,
}

/// The bundled interface descriptor for the Content contract: the ABI plus
/// the known deployment addresses per network id. A versioned artifact
/// produced by the contract build, consumed here as immutable configuration.
#[derive(Debug, Deserialize)]
pub struct ContractArtifact {
    /// Name of the contract the artifact describes.
    #[serde(rename = "contractName")]
    pub contract_name: String,
    /// The contract ABI.
    pub abi: JsonAbi,
    /// Known deployments, keyed by decimal network id.
    pub networks: BTreeMap<String, Deployment>,
}

static CONTENT: OnceLock<ContractArtifact> = OnceLock::new();

/// The parsed Content contract artifact.
pub fn content_artifact() -> &'static ContractArtifact {
    CONTENT.get_or_init(|| {
        serde_json::from_str(include_str!("../artifacts/Content.json"))
            .expect("bundled Content.json artifact is well-formed")
    })
}

/// The Content contract ABI.
pub fn content_abi() -> &'static JsonAbi {
    &content_artifact().abi
}

/// The known deployment address of the Content contract on `chain_id`.
pub fn deployment(chain_id: u64) -> Option<Address> {
    content_artifact()
        .networks
        .get(&chain_id.to_string())
        .map(|deployment| deployment.address)
}
