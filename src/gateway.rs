use std::sync::Arc;

use alloy::primitives::Address;
use bon::bon;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact;
use crate::calls::ContentCall;
use crate::eth::{CallOutcome, EthInvoker, RemoteInvoker};
use crate::validate;
use crate::wallet::Wallet;

/// Represents errors surfaced by gateway operations.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// {0}
    Validation(#[from] validate::Error),
    /// Remote call failed: {0}
    RemoteCallFailed(String),
    /// No known deployment for chain {0}
    UnknownDeployment(u64),
}

/// Client-supplied hints for transaction fee bidding.
/// When omitted, gas is estimated and the node's gas price is used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeOptions {
    /// Gas price in wei.
    pub gas_price: u128,
    /// Gas limit ceiling.
    pub gas_limit: u64,
}

/// A bound, address-scoped façade for one deployed Content contract.
///
/// Immutable after construction, so concurrent calls against a shared
/// gateway are safe: each call validates its arguments locally, then issues
/// exactly one remote invocation and returns the decoded result or receipt.
#[derive(Clone)]
pub struct ContentGateway {
    contract_address: Address,
    invoker: Arc<dyn RemoteInvoker>,
}

#[bon]
impl ContentGateway {
    /// Creates a new builder for `ContentGateway` with the given wallet and
    /// contract address.
    #[builder]
    pub fn builder(wallet: Wallet, contract_address: Address) -> Self {
        Self::new(&wallet, contract_address)
    }

    /// Binds a gateway to `contract_address`, signing and sending through
    /// `wallet`.
    pub fn new(wallet: &Wallet, contract_address: Address) -> Self {
        Self {
            contract_address,
            invoker: Arc::new(EthInvoker::new(wallet, contract_address)),
        }
    }

    /// Binds a gateway to the bundled deployment for the wallet's chain.
    /// Fails when the chain has no known deployment.
    pub fn deployed(wallet: &Wallet) -> Result<Self, Error> {
        let chain_id = wallet.network().chain_id();
        let address =
            artifact::deployment(chain_id).ok_or(Error::UnknownDeployment(chain_id))?;
        Ok(Self::new(wallet, address))
    }

    /// Binds a gateway to a custom invocation backend.
    pub fn with_invoker(contract_address: Address, invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self {
            contract_address,
            invoker,
        }
    }

    /// The deployed contract address this gateway targets.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Dispatches one operation.
    ///
    /// Every declared parameter is validated in positional order before
    /// anything touches the network; the first invalid argument aborts the
    /// call. Word-typed parameters are then sanitized into their fixed-width
    /// encoding, and exactly one remote invocation is issued.
    pub async fn call(
        &self,
        call: ContentCall,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        let params = call.params();
        for p in &params {
            validate::check(p.kind, p.name, p.value)?;
        }

        let mut args = Vec::with_capacity(params.len());
        for p in &params {
            args.push(validate::encode(p.kind, p.name, p.value)?);
        }

        log::debug!(
            "Dispatching {} with {} argument(s)",
            call.operation(),
            args.len()
        );
        self.invoker.invoke(call.operation(), args, fees).await
    }

    /// Records a new content item on the chain.
    ///
    /// `token_uri` points at the pinned content file, `pricing_model` is one
    /// of the platform pricing categories (PPV, AD, FREE), `staked_token`
    /// and `staked` describe the stake backing content verification, and
    /// `shards` with `key_quorum` describe the split encryption key.
    /// Returns the id assigned to the submitted content.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_content(
        &self,
        token_uri: &str,
        pricing_model: &str,
        price: &str,
        staked_token: &str,
        staked: &str,
        shards: &str,
        key_quorum: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::CreateContent {
                token_uri: token_uri.into(),
                pricing_model: pricing_model.into(),
                price: price.into(),
                staked_token: staked_token.into(),
                staked: staked.into(),
                shards: shards.into(),
                key_quorum: key_quorum.into(),
            },
            fees,
        )
        .await
    }

    /// Returns the number of content items created across all creators.
    pub async fn total_supply(&self, fees: Option<FeeOptions>) -> Result<CallOutcome, Error> {
        self.call(ContentCall::TotalSupply, fees).await
    }

    /// Returns the content id at `index` in the full list of items.
    pub async fn token_by_index(
        &self,
        index: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::TokenByIndex {
                index: index.into(),
            },
            fees,
        )
        .await
    }

    /// Returns the content id at `index` among the items created by `owner`.
    pub async fn token_of_owner_by_index(
        &self,
        owner: &str,
        index: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::TokenOfOwnerByIndex {
                owner: owner.into(),
                index: index.into(),
            },
            fees,
        )
        .await
    }

    /// Removes a content item from a category.
    pub async fn remove_content(
        &self,
        content_id: &str,
        category: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::RemoveContent {
                content_id: content_id.into(),
                category: category.into(),
            },
            fees,
        )
        .await
    }

    /// Registers a digital asset token as supported for staking.
    /// Called by the contract deployer.
    pub async fn support_tokens(
        &self,
        token: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::SupportTokens {
                token: token.into(),
            },
            fees,
        )
        .await
    }

    /// Checks whether a digital asset token is supported for staking.
    pub async fn check_support_for_token(
        &self,
        token: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::CheckSupportForToken {
                token: token.into(),
            },
            fees,
        )
        .await
    }

    /// Stakes an amount of a supported token for content verification.
    pub async fn stake(
        &self,
        token: &str,
        amount: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::Stake {
                token: token.into(),
                amount: amount.into(),
            },
            fees,
        )
        .await
    }

    /// Returns likes, shares and subscription counts for a content item.
    pub async fn view_performance(
        &self,
        content_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::ViewPerformance {
                content_id: content_id.into(),
            },
            fees,
        )
        .await
    }

    /// Returns the content ids an ad has been delivered on.
    pub async fn view_delivery(
        &self,
        ad_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::ViewDelivery {
                ad_id: ad_id.into(),
            },
            fees,
        )
        .await
    }

    /// Returns the content ids belonging to a category.
    pub async fn fetch_content_by_category(
        &self,
        category: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::FetchContentByCategory {
                category: category.into(),
            },
            fees,
        )
        .await
    }

    /// Subscribes the caller to a content item.
    pub async fn subscribe(
        &self,
        content_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::Subscribe {
                content_id: content_id.into(),
            },
            fees,
        )
        .await
    }

    /// Requests the key shards needed to view a content item.
    /// The viewing is recorded on chain.
    pub async fn view_content(
        &self,
        content_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::ViewContent {
                content_id: content_id.into(),
            },
            fees,
        )
        .await
    }

    /// Requests the key shards needed to decrypt an ad delivered on a
    /// content item. The delivery is recorded on chain.
    pub async fn view_ad(
        &self,
        ad_id: &str,
        content_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::ViewAd {
                ad_id: ad_id.into(),
                content_id: content_id.into(),
            },
            fees,
        )
        .await
    }

    /// Shares a content item with another user on the system.
    pub async fn share_content(
        &self,
        shared_with: &str,
        content_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::ShareContent {
                shared_with: shared_with.into(),
                content_id: content_id.into(),
            },
            fees,
        )
        .await
    }

    /// Sets the standard viewing window, in milliseconds, for content on
    /// the system. Called by the contract deployer.
    pub async fn set_license_term(
        &self,
        time: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(ContentCall::SetLicenseTerm { time: time.into() }, fees)
            .await
    }

    /// Returns the earnings accrued to the caller for a content category.
    pub async fn fetch_earnings_by_category(
        &self,
        category: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::FetchEarningsByCategory {
                category: category.into(),
            },
            fees,
        )
        .await
    }

    /// Returns the earnings accrued for a single content item.
    pub async fn fetch_earnings_for_item(
        &self,
        content_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::FetchEarningsForItem {
                content_id: content_id.into(),
            },
            fees,
        )
        .await
    }

    /// Returns the spend accrued from delivering an ad.
    pub async fn fetch_expenses_for_ad(
        &self,
        ad_id: &str,
        fees: Option<FeeOptions>,
    ) -> Result<CallOutcome, Error> {
        self.call(
            ContentCall::FetchExpensesForAd {
                ad_id: ad_id.into(),
            },
            fees,
        )
        .await
    }
}
