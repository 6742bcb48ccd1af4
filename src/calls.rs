/// Semantic type tag declared for a call parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free-form text, passed through as a string.
    Text,
    /// Unsigned 256-bit decimal integer.
    Numeric,
    /// 20-byte chain address.
    Address,
    /// Short text encoded into a fixed 32-byte word.
    Bytes32,
}

/// A declared parameter of an operation: interface name, semantic type, and
/// the raw value supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct Param<'a> {
    /// Parameter name as declared by the contract interface.
    pub name: &'static str,
    /// Declared semantic type.
    pub kind: ParamKind,
    /// Raw caller-supplied value.
    pub value: &'a str,
}

/// One operation of the Content contract, carrying its raw arguments.
///
/// Each variant maps to exactly one on-chain function and declares its own
/// positional parameter signature, so adding or removing an operation is a
/// compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentCall {
    /// Records a new content item: pinned file URI, pricing model (PPV, AD
    /// or FREE), price in platform token units, staked verification token
    /// and amount, encryption key shards, and the quorum of shards needed
    /// to reconstruct the key.
    CreateContent {
        token_uri: String,
        pricing_model: String,
        price: String,
        staked_token: String,
        staked: String,
        shards: String,
        key_quorum: String,
    },
    /// Number of content items across all creators.
    TotalSupply,
    /// Content id at `index` in the full list of items.
    TokenByIndex { index: String },
    /// Content id at `index` among the items created by `owner`.
    TokenOfOwnerByIndex { owner: String, index: String },
    /// Removes a content item from a category.
    RemoveContent { content_id: String, category: String },
    /// Registers a digital asset token as supported for staking.
    SupportTokens { token: String },
    /// Checks whether a digital asset token is supported for staking.
    CheckSupportForToken { token: String },
    /// Stakes an amount of a supported token for content verification.
    Stake { token: String, amount: String },
    /// Likes, shares and subscription counts for a content item.
    ViewPerformance { content_id: String },
    /// Content ids an ad has been delivered on.
    ViewDelivery { ad_id: String },
    /// Content ids belonging to a category.
    FetchContentByCategory { category: String },
    /// Subscribes the caller to a content item.
    Subscribe { content_id: String },
    /// Requests the key shards needed to view a content item.
    ViewContent { content_id: String },
    /// Requests the key shards needed to decrypt an ad delivered on a
    /// content item.
    ViewAd { ad_id: String, content_id: String },
    /// Shares a content item with another user.
    ShareContent {
        shared_with: String,
        content_id: String,
    },
    /// Sets the standard viewing window for content on the system.
    SetLicenseTerm { time: String },
    /// Earnings accrued to the caller for a content category.
    FetchEarningsByCategory { category: String },
    /// Earnings accrued for a single content item.
    FetchEarningsForItem { content_id: String },
    /// Spend accrued from delivering an ad.
    FetchExpensesForAd { ad_id: String },
}

impl ContentCall {
    /// The on-chain function name the operation dispatches to.
    pub fn operation(&self) -> &'static str {
        match self {
            ContentCall::CreateContent { .. } => "createContent",
            ContentCall::TotalSupply => "totalSupply",
            ContentCall::TokenByIndex { .. } => "tokenByIndex",
            ContentCall::TokenOfOwnerByIndex { .. } => "tokenOfOwnerByIndex",
            ContentCall::RemoveContent { .. } => "removeContent",
            ContentCall::SupportTokens { .. } => "supportTokens",
            ContentCall::CheckSupportForToken { .. } => "checkSupportForToken",
            ContentCall::Stake { .. } => "stake",
            ContentCall::ViewPerformance { .. } => "viewPerformance",
            ContentCall::ViewDelivery { .. } => "viewDelivery",
            ContentCall::FetchContentByCategory { .. } => "fetchContentByCategory",
            ContentCall::Subscribe { .. } => "subscribe",
            ContentCall::ViewContent { .. } => "viewContent",
            ContentCall::ViewAd { .. } => "viewAd",
            ContentCall::ShareContent { .. } => "shareContent",
            ContentCall::SetLicenseTerm { .. } => "setLicenseTerm",
            // The deployed interface spells this one with a lowercase `by`.
            ContentCall::FetchEarningsByCategory { .. } => "fetchEarningsbyCategory",
            ContentCall::FetchEarningsForItem { .. } => "fetchEarningsForItem",
            ContentCall::FetchExpensesForAd { .. } => "fetchExpensesForAd",
        }
    }

    /// The declared parameters in positional order.
    pub fn params(&self) -> Vec<Param<'_>> {
        match self {
            ContentCall::CreateContent {
                token_uri,
                pricing_model,
                price,
                staked_token,
                staked,
                shards,
                key_quorum,
            } => vec![
                param("tokenURI", ParamKind::Text, token_uri),
                param("pricingModel", ParamKind::Bytes32, pricing_model),
                param("price", ParamKind::Numeric, price),
                param("stakedToken", ParamKind::Address, staked_token),
                param("staked", ParamKind::Numeric, staked),
                param("shards", ParamKind::Text, shards),
                param("keyquorum", ParamKind::Numeric, key_quorum),
            ],
            ContentCall::TotalSupply => vec![],
            ContentCall::TokenByIndex { index } => {
                vec![param("index", ParamKind::Numeric, index)]
            }
            ContentCall::TokenOfOwnerByIndex { owner, index } => vec![
                param("owner", ParamKind::Address, owner),
                param("index", ParamKind::Numeric, index),
            ],
            ContentCall::RemoveContent {
                content_id,
                category,
            } => vec![
                param("contentId", ParamKind::Numeric, content_id),
                param("category", ParamKind::Bytes32, category),
            ],
            ContentCall::SupportTokens { token } => {
                vec![param("token", ParamKind::Address, token)]
            }
            ContentCall::CheckSupportForToken { token } => {
                vec![param("token", ParamKind::Address, token)]
            }
            ContentCall::Stake { token, amount } => vec![
                param("token", ParamKind::Address, token),
                param("amount", ParamKind::Numeric, amount),
            ],
            ContentCall::ViewPerformance { content_id } => {
                vec![param("contentId", ParamKind::Numeric, content_id)]
            }
            ContentCall::ViewDelivery { ad_id } => {
                vec![param("adId", ParamKind::Numeric, ad_id)]
            }
            ContentCall::FetchContentByCategory { category } => {
                vec![param("category", ParamKind::Bytes32, category)]
            }
            ContentCall::Subscribe { content_id } => {
                vec![param("contentId", ParamKind::Numeric, content_id)]
            }
            ContentCall::ViewContent { content_id } => {
                vec![param("contentId", ParamKind::Numeric, content_id)]
            }
            ContentCall::ViewAd { ad_id, content_id } => vec![
                param("adId", ParamKind::Numeric, ad_id),
                param("contentId", ParamKind::Numeric, content_id),
            ],
            ContentCall::ShareContent {
                shared_with,
                content_id,
            } => vec![
                param("sharedWith", ParamKind::Address, shared_with),
                param("contentId", ParamKind::Numeric, content_id),
            ],
            ContentCall::SetLicenseTerm { time } => {
                vec![param("time", ParamKind::Numeric, time)]
            }
            ContentCall::FetchEarningsByCategory { category } => {
                vec![param("category", ParamKind::Bytes32, category)]
            }
            ContentCall::FetchEarningsForItem { content_id } => {
                vec![param("contentId", ParamKind::Numeric, content_id)]
            }
            ContentCall::FetchExpensesForAd { ad_id } => {
                vec![param("adId", ParamKind::Numeric, ad_id)]
            }
        }
    }
}

fn param<'a>(name: &'static str, kind: ParamKind, value: &'a str) -> Param<'a> {
    Param { name, kind, value }
}
