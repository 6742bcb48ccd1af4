use std::sync::Arc;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, B256, U256};
use anyhow::Result;

use content_gateway_sdk::gateway::Error;
use content_gateway_sdk::validate;
use content_gateway_sdk::{ContentCall, ContentGateway, FeeOptions};
use content_gateway_test_utils::{EchoInvoker, RejectingInvoker, init_logger};

const CONTRACT: Address = Address::new([0x11; 20]);
const TOKEN: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

fn echo_gateway() -> (ContentGateway, Arc<EchoInvoker>) {
    let invoker = Arc::new(EchoInvoker::new());
    let gateway = ContentGateway::with_invoker(CONTRACT, invoker.clone());
    (gateway, invoker)
}

#[tokio::test]
async fn create_content_sanitizes_the_pricing_model() -> Result<()> {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    let outcome = gateway
        .create_content("ipfs://abc", "PPV", "100", TOKEN, "50", "s1,s2,s3", "2", None)
        .await?;

    let values = outcome.values().expect("echo stub returns values");
    assert_eq!(values.len(), 7);
    assert_eq!(values[0], DynSolValue::String("ipfs://abc".into()));
    assert_eq!(
        values[1],
        DynSolValue::FixedBytes(validate::to_bytes32("PPV")?, 32)
    );
    assert_eq!(values[2], DynSolValue::Uint(U256::from(100u64), 256));
    assert_eq!(values[3], DynSolValue::Address(TOKEN.parse()?));
    assert_eq!(values[4], DynSolValue::Uint(U256::from(50u64), 256));
    assert_eq!(values[5], DynSolValue::String("s1,s2,s3".into()));
    assert_eq!(values[6], DynSolValue::Uint(U256::from(2u64), 256));

    let calls = invoker.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, "createContent");
    Ok(())
}

#[tokio::test]
async fn non_numeric_input_never_reaches_the_network() {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    let err = gateway.subscribe("not-a-number", None).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(validate::Error::InvalidArgument {
            name: "contentId",
            ..
        })
    ));
    assert_eq!(invoker.call_count(), 0);
}

#[tokio::test]
async fn malformed_address_is_rejected() {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    let err = gateway.support_tokens("0x1234", None).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(validate::Error::InvalidArgument { name: "token", .. })
    ));
    assert_eq!(invoker.call_count(), 0);
}

#[tokio::test]
async fn the_first_invalid_argument_aborts_the_call() {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    // Both arguments are malformed; the error must name the first declared one.
    let err = gateway
        .share_content("nonsense", "also-nonsense", None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(validate::Error::InvalidArgument {
            name: "sharedWith",
            ..
        })
    ));
    assert_eq!(invoker.call_count(), 0);
}

#[tokio::test]
async fn oversized_category_fails_before_dispatch() {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    let category = "a".repeat(33);
    let err = gateway
        .fetch_content_by_category(&category, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(validate::Error::EncodingOverflow { len: 33, .. })
    ));
    assert_eq!(invoker.call_count(), 0);
}

#[tokio::test]
async fn empty_category_encodes_to_the_zero_word() -> Result<()> {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    let outcome = gateway.fetch_content_by_category("", None).await?;
    let values = outcome.values().expect("echo stub returns values");
    assert_eq!(values[0], DynSolValue::FixedBytes(B256::ZERO, 32));
    assert_eq!(invoker.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn fee_options_are_passed_through() -> Result<()> {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    let fees = FeeOptions {
        gas_price: 2_000_000,
        gas_limit: 300_000,
    };
    gateway.set_license_term("86400000", Some(fees)).await?;

    let calls = invoker.calls();
    assert_eq!(
        calls[0].fees.map(|f| (f.gas_price, f.gas_limit)),
        Some((2_000_000, 300_000))
    );
    Ok(())
}

#[tokio::test]
async fn remote_failure_propagates_verbatim() {
    init_logger(false);
    let invoker = Arc::new(RejectingInvoker::new(
        "execution reverted: insufficient stake",
    ));
    let gateway = ContentGateway::with_invoker(CONTRACT, invoker);

    let err = gateway.total_supply(None).await.unwrap_err();
    match err {
        Error::RemoteCallFailed(message) => {
            assert_eq!(message, "execution reverted: insufficient stake");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn operations_dispatch_under_their_interface_names() -> Result<()> {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    gateway.total_supply(None).await?;
    gateway.token_by_index("0", None).await?;
    gateway.token_of_owner_by_index(TOKEN, "3", None).await?;
    gateway.check_support_for_token(TOKEN, None).await?;
    gateway.view_performance("7", None).await?;
    gateway.view_delivery("9", None).await?;
    gateway.view_content("7", None).await?;
    gateway.view_ad("9", "7", None).await?;
    gateway.remove_content("7", "news", None).await?;
    gateway.stake(TOKEN, "10", None).await?;
    gateway.fetch_earnings_by_category("AD", None).await?;
    gateway.fetch_earnings_for_item("7", None).await?;
    gateway.fetch_expenses_for_ad("9", None).await?;

    let names: Vec<_> = invoker.calls().into_iter().map(|c| c.operation).collect();
    assert_eq!(
        names,
        vec![
            "totalSupply",
            "tokenByIndex",
            "tokenOfOwnerByIndex",
            "checkSupportForToken",
            "viewPerformance",
            "viewDelivery",
            "viewContent",
            "viewAd",
            "removeContent",
            "stake",
            "fetchEarningsbyCategory",
            "fetchEarningsForItem",
            "fetchExpensesForAd",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn enum_calls_and_method_wrappers_agree() -> Result<()> {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    gateway
        .call(
            ContentCall::Stake {
                token: TOKEN.into(),
                amount: "10".into(),
            },
            None,
        )
        .await?;

    let calls = invoker.calls();
    assert_eq!(calls[0].operation, "stake");
    assert_eq!(calls[0].args[0], DynSolValue::Address(TOKEN.parse()?));
    assert_eq!(calls[0].args[1], DynSolValue::Uint(U256::from(10u64), 256));
    Ok(())
}

#[tokio::test]
async fn concurrent_calls_share_one_gateway() -> Result<()> {
    init_logger(false);
    let (gateway, invoker) = echo_gateway();

    let task1 = tokio::spawn({
        let gateway = gateway.clone();
        async move { gateway.fetch_content_by_category("news", None).await }
    });
    let task2 = tokio::spawn({
        let gateway = gateway.clone();
        async move { gateway.fetch_content_by_category("sports", None).await }
    });

    let (first, second) = tokio::join!(task1, task2);
    first??;
    second??;
    assert_eq!(invoker.call_count(), 2);
    Ok(())
}
