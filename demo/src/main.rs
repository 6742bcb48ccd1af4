use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use content_gateway_sdk::utils::units_to_tokens;
use content_gateway_sdk::{
    Address, ContentGateway, DynSolValue, FeeOptions, Network, Url, Wallet, generate_mnemonic,
};

#[derive(Parser)]
#[command(about = "Walks the Content gateway surface against a live endpoint")]
struct Cli {
    /// JSON-RPC endpoint of the target network.
    #[arg(long, default_value = "http://localhost:8545")]
    rpc_url: Url,
    /// Contract address; defaults to the bundled deployment for the chain.
    #[arg(long)]
    contract: Option<Address>,
    /// BIP-39 phrase for the signing identity; a random key is used if omitted.
    #[arg(long)]
    mnemonic: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints a fresh 12-word mnemonic phrase.
    GenerateMnemonic,
    /// Prints the number of content items on the contract.
    TotalSupply,
    /// Records a new content item.
    CreateContent {
        token_uri: String,
        staked_token: String,
        #[arg(long, default_value = "PPV")]
        pricing_model: String,
        #[arg(long, default_value = "100")]
        price: String,
        #[arg(long, default_value = "50")]
        staked: String,
        #[arg(long, default_value = "")]
        shards: String,
        #[arg(long, default_value = "2")]
        key_quorum: String,
        #[arg(long)]
        gas_price: Option<u128>,
        #[arg(long)]
        gas_limit: Option<u64>,
    },
    /// Lists content ids for a category.
    FetchContentByCategory { category: String },
    /// Prints the caller's earnings for a category.
    FetchEarningsByCategory { category: String },
    /// Subscribes the signing identity to a content item.
    Subscribe { content_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Command::GenerateMnemonic = cli.command {
        println!("{}", generate_mnemonic()?);
        return Ok(());
    }

    let network = Network::detect(cli.rpc_url.clone()).await?;
    info!("Connected to chain {}", network.chain_id());

    let wallet = match &cli.mnemonic {
        Some(phrase) => Wallet::from_mnemonic(phrase, None, network.clone())?,
        None => Wallet::random(network.clone()),
    };
    info!("Signing as {}", wallet.address());

    let gateway = match cli.contract {
        Some(address) => ContentGateway::builder()
            .wallet(wallet)
            .contract_address(address)
            .build(),
        None => ContentGateway::deployed(&wallet)?,
    };

    match cli.command {
        Command::GenerateMnemonic => unreachable!("handled before connecting"),
        Command::TotalSupply => {
            let outcome = gateway.total_supply(None).await?;
            info!("Total supply: {:?}", outcome.values());
        }
        Command::CreateContent {
            token_uri,
            staked_token,
            pricing_model,
            price,
            staked,
            shards,
            key_quorum,
            gas_price,
            gas_limit,
        } => {
            let fees = match (gas_price, gas_limit) {
                (Some(gas_price), Some(gas_limit)) => Some(FeeOptions {
                    gas_price,
                    gas_limit,
                }),
                _ => None,
            };
            let outcome = gateway
                .create_content(
                    &token_uri,
                    &pricing_model,
                    &price,
                    &staked_token,
                    &staked,
                    &shards,
                    &key_quorum,
                    fees,
                )
                .await?;
            if let Some(receipt) = outcome.receipt() {
                info!("Created content in transaction {}", receipt.transaction_hash);
            }
        }
        Command::FetchContentByCategory { category } => {
            let outcome = gateway.fetch_content_by_category(&category, None).await?;
            info!("Content in {category}: {:?}", outcome.values());
        }
        Command::FetchEarningsByCategory { category } => {
            let outcome = gateway.fetch_earnings_by_category(&category, None).await?;
            if let Some(DynSolValue::Uint(units, _)) = outcome.values().and_then(|v| v.first()) {
                info!("Earnings for {category}: {} tokens", units_to_tokens(*units));
            }
        }
        Command::Subscribe { content_id } => {
            let outcome = gateway.subscribe(&content_id, None).await?;
            if let Some(receipt) = outcome.receipt() {
                info!("Subscribed in transaction {}", receipt.transaction_hash);
            }
        }
    }

    Ok(())
}
