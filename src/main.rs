//! eth-query
//!
//! Entry point for the Ethereum query tool. Loads configuration from the
//! environment/.env file, binds to one JSON-RPC endpoint and runs a single
//! command.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use eth_query::cli::{Cli, Command};
use eth_query::config::Config;
use eth_query::error::{error_chain, QueryError};
use eth_query::query::ChainQueryClient;
use eth_query::rpc::HttpProvider;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().with_rpc_override(cli.rpc.clone());

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .init();

    debug!("Version: {}", env!("CARGO_PKG_VERSION"));
    debug!("RPC endpoint: {}", config.rpc_url);

    let outcome = tokio::select! {
        result = run(cli.command, &config) => result,
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("\n\nInterrupted by user");
            return ExitCode::SUCCESS;
        }
    };

    match outcome {
        Ok(report) => {
            println!("\n{}", report);
            ExitCode::SUCCESS
        }
        Err(e @ QueryError::Connection { .. }) => {
            debug!("Connection failed: {:?}", e);
            eprintln!("Connection Error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            debug!("Operation failed: {:?}", e);
            eprintln!("Error: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

/// Run one command and return its rendered report.
async fn run(command: Command, config: &Config) -> Result<String, QueryError> {
    let provider = HttpProvider::new(&config.rpc_url);
    let client = ChainQueryClient::connect(provider, &config.rpc_url).await?;
    println!("Connected to Ethereum (Chain ID: {})", client.chain_id());

    let report = match command {
        Command::Balance { address } => client.get_balance(&address).await?.to_string(),
        Command::Tx { hash } => client.get_transaction(&hash).await?.to_string(),
        Command::Block { number } => client.get_block(number).await?.to_string(),
        Command::Gas => client.get_gas_price().await?.to_string(),
        Command::Create => client.create_account()?.to_string(),
        Command::Contract { address } => client.check_contract(&address).await?.to_string(),
        Command::Chain => client.chain_info().await?.to_string(),
    };

    Ok(report)
}
