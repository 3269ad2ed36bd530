use clap::{Parser, Subcommand};

use crate::block::BlockIdentifier;

#[derive(Parser, Debug)]
#[command(
    name = "eth-query",
    about = "Ethereum blockchain utilities over JSON-RPC",
    version,
    after_help = "Examples:
  eth-query balance 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
  eth-query tx 0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060
  eth-query block 18000000
  eth-query block
  eth-query gas
  eth-query create
  eth-query contract 0xdAC17F958D2ee523a2206206994597C13D831ec7
  eth-query chain"
)]
pub struct Cli {
    /// RPC endpoint URL (default: $ETH_RPC_URL, then LlamaRPC)
    #[arg(long, value_name = "URL", global = true)]
    pub rpc: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get ETH balance
    Balance {
        /// Ethereum address (any letter case)
        address: String,
    },

    /// Get transaction details
    Tx {
        /// Transaction hash
        hash: String,
    },

    /// Get block information
    Block {
        /// Block number, hex height or tag (default: latest)
        number: Option<BlockIdentifier>,
    },

    /// Get current gas price
    Gas,

    /// Generate a new account
    Create,

    /// Check whether an address is a contract
    Contract {
        /// Ethereum address (any letter case)
        address: String,
    },

    /// Show chain id, network version and latest block
    Chain,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_block_variants() {
        let cli = Cli::try_parse_from(["eth-query", "block"]).unwrap();
        assert_eq!(cli.command, Command::Block { number: None });

        let cli = Cli::try_parse_from(["eth-query", "block", "latest"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Block {
                number: Some(BlockIdentifier::Latest)
            }
        );

        let cli = Cli::try_parse_from(["eth-query", "block", "18000000"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Block {
                number: Some(BlockIdentifier::Number(18_000_000))
            }
        );
    }

    #[test]
    fn test_negative_block_rejected() {
        assert!(Cli::try_parse_from(["eth-query", "block", "--", "-5"]).is_err());
    }

    #[test]
    fn test_rpc_flag_before_or_after_subcommand() {
        let cli = Cli::try_parse_from(["eth-query", "--rpc", "http://localhost:8545", "gas"]).unwrap();
        assert_eq!(cli.rpc.as_deref(), Some("http://localhost:8545"));

        let cli = Cli::try_parse_from(["eth-query", "gas", "--rpc", "http://localhost:8545"]).unwrap();
        assert_eq!(cli.rpc.as_deref(), Some("http://localhost:8545"));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["eth-query"]).is_err());
    }

    #[test]
    fn test_create_takes_no_arguments() {
        let cli = Cli::try_parse_from(["eth-query", "create"]).unwrap();
        assert_eq!(cli.command, Command::Create);
        assert!(Cli::try_parse_from(["eth-query", "create", "extra"]).is_err());
    }
}
