//! Chain Query Client
//!
//! Binds to one provider, verifies liveness once, then answers point
//! queries. Nothing is cached between calls: every operation re-queries the
//! node.

use std::str::FromStr;

use alloy_primitives::{Address, B256};
use tracing::{debug, info};

use crate::address::parse_address;
use crate::block::BlockIdentifier;
use crate::error::{error_chain, OperationError, QueryError, Result};
use crate::provider::ChainProvider;
use crate::report::{
    AccountReport, BalanceReport, BlockReport, ChainReport, ContractReport, GasReport,
    TransactionReport,
};
use crate::units::{estimate_cost, SIMPLE_TRANSFER_GAS, TOKEN_TRANSFER_GAS};

/// Read-only query surface over a live chain connection.
pub struct ChainQueryClient<P> {
    provider: P,
    chain_id: u64,
}

impl<P: ChainProvider> ChainQueryClient<P> {
    /// Verify the node is reachable and learn its chain identifier.
    ///
    /// Fails with [`QueryError::Connection`] before any operation-specific
    /// request is made.
    pub async fn connect(provider: P, endpoint: &str) -> Result<Self> {
        let version = provider
            .client_version()
            .await
            .map_err(|e| QueryError::Connection {
                endpoint: endpoint.to_string(),
                reason: error_chain(&e),
            })?;
        debug!("Node at {} runs {}", endpoint, version);

        let chain_id = provider
            .chain_id()
            .await
            .map_err(|e| QueryError::Connection {
                endpoint: endpoint.to_string(),
                reason: format!("no chain identifier returned ({})", error_chain(&e)),
            })?;

        info!("Connected to {} (chain id {})", endpoint, chain_id);
        Ok(Self { provider, chain_id })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Balance of `address` (any letter case) in wei and ether.
    pub async fn get_balance(&self, address: &str) -> Result<BalanceReport> {
        let address = self.normalize(address)?;
        let wei = self.provider.get_balance(&address).await?;
        debug!("Balance of {}: {} wei", address, wei);
        Ok(BalanceReport { address, wei })
    }

    /// Transaction body plus receipt status.
    pub async fn get_transaction(&self, hash: &str) -> Result<TransactionReport> {
        let hash = parse_tx_hash(hash)?;

        let tx = self
            .provider
            .get_transaction(&hash)
            .await?
            .ok_or_else(|| OperationError::NotFound(format!("transaction {}", hash)))?;

        let receipt = self
            .provider
            .get_transaction_receipt(&hash)
            .await?
            .ok_or_else(|| {
                OperationError::NotFound(format!("receipt for transaction {}", hash))
            })?;

        Ok(TransactionReport {
            hash,
            from: tx.from,
            to: tx.to,
            value: tx.value,
            gas: tx.gas.to(),
            gas_price: tx.price_per_gas(),
            block_number: receipt.block_number.to(),
            succeeded: receipt.succeeded(),
        })
    }

    /// Block header summary. `None` and `Some(Latest)` take the same path.
    pub async fn get_block(&self, id: Option<BlockIdentifier>) -> Result<BlockReport> {
        let id = BlockIdentifier::from(id);

        let block = self
            .provider
            .get_block(id)
            .await?
            .ok_or_else(|| OperationError::NotFound(format!("block {}", id)))?;

        Ok(BlockReport {
            requested: id,
            number: block.number.map(|n| n.to()),
            hash: block.hash,
            timestamp: block.timestamp.to(),
            transaction_count: block.transactions.len(),
            gas_used: block.gas_used.to(),
            gas_limit: block.gas_limit.to(),
        })
    }

    /// Current gas price and the fee of two reference transactions.
    pub async fn get_gas_price(&self) -> Result<GasReport> {
        let gas_price = self.provider.gas_price().await?;

        let simple_transfer_cost = estimate_cost(gas_price, SIMPLE_TRANSFER_GAS)
            .ok_or(OperationError::Overflow("simple transfer cost"))?;
        let token_transfer_cost = estimate_cost(gas_price, TOKEN_TRANSFER_GAS)
            .ok_or(OperationError::Overflow("token transfer cost"))?;

        Ok(GasReport {
            gas_price,
            simple_transfer_cost,
            token_transfer_cost,
        })
    }

    /// Generate a key pair locally. No request is sent.
    pub fn create_account(&self) -> Result<AccountReport> {
        let account = self.provider.generate_account()?;
        debug!("Generated account {}", account.address);
        Ok(AccountReport { account })
    }

    /// Classify `address` as contract or EOA by its deployed code.
    pub async fn check_contract(&self, address: &str) -> Result<ContractReport> {
        let address = self.normalize(address)?;
        let code = self.provider.get_code(&address).await?;
        Ok(ContractReport {
            address,
            code_size: code.len(),
        })
    }

    /// Chain id, network version and current height.
    pub async fn chain_info(&self) -> Result<ChainReport> {
        let net_version = self.provider.net_version().await?;
        let latest_block = self.provider.block_number().await?;
        Ok(ChainReport {
            chain_id: self.chain_id,
            net_version,
            latest_block,
        })
    }

    fn normalize(&self, input: &str) -> Result<Address> {
        let checksummed = self.provider.to_checksum_address(input)?;
        Ok(parse_address(&checksummed)?)
    }
}

fn parse_tx_hash(input: &str) -> Result<B256, OperationError> {
    let trimmed = input.trim();
    B256::from_str(trimmed).map_err(|e| OperationError::InvalidHash {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
