//! The capability set the query layer needs from a chain client.
//!
//! `HttpProvider` implements it over JSON-RPC; tests substitute in-memory
//! providers.

use alloy_primitives::{Address, Bytes, B256, U256};

use crate::account::Account;
use crate::block::BlockIdentifier;
use crate::error::{AccountError, AddressError, RpcError};
use crate::rpc::types::{BlockRecord, ReceiptRecord, TransactionRecord};

#[allow(async_fn_in_trait)]
pub trait ChainProvider {
    /// Node client identifier; doubles as the liveness probe.
    async fn client_version(&self) -> Result<String, RpcError>;

    async fn is_connected(&self) -> bool {
        self.client_version().await.is_ok()
    }

    async fn chain_id(&self) -> Result<u64, RpcError>;

    /// Balance in wei at the latest block.
    async fn get_balance(&self, address: &Address) -> Result<U256, RpcError>;

    /// `Ok(None)` when the node does not know the hash.
    async fn get_transaction(&self, hash: &B256) -> Result<Option<TransactionRecord>, RpcError>;

    /// `Ok(None)` when the transaction is unknown or not yet mined.
    async fn get_transaction_receipt(
        &self,
        hash: &B256,
    ) -> Result<Option<ReceiptRecord>, RpcError>;

    /// `Ok(None)` when the node has no such block.
    async fn get_block(&self, id: BlockIdentifier) -> Result<Option<BlockRecord>, RpcError>;

    /// Deployed bytecode at the latest block; empty for EOAs.
    async fn get_code(&self, address: &Address) -> Result<Bytes, RpcError>;

    /// Suggested gas price in wei.
    async fn gas_price(&self) -> Result<U256, RpcError>;

    async fn block_number(&self) -> Result<u64, RpcError>;

    async fn net_version(&self) -> Result<String, RpcError>;

    fn to_checksum_address(&self, input: &str) -> Result<String, AddressError> {
        crate::address::to_checksum_address(input)
    }

    fn generate_account(&self) -> Result<Account, AccountError> {
        Account::generate()
    }
}
