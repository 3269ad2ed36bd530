//! Human-readable results of each query.

use std::fmt;

use alloy_primitives::{Address, B256, U256};
use chrono::DateTime;

use crate::account::Account;
use crate::block::BlockIdentifier;
use crate::units::{
    format_ether, format_gwei, group_thousands, SIMPLE_TRANSFER_GAS, TOKEN_TRANSFER_GAS,
};

#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub address: Address,
    pub wei: U256,
}

impl BalanceReport {
    pub fn ether(&self) -> String {
        format_ether(self.wei)
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Balance for {}", self.address.to_checksum(None))?;
        writeln!(f, "   {} ETH", self.ether())?;
        write!(f, "   {} Wei", group_thousands(&self.wei.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct TransactionReport {
    pub hash: B256,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
    pub gas: u64,
    pub gas_price: U256,
    pub block_number: u64,
    pub succeeded: bool,
}

impl TransactionReport {
    pub fn ether(&self) -> String {
        format_ether(self.value)
    }

    pub fn gwei(&self) -> String {
        format_gwei(self.gas_price)
    }
}

impl fmt::Display for TransactionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to = match &self.to {
            Some(to) => to.to_checksum(None),
            None => "contract creation".to_string(),
        };

        writeln!(f, "Transaction: {}", self.hash)?;
        writeln!(f, "   From:      {}", self.from.to_checksum(None))?;
        writeln!(f, "   To:        {}", to)?;
        writeln!(f, "   Value:     {} ETH", self.ether())?;
        writeln!(f, "   Gas:       {}", group_thousands(&self.gas.to_string()))?;
        writeln!(f, "   Gas Price: {} Gwei", self.gwei())?;
        writeln!(f, "   Block:     {}", self.block_number)?;
        write!(
            f,
            "   Status:    {}",
            if self.succeeded { "Success" } else { "Failed" }
        )
    }
}

#[derive(Debug, Clone)]
pub struct BlockReport {
    pub requested: BlockIdentifier,
    pub number: Option<u64>,
    pub hash: Option<B256>,
    pub timestamp: u64,
    pub transaction_count: usize,
    pub gas_used: u64,
    pub gas_limit: u64,
}

impl BlockReport {
    /// Block timestamp rendered in UTC, if representable.
    pub fn timestamp_utc(&self) -> Option<String> {
        let secs = i64::try_from(self.timestamp).ok()?;
        DateTime::from_timestamp(secs, 0).map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    }
}

impl fmt::Display for BlockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requested.is_latest() {
            writeln!(f, "Latest Block")?;
        } else {
            writeln!(f, "Block #{}", self.requested)?;
        }

        let number = match self.number {
            Some(n) => group_thousands(&n.to_string()),
            None => "pending".to_string(),
        };
        let hash = match &self.hash {
            Some(h) => h.to_string(),
            None => "pending".to_string(),
        };
        let timestamp = match self.timestamp_utc() {
            Some(utc) => format!("{} ({})", self.timestamp, utc),
            None => self.timestamp.to_string(),
        };

        writeln!(f, "   Number:       {}", number)?;
        writeln!(f, "   Hash:         {}", hash)?;
        writeln!(f, "   Timestamp:    {}", timestamp)?;
        writeln!(f, "   Transactions: {}", self.transaction_count)?;
        writeln!(f, "   Gas Used:     {}", group_thousands(&self.gas_used.to_string()))?;
        write!(f, "   Gas Limit:    {}", group_thousands(&self.gas_limit.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GasReport {
    pub gas_price: U256,
    pub simple_transfer_cost: U256,
    pub token_transfer_cost: U256,
}

impl fmt::Display for GasReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Gas Price")?;
        writeln!(f, "   {} Gwei", format_gwei(self.gas_price))?;
        writeln!(f, "   {} Wei", group_thousands(&self.gas_price.to_string()))?;
        writeln!(f)?;
        writeln!(f, "Estimated Transaction Costs:")?;
        writeln!(
            f,
            "   Simple Transfer ({} gas): {} ETH",
            group_thousands(&SIMPLE_TRANSFER_GAS.to_string()),
            format_ether(self.simple_transfer_cost)
        )?;
        write!(
            f,
            "   Token Transfer ({} gas):  {} ETH",
            group_thousands(&TOKEN_TRANSFER_GAS.to_string()),
            format_ether(self.token_transfer_cost)
        )
    }
}

#[derive(Debug)]
pub struct AccountReport {
    pub account: Account,
}

impl fmt::Display for AccountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "New Account Generated")?;
        writeln!(f, "   Address:     {}", self.account.address.to_checksum(None))?;
        writeln!(f, "   Private Key: {}", self.account.private_key_hex().as_str())?;
        writeln!(f)?;
        write!(f, "WARNING: Store the private key securely and never share it!")
    }
}

#[derive(Debug, Clone)]
pub struct ContractReport {
    pub address: Address,
    pub code_size: usize,
}

impl ContractReport {
    pub fn is_contract(&self) -> bool {
        self.code_size > 0
    }
}

impl fmt::Display for ContractReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address Analysis: {}", self.address.to_checksum(None))?;
        if self.is_contract() {
            writeln!(f, "   Type: Smart Contract")?;
            write!(f, "   Code Size: {} bytes", self.code_size)
        } else {
            write!(f, "   Type: EOA (Externally Owned Account)")
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChainReport {
    pub chain_id: u64,
    pub net_version: String,
    pub latest_block: u64,
}

impl fmt::Display for ChainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chain Information")?;
        writeln!(f, "   Chain ID:        {}", self.chain_id)?;
        writeln!(f, "   Network Version: {}", self.net_version)?;
        write!(
            f,
            "   Latest Block:    {}",
            group_thousands(&self.latest_block.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn address() -> Address {
        Address::from_str("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap()
    }

    #[test]
    fn test_balance_output() {
        let report = BalanceReport {
            address: address(),
            wei: U256::from(1_000_000_000_000_000_000u128),
        };
        assert_eq!(
            report.to_string(),
            "Balance for 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\n\
             \x20  1.000000 ETH\n\
             \x20  1,000,000,000,000,000,000 Wei"
        );
    }

    #[test]
    fn test_contract_output_reports_size_only_for_contracts() {
        let eoa = ContractReport {
            address: address(),
            code_size: 0,
        };
        let text = eoa.to_string();
        assert!(text.contains("EOA (Externally Owned Account)"));
        assert!(!text.contains("Code Size"));

        let contract = ContractReport {
            address: address(),
            code_size: 1234,
        };
        let text = contract.to_string();
        assert!(text.contains("Smart Contract"));
        assert!(text.contains("Code Size: 1234 bytes"));
    }

    #[test]
    fn test_gas_output() {
        let price = U256::from(20_000_000_000u64);
        let report = GasReport {
            gas_price: price,
            simple_transfer_cost: price * U256::from(SIMPLE_TRANSFER_GAS),
            token_transfer_cost: price * U256::from(TOKEN_TRANSFER_GAS),
        };
        assert_eq!(
            report.to_string(),
            "Current Gas Price\n\
             \x20  20.00 Gwei\n\
             \x20  20,000,000,000 Wei\n\
             \n\
             Estimated Transaction Costs:\n\
             \x20  Simple Transfer (21,000 gas): 0.000420 ETH\n\
             \x20  Token Transfer (65,000 gas):  0.001300 ETH"
        );
    }

    #[test]
    fn test_block_heading() {
        let mut report = BlockReport {
            requested: BlockIdentifier::Latest,
            number: Some(18_000_000),
            hash: Some(B256::ZERO),
            timestamp: 1_693_833_915,
            transaction_count: 3,
            gas_used: 12_000_000,
            gas_limit: 30_000_000,
        };
        let latest = report.to_string();
        assert!(latest.starts_with("Latest Block\n"));
        assert!(latest.contains("Number:       18,000,000"));
        assert!(latest.contains("Timestamp:    1693833915 (2023-09-04 13:25:15 UTC)"));
        assert!(latest.contains("Gas Limit:    30,000,000"));

        report.requested = BlockIdentifier::Number(18_000_000);
        assert!(report.to_string().starts_with("Block #18000000\n"));
    }

    #[test]
    fn test_transaction_output() {
        let report = TransactionReport {
            hash: B256::ZERO,
            from: address(),
            to: None,
            value: U256::from(1_500_000_000_000_000_000u128),
            gas: 21_000,
            gas_price: U256::from(12_345_678_901u64),
            block_number: 17_000_000,
            succeeded: false,
        };
        let text = report.to_string();
        assert!(text.contains("To:        contract creation"));
        assert!(text.contains("Value:     1.500000 ETH"));
        assert!(text.contains("Gas:       21,000"));
        assert!(text.contains("Gas Price: 12.35 Gwei"));
        assert!(text.contains("Block:     17000000"));
        assert!(text.ends_with("Status:    Failed"));
    }

    #[test]
    fn test_account_output_has_warning() {
        let report = AccountReport {
            account: Account::generate().unwrap(),
        };
        let text = report.to_string();
        assert!(text.contains("Private Key: 0x"));
        assert!(text.ends_with("WARNING: Store the private key securely and never share it!"));
    }
}
