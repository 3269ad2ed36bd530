//! eth-query
//!
//! A small command-line client for Ethereum nodes. It binds to one JSON-RPC
//! endpoint and answers point queries (balances, transactions, blocks, gas
//! prices, contract detection). It also generates key pairs locally.
//!
//! # Architecture
//!
//! ```text
//! Operator (shell)
//!     |
//!     | eth-query <command>
//!     v
//! ChainQueryClient (query)  --  reports (report)
//!     |
//!     | ChainProvider trait (provider)
//!     v
//! HttpProvider (rpc)  --  JSON-RPC 2.0 over HTTP
//!     |
//!     v
//! Ethereum node
//! ```
//!
//! # Modules
//!
//! - `config` - Environment and configuration management
//! - `cli` - Command-line surface
//! - `error` - Error taxonomy
//! - `provider` - Capability trait over a chain client
//! - `rpc` - JSON-RPC transport and record types
//! - `query` - The query client and its operations
//! - `report` - Human-readable output of each operation
//! - `address`, `account`, `block`, `units` - Value helpers

pub mod account;
pub mod address;
pub mod block;
pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod query;
pub mod report;
pub mod rpc;
pub mod units;
