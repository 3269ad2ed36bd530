pub mod client;
pub mod types;

pub use client::HttpProvider;
pub use types::{BlockRecord, JsonRpcRequest, JsonRpcResponse, ReceiptRecord, TransactionRecord};
