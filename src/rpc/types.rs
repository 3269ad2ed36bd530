use alloy_primitives::{Address, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request to an Ethereum node
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response from an Ethereum node.
///
/// `result` is kept as a raw value: a `null` result is meaningful for
/// lookups (unknown hash, missing block) and must not be confused with an
/// absent field.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

// Distinguish `"result": null` (Some(Null)) from a missing field (None).
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Subset of an `eth_getBlockByNumber` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    /// `null` for pending blocks
    #[serde(default)]
    pub number: Option<U64>,
    #[serde(default)]
    pub hash: Option<B256>,
    pub timestamp: U64,
    /// Hashes or full objects depending on the request flag
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
    pub gas_used: U64,
    pub gas_limit: U64,
}

/// Subset of an `eth_getTransactionByHash` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub from: Address,
    /// `None` for contract creation
    #[serde(default)]
    pub to: Option<Address>,
    pub value: U256,
    pub gas: U64,
    /// Legacy gas price, or the effective price reported by the node for
    /// typed transactions
    #[serde(default)]
    pub gas_price: Option<U256>,
    #[serde(default)]
    pub max_fee_per_gas: Option<U256>,
}

/// Subset of an `eth_getTransactionReceipt` result.
///
/// Nodes only return receipts for mined transactions, so the block number
/// is always present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub block_number: U64,
    /// 1 = success, 0 = failure; absent on pre-Byzantium receipts
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionRecord {
    /// Price per gas as reported by the node.
    pub fn price_per_gas(&self) -> U256 {
        self.gas_price
            .or(self.max_fee_per_gas)
            .unwrap_or(U256::ZERO)
    }
}

impl ReceiptRecord {
    pub fn succeeded(&self) -> bool {
        self.status == Some(U64::from(1u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let req = JsonRpcRequest::new(7, "eth_getBalance", json!(["0xabc", "latest"]));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "eth_getBalance",
                "params": ["0xabc", "latest"]
            })
        );
    }

    #[test]
    fn test_null_result_is_distinguished_from_missing() {
        let null: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": null})).unwrap();
        assert_eq!(null.result, Some(serde_json::Value::Null));

        let missing: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert!(missing.result.is_none());
    }

    #[test]
    fn test_error_object() {
        let resp: JsonRpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "invalid argument 0"}
        }))
        .unwrap();
        let err = resp.error.unwrap();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "invalid argument 0");
    }

    #[test]
    fn test_block_record() {
        let block: BlockRecord = serde_json::from_value(json!({
            "number": "0x112a880",
            "hash": "0x95b198e154acbfc64109dfd22d8224fe927fd8dfdedfae01587674482ba4baf3",
            "timestamp": "0x64f5d6bb",
            "transactions": ["0x01", "0x02"],
            "gasUsed": "0x1c9c380",
            "gasLimit": "0x1c9c380",
            "baseFeePerGas": "0x3b9aca00",
            "miner": "0x0000000000000000000000000000000000000000"
        }))
        .unwrap();
        assert_eq!(block.number, Some(U64::from(18_000_000u64)));
        assert_eq!(block.timestamp, U64::from(0x64f5d6bbu64));
        assert_eq!(block.transactions.len(), 2);
        assert_eq!(block.gas_limit, U64::from(30_000_000u64));
    }

    #[test]
    fn test_transaction_record_contract_creation() {
        let tx: TransactionRecord = serde_json::from_value(json!({
            "hash": "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
            "from": "0xa1e4380a3b1f749673e270229993ee55f35663b4",
            "to": null,
            "value": "0x0",
            "gas": "0x5208",
            "maxFeePerGas": "0x4a817c800",
            "blockNumber": null
        }))
        .unwrap();
        assert!(tx.to.is_none());
        assert_eq!(tx.gas, U64::from(21_000u64));
        assert_eq!(tx.price_per_gas(), U256::from(20_000_000_000u64));
    }

    #[test]
    fn test_pending_receipt_is_rejected() {
        let pending = serde_json::from_value::<ReceiptRecord>(json!({"status": null}));
        assert!(pending.is_err());
    }

    #[test]
    fn test_receipt_status() {
        let receipt = |body| serde_json::from_value::<ReceiptRecord>(body).unwrap();
        let ok = receipt(json!({"blockNumber": "0xb443", "status": "0x1"}));
        let failed = receipt(json!({"blockNumber": "0xb443", "status": "0x0"}));
        let legacy = receipt(json!({"blockNumber": "0xb443", "root": "0x00"}));
        assert_eq!(ok.block_number, U64::from(46_147u64));
        assert!(ok.succeeded());
        assert!(!failed.succeeded());
        assert!(!legacy.succeeded());
    }
}
