use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::types::*;
use crate::block::BlockIdentifier;
use crate::error::RpcError;
use crate::provider::ChainProvider;

/// JSON-RPC client for an Ethereum node over HTTP.
pub struct HttpProvider {
    http_client: Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl HttpProvider {
    /// Create a new provider bound to `rpc_url`.
    pub fn new(rpc_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            rpc_url: rpc_url.to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Send a JSON-RPC request and return the raw `result` value, which may
    /// be `null`.
    async fn send_request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        debug!("Sending RPC request: id={}, method={}", id, method);

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|source| RpcError::Transport {
                method: method.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("RPC returned HTTP {}: {}", status, body);
            return Err(RpcError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let rpc_response: JsonRpcResponse =
            response.json().await.map_err(|e| RpcError::Decode {
                method: method.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(err) = rpc_response.error {
            error!("RPC error: method={}, code={}, message={}", method, err.code, err.message);
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        rpc_response
            .result
            .ok_or_else(|| RpcError::MissingResult(method.to_string()))
    }

    /// Call `method` and decode a non-null result.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let result = self.send_request(method, params).await?;
        if result.is_null() {
            return Err(RpcError::MissingResult(method.to_string()));
        }
        decode(method, result)
    }

    /// Call `method`, mapping a `null` result to `None`.
    async fn call_optional<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<Option<T>, RpcError> {
        let result = self.send_request(method, params).await?;
        if result.is_null() {
            debug!("{} returned null", method);
            return Ok(None);
        }
        decode(method, result).map(Some)
    }
}

fn decode<T: DeserializeOwned>(method: &str, value: Value) -> Result<T, RpcError> {
    serde_json::from_value(value).map_err(|e| RpcError::Decode {
        method: method.to_string(),
        reason: e.to_string(),
    })
}

impl ChainProvider for HttpProvider {
    async fn client_version(&self) -> Result<String, RpcError> {
        let version: String = self.call("web3_clientVersion", json!([])).await?;
        debug!("Node client version: {}", version);
        Ok(version)
    }

    async fn chain_id(&self) -> Result<u64, RpcError> {
        let id: U64 = self.call("eth_chainId", json!([])).await?;
        Ok(id.to())
    }

    async fn get_balance(&self, address: &Address) -> Result<U256, RpcError> {
        self.call(
            "eth_getBalance",
            json!([address.to_checksum(None), "latest"]),
        )
        .await
    }

    async fn get_transaction(&self, hash: &B256) -> Result<Option<TransactionRecord>, RpcError> {
        self.call_optional("eth_getTransactionByHash", json!([hash]))
            .await
    }

    async fn get_transaction_receipt(
        &self,
        hash: &B256,
    ) -> Result<Option<ReceiptRecord>, RpcError> {
        self.call_optional("eth_getTransactionReceipt", json!([hash]))
            .await
    }

    async fn get_block(&self, id: BlockIdentifier) -> Result<Option<BlockRecord>, RpcError> {
        self.call_optional("eth_getBlockByNumber", json!([id.to_rpc_param(), false]))
            .await
    }

    async fn get_code(&self, address: &Address) -> Result<Bytes, RpcError> {
        self.call("eth_getCode", json!([address.to_checksum(None), "latest"]))
            .await
    }

    async fn gas_price(&self) -> Result<U256, RpcError> {
        self.call("eth_gasPrice", json!([])).await
    }

    async fn block_number(&self) -> Result<u64, RpcError> {
        let number: U64 = self.call("eth_blockNumber", json!([])).await?;
        Ok(number.to())
    }

    async fn net_version(&self) -> Result<String, RpcError> {
        self.call("net_version", json!([])).await
    }
}
