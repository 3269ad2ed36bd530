use thiserror::Error;

/// Failures talking to the Ethereum node over JSON-RPC.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("request to {method} failed")]
    Transport {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("node returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("no result in {0} response")]
    MissingResult(String),

    #[error("failed to decode {method} response: {reason}")]
    Decode { method: String, reason: String },
}

/// Invalid address input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Local key generation failures.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("entropy source failure: {0}")]
    Entropy(String),

    #[error("invalid private key: {0}")]
    InvalidKey(String),
}

/// Top-level error taxonomy. `main` maps each variant to an exit code.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The endpoint is unreachable or did not return a chain identifier.
    #[error("Failed to connect to {endpoint}: {reason}")]
    Connection { endpoint: String, reason: String },

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Failure of a single query after the connection was established.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("invalid transaction hash '{input}': {reason}")]
    InvalidHash { input: String, reason: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),
}

impl From<RpcError> for QueryError {
    fn from(err: RpcError) -> Self {
        QueryError::Operation(err.into())
    }
}

impl From<AddressError> for QueryError {
    fn from(err: AddressError) -> Self {
        QueryError::Operation(err.into())
    }
}

impl From<AccountError> for QueryError {
    fn from(err: AccountError) -> Self {
        QueryError::Operation(err.into())
    }
}

pub type Result<T, E = QueryError> = std::result::Result<T, E>;

/// Render `err` followed by each underlying cause, joined with `": "`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
