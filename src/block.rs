use std::fmt;
use std::str::FromStr;

/// Block selector for `eth_getBlockByNumber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockIdentifier {
    #[default]
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
    Number(u64),
}

impl BlockIdentifier {
    /// Encode as a JSON-RPC block parameter: a tag or a hex quantity.
    pub fn to_rpc_param(&self) -> String {
        match self {
            BlockIdentifier::Latest => "latest".to_string(),
            BlockIdentifier::Earliest => "earliest".to_string(),
            BlockIdentifier::Pending => "pending".to_string(),
            BlockIdentifier::Safe => "safe".to_string(),
            BlockIdentifier::Finalized => "finalized".to_string(),
            BlockIdentifier::Number(n) => format!("0x{:x}", n),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, BlockIdentifier::Latest)
    }
}

impl From<Option<BlockIdentifier>> for BlockIdentifier {
    fn from(id: Option<BlockIdentifier>) -> Self {
        id.unwrap_or_default()
    }
}

/// Parses "latest", "earliest", "pending", "safe", "finalized", decimal
/// heights and `0x` hex heights. Heights are not range-checked here; the node
/// answers `null` for blocks it does not have.
impl FromStr for BlockIdentifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "latest" => Ok(BlockIdentifier::Latest),
            "earliest" => Ok(BlockIdentifier::Earliest),
            "pending" => Ok(BlockIdentifier::Pending),
            "safe" => Ok(BlockIdentifier::Safe),
            "finalized" => Ok(BlockIdentifier::Finalized),
            _ => {
                let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => s.parse::<u64>(),
                };
                parsed
                    .map(BlockIdentifier::Number)
                    .map_err(|e| format!("invalid block number '{}': {}", s, e))
            }
        }
    }
}

impl fmt::Display for BlockIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockIdentifier::Number(n) => write!(f, "{}", n),
            tag => f.write_str(&tag.to_rpc_param()),
        }
    }
}
