use std::str::FromStr;

use alloy_primitives::Address;

use crate::error::AddressError;

/// Parses an Ethereum address in any letter case.
///
/// Accepts 40 hex characters with or without a `0x` prefix. Mixed-case input
/// is not checked against its EIP-55 checksum; it is simply re-encoded.
pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    let trimmed = input.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex_part.len() != 40 {
        return Err(invalid(
            input,
            format!("expected 40 hex characters, got {}", hex_part.len()),
        ));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(input, "address contains non-hex characters".into()));
    }

    Address::from_str(hex_part).map_err(|e| invalid(input, e.to_string()))
}

/// Normalizes an address string to its EIP-55 mixed-case checksummed form.
pub fn to_checksum_address(input: &str) -> Result<String, AddressError> {
    Ok(parse_address(input)?.to_checksum(None))
}

fn invalid(input: &str, reason: String) -> AddressError {
    AddressError::Invalid {
        input: input.to_string(),
        reason,
    }
}
