use alloy_primitives::Address;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use rand_core::{OsRng, RngCore};
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::error::AccountError;

/// A freshly generated key pair. Nothing is persisted; the caller owns it.
pub struct Account {
    pub address: Address,
    private_key: Zeroizing<[u8; 32]>,
}

impl Account {
    /// Generates a new random secp256k1 key pair from the OS entropy source.
    pub fn generate() -> Result<Self, AccountError> {
        loop {
            let mut bytes = Zeroizing::new([0u8; 32]);
            OsRng
                .try_fill_bytes(bytes.as_mut_slice())
                .map_err(|e| AccountError::Entropy(e.to_string()))?;

            // Zero or >= curve order; draw again.
            let Ok(secret) = SecretKey::from_slice(bytes.as_slice()) else {
                continue;
            };

            return Ok(Self {
                address: secret_to_address(&secret),
                private_key: bytes,
            });
        }
    }

    /// Builds an account from an existing 32-byte private key.
    pub fn from_private_key(key: &[u8; 32]) -> Result<Self, AccountError> {
        let secret = SecretKey::from_slice(key)
            .map_err(|_| AccountError::InvalidKey("not a valid secp256k1 scalar".into()))?;
        Ok(Self {
            address: secret_to_address(&secret),
            private_key: Zeroizing::new(*key),
        })
    }

    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// `0x`-prefixed lowercase hex of the private key.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(self.private_key.as_slice())))
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Keccak-256 of the 64-byte uncompressed public key (without the 0x04
/// prefix); the last 20 bytes are the address.
fn secret_to_address(secret: &SecretKey) -> Address {
    let point = secret.public_key().to_encoded_point(false);
    let hash = Keccak256::digest(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
