//! Content-derived identifiers.
//!
//! Identifiers are `<tag>_<first 12 hex chars of SHA-256(key)>`, where the key
//! is built from stable input content only. The same input always yields the
//! same identifier, so regenerated reports keep their ids across runs.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const DIGEST_PREFIX_LEN: usize = 12;

pub const SOURCE_TAG: &str = "src";
pub const ITEM_TAG: &str = "item";

/// Lowercase hex SHA-256 of the UTF-8 bytes of `input`.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Derives `<tag>_<prefix>` from an already-composed key.
pub fn digest_id(tag: &str, key: &str) -> String {
    let digest = sha256_hex(key);
    format!("{}_{}", tag, &digest[..DIGEST_PREFIX_LEN])
}

/// Key for one ingredient line: `event:<e>|station:<s>|ingredient:<i>`.
pub fn source_key(event_id: &str, station_id: &str, ingredient_id: &str) -> String {
    format!(
        "event:{}|station:{}|ingredient:{}",
        event_id, station_id, ingredient_id
    )
}

/// Key for an aggregate item: `<name>|<unit>`, both trimmed.
pub fn item_key(item_name: &str, unit: &str) -> String {
    format!("{}|{}", item_name.trim(), unit.trim())
}

pub fn source_id(event_id: &str, station_id: &str, ingredient_id: &str) -> String {
    digest_id(SOURCE_TAG, &source_key(event_id, station_id, ingredient_id))
}

pub fn item_id(item_name: &str, unit: &str) -> String {
    digest_id(ITEM_TAG, &item_key(item_name, unit))
}
