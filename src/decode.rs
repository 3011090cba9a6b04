//! Helpers turning provider JSON responses into typed results.
//!
//! Field names follow the contract ABIs (camelCase). Malformed responses
//! become [`Error::Response`], never panics.

use crate::error::Error;
use crate::pricing::Tier;
use crate::types::{MintPhase, NameData, NameProfile, TokenId};

pub fn as_str<'a>(value: &'a serde_json::Value, what: &str) -> Result<&'a str, Error> {
    value.as_str().ok_or_else(|| Error::Response {
        reason: format!("{what} is not a string: {value}"),
    })
}

pub fn as_bool(value: &serde_json::Value, what: &str) -> Result<bool, Error> {
    value.as_bool().ok_or_else(|| Error::Response {
        reason: format!("{what} is not a bool: {value}"),
    })
}

/// Accepts a JSON number or a decimal string; uint256 results arrive as
/// strings from most transports.
pub fn as_u128(value: &serde_json::Value, what: &str) -> Result<u128, Error> {
    if let Some(n) = value.as_u64() {
        return Ok(u128::from(n));
    }
    if let Some(s) = value.as_str() {
        if let Ok(n) = s.parse::<u128>() {
            return Ok(n);
        }
    }
    Err(Error::Response {
        reason: format!("{what} is not an unsigned integer: {value}"),
    })
}

pub fn as_i64(value: &serde_json::Value, what: &str) -> Result<i64, Error> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if let Some(s) = value.as_str() {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(n);
        }
    }
    Err(Error::Response {
        reason: format!("{what} is not an integer: {value}"),
    })
}

pub fn field<'a>(value: &'a serde_json::Value, name: &str) -> Result<&'a serde_json::Value, Error> {
    value.get(name).ok_or_else(|| Error::Response {
        reason: format!("missing field {name}: {value}"),
    })
}

pub fn string_list(value: &serde_json::Value, what: &str) -> Result<Vec<String>, Error> {
    let arr = value.as_array().ok_or_else(|| Error::Response {
        reason: format!("{what} is not an array: {value}"),
    })?;
    arr.iter()
        .map(|v| as_str(v, what).map(String::from))
        .collect()
}

/// Token ids arrive as decimal strings, hex strings or plain numbers.
pub fn token_id(value: &serde_json::Value) -> Result<TokenId, Error> {
    if let Some(s) = value.as_str() {
        return Ok(TokenId(s.to_string()));
    }
    if let Some(n) = value.as_u64() {
        return Ok(TokenId(n.to_string()));
    }
    Err(Error::Response {
        reason: format!("tokenId is not a string or number: {value}"),
    })
}

pub fn tier(value: &serde_json::Value) -> Result<Tier, Error> {
    let code = as_u128(value, "tier")?;
    u8::try_from(code)
        .ok()
        .and_then(Tier::from_code)
        .ok_or_else(|| Error::Response {
            reason: format!("unknown tier code: {code}"),
        })
}

pub fn mint_phase(value: &serde_json::Value) -> Result<MintPhase, Error> {
    let code = as_u128(value, "phase")?;
    u8::try_from(code)
        .ok()
        .and_then(MintPhase::from_code)
        .ok_or_else(|| Error::Response {
            reason: format!("unknown phase code: {code}"),
        })
}

/// Registry `getNameData` result.
pub fn name_data(value: &serde_json::Value) -> Result<NameData, Error> {
    Ok(NameData {
        registered_at: as_i64(field(value, "registeredAt")?, "registeredAt")?,
        expires_at: as_i64(field(value, "expiresAt")?, "expiresAt")?,
        tier: tier(field(value, "tier")?)?,
        name: as_str(field(value, "name")?, "name")?.to_string(),
    })
}

/// Resolver `getNameData` / `getPrimaryData` result.
pub fn name_profile(value: &serde_json::Value) -> Result<NameProfile, Error> {
    Ok(NameProfile {
        name: as_str(field(value, "name")?, "name")?.to_string(),
        resolved_address: as_str(field(value, "resolvedAddress")?, "resolvedAddress")?.to_string(),
        keys: string_list(field(value, "keys")?, "keys")?,
        values: string_list(field(value, "values")?, "values")?,
        contenthash: as_str(field(value, "contenthash")?, "contenthash")?.to_string(),
    })
}
