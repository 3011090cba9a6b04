use wasm_bindgen::prelude::*;

use crate::classify;
use crate::expiry;
use crate::name;
use crate::pricing;

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Classify a raw error message. Returns
/// `{ kind, message, user_message }`, or null when no message is given.
#[wasm_bindgen(js_name = classifyError)]
pub fn classify_error(message: Option<String>) -> JsValue {
    match message {
        Some(m) => to_js(&classify::classify_message(&m)),
        None => JsValue::NULL,
    }
}

/// Lowercase a name and strip a trailing `.abs`.
#[wasm_bindgen(js_name = normalizeName)]
pub fn normalize_name(name: &str) -> String {
    name::normalize(name)
}

/// Tier name ("diamond" | "platinum" | "gold" | "normal") for a character
/// length, or undefined below the minimum.
#[wasm_bindgen(js_name = tierForLength)]
pub fn tier_for_length(length: u32) -> Option<String> {
    pricing::tier_for_length(length as usize).map(|t| t.to_string())
}

/// Tier name for a normalized name, or undefined below the minimum length.
#[wasm_bindgen(js_name = tierForName)]
pub fn tier_for_name(name: &str) -> Option<String> {
    pricing::tier_for_name(&name::normalize(name)).map(|t| t.to_string())
}

/// Exact total price in wei as a decimal string.
#[wasm_bindgen(js_name = totalPriceWei)]
pub fn total_price_wei(per_year_wei: &str, years: u32) -> Result<String, JsValue> {
    let per_year = per_year_wei
        .parse::<u128>()
        .map_err(|e| JsValue::from_str(&format!("bad wei amount: {e}")))?;
    pricing::total_price(per_year, years)
        .map(|total| total.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a wei amount (decimal string) as ETH.
#[wasm_bindgen(js_name = formatEther)]
pub fn format_ether(wei: &str) -> Result<String, JsValue> {
    let wei = wei
        .parse::<u128>()
        .map_err(|e| JsValue::from_str(&format!("bad wei amount: {e}")))?;
    Ok(pricing::format_ether(wei))
}

/// Expiry state for one `now` sample:
/// `{ is_expired, days_until_expiry }`.
#[wasm_bindgen(js_name = expiryStatus)]
pub fn expiry_status(expires_at: i64, now: i64) -> JsValue {
    to_js(&expiry::expiry_status(expires_at, now))
}
