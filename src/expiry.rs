use crate::pricing::Tier;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Expiry state of a registration relative to a single `now` sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ExpiryStatus {
    /// `now >= expires_at`.
    pub is_expired: bool,
    /// Whole days until expiry, negative once expired.
    pub days_until_expiry: i64,
}

/// Expiry information for a registered name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NameExpiry {
    pub registered_at: i64,
    pub expires_at: i64,
    pub tier: Tier,
    pub is_expired: bool,
    pub days_until_expiry: i64,
}

/// Compute expiry state from one `now` sample.
///
/// `now` is captured once per evaluation so `is_expired` and
/// `days_until_expiry` can never disagree. The day count floors toward
/// negative infinity (`div_euclid`): a name one second past expiry reports
/// -1 days, not 0.
pub fn expiry_status(expires_at: i64, now: i64) -> ExpiryStatus {
    ExpiryStatus {
        is_expired: expires_at <= now,
        days_until_expiry: (expires_at - now).div_euclid(SECONDS_PER_DAY),
    }
}

/// Current Unix time in seconds. Saturates to 0 on a pre-epoch clock.
pub fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
