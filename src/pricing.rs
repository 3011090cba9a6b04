use crate::error::Error;
use crate::name;

/// Pricing/rarity class assigned to a name by its character length.
///
/// Annual prices per tier (controller defaults): Diamond 0.15 ETH,
/// Platinum 0.05 ETH, Gold 0.01 ETH, Normal 0.001 ETH.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Diamond,
    Platinum,
    Gold,
    Normal,
}

impl Tier {
    /// Numeric tier code as used by the controller contract.
    pub fn code(self) -> u8 {
        match self {
            Self::Diamond => 0,
            Self::Platinum => 1,
            Self::Gold => 2,
            Self::Normal => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Diamond),
            1 => Some(Self::Platinum),
            2 => Some(Self::Gold),
            3 => Some(Self::Normal),
            _ => None,
        }
    }
}

/// Tier for a name of the given character length.
///
/// Total over all lengths >= 3: exactly 3 -> Diamond, 4 -> Platinum,
/// 5 -> Gold, 6+ -> Normal. Lengths below the minimum have no tier.
pub fn tier_for_length(length: usize) -> Option<Tier> {
    match length {
        l if l < name::MIN_NAME_LENGTH => None,
        3 => Some(Tier::Diamond),
        4 => Some(Tier::Platinum),
        5 => Some(Tier::Gold),
        _ => Some(Tier::Normal),
    }
}

/// Tier for a normalized name string.
pub fn tier_for_name(normalized: &str) -> Option<Tier> {
    tier_for_length(name::name_length(normalized))
}

/// Total registration price: exact integer multiplication, no rounding.
pub fn total_price(per_year_wei: u128, years: u32) -> Result<u128, Error> {
    if years == 0 {
        return Err(Error::Price {
            reason: "years must be at least 1".to_string(),
        });
    }
    per_year_wei
        .checked_mul(u128::from(years))
        .ok_or_else(|| Error::Price {
            reason: format!("total price overflows: {per_year_wei} wei x {years} years"),
        })
}

/// Pricing for a name registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PriceQuote {
    pub tier: Tier,
    /// Annual price for this tier, in wei.
    pub per_year_wei: u128,
    /// Number of years to register.
    pub years: u32,
    /// `per_year_wei * years`, exact.
    pub total_wei: u128,
    /// Total formatted in ETH (e.g. "0.001").
    pub total_formatted: String,
}

const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Format a wei amount as a decimal ETH string with trailing zeros trimmed.
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let frac = wei % WEI_PER_ETHER;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:018}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
