use crate::pricing::Tier;

/// Registry token id as returned by the contract-call layer.
///
/// Token ids are uint256 name hashes, so they travel as decimal or
/// 0x-prefixed hex strings rather than native integers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenId(pub String);

impl TokenId {
    /// Token id zero means the name has never been registered.
    pub fn is_zero(&self) -> bool {
        let digits = self.0.strip_prefix("0x").unwrap_or(&self.0);
        digits.is_empty() || digits.chars().all(|c| c == '0')
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction hash returned by a write operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TxHash(pub String);

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complete profile for a name as stored by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NameProfile {
    /// Full name with TLD (e.g. "vitalik.abs").
    pub name: String,
    /// Address the name resolves to.
    pub resolved_address: String,
    /// Text record keys (e.g. ["avatar", "com.x"]).
    pub keys: Vec<String>,
    /// Text record values, index-aligned with `keys`.
    pub values: Vec<String>,
    /// Content hash for decentralized content.
    pub contenthash: String,
}

impl NameProfile {
    /// Look up a single text record by key.
    pub fn text_record(&self, key: &str) -> Option<&str> {
        self.keys
            .iter()
            .position(|k| k == key)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// All text records as key/value pairs.
    pub fn text_records(&self) -> Vec<TextRecord> {
        self.keys
            .iter()
            .zip(&self.values)
            .map(|(key, value)| TextRecord {
                key: key.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// The resolver returns an all-empty struct for unregistered names.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Ownership and expiry data from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameData {
    /// Unix timestamp when the name was registered.
    pub registered_at: i64,
    /// Unix timestamp when the registration expires.
    pub expires_at: i64,
    pub tier: Tier,
    /// The normalized name string.
    pub name: String,
}

/// A key/value annotation attached to a name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextRecord {
    pub key: String,
    pub value: String,
}

/// Text record keys accepted by the resolver.
pub const TEXT_RECORD_KEYS: &[&str] = &[
    "avatar",
    "description",
    "com.x",
    "com.discord",
    "com.telegram",
    "com.github",
    "url",
    "header",
];

/// Controller launch phase.
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
pub enum MintPhase {
    None,
    Whitelist,
    Waitlist,
    Public,
}

impl MintPhase {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Whitelist),
            2 => Some(Self::Waitlist),
            3 => Some(Self::Public),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Whitelist => 1,
            Self::Waitlist => 2,
            Self::Public => 3,
        }
    }

    /// Human-readable phase name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "Not Started",
            Self::Whitelist => "Whitelist",
            Self::Waitlist => "Waitlist",
            Self::Public => "Public",
        }
    }

    /// Minting is closed only before the whitelist phase opens.
    pub fn is_closed(self) -> bool {
        self == Self::None
    }
}
