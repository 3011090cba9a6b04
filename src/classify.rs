use std::fmt;

use crate::error::Error;

/// Error category for programmatic handling.
///
/// Matches the revert taxonomy of the Abstract Names contracts plus the
/// transport-level failure modes a caller can hit before a call reverts.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    NameExpired,
    NameTaken,
    InsufficientPayment,
    InvalidProof,
    InvalidTextKey,
    NetworkError,
    ContractError,
    UnknownError,
}

impl ErrorKind {
    /// Fixed, translator-friendly message shown to users for this category.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Validation => "Name must be between 3 and 63 characters.",
            Self::Unauthorized => "You do not own this name.",
            Self::NameExpired => "This name has expired.",
            Self::NameTaken => "This name is already registered.",
            Self::InsufficientPayment => "Insufficient payment for this transaction.",
            Self::InvalidProof => "Invalid proof or not authorized for this phase.",
            Self::InvalidTextKey => "This text record key is not allowed.",
            Self::NetworkError => "Network error. Please check your connection.",
            Self::ContractError => "Transaction failed. Please try again.",
            Self::UnknownError => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Structured error surfaced by every client operation.
///
/// `message` carries the raw technical text verbatim for diagnostics;
/// `user_message` is safe to show in a UI as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct NamesError {
    pub kind: ErrorKind,
    pub message: String,
    pub user_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl NamesError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            user_message: kind.user_message().to_string(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

struct Rule {
    needles: &'static [&'static str],
    kind: ErrorKind,
    user_message: &'static str,
}

/// Ordered substring rules, first match wins. Order matters: the specific
/// contract revert names must be checked before the generic revert/network
/// catch-alls, which would otherwise swallow them.
const RULES: &[Rule] = &[
    Rule {
        needles: &["invalidlength"],
        kind: ErrorKind::Validation,
        user_message: "Name must be between 3 and 63 characters.",
    },
    Rule {
        needles: &["invalidcharacter"],
        kind: ErrorKind::Validation,
        user_message: "Name contains invalid characters.",
    },
    Rule {
        needles: &["unauthorized"],
        kind: ErrorKind::Unauthorized,
        user_message: "You do not own this name.",
    },
    Rule {
        needles: &["nameexpired"],
        kind: ErrorKind::NameExpired,
        user_message: "This name has expired.",
    },
    Rule {
        needles: &["nametaken", "alreadyregistered"],
        kind: ErrorKind::NameTaken,
        user_message: "This name is already registered.",
    },
    Rule {
        needles: &["insufficientpayment", "invalidfee"],
        kind: ErrorKind::InsufficientPayment,
        user_message: "Insufficient payment for this transaction.",
    },
    Rule {
        needles: &["invalidproof", "notwhitelisted", "notwaitlisted"],
        kind: ErrorKind::InvalidProof,
        user_message: "Invalid proof or not authorized for this phase.",
    },
    Rule {
        needles: &["invalidtextkey", "textkeyalreadyexists"],
        kind: ErrorKind::InvalidTextKey,
        user_message: "This text record key is not allowed.",
    },
    Rule {
        needles: &["network", "timeout", "fetch"],
        kind: ErrorKind::NetworkError,
        user_message: "Network error. Please check your connection.",
    },
    Rule {
        needles: &["revert", "execution reverted"],
        kind: ErrorKind::ContractError,
        user_message: "Transaction failed. Please try again.",
    },
];

/// Classify a raw error message into a [`NamesError`].
///
/// Matching is case-insensitive against the ordered rule list; anything
/// unrecognized falls back to [`ErrorKind::UnknownError`]. The input text is
/// preserved verbatim in the result. Pure: never fails, no side effects.
pub fn classify_message(message: &str) -> NamesError {
    let haystack = message.to_lowercase();

    for rule in RULES {
        if rule.needles.iter().any(|n| haystack.contains(n)) {
            return NamesError {
                kind: rule.kind,
                message: message.to_string(),
                user_message: rule.user_message.to_string(),
                details: None,
            };
        }
    }

    NamesError {
        kind: ErrorKind::UnknownError,
        message: message.to_string(),
        user_message: ErrorKind::UnknownError.user_message().to_string(),
        details: None,
    }
}

/// Classify an optional error. `None` stays `None`.
pub fn classify<E: fmt::Display>(error: Option<&E>) -> Option<NamesError> {
    error.map(|e| classify_message(&e.to_string()))
}

impl From<Error> for NamesError {
    fn from(err: Error) -> Self {
        classify_message(&err.to_string())
    }
}
