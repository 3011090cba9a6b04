#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classify;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod expiry;
pub mod name;
pub mod pricing;
pub mod provider;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::{ErrorKind, NamesError, classify, classify_message};
pub use client::NamesClient;
pub use config::{MAINNET_CHAIN_ID, NamesConfig, TESTNET_CHAIN_ID, config_for_chain};
pub use error::Error;
pub use expiry::{ExpiryStatus, NameExpiry, SECONDS_PER_DAY, expiry_status};
pub use name::{
    MAX_NAME_LENGTH, MIN_NAME_LENGTH, TLD, ZERO_ADDRESS, display_name, is_address, normalize,
};
pub use pricing::{PriceQuote, Tier, format_ether, tier_for_length, tier_for_name, total_price};
pub use provider::ContractProvider;
pub use types::{
    MintPhase, NameData, NameProfile, TEXT_RECORD_KEYS, TextRecord, TokenId, TxHash,
};
