use crate::name::ZERO_ADDRESS;

/// Abstract testnet chain id.
pub const TESTNET_CHAIN_ID: u64 = 11_124;

/// Abstract mainnet chain id.
pub const MAINNET_CHAIN_ID: u64 = 2_741;

/// Deployment addresses for one chain.
///
/// Passed explicitly into [`crate::client::NamesClient`]; there is no
/// ambient "current chain" state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NamesConfig {
    /// Ownership and expiry data.
    pub registry: String,
    /// Profile data and reverse resolution.
    pub resolver: String,
    /// Pricing and launch-phase logic.
    pub controller: String,
    /// On-chain token rendering.
    pub renderer: String,
    /// Name format validation.
    pub validator: String,
    pub chain_id: u64,
}

impl NamesConfig {
    pub fn testnet() -> Self {
        Self {
            registry: "0x8c23D075eC4329ee5C9105D7BbAd413591251f0d".to_string(),
            resolver: "0x9fA78BFfe59a8E828d6d5ce3bf97C39a873239Dd".to_string(),
            controller: "0xaaa8189eCFa758E7B340bC7c6E94D85c6d231f45".to_string(),
            renderer: "0x5792b0e5E61af4C88cB0015460E767d4b73bd2d9".to_string(),
            validator: "0xE12f2a43d1cED53fBA541e8Cb69edc3f834f2359".to_string(),
            chain_id: TESTNET_CHAIN_ID,
        }
    }

    // TODO: fill in real addresses once the mainnet deployment lands.
    pub fn mainnet() -> Self {
        Self {
            registry: ZERO_ADDRESS.to_string(),
            resolver: ZERO_ADDRESS.to_string(),
            controller: ZERO_ADDRESS.to_string(),
            renderer: ZERO_ADDRESS.to_string(),
            validator: ZERO_ADDRESS.to_string(),
            chain_id: MAINNET_CHAIN_ID,
        }
    }
}

/// Config for a chain id, `None` for unsupported chains.
pub fn config_for_chain(chain_id: u64) -> Option<NamesConfig> {
    match chain_id {
        TESTNET_CHAIN_ID => Some(NamesConfig::testnet()),
        MAINNET_CHAIN_ID => Some(NamesConfig::mainnet()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::is_address;

    #[test]
    fn known_chains_have_configs() {
        let testnet = config_for_chain(TESTNET_CHAIN_ID);
        assert_eq!(testnet, Some(NamesConfig::testnet()));
        assert_eq!(
            config_for_chain(MAINNET_CHAIN_ID),
            Some(NamesConfig::mainnet())
        );
        assert_eq!(config_for_chain(1), None);
    }

    #[test]
    fn testnet_addresses_are_well_formed() {
        let config = NamesConfig::testnet();
        for addr in [
            &config.registry,
            &config.resolver,
            &config.controller,
            &config.renderer,
            &config.validator,
        ] {
            assert!(is_address(addr), "malformed address: {addr}");
        }
        assert_eq!(config.chain_id, TESTNET_CHAIN_ID);
    }
}
