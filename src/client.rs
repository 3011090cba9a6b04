use serde_json::json;
use tracing::debug;

use crate::classify::{ErrorKind, NamesError};
use crate::config::{NamesConfig, config_for_chain};
use crate::decode;
use crate::error::Error;
use crate::expiry::{NameExpiry, expiry_status, unix_now};
use crate::name::{self, MIN_NAME_LENGTH, ZERO_ADDRESS};
use crate::pricing::{PriceQuote, format_ether, tier_for_name, total_price};
use crate::provider::ContractProvider;
use crate::types::{MintPhase, NameProfile, TokenId, TxHash};

/// Client for the Abstract Names contracts on one chain.
///
/// Every operation issues independent calls through the provider and
/// classifies raw failures into [`NamesError`] before surfacing them; the
/// original error text is preserved in [`NamesError::message`]. Nothing is
/// retried — callers re-invoke the operation themselves.
#[derive(Debug)]
pub struct NamesClient<P> {
    provider: P,
    config: NamesConfig,
}

impl<P: ContractProvider> NamesClient<P> {
    /// Client with an explicit deployment config.
    pub fn new(provider: P, config: NamesConfig) -> Self {
        Self { provider, config }
    }

    /// Client for whatever chain the provider is connected to.
    /// Fails for chains without a known deployment.
    pub async fn connect(provider: P) -> Result<Self, NamesError> {
        let chain_id = provider.chain_id().await?;
        let config =
            config_for_chain(chain_id).ok_or(Error::UnsupportedChain { chain_id })?;
        Ok(Self::new(provider, config))
    }

    pub fn config(&self) -> &NamesConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ──────────────────── reads ────────────────────

    /// Whether `name` can currently be registered.
    pub async fn is_available(&self, name: &str) -> Result<bool, NamesError> {
        let normalized = self.normalized_or_reject(name)?;
        let result = self
            .read(&self.config.registry, "isAvailable", json!({ "name": normalized }))
            .await?;
        Ok(decode::as_bool(&result, "isAvailable")?)
    }

    /// Registry token id for a name, `None` if never registered.
    pub async fn token_id(&self, name: &str) -> Result<Option<TokenId>, NamesError> {
        let normalized = name::normalize(name);
        Ok(self.fetch_token_id(&normalized).await?)
    }

    /// Resolve a name to its address, `None` when unset.
    pub async fn resolve(&self, name: &str) -> Result<Option<String>, NamesError> {
        let normalized = name::normalize(name);
        let result = self
            .read(&self.config.resolver, "resolve", json!({ "name": normalized }))
            .await?;
        let address = decode::as_str(&result, "resolve")?;
        if address.is_empty() || address == ZERO_ADDRESS {
            return Ok(None);
        }
        Ok(Some(address.to_string()))
    }

    /// Primary name for an address (with `.abs`), `None` when unset.
    pub async fn reverse_resolve(&self, address: &str) -> Result<Option<String>, NamesError> {
        let result = self
            .read(&self.config.resolver, "reverseResolve", json!({ "user": address }))
            .await?;
        let resolved = decode::as_str(&result, "reverseResolve")?;
        if resolved.is_empty() {
            return Ok(None);
        }
        Ok(Some(resolved.to_string()))
    }

    /// Alias for [`reverse_resolve`](Self::reverse_resolve), matching the
    /// resolver's "primary name" terminology.
    pub async fn primary_name(&self, address: &str) -> Result<Option<String>, NamesError> {
        self.reverse_resolve(address).await
    }

    /// Complete profile for a name or an address.
    ///
    /// An address fetches its primary-name profile in one call; a name goes
    /// through the token id first, so the second call is only issued once
    /// the first has succeeded.
    pub async fn profile(&self, name_or_address: &str) -> Result<Option<NameProfile>, NamesError> {
        let raw = if name::is_address(name_or_address) {
            self.read(
                &self.config.resolver,
                "getPrimaryData",
                json!({ "user": name_or_address }),
            )
            .await?
        } else {
            let normalized = name::normalize(name_or_address);
            let Some(token_id) = self.fetch_token_id(&normalized).await? else {
                return Ok(None);
            };
            self.read(
                &self.config.resolver,
                "getNameData",
                json!({ "tokenId": token_id.0 }),
            )
            .await?
        };

        let profile = decode::name_profile(&raw)?;
        if profile.is_empty() {
            return Ok(None);
        }
        Ok(Some(profile))
    }

    /// A single text record for a name, `None` if the name is unregistered.
    pub async fn text_record(
        &self,
        name: &str,
        key: &str,
    ) -> Result<Option<String>, NamesError> {
        let normalized = name::normalize(name);
        let Some(token_id) = self.fetch_token_id(&normalized).await? else {
            return Ok(None);
        };
        let result = self
            .read(
                &self.config.resolver,
                "getText",
                json!({ "tokenId": token_id.0, "key": key }),
            )
            .await?;
        Ok(Some(decode::as_str(&result, "getText")?.to_string()))
    }

    /// Text record keys the resolver accepts.
    pub async fn allowed_text_keys(&self) -> Result<Vec<String>, NamesError> {
        let result = self
            .read(&self.config.resolver, "getAllowedTextKeys", json!({}))
            .await?;
        Ok(decode::string_list(&result, "getAllowedTextKeys")?)
    }

    /// Expiry information for a name, `None` if unregistered.
    ///
    /// "Now" is sampled once, so `is_expired` and `days_until_expiry`
    /// always describe the same instant.
    pub async fn name_expiry(&self, name: &str) -> Result<Option<NameExpiry>, NamesError> {
        let normalized = name::normalize(name);
        let Some(token_id) = self.fetch_token_id(&normalized).await? else {
            return Ok(None);
        };
        let raw = self
            .read(
                &self.config.registry,
                "getNameData",
                json!({ "tokenId": token_id.0 }),
            )
            .await?;
        let data = decode::name_data(&raw)?;

        let status = expiry_status(data.expires_at, unix_now());
        Ok(Some(NameExpiry {
            registered_at: data.registered_at,
            expires_at: data.expires_at,
            tier: data.tier,
            is_expired: status.is_expired,
            days_until_expiry: status.days_until_expiry,
        }))
    }

    /// Registration pricing: tier from the name's length, annual price from
    /// the controller, total as exact multiplication.
    pub async fn price_quote(&self, name: &str, years: u32) -> Result<PriceQuote, NamesError> {
        let normalized = name::normalize(name);
        let Some(tier) = tier_for_name(&normalized) else {
            return Err(NamesError::new(
                ErrorKind::Validation,
                format!("InvalidLength: '{normalized}' has no pricing tier"),
            ));
        };

        let result = self
            .read(
                &self.config.controller,
                "getTierPrice",
                json!({ "tier": tier.code() }),
            )
            .await?;
        let per_year_wei = decode::as_u128(&result, "getTierPrice")?;
        let total_wei = total_price(per_year_wei, years)?;

        Ok(PriceQuote {
            tier,
            per_year_wei,
            years,
            total_wei,
            total_formatted: format_ether(total_wei),
        })
    }

    /// Current launch phase of the controller.
    pub async fn mint_phase(&self) -> Result<MintPhase, NamesError> {
        let result = self
            .read(&self.config.controller, "getCurrentPhase", json!({}))
            .await?;
        Ok(decode::mint_phase(&result)?)
    }

    /// Validate a name against the on-chain validator, the source of truth
    /// for supported scripts. Returns the normalized form on success.
    pub async fn validate_name(&self, name: &str) -> Result<String, NamesError> {
        let normalized = name::normalize(name);
        let result = self
            .read(
                &self.config.validator,
                "validateName",
                json!({ "name": normalized }),
            )
            .await?;
        Ok(decode::as_str(&result, "validateName")?.to_string())
    }

    // ──────────────────── writes ────────────────────

    /// Set one text record. Owner only; the key must be allowed.
    pub async fn set_text(
        &self,
        token_id: &TokenId,
        key: &str,
        value: &str,
    ) -> Result<TxHash, NamesError> {
        Ok(self
            .write(
                &self.config.resolver,
                "setText",
                json!({ "tokenId": token_id.0, "key": key, "value": value }),
                0,
            )
            .await?)
    }

    /// Set several text records in one transaction.
    pub async fn batch_set_text(
        &self,
        token_id: &TokenId,
        keys: &[&str],
        values: &[&str],
    ) -> Result<TxHash, NamesError> {
        if keys.len() != values.len() {
            return Err(crate::classify::classify_message(
                "keys and values arrays must have the same length",
            ));
        }
        Ok(self
            .write(
                &self.config.resolver,
                "batchSetText",
                json!({ "tokenId": token_id.0, "keys": keys, "values": values }),
                0,
            )
            .await?)
    }

    /// Point a name at a new address. Owner only.
    pub async fn set_address(
        &self,
        token_id: &TokenId,
        address: &str,
    ) -> Result<TxHash, NamesError> {
        Ok(self
            .write(
                &self.config.resolver,
                "setAddress",
                json!({ "tokenId": token_id.0, "addr": address }),
                0,
            )
            .await?)
    }

    /// Make a name the caller's primary name, enabling reverse resolution.
    /// Payable: `fee_wei` is forwarded with the transaction.
    pub async fn set_primary_name(
        &self,
        token_id: &TokenId,
        fee_wei: u128,
    ) -> Result<TxHash, NamesError> {
        Ok(self
            .write(
                &self.config.resolver,
                "setPrimaryName",
                json!({ "tokenId": token_id.0 }),
                fee_wei,
            )
            .await?)
    }

    /// Clear the caller's primary name. No fee.
    pub async fn unset_primary_name(&self) -> Result<TxHash, NamesError> {
        Ok(self
            .write(&self.config.resolver, "unsetPrimaryName", json!({}), 0)
            .await?)
    }

    /// Second suspension point of a write: wait for the transaction to be
    /// mined or rejected.
    pub async fn confirm(&self, tx: &TxHash) -> Result<(), NamesError> {
        debug!(tx = %tx, "awaiting confirmation");
        Ok(self.provider.wait_for_confirmation(tx).await?)
    }

    // ──────────────────── internals ────────────────────

    async fn fetch_token_id(&self, normalized: &str) -> Result<Option<TokenId>, Error> {
        let result = self
            .read(
                &self.config.registry,
                "getTokenId",
                json!({ "name": normalized }),
            )
            .await?;
        let token_id = decode::token_id(&result)?;
        if token_id.is_zero() {
            return Ok(None);
        }
        Ok(Some(token_id))
    }

    fn normalized_or_reject(&self, name: &str) -> Result<String, NamesError> {
        let normalized = name::normalize(name);
        if name::name_length(&normalized) < MIN_NAME_LENGTH {
            return Err(NamesError::new(
                ErrorKind::Validation,
                format!(
                    "InvalidLength: '{normalized}' is shorter than the {MIN_NAME_LENGTH} character minimum"
                ),
            ));
        }
        Ok(normalized)
    }

    async fn read(
        &self,
        address: &str,
        function: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, Error> {
        debug!(address, function, "contract read");
        self.provider.read(address, function, args).await
    }

    async fn write(
        &self,
        address: &str,
        function: &str,
        args: serde_json::Value,
        value_wei: u128,
    ) -> Result<TxHash, Error> {
        debug!(address, function, value_wei, "contract write");
        self.provider.write(address, function, args, value_wei).await
    }
}
