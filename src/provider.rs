use async_trait::async_trait;

use crate::error::Error;
use crate::types::TxHash;

/// Boundary to the contract-call layer (RPC transport, ABI encoding,
/// signing). The SDK owns no wire format; arguments and results travel as
/// JSON values keyed by ABI parameter names.
///
/// Implementations map their own failures to [`Error::Provider`] with the
/// underlying message intact, so revert strings survive for
/// [`crate::classify::classify_message`].
#[async_trait]
pub trait ContractProvider: Send + Sync {
    /// Query a view function. Returns the decoded result.
    async fn read(
        &self,
        address: &str,
        function: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, Error>;

    /// Submit a transaction, attaching `value_wei` for payable functions.
    /// Resolves as soon as the transaction is accepted by the node.
    async fn write(
        &self,
        address: &str,
        function: &str,
        args: serde_json::Value,
        value_wei: u128,
    ) -> Result<TxHash, Error>;

    /// Resolve once the transaction is mined, or fail if it was rejected.
    async fn wait_for_confirmation(&self, tx: &TxHash) -> Result<(), Error>;

    /// Chain id the provider is currently connected to.
    async fn chain_id(&self) -> Result<u64, Error>;
}
