#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("provider error: {reason}")]
    Provider { reason: String },

    #[error("malformed response: {reason}")]
    Response { reason: String },

    #[error("price error: {reason}")]
    Price { reason: String },

    #[error("unsupported chain: {chain_id}")]
    UnsupportedChain { chain_id: u64 },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
