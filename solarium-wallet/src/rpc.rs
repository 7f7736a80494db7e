//! Ledger RPC capability and its HTTP JSON-RPC implementation.

use std::time::Duration;

use solarium_core::{encode_address, Lamports};

/// Errors from the ledger RPC collaborator.
///
/// All variants are transient from the facade's point of view; none carry
/// a partial balance.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RpcError {
    /// The request never produced an HTTP response (I/O, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not a valid `getBalance` result.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// The single operation the wallet needs from a ledger node.
///
/// Transport, retry policy, and endpoint selection live behind this seam.
pub trait LedgerRpc: Send + Sync {
    /// Fetch the balance of the account in atomic units.
    fn get_balance(&self, public_key: &[u8; 32]) -> Result<Lamports, RpcError>;
}

/// JSON-RPC 2.0 client for a Solana HTTP endpoint.
pub struct HttpRpcClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpRpcClient {
    /// Build a client for `url` with the given connect and read timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(url: &str, connect_timeout: Duration, read_timeout: Duration) -> Result<Self, RpcError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }
}

impl LedgerRpc for HttpRpcClient {
    fn get_balance(&self, public_key: &[u8; 32]) -> Result<Lamports, RpcError> {
        let address = encode_address(public_key);
        tracing::debug!(%address, url = %self.url, "requesting balance");

        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [address],
        });

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| RpcError::Protocol(e.to_string()))?;

        if let Some(error) = body.get("error") {
            return Err(RpcError::Protocol(error.to_string()));
        }

        let lamports = body
            .pointer("/result/value")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| RpcError::Protocol("missing result.value".to_owned()))?;

        tracing::debug!(%address, lamports, "balance received");
        Ok(Lamports::new(lamports))
    }
}
