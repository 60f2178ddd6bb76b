// ============================================================================
// Satschain Node RPC - JSON-RPC 2.0 Dispatch
// ============================================================================
//
// Thin client for the node's JSON-RPC surface. One POST per call, raw
// response text handed back unparsed, no retry and no status-code
// recovery: a transport failure propagates and the scenario dies with it.
//
// Methods used:
//   txpool_clear                 - drop every pending transaction
//   eth_sendRawTransaction       - submit a 0x-prefixed raw transaction
//   miner_mineOnceSynchronously  - mine one block at a given timestamp
//   miner_mineBulkSynchronously  - mine a run of blocks, timestamps increment
//
// These are node-specific administrative extensions; a stock Ethereum
// node does not expose the txpool_clear / miner_* ones.
//
// ============================================================================

use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default node JSON-RPC endpoint
pub const DEFAULT_RPC_ENDPOINT: &str = "http://localhost:8545";

/// Default timeout for node RPC calls (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// First request id handed out by a fresh client
pub const FIRST_REQUEST_ID: u64 = 1;

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug, Clone)]
pub enum NodeRpcError {
    /// HTTP transport failed (connection refused, timeout, dead socket)
    RequestFailed(String),
}

impl std::fmt::Display for NodeRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRpcError::RequestFailed(msg) => write!(f, "Node RPC request failed: {}", msg),
        }
    }
}

impl std::error::Error for NodeRpcError {}

// ============================================================================
// REQUEST ENVELOPE
// ============================================================================

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

// ============================================================================
// CONFIG
// ============================================================================

/// Configuration for the node RPC connection
#[derive(Debug, Clone)]
pub struct NodeRpcConfig {
    /// Node endpoint URL
    pub endpoint: String,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for NodeRpcConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RPC_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl NodeRpcConfig {
    /// Create config from the SATSCHAIN_RPC_URL environment variable,
    /// falling back to the local default endpoint
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("SATSCHAIN_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_ENDPOINT.to_string());
        Self {
            endpoint,
            ..Default::default()
        }
    }
}

// ============================================================================
// NODE RPC CLIENT
// ============================================================================

/// Client for the node's JSON-RPC surface.
///
/// Owns the request-id counter: ids start at 1 and advance by exactly one
/// per dispatched call, including calls that die in transport. They are
/// never reset or reused within a client's lifetime.
pub struct NodeRpc {
    /// Configuration
    config: NodeRpcConfig,

    /// HTTP client, built once with the configured timeout
    client: Client,

    /// Id the next call will use
    request_id: AtomicU64,
}

impl NodeRpc {
    /// Create a new client from explicit config
    pub fn new(config: NodeRpcConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        NodeRpc {
            config,
            client,
            request_id: AtomicU64::new(FIRST_REQUEST_ID),
        }
    }

    /// Create a client from the environment
    pub fn from_env() -> Self {
        Self::new(NodeRpcConfig::from_env())
    }

    /// Node endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Peek at the id the next call will use
    pub fn next_request_id(&self) -> u64 {
        self.request_id.load(Ordering::Relaxed)
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    /// POST one JSON-RPC 2.0 request and hand back the raw response text.
    ///
    /// The caller interprets the body; nothing is parsed or checked here.
    pub async fn send_request(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<String, NodeRpcError> {
        // the id advances even when the transport fails below
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);

        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method: method.to_string(),
            params,
            id,
        };

        debug!(method, id, "dispatching node RPC request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| NodeRpcError::RequestFailed(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| NodeRpcError::RequestFailed(e.to_string()))
    }

    // ========================================================================
    // NODE METHODS
    // ========================================================================

    /// txpool_clear - drop every pending transaction on the node
    pub async fn txpool_clear(&self) -> Result<String, NodeRpcError> {
        self.send_request("txpool_clear", vec![]).await
    }

    /// eth_sendRawTransaction - submit a 0x-prefixed raw transaction
    pub async fn eth_send_raw_transaction(
        &self,
        raw_tx_hex: &str,
    ) -> Result<String, NodeRpcError> {
        self.send_request("eth_sendRawTransaction", vec![json!(raw_tx_hex)])
            .await
    }

    /// miner_mineOnceSynchronously - mine one block with the given
    /// timestamp, responds once the block is sealed
    pub async fn miner_mine_once_synchronously(
        &self,
        block_timestamp: u64,
    ) -> Result<String, NodeRpcError> {
        self.send_request("miner_mineOnceSynchronously", vec![json!(block_timestamp)])
            .await
    }

    /// miner_mineBulkSynchronously - mine `count` blocks starting at
    /// `start_timestamp`; the node bumps the timestamp once per block and
    /// stops early if a block fails to seal
    pub async fn miner_mine_bulk_synchronously(
        &self,
        start_timestamp: u64,
        count: u64,
    ) -> Result<String, NodeRpcError> {
        self.send_request(
            "miner_mineBulkSynchronously",
            vec![json!(start_timestamp), json!(count)],
        )
        .await
    }
}

// ============================================================================
// TESTS
// ============================================================================
