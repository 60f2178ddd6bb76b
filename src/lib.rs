/// Satschain Node Test Client
/// Exports the coercion helpers and the node RPC client as a library crate

pub mod coerce;

#[path = "../rpc/mod.rs"]
pub mod rpc;

pub use coerce::{BinaryLike, CoerceError, IntegerLike};
pub use rpc::{JsonRpcRequest, NodeRpc, NodeRpcConfig, NodeRpcError, RawTransaction};
pub use rpc::{
    ADDRESS_BYTES, DEFAULT_RPC_ENDPOINT, DEFAULT_TIMEOUT_SECS, FIRST_REQUEST_ID,
    TRANSFER_GAS_LIMIT, V_BASE_OFFSET,
};
