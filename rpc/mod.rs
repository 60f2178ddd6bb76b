// ============================================================================
// RPC Module - Node Communication & Raw Transactions
// ============================================================================
//
// Everything that talks to the satschain node or builds the payloads it
// accepts.
//
// Components:
//   - raw_transaction: nine-field RLP transaction builder (nosigner trailer)
//   - node_rpc: JSON-RPC 2.0 dispatch client
//
// ============================================================================

pub mod raw_transaction;
pub mod node_rpc;

pub use raw_transaction::*;
pub use node_rpc::*;
