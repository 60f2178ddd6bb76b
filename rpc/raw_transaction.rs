//! Raw Transaction Construction for Satschain Nodes
//!
//! Builds the nine-field legacy transaction record and RLP-encodes it for
//! eth_sendRawTransaction. No real signing happens here: satschain nodes
//! run the nosigner signature algorithm, which recovers the sender
//! directly from `s` and never checks `r` against a curve point, so the
//! trailer carries caller-supplied placeholders.

use primitive_types::U256;
use rlp::RlpStream;

use crate::coerce::{self, BinaryLike, CoerceError, IntegerLike};

/// Recipient address width
pub const ADDRESS_BYTES: usize = 20;

/// Gas limit used by the plain value-transfer scenarios
pub const TRANSFER_GAS_LIMIT: u64 = 0x21000;

/// EIP-155 v offset for rec_id = 0, the value the nosigner always emits
pub const V_BASE_OFFSET: u64 = 35;

/// The nine-field record, resolved to canonical values and ready to
/// encode. Field order matches the node's expected transaction encoding
/// exactly; reordering anything here means rejection at the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub nonce: U256,
    /// Pinned to zero on satschain devnets
    pub gas_price: U256,
    pub gas_limit: U256,
    /// 20 bytes, or empty for contract creation
    pub to: Vec<u8>,
    pub value: U256,
    pub data: Vec<u8>,
    /// chain_id * 2 + 35
    pub v: U256,
    /// Arbitrary record number, stands in for the signature's r
    pub r: U256,
    /// Sender address, stands in for the signature's s
    pub s: U256,
}

impl RawTransaction {
    /// Resolve loosely-typed inputs into the canonical nine-field record.
    ///
    /// `record_no` and `from_addr` land in `r` and `s` verbatim. A
    /// recipient of `None` becomes the empty byte string (contract
    /// creation); anything else must fit in 20 bytes, the only failure
    /// path in the builder.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        chain_id: u64,
        nonce: Option<IntegerLike>,
        gas_limit: Option<IntegerLike>,
        to: Option<IntegerLike>,
        value: Option<IntegerLike>,
        data: Option<BinaryLike>,
        record_no: Option<IntegerLike>,
        from_addr: Option<IntegerLike>,
    ) -> Result<Self, CoerceError> {
        let to = match to {
            None => Vec::new(),
            Some(addr) => coerce::to_fixed_bytes(Some(&addr), ADDRESS_BYTES)?,
        };

        Ok(RawTransaction {
            nonce: coerce::to_u256(nonce.as_ref()),
            gas_price: U256::zero(),
            gas_limit: coerce::to_u256(gas_limit.as_ref()),
            to,
            value: coerce::to_u256(value.as_ref()),
            data: coerce::to_bytes(data.as_ref()),
            v: U256::from(chain_id) * U256::from(2u64) + U256::from(V_BASE_OFFSET),
            r: coerce::to_u256(record_no.as_ref()),
            s: coerce::to_u256(from_addr.as_ref()),
        })
    }

    /// Plain value transfer: empty payload, the standard transfer gas
    /// limit, recipient required.
    pub fn transfer(
        chain_id: u64,
        nonce: u64,
        to: IntegerLike,
        value: IntegerLike,
        record_no: u64,
        from_addr: IntegerLike,
    ) -> Result<Self, CoerceError> {
        Self::build(
            chain_id,
            Some(nonce.into()),
            Some(TRANSFER_GAS_LIMIT.into()),
            Some(to),
            Some(value),
            None,
            Some(record_no.into()),
            Some(from_addr),
        )
    }

    /// RLP-encode the nine fields in the node's expected order
    pub fn encode(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(9);
        stream.append(&self.nonce);
        stream.append(&self.gas_price);
        stream.append(&self.gas_limit);
        stream.append(&self.to);
        stream.append(&self.value);
        stream.append(&self.data);
        stream.append(&self.v);
        stream.append(&self.r);
        stream.append(&self.s);
        stream.out().to_vec()
    }

    /// The 0x-prefixed hex form submitted over eth_sendRawTransaction
    pub fn to_rpc_hex(&self) -> String {
        format!("0x{}", hex::encode(self.encode()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
