// ============================================================================
// Value Coercion - Loosely-Typed Inputs to Canonical Transaction Fields
// ============================================================================
//
// Test scenarios hand transaction fields around as whatever is convenient
// at the call site: integer literals, hex strings with or without a 0x
// prefix, raw bytes, or nothing at all. Everything funnels through the
// tagged unions here before encoding.
//
// Policy: absent or malformed input coerces silently to zero / empty
// bytes. The fixed-width rendering is the single place coercion can fail
// (overflow).
//
// ============================================================================

use primitive_types::U256;

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// Value needs more bytes than the requested fixed width
    Overflow { value: U256, byte_count: usize },
}

impl std::fmt::Display for CoerceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoerceError::Overflow { value, byte_count } => {
                write!(f, "Value {} does not fit in {} bytes", value, byte_count)
            }
        }
    }
}

impl std::error::Error for CoerceError {}

// ============================================================================
// TAGGED INPUT UNIONS
// ============================================================================

/// An integer-valued field, given as a literal or a hex string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerLike {
    /// Already an integer
    Int(U256),
    /// Hex digits, optional 0x prefix
    Hex(String),
}

impl From<u64> for IntegerLike {
    fn from(value: u64) -> Self {
        IntegerLike::Int(U256::from(value))
    }
}

impl From<u128> for IntegerLike {
    fn from(value: u128) -> Self {
        IntegerLike::Int(U256::from(value))
    }
}

impl From<U256> for IntegerLike {
    fn from(value: U256) -> Self {
        IntegerLike::Int(value)
    }
}

impl From<&str> for IntegerLike {
    fn from(value: &str) -> Self {
        IntegerLike::Hex(value.to_string())
    }
}

impl From<String> for IntegerLike {
    fn from(value: String) -> Self {
        IntegerLike::Hex(value)
    }
}

/// A byte-valued field, given as raw bytes or a hex string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryLike {
    /// Already bytes
    Bytes(Vec<u8>),
    /// Hex digits, optional 0x prefix
    Hex(String),
}

impl From<Vec<u8>> for BinaryLike {
    fn from(value: Vec<u8>) -> Self {
        BinaryLike::Bytes(value)
    }
}

impl From<&[u8]> for BinaryLike {
    fn from(value: &[u8]) -> Self {
        BinaryLike::Bytes(value.to_vec())
    }
}

impl From<&str> for BinaryLike {
    fn from(value: &str) -> Self {
        BinaryLike::Hex(value.to_string())
    }
}

impl From<String> for BinaryLike {
    fn from(value: String) -> Self {
        BinaryLike::Hex(value)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Coerce an integer-like value to a U256.
///
/// Hex strings lose an optional 0x prefix and parse as base-16; absence
/// and unparseable hex both coerce to zero. Never errors.
pub fn to_u256(value: Option<&IntegerLike>) -> U256 {
    match value {
        Some(IntegerLike::Int(v)) => *v,
        Some(IntegerLike::Hex(s)) => {
            let digits = s.strip_prefix("0x").unwrap_or(s.as_str());
            U256::from_str_radix(digits, 16).unwrap_or_else(|_| U256::zero())
        }
        None => U256::zero(),
    }
}

/// Coerce as [`to_u256`], then render as exactly `byte_count` big-endian
/// bytes. Fails when the value is wider than the requested width.
pub fn to_fixed_bytes(
    value: Option<&IntegerLike>,
    byte_count: usize,
) -> Result<Vec<u8>, CoerceError> {
    let v = to_u256(value);

    let needed = (v.bits() + 7) / 8;
    if needed > byte_count {
        return Err(CoerceError::Overflow {
            value: v,
            byte_count,
        });
    }

    let mut be = [0u8; 32];
    v.to_big_endian(&mut be);

    let mut out = vec![0u8; byte_count];
    if byte_count >= 32 {
        out[byte_count - 32..].copy_from_slice(&be);
    } else {
        out.copy_from_slice(&be[32 - byte_count..]);
    }
    Ok(out)
}

/// Coerce a binary-like value to raw bytes.
///
/// Hex strings lose an optional 0x prefix and hex-decode; absence and
/// invalid hex both coerce to empty bytes. Never errors.
pub fn to_bytes(value: Option<&BinaryLike>) -> Vec<u8> {
    match value {
        Some(BinaryLike::Bytes(b)) => b.clone(),
        Some(BinaryLike::Hex(s)) => {
            let digits = s.strip_prefix("0x").unwrap_or(s.as_str());
            hex::decode(digits).unwrap_or_default()
        }
        None => Vec::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
