//! Packing and unpacking of 20-byte DAO identifiers.
//!
//! A DAO identifier is a valid Ethereum address with internal structure:
//!
//! ```text
//! offset  0         10        14    15      17        20
//!         | label    | chain id | ver | nonce | checksum |
//!         | 10 bytes | 4 BE     | 1   | 2 BE  | 3        |
//! ```
//!
//! The label is ASCII, right-padded with `'.'`; the checksum is the first
//! three bytes of keccak-256 over the preceding 17 bytes. Packing always
//! computes the checksum; unpacking only extracts it. Callers that want
//! tamper detection use [`DaoIdParts::checksum_matches`].

use alloy_primitives::{Address, hex};
use sha3::{Digest, Keccak256};

use crate::error::CodecError;

/// Total byte length of a packed identifier.
pub const DAO_ID_LEN: usize = 20;

/// Byte length of the label segment.
pub const LABEL_LEN: usize = 10;

/// Filler byte used to right-pad short labels.
pub const LABEL_PAD: u8 = b'.';

/// Byte length of the trailing checksum segment.
pub const CHECKSUM_LEN: usize = 3;

/// Length of the checksummed prefix: label + chain id + version + nonce.
const PARTIAL_LEN: usize = 17;

/// The logical fields recovered from a packed DAO identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaoIdParts {
    /// Label with trailing pad bytes stripped. Interior `'.'` survive.
    pub label: String,
    pub chain_id: u32,
    pub version: u8,
    pub nonce: u16,
    /// Checksum bytes as stored; not re-verified during unpacking.
    pub checksum: [u8; CHECKSUM_LEN],
}

impl DaoIdParts {
    /// Recomputes the checksum from the logical fields and compares it to
    /// the stored bytes.
    ///
    /// [`unpack_dao_id`] never performs this check; it is an explicit
    /// opt-in for callers that treat the identifier as untrusted.
    pub fn checksum_matches(&self) -> bool {
        match pack_partial(&self.label, self.chain_id, self.version, self.nonce) {
            Ok(partial) => checksum(&partial) == self.checksum,
            Err(_) => false,
        }
    }
}

/// Packs a label and three integers into a 20-byte DAO identifier.
///
/// The label is right-padded with `'.'` to 10 bytes and silently truncated
/// past 10 characters. The integer arguments arrive as `u64` because they
/// come from external callers; values wider than their packed slot fail
/// with [`CodecError::OutOfRange`].
pub fn pack_dao_id(
    label: &str,
    chain_id: u64,
    version: u64,
    nonce: u64,
) -> Result<Address, CodecError> {
    let chain_id = check_range("chain_id", chain_id, u32::MAX as u64)? as u32;
    let version = check_range("version", version, u8::MAX as u64)? as u8;
    let nonce = check_range("nonce", nonce, u16::MAX as u64)? as u16;

    let partial = pack_partial(label, chain_id, version, nonce)?;
    let mut out = [0u8; DAO_ID_LEN];
    out[..PARTIAL_LEN].copy_from_slice(&partial);
    out[PARTIAL_LEN..].copy_from_slice(&checksum(&partial));
    Ok(Address::from(out))
}

/// Unpacks a DAO identifier from its hex form (`0x`-prefixed or bare).
///
/// Slices the fixed layout and strips trailing label padding. The checksum
/// is returned as stored, without recomputation.
pub fn unpack_dao_id(addr: &str) -> Result<DaoIdParts, CodecError> {
    let bytes = hex::decode(addr).map_err(|_| CodecError::InvalidEncoding {
        context: "address hex",
        token: addr.to_string(),
    })?;
    if bytes.len() != DAO_ID_LEN {
        return Err(CodecError::InvalidLength { len: bytes.len() });
    }

    let label_bytes = &bytes[..LABEL_LEN];
    if !label_bytes.is_ascii() {
        return Err(CodecError::InvalidEncoding {
            context: "label",
            token: hex::encode_prefixed(label_bytes),
        });
    }
    let label: String = label_bytes.iter().map(|&b| b as char).collect();
    let label = label.trim_end_matches(LABEL_PAD as char).to_string();

    // Length checked above; every slice below is exactly its declared width.
    let chain_id = u32::from_be_bytes(bytes[10..14].try_into().unwrap());
    let version = bytes[14];
    let nonce = u16::from_be_bytes(bytes[15..17].try_into().unwrap());
    let checksum: [u8; CHECKSUM_LEN] = bytes[17..20].try_into().unwrap();

    Ok(DaoIdParts { label, chain_id, version, nonce, checksum })
}

/// Renders a DAO identifier in its boundary form: `0x` + 40 lowercase hex.
pub fn format_dao_id(id: &Address) -> String {
    hex::encode_prefixed(id)
}

fn check_range(field: &'static str, value: u64, max: u64) -> Result<u64, CodecError> {
    if value > max {
        return Err(CodecError::OutOfRange { field, value, max });
    }
    Ok(value)
}

/// Builds the 17-byte checksummed prefix.
fn pack_partial(
    label: &str,
    chain_id: u32,
    version: u8,
    nonce: u16,
) -> Result<[u8; PARTIAL_LEN], CodecError> {
    if !label.is_ascii() {
        return Err(CodecError::InvalidEncoding {
            context: "label",
            token: label.to_string(),
        });
    }

    let mut buf = [0u8; PARTIAL_LEN];
    buf[..LABEL_LEN].fill(LABEL_PAD);
    let raw = label.as_bytes();
    let take = raw.len().min(LABEL_LEN);
    buf[..take].copy_from_slice(&raw[..take]);

    buf[LABEL_LEN..14].copy_from_slice(&chain_id.to_be_bytes());
    buf[14] = version;
    buf[15..17].copy_from_slice(&nonce.to_be_bytes());
    Ok(buf)
}

/// First three bytes of keccak-256 over the 17-byte prefix.
fn checksum(partial: &[u8; PARTIAL_LEN]) -> [u8; CHECKSUM_LEN] {
    let digest = Keccak256::digest(partial);
    [digest[0], digest[1], digest[2]]
}
