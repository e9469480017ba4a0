//! Error types for identifier packing, schema lookup, and request building.

use thiserror::Error;

use crate::model::RefUidPolicy;

/// Error while packing or unpacking a 20-byte DAO identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{field} value {value} exceeds maximum {max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("invalid {context}: {token:?}")]
    InvalidEncoding {
        context: &'static str,
        token: String,
    },

    #[error("address must decode to exactly 20 bytes, got {len}")]
    InvalidLength { len: usize },
}

/// Error while resolving a schema or its per-chain bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown attestation command: {name:?}")]
    UnknownCommand { name: String },

    #[error("no deployment configured for chain id {chain_id}")]
    UnsupportedChain { chain_id: u64 },
}

/// Error while validating and normalizing an attestation payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{command} takes {fields} schema arguments (refUID {policy}), got {supplied}")]
    ArityMismatch {
        command: &'static str,
        fields: usize,
        policy: RefUidPolicy,
        supplied: usize,
    },

    #[error("malformed refUID (want 0x followed by 64 hex digits): {token:?}")]
    InvalidReference { token: String },

    #[error("bytes32 value must start with 0x: {token:?}")]
    InvalidEncoding { token: String },

    #[error("value too long for bytes32: {token:?}")]
    ValueTooLong { token: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
