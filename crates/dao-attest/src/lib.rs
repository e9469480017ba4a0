//! Deterministic DAO identifiers and attestation schema validation.
//!
//! This crate derives the collision-resistant identifiers used by on-chain
//! governance tooling and validates/normalizes attestation payloads before
//! they are handed to an external ABI encoder and broadcaster.
//!
//! # Overview
//!
//! Three layers, leaf-first:
//! - **Address codec**: packs a human-readable label plus chain id, version,
//!   and nonce into a 20-byte address with an embedded keccak checksum, and
//!   recovers the fields from packed form.
//! - **Schema registry**: a static table of named attestation commands with
//!   typed field lists, resolver bindings, and revocability flags, plus
//!   content-addressed schema UID derivation.
//! - **Request builder**: validates argument arity against a schema,
//!   applies the reference-identifier policy, normalizes fixed-width hex
//!   fields, and emits the ordered payload ready for ABI encoding.
//!
//! # Quick Start
//!
//! ```rust
//! use alloy_primitives::hex;
//! use dao_attest::{build_request, pack_dao_id};
//!
//! // Pack a DAO identifier: label, chain id, version, nonce.
//! let dao = pack_dao_id("towns", 8453, 1, 0).unwrap();
//! assert_eq!(
//!     hex::encode_prefixed(dao),
//!     "0x746f776e732e2e2e2e2e00002105010000e5ebe1"
//! );
//!
//! // Build a validated attestation payload on Sepolia.
//! let request = build_request(
//!     "instantiate",
//!     11155111,
//!     dao,
//!     &["1", "Towns DAO", "604800", "86400"],
//! )
//! .unwrap();
//! assert_eq!(request.abi_signature(), "f(uint8,string,uint32,uint32)");
//! ```
//!
//! # Modules
//!
//! - [`codec`]: 20-byte identifier packing/unpacking
//! - [`model`]: Typed schema definitions
//! - [`registry`]: Static schema table and UID derivation
//! - [`request`]: Payload validation and normalization
//! - [`chain`]: Per-chain deployment configuration
//! - [`error`]: Error types
//!
//! # Determinism
//!
//! Every derivation here is a pure function of its inputs: identical inputs
//! yield identical bytes across calls and across processes. Schema UIDs are
//! hashed over the same packed bytes the on-chain registry hashes, so they
//! must reproduce bit-for-bit to be usable. Nothing in this crate performs
//! network I/O, signs, or verifies on-chain state.

pub mod chain;
pub mod codec;
pub mod error;
pub mod model;
pub mod registry;
pub mod request;

// Re-export commonly used types at crate root
pub use chain::{ChainDeployment, deployment};
pub use codec::{DaoIdParts, format_dao_id, pack_dao_id, unpack_dao_id};
pub use error::{CodecError, RequestError, SchemaError};
pub use model::{Field, FieldType, RefUidPolicy, ResolverKind, SchemaDefinition};
pub use registry::{Registration, lookup, registration, resolver_address, schema_uid, schema_uids};
pub use request::{AttestationRequest, build_request, normalize_bytes32};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
