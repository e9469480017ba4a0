//! Static registry of governance attestation schemas.
//!
//! The table below is the single source of truth for every command the
//! protocol attests: field lists, resolver category, revocability, and
//! reference-identifier policy. It is declared once and never mutated;
//! lookups go through a lazily built index.
//!
//! A schema's UID is content-addressed: keccak-256 over the packed
//! registration tuple (fields signature, resolver address, revocable byte),
//! exactly the bytes the on-chain registry hashes. Because the resolver is
//! bound per chain, the UID is chain-dependent for every schema whose
//! resolver category is not `None`.

use alloy_primitives::{Address, B256};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use sha3::{Digest, Keccak256};

use crate::chain;
use crate::error::SchemaError;
use crate::model::{Field, FieldType, RefUidPolicy, ResolverKind, SchemaDefinition};

/// Every governance command the registry knows about, in deployment order.
pub static SCHEMAS: &[SchemaDefinition] = &[
    SchemaDefinition {
        name: "INSTANTIATE",
        fields: &[
            Field { ty: FieldType::Uint8, name: "protocol_version" },
            Field { ty: FieldType::String, name: "name" },
            Field { ty: FieldType::Uint32, name: "voting_period" },
            Field { ty: FieldType::Uint32, name: "voting_delay" },
        ],
        resolver: ResolverKind::Entity,
        revocable: true,
        ref_uid: RefUidPolicy::None,
    },
    SchemaDefinition {
        name: "PERMA_INSTANTIATE",
        fields: &[
            Field { ty: FieldType::Uint8, name: "protocol_version" },
            Field { ty: FieldType::String, name: "name" },
            Field { ty: FieldType::Uint32, name: "voting_period" },
            Field { ty: FieldType::Uint32, name: "voting_delay" },
        ],
        resolver: ResolverKind::Entity,
        revocable: false,
        ref_uid: RefUidPolicy::None,
    },
    SchemaDefinition {
        name: "GRANT",
        fields: &[
            Field { ty: FieldType::Address, name: "verb" },
            Field { ty: FieldType::String, name: "permission" },
            Field { ty: FieldType::Uint8, name: "level" },
            Field { ty: FieldType::String, name: "filter" },
        ],
        resolver: ResolverKind::Entity,
        revocable: true,
        ref_uid: RefUidPolicy::None,
    },
    SchemaDefinition {
        name: "CREATE_PROPOSAL_TYPE",
        fields: &[
            Field { ty: FieldType::Uint32, name: "quorum" },
            Field { ty: FieldType::Uint32, name: "approval_threshold" },
            Field { ty: FieldType::String, name: "name" },
            Field { ty: FieldType::String, name: "description" },
            Field { ty: FieldType::String, name: "class" },
        ],
        resolver: ResolverKind::Entity,
        revocable: true,
        ref_uid: RefUidPolicy::None,
    },
    SchemaDefinition {
        name: "CREATE_PROPOSAL",
        fields: &[
            Field { ty: FieldType::String, name: "title" },
            Field { ty: FieldType::String, name: "description" },
            Field { ty: FieldType::Uint64, name: "startts" },
            Field { ty: FieldType::Uint64, name: "endts" },
            Field { ty: FieldType::String, name: "tags" },
        ],
        resolver: ResolverKind::None,
        revocable: true,
        // May reference the proposal type it instantiates.
        ref_uid: RefUidPolicy::Optional,
    },
    SchemaDefinition {
        name: "CHECK_PROPOSAL",
        fields: &[
            Field { ty: FieldType::StringArray, name: "passed" },
            Field { ty: FieldType::StringArray, name: "failed" },
        ],
        resolver: ResolverKind::Entity,
        revocable: false,
        ref_uid: RefUidPolicy::Required,
    },
    SchemaDefinition {
        name: "SET_PROPOSAL_TYPE",
        fields: &[Field { ty: FieldType::Bytes32, name: "proposal_id" }],
        resolver: ResolverKind::Entity,
        revocable: true,
        ref_uid: RefUidPolicy::Required,
    },
    SchemaDefinition {
        name: "SET_PARAM_VALUE",
        fields: &[
            Field { ty: FieldType::String, name: "param_name" },
            Field { ty: FieldType::Uint256, name: "param_value" },
        ],
        resolver: ResolverKind::Entity,
        revocable: false,
        ref_uid: RefUidPolicy::None,
    },
    SchemaDefinition {
        name: "DELEGATED_SIMPLE_VOTE",
        fields: &[
            Field { ty: FieldType::Address, name: "voter" },
            Field { ty: FieldType::Int8, name: "choice" },
            Field { ty: FieldType::String, name: "reason" },
        ],
        resolver: ResolverKind::Votes,
        revocable: false,
        ref_uid: RefUidPolicy::Required,
    },
    SchemaDefinition {
        name: "DELEGATED_ADVANCED_VOTE",
        fields: &[
            Field { ty: FieldType::Address, name: "voter" },
            Field { ty: FieldType::String, name: "choice" },
            Field { ty: FieldType::String, name: "reason" },
        ],
        resolver: ResolverKind::Votes,
        revocable: false,
        ref_uid: RefUidPolicy::Required,
    },
    SchemaDefinition {
        name: "SIMPLE_VOTE",
        fields: &[
            Field { ty: FieldType::Int8, name: "choice" },
            Field { ty: FieldType::String, name: "reason" },
        ],
        resolver: ResolverKind::Votes,
        revocable: false,
        ref_uid: RefUidPolicy::Required,
    },
    SchemaDefinition {
        name: "ADVANCED_VOTE",
        fields: &[
            Field { ty: FieldType::String, name: "choice" },
            Field { ty: FieldType::String, name: "reason" },
        ],
        resolver: ResolverKind::Votes,
        revocable: false,
        ref_uid: RefUidPolicy::Required,
    },
    SchemaDefinition {
        name: "DELETE",
        fields: &[
            Field { ty: FieldType::String, name: "verb" },
            Field { ty: FieldType::Bytes32, name: "schema_id" },
        ],
        resolver: ResolverKind::Entity,
        revocable: false,
        ref_uid: RefUidPolicy::Required,
    },
];

lazy_static! {
    static ref BY_NAME: FxHashMap<&'static str, &'static SchemaDefinition> =
        SCHEMAS.iter().map(|s| (s.name, s)).collect();
}

/// Looks up a schema by command name, case-insensitively.
pub fn lookup(command: &str) -> Result<&'static SchemaDefinition, SchemaError> {
    let canonical = command.to_ascii_uppercase();
    BY_NAME
        .get(canonical.as_str())
        .copied()
        .ok_or_else(|| SchemaError::UnknownCommand { name: command.to_string() })
}

/// Returns the resolver address bound for a command on a chain.
///
/// Schemas with no resolver category map to the zero address.
pub fn resolver_address(command: &str, chain_id: u64) -> Result<Address, SchemaError> {
    let schema = lookup(command)?;
    let deployment = chain::deployment(chain_id)?;
    Ok(deployment.resolver(schema.resolver))
}

/// Derives the content-addressed UID for a command's schema on a chain.
pub fn schema_uid(command: &str, chain_id: u64) -> Result<B256, SchemaError> {
    let schema = lookup(command)?;
    let resolver = chain::deployment(chain_id)?.resolver(schema.resolver);
    Ok(uid_for(schema, resolver))
}

/// Derives the UID for every registered schema on a chain.
pub fn schema_uids(chain_id: u64) -> Result<Vec<(&'static str, B256)>, SchemaError> {
    let deployment = chain::deployment(chain_id)?;
    Ok(SCHEMAS
        .iter()
        .map(|schema| (schema.name, uid_for(schema, deployment.resolver(schema.resolver))))
        .collect())
}

/// The material for the on-chain registry's `register(string,address,bool)`
/// call, handed as-is to an external broadcaster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub fields_signature: String,
    pub resolver: Address,
    pub revocable: bool,
}

/// Builds the registration tuple for a command on a chain.
pub fn registration(command: &str, chain_id: u64) -> Result<Registration, SchemaError> {
    let schema = lookup(command)?;
    let resolver = chain::deployment(chain_id)?.resolver(schema.resolver);
    Ok(Registration {
        fields_signature: schema.fields_signature(),
        resolver,
        revocable: schema.revocable,
    })
}

/// keccak-256 over the packed registration tuple. No ABI word alignment:
/// the signature's raw UTF-8, the resolver's 20 bytes, one revocable byte.
fn uid_for(schema: &SchemaDefinition, resolver: Address) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(schema.fields_signature().as_bytes());
    hasher.update(resolver.as_slice());
    hasher.update([schema.revocable as u8]);
    B256::from_slice(hasher.finalize().as_slice())
}
