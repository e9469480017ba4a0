//! Data model types for governance attestations.

pub mod schema;

pub use schema::{Field, FieldType, RefUidPolicy, ResolverKind, SchemaDefinition};
