//! Typed schema definitions for governance attestation commands.
//!
//! Each command is declared once, statically, with its full wire contract:
//! the ordered field list, the resolver category it binds to, whether the
//! resulting attestation is revocable, and how a trailing reference
//! identifier is handled.

use std::fmt;

/// ABI value types that may appear in a schema field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Uint8,
    Uint32,
    Uint64,
    Uint256,
    Int8,
    Address,
    String,
    Bytes32,
    StringArray,
}

impl FieldType {
    /// Returns the Solidity type token used in signatures.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Uint8 => "uint8",
            FieldType::Uint32 => "uint32",
            FieldType::Uint64 => "uint64",
            FieldType::Uint256 => "uint256",
            FieldType::Int8 => "int8",
            FieldType::Address => "address",
            FieldType::String => "string",
            FieldType::Bytes32 => "bytes32",
            FieldType::StringArray => "string[]",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared field: type plus name, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub ty: FieldType,
    pub name: &'static str,
}

/// Which deployed resolver contract a schema binds to.
///
/// The binding is per-chain; this only tags the category. `None` schemas
/// resolve to the zero address on every chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    Entity,
    Votes,
    None,
}

/// Whether a trailing 32-byte reference identifier accompanies the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefUidPolicy {
    /// No refUID token is accepted; the request carries the zero value.
    None,
    /// A trailing refUID token may be supplied; defaults to the zero value.
    Optional,
    /// A trailing refUID token must be supplied.
    Required,
}

impl fmt::Display for RefUidPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RefUidPolicy::None => "none",
            RefUidPolicy::Optional => "optional",
            RefUidPolicy::Required => "required",
        })
    }
}

/// A named attestation command and its full wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDefinition {
    /// Canonical (uppercase) command name.
    pub name: &'static str,
    /// Declared fields in wire order.
    pub fields: &'static [Field],
    pub resolver: ResolverKind,
    pub revocable: bool,
    pub ref_uid: RefUidPolicy,
}

impl SchemaDefinition {
    /// Renders the registration string hashed into the schema UID:
    /// comma-joined `"type name"` pairs in declared order, no padding.
    ///
    /// This must match the bytes the on-chain registry hashes, byte for byte.
    pub fn fields_signature(&self) -> String {
        let mut out = String::new();
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(field.ty.as_str());
            out.push(' ');
            out.push_str(field.name);
        }
        out
    }

    /// Renders the call signature handed to the external ABI encoder,
    /// e.g. `f(uint8,string,uint32,uint32)`.
    pub fn abi_signature(&self) -> String {
        let mut out = String::from("f(");
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(field.ty.as_str());
        }
        out.push(')');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOTE: SchemaDefinition = SchemaDefinition {
        name: "SIMPLE_VOTE",
        fields: &[
            Field { ty: FieldType::Int8, name: "choice" },
            Field { ty: FieldType::String, name: "reason" },
        ],
        resolver: ResolverKind::Votes,
        revocable: false,
        ref_uid: RefUidPolicy::Required,
    };

    #[test]
    fn test_fields_signature_format() {
        assert_eq!(VOTE.fields_signature(), "int8 choice,string reason");
    }

    #[test]
    fn test_abi_signature_format() {
        assert_eq!(VOTE.abi_signature(), "f(int8,string)");
    }

    #[test]
    fn test_field_type_tokens() {
        assert_eq!(FieldType::Uint256.as_str(), "uint256");
        assert_eq!(FieldType::StringArray.as_str(), "string[]");
        assert_eq!(FieldType::Bytes32.to_string(), "bytes32");
    }

    #[test]
    fn test_empty_field_list() {
        let schema = SchemaDefinition { fields: &[], ..VOTE };
        assert_eq!(schema.fields_signature(), "");
        assert_eq!(schema.abi_signature(), "f()");
    }
}
