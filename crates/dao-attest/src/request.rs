//! Attestation request building.
//!
//! Takes a command name and the caller's raw argument tokens, validates
//! arity against the schema's field list and refUID policy, normalizes
//! fixed-width hex fields, and produces the ordered payload an external
//! ABI encoder/broadcaster consumes. Everything here is synchronous and
//! pure; all failures are input-validation errors.

use alloy_primitives::{Address, B256};

use crate::error::RequestError;
use crate::model::{FieldType, RefUidPolicy, SchemaDefinition};
use crate::registry;

/// Hex-digit width of a rendered bytes32 value.
const BYTES32_HEX_DIGITS: usize = 64;

/// A validated, normalized attestation payload.
///
/// Everything the external encoder needs and nothing about transport:
/// the schema UID, the field arguments in declared order, the resolved
/// reference identifier, the recipient, and the revocability flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationRequest {
    pub schema: &'static SchemaDefinition,
    pub schema_uid: B256,
    /// The DAO identifier the attestation targets.
    pub recipient: Address,
    /// Field arguments in declared order; bytes32 values normalized,
    /// everything else passed through for downstream ABI coercion.
    pub args: Vec<String>,
    /// Zero when the schema carries no reference.
    pub ref_uid: B256,
    pub revocable: bool,
}

impl AttestationRequest {
    /// ABI call signature for the external encoder, e.g. `f(int8,string)`.
    pub fn abi_signature(&self) -> String {
        self.schema.abi_signature()
    }
}

/// Validates and normalizes an attestation invocation.
///
/// With `N` declared fields, the accepted token count depends on the
/// schema's refUID policy: `required` takes `N + 1` (last token is the
/// refUID), `optional` takes `N` or `N + 1`, `none` takes exactly `N`.
pub fn build_request(
    command: &str,
    chain_id: u64,
    recipient: Address,
    raw_args: &[&str],
) -> Result<AttestationRequest, RequestError> {
    let schema = registry::lookup(command)?;
    let schema_uid = registry::schema_uid(schema.name, chain_id)?;

    let (field_args, ref_token) = split_ref_uid(schema, raw_args)?;
    let ref_uid = match ref_token {
        Some(token) => parse_ref_uid(token)?,
        None => B256::ZERO,
    };

    let mut args = Vec::with_capacity(field_args.len());
    for (field, raw) in schema.fields.iter().zip(field_args) {
        let arg = match field.ty {
            FieldType::Bytes32 => normalize_bytes32(raw)?,
            _ => (*raw).to_string(),
        };
        args.push(arg);
    }

    Ok(AttestationRequest {
        schema,
        schema_uid,
        recipient,
        args,
        ref_uid,
        revocable: schema.revocable,
    })
}

/// Normalizes a bytes32 field argument into `0x` + 64 lowercase hex digits.
///
/// Short values are right-padded with `'0'` characters, so callers supply
/// the most-significant digits first. Digits are not re-validated as hex;
/// downstream ABI encoding owns full type validation of field values.
pub fn normalize_bytes32(token: &str) -> Result<String, RequestError> {
    let digits = token.strip_prefix("0x").ok_or_else(|| RequestError::InvalidEncoding {
        token: token.to_string(),
    })?;
    if digits.len() > BYTES32_HEX_DIGITS {
        return Err(RequestError::ValueTooLong { token: token.to_string() });
    }

    let mut out = String::with_capacity(2 + BYTES32_HEX_DIGITS);
    out.push_str("0x");
    out.push_str(&digits.to_ascii_lowercase());
    out.extend(std::iter::repeat('0').take(BYTES32_HEX_DIGITS - digits.len()));
    Ok(out)
}

/// Splits the raw token list into field arguments and an optional refUID
/// token, per the schema's policy.
fn split_ref_uid<'a>(
    schema: &'static SchemaDefinition,
    raw_args: &'a [&'a str],
) -> Result<(&'a [&'a str], Option<&'a str>), RequestError> {
    let n = schema.fields.len();
    let k = raw_args.len();
    match schema.ref_uid {
        RefUidPolicy::Required | RefUidPolicy::Optional if k == n + 1 => {
            Ok((&raw_args[..n], Some(raw_args[n])))
        }
        RefUidPolicy::Optional | RefUidPolicy::None if k == n => Ok((raw_args, None)),
        policy => Err(RequestError::ArityMismatch {
            command: schema.name,
            fields: n,
            policy,
            supplied: k,
        }),
    }
}

/// A supplied refUID must already be fully rendered: `0x` + 64 hex digits.
/// Unlike bytes32 field values it is never auto-padded.
fn parse_ref_uid(token: &str) -> Result<B256, RequestError> {
    let malformed = || RequestError::InvalidReference { token: token.to_string() };
    let digits = token.strip_prefix("0x").ok_or_else(malformed)?;
    if digits.len() != BYTES32_HEX_DIGITS {
        return Err(malformed());
    }
    digits.parse::<B256>().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;
    use proptest::prelude::*;

    use super::*;

    const SEPOLIA: u64 = 11155111;

    fn dao() -> Address {
        address!("73796e6469636174652e00aa36a701000079e0f1")
    }

    fn vote_uid() -> &'static str {
        "0x1f8b6a3c0d9e5f42b17c84a6d2e90b35c48f7a1e6d03b9525e8c41f7a2d6e013"
    }

    #[test]
    fn test_required_refuid_arity() {
        // DELEGATED_SIMPLE_VOTE declares 3 fields and requires a refUID.
        let args = ["0x0000000000000000000000000000000000000001", "1", "supportive"];
        let err = build_request("DELEGATED_SIMPLE_VOTE", SEPOLIA, dao(), &args).unwrap_err();
        assert!(matches!(
            err,
            RequestError::ArityMismatch { command: "DELEGATED_SIMPLE_VOTE", fields: 3, supplied: 3, .. }
        ));

        let with_ref = ["0x0000000000000000000000000000000000000001", "1", "supportive", vote_uid()];
        let request = build_request("DELEGATED_SIMPLE_VOTE", SEPOLIA, dao(), &with_ref).unwrap();
        assert_eq!(request.args.len(), 3);
        assert_eq!(request.ref_uid, vote_uid().parse::<B256>().unwrap());
    }

    #[test]
    fn test_optional_refuid_defaults_to_zero() {
        let args = ["Fund the grants round", "Q3 budget", "1719792000", "1720396800", "treasury"];
        let request = build_request("CREATE_PROPOSAL", SEPOLIA, dao(), &args).unwrap();
        assert_eq!(request.ref_uid, B256::ZERO);
        assert_eq!(request.args.len(), 5);
    }

    #[test]
    fn test_optional_refuid_supplied() {
        let args = ["Fund the grants round", "Q3 budget", "1719792000", "1720396800", "treasury", vote_uid()];
        let request = build_request("CREATE_PROPOSAL", SEPOLIA, dao(), &args).unwrap();
        assert_eq!(request.ref_uid, vote_uid().parse::<B256>().unwrap());
        // The refUID token is not one of the field arguments.
        assert_eq!(request.args.len(), 5);
    }

    #[test]
    fn test_optional_refuid_arity_bounds() {
        let four = ["a", "b", "1", "2"];
        assert!(matches!(
            build_request("CREATE_PROPOSAL", SEPOLIA, dao(), &four),
            Err(RequestError::ArityMismatch { supplied: 4, .. })
        ));
        let seven = ["a", "b", "1", "2", "t", vote_uid(), "extra"];
        assert!(matches!(
            build_request("CREATE_PROPOSAL", SEPOLIA, dao(), &seven),
            Err(RequestError::ArityMismatch { supplied: 7, .. })
        ));
    }

    #[test]
    fn test_no_refuid_policy() {
        let args = ["1", "Towns DAO", "604800", "86400"];
        let request = build_request("INSTANTIATE", SEPOLIA, dao(), &args).unwrap();
        assert_eq!(request.ref_uid, B256::ZERO);
        assert!(request.revocable);

        let extra = ["1", "Towns DAO", "604800", "86400", vote_uid()];
        assert!(matches!(
            build_request("INSTANTIATE", SEPOLIA, dao(), &extra),
            Err(RequestError::ArityMismatch { fields: 4, supplied: 5, .. })
        ));
    }

    #[test]
    fn test_malformed_refuid_rejected() {
        let base = ["1", "supportive"];
        let bads = [
            "1f8b6a3c".to_string(),            // no prefix
            "0xabc".to_string(),               // short: refUIDs are never padded
            format!("0x{}", "0".repeat(63)),
            format!("0x{}", "0".repeat(65)),
            format!("0x{}g", "0".repeat(63)),  // non-hex digit
        ];
        for bad in &bads {
            let mut args = base.to_vec();
            args.push(bad.as_str());
            assert!(
                matches!(
                    build_request("SIMPLE_VOTE", SEPOLIA, dao(), &args),
                    Err(RequestError::InvalidReference { .. })
                ),
                "accepted malformed refUID {bad:?}"
            );
        }
    }

    #[test]
    fn test_bytes32_field_normalized() {
        let args = ["0xABCdef", vote_uid()];
        let request = build_request("SET_PROPOSAL_TYPE", SEPOLIA, dao(), &args).unwrap();
        assert_eq!(request.args[0], format!("0xabcdef{}", "0".repeat(58)));
    }

    #[test]
    fn test_non_bytes32_fields_passed_through() {
        let args = ["1", "Towns DAO", "604800", "86400"];
        let request = build_request("INSTANTIATE", SEPOLIA, dao(), &args).unwrap();
        assert_eq!(request.args, vec!["1", "Towns DAO", "604800", "86400"]);
    }

    #[test]
    fn test_request_carries_schema_material() {
        let args = ["1", "rollout looks safe", vote_uid()];
        let request = build_request("simple_vote", SEPOLIA, dao(), &args).unwrap();
        assert_eq!(request.schema.name, "SIMPLE_VOTE");
        assert_eq!(request.schema_uid, registry::schema_uid("SIMPLE_VOTE", SEPOLIA).unwrap());
        assert_eq!(request.abi_signature(), "f(int8,string)");
        assert_eq!(request.recipient, dao());
        assert!(!request.revocable);
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            build_request("FROB", SEPOLIA, dao(), &[]),
            Err(RequestError::Schema(crate::error::SchemaError::UnknownCommand { .. }))
        ));
        assert!(matches!(
            build_request("INSTANTIATE", 1, dao(), &["1", "x", "2", "3"]),
            Err(RequestError::Schema(crate::error::SchemaError::UnsupportedChain { chain_id: 1 }))
        ));
    }

    #[test]
    fn test_normalize_bytes32_pads_right() {
        assert_eq!(
            normalize_bytes32("0x1").unwrap(),
            format!("0x1{}", "0".repeat(63))
        );
        assert_eq!(normalize_bytes32("0x").unwrap(), format!("0x{}", "0".repeat(64)));
    }

    #[test]
    fn test_normalize_bytes32_lowercases() {
        let full = format!("0x{}", "AB".repeat(32));
        assert_eq!(normalize_bytes32(&full).unwrap(), format!("0x{}", "ab".repeat(32)));
    }

    #[test]
    fn test_normalize_bytes32_rejections() {
        assert!(matches!(
            normalize_bytes32("deadbeef"),
            Err(RequestError::InvalidEncoding { .. })
        ));
        let long = format!("0x{}", "f".repeat(65));
        assert!(matches!(
            normalize_bytes32(&long),
            Err(RequestError::ValueTooLong { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_normalize_bytes32_idempotent(digits in "[0-9a-fA-F]{0,64}") {
            let once = normalize_bytes32(&format!("0x{digits}")).unwrap();
            let twice = normalize_bytes32(&once).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.len(), 2 + BYTES32_HEX_DIGITS);
        }
    }
}
