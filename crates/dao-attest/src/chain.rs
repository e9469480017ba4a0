//! Per-chain deployment configuration.
//!
//! A static table of the contract addresses and RPC endpoint for each chain
//! the protocol is deployed on. The registry and request builder only
//! consume this table; nothing here is ever mutated after startup.

use alloy_primitives::{Address, address};

use crate::error::SchemaError;
use crate::model::ResolverKind;

/// Contract deployment set for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDeployment {
    pub chain_id: u64,
    pub rpc_url: &'static str,
    /// Resolver bound to entity-lifecycle schemas.
    pub entity_resolver: Address,
    /// Resolver bound to vote schemas.
    pub votes_resolver: Address,
    /// The schema registry contract.
    pub schema_registry: Address,
    /// The attestation (EAS) contract.
    pub eas: Address,
}

impl ChainDeployment {
    /// Returns the resolver bound for a schema category.
    ///
    /// Categories with no resolver map to the zero address, which the
    /// on-chain registry treats as "no resolver".
    pub fn resolver(&self, kind: ResolverKind) -> Address {
        match kind {
            ResolverKind::Entity => self.entity_resolver,
            ResolverKind::Votes => self.votes_resolver,
            ResolverKind::None => Address::ZERO,
        }
    }
}

/// Chains with a complete contract deployment.
///
/// Sepolia is the only chain fully provisioned today; other chains fail
/// lookup with [`SchemaError::UnsupportedChain`] rather than carrying
/// placeholder addresses.
pub static DEPLOYMENTS: &[ChainDeployment] = &[ChainDeployment {
    chain_id: 11155111,
    rpc_url: "https://ethereum-sepolia-rpc.publicnode.com",
    entity_resolver: address!("0292b0ce4f6791ee6d91befbc9f16aed463d1412"),
    votes_resolver: address!("990885ca636aaba3513e82d4e74b82b1f76bbb04"),
    schema_registry: address!("0a7E2Ff54e76B8E6659aedc9103FB21c038050D0"),
    eas: address!("C2679fBD37d54388Ce493F1DB75320D236e1815e"),
}];

/// Looks up the deployment for a chain id.
pub fn deployment(chain_id: u64) -> Result<&'static ChainDeployment, SchemaError> {
    DEPLOYMENTS
        .iter()
        .find(|d| d.chain_id == chain_id)
        .ok_or(SchemaError::UnsupportedChain { chain_id })
}
