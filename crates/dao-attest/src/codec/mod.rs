//! Packing and unpacking of the on-chain identifier format.

pub mod address;

pub use address::{DaoIdParts, format_dao_id, pack_dao_id, unpack_dao_id};
