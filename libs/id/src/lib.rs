//! # keel-id
//!
//! Prefixed, UUID-backed typed identifiers for keel entities.
//!
//! ## Design Principles
//!
//! - Every entity owns exactly one short prefix, fixed at compile time
//! - Identifiers are immutable and have one canonical string form
//! - Parsing fails closed: anything that is not canonical is rejected
//! - Identifiers convert losslessly to and from UUIDs (the database form)
//! - IDs are typed to prevent mixing different entities
//!
//! ## ID Format
//!
//! All identifiers use the format `{prefix}_{suffix}`, where the suffix is
//! the UUID's 128 bits in lowercase Crockford base32 (26 characters).
//!
//! Examples:
//! - `org_01h455vb4pex5vsknk084sn02q`
//! - `wsp_01h455x2f8e1dvh3rfz5r0j0kd`
//! - `pi_01h455xav3qb2vpp5w7f3eka1y`
//!
//! Generated identifiers are backed by UUIDv7, so they sort by creation
//! time.

mod codec;
mod entity;
mod error;
mod macros;
mod types;
mod validate;

pub use codec::{
    from_uuid, generate, infer_entity, parse, to_uuid, validate, AnyId, DecodedId, SUFFIX_LEN,
};
pub use entity::Entity;
pub use error::{IdError, MalformedReason};
pub use types::*;
pub use validate::{validate_any_id, validate_id, INVALID_IDENTIFIER};

/// Re-export ulid for consumers that need raw 128-bit value operations
pub use ulid::Ulid;
/// Re-export uuid for database conversions
pub use uuid::Uuid;
