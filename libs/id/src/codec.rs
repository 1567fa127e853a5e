//! Generation, validation and conversion of identifier strings.
//!
//! A canonical identifier is `{prefix}_{suffix}` where the suffix is the
//! 128-bit UUID value in lowercase Crockford base32, most significant bits
//! first. 26 characters hold 130 bits, so the first suffix character is
//! always in `0..=7`.

use std::fmt;
use std::str::FromStr;

use ulid::Ulid;
use uuid::Uuid;

use crate::{Entity, IdError, MalformedReason};

/// Length of the encoded suffix.
pub const SUFFIX_LEN: usize = 26;

/// Lowercase Crockford base32 alphabet.
const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

pub(crate) fn encode_suffix(ulid: Ulid) -> String {
    ulid.to_string().to_ascii_lowercase()
}

/// Decodes a canonical suffix. Uppercase, ambiguous or overflowing
/// encodings are rejected.
pub(crate) fn decode_suffix(suffix: &str) -> Option<Ulid> {
    let bytes = suffix.as_bytes();
    if bytes.len() != SUFFIX_LEN || bytes[0] > b'7' {
        return None;
    }
    if !bytes.iter().all(|b| ALPHABET.contains(b)) {
        return None;
    }
    Ulid::from_string(suffix).ok()
}

/// An identifier of any registered entity.
///
/// Ordering is by entity, then by value; for generated identifiers the
/// value is time-ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnyId {
    entity: Entity,
    ulid: Ulid,
}

impl AnyId {
    /// Creates an identifier from a UUID.
    #[must_use]
    pub fn from_uuid(entity: Entity, uuid: Uuid) -> Self {
        Self::from_ulid(entity, Ulid(uuid.as_u128()))
    }

    /// Creates an identifier from a raw 128-bit value.
    #[must_use]
    pub const fn from_ulid(entity: Entity, ulid: Ulid) -> Self {
        Self { entity, ulid }
    }

    /// Returns the owning entity.
    #[must_use]
    pub const fn entity(&self) -> Entity {
        self.entity
    }

    /// Returns the prefix of this identifier.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.entity.prefix()
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        Uuid::from_u128(self.ulid.0)
    }

    /// Returns the underlying 128-bit value.
    #[must_use]
    pub const fn ulid(&self) -> Ulid {
        self.ulid
    }

    /// Returns the encoded suffix.
    #[must_use]
    pub fn suffix(&self) -> String {
        encode_suffix(self.ulid)
    }

    /// Returns the creation time in milliseconds since the Unix epoch.
    ///
    /// Only meaningful for generated identifiers (UUIDv7).
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        self.ulid.timestamp_ms()
    }
}

impl fmt::Display for AnyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.prefix(), self.suffix())
    }
}

impl FromStr for AnyId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entity = infer_entity(s)?;
        parse(entity, s)
    }
}

impl serde::Serialize for AnyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for AnyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A decoded identifier: the UUID paired with the entity its prefix names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DecodedId {
    pub entity: Entity,
    pub uuid: Uuid,
}

impl DecodedId {
    /// Returns the recovered prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.entity.prefix()
    }

    /// Returns the UUID in hyphenated lowercase form.
    #[must_use]
    pub fn uuid_string(&self) -> String {
        self.uuid.hyphenated().to_string()
    }
}

/// Generates a fresh identifier for `entity`, backed by a UUIDv7.
#[must_use]
pub fn generate(entity: Entity) -> AnyId {
    AnyId::from_uuid(entity, Uuid::now_v7())
}

/// Returns whether `candidate` is a canonical identifier for `entity`.
#[must_use]
pub fn validate(entity: Entity, candidate: &str) -> bool {
    parse(entity, candidate).is_ok()
}

/// Parses a canonical identifier for `entity`.
///
/// The returned identifier formats back to exactly `candidate`.
pub fn parse(entity: Entity, candidate: &str) -> Result<AnyId, IdError> {
    if candidate.is_empty() {
        return Err(IdError::malformed(entity, candidate, MalformedReason::Empty));
    }

    let Some((prefix, suffix)) = candidate.split_once('_') else {
        return Err(IdError::malformed(
            entity,
            candidate,
            MalformedReason::MissingSeparator,
        ));
    };

    if prefix != entity.prefix() {
        return Err(IdError::malformed(
            entity,
            candidate,
            MalformedReason::PrefixMismatch {
                actual: prefix.to_string(),
            },
        ));
    }

    if candidate.len() != entity.id_len() {
        return Err(IdError::malformed(
            entity,
            candidate,
            MalformedReason::Length {
                expected: entity.id_len(),
                actual: candidate.len(),
            },
        ));
    }

    let ulid = decode_suffix(suffix).ok_or_else(|| {
        IdError::malformed(entity, candidate, MalformedReason::InvalidSuffix)
    })?;

    Ok(AnyId::from_ulid(entity, ulid))
}

/// Decodes an identifier of any registered entity back into its UUID.
pub fn to_uuid(identifier: &str) -> Result<DecodedId, IdError> {
    let entity = infer_entity(identifier)?;
    let id = parse(entity, identifier)?;
    Ok(DecodedId {
        entity,
        uuid: id.uuid(),
    })
}

/// Encodes a textual UUID as an identifier for `entity`.
pub fn from_uuid(entity: Entity, uuid: &str) -> Result<AnyId, IdError> {
    let uuid = Uuid::parse_str(uuid).map_err(|e| IdError::InvalidUuid {
        value: uuid.to_string(),
        message: e.to_string(),
    })?;
    Ok(AnyId::from_uuid(entity, uuid))
}

/// Returns the entity whose prefix starts `identifier`.
///
/// Only the prefix is inspected.
pub fn infer_entity(identifier: &str) -> Result<Entity, IdError> {
    identifier
        .split_once('_')
        .and_then(|(prefix, _)| Entity::from_prefix(prefix))
        .ok_or_else(|| IdError::UnknownPrefix(identifier.to_string()))
}
