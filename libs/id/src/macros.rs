//! Macros for defining typed ID types.

/// Macro to define a typed ID for a registered entity.
///
/// This generates a newtype wrapper around the 128-bit value with:
/// - `ENTITY` and `PREFIX` constants
/// - `new()` to generate a fresh ID
/// - `parse()`, `from_uuid()` and `uuid()` conversions
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - conversions to and from [`AnyId`](crate::AnyId)
///
/// # Example
///
/// ```ignore
/// define_id!(OrgId, Organization);
///
/// let org_id = OrgId::new();
/// let parsed: OrgId = "org_01h455vb4pex5vsknk084sn02q".parse()?;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $entity:ident) => {
        #[doc = concat!("Identifier of a `", stringify!($entity), "`.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Ulid);

        impl $name {
            /// The entity this ID type belongs to.
            pub const ENTITY: $crate::Entity = $crate::Entity::$entity;

            /// The prefix for this ID type.
            pub const PREFIX: &'static str = Self::ENTITY.prefix();

            /// Creates a new ID backed by a fresh UUIDv7.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::generate(Self::ENTITY).ulid())
            }

            /// Creates an ID from a UUID.
            #[must_use]
            pub fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self($crate::Ulid(uuid.as_u128()))
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub fn uuid(&self) -> $crate::Uuid {
                $crate::Uuid::from_u128(self.0 .0)
            }

            /// Returns the underlying 128-bit value.
            #[must_use]
            pub const fn ulid(&self) -> $crate::Ulid {
                self.0
            }

            /// Returns the creation time in milliseconds since the Unix epoch.
            #[must_use]
            pub fn timestamp_ms(&self) -> u64 {
                self.0.timestamp_ms()
            }

            /// Parses an ID from its canonical string.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::parse(Self::ENTITY, s).map(|id| Self(id.ulid()))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::TypedId for $name {
            const ENTITY: $crate::Entity = $crate::Entity::$entity;

            fn from_ulid(ulid: $crate::Ulid) -> Self {
                Self(ulid)
            }

            fn ulid(&self) -> $crate::Ulid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&$crate::AnyId::from(*self), f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for $crate::AnyId {
            fn from(id: $name) -> Self {
                $crate::AnyId::from_ulid($name::ENTITY, id.0)
            }
        }

        impl TryFrom<$crate::AnyId> for $name {
            type Error = $crate::IdError;

            fn try_from(id: $crate::AnyId) -> Result<Self, Self::Error> {
                if id.entity() != Self::ENTITY {
                    return Err($crate::IdError::Malformed {
                        entity: Self::ENTITY,
                        value: id.to_string(),
                        reason: $crate::MalformedReason::PrefixMismatch {
                            actual: id.prefix().to_string(),
                        },
                    });
                }
                Ok(Self(id.ulid()))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::Ulid> for $name {
            fn as_ref(&self) -> &$crate::Ulid {
                &self.0
            }
        }
    };
}
