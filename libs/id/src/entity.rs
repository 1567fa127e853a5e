//! The entity registry.
//!
//! Every entity that owns identifiers is listed here exactly once, together
//! with its name (used in configuration, logs and the CLI) and its prefix
//! (embedded in every identifier string).

use std::fmt;
use std::str::FromStr;

use crate::{IdError, SUFFIX_LEN};

macro_rules! entities {
    ($($variant:ident => $name:literal, $prefix:literal;)+) => {
        /// A domain entity that owns a family of identifiers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Entity {
            $($variant,)+
        }

        impl Entity {
            /// All registered entities, in declaration order.
            pub const ALL: &'static [Entity] = &[$(Entity::$variant,)+];

            /// The entity's registry name (e.g. `payment_intent`).
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Entity::$variant => $name,)+
                }
            }

            /// The prefix of this entity's identifiers (e.g. `pi`).
            #[must_use]
            pub const fn prefix(self) -> &'static str {
                match self {
                    $(Entity::$variant => $prefix,)+
                }
            }
        }
    };
}

entities! {
    // Auth
    User => "user", "usr";
    Session => "session", "ses";
    Account => "account", "acc";
    Verification => "verification", "vrf";

    // Tenancy
    Organization => "organization", "org";
    Invitation => "invitation", "inv";
    Member => "member", "mem";
    Workspace => "workspace", "wsp";

    // Commerce
    Customer => "customer", "cus";
    Order => "order", "ord";
    Product => "product", "prd";
    PaymentIntent => "payment_intent", "pi";

    // Chat
    Conversation => "conversation", "cnv";
    Message => "message", "msg";

    // Platform
    ApiKey => "api_key", "key";
}

impl Entity {
    /// Looks up an entity by registry name.
    ///
    /// An unknown name is a configuration error: names come from code and
    /// config, never from end users.
    pub fn from_name(name: &str) -> Result<Self, IdError> {
        Self::ALL
            .iter()
            .copied()
            .find(|entity| entity.name() == name)
            .ok_or_else(|| IdError::UnknownEntity(name.to_string()))
    }

    /// Looks up the entity that owns `prefix`.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|entity| entity.prefix() == prefix)
    }

    /// Total length of a canonical identifier for this entity.
    #[must_use]
    pub const fn id_len(self) -> usize {
        self.prefix().len() + 1 + SUFFIX_LEN
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Entity {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl serde::Serialize for Entity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for Entity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_name(&s).map_err(serde::de::Error::custom)
    }
}
