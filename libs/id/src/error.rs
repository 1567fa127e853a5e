//! Error types for identifier parsing and conversion.

use std::fmt;

use thiserror::Error;

use crate::Entity;

/// Errors that can occur when resolving entities or parsing identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The entity name is not in the registry. This is a programming
    /// mistake, not a user input problem.
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),

    /// The candidate does not have the shape of an identifier for `entity`.
    #[error("malformed {entity} identifier '{value}': {reason}")]
    Malformed {
        entity: Entity,
        value: String,
        reason: MalformedReason,
    },

    /// The identifier's prefix does not belong to any registered entity.
    #[error("unknown identifier prefix in '{0}'")]
    UnknownPrefix(String),

    /// The input is not a UUID.
    #[error("invalid UUID '{value}': {message}")]
    InvalidUuid { value: String, message: String },
}

impl IdError {
    pub(crate) fn malformed(entity: Entity, value: &str, reason: MalformedReason) -> Self {
        IdError::Malformed {
            entity,
            value: value.to_string(),
            reason,
        }
    }

    /// Returns true if this error indicates a registry lookup by name failed.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, IdError::UnknownEntity(_))
    }

    /// Returns true if this error indicates a badly shaped identifier.
    pub fn is_malformed(&self) -> bool {
        matches!(self, IdError::Malformed { .. })
    }

    /// Returns true if the error was caused by caller-supplied input and
    /// should be reported back as an invalid identifier.
    pub fn is_user_facing(&self) -> bool {
        !self.is_configuration_error()
    }
}

/// Why a candidate string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The candidate is empty.
    Empty,
    /// There is no `_` between prefix and suffix.
    MissingSeparator,
    /// The prefix belongs to another entity (or none).
    PrefixMismatch { actual: String },
    /// The total length is wrong.
    Length { expected: usize, actual: usize },
    /// The suffix is not a canonical base32 encoding of 128 bits.
    InvalidSuffix,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => write!(f, "identifier cannot be empty"),
            MalformedReason::MissingSeparator => write!(f, "missing underscore separator"),
            MalformedReason::PrefixMismatch { actual } => {
                write!(f, "unexpected prefix '{actual}'")
            }
            MalformedReason::Length { expected, actual } => {
                write!(f, "expected {expected} characters, got {actual}")
            }
            MalformedReason::InvalidSuffix => write!(f, "suffix is not a valid encoding"),
        }
    }
}
