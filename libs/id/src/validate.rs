//! Hooks for validating identifier fields on request payloads.
//!
//! Use with `validator`'s custom field rules:
//!
//! ```ignore
//! #[derive(Validate)]
//! struct CreateOrder {
//!     #[validate(custom(function = "workspace_id"))]
//!     workspace_id: String,
//! }
//!
//! fn workspace_id(value: &str) -> Result<(), ValidationError> {
//!     keel_id::validate_id::<WorkspaceId>(value)
//! }
//! ```

use std::borrow::Cow;

use validator::ValidationError;

use crate::{AnyId, IdError, TypedId};

/// Error code attached to every identifier validation failure.
pub const INVALID_IDENTIFIER: &str = "invalid_identifier";

fn to_validation_error(value: &str, err: &IdError) -> ValidationError {
    let mut error =
        ValidationError::new(INVALID_IDENTIFIER).with_message(Cow::Owned(err.to_string()));
    error.add_param(Cow::Borrowed("value"), &value);
    error
}

/// Accepts only canonical identifiers of `T`'s entity.
pub fn validate_id<T: TypedId>(value: &str) -> Result<(), ValidationError> {
    crate::parse(T::ENTITY, value)
        .map(|_| ())
        .map_err(|err| to_validation_error(value, &err))
}

/// Accepts canonical identifiers of any registered entity.
pub fn validate_any_id(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<AnyId>()
        .map(|_| ())
        .map_err(|err| to_validation_error(value, &err))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::{OrgId, WorkspaceId};

    fn workspace_id(value: &str) -> Result<(), ValidationError> {
        validate_id::<WorkspaceId>(value)
    }

    #[derive(Debug, Validate)]
    struct CreateOrder {
        #[validate(custom(function = "workspace_id"))]
        workspace_id: String,
    }

    #[test]
    fn accepts_matching_entity() {
        let id = WorkspaceId::new().to_string();
        assert!(validate_id::<WorkspaceId>(&id).is_ok());
        assert!(validate_any_id(&id).is_ok());
    }

    #[test]
    fn rejects_other_entity() {
        let id = OrgId::new().to_string();
        let err = validate_id::<WorkspaceId>(&id).unwrap_err();
        assert_eq!(err.code, INVALID_IDENTIFIER);
        assert!(err.message.unwrap().contains("malformed workspace identifier"));
    }

    #[test]
    fn rejects_unknown_prefix() {
        let err = validate_any_id("abc_00000000000000000000000000").unwrap_err();
        assert_eq!(err.code, INVALID_IDENTIFIER);
    }

    #[test]
    fn derive_reports_field() {
        let ok = CreateOrder {
            workspace_id: WorkspaceId::new().to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = CreateOrder {
            workspace_id: "wsp_nope".to_string(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("workspace_id"));
    }
}
