//! Typed ID definitions for every registered entity.
//!
//! Each type only accepts identifiers carrying its own entity's prefix, so
//! passing an `OrgId` where a `WorkspaceId` is expected does not compile.

use crate::define_id;
use crate::{Entity, Ulid};

/// Implemented by every typed ID generated with [`define_id!`].
pub trait TypedId: Copy + Sized {
    /// The entity this ID type belongs to.
    const ENTITY: Entity;

    /// Wraps a raw 128-bit value.
    fn from_ulid(ulid: Ulid) -> Self;

    /// Returns the raw 128-bit value.
    fn ulid(&self) -> Ulid;
}

// =============================================================================
// Auth
// =============================================================================

define_id!(UserId, User);
define_id!(SessionId, Session);
define_id!(AccountId, Account);
define_id!(VerificationId, Verification);

// =============================================================================
// Tenancy
// =============================================================================

define_id!(OrgId, Organization);
define_id!(InvitationId, Invitation);
define_id!(MemberId, Member);
define_id!(WorkspaceId, Workspace);

// =============================================================================
// Commerce
// =============================================================================

define_id!(CustomerId, Customer);
define_id!(OrderId, Order);
define_id!(ProductId, Product);
define_id!(PaymentIntentId, PaymentIntent);

// =============================================================================
// Chat
// =============================================================================

define_id!(ConversationId, Conversation);
define_id!(MessageId, Message);

// =============================================================================
// Platform
// =============================================================================

define_id!(ApiKeyId, ApiKey);

// =============================================================================
// Tests
// =============================================================================
