//! Per-request authorization decisions.
//!
//! Routes compose these guards explicitly with the capability they require.
//! Every decision is stateless and works purely off the validated token
//! claims.

use crate::errors::domain::AccessError;
use crate::types::domain::{Capability, Grant};
use crate::types::internal::Claims;

/// Allow the operation only if the claim for `capability` is exactly
/// `"true"`. A `"self"` grant is not enough here; operations with an
/// ownership exception go through [`require_edit`].
pub fn require(claims: &Claims, capability: Capability) -> Result<(), AccessError> {
    match Grant::from_claim(claims.capability_claim(capability)) {
        Grant::Granted => Ok(()),
        Grant::SelfOnly | Grant::Denied => Err(AccessError::Forbidden),
    }
}

/// Allow an edit when the claim is `"true"`, or when it is `"self"` and the
/// caller owns the target record (token user id equals the target id).
pub fn require_edit(claims: &Claims, target_id: i64) -> Result<(), AccessError> {
    match Grant::from_claim(claims.capability_claim(Capability::Edit)) {
        Grant::Granted => Ok(()),
        Grant::SelfOnly if claims.user_id == target_id => Ok(()),
        Grant::SelfOnly | Grant::Denied => Err(AccessError::Forbidden),
    }
}
