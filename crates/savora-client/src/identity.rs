//! Authenticated-user handle.

use savora_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// An opaque authenticated identity supplied by the external auth
/// provider. Read-only credential; nothing in this crate mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    /// Authenticated user ID.
    pub user_id: UserId,
    /// Account email.
    pub email: String,
}

impl Identity {
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}
