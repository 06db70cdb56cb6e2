use uuid::Uuid;

use crate::models::Event;

/// The requester, as established by a verified session token. `None` at the
/// gate means no authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
}

pub struct Gate;

impl Gate {
    /// Ownership equality is the whole rule; edit and delete reuse it so
    /// there is exactly one enforcement point.
    pub fn can_read(identity: Option<&Identity>, event: &Event) -> bool {
        match identity {
            Some(identity) => identity.user_id == event.owner_id,
            None => false,
        }
    }

    pub fn can_edit(identity: Option<&Identity>, event: &Event) -> bool {
        Self::can_read(identity, event)
    }

    pub fn can_delete(identity: Option<&Identity>, event: &Event) -> bool {
        Self::can_read(identity, event)
    }
}
