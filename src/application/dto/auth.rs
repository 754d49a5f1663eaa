use std::collections::HashSet;

use crate::domain::member::{Capability, MemberId};

/// The acting member as resolved by the host framework's role checker.
#[derive(Debug, Clone)]
pub struct AuthenticatedMember {
    pub id: MemberId,
    pub display_name: String,
    pub capabilities: HashSet<Capability>,
}

impl AuthenticatedMember {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}
