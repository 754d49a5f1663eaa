// src/domain/member.rs
//! The acting CMS member as this core sees it: an identifier plus the
//! capability set the host's role checker granted. Accounts, sessions, and
//! roles themselves belong to the host framework.

use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(pub i64);

impl MemberId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("member id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MemberId> for i64 {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

/// Default grant for the host framework's news-administrator role. Hosts
/// with finer-grained roles build their own capability sets; nothing in this
/// crate depends on this exact combination.
pub fn news_admin_capabilities() -> HashSet<Capability> {
    HashSet::from([
        Capability::new("news", "create"),
        Capability::new("news", "update"),
        Capability::new("news", "delete"),
        Capability::new("news", "view"),
        Capability::new("tags", "manage"),
    ])
}
