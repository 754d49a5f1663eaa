//! Shared, de-duplicated author references resolved from free-text names.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::value_objects::AuthorName;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorRefId(pub i64);

impl AuthorRefId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "author reference id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorRefId> for i64 {
    fn from(value: AuthorRefId) -> Self {
        value.0
    }
}

/// One row per distinct trimmed author name. Created lazily on first use,
/// never mutated afterwards by this core.
#[derive(Debug, Clone)]
pub struct AuthorReference {
    pub id: AuthorRefId,
    pub original_name: AuthorName,
}

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Exact, case-sensitive match on the stored original name. More than one
    /// result indicates pre-constraint legacy data; callers warn and take the
    /// first.
    async fn find_by_name(&self, name: &AuthorName) -> DomainResult<Vec<AuthorReference>>;
    /// Persisted immediately, not deferred to the parent save.
    async fn insert(&self, name: AuthorName) -> DomainResult<AuthorReference>;
}
