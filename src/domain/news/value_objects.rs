use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker segment the host framework emits for otherwise un-sluggable
/// titles. Segments carrying it bypass collision disambiguation entirely.
pub const PAGINATION_MARKER: &str = "page-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsItemId(pub i64);

impl NewsItemId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "news item id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NewsItemId> for i64 {
    fn from(value: NewsItemId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTitle(String);

impl NewsTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewsTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NewsTitle> for String {
    fn from(value: NewsTitle) -> Self {
        value.0
    }
}

/// URL segment identifying an item for routing and redirects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlSegment(String);

impl UrlSegment {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "url segment cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this segment carries the legacy pagination marker.
    pub fn has_pagination_marker(&self) -> bool {
        self.0.contains(PAGINATION_MARKER)
    }
}

impl fmt::Display for UrlSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UrlSegment> for String {
    fn from(value: UrlSegment) -> Self {
        value.0
    }
}

/// Free-text author display name, trimmed on construction. The trimmed
/// value doubles as the exact lookup key into the author registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

/// Item kind. `News` is the default; `External` items point elsewhere and
/// `Download` items wrap a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    #[default]
    News,
    External,
    Download,
}

impl NewsKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::External => "external",
            Self::Download => "download",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "news" => Ok(Self::News),
            "external" => Ok(Self::External),
            "download" => Ok(Self::Download),
            other => Err(DomainError::Validation(format!(
                "unknown news kind: {other}"
            ))),
        }
    }
}

/// External target of an `External` item. A bare host is normalized by
/// prepending the configured scheme; anything already starting with `http`
/// is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink(String);

impl ExternalLink {
    /// Rehydrate an already-normalized link from storage.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "external link cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Normalize a raw, non-empty link. Callers map empty input to `None`
    /// before reaching here.
    pub fn normalize(raw: &str, default_scheme: &str) -> DomainResult<Self> {
        if raw.is_empty() {
            return Err(DomainError::Validation(
                "external link cannot be empty".into(),
            ));
        }
        if raw.starts_with("http") {
            Ok(Self(raw.to_owned()))
        } else {
            Ok(Self(format!("{default_scheme}://{raw}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ExternalLink> for String {
    fn from(value: ExternalLink) -> Self {
        value.0
    }
}
