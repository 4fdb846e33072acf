//! Element-kind tags.
//!
//! An element kind is an opaque, caller-defined tag correlating a
//! supplementary or decoration declaration with the renderer the
//! surrounding application registered for it. The engine never
//! interprets the string; it is only a lookup key.

use std::fmt;
use std::sync::Arc;

/// A cheaply cloneable element-kind tag.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ElementKind(Arc<str>);

impl ElementKind {
    pub fn new(kind: impl Into<Arc<str>>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ElementKind {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ElementKind {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ElementKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
