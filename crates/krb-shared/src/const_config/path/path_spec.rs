use reqwest::Method;

use crate::id::DbId;

const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
}

/// A [`PathSpec`] with any placeholder filled in, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: String,
    pub method: Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PUT,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            path,
            method: Method::DELETE,
        }
    }

    /// Returns `true` if the path needs an id before it can be sent
    pub fn needs_id(&self) -> bool {
        self.path.contains(ID_PLACEHOLDER)
    }

    /// For paths without a placeholder
    pub fn resolve(&self) -> ResolvedPath {
        debug_assert!(!self.needs_id(), "{} needs an id", self.path);
        ResolvedPath {
            path: self.path.to_string(),
            method: self.method.clone(),
        }
    }

    pub fn with_id(&self, id: DbId) -> ResolvedPath {
        debug_assert!(self.needs_id(), "{} does not take an id", self.path);
        ResolvedPath {
            path: self.path.replace(ID_PLACEHOLDER, &id.to_string()),
            method: self.method.clone(),
        }
    }
}
