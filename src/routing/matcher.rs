//! Path matching logic.
//!
//! # Responsibilities
//! - Match path prefix (case-sensitive)
//! - Match exact path (case-sensitive)
//! - Combine conditions with OR semantics for exclusion lists
//!
//! # Design Decisions
//! - Path matching is case-sensitive, like URL paths themselves
//! - Empty `AnyMatcher` never matches
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches one exact path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Build a matcher from prefix and exact-path lists.
    pub fn from_lists(prefixes: &[String], exact: &[String]) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> = Vec::with_capacity(prefixes.len() + exact.len());
        matchers.extend(
            prefixes
                .iter()
                .map(|p| Box::new(PathPrefixMatcher::new(p.clone())) as Box<dyn Matcher>),
        );
        matchers.extend(
            exact
                .iter()
                .map(|p| Box::new(ExactPathMatcher::new(p.clone())) as Box<dyn Matcher>),
        );
        Self { matchers }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
