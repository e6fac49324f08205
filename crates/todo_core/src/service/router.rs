//! Single-segment route binding.
//!
//! # Responsibility
//! - Compile a `/:name` route pattern into a matcher.
//! - Extract the captured segment from a navigation path.
//!
//! # Invariants
//! - A path matches only when it has exactly one non-empty segment.
//! - Leading `#` fragments are accepted (`#/active` == `/active`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Route pattern bound at startup.
pub const FILTER_ROUTE: &str = "/:filter";
/// Path navigated to on startup.
pub const INITIAL_ROUTE: &str = "/all";

static ROUTE_PATTERN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/:([A-Za-z_][A-Za-z0-9_]*)$").expect("valid route pattern regex"));
static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/([^/?#]+)/?$").expect("valid route segment regex"));

/// Rejected route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError(pub String);

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported route pattern `{}`; expected `/:name`", self.0)
    }
}

impl Error for RouteError {}

/// Matcher for a single `/:name` route.
#[derive(Debug, Clone)]
pub struct Router {
    param: String,
    matcher: Regex,
}

impl Router {
    /// Compiles `pattern`.
    ///
    /// # Errors
    /// - `RouteError` when `pattern` is not of the form `/:name`.
    pub fn new(pattern: &str) -> Result<Self, RouteError> {
        let param = ROUTE_PATTERN_RE
            .captures(pattern.trim())
            .and_then(|caps| caps.get(1))
            .map(|name| name.as_str().to_string())
            .ok_or_else(|| RouteError(pattern.to_string()))?;
        Ok(Self {
            param,
            matcher: Regex::clone(&SEGMENT_RE),
        })
    }

    /// Router bound to [`FILTER_ROUTE`].
    pub fn filter_route() -> Result<Self, RouteError> {
        Self::new(FILTER_ROUTE)
    }

    /// Name of the captured parameter.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Returns the captured segment for `path`, if it matches.
    pub fn resolve<'a>(&self, path: &'a str) -> Option<&'a str> {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        self.matcher
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|segment| segment.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteError, Router};

    #[test]
    fn new_accepts_single_param_pattern() {
        let router = Router::new(" /:view ").unwrap();
        assert_eq!(router.param(), "view");
        assert_eq!(Router::filter_route().unwrap().param(), "filter");
    }

    #[test]
    fn new_rejects_unsupported_patterns() {
        assert!(Router::new("/static").is_err());
        assert!(Router::new("/:a/:b").is_err());
        assert_eq!(Router::new("").unwrap_err(), RouteError(String::new()));
    }

    #[test]
    fn resolve_extracts_segment_from_path_and_fragment() {
        let router = Router::filter_route().unwrap();
        assert_eq!(router.resolve("/active"), Some("active"));
        assert_eq!(router.resolve("#/completed"), Some("completed"));
        assert_eq!(router.resolve("/all/"), Some("all"));
    }

    #[test]
    fn resolve_rejects_other_shapes() {
        let router = Router::filter_route().unwrap();
        assert_eq!(router.resolve("/"), None);
        assert_eq!(router.resolve("/a/b"), None);
        assert_eq!(router.resolve("active"), None);
    }
}
