//! CORS policy
//!
//! Decides which CORS headers a response carries, given the current
//! [`ApiSettings`] and the request's `Origin` header. The decision is a
//! pure value so it can be tested without any HTTP plumbing; the
//! [`crate::middleware::cors_middleware`] applies it to every response.
//!
//! CORS here is a browser-side restriction only. A request whose origin is
//! not allowed still reaches the gateway and the handlers; it simply gets no
//! `Access-Control-Allow-Origin` header back.

use axum::http::{header, HeaderMap, HeaderValue};
use regex::Regex;
use settings_manager::ApiSettings;
use tracing::debug;

#[cfg(test)]
#[path = "cors_tests.rs"]
mod tests;

/// Methods advertised on every CORS-enabled response
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Request headers advertised on every CORS-enabled response
pub const ALLOWED_HEADERS: &str = "X-API-Key, Content-Type, Authorization";

/// Preflight cache lifetime in seconds
pub const MAX_AGE_SECONDS: u32 = 3600;

/// A single allowed-origin entry.
///
/// Entries without `*` compare by exact string equality. Entries with `*`
/// become an anchored regular expression where each `*` matches any
/// substring and every other character is literal.
#[derive(Debug, Clone)]
pub enum OriginPattern {
    Exact(String),
    Glob { source: String, regex: Regex },
}

impl OriginPattern {
    /// Build a pattern from one trimmed allowed-origins entry.
    pub fn new(entry: &str) -> Self {
        if !entry.contains('*') {
            return Self::Exact(entry.to_string());
        }

        let body = entry
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        match Regex::new(&format!("^{body}$")) {
            Ok(regex) => Self::Glob {
                source: entry.to_string(),
                regex,
            },
            // Escaped literals joined by `.*` always compile; fall back to
            // exact comparison rather than dropping the entry.
            Err(_) => Self::Exact(entry.to_string()),
        }
    }

    /// The entry as written in the settings.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(origin) => origin,
            Self::Glob { source, .. } => source,
        }
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == origin,
            Self::Glob { regex, .. } => regex.is_match(origin),
        }
    }
}

/// The parsed `allowed_origins` setting.
#[derive(Debug, Clone)]
pub enum AllowedOrigins {
    /// `*`: every origin, answered with a literal `*`
    Any,

    /// Explicit entries, tested in order
    List(Vec<OriginPattern>),
}

impl AllowedOrigins {
    /// Parse the settings value.
    ///
    /// The value `*` (after trimming) admits every origin. Anything else is
    /// split on commas; entries are trimmed and blanks are dropped.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return Self::Any;
        }

        let patterns = value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(OriginPattern::new)
            .collect();

        Self::List(patterns)
    }

    /// First pattern matching `origin`, if any.
    pub fn find_match(&self, origin: &str) -> Option<&OriginPattern> {
        match self {
            Self::Any => None,
            Self::List(patterns) => patterns.iter().find(|pattern| pattern.matches(origin)),
        }
    }
}

/// What the allow-origin header of a response should be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowOrigin {
    /// `Access-Control-Allow-Origin: *`
    Any,

    /// Echo this origin back and add `Vary: Origin`
    Echo(HeaderValue),

    /// No allow-origin header
    Omit,
}

/// The CORS headers a single response should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// CORS is switched off; the response carries no CORS headers.
    Disabled,

    /// CORS is on; the constant headers are always emitted.
    Enabled { allow_origin: AllowOrigin },
}

impl CorsDecision {
    /// Decide the CORS headers for a request.
    pub fn evaluate(settings: &ApiSettings, origin: Option<&HeaderValue>) -> Self {
        if !settings.cors_enabled {
            return Self::Disabled;
        }

        let allow_origin = match AllowedOrigins::parse(&settings.allowed_origins) {
            AllowedOrigins::Any => AllowOrigin::Any,
            origins => match origin {
                Some(value) => match value.to_str() {
                    Ok(text) => match origins.find_match(text) {
                        Some(pattern) => {
                            debug!(origin = text, pattern = pattern.as_str(), "Origin allowed");
                            AllowOrigin::Echo(value.clone())
                        }
                        None => {
                            debug!(origin = text, "Origin not in allowed list");
                            AllowOrigin::Omit
                        }
                    },
                    Err(_) => AllowOrigin::Omit,
                },
                None => AllowOrigin::Omit,
            },
        };

        Self::Enabled { allow_origin }
    }

    /// Write the decided headers into a response header map.
    pub fn apply(&self, headers: &mut HeaderMap) {
        let Self::Enabled { allow_origin } = self else {
            return;
        };

        match allow_origin {
            AllowOrigin::Any => {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                );
            }
            AllowOrigin::Echo(origin) => {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
                headers.append(header::VARY, HeaderValue::from_static("Origin"));
            }
            AllowOrigin::Omit => {}
        }

        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from(MAX_AGE_SECONDS));
    }
}
