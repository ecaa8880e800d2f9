//! Route discovery over raw route-tree text.
//!
//! The scanner is deliberately lexical: it looks for `path:` string literals
//! anywhere in the input and never parses the artifact's own grammar, so any
//! generator that writes recognizable path literals is a usable source. Scan
//! order (source-text order) is a documented contract: it decides which
//! duplicate survives and the accessor order in the emitted module.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GenerateError;
use crate::name::derive_name;
use crate::segment::parse_segments;

/// Matches a `path:` label followed by a single- or double-quoted literal.
static PATH_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bpath:\s*(?:'([^']*)'|"([^"]*)")"#).unwrap());

/// One generatable accessor, ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Path template exactly as found in the input.
    pub source_path: String,
    /// Derived accessor name, unique within one pass.
    pub identifier: String,
    /// Parameter names in left-to-right path order.
    pub parameters: Vec<String>,
}

/// A candidate that was scanned but cannot be generated.
#[derive(Debug)]
pub struct RejectedRoute {
    pub source_path: String,
    pub reason: GenerateError,
}

/// Everything one scan of the input produced.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Accepted routes in first-seen order, de-duplicated by identifier.
    pub routes: Vec<Route>,
    /// Candidates rejected for illegal segments, in scan order.
    pub rejected: Vec<RejectedRoute>,
}

/// Scans `text` for every path-template literal, in source-text order.
///
/// # Examples
///
/// ```
/// use solidus::extract::scan_path_literals;
///
/// let tree = r#"
///     path: '/users',
///     fullPath: '/users',
///     path: "/posts",
/// "#;
/// assert_eq!(scan_path_literals(tree), vec!["/users", "/posts"]);
/// ```
pub fn scan_path_literals(text: &str) -> Vec<&str> {
    PATH_LITERAL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|matched| matched.as_str())
        .collect()
}

/// Extracts the de-duplicated route list from raw route-tree text.
///
/// Candidates that are not absolute paths, or are just `/`, are not routes
/// and are dropped silently. Route trees repeat the same path for index and
/// layout entries, so when two candidates derive the same identifier the
/// first one seen wins. Candidates whose segments cannot form a legal
/// identifier land in `rejected` and never abort the scan.
pub fn extract_routes(text: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut seen = HashSet::new();

    for literal in scan_path_literals(text) {
        if literal.is_empty() || literal == "/" || !literal.starts_with('/') {
            continue;
        }

        let segments = parse_segments(literal);
        match derive_name(&segments) {
            Ok(derived) => {
                if seen.insert(derived.identifier.clone()) {
                    extraction.routes.push(Route {
                        source_path: literal.to_string(),
                        identifier: derived.identifier,
                        parameters: derived.parameters,
                    });
                }
            }
            Err(reason) => extraction.rejected.push(RejectedRoute {
                source_path: literal.to_string(),
                reason,
            }),
        }
    }

    extraction
}
