//! Accessor-name derivation.
//!
//! Folds an ordered segment sequence into a camelCase identifier plus the
//! ordered parameter list the accessor requires. Derivation is a **pure**
//! function and the single source of truth for collision detection:
//! identical segment sequences always derive identical names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GenerateError;
use crate::segment::Segment;

/// Identifier derived for a path with no segments at all.
pub const ROOT_IDENTIFIER: &str = "root";

/// JavaScript identifier shape; dynamic parameter names must match it
/// because they are emitted verbatim as accessor parameters.
static PARAM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Derived accessor name for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedName {
    /// camelCase identifier, unique within one generation pass.
    pub identifier: String,
    /// Parameter names in left-to-right path order, sigils stripped.
    pub parameters: Vec<String>,
}

/// Derives the accessor identifier and parameter list for a segment
/// sequence.
///
/// # Derivation Rules
///
/// 1. Static segment `t` appends `Capitalize(t)` to the identifier.
/// 2. Dynamic segment `p` appends `By` + `Capitalize(p)` and records `p`
///    (verbatim) as the next parameter.
/// 3. The finished identifier's first character is forced to lower case,
///    producing camelCase.
/// 4. An empty sequence derives the fixed identifier `root`.
///
/// Static text is sanitized to identifier-legal characters before it is
/// capitalized, so `sign-up` contributes `Signup`. Dynamic parameter names
/// are not sanitized: a name that is not already a legal identifier rejects
/// the whole candidate, as does a static segment with no legal characters at
/// all or an identifier that would start with a digit.
///
/// # Examples
///
/// ```
/// use solidus::name::derive_name;
/// use solidus::segment::parse_segments;
///
/// let derived = derive_name(&parse_segments("/users/$userId")).unwrap();
/// assert_eq!(derived.identifier, "usersByUserId");
/// assert_eq!(derived.parameters, vec!["userId"]);
/// ```
pub fn derive_name(segments: &[Segment]) -> Result<DerivedName, GenerateError> {
    if segments.is_empty() {
        return Ok(DerivedName {
            identifier: ROOT_IDENTIFIER.to_string(),
            parameters: Vec::new(),
        });
    }

    let mut identifier = String::new();
    let mut parameters = Vec::new();

    for segment in segments {
        match segment {
            Segment::Static(text) => {
                let clean = sanitize_static(text);
                if clean.is_empty() {
                    return Err(GenerateError::InvalidSegment {
                        segment: text.clone(),
                    });
                }
                identifier.push_str(&capitalize(&clean));
            }
            Segment::Dynamic(name) => {
                if !PARAM_NAME.is_match(name) {
                    return Err(GenerateError::InvalidSegment {
                        segment: format!("{}{}", crate::segment::PARAM_SIGIL, name),
                    });
                }
                identifier.push_str("By");
                identifier.push_str(&capitalize(name));
                parameters.push(name.clone());
            }
        }
    }

    let identifier = lower_first(&identifier);
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        // Only the first static segment can put a digit up front.
        let first = match &segments[0] {
            Segment::Static(text) | Segment::Dynamic(text) => text.clone(),
        };
        return Err(GenerateError::InvalidSegment { segment: first });
    }

    Ok(DerivedName {
        identifier,
        parameters,
    })
}

/// Strips characters that cannot appear in a JavaScript identifier.
fn sanitize_static(text: &str) -> String {
    text.chars()
        .filter(|c| matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '$'))
        .collect()
}

/// Upper-cases the first character, leaving the remainder unchanged.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character, leaving the remainder unchanged.
fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
