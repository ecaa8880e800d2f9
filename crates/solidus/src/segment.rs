//! Path-template segmentation.
//!
//! Pure functional splitting of route path templates into typed segments.
//! Same input always produces the same segment sequence; ordering within a
//! path is significant and preserved end-to-end.

/// Sigil marking a path component as a dynamic parameter.
pub const PARAM_SIGIL: char = '$';

/// One component of a route path template.
///
/// # Examples
///
/// ```
/// use solidus::segment::{parse_segments, Segment};
///
/// let segments = parse_segments("/users/$userId");
/// assert_eq!(segments, vec![
///     Segment::Static("users".to_string()),
///     Segment::Dynamic("userId".to_string()),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal path component, stored verbatim.
    Static(String),
    /// Named dynamic parameter, stored with the sigil stripped.
    Dynamic(String),
}

/// Splits a path template into its ordered segments.
///
/// Empty components (leading slash, trailing slash, doubled slashes) are
/// dropped, so `/` and the empty string both yield an empty sequence.
pub fn parse_segments(path: &str) -> Vec<Segment> {
    path.split('/')
        .filter(|component| !component.is_empty())
        .map(classify_component)
        .collect()
}

/// Classifies one component: sigil-prefixed means dynamic, anything else is
/// static text kept verbatim.
fn classify_component(component: &str) -> Segment {
    match component.strip_prefix(PARAM_SIGIL) {
        Some(name) => Segment::Dynamic(name.to_string()),
        None => Segment::Static(component.to_string()),
    }
}
