use thiserror::Error;

/// Errors surfaced by `chatlinks`.
///
/// Classification itself never fails: malformed input yields absence, not an
/// error. The only fallible path is compiling externally configured pattern
/// sets.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid link pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, LinkError>;
