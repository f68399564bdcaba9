use thiserror::Error;

/// Why a track input was rejected.
///
/// The `Display` text of each variant is the exact line written to the
/// diagnostic channel when the rejection happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("artist must not be empty")]
    EmptyArtist,

    #[error("duration must be a positive number of seconds")]
    NonPositiveDuration,

    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,

    #[error("empty tag ignored")]
    EmptyTag,

    #[error("tag '{0}' already exists (case-insensitive)")]
    DuplicateTag(String),

    #[error("tag '{0}' not found")]
    TagNotFound(String),
}
