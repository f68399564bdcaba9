//! Pure validation decisions for track fields.
//!
//! These functions decide; they never log. Diagnostic emission happens at
//! the call sites in [`crate::domain::track`], so the rules here are
//! testable without capturing any output stream.

use crate::domain::error::TrackError;

/// Trims the title and rejects it if nothing is left.
pub(crate) fn check_title(raw: &str) -> Result<String, TrackError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(TrackError::EmptyTitle)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Same rule as the title.
pub(crate) fn check_artist(raw: &str) -> Result<String, TrackError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(TrackError::EmptyArtist)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Duration must be strictly positive.
pub(crate) fn check_duration(seconds: i64) -> Result<u32, TrackError> {
    u32::try_from(seconds)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(TrackError::NonPositiveDuration)
}

/// Rating must be within 1..=5.
pub(crate) fn check_rating(rating: i64) -> Result<u8, TrackError> {
    match rating {
        1..=5 => Ok(rating as u8),
        _ => Err(TrackError::RatingOutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_title_trims() {
        assert_eq!(check_title("  Yesterday "), Ok("Yesterday".to_string()));
        assert_eq!(check_title("\t\n"), Err(TrackError::EmptyTitle));
        assert_eq!(check_title(""), Err(TrackError::EmptyTitle));
    }

    #[test]
    fn test_check_artist_trims() {
        assert_eq!(check_artist(" The Beatles"), Ok("The Beatles".to_string()));
        assert_eq!(check_artist("   "), Err(TrackError::EmptyArtist));
    }

    #[test]
    fn test_check_duration_positive() {
        assert_eq!(check_duration(1), Ok(1));
        assert_eq!(check_duration(125), Ok(125));
        assert_eq!(check_duration(0), Err(TrackError::NonPositiveDuration));
        assert_eq!(check_duration(-5), Err(TrackError::NonPositiveDuration));
    }

    #[test]
    fn test_check_rating_range() {
        assert_eq!(check_rating(1), Ok(1));
        assert_eq!(check_rating(5), Ok(5));
        assert_eq!(check_rating(0), Err(TrackError::RatingOutOfRange));
        assert_eq!(check_rating(6), Err(TrackError::RatingOutOfRange));
        assert_eq!(check_rating(-1), Err(TrackError::RatingOutOfRange));
    }
}
