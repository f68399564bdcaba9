use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Process-wide id counter. Starts at 1 and is bumped once per
/// successfully constructed track; failed constructions never touch it.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Represents the track ID.
///
/// Ids are unique for the lifetime of the process and never reused.
/// An invalid track carries [`TrackId::UNASSIGNED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TrackId(u64);

impl TrackId {
    /// The id held by a track whose construction failed validation.
    pub const UNASSIGNED: TrackId = TrackId(0);

    /// Allocates the next id. Relaxed ordering is enough: only
    /// uniqueness and monotonicity matter, no other state is published.
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let a = TrackId::next();
        let b = TrackId::next();
        assert!(b > a);
        assert_ne!(a, TrackId::UNASSIGNED);
    }
}
