use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::domain::{error::TrackError, id::TrackId, validate};

/// Represent a music track record.
///
/// Constructed with [`Track::new`], which validates every input and marks
/// the result invalid (instead of panicking) when any of them is rejected.
/// After construction, fields change only through the guarded setters and
/// tag operations, each of which leaves state untouched on failure.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    id: TrackId,
    title: String,
    artist: String,
    duration_seconds: u32,
    rating: u8,
    tags: Vec<String>,
    valid: bool,
}

/// Logs the rejection and converts the check result for collection.
fn accept<T>(checked: Result<T, TrackError>) -> Option<T> {
    match checked {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}

impl Track {
    /// Builds a track from raw inputs.
    ///
    /// All four checks run independently, so a caller gets one diagnostic
    /// line per failing field rather than just the first one. An id is
    /// allocated only when every check passed; failed attempts never
    /// advance the process-wide counter.
    pub fn new(title: &str, artist: &str, duration_seconds: i64, rating: i64) -> Self {
        let title = accept(validate::check_title(title));
        let artist = accept(validate::check_artist(artist));
        let duration_seconds = accept(validate::check_duration(duration_seconds));
        let rating = accept(validate::check_rating(rating));

        match (title, artist, duration_seconds, rating) {
            (Some(title), Some(artist), Some(duration_seconds), Some(rating)) => Self {
                id: TrackId::next(),
                title,
                artist,
                duration_seconds,
                rating,
                tags: Vec::new(),
                valid: true,
            },
            _ => Self {
                id: TrackId::UNASSIGNED,
                title: String::new(),
                artist: String::new(),
                duration_seconds: 0,
                rating: 0,
                tags: Vec::new(),
                valid: false,
            },
        }
    }

    /// True only when construction passed validation. Callers must check
    /// this before treating the record as live.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_title(&mut self, title: &str) -> bool {
        match validate::check_title(title) {
            Ok(trimmed) => {
                self.title = trimmed;
                true
            }
            Err(err) => {
                log::warn!("{err}, keeping previous value");
                false
            }
        }
    }

    pub fn set_artist(&mut self, artist: &str) -> bool {
        match validate::check_artist(artist) {
            Ok(trimmed) => {
                self.artist = trimmed;
                true
            }
            Err(err) => {
                log::warn!("{err}, keeping previous value");
                false
            }
        }
    }

    pub fn set_duration(&mut self, seconds: i64) -> bool {
        match validate::check_duration(seconds) {
            Ok(seconds) => {
                self.duration_seconds = seconds;
                true
            }
            Err(err) => {
                log::warn!("{err}, keeping previous value");
                false
            }
        }
    }

    pub fn set_rating(&mut self, rating: i64) -> bool {
        match validate::check_rating(rating) {
            Ok(rating) => {
                self.rating = rating;
                true
            }
            Err(err) => {
                log::warn!("{err}, keeping previous value");
                false
            }
        }
    }

    /// Appends a tag, keeping the trimmed original casing.
    ///
    /// Rejects an empty trimmed tag and any tag already present under
    /// case-insensitive comparison; the list is left untouched then.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            log::warn!("{}", TrackError::EmptyTag);
            return false;
        }

        let lowered = tag.to_lowercase();
        if self.tags.iter().any(|t| t.to_lowercase() == lowered) {
            log::warn!("{}", TrackError::DuplicateTag(tag.to_string()));
            return false;
        }

        self.tags.push(tag.to_string());
        true
    }

    /// Removes the first tag matching case-insensitively.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let target = tag.trim().to_lowercase();
        match self.tags.iter().position(|t| t.to_lowercase() == target) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => {
                log::warn!("{}", TrackError::TagNotFound(tag.trim().to_string()));
                false
            }
        }
    }

    /// Case-insensitive substring search over title, artist and tags.
    ///
    /// Pure query: no mutation, no diagnostics. An empty or
    /// whitespace-only keyword never matches.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return false;
        }

        let keyword = keyword.to_lowercase();

        self.title.to_lowercase().contains(&keyword)
            || self.artist.to_lowercase().contains(&keyword)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&keyword))
    }
}

/// `[#<id>] <artist> - <title> (<duration>s) <asterisks>` plus, only when
/// tags exist, two spaces and `[tags: ...]` in insertion order.
impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} - {} ({}s) {}",
            self.id,
            self.artist,
            self.title,
            self.duration_seconds,
            "*".repeat(usize::from(self.rating))
        )?;

        if !self.tags.is_empty() {
            write!(f, "  [tags: {}]", self.tags.join(", "))?;
        }

        Ok(())
    }
}

/// Ordering for display: rating descending, then title ascending, then id
/// ascending. Tags participate neither here nor in equality.
impl Ord for Track {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Track {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Track {}
