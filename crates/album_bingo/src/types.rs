//! Core domain types for album bingo.

use crate::prompts::PromptDef;
use crate::shuffle::Seed;
use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// Normalized album metadata used to judge a pick.
///
/// Every optional field may be unknown. Unknown is not the same as zero:
/// an album with `total_tracks == None` never satisfies a track-count prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Setters)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_", strip_option)]
pub struct AlbumDetails {
    /// Catalog identifier.
    #[serde(default)]
    id: String,
    /// Album title.
    #[serde(default)]
    title: String,
    /// Primary artist name; empty when unknown.
    #[serde(default)]
    artist_name: String,
    /// Release date as `YYYY` or `YYYY-MM-DD`.
    #[serde(default)]
    release_date: Option<String>,
    /// Number of tracks.
    #[serde(default)]
    total_tracks: Option<u32>,
    /// Album type as reported by the catalog (`album`, `single`, `ep`, ...).
    #[serde(default)]
    album_type: Option<String>,
    /// Catalog popularity, 0-100.
    #[serde(default)]
    popularity: Option<u8>,
    /// Follower count of the primary artist.
    #[serde(default)]
    artist_followers: Option<u64>,
    /// Number of genres listed for the primary artist.
    #[serde(default)]
    artist_genres_count: Option<u32>,
    /// Whether any track is flagged explicit.
    #[serde(default)]
    has_explicit_track: Option<bool>,
    /// Cover art URL.
    #[serde(default)]
    image_url: Option<String>,
    /// Link to the album in the catalog.
    #[serde(default)]
    external_url: Option<String>,
}

impl AlbumDetails {
    /// Creates a record with only the always-present fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist_name: artist_name.into(),
            ..Self::default()
        }
    }
}

/// An album placed into a square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct AlbumFill {
    catalog_id: String,
    title: String,
    artist_name: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    external_url: Option<String>,
    placed_at: DateTime<Utc>,
}

impl AlbumFill {
    /// Builds a fill from the album that passed validation.
    #[instrument(skip(details), fields(album_id = %details.id))]
    pub fn from_details(details: &AlbumDetails, placed_at: DateTime<Utc>) -> Self {
        Self {
            catalog_id: details.id.clone(),
            title: details.title.clone(),
            artist_name: details.artist_name.clone(),
            image_url: details.image_url.clone(),
            external_url: details.external_url.clone(),
            placed_at,
        }
    }
}

/// One square of a board.
///
/// The prompt is fixed at generation time; only the fill changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct BoardSquare {
    position: usize,
    prompt_key: String,
    prompt_text: String,
    #[serde(default)]
    fill: Option<AlbumFill>,
}

impl BoardSquare {
    /// Creates an unfilled square for `prompt` at `position`.
    pub fn new(position: usize, prompt: &PromptDef) -> Self {
        Self {
            position,
            prompt_key: prompt.key().to_string(),
            prompt_text: prompt.text().to_string(),
            fill: None,
        }
    }

    /// True if an album has been placed here.
    pub fn is_filled(&self) -> bool {
        self.fill.is_some()
    }

    /// Replaces the fill, returning the previous one.
    pub(crate) fn replace_fill(&mut self, fill: Option<AlbumFill>) -> Option<AlbumFill> {
        std::mem::replace(&mut self.fill, fill)
    }
}

/// How a board is shared.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoardMode {
    /// Single player.
    #[default]
    Solo,
    /// Several players fill the same board.
    Shared,
    /// Everyone gets the same board for a given day.
    Daily,
}

impl BoardMode {
    /// Lenient parse: trims, ignores case, maps `live` and `party` to
    /// `shared`, and falls back to `solo` for anything unrecognized.
    #[instrument]
    pub fn normalize(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "shared" | "live" | "party" => BoardMode::Shared,
            "daily" => BoardMode::Daily,
            _ => BoardMode::Solo,
        }
    }
}

/// What generation does when the catalog is smaller than the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PromptPolicy {
    /// Fail with a configuration error; prompts never repeat.
    #[default]
    Strict,
    /// Cycle through the shuffled catalog; prompts may repeat.
    Cycle,
}

/// Seed shared by every daily board for `date`.
pub fn daily_seed(date: NaiveDate) -> Seed {
    Seed::Text(format!("daily-{}", date.format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_normalize_aliases() {
        assert_eq!(BoardMode::normalize("  Party "), BoardMode::Shared);
        assert_eq!(BoardMode::normalize("live"), BoardMode::Shared);
        assert_eq!(BoardMode::normalize("DAILY"), BoardMode::Daily);
        assert_eq!(BoardMode::normalize(""), BoardMode::Solo);
        assert_eq!(BoardMode::normalize("tournament"), BoardMode::Solo);
    }

    #[test]
    fn test_mode_strict_parse() {
        assert_eq!(BoardMode::from_str("shared").unwrap(), BoardMode::Shared);
        assert!(BoardMode::from_str("party").is_err());
        assert_eq!(BoardMode::Daily.to_string(), "daily");
    }

    #[test]
    fn test_policy_round_trip() {
        assert_eq!(PromptPolicy::from_str("cycle").unwrap(), PromptPolicy::Cycle);
        assert_eq!(PromptPolicy::default(), PromptPolicy::Strict);
        let json = serde_json::to_string(&PromptPolicy::Cycle).unwrap();
        assert_eq!(json, "\"cycle\"");
    }

    #[test]
    fn test_daily_seed_is_date_stable() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(daily_seed(date), Seed::Text("daily-2026-10-19".to_string()));
        assert_eq!(daily_seed(date), daily_seed(date));
    }

    #[test]
    fn test_album_details_camel_case() {
        let details: AlbumDetails = serde_json::from_str(
            r#"{"id":"x1","title":"Blue","artistName":"Joni Mitchell","totalTracks":10}"#,
        )
        .unwrap();
        assert_eq!(*details.total_tracks(), Some(10));
        assert_eq!(*details.popularity(), None);
        assert_eq!(details.artist_name(), "Joni Mitchell");
    }

    #[test]
    fn test_setters_fill_optional_fields() {
        let details = AlbumDetails::new("id", "Title", "Artist")
            .with_total_tracks(12)
            .with_has_explicit_track(false);
        assert_eq!(*details.total_tracks(), Some(12));
        assert_eq!(*details.has_explicit_track(), Some(false));
        assert_eq!(*details.artist_followers(), None);
    }

    #[test]
    fn test_fill_copies_album_identity() {
        let details = AlbumDetails::new("abc123", "Kid A", "Radiohead")
            .with_image_url("https://img/1".to_string());
        let placed_at = Utc::now();
        let fill = AlbumFill::from_details(&details, placed_at);
        assert_eq!(fill.catalog_id(), "abc123");
        assert_eq!(fill.image_url().as_deref(), Some("https://img/1"));
        assert_eq!(*fill.placed_at(), placed_at);
    }
}
