//! Catalog payload normalization.
//!
//! Converts album and artist objects as returned by the music catalog's
//! web API into [`AlbumDetails`]. Anything the payload leaves out stays
//! unknown; nothing is defaulted to zero.

use album_bingo::AlbumDetails;
use derive_more::{Display, Error};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Album object from the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogAlbum {
    id: String,
    name: String,
    #[serde(default)]
    artists: Vec<ArtistRef>,
    #[serde(default)]
    images: Vec<Image>,
    #[serde(default)]
    external_urls: Option<ExternalUrls>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    total_tracks: Option<u32>,
    #[serde(default)]
    album_type: Option<String>,
    #[serde(default)]
    popularity: Option<u8>,
    #[serde(default)]
    tracks: Option<TrackPage>,
}

/// Artist object from the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogArtist {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    followers: Option<Followers>,
    #[serde(default)]
    genres: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
struct ArtistRef {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Image {
    url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ExternalUrls {
    #[serde(default)]
    spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Followers {
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<Track>,
    #[serde(default)]
    total: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
struct Track {
    #[serde(default)]
    explicit: Option<bool>,
}

impl TrackPage {
    /// One explicit track settles it. A clean answer needs every track of
    /// the album on the page, each with a known flag.
    fn has_explicit(&self) -> Option<bool> {
        if self.items.is_empty() {
            return None;
        }
        if self.items.iter().any(|t| t.explicit == Some(true)) {
            return Some(true);
        }
        let complete = self.total.is_none_or(|total| total == self.items.len());
        let all_known = self.items.iter().all(|t| t.explicit.is_some());
        (complete && all_known).then_some(false)
    }
}

/// Builds [`AlbumDetails`] from an album payload and, if fetched, its
/// primary artist.
#[instrument(skip(album, artist), fields(album_id = %album.id, has_artist = artist.is_some()))]
pub fn normalize(album: &CatalogAlbum, artist: Option<&CatalogArtist>) -> AlbumDetails {
    let artist_name = artist
        .and_then(|a| a.name.clone())
        .or_else(|| album.artists.first().map(|a| a.name.clone()))
        .unwrap_or_default();

    let mut details = AlbumDetails::new(album.id.clone(), album.name.clone(), artist_name);

    if let Some(date) = &album.release_date {
        details = details.with_release_date(date.clone());
    }
    if let Some(tracks) = album.total_tracks {
        details = details.with_total_tracks(tracks);
    }
    if let Some(album_type) = &album.album_type {
        details = details.with_album_type(album_type.clone());
    }
    if let Some(popularity) = album.popularity {
        details = details.with_popularity(popularity);
    }
    if let Some(explicit) = album.tracks.as_ref().and_then(TrackPage::has_explicit) {
        details = details.with_has_explicit_track(explicit);
    }
    if let Some(image) = album.images.first() {
        details = details.with_image_url(image.url.clone());
    }
    if let Some(url) = album.external_urls.as_ref().and_then(|u| u.spotify.clone()) {
        details = details.with_external_url(url);
    }
    if let Some(artist) = artist {
        if let Some(total) = artist.followers.as_ref().and_then(|f| f.total) {
            details = details.with_artist_followers(total);
        }
        if let Some(count) = artist
            .genres
            .as_ref()
            .and_then(|genres| u32::try_from(genres.len()).ok())
        {
            details = details.with_artist_genres_count(count);
        }
    }

    debug!(?details, "Album normalized");
    details
}

/// Reads album metadata from `album_path`, merging the artist payload at
/// `artist_path` when given.
///
/// The album file may hold either a raw catalog album object or an
/// already-normalized [`AlbumDetails`] record (recognized by its `title`
/// field).
#[instrument(skip(album_path, artist_path), fields(album = %album_path.display()))]
pub fn load_album_details(
    album_path: &Path,
    artist_path: Option<&Path>,
) -> Result<AlbumDetails, CatalogError> {
    let value = read_json(album_path)?;

    if value.get("title").is_some() && value.get("name").is_none() {
        if artist_path.is_some() {
            warn!("Artist payload ignored for a normalized album record");
        }
        return serde_json::from_value(value)
            .map_err(|e| CatalogError::new(format!("Invalid album record: {}", e)));
    }

    let album: CatalogAlbum = serde_json::from_value(value)
        .map_err(|e| CatalogError::new(format!("Invalid catalog album: {}", e)))?;

    let artist: Option<CatalogArtist> = artist_path
        .map(|path| {
            serde_json::from_value(read_json(path)?)
                .map_err(|e| CatalogError::new(format!("Invalid catalog artist: {}", e)))
        })
        .transpose()?;

    Ok(normalize(&album, artist.as_ref()))
}

fn read_json(path: &Path) -> Result<Value, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CatalogError::new(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| CatalogError::new(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Catalog payload error.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn album(value: Value) -> CatalogAlbum {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_payload() {
        let album = album(json!({
            "id": "1klALx0u4AavZNEvC4LrTL",
            "name": "In Rainbows",
            "artists": [{ "id": "4Z8W4fKeB5YxbusRsdQVPb", "name": "Radiohead" }],
            "images": [{ "url": "https://i.scdn.co/image/large" }, { "url": "small" }],
            "external_urls": { "spotify": "https://open.spotify.com/album/1klALx0u4AavZNEvC4LrTL" },
            "release_date": "2007-12-28",
            "total_tracks": 10,
            "album_type": "album",
            "popularity": 79,
            "tracks": { "items": [{ "explicit": false }, { "explicit": false }], "total": 2 }
        }));
        let artist: CatalogArtist = serde_json::from_value(json!({
            "name": "Radiohead",
            "followers": { "total": 11000000 },
            "genres": ["art rock", "alternative rock", "permanent wave"]
        }))
        .unwrap();

        let details = normalize(&album, Some(&artist));
        assert_eq!(details.title(), "In Rainbows");
        assert_eq!(details.artist_name(), "Radiohead");
        assert_eq!(*details.total_tracks(), Some(10));
        assert_eq!(*details.popularity(), Some(79));
        assert_eq!(*details.artist_followers(), Some(11_000_000));
        assert_eq!(*details.artist_genres_count(), Some(3));
        assert_eq!(*details.has_explicit_track(), Some(false));
        assert_eq!(
            details.image_url().as_deref(),
            Some("https://i.scdn.co/image/large")
        );
    }

    #[test]
    fn test_missing_artist_leaves_artist_fields_unknown() {
        let album = album(json!({
            "id": "a",
            "name": "Blue",
            "artists": [{ "name": "Joni Mitchell" }]
        }));
        let details = normalize(&album, None);
        assert_eq!(details.artist_name(), "Joni Mitchell");
        assert_eq!(*details.artist_followers(), None);
        assert_eq!(*details.artist_genres_count(), None);
        assert_eq!(*details.total_tracks(), None);
    }

    #[test]
    fn test_empty_genres_is_known_zero() {
        let album = album(json!({ "id": "a", "name": "t" }));
        let artist: CatalogArtist = serde_json::from_value(json!({ "genres": [] })).unwrap();
        let details = normalize(&album, Some(&artist));
        assert_eq!(*details.artist_genres_count(), Some(0));
        assert_eq!(details.artist_name(), "");
    }

    #[test]
    fn test_explicit_detection() {
        let explicit = album(json!({
            "id": "a", "name": "t",
            "tracks": { "items": [{ "explicit": false }, { "explicit": true }], "total": 30 }
        }));
        assert_eq!(*normalize(&explicit, None).has_explicit_track(), Some(true));

        let partial = album(json!({
            "id": "a", "name": "t",
            "tracks": { "items": [{ "explicit": false }], "total": 30 }
        }));
        assert_eq!(*normalize(&partial, None).has_explicit_track(), None);

        let empty = album(json!({ "id": "a", "name": "t", "tracks": { "items": [] } }));
        assert_eq!(*normalize(&empty, None).has_explicit_track(), None);

        let unflagged = album(json!({
            "id": "a", "name": "t",
            "tracks": { "items": [{ "explicit": false }, {}], "total": 2 }
        }));
        assert_eq!(*normalize(&unflagged, None).has_explicit_track(), None);

        let clean = album(json!({
            "id": "a", "name": "t",
            "tracks": { "items": [{ "explicit": false }, { "explicit": false }], "total": 2 }
        }));
        assert_eq!(*normalize(&clean, None).has_explicit_track(), Some(false));
    }
}
