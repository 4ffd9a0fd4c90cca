//! Static prompt catalog.

use serde::Serialize;
use tracing::instrument;

/// A prompt shown on a bingo square.
///
/// The key identifies the rule the album must satisfy; the text is what the
/// player reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PromptDef {
    key: &'static str,
    text: &'static str,
}

impl PromptDef {
    /// Creates a prompt definition.
    pub const fn new(key: &'static str, text: &'static str) -> Self {
        Self { key, text }
    }

    /// Unique prompt key, e.g. `released_2010s`.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Human-readable prompt text.
    pub fn text(&self) -> &'static str {
        self.text
    }
}

static PROMPTS: [PromptDef; 25] = [
    PromptDef::new("tracks_5_or_less", "5 tracks or fewer"),
    PromptDef::new("tracks_6_10", "6 to 10 tracks"),
    PromptDef::new("tracks_11_15", "11 to 15 tracks"),
    PromptDef::new("tracks_16_20", "16 to 20 tracks"),
    PromptDef::new("tracks_21_plus", "21 tracks or more"),
    PromptDef::new("released_before_1990", "Released before 1990"),
    PromptDef::new("released_1990s", "Released in the 1990s"),
    PromptDef::new("released_2000s", "Released in the 2000s"),
    PromptDef::new("released_2010s", "Released in the 2010s"),
    PromptDef::new("released_2020_plus", "Released in 2020 or later"),
    PromptDef::new("artist_genres_0", "Artist has 0 genres listed"),
    PromptDef::new("artist_genres_1_2", "Artist has 1 to 2 genres listed"),
    PromptDef::new("artist_genres_3_plus", "Artist has 3+ genres listed"),
    PromptDef::new("artist_one_word", "Artist name is one word"),
    PromptDef::new("title_one_word", "Title is one word"),
    PromptDef::new("title_contains_number", "Title contains a number"),
    PromptDef::new("title_contains_live", "Title contains \"Live\""),
    PromptDef::new("title_contains_deluxe", "Title contains \"Deluxe\""),
    PromptDef::new("title_contains_color_word", "Title contains a color word"),
    PromptDef::new("album_type_album", "Album type: album"),
    PromptDef::new("album_type_single_or_ep", "Album type: single or EP"),
    PromptDef::new("no_explicit_tracks", "No explicit tracks"),
    PromptDef::new("has_explicit_track", "Has at least one explicit track"),
    PromptDef::new("artist_followers_1m_plus", "Artist has 1M+ followers"),
    PromptDef::new("album_popularity_70_plus", "Album popularity 70+"),
];

/// Returns the full prompt catalog in its canonical order.
///
/// The order is part of the seeded-generation contract: changing it changes
/// every board generated from an existing seed.
#[instrument]
pub fn list_prompts() -> &'static [PromptDef] {
    &PROMPTS
}

/// Looks up a prompt by key.
#[instrument]
pub fn find_prompt(key: &str) -> Option<&'static PromptDef> {
    PROMPTS.iter().find(|p| p.key == key)
}
