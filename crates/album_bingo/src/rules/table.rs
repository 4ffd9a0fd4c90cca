//! Prompt-key to rule lookup table.
//!
//! Each prompt maps to a small descriptor: which field it needs and how
//! the observed value is compared. Adding a prompt means adding a row here
//! and an entry in the catalog.

use super::ValidationResult;
use super::text::{contains_digit, contains_ignore_case, find_color_word, is_one_word, parse_year};
use crate::types::AlbumDetails;
use strum::Display;

/// Album metadata a rule depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Field {
    #[strum(to_string = "Track count")]
    TotalTracks,
    #[strum(to_string = "Release year")]
    ReleaseYear,
    #[strum(to_string = "Artist genres")]
    ArtistGenres,
    #[strum(to_string = "Album type")]
    AlbumType,
    #[strum(to_string = "Explicit track data")]
    ExplicitContent,
    #[strum(to_string = "Popularity")]
    Popularity,
    #[strum(to_string = "Artist followers")]
    ArtistFollowers,
    #[strum(to_string = "Artist name")]
    ArtistName,
}

impl Field {
    /// Numeric value of a countable field, `None` when unknown.
    fn count(self, details: &AlbumDetails) -> Option<u64> {
        match self {
            Field::TotalTracks => details.total_tracks().map(u64::from),
            Field::ReleaseYear => details.release_date().as_deref().and_then(parse_year),
            Field::ArtistGenres => details.artist_genres_count().map(u64::from),
            Field::Popularity => details.popularity().map(u64::from),
            Field::ArtistFollowers => *details.artist_followers(),
            Field::AlbumType | Field::ExplicitContent | Field::ArtistName => None,
        }
    }
}

/// How a rule judges an album.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Check {
    /// Inclusive bounds on a numeric field.
    Count {
        field: Field,
        min: Option<u64>,
        max: Option<u64>,
    },
    /// Album type is one of `accepted`, ignoring case.
    AlbumType { accepted: &'static [&'static str] },
    /// Explicit flag must equal `expected`.
    Explicit { expected: bool },
    /// Title contains `needle`, ignoring case.
    TitleContains {
        needle: &'static str,
        label: &'static str,
    },
    TitleHasDigit,
    TitleHasColor,
    TitleOneWord,
    ArtistOneWord,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) key: &'static str,
    pub(crate) check: Check,
    /// What the prompt asks for, phrased to follow "Needs ".
    pub(crate) requirement: &'static str,
}

const fn count(
    key: &'static str,
    field: Field,
    min: Option<u64>,
    max: Option<u64>,
    requirement: &'static str,
) -> Rule {
    Rule {
        key,
        check: Check::Count { field, min, max },
        requirement,
    }
}

const fn rule(key: &'static str, check: Check, requirement: &'static str) -> Rule {
    Rule {
        key,
        check,
        requirement,
    }
}

use Field::*;

pub(crate) static RULES: [Rule; 25] = [
    count("tracks_5_or_less", TotalTracks, None, Some(5), "5 or fewer tracks"),
    count("tracks_6_10", TotalTracks, Some(6), Some(10), "6 to 10 tracks"),
    count("tracks_11_15", TotalTracks, Some(11), Some(15), "11 to 15 tracks"),
    count("tracks_16_20", TotalTracks, Some(16), Some(20), "16 to 20 tracks"),
    count("tracks_21_plus", TotalTracks, Some(21), None, "21+ tracks"),
    count("released_before_1990", ReleaseYear, None, Some(1989), "before 1990"),
    count("released_1990s", ReleaseYear, Some(1990), Some(1999), "1990 to 1999"),
    count("released_2000s", ReleaseYear, Some(2000), Some(2009), "2000 to 2009"),
    count("released_2010s", ReleaseYear, Some(2010), Some(2019), "2010 to 2019"),
    count("released_2020_plus", ReleaseYear, Some(2020), None, "2020 or later"),
    count("artist_genres_0", ArtistGenres, Some(0), Some(0), "0 genres listed"),
    count("artist_genres_1_2", ArtistGenres, Some(1), Some(2), "1 to 2 genres listed"),
    count("artist_genres_3_plus", ArtistGenres, Some(3), None, "3+ genres listed"),
    rule("artist_one_word", Check::ArtistOneWord, "a one-word artist name"),
    rule("title_one_word", Check::TitleOneWord, "a one-word title"),
    rule("title_contains_number", Check::TitleHasDigit, "a number in the title"),
    rule(
        "title_contains_live",
        Check::TitleContains {
            needle: "live",
            label: "Live",
        },
        "\"Live\" in the title",
    ),
    rule(
        "title_contains_deluxe",
        Check::TitleContains {
            needle: "deluxe",
            label: "Deluxe",
        },
        "\"Deluxe\" in the title",
    ),
    rule("title_contains_color_word", Check::TitleHasColor, "a color word in the title"),
    rule(
        "album_type_album",
        Check::AlbumType {
            accepted: &["album"],
        },
        "album",
    ),
    rule(
        "album_type_single_or_ep",
        Check::AlbumType {
            accepted: &["single", "ep"],
        },
        "single or EP",
    ),
    rule(
        "no_explicit_tracks",
        Check::Explicit { expected: false },
        "no explicit tracks",
    ),
    rule(
        "has_explicit_track",
        Check::Explicit { expected: true },
        "at least one explicit track",
    ),
    count(
        "artist_followers_1m_plus",
        ArtistFollowers,
        Some(1_000_000),
        None,
        "1M+ followers",
    ),
    count("album_popularity_70_plus", Popularity, Some(70), None, "popularity 70+"),
];

/// Looks up the rule for a prompt key.
pub(crate) fn rule_for(key: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.key == key)
}

impl Rule {
    /// Applies the rule: required-field gate first, then the predicate.
    pub(crate) fn evaluate(&self, details: &AlbumDetails) -> ValidationResult {
        let requirement = self.requirement;
        match self.check {
            Check::Count { field, min, max } => {
                let Some(value) = field.count(details) else {
                    return ValidationResult::unavailable(field);
                };
                let above = min.is_none_or(|m| value >= m);
                let below = max.is_none_or(|m| value <= m);
                if above && below {
                    ValidationResult::accept()
                } else {
                    ValidationResult::reject(format!("Needs {}, got {}.", requirement, value))
                }
            }
            Check::AlbumType { accepted } => {
                let Some(album_type) = details.album_type() else {
                    return ValidationResult::unavailable(AlbumType);
                };
                if accepted.iter().any(|a| album_type.eq_ignore_ascii_case(a)) {
                    ValidationResult::accept()
                } else {
                    ValidationResult::reject(format!(
                        "Needs {}, got {}.",
                        requirement, album_type
                    ))
                }
            }
            Check::Explicit { expected } => {
                let Some(explicit) = *details.has_explicit_track() else {
                    return ValidationResult::unavailable(ExplicitContent);
                };
                match (expected, explicit) {
                    (e, x) if e == x => ValidationResult::accept(),
                    (_, true) => ValidationResult::reject(format!(
                        "Needs {}, got an album with at least one explicit track.",
                        requirement
                    )),
                    (_, false) => ValidationResult::reject(format!(
                        "Needs {}, got an album with no explicit tracks.",
                        requirement
                    )),
                }
            }
            Check::TitleContains { needle, label } => {
                if contains_ignore_case(details.title(), needle) {
                    ValidationResult::accept()
                } else {
                    ValidationResult::reject(format!(
                        "Title \"{}\" does not contain \"{}\".",
                        details.title(),
                        label
                    ))
                }
            }
            Check::TitleHasDigit => {
                if contains_digit(details.title()) {
                    ValidationResult::accept()
                } else {
                    ValidationResult::reject(format!(
                        "Title \"{}\" has no number.",
                        details.title()
                    ))
                }
            }
            Check::TitleHasColor => match find_color_word(details.title()) {
                Some(_) => ValidationResult::accept(),
                None => ValidationResult::reject(format!(
                    "Title \"{}\" has no color word.",
                    details.title()
                )),
            },
            Check::TitleOneWord => {
                if is_one_word(details.title()) {
                    ValidationResult::accept()
                } else {
                    ValidationResult::reject(format!(
                        "Title \"{}\" is not one word.",
                        details.title()
                    ))
                }
            }
            Check::ArtistOneWord => {
                let artist = details.artist_name();
                if artist.trim().is_empty() {
                    return ValidationResult::unavailable(ArtistName);
                }
                if is_one_word(artist) {
                    ValidationResult::accept()
                } else {
                    ValidationResult::reject(format!(
                        "Artist name \"{}\" is not one word.",
                        artist
                    ))
                }
            }
        }
    }
}
