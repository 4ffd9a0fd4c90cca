//! Title and artist string predicates.

const COLOR_WORDS: [&str; 23] = [
    "red", "blue", "green", "black", "white", "gray", "grey", "pink", "purple", "violet",
    "orange", "yellow", "gold", "silver", "brown", "beige", "teal", "cyan", "magenta", "navy",
    "maroon", "lavender", "indigo",
];

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if any ASCII digit appears.
pub(crate) fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Exactly one whitespace-free token after trimming.
pub(crate) fn is_one_word(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.chars().any(char::is_whitespace)
}

/// First color word appearing as a whole word, ignoring case.
///
/// Word characters are ASCII letters, digits and `_`, so "Redemption" and
/// "red_eye" do not count but "Red-Eye" does.
pub(crate) fn find_color_word(text: &str) -> Option<&'static str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .find_map(|word| {
            COLOR_WORDS
                .iter()
                .copied()
                .find(|color| word.eq_ignore_ascii_case(color))
        })
}

/// Leading four-digit year of a `YYYY[-MM-DD]` date.
pub(crate) fn parse_year(release_date: &str) -> Option<u64> {
    let prefix = release_date.get(..4)?;
    if prefix.bytes().all(|b| b.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_word_boundaries() {
        assert_eq!(find_color_word("Red-Eye"), Some("red"));
        assert_eq!(find_color_word("Kind of BLUE"), Some("blue"));
        assert_eq!(find_color_word("Redemption Song"), None);
        assert_eq!(find_color_word("red_eye"), None);
        assert_eq!(find_color_word("The Grey Album"), Some("grey"));
        assert_eq!(find_color_word(""), None);
    }

    #[test]
    fn test_one_word() {
        assert!(is_one_word("  Thriller  "));
        assert!(!is_one_word("Abbey Road"));
        assert!(!is_one_word("   "));
        assert!(!is_one_word("Tab\tSeparated"));
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit("1989"));
        assert!(contains_digit("Vol. 2"));
        assert!(!contains_digit("Two"));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2020-01-15"), Some(2020));
        assert_eq!(parse_year("1977"), Some(1977));
        assert_eq!(parse_year("77"), None);
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year("19ab-01-01"), None);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("MTV Unplugged (LIVE)", "live"));
        assert!(contains_ignore_case("Olive Tree", "live"));
        assert!(!contains_ignore_case("Studio Sessions", "deluxe"));
    }
}
