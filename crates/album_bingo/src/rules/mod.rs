//! Prompt rules: does an album satisfy a square's prompt?
//!
//! Evaluation is a pure function of the prompt key and the album metadata.
//! Rules that depend on an optional field check that the field is known
//! before looking at its value, so unknown metadata is rejected with a
//! reason naming the missing field rather than silently read as zero.

mod table;
mod text;

use crate::types::AlbumDetails;
use serde::{Deserialize, Serialize};
use table::Field;
use tracing::{debug, instrument};

/// Reason attached to every accepted album.
pub const OK_REASON: &str = "OK";

/// Outcome of checking an album against a prompt.
///
/// A rejection is an ordinary outcome, not an error; the player can try
/// another album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    accepted: bool,
    reason: String,
}

impl ValidationResult {
    /// Accepted result carrying [`OK_REASON`].
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: OK_REASON.to_string(),
        }
    }

    /// Rejected result with a specific reason.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            accepted: false,
            reason: reason.into(),
        }
    }

    fn unavailable(field: Field) -> Self {
        Self::reject(format!("{} not available for this album.", field))
    }

    /// Whether the album satisfies the prompt.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Why the album was accepted or rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Checks `details` against the prompt identified by `prompt_key`.
///
/// Unknown and empty keys are rejected, never panicked on, since the
/// prompt catalog may change underneath stored boards.
#[instrument(skip(details), fields(album_id = %details.id()))]
pub fn validate(prompt_key: &str, details: &AlbumDetails) -> ValidationResult {
    if prompt_key.trim().is_empty() {
        return ValidationResult::reject("This square is missing a prompt key.");
    }

    let result = match table::rule_for(prompt_key) {
        Some(rule) => rule.evaluate(details),
        None => ValidationResult::reject(format!("unknown prompt \"{}\"", prompt_key)),
    };

    debug!(accepted = result.accepted, reason = %result.reason, "Prompt evaluated");
    result
}
