//! Structural guarantees for boards.
//!
//! A board is rebuilt from JSON whenever it is loaded or backfilled, so its
//! shape cannot be taken on trust. Each guarantee is a zero-sized type
//! implementing [`Invariant`]; tuples of them form an [`InvariantSet`] that
//! reports every broken guarantee in one pass.

use crate::board::Board;

/// A property of `S` that every valid value satisfies.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in error messages.
    fn description() -> &'static str;
}

/// A broken [`Invariant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Records a violation of the property described by `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked as a unit.
pub trait InvariantSet<S> {
    /// Evaluates every member; the error lists each one that failed, in
    /// declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! invariant_tuple {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $((<$inv>::holds(state), <$inv>::description())),+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

invariant_tuple!(A, B);
invariant_tuple!(A, B, C);
invariant_tuple!(A, B, C, D);

pub mod contiguous_positions;
pub mod dimension;
pub mod square_count;
pub mod unique_prompts;

pub use contiguous_positions::ContiguousPositionsInvariant;
pub use dimension::{DimensionInvariant, MAX_DIMENSION};
pub use square_count::SquareCountInvariant;
pub use unique_prompts::UniquePromptsInvariant;

/// Everything a complete board satisfies.
pub type BoardInvariants = (
    DimensionInvariant,
    SquareCountInvariant,
    ContiguousPositionsInvariant,
    UniquePromptsInvariant,
);

/// The subset that still holds while squares are missing, used on partial
/// boards before backfill.
pub type LayoutInvariants = (
    DimensionInvariant,
    ContiguousPositionsInvariant,
    UniquePromptsInvariant,
);


#[cfg(test)]
mod tests {
    use super::fixtures::tamper;
    use super::*;
    use crate::board::BoardGenerator;

    fn board() -> Board {
        BoardGenerator::new().generate(5, "invariants").unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_generated_board() {
        assert!(BoardInvariants::check_all(&board()).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let broken = tamper(&board(), |v| {
            let squares = v["squares"].as_array_mut().unwrap();
            squares.pop();
            squares[0]["position"] = serde_json::json!(3);
            let repeated = squares[2]["promptKey"].clone();
            squares[1]["promptKey"] = repeated;
        });

        let violations = BoardInvariants::check_all(&broken).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_oversized_dimension_fails_without_panicking() {
        let huge = tamper(&board(), |v| {
            v["dimension"] = serde_json::json!(5_000_000_000u64);
            v["squares"] = serde_json::json!([]);
        });

        let violations = LayoutInvariants::check_all(&huge).unwrap_err();
        assert_eq!(violations[0].description, DimensionInvariant::description());
        assert!(BoardInvariants::check_all(&huge).is_err());
    }

    #[test]
    fn test_layout_invariants_tolerate_gaps() {
        let partial = tamper(&board(), |v| {
            v["squares"].as_array_mut().unwrap().remove(7);
        });

        assert!(LayoutInvariants::check_all(&partial).is_ok());
        assert!(BoardInvariants::check_all(&partial).is_err());
    }
}
