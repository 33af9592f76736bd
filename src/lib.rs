//! Parse and roll tabletop dice notation.
//!
//! An expression is a dice term followed by optional clauses, always in this
//! order: reroll, explode, keep/drop and an arithmetic modifier.
//! Several expressions can be rolled at once by separating them with commas.
//!
//! ```rust
//! # use dice_notation::{count_successes, roll, roll_with, FixedDraws, Roller};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), dice_notation::Error> {
//! // Roll 4 d6, reroll 1s once, explode on 6s, keep the highest 3 and add 2.
//! let rolled = roll("4d6r1!kh3+2")?;
//! println!("{}", rolled[0]); // 4d6r1!kh3+2: [4, 5, 6] = 17
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let rolled = roll_with("1d20, 2d8+3", &mut rng)?;
//! assert_eq!(rolled.len(), 2);
//!
//! // Count the dice that rolled 5 or more
//! let counted = count_successes("10d6", ">=5")?;
//! assert!(counted[0].success_count() <= 10);
//!
//! // Replay fixed draws in [0, 1) for reproducible rolls
//! let mut roller = Roller::with_source(FixedDraws::new(vec![0.99, 0.99, 0.4]));
//! let rolled = roller.roll("1d6!")?;
//! assert_eq!(rolled[0].rolls(), &[6, 6, 3]);
//! assert_eq!(rolled[0].total(), 15);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod evaluate;
mod parse;

pub use config::{Limits, DEFAULT_EXPLOSIONS_PER_DIE, MAX_DICE};
pub use error::{DomainError, Error, SyntaxError};
pub use evaluate::outcome::{RollOutcome, SuccessOutcome};
pub use evaluate::roller::Roller;
pub use evaluate::source::{FixedDraws, RandomSource, RngSource};
pub use parse::{ComparePoint, Dice, Exploding, Expression, KeepKind, ReRoll, Selection};

/// Parses a single expression without rolling the dice.
pub fn parse(notation: &str) -> Result<Expression, Error> {
    Expression::parse(notation)
}

/// Rolls every comma separated expression of the notation.
pub fn roll(notation: &str) -> Result<Vec<RollOutcome>, Error> {
    Roller::new().roll(notation)
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(notation: &str, rng: &mut impl rand::Rng) -> Result<Vec<RollOutcome>, Error> {
    Roller::with_source(RngSource::new(rng)).roll(notation)
}

/// Rolls the notation and counts, for each expression, the rolls that pass
/// the condition (`>=5`, `<3`, `6`...).
pub fn count_successes(notation: &str, condition: &str) -> Result<Vec<SuccessOutcome>, Error> {
    Roller::new().count_successes(notation, condition)
}

/// Same as `count_successes()` but allows you to choose the rng you prefer to use.
pub fn count_successes_with(
    notation: &str,
    condition: &str,
    rng: &mut impl rand::Rng,
) -> Result<Vec<SuccessOutcome>, Error> {
    Roller::with_source(RngSource::new(rng)).count_successes(notation, condition)
}
