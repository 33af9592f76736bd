use rand::rngs::ThreadRng;

use super::outcome::{RollOutcome, SuccessOutcome};
use super::source::{RandomSource, RngSource};
use crate::config::Limits;
use crate::error::Error;
use crate::parse::{ComparePoint, Expression};

/// Evaluates dice notation with a chosen random source and [`Limits`].
///
/// A notation may hold several expressions separated by commas, they are
/// rolled left to right and the first invalid one aborts the whole call.
#[derive(Debug, Clone)]
pub struct Roller<S> {
    source: S,
    limits: Limits,
}

impl Roller<RngSource<ThreadRng>> {
    pub fn new() -> Self {
        Self::with_source(RngSource::new(rand::thread_rng()))
    }
}

impl Default for Roller<RngSource<ThreadRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Roller<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Rolls every comma separated expression of the notation.
    pub fn roll(&mut self, notation: &str) -> Result<Vec<RollOutcome>, Error> {
        notation
            .split(',')
            .map(str::trim)
            .map(|expression| self.roll_expression(expression))
            .collect()
    }

    /// Rolls a single expression, no comma splitting happens here.
    pub fn roll_expression(&mut self, notation: &str) -> Result<RollOutcome, Error> {
        let expression = Expression::parse_with(notation, &self.limits)?;
        let rolls = expression.roll_with(&mut self.source);
        let outcome = RollOutcome::new(notation, rolls, expression.modifier);

        tracing::debug!(notation, total = outcome.total, "rolled dice expression");
        Ok(outcome)
    }

    /// Rolls the notation and counts the rolls of each expression that pass
    /// the condition. The condition is checked before anything is rolled.
    pub fn count_successes(
        &mut self,
        notation: &str,
        condition: &str,
    ) -> Result<Vec<SuccessOutcome>, Error> {
        let condition = ComparePoint::parse(condition)?;

        let outcomes = self.roll(notation)?;
        Ok(outcomes
            .into_iter()
            .map(|outcome| outcome.count_successes(condition))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, SyntaxError};
    use crate::evaluate::source::FixedDraws;

    fn fixed(draws: &[f64]) -> Roller<FixedDraws> {
        Roller::with_source(FixedDraws::new(draws.to_vec()))
    }

    #[test]
    fn test_compound_notation() {
        let mut roller = fixed(&[0.5]);
        let outcomes = roller.roll("1d6, 2d10+5").unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].notation(), "1d6");
        assert_eq!(outcomes[0].rolls(), &[4]);
        assert_eq!(outcomes[1].notation(), "2d10+5");
        assert_eq!(outcomes[1].rolls(), &[6, 6]);
        assert_eq!(outcomes[1].total(), 17);
    }

    #[test]
    fn test_compound_draws_in_order() {
        let mut roller = fixed(&[0.05, 0.99, 0.5]);
        let outcomes = roller.roll("1d6,1d6,1d6").unwrap();
        let totals: Vec<_> = outcomes.iter().map(|o| o.total()).collect();

        assert_eq!(totals, vec![1, 6, 4]);
    }

    #[test]
    fn test_first_error_aborts() {
        let mut roller = fixed(&[0.5]);
        let err = roller.roll("1d6, invalid, 0d6").unwrap_err();

        assert_eq!(err, Error::Syntax(SyntaxError::Notation("invalid".into())));
        // Only the first expression was rolled
        assert_eq!(roller.into_source().consumed(), 1);
    }

    #[test]
    fn test_validation_consumes_no_randomness() {
        for notation in ["4d6dl4", "4d6dl5", "4d6kh5", "4d6kl0", "1001d6", "0d6"] {
            let mut roller = fixed(&[0.5]);
            assert!(roller.roll(notation).is_err(), "{notation}");
            assert_eq!(roller.into_source().consumed(), 0, "{notation}");
        }
    }

    #[test]
    fn test_limits() {
        let limits = Limits {
            max_dice: 2,
            default_explosions: 1,
        };
        let mut roller = fixed(&[0.99]).with_limits(limits);
        assert_eq!(roller.limits(), &limits);

        assert_eq!(
            roller.roll("3d6").unwrap_err(),
            Error::Domain(DomainError::TooManyDice(2))
        );
        assert_eq!(roller.roll("1d6!").unwrap()[0].rolls(), &[6, 6]);
    }

    #[test]
    fn test_empty_expression() {
        let mut roller = fixed(&[0.5]);
        assert_eq!(
            roller.roll("1d6,").unwrap_err(),
            Error::Syntax(SyntaxError::Notation(String::new()))
        );
    }

    #[test]
    fn test_count_successes_invalid_condition_rolls_nothing() {
        let mut roller = fixed(&[0.5]);
        let err = roller.count_successes("10d6", "invalid").unwrap_err();

        assert_eq!(err.to_string(), "Invalid success condition: \"invalid\"");
        assert_eq!(roller.into_source().consumed(), 0);
    }

    #[test]
    fn test_count_successes_after_keep() {
        let mut roller = fixed(&[0.99, 0.8, 0.2, 0.05, 0.6]);
        let outcomes = roller.count_successes("4d6!L1kh3", ">=5").unwrap();
        let outcome = &outcomes[0];

        assert_eq!(outcome.rolls(), &[4, 5, 6]);
        assert_eq!(outcome.success_count(), 2);
    }
}
