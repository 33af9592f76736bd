use winnow::{
    combinator::{alt, opt, preceded},
    token::one_of,
    PResult, Parser,
};

use super::notation::number;
use super::{ComparePoint, Exploding, ReRoll};
use crate::error::SyntaxError;

type CompareFn = fn(u32) -> ComparePoint;

impl ComparePoint {
    /// Parses a success condition such as `>=5`, `<3` or `6`.
    /// The comparison defaults to `=` when omitted.
    pub fn parse(condition: &str) -> Result<ComparePoint, SyntaxError> {
        (opt(comparison), number)
            .map(|(cmp, target)| cmp.unwrap_or(ComparePoint::Equal)(target))
            .parse(condition.trim())
            .map_err(|_| SyntaxError::Condition(condition.to_string()))
    }

    pub fn passes(self, value: u32) -> bool {
        match self {
            ComparePoint::Equal(n) => value == n,
            ComparePoint::LessThan(n) => value < n,
            ComparePoint::GreaterThan(n) => value > n,
            ComparePoint::LessThanOrEqual(n) => value <= n,
            ComparePoint::GreaterThanOrEqual(n) => value >= n,
        }
    }

    pub fn target(self) -> u32 {
        match self {
            ComparePoint::Equal(n)
            | ComparePoint::LessThan(n)
            | ComparePoint::GreaterThan(n)
            | ComparePoint::LessThanOrEqual(n)
            | ComparePoint::GreaterThanOrEqual(n) => n,
        }
    }
}

impl ReRoll {
    /// Decodes `r{compare_point}{target}L{limit}`, the target is required.
    /// Without a limit every die may be rerolled once.
    pub(crate) fn decode(clause: &str, quantity: u32) -> Result<ReRoll, SyntaxError> {
        let mut parser = preceded(one_of(['r', 'R']), (opt(comparison), number, opt(limit)));
        let (cmp, target, limit) = parser
            .parse(clause)
            .map_err(|_| SyntaxError::ReRoll(clause.to_string()))?;

        Ok(ReRoll {
            compare_point: cmp.unwrap_or(ComparePoint::Equal)(target),
            limit: limit.unwrap_or(quantity),
        })
    }
}

impl Exploding {
    /// Decodes `!{compare_point}{target}L{limit}`, everything after `!` is optional.
    /// The target defaults to the number of sides.
    pub(crate) fn decode(
        clause: &str,
        sides: u32,
        default_explosions: u32,
    ) -> Result<Exploding, SyntaxError> {
        let (cmp, target, limit) = preceded('!', (opt(comparison), opt(number), opt(limit)))
            .parse(clause)
            .map_err(|_| SyntaxError::Exploding(clause.to_string()))?;

        Ok(Exploding {
            compare_point: cmp.unwrap_or(ComparePoint::Equal)(target.unwrap_or(sides)),
            limit: limit.unwrap_or(default_explosions),
        })
    }
}

fn comparison(input: &mut &str) -> PResult<CompareFn> {
    alt((
        "<=".value(ComparePoint::LessThanOrEqual as CompareFn),
        ">=".value(ComparePoint::GreaterThanOrEqual as CompareFn),
        '<'.value(ComparePoint::LessThan as CompareFn),
        '>'.value(ComparePoint::GreaterThan as CompareFn),
        '='.value(ComparePoint::Equal as CompareFn),
    ))
    .parse_next(input)
}

fn limit(input: &mut &str) -> PResult<u32> {
    preceded(one_of(['l', 'L']), number).parse_next(input)
}
