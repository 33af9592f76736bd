mod clause;
mod notation;

use crate::config::Limits;
use crate::error::{DomainError, Error, SyntaxError};

use notation::RawNotation;

/// `{quantity}d{sides}`\
/// How many dice to roll and how many sides each die has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dice {
    pub(crate) quantity: u32,
    pub(crate) sides: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparePoint {
    /// `=` or no comparison at all
    Equal(u32),
    /// <
    LessThan(u32),
    /// \>
    GreaterThan(u32),
    /// <=
    LessThanOrEqual(u32),
    /// \>=
    GreaterThanOrEqual(u32),
}

/// `r{compare_point}{target}` or `r{compare_point}{target}L{limit}`\
/// Rerolls a die once if its first value passed the compare point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReRoll {
    pub(crate) compare_point: ComparePoint,
    /// Rerolls allowed across every die of the expression.
    pub(crate) limit: u32,
}

/// `!`, `!{compare_point}{target}` and optionally `L{limit}`\
/// Rolls an additional die whenever a value passes the compare point,
/// which is the highest value on the die if not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exploding {
    pub(crate) compare_point: ComparePoint,
    /// Explosions allowed for each die that was originally rolled.
    pub(crate) limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeepKind {
    Highest,
    Lowest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// `kh{amount}` or `kl{amount}`\
    /// Drops every roll except the highest or lowest `{amount}`.
    Keep(KeepKind, u32),
    /// `dh{amount}` or `dl{amount}`\
    /// Drops `{amount}` of the highest or lowest rolls.
    Drop(KeepKind, u32),
}

/// A single dice expression such as `4d6r<2!>5kh3+5`.
///
/// Clauses always appear in this order: dice, reroll, explode, keep/drop and
/// the arithmetic modifier. Only the dice are required.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expression {
    pub(crate) dice: Dice,
    pub(crate) reroll: Option<ReRoll>,
    pub(crate) exploding: Option<Exploding>,
    pub(crate) selection: Option<Selection>,
    pub(crate) modifier: i64,
}

impl Dice {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl ReRoll {
    pub fn compare_point(&self) -> ComparePoint {
        self.compare_point
    }
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Exploding {
    pub fn compare_point(&self) -> ComparePoint {
        self.compare_point
    }
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Expression {
    /// Parses a single expression using the default [`Limits`].
    pub fn parse(notation: &str) -> Result<Expression, Error> {
        Self::parse_with(notation, &Limits::default())
    }

    /// Parses a single expression.
    ///
    /// Every check happens here, before anything is rolled: the grammar, the
    /// reroll and explode clauses, then the dice and keep/drop amounts.
    pub fn parse_with(notation: &str, limits: &Limits) -> Result<Expression, Error> {
        let raw = RawNotation::recognize(notation)
            .ok_or_else(|| SyntaxError::Notation(notation.to_string()))?;

        let reroll = raw
            .reroll
            .map(|clause| ReRoll::decode(clause, raw.quantity))
            .transpose()?;
        let exploding = raw
            .exploding
            .map(|clause| Exploding::decode(clause, raw.sides, limits.default_explosions))
            .transpose()?;

        let expression = Expression {
            dice: Dice {
                quantity: raw.quantity,
                sides: raw.sides,
            },
            reroll,
            exploding,
            selection: raw.selection,
            modifier: raw.modifier,
        };
        expression.validate(limits)?;

        tracing::debug!(notation, parsed = %expression, "parsed dice expression");
        Ok(expression)
    }

    fn validate(&self, limits: &Limits) -> Result<(), DomainError> {
        let Dice { quantity, sides } = self.dice;

        if quantity == 0 || sides == 0 {
            return Err(DomainError::NonPositive);
        }
        if quantity > limits.max_dice {
            return Err(DomainError::TooManyDice(limits.max_dice));
        }

        match self.selection {
            Some(Selection::Drop(_, amount)) if amount >= quantity => Err(DomainError::DropAll),
            Some(Selection::Keep(_, amount)) if amount > quantity => Err(DomainError::KeepTooMany),
            Some(Selection::Keep(_, 0)) => Err(DomainError::KeepZero),
            _ => Ok(()),
        }
    }

    pub fn dice(&self) -> Dice {
        self.dice
    }
    pub fn reroll(&self) -> Option<ReRoll> {
        self.reroll
    }
    pub fn exploding(&self) -> Option<Exploding> {
        self.exploding
    }
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }
    pub fn modifier(&self) -> i64 {
        self.modifier
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.dice.quantity, self.dice.sides)?;
        if let Some(reroll) = self.reroll {
            write!(f, "r{}L{}", reroll.compare_point, reroll.limit)?;
        }
        if let Some(exploding) = self.exploding {
            write!(f, "!{}L{}", exploding.compare_point, exploding.limit)?;
        }
        if let Some(selection) = self.selection {
            write!(f, "{selection}")?;
        }
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

impl std::fmt::Display for ComparePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparePoint::Equal(val) => write!(f, "={val}"),
            ComparePoint::LessThan(val) => write!(f, "<{val}"),
            ComparePoint::GreaterThan(val) => write!(f, ">{val}"),
            ComparePoint::LessThanOrEqual(val) => write!(f, "<={val}"),
            ComparePoint::GreaterThanOrEqual(val) => write!(f, ">={val}"),
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Keep(kind, amount) => write!(f, "k{kind}{amount}"),
            Selection::Drop(kind, amount) => write!(f, "d{kind}{amount}"),
        }
    }
}

impl std::fmt::Display for KeepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            KeepKind::Highest => "h",
            KeepKind::Lowest => "l",
        };

        write!(f, "{str}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain_error(notation: &str) -> DomainError {
        match Expression::parse(notation) {
            Err(Error::Domain(err)) => err,
            other => panic!("expected a domain error for {notation}, got {other:?}"),
        }
    }

    #[test]
    fn test_full_expression() {
        let expression = Expression::parse("4d6r<2!>5kh3+5").unwrap();

        assert_eq!(
            expression.dice,
            Dice {
                quantity: 4,
                sides: 6
            }
        );
        assert_eq!(
            expression.reroll,
            Some(ReRoll {
                compare_point: ComparePoint::LessThan(2),
                limit: 4
            })
        );
        assert_eq!(
            expression.exploding,
            Some(Exploding {
                compare_point: ComparePoint::GreaterThan(5),
                limit: 100
            })
        );
        assert_eq!(
            expression.selection,
            Some(Selection::Keep(KeepKind::Highest, 3))
        );
        assert_eq!(expression.modifier, 5);
    }

    #[test]
    fn test_dice_only() {
        let expression = Expression::parse("2d10").unwrap();
        assert_eq!(expression.reroll, None);
        assert_eq!(expression.exploding, None);
        assert_eq!(expression.selection, None);
        assert_eq!(expression.modifier, 0);
    }

    #[test]
    fn test_exploding_limit_from_limits() {
        let limits = Limits {
            default_explosions: 7,
            ..Limits::default()
        };
        let expression = Expression::parse_with("1d6!", &limits).unwrap();
        assert_eq!(expression.exploding.unwrap().limit, 7);
    }

    #[test]
    fn test_explicit_exploding_limit_ignores_default() {
        let limits = Limits {
            default_explosions: 7,
            ..Limits::default()
        };
        let expression = Expression::parse_with("1d6!L200", &limits).unwrap();
        assert_eq!(expression.exploding.unwrap().limit, 200);
    }

    #[test]
    fn test_non_positive_dice() {
        assert_eq!(domain_error("0d6"), DomainError::NonPositive);
        assert_eq!(domain_error("1d0"), DomainError::NonPositive);
        assert_eq!(domain_error("0d6kh1+2"), DomainError::NonPositive);
    }

    #[test]
    fn test_too_many_dice() {
        assert_eq!(domain_error("1001d6"), DomainError::TooManyDice(1000));
        assert!(Expression::parse("1000d6").is_ok());
    }

    #[test]
    fn test_too_many_dice_custom_ceiling() {
        let limits = Limits {
            max_dice: 10,
            ..Limits::default()
        };
        let err = Expression::parse_with("11d6", &limits).unwrap_err();
        assert_eq!(err.to_string(), "Cannot roll more than 10 dice at once.");
    }

    #[test]
    fn test_keep_drop_amounts() {
        assert_eq!(domain_error("4d6dl4"), DomainError::DropAll);
        assert_eq!(domain_error("4d6dl5"), DomainError::DropAll);
        assert_eq!(domain_error("4d6dh4"), DomainError::DropAll);
        assert_eq!(domain_error("4d6kh5"), DomainError::KeepTooMany);
        assert_eq!(domain_error("4d6kl0"), DomainError::KeepZero);
        assert!(Expression::parse("4d6dl0").is_ok());
        assert!(Expression::parse("4d6kh4").is_ok());
    }

    #[test]
    fn test_syntax_checked_before_domain() {
        let err = Expression::parse("0d6r").unwrap_err();
        assert_eq!(err, Error::Syntax(SyntaxError::ReRoll("r".into())));
    }

    #[test]
    fn test_display_canonical() {
        let expression = Expression::parse("3D10R10l1!kh2 - 3").unwrap();
        assert_eq!(expression.to_string(), "3d10r=10L1!=10L100kh2-3");
    }

    #[test]
    fn test_display_parses_back() {
        let expression = Expression::parse("4d6r<=2L2!>=5L3dl1+5").unwrap();
        let reparsed = Expression::parse(&expression.to_string()).unwrap();
        assert_eq!(reparsed, expression);
    }
}
