use winnow::{
    ascii::{digit1, multispace0, Caseless},
    combinator::{alt, opt, preceded},
    token::{one_of, take_while},
    PResult, Parser,
};

use super::{KeepKind, Selection};

/// An expression split into its clauses.
///
/// The reroll and explode clauses are only delimited here, their content is
/// decoded separately so a malformed clause reports itself rather than the
/// whole notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawNotation<'i> {
    pub quantity: u32,
    pub sides: u32,
    pub reroll: Option<&'i str>,
    pub exploding: Option<&'i str>,
    pub selection: Option<Selection>,
    pub modifier: i64,
}

impl<'i> RawNotation<'i> {
    pub fn recognize(input: &'i str) -> Option<RawNotation<'i>> {
        raw_notation.parse(input).ok()
    }
}

fn raw_notation<'i>(input: &mut &'i str) -> PResult<RawNotation<'i>> {
    let quantity = number.parse_next(input)?;
    Caseless("d").parse_next(input)?;
    let sides = number.parse_next(input)?;

    let reroll = opt(reroll_clause).parse_next(input)?;
    let exploding = opt(exploding_clause).parse_next(input)?;
    let selection = opt(selection).parse_next(input)?;
    // Whitespace is only allowed in front of the modifier
    let modifier = opt(preceded(multispace0, modifier)).parse_next(input)?;
    multispace0.parse_next(input)?;

    Ok(RawNotation {
        quantity,
        sides,
        reroll,
        exploding,
        selection,
        modifier: modifier.unwrap_or(0),
    })
}

/// An unsigned integer, saturating at `u32::MAX` so that oversized amounts
/// still reach the dice and keep/drop checks.
pub(crate) fn number(input: &mut &str) -> PResult<u32> {
    digit1
        .map(|digits: &str| digits.parse::<u32>().unwrap_or(u32::MAX))
        .parse_next(input)
}

fn reroll_clause<'i>(input: &mut &'i str) -> PResult<&'i str> {
    clause(input, ['r', 'R'])
}

fn exploding_clause<'i>(input: &mut &'i str) -> PResult<&'i str> {
    clause(input, ['!'])
}

/// A lead character followed by anything that may appear in a compare point
/// or a limit.
fn clause<'i, const N: usize>(input: &mut &'i str, lead: [char; N]) -> PResult<&'i str> {
    let start = *input;
    let lead = one_of(lead).parse_next(input)?;
    let body: &str = take_while(0.., is_clause_char).parse_next(input)?;

    Ok(&start[..lead.len_utf8() + body.len()])
}

fn is_clause_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '<' | '>' | '=' | 'l' | 'L')
}

fn selection(input: &mut &str) -> PResult<Selection> {
    alt((
        preceded(Caseless("kh"), number).map(|n| Selection::Keep(KeepKind::Highest, n)),
        preceded(Caseless("kl"), number).map(|n| Selection::Keep(KeepKind::Lowest, n)),
        preceded(Caseless("dh"), number).map(|n| Selection::Drop(KeepKind::Highest, n)),
        preceded(Caseless("dl"), number).map(|n| Selection::Drop(KeepKind::Lowest, n)),
    ))
    .parse_next(input)
}

fn modifier(input: &mut &str) -> PResult<i64> {
    let sign = one_of(['+', '-']).parse_next(input)?;
    multispace0.parse_next(input)?;
    let amount = digit1.try_map(str::parse::<i32>).parse_next(input)?;

    let amount = i64::from(amount);
    Ok(if sign == '-' { -amount } else { amount })
}
