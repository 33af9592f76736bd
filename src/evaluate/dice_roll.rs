use super::source::RandomSource;
use crate::parse::{Dice, Exploding, Expression, KeepKind, ReRoll, Selection};

impl Expression {
    /// Rolls the expression and returns the rolls that count towards the total.
    ///
    /// Rolls are sorted ascending when a keep/drop clause is present, otherwise
    /// they stay in the order they were generated.
    pub fn roll_with(&self, source: &mut impl RandomSource) -> Vec<u32> {
        let pool = self.roll_pool(source);

        match self.selection {
            Some(selection) => selection.apply(pool),
            None => pool,
        }
    }

    /// Rolls every die in order, each followed by its explosions.
    pub fn roll_pool(&self, source: &mut impl RandomSource) -> Vec<u32> {
        let Dice { quantity, sides } = self.dice;
        let mut pool = Vec::with_capacity(quantity as usize);
        // Shared by every die of the expression
        let mut rerolls_remaining = self.reroll.map_or(0, |reroll| reroll.limit);

        for _ in 0..quantity {
            let mut current = source.roll_die(sides);

            if let Some(reroll) = self.reroll {
                current = apply_reroll(reroll, current, &mut rerolls_remaining, sides, source);
            }
            pool.push(current);

            if let Some(exploding) = self.exploding {
                apply_exploding(exploding, current, sides, &mut pool, source);
            }
        }

        pool
    }
}

fn apply_reroll(
    reroll: ReRoll,
    current: u32,
    rerolls_remaining: &mut u32,
    sides: u32,
    source: &mut impl RandomSource,
) -> u32 {
    if !reroll.compare_point.passes(current) || *rerolls_remaining == 0 {
        return current;
    }

    *rerolls_remaining -= 1;
    let rerolled = source.roll_die(sides);
    tracing::trace!(
        from = current,
        to = rerolled,
        remaining = *rerolls_remaining,
        "rerolled die"
    );

    rerolled
}

fn apply_exploding(
    exploding: Exploding,
    mut current: u32,
    sides: u32,
    pool: &mut Vec<u32>,
    source: &mut impl RandomSource,
) {
    for _ in 0..exploding.limit {
        if !exploding.compare_point.passes(current) {
            break;
        }

        current = source.roll_die(sides);
        tracing::trace!(value = current, "die exploded");
        pool.push(current);
    }
}

impl Selection {
    /// Sorts the pool ascending and slices it.
    pub fn apply(self, mut pool: Vec<u32>) -> Vec<u32> {
        pool.sort();
        let len = pool.len();

        match self {
            Selection::Drop(KeepKind::Lowest, amount) => pool.split_off((amount as usize).min(len)),
            Selection::Drop(KeepKind::Highest, amount) => {
                pool.truncate(len.saturating_sub(amount as usize));
                pool
            }
            Selection::Keep(KeepKind::Lowest, amount) => {
                pool.truncate(amount as usize);
                pool
            }
            Selection::Keep(KeepKind::Highest, amount) => {
                pool.split_off(len.saturating_sub(amount as usize))
            }
        }
    }
}
