use crate::parse::ComparePoint;

/// The result of rolling one expression of the notation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOutcome {
    pub(crate) notation: String,
    pub(crate) rolls: Vec<u32>,
    pub(crate) total: i64,
}

impl RollOutcome {
    pub fn new(notation: impl Into<String>, rolls: Vec<u32>, modifier: i64) -> Self {
        let total = rolls
            .iter()
            .copied()
            .map(i64::from)
            .fold(modifier, i64::saturating_add);

        Self {
            notation: notation.into(),
            rolls,
            total,
        }
    }

    /// The expression exactly as it was written, without surrounding whitespace.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// The rolls left after rerolls, explosions and keep/drop.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    /// Sum of the rolls plus the arithmetic modifier.
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn count_successes(self, condition: ComparePoint) -> SuccessOutcome {
        let success_count = self
            .rolls
            .iter()
            .filter(|&&roll| condition.passes(roll))
            .count();

        SuccessOutcome {
            notation: self.notation,
            rolls: self.rolls,
            condition,
            success_count,
        }
    }
}

/// How many rolls of one expression met a success condition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuccessOutcome {
    pub(crate) notation: String,
    pub(crate) rolls: Vec<u32>,
    pub(crate) condition: ComparePoint,
    pub(crate) success_count: usize,
}

impl SuccessOutcome {
    pub fn notation(&self) -> &str {
        &self.notation
    }
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }
    pub fn condition(&self) -> ComparePoint {
        self.condition
    }
    pub fn success_count(&self) -> usize {
        self.success_count
    }
}

pub(crate) fn to_notations(rolls: &[u32]) -> String {
    format!(
        "[{}]",
        rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} = {}",
            self.notation,
            to_notations(&self.rolls),
            self.total
        )
    }
}

impl std::fmt::Display for SuccessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.success_count == 1 {
            "success"
        } else {
            "successes"
        };
        write!(
            f,
            "{} ({}): {} = {} {noun}",
            self.notation,
            self.condition,
            to_notations(&self.rolls),
            self.success_count
        )
    }
}
