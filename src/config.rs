/// Hard ceiling on the number of dice a single expression may roll.
pub const MAX_DICE: u32 = 1000;

/// Explosions allowed per die when an explode clause doesn't set its own limit.
pub const DEFAULT_EXPLOSIONS_PER_DIE: u32 = 100;

/// Settings applied while parsing an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Expressions rolling more dice than this are rejected.
    pub max_dice: u32,
    /// Explosion limit used when an explode clause has no `L{limit}`.
    /// An explicit limit in the notation is honoured as written.
    pub default_explosions: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dice: MAX_DICE,
            default_explosions: DEFAULT_EXPLOSIONS_PER_DIE,
        }
    }
}
