/// The notation, or one of its clauses, doesn't match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Invalid dice notation: \"{0}\". Expected format like \"4d6r<2!>5kh3+5\".")]
    Notation(String),

    #[error("Invalid reroll syntax: \"{0}\"")]
    ReRoll(String),

    #[error("Invalid explode syntax: \"{0}\"")]
    Exploding(String),

    #[error("Invalid success condition: \"{0}\"")]
    Condition(String),
}

/// The notation is well formed but asks for something that can't be rolled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Number of dice and number of sides must be positive.")]
    NonPositive,

    #[error("Cannot roll more than {0} dice at once.")]
    TooManyDice(u32),

    #[error("Cannot drop all dice or more dice than were rolled.")]
    DropAll,

    #[error("Cannot keep more dice than were rolled.")]
    KeepTooMany,

    #[error("Cannot keep zero dice.")]
    KeepZero,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl Error {
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_message() {
        let err = Error::from(SyntaxError::Notation("invalid".into()));
        assert_eq!(
            err.to_string(),
            "Invalid dice notation: \"invalid\". Expected format like \"4d6r<2!>5kh3+5\"."
        );
        assert!(err.is_syntax());
    }

    #[test]
    fn test_too_many_dice_names_ceiling() {
        let err = Error::from(DomainError::TooManyDice(1000));
        assert_eq!(err.to_string(), "Cannot roll more than 1000 dice at once.");
        assert!(err.is_domain());
    }
}
