#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Catalog has {available} games, but at least {needed} are required")]
    InsufficientCatalog { needed: usize, available: usize },

    #[error("Operation '{0}' is not valid in the current quiz state")]
    InvalidState(&'static str),

    #[error("The current round has already been answered")]
    AlreadyAnswered,

    #[error("'{0}' is not one of the current round's options")]
    UnknownSelection(String),
}
