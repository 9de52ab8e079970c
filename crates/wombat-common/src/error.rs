use thiserror::Error;

/// Errors raised while constructing Wombat trees.
///
/// The type system rules out almost every malformed shape. What remains are
/// the conversions from unchecked input, such as a plain `Vec` handed to a
/// constructor that needs at least one item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A list that must hold at least one item was given none.
    #[error("{context} requires at least one item")]
    EmptyList {
        /// What the list was meant to populate, e.g. `"ul"`.
        context: &'static str,
    },

    /// A heading level outside `1..=6`.
    #[error("heading level must be between 1 and 6, got {0}")]
    NotAHeadingLevel(u8),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
