use thiserror::Error;

/// Concrete errors surfaced while building a [`Router`][crate::Router].
///
/// These all describe route specifications that could never match anything;
/// building aborts on the first one rather than silently carrying a dead
/// route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpecError {
    /// a literal segment was empty. The empty token only ever comes from a
    /// terminating slash, which routes express with
    /// [`trailing_slash`][crate::trailing_slash] instead.
    #[error("empty literal segment in route specification")]
    EmptyLiteral,

    /// a literal segment contained a character tokenization always
    /// consumes, so no token could ever equal it
    #[error("literal segment {segment:?} contains unmatchable character {character:?}")]
    UnmatchableLiteral {
        /// the offending segment
        segment: String,
        /// the character no token can contain
        character: char,
    },
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, SpecError>;
