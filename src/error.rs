use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the crate can produce, one variant per kind.
///
/// Preconditions are checked before any mutation happens, so a returned error
/// always leaves the involved [`Factory`](crate::Factory) unchanged. The SQL
/// writers never wrap or remap a core error: a `LengthMismatch` raised while
/// zipping column metadata surfaces to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The elements of a dynamically typed factory are not all of one kind.
    #[error("factory holds elements of more than one type: {}", kinds.join(", "))]
    ElemTypeMismatch { kinds: Vec<String> },

    /// An update addressed a position outside `[0, length)`.
    #[error("index {index} is out of range for a factory of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// Two sequences of different lengths cannot be zipped.
    #[error("cannot zip sequences of different lengths ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    /// The requested SQL dialect is not one of the supported ones.
    #[error("unsupported sql dialect `{0}`")]
    UnsupportedDialect(String),

    /// A statement was requested for a table without column metadata.
    #[error("table has no column metadata to generate from")]
    MissingColumnInfo,

    /// Column names must be unique within a table.
    #[error("duplicate column names: {}", names.join(", "))]
    DuplicateColumnName { names: Vec<String> },

    #[error(transparent)]
    Io(#[from] io::Error),
}
