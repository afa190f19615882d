/// Alias for `Result<T, MapError>`.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while generating or encoding a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A grid access fell outside the grid's bounds.
    #[error("could not access {x},{y} as it is out-of-range for a {width}x{height} grid")]
    OutOfRange {
        /// The requested column.
        x: i64,
        /// The requested row.
        y: i64,
        /// Width of the grid that was accessed.
        width: usize,
        /// Height of the grid that was accessed.
        height: usize,
    },

    /// No map edge produced a usable water source.
    #[error("could not generate water sources, try another seed")]
    SourceNotFound,

    /// The generation options are unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The world document could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The archive container could not be written or read.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing to or reading from the byte sink failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
