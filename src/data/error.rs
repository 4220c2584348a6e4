use thiserror::Error;

/// Errors raised by the data layer (loading, deriving bounds, exporting).
#[derive(Debug, Error)]
pub enum DataError {
    /// Nothing usable to derive range bounds from.
    #[error("no data available")]
    NoData,

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
