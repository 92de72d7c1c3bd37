//! Network loading error types.

use crate::domain::{LineId, SectionError, StationId};
use crate::path::PathError;

/// Errors that can occur when loading or querying a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the network file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The network description is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("station {0} is defined more than once")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("line {0} is defined more than once")]
    DuplicateLine(LineId),

    /// A section or query refers to a station that is not defined
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// A query names a station that is not defined
    #[error("unknown station name: {0}")]
    UnknownStationName(String),

    /// A line was declared without any sections
    #[error("line {0} has no sections")]
    EmptyLine(LineId),

    /// A section insertion or station removal broke a line rule
    #[error("line {line}: {error}")]
    Section { line: LineId, error: SectionError },

    /// The path query itself failed
    #[error(transparent)]
    Path(#[from] PathError),
}
