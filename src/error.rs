use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(
        "too many stops to optimize: {stops} stops exceeds the limit of {max_stops}; reduce stop count to {max_stops} or fewer"
    )]
    CapacityExceeded { stops: usize, max_stops: usize },

    #[error("no distance data supplied for a route with {0} waypoints")]
    EmptyMatrix(usize),

    #[error("distance matrix is not square: row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("distance matrix covers {matrix} waypoints but {waypoints} were supplied")]
    SizeMismatch { matrix: usize, waypoints: usize },

    #[error("matrix element ({origin}, {destination}) is out of range for {size} waypoints")]
    ElementOutOfRange {
        origin: usize,
        destination: usize,
        size: usize,
    },

    #[error("invalid cost '{value}' at row {row}, column {column}")]
    InvalidCost {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// True for failures the caller can fix by trimming the stop list.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}
