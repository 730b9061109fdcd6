use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    /// Zero hop cost between two distinct indices; the score would be infinite.
    #[error("Cities {from} and {to} are coincident")]
    CoincidentCities { from: usize, to: usize },

    #[error("City {city} not found in the unexplored partition")]
    ElementNotFound { city: usize },

    #[error("Roulette wheel invoked with no candidates")]
    EmptyRoulette,

    #[error("Tour extraction ran out of candidates at step {step}")]
    ExhaustedCandidates { step: usize },

    #[error("Thread Pool Error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type AcsResult<T> = Result<T, AcsError>;
