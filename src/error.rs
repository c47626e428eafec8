use thiserror::Error;

/// Failures raised by the I/O glue around the engine (Riot API, config, files).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Failures raised by the trait scoring and resonance engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Not enough match data to analyze (no matches supplied)")]
    InsufficientData,

    #[error("Champion catalog entry '{champion}' is invalid: {reason}")]
    CatalogIntegrity { champion: String, reason: String },

    #[error("Trait '{trait_name}' produced score {score}, outside 1-10")]
    ScoreOutOfRange { trait_name: String, score: i64 },
}

pub type EngineResult<T> = Result<T, EngineError>;
