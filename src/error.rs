use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlaCartaError {
    #[error("Invalid scale ratio: {0} (must be finite and greater than zero)")]
    InvalidRatio(f64),

    #[error("Invalid price database: {0}")]
    InvalidPriceDb(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Recipe not found with slug: {0}")]
    RecipeNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AlaCartaError>;
