use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Probability Table Error: lottery table has no entries")]
    EmptyTable,

    #[error("Probability Table Error: '{label}' has invalid probability {value}")]
    InvalidProbability { label: String, value: f64 },

    #[error("Probability Table Error: '{label}' is listed more than once")]
    DuplicateLabel { label: String },

    #[error("Probability Table Error: probabilities sum to {sum}, expected 1.0")]
    TableSum { sum: f64 },

    #[error("Setting Error: setting {setting} is outside {min}..={max}")]
    SettingOutOfRange { setting: usize, min: usize, max: usize },
}

pub type SimResult<T> = Result<T, SimError>;
