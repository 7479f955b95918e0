use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("README not found: {0}")]
    ReadmeNotFound(String),

    #[error("invalid repository target: {0}")]
    InvalidTarget(String),

    #[error("repository or README not found: {0} (is the repository public?)")]
    RemoteNotFound(String),

    #[error("GitHub API rate limit exceeded or repository is private; try again later")]
    RateLimited,

    #[error("failed to fetch README: {0}")]
    Fetch(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config file already exists: {0}")]
    ConfigExists(String),

    #[error("invalid rubric: {0}")]
    Rubric(#[from] RubricError),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Defects in a rubric table. Raised while compiling the rubric, before any
/// document is scored.
#[derive(Error, Debug)]
pub enum RubricError {
    #[error("criterion '{criterion}' has malformed regex '{pattern}': {source}")]
    InvalidRegex {
        criterion: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("duplicate criterion name: {0}")]
    DuplicateCriterion(String),

    #[error("criterion '{criterion}' has non-positive weight on pattern '{pattern}'")]
    NonPositiveWeight { criterion: String, pattern: String },

    #[error("criterion '{0}' must have positive points")]
    NonPositivePoints(String),

    #[error("rubric has no criteria")]
    Empty,
}

/// Every way the suggestion backend can fail. Callers treat all of them as
/// "unavailable" and fall back to local suggestions.
#[derive(Error, Debug)]
pub enum EnhancerError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("reply had no text content")]
    MalformedReply,

    #[error("reply contained no usable suggestions")]
    Empty,
}

pub type Result<T> = std::result::Result<T, RankerError>;
