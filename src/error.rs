use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown expected points model '{name}'")]
    UnknownModel { name: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Input data errors: malformed or incomplete player records.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("candidate player pool is empty")]
    EmptyPool,

    #[error("player record #{index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("player {player_id} has unknown position code {code}")]
    UnknownPosition { player_id: u32, code: u8 },

    #[error("player {player_id} has invalid {field}: {reason}")]
    InvalidValue {
        player_id: u32,
        field: &'static str,
        reason: String,
    },

    #[error("duplicate player id {player_id} in candidate pool")]
    DuplicatePlayer { player_id: u32 },

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while invoking the external MILP backend or reading its result.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("{solver} failed: {message}")]
    Backend {
        solver: &'static str,
        message: String,
    },

    #[error("problem is unbounded")]
    Unbounded,

    #[error("solver reported status {status} without a solution")]
    NoSolution { status: String },

    #[error("solver returned {actual} values for {expected} variables")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("solver returned values that violate constraint '{constraint}'")]
    ConstraintViolated { constraint: String },

    #[error("solver returned a squad that violates constraints: {0}")]
    InconsistentSolution(#[source] DomainError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("no feasible squad: {reason}")]
    Infeasible { reason: String },

    #[error("solver hit its time limit (objective {objective:.2}) and time-limited results are not accepted")]
    TimeLimitRejected { objective: f64 },

    #[error("optimization cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
