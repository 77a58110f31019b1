//! Miette-based error diagnostics for readable CLI errors.

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::ExpectedPointsModel;
use crate::error::{ConfigError, DataError, Error};

/// A fatal CLI error with an optional hint.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(fplopt::error))]
pub struct RunDiagnostic {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

impl RunDiagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<Error> for RunDiagnostic {
    fn from(err: Error) -> Self {
        let diagnostic = Self::new(err.to_string());
        match err {
            Error::Config(ConfigError::UnknownModel { .. }) => {
                let names: Vec<&str> = ExpectedPointsModel::ALL.iter().map(|m| m.as_str()).collect();
                diagnostic.with_help(format!("available models: {}", names.join(", ")))
            }
            Error::Config(ConfigError::ReadFile(_)) => {
                diagnostic.with_help("pass --config <path> or run without one to use defaults")
            }
            Error::Data(DataError::ReadFile { .. }) => diagnostic.with_help(
                "download bootstrap-static.json into <data_dir>/raw, or pass --data-dir",
            ),
            Error::Infeasible { .. } => {
                diagnostic.with_help("raise the budget or max_per_team, or widen the player pool")
            }
            Error::TimeLimitRejected { .. } => diagnostic.with_help(
                "increase time_limit_secs or set accept_time_limit = true",
            ),
            _ => diagnostic,
        }
    }
}
