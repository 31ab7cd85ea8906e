//! Build errors for configuration builders.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
