//! Runtime transition errors.

use thiserror::Error;

/// Errors that can occur while changing state.
///
/// Both variants guarantee that the machine was left untouched: the
/// current state, undo stack, and redo stack are exactly as they were
/// before the failed call.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The requested state is not declared in the configuration.
    #[error("No state named '{name}' in the configuration")]
    InvalidState { name: String },

    /// The current state's transition table has no entry for the event.
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidEvent { state: String, event: String },
}
