//! The state machine: a current state over a fixed configuration, with
//! linear undo/redo.

use crate::config::Configuration;
use crate::core::error::TransitionError;
use crate::core::history::History;

/// A finite state machine with linear undo/redo.
///
/// The machine owns its [`Configuration`] and never mutates it. The
/// current state is always a declared state: either the configured
/// initial, or one reached through a validated change. Every ordinary
/// change (a [`change_state`](Self::change_state) or a
/// [`trigger`](Self::trigger)) records the state being left on the undo
/// stack and empties the redo stack; [`undo`](Self::undo) and
/// [`redo`](Self::redo) walk that history without creating new entries.
///
/// Failed operations leave the machine exactly as it was.
///
/// # Example
///
/// ```rust
/// use rewind::{states, StateMachine};
///
/// let config = states! {
///     initial: off,
///     off { toggle => on },
///     on { toggle => off },
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(config);
/// assert_eq!(machine.current_state(), "off");
///
/// machine.trigger("toggle").unwrap();
/// assert_eq!(machine.current_state(), "on");
/// machine.trigger("toggle").unwrap();
/// assert_eq!(machine.current_state(), "off");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "on");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "off");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StateMachine {
    config: Configuration,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state, with empty
    /// undo and redo stacks.
    pub fn new(config: Configuration) -> Self {
        let current = config.initial().to_owned();
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Name of the active state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// The configuration this machine runs on.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Go directly to a declared state.
    ///
    /// On success the state being left is pushed onto the undo stack and
    /// the redo stack is emptied. If `state` is not declared, fails with
    /// [`TransitionError::InvalidState`] and mutates nothing.
    pub fn change_state(&mut self, state: &str) -> Result<(), TransitionError> {
        if !self.config.contains(state) {
            return Err(TransitionError::InvalidState {
                name: state.to_owned(),
            });
        }

        self.history.record(self.current.clone());
        self.current = state.to_owned();
        Ok(())
    }

    /// Change state according to the current state's transition table.
    ///
    /// If the table has an entry for `event`, this behaves exactly like
    /// [`change_state`](Self::change_state) called with the entry's
    /// target. If it has none, fails with
    /// [`TransitionError::InvalidEvent`] and mutates nothing.
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|state| state.target_for(event))
            .map(str::to_owned);

        let Some(target) = target else {
            return Err(TransitionError::InvalidEvent {
                state: self.current.clone(),
                event: event.to_owned(),
            });
        };

        self.change_state(&target)
    }

    /// Go back to the configured initial state.
    ///
    /// The undo and redo stacks are deliberately left untouched; a
    /// reset is not an undoable change and does not forget the history
    /// accumulated so far.
    pub fn reset(&mut self) {
        self.current = self.config.initial().to_owned();
    }

    /// Every declared state name, in declaration order.
    pub fn state_names(&self) -> Vec<&str> {
        self.config.state_names()
    }

    /// Names of the states that handle `event`, in declaration order.
    /// Empty if no state does.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config.states_handling(event)
    }

    /// Step back to the most recently visited state.
    ///
    /// The state being left becomes redoable. Returns `false`, changing
    /// nothing, when no state was visited.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.current) {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// The state being left goes back onto the undo stack. Returns
    /// `false`, changing nothing, when nothing was undone.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.current) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Empty the undo stack. The redo stack is deliberately left intact.
    pub fn clear_history(&mut self) {
        self.history.clear_undo();
    }
}
