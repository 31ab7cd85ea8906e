//! Rewind: a minimal finite state machine with linear undo/redo.
//!
//! A machine is constructed from a validated, name-keyed [`Configuration`]
//! (an initial state plus per-state event → target tables) and tracks a
//! single current state. Ordinary changes are recorded on an undo stack
//! and can be walked back and forth with [`StateMachine::undo`] and
//! [`StateMachine::redo`]; any new change drops the redoable branch.
//!
//! # Core Concepts
//!
//! - **Configuration**: immutable after construction, declaration order
//!   preserved, structurally validated on every construction path
//!   (builder, [`states!`] macro, JSON)
//! - **Transitions**: `trigger(event)` follows the current state's table;
//!   `change_state(name)` jumps directly to any declared state
//! - **History**: linear undo/redo over visited states; failed operations
//!   never mutate anything
//!
//! # Example
//!
//! ```rust
//! use rewind::{states, StateMachine};
//!
//! let config = states! {
//!     initial: off,
//!     off { toggle => on },
//!     on { toggle => off },
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("toggle").unwrap();
//! assert_eq!(machine.current_state(), "on");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "off");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "on");
//! ```

pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder, StateBuilder};
pub use config::{ConfigError, Configuration, StateConfig, TransitionRule};
pub use core::{History, StateMachine, TransitionError};
