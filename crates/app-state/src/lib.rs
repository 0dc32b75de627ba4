//! Session state management for Recipe Roulette
//!
//! This crate owns the navigation state machine: the screen vocabulary, the
//! session reducer, and the controller that runs recipe lookups and
//! publishes changes to subscribers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod controller;
pub mod navigation;
pub mod pending;
pub mod session;

pub use config::{ConfigError, LoadRacePolicy, SessionConfig};
pub use controller::SessionController;
pub use navigation::{MenuTarget, NavigationError, Screen};
pub use pending::PendingLoad;
pub use session::{Event, SessionEvent, SessionSnapshot, SessionState};
