//! Recipe Roulette
//!
//! Swipe-to-choose recipe discovery. The workspace is split into:
//!
//! - [`app_core`] - recipes, swipe interpretation, deck, reader, cookbook
//! - [`app_state`] - session reducer and controller
//! - [`app_ui`] - render models for screens and the menu drawer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core;
pub use app_state;
pub use app_ui;

pub use app_core::{classify, Recipe, SwipeDecision};
pub use app_state::{Event, LoadRacePolicy, Screen, SessionConfig, SessionController};
pub use app_ui::{render, ScreenView};
