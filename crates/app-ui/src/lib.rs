//! User interface models for Recipe Roulette
//!
//! This crate turns session snapshots into render-ready data. It does not
//! draw anything itself; a frontend serializes these types and sends user
//! actions back through [`app_state::SessionController`].
//!
//! # Modules
//!
//! - [`screens`] - Per-screen views
//! - [`menu`] - Menu drawer entries and upsell card
//!
//! # Example
//!
//! ```rust
//! use app_state::{Event, SessionState};
//! use app_ui::screens::{render, ScreenView};
//!
//! let mut state = SessionState::default();
//! state.apply(Event::Login).unwrap();
//!
//! let view = render(&state.snapshot()).unwrap();
//! assert!(matches!(view, ScreenView::Prompter { listening: false, .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod menu;
pub mod screens;

pub use menu::{drawer, menu_items, MenuDrawer, MenuItem, UpgradePrompt};
pub use screens::{render, CookbookView, DeckView, ReaderView, RecipeCard, ScreenView, SettingsView};
