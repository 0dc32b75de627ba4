//! Screens, menu targets, and navigation errors
//!
//! This module provides the type-safe vocabulary of the navigation state
//! machine:
//! - The seven mutually exclusive screens
//! - Menu drawer target tokens and the screen each one routes to
//! - The errors an ignored transition reports

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Screens
// =============================================================================

/// All top-level screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Sign in / create account
    #[default]
    Login,
    /// Ingredient prompt
    Prompter,
    /// Waiting for recipe discovery
    Loading,
    /// Swipe deck
    Recipes,
    /// Step-by-step cooking view
    Reader,
    /// Saved recipes
    Cookbook,
    /// Settings panel
    Settings,
}

impl Screen {
    /// All screens in flow order
    pub fn all() -> [Screen; 7] {
        [
            Screen::Login,
            Screen::Prompter,
            Screen::Loading,
            Screen::Recipes,
            Screen::Reader,
            Screen::Cookbook,
            Screen::Settings,
        ]
    }

    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Prompter => "prompter",
            Screen::Loading => "loading",
            Screen::Recipes => "recipes",
            Screen::Reader => "reader",
            Screen::Cookbook => "cookbook",
            Screen::Settings => "settings",
        }
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Welcome",
            Screen::Prompter => "What's in your kitchen?",
            Screen::Loading => "Loading",
            Screen::Recipes => "Recipes",
            Screen::Reader => "Cook",
            Screen::Cookbook => "My Cookbook",
            Screen::Settings => "Settings",
        }
    }

    /// Whether the burger menu button is shown on this screen
    pub fn has_menu_button(&self) -> bool {
        matches!(self, Screen::Prompter | Screen::Recipes | Screen::Reader)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Menu Targets
// =============================================================================

/// Destinations offered by the menu drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuTarget {
    /// Home (the prompter)
    Prompter,
    /// Saved recipes
    Cookbook,
    /// Remix mode
    Remix,
    /// Settings
    Settings,
}

impl MenuTarget {
    /// Token sent by the menu drawer
    pub fn as_token(&self) -> &'static str {
        match self {
            MenuTarget::Prompter => "prompter",
            MenuTarget::Cookbook => "cookbook",
            MenuTarget::Remix => "remix",
            MenuTarget::Settings => "settings",
        }
    }

    /// Screen this target opens
    ///
    /// Remix mode has no screen of its own and lands on the prompter.
    pub fn screen(&self) -> Screen {
        match self {
            MenuTarget::Prompter | MenuTarget::Remix => Screen::Prompter,
            MenuTarget::Cookbook => Screen::Cookbook,
            MenuTarget::Settings => Screen::Settings,
        }
    }

    /// Shown with a "Premium" badge to free users
    pub fn is_premium(&self) -> bool {
        matches!(self, MenuTarget::Cookbook | MenuTarget::Remix)
    }
}

impl FromStr for MenuTarget {
    type Err = NavigationError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "prompter" => Ok(MenuTarget::Prompter),
            "cookbook" => Ok(MenuTarget::Cookbook),
            "remix" => Ok(MenuTarget::Remix),
            "settings" => Ok(MenuTarget::Settings),
            other => Err(NavigationError::UnrecognizedToken(other.to_string())),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Why a navigation request was ignored
///
/// None of these reach the user; the request simply has no effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The request does not apply to the current screen
    #[error("Cannot {action} from the {from} screen")]
    InvalidTransition {
        /// Screen the session was on
        from: Screen,
        /// What was attempted
        action: &'static str,
    },

    /// Ingredient text was empty or whitespace
    #[error("Ingredient input is empty")]
    EmptyInput,

    /// Menu token did not match any target
    #[error("Unrecognized navigation target: {0}")]
    UnrecognizedToken(String),

    /// The reader was used without a selected recipe
    #[error("No recipe selected")]
    NoCurrentRecipe,

    /// No async runtime to run recipe discovery on
    #[error("No async runtime available for recipe discovery")]
    NoRuntime,
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;
