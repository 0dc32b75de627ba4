//! Core application logic for Recipe Roulette
//!
//! This crate contains the recipe domain: recipe records, swipe
//! interpretation and the swipe deck, the step reader, the cookbook, the
//! settings catalog, and the recipe discovery collaborator.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cookbook;
pub mod deck;
pub mod discovery;
pub mod reader;
pub mod recipes;
pub mod settings;
pub mod swipe;

pub use cookbook::Cookbook;
pub use deck::{DeckAction, SwipeDeck, SwipeRecord};
pub use discovery::{
    DiscoveryError, IngredientPrompt, RecipeDiscovery, SimulatedDiscovery,
    DEFAULT_DISCOVERY_DELAY,
};
pub use reader::StepReader;
pub use recipes::{mock_catalog, Recipe};
pub use settings::{FeatureStatus, Preference, Preferences, PremiumFeature};
pub use swipe::{classify, SwipeDecision, SwipeThresholds};

#[cfg(any(test, feature = "mocks"))]
pub use discovery::MockRecipeDiscovery;
