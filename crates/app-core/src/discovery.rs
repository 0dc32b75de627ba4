//! Recipe discovery collaborator
//!
//! Turns the text typed (or dictated) on the prompter into an ordered list of
//! recipes. The shipped implementation is [`SimulatedDiscovery`], which waits
//! a fixed delay and hands back the built-in catalog; anything implementing
//! [`RecipeDiscovery`] can replace it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::recipes::{mock_catalog, Recipe};

/// Delay used by the simulated lookup
pub const DEFAULT_DISCOVERY_DELAY: Duration = Duration::from_millis(2500);

/// Errors from recipe discovery
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryError {
    /// Prompt was empty or whitespace
    #[error("Ingredient prompt is empty")]
    EmptyPrompt,

    /// Lookup failed
    #[error("Recipe lookup failed: {0}")]
    Failed(String),

    /// Lookup succeeded but matched nothing
    #[error("No recipes found")]
    NoResults,
}

/// Result type for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Non-empty ingredient text submitted from the prompter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientPrompt(String);

impl IngredientPrompt {
    /// Validate raw input; whitespace-only text is rejected
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(DiscoveryError::EmptyPrompt);
        }
        Ok(IngredientPrompt(text.to_string()))
    }

    /// The text as typed
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Source of recipes for an ingredient prompt
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait RecipeDiscovery: Send + Sync {
    /// Find recipes for the prompt, in the order they should be shown
    async fn discover(&self, prompt: &IngredientPrompt) -> Result<Vec<Recipe>>;
}

/// Fixed-delay stand-in for a real recipe search
#[derive(Debug, Clone)]
pub struct SimulatedDiscovery {
    delay: Duration,
    catalog: Vec<Recipe>,
}

impl Default for SimulatedDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_DISCOVERY_DELAY)
    }
}

impl SimulatedDiscovery {
    /// Simulated lookup returning the built-in catalog after `delay`
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            catalog: mock_catalog(),
        }
    }

    /// Replace the catalog handed back
    pub fn with_catalog(mut self, catalog: Vec<Recipe>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl RecipeDiscovery for SimulatedDiscovery {
    async fn discover(&self, prompt: &IngredientPrompt) -> Result<Vec<Recipe>> {
        tracing::debug!(prompt = prompt.as_str(), delay_ms = self.delay().as_millis() as u64, "simulating recipe lookup");
        tokio::time::sleep(self.delay()).await;

        if self.catalog.is_empty() {
            return Err(DiscoveryError::NoResults);
        }
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_rejects_blank_input() {
        assert_eq!(IngredientPrompt::parse(""), Err(DiscoveryError::EmptyPrompt));
        assert_eq!(IngredientPrompt::parse("   \t\n"), Err(DiscoveryError::EmptyPrompt));
    }

    #[test]
    fn test_prompt_keeps_text_as_typed() {
        let prompt = IngredientPrompt::parse("  chicken, pasta ").unwrap();
        assert_eq!(prompt.as_str(), "  chicken, pasta ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_discovery_waits_then_returns_catalog() {
        let discovery = SimulatedDiscovery::default();
        assert_eq!(discovery.delay(), DEFAULT_DISCOVERY_DELAY);
        let prompt = IngredientPrompt::parse("chicken").unwrap();

        let started = tokio::time::Instant::now();
        let recipes = discovery.discover(&prompt).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_DISCOVERY_DELAY);
        assert_eq!(recipes.len(), 5);
        assert_eq!(recipes[0].name, "Creamy Chicken Pasta");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_discovery_empty_catalog() {
        let discovery = SimulatedDiscovery::new(Duration::from_millis(10)).with_catalog(Vec::new());
        assert_eq!(discovery.delay(), Duration::from_millis(10));
        let prompt = IngredientPrompt::parse("air").unwrap();

        assert_eq!(discovery.discover(&prompt).await, Err(DiscoveryError::NoResults));
    }

    #[tokio::test]
    async fn test_mock_discovery_through_trait_object() {
        let mut mock = MockRecipeDiscovery::new();
        mock.expect_discover()
            .withf(|prompt| prompt.as_str() == "tofu")
            .times(1)
            .returning(|_| Err(DiscoveryError::Failed("offline".to_string())));

        let discovery: Box<dyn RecipeDiscovery> = Box::new(mock);
        let prompt = IngredientPrompt::parse("tofu").unwrap();

        let err = discovery.discover(&prompt).await.unwrap_err();
        assert_eq!(err.to_string(), "Recipe lookup failed: offline");
    }
}
