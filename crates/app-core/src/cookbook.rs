//! Saved recipes (the premium cookbook)
//!
//! The cookbook is append-only: entries are stamped when saved and never
//! edited, removed, or reordered afterwards. Accepting the same recipe twice
//! stores it twice.

use serde::{Deserialize, Serialize};

use crate::recipes::Recipe;

/// Append-only collection of saved recipes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cookbook {
    entries: Vec<Recipe>,
}

impl Cookbook {
    /// Create an empty cookbook
    pub fn new() -> Self {
        Cookbook { entries: Vec::new() }
    }

    /// Append a stamped copy of `recipe` and return it
    pub fn save(&mut self, recipe: &Recipe, saved_date: &str) -> &Recipe {
        self.entries.push(recipe.stamped(saved_date));
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Recipe] {
        &self.entries
    }

    /// Entries the cookbook screen may show; free users see none
    pub fn visible(&self, premium: bool) -> &[Recipe] {
        if premium {
            &self.entries
        } else {
            &[]
        }
    }

    /// Check if a recipe id has been saved at least once
    pub fn contains(&self, recipe_id: u32) -> bool {
        self.entries.iter().any(|r| r.id == recipe_id)
    }

    /// Case-insensitive name search; an empty query matches everything
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of saved entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been saved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
