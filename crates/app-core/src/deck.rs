//! Swipe deck: the browsing cursor over a list of discovered recipes
//!
//! The deck owns the card order, the cursor, the detail overlay flag, and a
//! log of every accept/reject decision. Restarting rewinds the cursor only;
//! the decision log survives.

use serde::{Deserialize, Serialize};

use crate::recipes::Recipe;
use crate::swipe::SwipeDecision;

/// A decision recorded against a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRecord {
    /// Recipe the decision applied to
    pub recipe_id: u32,
    /// Accept or Reject
    pub decision: SwipeDecision,
}

/// What the deck did with a decision
#[derive(Debug, Clone, PartialEq)]
pub enum DeckAction {
    /// Current card accepted; cursor advanced
    Accepted(Recipe),
    /// Current card rejected; cursor advanced
    Rejected(Recipe),
    /// Detail overlay opened for the current card
    DetailsOpened(Recipe),
    /// Card snapped back to the origin
    Reverted,
    /// Nothing to act on (deck exhausted or overlay already open)
    Ignored,
}

/// Cursor over a recipe sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwipeDeck {
    recipes: Vec<Recipe>,
    cursor: usize,
    details_open: bool,
    history: Vec<SwipeRecord>,
}

impl SwipeDeck {
    /// Create a deck positioned at the first card
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            cursor: 0,
            details_open: false,
            history: Vec::new(),
        }
    }

    /// Recipe under the cursor, if any remain
    pub fn current(&self) -> Option<&Recipe> {
        self.recipes.get(self.cursor)
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total cards in the deck
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the deck holds no cards at all
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Every card has been swiped
    pub fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }

    /// Whether the detail overlay is showing
    pub fn details_open(&self) -> bool {
        self.details_open
    }

    /// All cards in order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recorded accept/reject decisions, oldest first
    pub fn history(&self) -> &[SwipeRecord] {
        &self.history
    }

    /// One-based position label, e.g. "2 / 5"
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.cursor + 1, self.recipes.len())
    }

    /// Apply a classified drag to the current card
    pub fn apply(&mut self, decision: SwipeDecision) -> DeckAction {
        if self.details_open {
            return DeckAction::Ignored;
        }

        let Some(recipe) = self.current().cloned() else {
            return DeckAction::Ignored;
        };

        match decision {
            SwipeDecision::Accept => {
                self.record(&recipe, decision);
                DeckAction::Accepted(recipe)
            }
            SwipeDecision::Reject => {
                self.record(&recipe, decision);
                DeckAction::Rejected(recipe)
            }
            SwipeDecision::ShowDetails => {
                self.details_open = true;
                DeckAction::DetailsOpened(recipe)
            }
            SwipeDecision::None => DeckAction::Reverted,
        }
    }

    /// "Skip" from the detail overlay
    pub fn skip_from_details(&mut self) -> DeckAction {
        self.resolve_details(SwipeDecision::Reject)
    }

    /// "Choose this recipe" from the detail overlay
    pub fn choose_from_details(&mut self) -> DeckAction {
        self.resolve_details(SwipeDecision::Accept)
    }

    /// Dismiss the detail overlay without deciding
    pub fn close_details(&mut self) {
        self.details_open = false;
    }

    /// Rewind to the first card
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.details_open = false;
    }

    fn resolve_details(&mut self, decision: SwipeDecision) -> DeckAction {
        if !self.details_open {
            return DeckAction::Ignored;
        }
        self.details_open = false;
        self.apply(decision)
    }

    fn record(&mut self, recipe: &Recipe, decision: SwipeDecision) {
        self.history.push(SwipeRecord { recipe_id: recipe.id, decision });
        self.cursor += 1;
    }
}
