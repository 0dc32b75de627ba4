//! Per-screen render data
//!
//! [`ScreenView`] is what a frontend draws for the current screen. It is
//! derived from a [`SessionSnapshot`] and never mutates anything; taps are
//! sent back through the controller.

use app_core::settings::{feature_statuses, plan_label};
use app_core::{FeatureStatus, Preferences, Recipe};
use app_state::{Screen, SessionSnapshot};
use serde::Serialize;

/// Preview of the card on top of the deck
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    /// Recipe under the cursor
    pub recipe: Recipe,
    /// "N / M"
    pub position_label: String,
    /// First ingredients shown on the card
    pub ingredient_preview: Vec<String>,
    /// "+N more" count
    pub hidden_ingredients: usize,
    /// Detail overlay is expanded
    pub details_open: bool,
}

/// Recipes screen content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DeckView {
    /// A card is available
    Card(RecipeCard),
    /// Every card has been swiped
    Exhausted {
        /// Number of recipes in the deck
        total: usize,
    },
}

/// Reader screen content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderView {
    /// Recipe being cooked
    pub recipe: Recipe,
    /// "Step N of M"
    pub step_label: String,
    /// Current instruction text
    pub instruction: Option<String>,
    /// Completed fraction
    pub progress: f32,
    /// "Previous" is disabled
    pub is_first: bool,
    /// "Next" is disabled
    pub is_last: bool,
    /// Voice commands are active
    pub voice_listening: bool,
    /// Current step is being read aloud
    pub reading_aloud: bool,
}

/// Cookbook screen content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CookbookView {
    /// Free plan upsell; saved recipes are hidden
    Locked,
    /// Premium with nothing saved (or nothing matching the search)
    Empty,
    /// Saved recipes matching the search, in insertion order
    Entries {
        /// Matching recipes
        recipes: Vec<Recipe>,
    },
}

impl CookbookView {
    /// Cookbook content filtered by a search query
    pub fn build(snapshot: &SessionSnapshot, query: &str) -> Self {
        if !snapshot.premium {
            return CookbookView::Locked;
        }

        let recipes: Vec<Recipe> = snapshot.cookbook.search(query).into_iter().cloned().collect();
        if recipes.is_empty() {
            CookbookView::Empty
        } else {
            CookbookView::Entries { recipes }
        }
    }
}

/// Settings screen content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    /// "Premium Member" or "Free Plan"
    pub plan_label: &'static str,
    /// Premium feature rows
    pub features: Vec<FeatureStatus>,
    /// General toggles
    pub preferences: Preferences,
    /// Show the upgrade button
    pub can_upgrade: bool,
}

/// Render data for the visible screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum ScreenView {
    /// Sign in
    Login,
    /// Ingredient prompt
    Prompter {
        /// Microphone is listening
        listening: bool,
        /// Message from the last failed lookup
        error: Option<String>,
    },
    /// Waiting for recipes
    Loading {
        /// Text under the spinner
        message: String,
    },
    /// Swipe deck
    Recipes(DeckView),
    /// Step reader
    Reader(ReaderView),
    /// Saved recipes
    Cookbook(CookbookView),
    /// Settings panel
    Settings(SettingsView),
}

impl ScreenView {
    /// Screen this view belongs to
    pub fn screen(&self) -> Screen {
        match self {
            ScreenView::Login => Screen::Login,
            ScreenView::Prompter { .. } => Screen::Prompter,
            ScreenView::Loading { .. } => Screen::Loading,
            ScreenView::Recipes(_) => Screen::Recipes,
            ScreenView::Reader(_) => Screen::Reader,
            ScreenView::Cookbook(_) => Screen::Cookbook,
            ScreenView::Settings(_) => Screen::Settings,
        }
    }

    /// Whether the header shows the burger menu button
    pub fn has_menu_button(&self) -> bool {
        self.screen().has_menu_button()
    }
}

/// Build the view for the visible screen
///
/// Returns `None` only for a reader with no selected recipe, which the
/// controller never produces.
pub fn render(snapshot: &SessionSnapshot) -> Option<ScreenView> {
    let view = match snapshot.screen {
        Screen::Login => ScreenView::Login,
        Screen::Prompter => ScreenView::Prompter {
            listening: snapshot.voice_listening,
            error: snapshot.discovery_error.clone(),
        },
        Screen::Loading => ScreenView::Loading {
            message: snapshot.loading_message.clone(),
        },
        Screen::Recipes => ScreenView::Recipes(deck_view(snapshot)),
        Screen::Reader => ScreenView::Reader(reader_view(snapshot)?),
        Screen::Cookbook => ScreenView::Cookbook(CookbookView::build(snapshot, "")),
        Screen::Settings => ScreenView::Settings(SettingsView {
            plan_label: plan_label(snapshot.premium),
            features: feature_statuses(snapshot.premium),
            preferences: snapshot.preferences,
            can_upgrade: !snapshot.premium,
        }),
    };
    Some(view)
}

fn deck_view(snapshot: &SessionSnapshot) -> DeckView {
    let deck = &snapshot.deck;
    match deck.current() {
        Some(recipe) => DeckView::Card(RecipeCard {
            position_label: deck.position_label(),
            ingredient_preview: recipe.ingredient_preview().to_vec(),
            hidden_ingredients: recipe.hidden_ingredient_count(),
            details_open: deck.details_open(),
            recipe: recipe.clone(),
        }),
        None => DeckView::Exhausted { total: deck.len() },
    }
}

fn reader_view(snapshot: &SessionSnapshot) -> Option<ReaderView> {
    let recipe = snapshot.selected_recipe.as_ref()?;
    let reader = &snapshot.reader;

    Some(ReaderView {
        step_label: reader.label(),
        instruction: reader.current_instruction(recipe).map(str::to_string),
        progress: reader.progress(),
        is_first: reader.is_first(),
        is_last: reader.is_last(),
        voice_listening: reader.voice_listening,
        reading_aloud: reader.reading_aloud,
        recipe: recipe.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::mock_catalog;
    use app_state::{Event, SessionState};

    fn session_on_recipes(premium: bool) -> SessionState {
        let mut state = SessionState::default();
        state.apply(Event::Login).unwrap();
        if premium {
            state.apply(Event::Upgrade).unwrap();
        }
        state.apply(Event::SubmitIngredients("chicken".into())).unwrap();
        state.apply(Event::RecipesLoaded(mock_catalog())).unwrap();
        state
    }

    #[test]
    fn test_every_screen_renders() {
        let mut state = SessionState::default();
        assert_eq!(render(&state.snapshot()), Some(ScreenView::Login));

        state.apply(Event::Login).unwrap();
        state.apply(Event::ToggleVoice).unwrap();
        assert_eq!(
            render(&state.snapshot()),
            Some(ScreenView::Prompter { listening: true, error: None })
        );

        state.apply(Event::SubmitIngredients("eggs".into())).unwrap();
        assert_eq!(
            render(&state.snapshot()),
            Some(ScreenView::Loading { message: "Finding perfect recipes...".to_string() })
        );
    }

    #[test]
    fn test_view_matches_snapshot_screen() {
        let state = session_on_recipes(false);
        let snapshot = state.snapshot();
        let view = render(&snapshot).unwrap();
        assert_eq!(view.screen(), snapshot.screen);
    }

    #[test]
    fn test_menu_button_visibility() {
        let mut state = SessionState::default();
        assert!(!render(&state.snapshot()).unwrap().has_menu_button());

        state.apply(Event::Login).unwrap();
        assert!(render(&state.snapshot()).unwrap().has_menu_button());

        state.apply(Event::SubmitIngredients("eggs".into())).unwrap();
        assert!(!render(&state.snapshot()).unwrap().has_menu_button());

        state.apply(Event::RecipesLoaded(mock_catalog())).unwrap();
        assert!(render(&state.snapshot()).unwrap().has_menu_button());

        state.apply(Event::NavigateFromMenu("settings".into())).unwrap();
        assert!(!render(&state.snapshot()).unwrap().has_menu_button());
    }

    #[test]
    fn test_recipe_card() {
        let state = session_on_recipes(false);
        let Some(ScreenView::Recipes(DeckView::Card(card))) = render(&state.snapshot()) else {
            panic!("expected a recipe card");
        };

        assert_eq!(card.recipe.id, 1);
        assert_eq!(card.position_label, "1 / 5");
        assert_eq!(card.ingredient_preview.len(), 5);
        assert_eq!(card.hidden_ingredients, 3);
        assert!(!card.details_open);
    }

    #[test]
    fn test_exhausted_deck() {
        let mut state = session_on_recipes(false);
        for recipe in mock_catalog() {
            state.apply(Event::SwipeReject(recipe)).unwrap();
        }

        assert_eq!(
            render(&state.snapshot()),
            Some(ScreenView::Recipes(DeckView::Exhausted { total: 5 }))
        );
    }

    #[test]
    fn test_reader_view() {
        let mut state = session_on_recipes(false);
        state.apply(Event::SwipeAccept(mock_catalog().remove(0))).unwrap();
        state.apply(Event::ReaderNext).unwrap();

        let Some(ScreenView::Reader(view)) = render(&state.snapshot()) else {
            panic!("expected the reader");
        };
        assert_eq!(view.step_label, "Step 2 of 7");
        assert!(!view.is_first);
        assert!(!view.is_last);
        assert_eq!(view.instruction.as_deref(), Some(view.recipe.instructions[1].as_str()));
    }

    #[test]
    fn test_cookbook_locked_for_free_users() {
        let mut state = session_on_recipes(false);
        state.apply(Event::NavigateFromMenu("cookbook".into())).unwrap();
        assert_eq!(render(&state.snapshot()), Some(ScreenView::Cookbook(CookbookView::Locked)));
    }

    #[test]
    fn test_cookbook_entries_and_search() {
        let mut state = session_on_recipes(true);
        let catalog = mock_catalog();
        state.apply(Event::SwipeAccept(catalog[0].clone())).unwrap();
        state.apply(Event::CloseReader).unwrap();
        state.apply(Event::SwipeAccept(catalog[1].clone())).unwrap();
        state.apply(Event::NavigateFromMenu("cookbook".into())).unwrap();

        let snapshot = state.snapshot();
        let CookbookView::Entries { recipes } = CookbookView::build(&snapshot, "") else {
            panic!("expected entries");
        };
        assert_eq!(recipes.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(recipes.iter().all(|r| r.saved_date.as_deref() == Some("Today")));

        let query = catalog[1].name.to_uppercase();
        let CookbookView::Entries { recipes } = CookbookView::build(&snapshot, &query) else {
            panic!("expected a match");
        };
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, 2);

        assert_eq!(CookbookView::build(&snapshot, "zzz"), CookbookView::Empty);
    }

    #[test]
    fn test_settings_view() {
        let mut state = SessionState::default();
        state.apply(Event::NavigateFromMenu("settings".into())).unwrap();

        let Some(ScreenView::Settings(free)) = render(&state.snapshot()) else {
            panic!("expected settings");
        };
        assert_eq!(free.plan_label, "Free Plan");
        assert!(free.can_upgrade);
        assert_eq!(free.features.len(), 5);
        assert!(free.features.iter().all(|f| f.locked));

        state.apply(Event::Upgrade).unwrap();
        let Some(ScreenView::Settings(premium)) = render(&state.snapshot()) else {
            panic!("expected settings");
        };
        assert_eq!(premium.plan_label, "Premium Member");
        assert!(premium.features.iter().all(|f| !f.locked));
    }

    #[test]
    fn test_view_serializes_with_screen_tag() {
        let state = session_on_recipes(false);
        let json = serde_json::to_value(render(&state.snapshot()).unwrap()).unwrap();
        assert_eq!(json["screen"], "recipes");
        assert_eq!(json["state"], "card");
        assert_eq!(json["positionLabel"], "1 / 5");
    }
}
