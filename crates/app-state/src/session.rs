//! Session state and the navigation reducer
//!
//! [`SessionState`] is the single record behind every screen. All changes go
//! through [`SessionState::apply`], which maps one [`Event`] to one state
//! transformation. The reducer does no I/O; starting and finishing the
//! recipe lookup is the controller's job.

use app_core::deck::{DeckAction, SwipeDeck, SwipeRecord};
use app_core::discovery::{DiscoveryError, IngredientPrompt};
use app_core::reader::StepReader;
use app_core::settings::{Preference, Preferences};
use app_core::swipe::SwipeDecision;
use app_core::{Cookbook, Recipe};
use serde::{Deserialize, Serialize};

use crate::config::{LoadRacePolicy, SessionConfig};
use crate::navigation::{MenuTarget, NavigationError, Result, Screen};

/// A user intent or collaborator result fed to the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Sign in (or create account)
    Login,
    /// Ingredient text submitted from the prompter
    SubmitIngredients(String),
    /// Discovery produced recipes
    RecipesLoaded(Vec<Recipe>),
    /// Discovery failed or found nothing
    DiscoveryFailed(DiscoveryError),
    /// Pass on a recipe
    SwipeReject(Recipe),
    /// Choose a recipe
    SwipeAccept(Recipe),
    /// Expand a recipe's details
    ViewDetails(Recipe),
    /// Open the menu drawer
    OpenMenu,
    /// Close the menu drawer
    CloseMenu,
    /// Menu item tapped
    NavigateFromMenu(String),
    /// Unlock premium
    Upgrade,
    /// Leave the reader
    CloseReader,
    /// Leave the cookbook
    CloseCookbook,
    /// Leave settings
    CloseSettings,
    /// Open a saved recipe from the cookbook
    OpenRecipe(Recipe),
    /// Prompter microphone button
    ToggleVoice,
    /// Back button on the recipes screen
    LeaveRecipes,
    /// A drag on the current card ended at this offset
    DragEnd {
        /// Horizontal offset from the drag origin
        offset_x: f32,
        /// Vertical offset from the drag origin (down is positive)
        offset_y: f32,
    },
    /// "Skip" on the detail overlay
    SkipFromDetails,
    /// "Choose this recipe" on the detail overlay
    ChooseFromDetails,
    /// Close button on the detail overlay
    CloseDetails,
    /// Rewind the deck to the first card
    RestartDeck,
    /// Reader "Next"
    ReaderNext,
    /// Reader "Previous"
    ReaderPrevious,
    /// Reader "Repeat"
    ReaderRepeat,
    /// Read-aloud of the current step finished
    ReaderFinishedReading,
    /// Reader voice-command toggle
    ReaderToggleVoice,
    /// Flip a settings toggle
    TogglePreference(Preference),
}

impl Event {
    /// Short description used in error messages and logs
    pub fn action(&self) -> &'static str {
        match self {
            Event::Login => "log in",
            Event::SubmitIngredients(_) => "submit ingredients",
            Event::RecipesLoaded(_) => "show loaded recipes",
            Event::DiscoveryFailed(_) => "report a failed lookup",
            Event::SwipeReject(_) => "reject a recipe",
            Event::SwipeAccept(_) => "accept a recipe",
            Event::ViewDetails(_) => "view details",
            Event::OpenMenu => "open the menu",
            Event::CloseMenu => "close the menu",
            Event::NavigateFromMenu(_) => "navigate from the menu",
            Event::Upgrade => "upgrade",
            Event::CloseReader => "close the reader",
            Event::CloseCookbook => "close the cookbook",
            Event::CloseSettings => "close settings",
            Event::OpenRecipe(_) => "open a saved recipe",
            Event::ToggleVoice => "toggle voice input",
            Event::LeaveRecipes => "leave the recipes screen",
            Event::DragEnd { .. } => "drag a card",
            Event::SkipFromDetails => "skip from details",
            Event::ChooseFromDetails => "choose from details",
            Event::CloseDetails => "close details",
            Event::RestartDeck => "restart the deck",
            Event::ReaderNext => "go to the next step",
            Event::ReaderPrevious => "go to the previous step",
            Event::ReaderRepeat => "repeat a step",
            Event::ReaderFinishedReading => "finish reading",
            Event::ReaderToggleVoice => "toggle reader voice",
            Event::TogglePreference(_) => "toggle a preference",
        }
    }
}

/// Notifications broadcast to presentation and analytics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    /// The visible screen changed
    ScreenChanged {
        /// Previous screen
        from: Screen,
        /// New screen
        to: Screen,
    },
    /// An accept or reject was recorded
    SwipeRecorded(SwipeRecord),
    /// A recipe was appended to the cookbook
    RecipeSaved {
        /// Saved recipe id
        recipe_id: u32,
    },
    /// A recipe's detail view was requested
    DetailsRequested {
        /// Recipe id
        recipe_id: u32,
    },
    /// Premium was unlocked
    PremiumUnlocked,
    /// Discovery failed; the message is user-presentable
    DiscoveryFailed {
        /// Error text
        message: String,
    },
}

/// Read-only projection of the session for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Visible screen
    pub screen: Screen,
    /// Menu drawer overlay is open
    pub menu_open: bool,
    /// Prompter microphone is listening
    pub voice_listening: bool,
    /// Premium unlocked
    pub premium: bool,
    /// Recipe shown in the reader
    pub selected_recipe: Option<Recipe>,
    /// Saved recipes in insertion order
    pub cookbook: Cookbook,
    /// Swipe deck
    pub deck: SwipeDeck,
    /// Reader progress
    pub reader: StepReader,
    /// Settings toggles
    pub preferences: Preferences,
    /// Last discovery failure, cleared on the next submit
    pub discovery_error: Option<String>,
    /// Loading screen message
    pub loading_message: String,
}

/// The mutable session record
#[derive(Debug, Clone)]
pub struct SessionState {
    screen: Screen,
    menu_open: bool,
    voice_listening: bool,
    premium: bool,
    selected_recipe: Option<Recipe>,
    cookbook: Cookbook,
    deck: SwipeDeck,
    reader: StepReader,
    preferences: Preferences,
    discovery_error: Option<String>,
    config: SessionConfig,
    outbox: Vec<SessionEvent>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionState {
    /// Fresh session on the login screen
    pub fn new(config: SessionConfig) -> Self {
        Self {
            screen: Screen::Login,
            menu_open: false,
            voice_listening: false,
            premium: false,
            selected_recipe: None,
            cookbook: Cookbook::new(),
            deck: SwipeDeck::default(),
            reader: StepReader::default(),
            preferences: Preferences::default(),
            discovery_error: None,
            config,
            outbox: Vec::new(),
        }
    }

    /// Visible screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Menu drawer is open
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Prompter microphone is listening
    pub fn voice_listening(&self) -> bool {
        self.voice_listening
    }

    /// Premium unlocked
    pub fn is_premium(&self) -> bool {
        self.premium
    }

    /// Recipe open in the reader
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected_recipe.as_ref()
    }

    /// Saved recipes
    pub fn cookbook(&self) -> &Cookbook {
        &self.cookbook
    }

    /// Swipe deck
    pub fn deck(&self) -> &SwipeDeck {
        &self.deck
    }

    /// Reader progress
    pub fn reader(&self) -> &StepReader {
        &self.reader
    }

    /// Settings toggles
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Last discovery failure
    pub fn discovery_error(&self) -> Option<&str> {
        self.discovery_error.as_deref()
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Copy the state for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen,
            menu_open: self.menu_open,
            voice_listening: self.voice_listening,
            premium: self.premium,
            selected_recipe: self.selected_recipe.clone(),
            cookbook: self.cookbook.clone(),
            deck: self.deck.clone(),
            reader: self.reader.clone(),
            preferences: self.preferences,
            discovery_error: self.discovery_error.clone(),
            loading_message: self.config.loading_message.clone(),
        }
    }

    /// Take notifications produced since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Apply one event and return the resulting screen
    ///
    /// An `Err` means the event was ignored. The one exception is
    /// [`Event::NavigateFromMenu`], which always closes the menu even when
    /// its token is rejected.
    pub fn apply(&mut self, event: Event) -> Result<Screen> {
        match event {
            Event::Login => self.go(Screen::Prompter),

            Event::SubmitIngredients(text) => {
                IngredientPrompt::parse(&text).map_err(|_| NavigationError::EmptyInput)?;
                self.discovery_error = None;
                self.go(Screen::Loading)
            }

            Event::RecipesLoaded(recipes) => {
                self.ensure_loading_or_forced("show loaded recipes")?;
                tracing::info!(count = recipes.len(), "recipes loaded");
                self.deck = SwipeDeck::new(recipes);
                self.go(Screen::Recipes)
            }

            Event::DiscoveryFailed(error) => {
                self.require(Screen::Loading, "report a failed lookup")?;
                tracing::warn!(error = %error, "recipe discovery failed");
                let message = error.to_string();
                self.discovery_error = Some(message.clone());
                self.outbox.push(SessionEvent::DiscoveryFailed { message });
                self.go(Screen::Prompter)
            }

            Event::SwipeReject(recipe) => {
                if self.is_current_card(&recipe) {
                    self.deck.apply(SwipeDecision::Reject);
                }
                self.rejected(&recipe);
                Ok(self.screen)
            }

            Event::SwipeAccept(recipe) => {
                if self.is_current_card(&recipe) {
                    self.deck.apply(SwipeDecision::Accept);
                }
                self.accepted(recipe)
            }

            Event::ViewDetails(recipe) => {
                tracing::debug!(recipe_id = recipe.id, name = %recipe.name, "view details");
                self.outbox.push(SessionEvent::DetailsRequested { recipe_id: recipe.id });
                Ok(self.screen)
            }

            Event::OpenMenu => {
                self.menu_open = true;
                Ok(self.screen)
            }

            Event::CloseMenu => {
                self.menu_open = false;
                Ok(self.screen)
            }

            Event::NavigateFromMenu(token) => {
                self.menu_open = false;
                let target: MenuTarget = token.parse()?;
                self.go(target.screen())
            }

            Event::Upgrade => {
                if !self.premium {
                    self.premium = true;
                    tracing::info!("premium unlocked");
                    self.outbox.push(SessionEvent::PremiumUnlocked);
                }
                Ok(self.screen)
            }

            Event::CloseReader => self.go(Screen::Recipes),
            Event::CloseCookbook | Event::CloseSettings => self.go(Screen::Prompter),

            Event::OpenRecipe(recipe) => self.enter_reader(recipe),

            Event::ToggleVoice => {
                self.voice_listening = !self.voice_listening;
                Ok(self.screen)
            }

            Event::LeaveRecipes => {
                self.require(Screen::Recipes, "leave the recipes screen")?;
                self.go(Screen::Prompter)
            }

            Event::DragEnd { offset_x, offset_y } => {
                self.require(Screen::Recipes, "drag a card")?;
                let decision = self.config.swipe.classify(offset_x, offset_y);
                let action = self.deck.apply(decision);
                self.settle(action)
            }

            Event::SkipFromDetails => {
                self.require(Screen::Recipes, "skip from details")?;
                let action = self.deck.skip_from_details();
                self.settle(action)
            }

            Event::ChooseFromDetails => {
                self.require(Screen::Recipes, "choose from details")?;
                let action = self.deck.choose_from_details();
                self.settle(action)
            }

            Event::CloseDetails => {
                self.require(Screen::Recipes, "close details")?;
                self.deck.close_details();
                Ok(self.screen)
            }

            Event::RestartDeck => {
                self.require(Screen::Recipes, "restart the deck")?;
                self.deck.restart();
                Ok(self.screen)
            }

            Event::ReaderNext
            | Event::ReaderPrevious
            | Event::ReaderRepeat
            | Event::ReaderFinishedReading
            | Event::ReaderToggleVoice => {
                self.require(Screen::Reader, event.action())?;
                if self.selected_recipe.is_none() {
                    return Err(NavigationError::NoCurrentRecipe);
                }
                match event {
                    Event::ReaderNext => self.reader.next_step(),
                    Event::ReaderPrevious => self.reader.previous_step(),
                    Event::ReaderRepeat => self.reader.repeat_step(),
                    Event::ReaderFinishedReading => self.reader.finish_reading(),
                    _ => self.reader.toggle_voice(),
                }
                Ok(self.screen)
            }

            Event::TogglePreference(preference) => {
                self.preferences.toggle(preference);
                Ok(self.screen)
            }
        }
    }

    fn go(&mut self, screen: Screen) -> Result<Screen> {
        self.screen = screen;
        Ok(screen)
    }

    fn require(&self, screen: Screen, action: &'static str) -> Result<()> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(NavigationError::InvalidTransition { from: self.screen, action })
        }
    }

    fn ensure_loading_or_forced(&self, action: &'static str) -> Result<()> {
        match self.config.race_policy {
            LoadRacePolicy::ForceRecipes => Ok(()),
            LoadRacePolicy::Cancel => self.require(Screen::Loading, action),
        }
    }

    fn is_current_card(&self, recipe: &Recipe) -> bool {
        !self.deck.details_open() && self.deck.current().is_some_and(|r| r.id == recipe.id)
    }

    fn enter_reader(&mut self, recipe: Recipe) -> Result<Screen> {
        self.reader = StepReader::for_recipe(&recipe);
        self.selected_recipe = Some(recipe);
        self.go(Screen::Reader)
    }

    fn rejected(&mut self, recipe: &Recipe) {
        tracing::info!(recipe_id = recipe.id, name = %recipe.name, "passed on recipe");
        self.outbox.push(SessionEvent::SwipeRecorded(SwipeRecord {
            recipe_id: recipe.id,
            decision: SwipeDecision::Reject,
        }));
    }

    fn accepted(&mut self, recipe: Recipe) -> Result<Screen> {
        tracing::info!(recipe_id = recipe.id, name = %recipe.name, "liked recipe");
        self.outbox.push(SessionEvent::SwipeRecorded(SwipeRecord {
            recipe_id: recipe.id,
            decision: SwipeDecision::Accept,
        }));

        if self.premium {
            let label = self.config.saved_date_label.clone();
            self.cookbook.save(&recipe, &label);
            self.outbox.push(SessionEvent::RecipeSaved { recipe_id: recipe.id });
        }

        self.enter_reader(recipe)
    }

    fn settle(&mut self, action: DeckAction) -> Result<Screen> {
        match action {
            DeckAction::Accepted(recipe) => self.accepted(recipe),
            DeckAction::Rejected(recipe) => {
                self.rejected(&recipe);
                Ok(self.screen)
            }
            DeckAction::DetailsOpened(recipe) => self.apply(Event::ViewDetails(recipe)),
            DeckAction::Reverted | DeckAction::Ignored => Ok(self.screen),
        }
    }
}
