//! Session controller
//!
//! [`SessionController`] owns the single [`SessionState`] and is the only way
//! presentation code changes it. Each operation runs the reducer under a
//! write lock, then publishes screen changes on a watch channel and domain
//! events on a broadcast channel.
//!
//! Submitting ingredients starts the recipe lookup on the current tokio
//! runtime. What happens to that lookup when the user navigates away from
//! the loading screen is decided by [`LoadRacePolicy`].
//!
//! # Example
//!
//! ```no_run
//! use app_state::{Screen, SessionConfig, SessionController};
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = SessionController::new(SessionConfig::default());
//!     let mut screens = controller.subscribe_screen();
//!
//!     controller.login().unwrap();
//!     controller.submit_ingredients("chicken, garlic").unwrap();
//!     assert_eq!(controller.screen(), Screen::Loading);
//!
//!     while *screens.borrow_and_update() != Screen::Recipes {
//!         screens.changed().await.unwrap();
//!     }
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use app_core::discovery::{self, IngredientPrompt, RecipeDiscovery, SimulatedDiscovery};
use app_core::settings::Preference;
use app_core::Recipe;
use parking_lot::{Mutex, RwLock};
use tokio::sync::{broadcast, oneshot, watch};

use crate::config::{LoadRacePolicy, SessionConfig};
use crate::navigation::{NavigationError, Result, Screen};
use crate::pending::PendingLoad;
use crate::session::{Event, SessionEvent, SessionSnapshot, SessionState};

/// Capacity of the session event channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

struct Inner {
    state: RwLock<SessionState>,
    pending: Mutex<Option<PendingLoad>>,
    generation: AtomicU64,
    race_policy: LoadRacePolicy,
    reading: AtomicU64,
    read_aloud: Duration,
    discovery: Arc<dyn RecipeDiscovery>,
    screen_tx: watch::Sender<Screen>,
    events_tx: broadcast::Sender<SessionEvent>,
}

/// Shared handle to the session
///
/// Cloning is cheap; all clones drive the same session.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("screen", &self.screen())
            .field("race_policy", &self.inner.race_policy)
            .finish_non_exhaustive()
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionController {
    /// Controller backed by the simulated lookup
    pub fn new(config: SessionConfig) -> Self {
        let discovery = SimulatedDiscovery::new(config.loading_delay());
        Self::with_discovery(config, Arc::new(discovery))
    }

    /// Controller backed by a custom discovery collaborator
    pub fn with_discovery(config: SessionConfig, discovery: Arc<dyn RecipeDiscovery>) -> Self {
        let (screen_tx, _) = watch::channel(Screen::Login);
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                race_policy: config.race_policy,
                reading: AtomicU64::new(0),
                read_aloud: config.read_aloud(),
                state: RwLock::new(SessionState::new(config)),
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
                discovery,
                screen_tx,
                events_tx,
            }),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Visible screen
    pub fn screen(&self) -> Screen {
        self.inner.state.read().screen()
    }

    /// Copy of the session for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.read().snapshot()
    }

    /// Watch the visible screen
    pub fn subscribe_screen(&self) -> watch::Receiver<Screen> {
        self.inner.screen_tx.subscribe()
    }

    /// Receive session events
    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events_tx.subscribe()
    }

    /// Whether a recipe lookup is still running
    pub fn is_loading_pending(&self) -> bool {
        self.inner
            .pending
            .lock()
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply one event
    ///
    /// Errors mean the event was ignored; the session is unchanged apart
    /// from the menu closing on a rejected menu token.
    pub fn dispatch(&self, event: Event) -> Result<Screen> {
        match event {
            Event::SubmitIngredients(text) => self.submit(text),
            Event::ReaderRepeat => self.repeat(),
            other => self.inner.apply(other),
        }
    }

    fn submit(&self, text: String) -> Result<Screen> {
        let prompt = IngredientPrompt::parse(&text).map_err(|_| NavigationError::EmptyInput)?;
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| NavigationError::NoRuntime)?;
        let screen = self.inner.apply(Event::SubmitIngredients(text))?;

        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let weak = Arc::downgrade(&self.inner);
        let discovery = Arc::clone(&self.inner.discovery);

        // Held across the spawn so a fast lookup cannot finish before it is recorded
        let mut pending = self.inner.pending.lock();

        let handle = runtime.spawn(async move {
            let outcome = tokio::select! {
                outcome = discovery.discover(&prompt) => outcome,
                Ok(()) = &mut stop_rx => {
                    tracing::debug!(generation, "recipe lookup cancelled");
                    return;
                }
            };

            if let Some(inner) = weak.upgrade() {
                inner.finish_loading(generation, outcome);
            }
        });

        tracing::debug!(generation, "recipe lookup started");
        if let Some(previous) = pending.replace(PendingLoad::new(generation, stop_tx, handle)) {
            match self.inner.race_policy {
                LoadRacePolicy::Cancel => previous.cancel(),
                LoadRacePolicy::ForceRecipes => previous.detach(),
            }
        }

        Ok(screen)
    }

    fn repeat(&self) -> Result<Screen> {
        let screen = self.inner.apply(Event::ReaderRepeat)?;

        // Without a runtime the frontend must send `ReaderFinishedReading` itself
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return Ok(screen);
        };

        let reading = self.inner.reading.fetch_add(1, Ordering::SeqCst) + 1;
        let weak = Arc::downgrade(&self.inner);
        let duration = self.inner.read_aloud;

        runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(inner) = weak.upgrade() {
                if inner.reading.load(Ordering::SeqCst) == reading {
                    let _ = inner.apply(Event::ReaderFinishedReading);
                }
            }
        });

        Ok(screen)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Sign in and go to the prompter
    pub fn login(&self) -> Result<Screen> {
        self.dispatch(Event::Login)
    }

    /// Start a recipe lookup for the typed ingredients
    pub fn submit_ingredients(&self, text: impl Into<String>) -> Result<Screen> {
        self.dispatch(Event::SubmitIngredients(text.into()))
    }

    /// Pass on a recipe
    pub fn swipe_reject(&self, recipe: Recipe) -> Result<Screen> {
        self.dispatch(Event::SwipeReject(recipe))
    }

    /// Choose a recipe and open it in the reader
    pub fn swipe_accept(&self, recipe: Recipe) -> Result<Screen> {
        self.dispatch(Event::SwipeAccept(recipe))
    }

    /// Ask for a recipe's detail view
    pub fn view_details(&self, recipe: Recipe) -> Result<Screen> {
        self.dispatch(Event::ViewDetails(recipe))
    }

    /// Open the menu drawer
    pub fn open_menu(&self) -> Result<Screen> {
        self.dispatch(Event::OpenMenu)
    }

    /// Close the menu drawer
    pub fn close_menu(&self) -> Result<Screen> {
        self.dispatch(Event::CloseMenu)
    }

    /// Follow a menu drawer token
    pub fn navigate_from_menu(&self, token: &str) -> Result<Screen> {
        self.dispatch(Event::NavigateFromMenu(token.to_string()))
    }

    /// Unlock premium
    pub fn upgrade(&self) -> Result<Screen> {
        self.dispatch(Event::Upgrade)
    }

    /// Back from the reader to the deck
    pub fn close_reader(&self) -> Result<Screen> {
        self.dispatch(Event::CloseReader)
    }

    /// Back from the cookbook to the prompter
    pub fn close_cookbook(&self) -> Result<Screen> {
        self.dispatch(Event::CloseCookbook)
    }

    /// Back from settings to the prompter
    pub fn close_settings(&self) -> Result<Screen> {
        self.dispatch(Event::CloseSettings)
    }

    /// Open a saved recipe in the reader
    pub fn open_recipe(&self, recipe: Recipe) -> Result<Screen> {
        self.dispatch(Event::OpenRecipe(recipe))
    }

    /// Toggle the prompter microphone
    pub fn toggle_voice(&self) -> Result<Screen> {
        self.dispatch(Event::ToggleVoice)
    }

    /// Back from the deck to the prompter
    pub fn leave_recipes(&self) -> Result<Screen> {
        self.dispatch(Event::LeaveRecipes)
    }

    /// Finish a drag on the current card
    pub fn drag_end(&self, offset_x: f32, offset_y: f32) -> Result<Screen> {
        self.dispatch(Event::DragEnd { offset_x, offset_y })
    }

    /// "Skip" on the detail overlay
    pub fn skip_from_details(&self) -> Result<Screen> {
        self.dispatch(Event::SkipFromDetails)
    }

    /// "Choose this recipe" on the detail overlay
    pub fn choose_from_details(&self) -> Result<Screen> {
        self.dispatch(Event::ChooseFromDetails)
    }

    /// Dismiss the detail overlay
    pub fn close_details(&self) -> Result<Screen> {
        self.dispatch(Event::CloseDetails)
    }

    /// Rewind the deck to its first card
    pub fn restart_deck(&self) -> Result<Screen> {
        self.dispatch(Event::RestartDeck)
    }

    /// Next instruction step
    pub fn reader_next(&self) -> Result<Screen> {
        self.dispatch(Event::ReaderNext)
    }

    /// Previous instruction step
    pub fn reader_previous(&self) -> Result<Screen> {
        self.dispatch(Event::ReaderPrevious)
    }

    /// Read the current step aloud again
    ///
    /// The read-aloud flag clears after `SessionConfig::read_aloud_ms`.
    pub fn reader_repeat(&self) -> Result<Screen> {
        self.dispatch(Event::ReaderRepeat)
    }

    /// Read-aloud of the current step ended
    pub fn reader_finished_reading(&self) -> Result<Screen> {
        self.dispatch(Event::ReaderFinishedReading)
    }

    /// Toggle reader voice commands
    pub fn reader_toggle_voice(&self) -> Result<Screen> {
        self.dispatch(Event::ReaderToggleVoice)
    }

    /// Flip a settings toggle
    pub fn toggle_preference(&self, preference: Preference) -> Result<Screen> {
        self.dispatch(Event::TogglePreference(preference))
    }
}

impl Inner {
    fn apply(&self, event: Event) -> Result<Screen> {
        let action = event.action();

        // Published under the write lock so subscribers see changes in state order
        let (from, to, result) = {
            let mut state = self.state.write();
            let from = state.screen();
            let result = state.apply(event);
            let to = state.screen();

            for event in state.drain_events() {
                let _ = self.events_tx.send(event);
            }
            if from != to {
                self.screen_tx.send_replace(to);
                let _ = self.events_tx.send(SessionEvent::ScreenChanged { from, to });
            }
            (from, to, result)
        };

        if let Err(err) = &result {
            tracing::debug!(%err, action, screen = %from, "event ignored");
        }

        if from != to {
            tracing::debug!(%from, %to, "screen changed");

            if from == Screen::Loading && self.race_policy == LoadRacePolicy::Cancel {
                if let Some(pending) = self.pending.lock().take() {
                    pending.cancel();
                }
            }
        }

        result
    }

    fn finish_loading(&self, generation: u64, outcome: discovery::Result<Vec<Recipe>>) {
        {
            let mut pending = self.pending.lock();
            if pending.as_ref().is_some_and(|p| p.generation() == generation) {
                if let Some(current) = pending.take() {
                    current.detach();
                }
            }
        }

        if self.race_policy == LoadRacePolicy::Cancel
            && generation != self.generation.load(Ordering::SeqCst)
        {
            tracing::debug!(generation, "dropping stale recipe lookup");
            return;
        }

        let event = match outcome {
            Ok(recipes) => Event::RecipesLoaded(recipes),
            Err(err) => Event::DiscoveryFailed(err),
        };
        let _ = self.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::discovery::DiscoveryError;
    use app_core::{mock_catalog, MockRecipeDiscovery};
    use std::time::Duration;

    async fn advance(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_then_recipes_after_delay() {
        let controller = SessionController::default();
        controller.login().unwrap();
        assert_eq!(controller.submit_ingredients("chicken"), Ok(Screen::Loading));
        assert!(controller.is_loading_pending());

        advance(2499).await;
        assert_eq!(controller.screen(), Screen::Loading);

        advance(2).await;
        assert_eq!(controller.screen(), Screen::Recipes);
        assert!(!controller.is_loading_pending());
        assert_eq!(controller.snapshot().deck.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_starts_nothing() {
        let controller = SessionController::default();
        controller.login().unwrap();

        assert_eq!(controller.submit_ingredients("   "), Err(NavigationError::EmptyInput));
        assert_eq!(controller.screen(), Screen::Prompter);
        assert!(!controller.is_loading_pending());
    }

    #[test]
    fn test_submit_without_runtime() {
        let controller = SessionController::default();
        controller.login().unwrap();

        assert_eq!(controller.submit_ingredients("eggs"), Err(NavigationError::NoRuntime));
        assert_eq!(controller.screen(), Screen::Prompter);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_loading_cancels_lookup() {
        let controller = SessionController::default();
        controller.login().unwrap();
        controller.submit_ingredients("chicken").unwrap();

        controller.open_menu().unwrap();
        controller.navigate_from_menu("settings").unwrap();
        assert!(!controller.is_loading_pending());

        advance(5000).await;
        assert_eq!(controller.screen(), Screen::Settings);
    }

    #[tokio::test(start_paused = true)]
    async fn test_force_recipes_policy_jumps_to_recipes() {
        let config = SessionConfig::default().race_policy(LoadRacePolicy::ForceRecipes);
        let controller = SessionController::new(config);
        controller.login().unwrap();
        controller.submit_ingredients("chicken").unwrap();
        controller.navigate_from_menu("settings").unwrap();

        advance(2501).await;
        assert_eq!(controller.screen(), Screen::Recipes);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_replaces_lookup() {
        let controller = SessionController::new(SessionConfig::default().loading_delay_ms(100));
        controller.login().unwrap();
        controller.submit_ingredients("chicken").unwrap();
        advance(50).await;
        controller.submit_ingredients("beef").unwrap();

        advance(60).await;
        assert_eq!(controller.screen(), Screen::Loading);

        advance(50).await;
        assert_eq!(controller.screen(), Screen::Recipes);
    }

    #[tokio::test(start_paused = true)]
    async fn test_discovery_failure_returns_to_prompter() {
        let mut mock = MockRecipeDiscovery::new();
        mock.expect_discover()
            .times(1)
            .returning(|_| Err(DiscoveryError::Failed("offline".to_string())));

        let controller = SessionController::with_discovery(SessionConfig::default(), Arc::new(mock));
        let mut events = controller.subscribe_events();
        controller.login().unwrap();
        controller.submit_ingredients("tofu").unwrap();

        advance(1).await;
        assert_eq!(controller.screen(), Screen::Prompter);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.discovery_error.as_deref(), Some("Recipe lookup failed: offline"));

        let mut saw_failure = false;
        while let Ok(event) = events.try_recv() {
            if matches!(event, SessionEvent::DiscoveryFailed { .. }) {
                saw_failure = true;
            }
        }
        assert!(saw_failure);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_discovery_receives_prompt() {
        let mut mock = MockRecipeDiscovery::new();
        mock.expect_discover()
            .withf(|prompt| prompt.as_str() == "pasta, garlic")
            .times(1)
            .returning(|_| Ok(mock_catalog().into_iter().take(2).collect()));

        let controller = SessionController::with_discovery(SessionConfig::default(), Arc::new(mock));
        controller.login().unwrap();
        controller.submit_ingredients("pasta, garlic").unwrap();

        advance(1).await;
        assert_eq!(controller.screen(), Screen::Recipes);
        assert_eq!(controller.snapshot().deck.position_label(), "1 / 2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_screen_watch_follows_transitions() {
        let controller = SessionController::default();
        let screens = controller.subscribe_screen();
        assert_eq!(*screens.borrow(), Screen::Login);

        controller.login().unwrap();
        assert_eq!(*screens.borrow(), Screen::Prompter);

        controller.submit_ingredients("rice").unwrap();
        assert_eq!(*screens.borrow(), Screen::Loading);

        advance(2600).await;
        assert_eq!(*screens.borrow(), Screen::Recipes);
    }

    #[tokio::test(start_paused = true)]
    async fn test_premium_accept_broadcasts_save() {
        let controller = SessionController::default();
        controller.login().unwrap();
        controller.upgrade().unwrap();
        controller.submit_ingredients("chicken").unwrap();
        advance(2600).await;

        let mut events = controller.subscribe_events();
        let recipe = mock_catalog().remove(0);
        assert_eq!(controller.swipe_accept(recipe), Ok(Screen::Reader));

        let mut received = Vec::new();
        while let Ok(event) = events.try_recv() {
            received.push(event);
        }
        assert!(received.contains(&SessionEvent::RecipeSaved { recipe_id: 1 }));
        assert!(received.contains(&SessionEvent::ScreenChanged {
            from: Screen::Recipes,
            to: Screen::Reader
        }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_screen_watch_matches_state_under_concurrent_apply() {
        let config = SessionConfig::default()
            .loading_delay_ms(0)
            .race_policy(LoadRacePolicy::ForceRecipes);

        for _ in 0..200 {
            let controller = SessionController::new(config.clone());
            let screens = controller.subscribe_screen();
            let mut events = controller.subscribe_events();

            controller.login().unwrap();
            controller.submit_ingredients("eggs").unwrap();
            controller.navigate_from_menu("settings").unwrap();

            let mut last_change = None;
            while last_change != Some(Screen::Recipes) {
                let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
                    .await
                    .expect("lookup finished")
                    .unwrap();
                if let SessionEvent::ScreenChanged { to, .. } = event {
                    last_change = Some(to);
                }
            }
            while let Ok(event) = events.try_recv() {
                if let SessionEvent::ScreenChanged { to, .. } = event {
                    last_change = Some(to);
                }
            }

            let screen = controller.screen();
            assert_eq!(*screens.borrow(), screen);
            assert_eq!(last_change, Some(screen));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_aloud_clears_after_duration() {
        let controller = SessionController::default();
        controller.login().unwrap();
        controller.submit_ingredients("chicken").unwrap();
        advance(2600).await;
        controller.swipe_accept(mock_catalog().remove(0)).unwrap();

        controller.reader_repeat().unwrap();
        assert!(controller.snapshot().reader.reading_aloud);

        advance(1999).await;
        assert!(controller.snapshot().reader.reading_aloud);

        advance(2).await;
        assert!(!controller.snapshot().reader.reading_aloud);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_restarts_read_aloud_timer() {
        let controller = SessionController::new(SessionConfig::default().read_aloud_ms(100));
        controller.login().unwrap();
        controller.open_recipe(mock_catalog().remove(0)).unwrap();

        controller.reader_repeat().unwrap();
        advance(60).await;
        controller.reader_repeat().unwrap();

        advance(60).await;
        assert!(controller.snapshot().reader.reading_aloud);

        advance(50).await;
        assert!(!controller.snapshot().reader.reading_aloud);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let controller = SessionController::default();
        let other = controller.clone();

        other.login().unwrap();
        other.upgrade().unwrap();
        assert_eq!(controller.screen(), Screen::Prompter);
        assert!(controller.snapshot().premium);
    }

    #[tokio::test]
    async fn test_bogus_menu_token_closes_menu() {
        let controller = SessionController::default();
        controller.login().unwrap();
        controller.open_menu().unwrap();

        assert!(controller.navigate_from_menu("bogus-token").is_err());
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.screen, Screen::Prompter);
        assert!(!snapshot.menu_open);
    }
}
