//! Step-by-step cooking reader

use serde::{Deserialize, Serialize};

use crate::recipes::Recipe;

/// Cursor over a recipe's instruction steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReader {
    step: usize,
    step_count: usize,
    /// Listening for "next step" / "repeat step" voice commands
    pub voice_listening: bool,
    /// Current step is being read aloud
    pub reading_aloud: bool,
}

impl StepReader {
    /// Reader positioned at the first step of `recipe`
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            step_count: recipe.step_count(),
            ..Self::default()
        }
    }

    /// Zero-based current step
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Move forward, stopping at the last step
    pub fn next_step(&mut self) {
        if self.step + 1 < self.step_count {
            self.step += 1;
        }
    }

    /// Move back, stopping at the first step
    pub fn previous_step(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// "Previous" is disabled on the first step
    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    /// On the final step (or there are no steps)
    pub fn is_last(&self) -> bool {
        self.step + 1 >= self.step_count
    }

    /// Completed fraction in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.step_count == 0 {
            return 0.0;
        }
        (self.step + 1) as f32 / self.step_count as f32
    }

    /// "Step N of M"
    pub fn label(&self) -> String {
        format!("Step {} of {}", self.step + 1, self.step_count)
    }

    /// Instruction text for the current step
    pub fn current_instruction<'a>(&self, recipe: &'a Recipe) -> Option<&'a str> {
        recipe.instructions.get(self.step).map(String::as_str)
    }

    /// Start reading the current step aloud
    pub fn repeat_step(&mut self) {
        self.reading_aloud = true;
    }

    /// Read-aloud finished
    pub fn finish_reading(&mut self) {
        self.reading_aloud = false;
    }

    /// Flip voice-command listening
    pub fn toggle_voice(&mut self) {
        self.voice_listening = !self.voice_listening;
    }
}
