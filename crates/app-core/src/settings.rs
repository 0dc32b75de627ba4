//! Settings panel data: in-memory preferences and the premium feature catalog

use serde::{Deserialize, Serialize};

/// Features unlocked by the premium upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PremiumFeature {
    /// Hands-free cooking instructions
    VoiceRecipeReading,
    /// Recipe variations
    RemixMode,
    /// Nutritional breakdown
    NutritionInformation,
    /// Ingredient blocklist
    IngredientPreferences,
    /// Saved recipes
    PersonalCookbook,
}

impl PremiumFeature {
    /// All features in display order
    pub fn all() -> [PremiumFeature; 5] {
        [
            PremiumFeature::VoiceRecipeReading,
            PremiumFeature::RemixMode,
            PremiumFeature::NutritionInformation,
            PremiumFeature::IngredientPreferences,
            PremiumFeature::PersonalCookbook,
        ]
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            PremiumFeature::VoiceRecipeReading => "Voice Recipe Reading",
            PremiumFeature::RemixMode => "Remix Mode",
            PremiumFeature::NutritionInformation => "Nutrition Information",
            PremiumFeature::IngredientPreferences => "Ingredient Preferences",
            PremiumFeature::PersonalCookbook => "Personal Cookbook",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            PremiumFeature::VoiceRecipeReading => "Hands-free cooking instructions",
            PremiumFeature::RemixMode => "AI creates unique recipe variations",
            PremiumFeature::NutritionInformation => "Detailed nutritional breakdown",
            PremiumFeature::IngredientPreferences => "Block ingredients you don't like",
            PremiumFeature::PersonalCookbook => "Save unlimited recipes",
        }
    }
}

/// A feature row as shown in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStatus {
    /// Which feature
    pub feature: PremiumFeature,
    /// Locked for free users
    pub locked: bool,
}

/// Feature rows for the given plan
pub fn feature_statuses(premium: bool) -> Vec<FeatureStatus> {
    PremiumFeature::all()
        .into_iter()
        .map(|feature| FeatureStatus { feature, locked: !premium })
        .collect()
}

/// Plan headline: "Premium Member" or "Free Plan"
pub fn plan_label(premium: bool) -> &'static str {
    if premium {
        "Premium Member"
    } else {
        "Free Plan"
    }
}

/// General toggles on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    /// Microphone input on the prompter
    VoiceInput,
    /// Push notifications
    Notifications,
    /// Dark theme
    DarkMode,
}

/// In-memory preference values (not persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Voice input enabled
    pub voice_input: bool,
    /// Notifications enabled
    pub notifications: bool,
    /// Dark mode enabled
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            voice_input: true,
            notifications: true,
            dark_mode: false,
        }
    }
}

impl Preferences {
    /// Read a preference
    pub fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::VoiceInput => self.voice_input,
            Preference::Notifications => self.notifications,
            Preference::DarkMode => self.dark_mode,
        }
    }

    /// Flip a preference and return its new value
    pub fn toggle(&mut self, preference: Preference) -> bool {
        let slot = match preference {
            Preference::VoiceInput => &mut self.voice_input,
            Preference::Notifications => &mut self.notifications,
            Preference::DarkMode => &mut self.dark_mode,
        };
        *slot = !*slot;
        *slot
    }
}
