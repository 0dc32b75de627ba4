//! Menu drawer model
//!
//! Describes what the slide-out drawer shows. Each entry carries the token
//! that is handed to [`SessionController::navigate_from_menu`] when tapped.
//!
//! [`SessionController::navigate_from_menu`]: app_state::SessionController::navigate_from_menu

use app_state::{MenuTarget, SessionSnapshot};
use serde::Serialize;

/// Drawer heading
pub const APP_TITLE: &str = "Chef AI";

/// A tappable drawer entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Text shown on the entry
    pub label: &'static str,
    /// Destination
    pub target: MenuTarget,
    /// Show the "Premium" badge and dim the entry
    pub premium_badge: bool,
}

impl MenuItem {
    /// Token to pass to the controller
    pub fn token(&self) -> &'static str {
        self.target.as_token()
    }
}

/// "Go Premium" card shown to free users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradePrompt {
    /// Card heading
    pub title: &'static str,
    /// Button label
    pub action_label: &'static str,
    /// Where the button navigates
    pub target: MenuTarget,
}

impl Default for UpgradePrompt {
    fn default() -> Self {
        Self {
            title: "Go Premium",
            action_label: "Upgrade Now",
            target: MenuTarget::Settings,
        }
    }
}

/// Everything the drawer renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDrawer {
    /// Drawer is visible
    pub open: bool,
    /// Heading
    pub title: &'static str,
    /// Premium crown next to the heading
    pub premium: bool,
    /// Navigation entries in display order
    pub items: Vec<MenuItem>,
    /// Upsell card, free users only
    pub upgrade: Option<UpgradePrompt>,
}

/// Drawer entries for the given plan
///
/// Badges are informational only; every entry navigates regardless of plan.
pub fn menu_items(premium: bool) -> Vec<MenuItem> {
    [
        ("Home", MenuTarget::Prompter),
        ("Cookbook", MenuTarget::Cookbook),
        ("Remix Mode", MenuTarget::Remix),
        ("Settings", MenuTarget::Settings),
    ]
    .into_iter()
    .map(|(label, target)| MenuItem {
        label,
        target,
        premium_badge: target.is_premium() && !premium,
    })
    .collect()
}

/// Build the drawer from a session snapshot
pub fn drawer(snapshot: &SessionSnapshot) -> MenuDrawer {
    MenuDrawer {
        open: snapshot.menu_open,
        title: APP_TITLE,
        premium: snapshot.premium,
        items: menu_items(snapshot.premium),
        upgrade: (!snapshot.premium).then(UpgradePrompt::default),
    }
}
