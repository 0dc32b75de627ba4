//! Scripted walkthrough of a session
//!
//! Usage: `recipe-roulette [config.json]`. Set `RUST_LOG=debug` to see every
//! ignored event.

use anyhow::{Context, Result};
use recipe_roulette::app_ui::menu;
use recipe_roulette::{render, Screen, SessionConfig, SessionController};
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<SessionConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config from {path}"))?;
            SessionConfig::from_json(&json).with_context(|| format!("invalid config in {path}"))
        }
        None => Ok(SessionConfig::default()),
    }
}

fn show(controller: &SessionController) -> Result<()> {
    let snapshot = controller.snapshot();
    let view = render(&snapshot).context("reader opened without a recipe")?;
    tracing::info!(screen = %snapshot.screen, premium = snapshot.premium, "rendered");
    println!("[{}] {}", snapshot.screen.title(), serde_json::to_string(&view)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    tracing::info!(
        delay_ms = config.loading_delay_ms,
        race_policy = ?config.race_policy,
        "starting session"
    );
    let controller = SessionController::new(config);
    let mut screens = controller.subscribe_screen();

    controller.login()?;
    controller.upgrade()?;
    show(&controller)?;

    controller.submit_ingredients("chicken, garlic, pasta")?;
    show(&controller)?;

    while *screens.borrow_and_update() != Screen::Recipes {
        screens.changed().await.context("session closed while loading")?;
    }
    show(&controller)?;

    // Pass on the first card, then open and choose the second
    controller.drag_end(-200.0, 0.0)?;
    controller.drag_end(0.0, 120.0)?;
    show(&controller)?;
    controller.choose_from_details()?;

    controller.reader_next()?;
    show(&controller)?;

    controller.open_menu()?;
    println!("{}", serde_json::to_string(&menu::drawer(&controller.snapshot()))?);
    controller.navigate_from_menu("cookbook")?;
    show(&controller)?;

    controller.close_cookbook()?;
    show(&controller)?;
    Ok(())
}
