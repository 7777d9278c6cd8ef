use anyhow::Context;
use chessgame::agents::HumanAgent;
use chessgame::config::Config;
use chessgame::game::Match;
use chessgame::Game;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------
// Main
// ---------------------------------------------

// Hot-seat play: both sides type their moves on the same terminal.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let game = match &config.start_json {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading saved game {}", path.display()))?;
            info!(path = %path.display(), "resuming saved game");
            Game::from_json(&text)?
        }
        None => Game::standard_setup(),
    };

    let mut m = Match::from_game(
        game,
        HumanAgent::new(config.glyphs),
        HumanAgent::new(config.glyphs),
    );
    let outcome = m.play()?;

    println!("\n{}", m.game().board().display_with(config.glyphs));
    println!("{}", outcome);
    Ok(())
}
