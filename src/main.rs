use anyhow::Result;
use clap::Parser;
use mystery_number::cli::Cli;
use mystery_number::core::engine::Engine;
use mystery_number::games::mystery::MysteryGame;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing()?;
    info!(seeded = cli.seed.is_some(), "starting mystery number");

    let game = MysteryGame::new(cli.engine());
    let terminal = ratatui::init();

    let result = Engine::new(game).run(terminal).await;

    ratatui::restore();
    match result {
        Ok(game) => {
            info!(attempts = game.state().attempts(), won = game.state().is_over(), "session ended");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "session failed");
            Err(e)
        }
    }
}
