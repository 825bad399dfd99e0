use std::path::PathBuf;

use alacarta::{
    config::AppConfig,
    controllers::{PriceDbCache, load_recipes},
    tui::app::{AppAction, BrowserApp},
};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};

#[derive(Parser)]
#[command(name = "recipe_browser", about = "Browse and scale recipes in the terminal")]
struct Args {
    /// Path to a TOML config file (defaults to ./alacarta.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Only warnings, so log lines don't tear through the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    // Load data before touching the terminal so errors print normally
    let recipes = load_recipes(&config.recipes_path).await?;
    let price_db = PriceDbCache::new(&config.price_db_path).get().await;

    let mut app = BrowserApp::new(recipes, price_db, config.servings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e);
        }

        match event::read() {
            Ok(Event::Key(key)) => {
                if let AppAction::Exit = app.handle_key(key.code) {
                    break Ok(());
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result?;
    Ok(())
}
