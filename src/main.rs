use clap::Parser;
use histty::app::model::Model;
use histty::components::common::Msg;
use histty::theme::ThemeManager;
use histty::{config, localization, logger, models};
use std::path::PathBuf;
use tuirealm::Update;
use tuirealm::application::PollStrategy;

/// Built-in sample history so the viewer runs without an export at hand.
const SAMPLE_HISTORY: &str = include_str!("../demos/history.json");

#[derive(Debug, Parser)]
#[command(name = "histty", version, about = "Terminal viewer for content version history")]
struct Cli {
    /// Path to a version history export (JSON)
    #[arg(short = 'H', long = "history")]
    history: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme flavor override (nightfall, daylight)
    #[arg(short, long)]
    theme: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        config::set_config_path(&path.display().to_string());
    }
    let config = config::get_config_or_panic();

    logger::setup_logger()?;
    localization::init_global(config.locale());

    let mut theme_config = config.theme();
    if let Some(flavor) = cli.theme {
        theme_config.flavor_name = flavor;
    }
    ThemeManager::init_global(&theme_config)?;

    let versions = match &cli.history {
        Some(path) => models::load_history(path)?,
        None => models::parse_history(SAMPLE_HISTORY)?,
    };
    log::info!("Loaded {} versions", versions.len());

    let mut model = Model::new(versions)?;

    // Enter alternate screen
    let _ = model.terminal.enter_alternate_screen();
    let _ = model.terminal.enable_raw_mode();

    // Main loop
    while !model.quit {
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                log::error!("Application tick error: {err}");
                let mut msg = Some(Msg::Error(histty::error::AppError::Component(
                    err.to_string(),
                )));
                while msg.is_some() {
                    msg = model.update(msg);
                }
            }
            Ok(messages) if !messages.is_empty() => {
                // Redraw if at least one msg has been processed
                model.redraw = true;
                for msg in messages.into_iter() {
                    let mut msg = Some(msg);
                    while msg.is_some() {
                        msg = model.update(msg);
                    }
                }
            }
            _ => {}
        }
        // Redraw
        if model.redraw {
            if let Err(e) = model.view() {
                log::error!("Failed to draw: {e}");
            }
            model.redraw = false;
        }
    }

    // Terminate terminal
    let _ = model.terminal.leave_alternate_screen();
    let _ = model.terminal.disable_raw_mode();
    let _ = model.terminal.clear_screen();
    Ok(())
}
