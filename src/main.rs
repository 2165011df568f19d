use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use lawgg_suggest::app::App;
use lawgg_suggest::cli::{Cli, Command};
use lawgg_suggest::client::{HttpBackend, spawn_worker};
use lawgg_suggest::config::{Config, load_config};
use lawgg_suggest::{logging, lookup};

/// How long to wait for input before ticking the widgets again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    match &cli.command {
        Some(Command::Lookup { query, scope, json }) => {
            logging::init_stderr_logger()?;
            let results = lookup::lookup(&config, query, *scope)?;
            if *json {
                let value = lookup::format_json(query, *scope, &results);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", lookup::format_text(&results));
            }
            Ok(())
        }
        None => {
            let log_path = cli
                .log_file
                .clone()
                .or_else(logging::default_log_path)
                .ok_or_else(|| eyre!("no cache directory; pass --log-file"))?;
            logging::init_file_logger(&log_path)?;
            run_tui(&config)
        }
    }
}

fn run_tui(config: &Config) -> Result<()> {
    let backend = HttpBackend::from_config(&config.api)?;
    log::info!("using lookup API at {}", backend.base_url());
    let worker = spawn_worker(backend)?;
    let mut app = App::new(config, worker);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    // Restore terminal even if mouse capture cannot be released
    let _ = execute!(std::io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    app.worker.shutdown();
    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
