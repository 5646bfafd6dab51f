use std::io::stdout;
use std::process::ExitCode;

use autofield::app::{App, Outcome};
use autofield::candidates::CandidateReader;
use autofield::cli::Cli;
use autofield::config::load_config;
use clap::Parser;
use color_eyre::{Report, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let cli = Cli::parse();

    let loaded = load_config(cli.config.as_deref());
    // Printed before the alternate screen so it survives any later failure
    if let Some(warning) = &loaded.warning {
        eprintln!("autofield: {}", warning);
    }
    let config = cli.apply_overrides(loaded.config);
    config.validate()?;

    let candidates = CandidateReader::read(cli.file.as_deref(), &cli.candidates)?;
    let mut app = App::new(candidates, &cli.initial, &config)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
        .map_err(Report::from)
        .and_then(|()| run(terminal, &mut app));

    // Restore terminal before printing anything
    let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    ratatui::restore();
    result?;

    match app.outcome() {
        Some(Outcome::Submitted(text)) => {
            println!("{}", cli.format_output(text));
            Ok(ExitCode::SUCCESS)
        }
        Some(Outcome::Cancelled) | None => Ok(ExitCode::FAILURE),
    }
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}

/// Debug builds log to a file so the terminal UI stays clean
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("autofield.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or("AUTOFIELD_LOG", "warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
