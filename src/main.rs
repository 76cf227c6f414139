//! Binary entry point: parse arguments, set up logging and the terminal,
//! and hand control to the runtime loop.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use comet::cli::CliArgs;
use comet::config::EditorConfig;
use comet::logging;
use comet::model::{AppModel, Document};
use comet::runtime::App;
use comet::terminal::{self, RawModeGuard, TerminalInput};

fn main() {
    let args = CliArgs::parse();
    let _log_guard = logging::init();

    if let Err(err) = run(args) {
        // The raw-mode guard has been dropped by the time we get here, so
        // this prints to a restored terminal.
        eprintln!("comet: {:#}", err);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let startup = args.into_config();
    let config = EditorConfig::load();

    let _raw = RawModeGuard::enter()?;
    let (screen_rows, screen_cols) = terminal::text_area_size()?;

    let mut model = AppModel::new(screen_rows, screen_cols, config);
    if let Some(path) = &startup.path {
        model.document = Document::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        tracing::info!("opened {}", path.display());
    }
    if let Some((line, column)) = startup.initial_position {
        model.place_cursor(line, column);
    }
    model
        .ui
        .set_status("HELP: Ctrl-S = save | Ctrl-F = find | Ctrl-Q = quit");

    let mut app = App::new(model, TerminalInput::default(), io::stdout());
    app.run()
}
