/// wire3d Terminal Viewer - Spinning Wireframe
///
/// Renders a rotating cube or pyramid in the terminal.
/// Controls:
///   - 1 / C: Cube
///   - 2 / P: Pyramid
///   - Q / ESC / Ctrl+C: Quit
use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use wire3d_terminal::{Args, TerminalApp, ViewerConfig, ViewerError};

fn init_logging(args: &Args) -> Result<(), ViewerError> {
    let result = match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ViewerError::Logging(format!("cannot create {}: {}", path.display(), e))
            })?;
            tracing_subscriber::fmt()
                .with_max_level(args.log_level())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        // Anything chattier would draw over the alternate screen
        None => tracing_subscriber::fmt()
            .with_max_level(Level::ERROR)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| ViewerError::Logging(e.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = ViewerConfig::try_from(&args).context("invalid command line options")?;
    info!(?config, "starting wire3d terminal viewer");

    let mut app = TerminalApp::new(&config).context("failed to query terminal size")?;
    app.run().context("terminal viewer failed")?;

    info!("exiting");
    Ok(())
}
