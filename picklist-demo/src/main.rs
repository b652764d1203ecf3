mod error;
mod host;
mod paths;

use std::fs::{self, File};
use std::time::Duration;

use picklist::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::DemoError;
use crate::host::DemoHost;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn init_logging() -> Result<(), DemoError> {
    let cache = paths::cache_dir().ok_or(DemoError::NoCacheDir)?;
    let path = paths::log_file().ok_or(DemoError::NoCacheDir)?;

    fs::create_dir_all(&cache).map_err(|source| DemoError::LogFile {
        path: cache.clone(),
        source,
    })?;
    paths::rotate_logs(&cache);

    let log_file = File::create(&path).map_err(|source| DemoError::LogFile {
        path: path.clone(),
        source,
    })?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("[demo] logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), DemoError> {
    init_logging()?;

    let mut terminal = Terminal::new()?;
    let mut host = DemoHost::new();

    loop {
        terminal.draw(|buf| host.render(buf))?;

        let raw = terminal.poll(Some(POLL_INTERVAL))?;
        host.process(&raw);

        if host.should_quit() {
            log::info!("[demo] quit requested");
            break;
        }
    }

    Ok(())
}

fn main() {
    // The terminal is restored when `run` returns, so errors print cleanly.
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
