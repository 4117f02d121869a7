#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
use std::fs::File;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use typerace::runtime::terminal::TerminalBackend;
use typerace::runtime::{self, frame_duration};
use typerace::{log, GameConfig, Session};

const LOG_ENV: &str = "TYPERACE_LOG";

fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path).wrap_err_with(|| format!("failed to open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    match std::env::args().nth(1) {
        Some(path) => GameConfig::from_path(&path)
            .wrap_err_with(|| format!("failed to load config from {path}")),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = load_config()?;
    let mut session = Session::from_config(&config)?;

    {
        let mut backend = TerminalBackend::new(config.track_width, config.car_width)
            .wrap_err("failed to set up the terminal")?;
        runtime::run(&mut session, &mut backend, frame_duration(config.tick_rate))?;
    }

    println!("{}", log::export(session.races()));
    Ok(())
}
