//! Interactive terminal user interface of the product catalog.
//!
//! A form for new products at the top, the stored products below. The table is reloaded every
//! `ui.refresh_interval_secs` seconds and after every change.
use std::env;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::process::exit;

use catalog::ApplicationRuntimeBuilder;
use clap::{Parser, ValueEnum};
use crossterm::event::{Event, EventStream};
use env_logger::Env;
use futures::StreamExt;
use log::{debug, info};
use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;

use app::App;

mod app;
mod input;
mod ui;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Product catalog - insert, edit, delete and export qualified products
#[derive(Parser)]
#[command(author, version, about)]
struct Opts {
    #[arg(short, long)]
    verbosity: Option<LogLevel>,

    /// Use this database file instead of the configured one
    #[arg(long = "db", value_name = "FILE")]
    database: Option<PathBuf>,
}

async fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<(), Box<dyn Error>> {
    let mut events = EventStream::new();
    let mut refresh = tokio::time::interval(app.refresh_interval());
    refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            _ = refresh.tick() => app.refresh(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }
    info!("Leaving the product catalog");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    configure_logging(opts.verbosity);

    let mut builder = ApplicationRuntimeBuilder::new();
    if let Some(database) = opts.database {
        builder = builder.with_database_path(database);
    }
    // Fails before the terminal is taken over, so the message stays readable
    let runtime = match builder.build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to open the product catalog: '{err}'");
            exit(1);
        }
    };

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let app_result = run(terminal, App::new(runtime)).await;
    ratatui::restore();
    app_result
}

fn configure_logging(verbosity: Option<LogLevel>) {
    let mut log_file = env::temp_dir();
    log_file.push("product-catalog.log");

    // If nothing else was specified in RUST_LOG, use 'warn'
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(
        verbosity.map_or("warn", |lvl| match lvl {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }),
    ));
    // The terminal belongs to the user interface, so without a log file nothing is logged
    match File::create(&log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
    debug!("Logging to {}", log_file.to_string_lossy());
}
