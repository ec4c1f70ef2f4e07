mod app;
mod search;
mod terminal;
mod view;

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use combobox::selection::SelectionMode;
use crossterm::event::EventStream;
use futures::StreamExt;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::mpsc;

use app::Demo;
use search::spawn_search;
use terminal::TerminalGuard;

const USAGE: &str = "usage: combobox-demo [--mode single|multi] [--log-file PATH] [--latency-ms N]";

struct Args {
    mode: SelectionMode,
    log_file: PathBuf,
    latency: Duration,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, Box<dyn Error>> {
        let mut parsed = Self {
            mode: SelectionMode::Single,
            log_file: PathBuf::from("combobox-demo.log"),
            latency: Duration::from_millis(250),
        };

        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| format!("{} needs a value\n{}", arg, USAGE))
            };
            match arg.as_str() {
                "--mode" => {
                    parsed.mode = match value()?.as_str() {
                        "single" => SelectionMode::Single,
                        "multi" => SelectionMode::Multiple,
                        other => return Err(format!("unknown mode '{}'\n{}", other, USAGE).into()),
                    }
                }
                "--log-file" => parsed.log_file = PathBuf::from(value()?),
                "--latency-ms" => parsed.latency = Duration::from_millis(value()?.parse()?),
                "-h" | "--help" => return Err(USAGE.into()),
                other => return Err(format!("unknown argument '{}'\n{}", other, USAGE).into()),
            }
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run(std::env::args().skip(1)).await {
        eprintln!("Error: {}", e);
    }
}

async fn run(args: impl Iterator<Item = String>) -> Result<(), Box<dyn Error>> {
    let args = Args::parse(args)?;

    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!(
        "Starting combobox demo mode={:?} latency={:?}",
        args.mode,
        args.latency
    );

    let (search_tx, mut search_rx) = spawn_search(args.latency);
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let mut demo = Demo::new(args.mode, search_tx, command_tx)?;

    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    view::draw(terminal.stdout(), &demo)?;

    while !demo.should_quit() {
        tokio::select! {
            Some(event_result) = events.next() => {
                let event = event_result?;
                demo.on_event(&event);
            }
            Some(response) = search_rx.recv() => demo.on_search(response),
            Some(command) = command_rx.recv() => demo.on_command(command),
            else => break,
        }
        view::draw(terminal.stdout(), &demo)?;
    }

    log::info!("Combobox demo exiting");
    Ok(())
}
