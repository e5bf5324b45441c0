//! codebox - a terminal code box for Clojure-like snippets
//!
//! Hosts the codebox engine in a minimal full-screen editor: Enter opens an
//! indented line, and known forms are highlighted as you type.

mod display;
mod editor;
mod input;
mod terminal;

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use codebox::{Config, Result};
use editor::EditorState;
use terminal::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("codebox {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    init_logging()?;

    let config = Config::load();
    let path = args
        .get(1)
        .filter(|a| !a.starts_with('-'))
        .map(PathBuf::from);

    let terminal = Terminal::new()?;
    let mut editor = EditorState::new(terminal, &config, path)?;
    editor.run()
}

/// Log to the file named by CODEBOX_LOG; the terminal is in raw mode, so
/// stderr is not an option
fn init_logging() -> Result<()> {
    let Ok(path) = env::var("CODEBOX_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!("codebox starting");
    Ok(())
}

fn print_usage() {
    println!("codebox {} - live code box with smart indentation", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codebox [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Keys:");
    println!("  Enter          New line, indented from the open brackets");
    println!("  Arrows         Move the cursor (also C-f C-b C-n C-p)");
    println!("  Home, End      Line start and end (also C-a C-e)");
    println!("  C-s            Save");
    println!("  C-q            Quit");
    println!();
    println!("Settings are read from ~/.codebox.toml; set CODEBOX_LOG=<file> to log.");
}
