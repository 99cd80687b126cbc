use caretlink::SplitDirection;
use caretlink::core::config::{self, CliOverrides, ResolvedConfig};
use caretlink::core::link::parse_link;
use caretlink::core::navigator::WindowStrategy;
use caretlink::core::path::resolve_path;
use caretlink::tui;

use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "caretlink", about = "Follow ^section@file^ links between plain-text notes")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Notes to open, one pane each
    files: Vec<PathBuf>,

    /// How new panes are laid out
    #[arg(long, value_enum, global = true)]
    split: Option<SplitDirection>,

    /// How the window showing a file is found
    #[arg(long, value_enum, global = true)]
    window_strategy: Option<WindowStrategy>,
}

#[derive(Subcommand)]
enum Command {
    /// Open notes in the terminal viewer
    Open { files: Vec<PathBuf> },
    /// Print the link found on LINE
    Parse { line: String },
    /// Print the absolute path REFERENCE resolves to
    Resolve {
        reference: String,
        /// Document the reference appears in
        #[arg(long)]
        from: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("caretlink: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            split: args.split,
            window_strategy: args.window_strategy,
        },
    );
    init_logging(&resolved);

    match args.command {
        Some(Command::Parse { line }) => {
            match parse_link(&line) {
                Some(link) => println!("{link}"),
                None => println!("no link"),
            }
            ExitCode::SUCCESS
        }
        Some(Command::Resolve { reference, from }) => {
            println!("{}", resolve_path(&reference, &from).display());
            ExitCode::SUCCESS
        }
        Some(Command::Open { files }) => open(resolved, files),
        None => open(resolved, args.files),
    }
}

fn open(config: ResolvedConfig, files: Vec<PathBuf>) -> ExitCode {
    log::info!("caretlink starting with {} file(s)", files.len());
    match tui::run(config, files) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("caretlink: {e}");
            ExitCode::FAILURE
        }
    }
}

/// File logger; the terminal belongs to the TUI. Best effort.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
