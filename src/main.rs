//! termfolio CLI
//!
//! Browse the portfolio interactively, or print a single section.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use termfolio::content::Section;
use termfolio::logging;
use termfolio::report::{format_section, OutputFormat};
use termfolio::tui::{self, RunConfig};

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Personal portfolio in your terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Don't capture the mouse (buttons become keyboard-only)
    #[arg(long, global = true)]
    no_mouse: bool,

    /// Directory for log files (default: local data dir)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive view (default)
    Browse,

    /// Print one section and exit
    Show {
        /// Section to print
        #[arg(value_enum)]
        section: SectionArg,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SectionArg {
    About,
    Projects,
    Links,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::About => Section::About,
            SectionArg::Projects => Section::Projects,
            SectionArg::Links => Section::Links,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => cmd_browse(cli.no_mouse, cli.log_dir),
        Commands::Show { section, format } => cmd_show(section.into(), format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_browse(no_mouse: bool, log_dir: Option<PathBuf>) -> Result<(), String> {
    let dir = logging::prepare_log_dir(log_dir.as_deref()).map_err(|e| e.to_string())?;
    let _guard = logging::init(&dir).map_err(|e| e.to_string())?;
    tracing::info!(log_dir = %dir.display(), "starting");

    let config = RunConfig { mouse: !no_mouse };
    tui::run(config).map_err(|e| {
        tracing::error!(error = %e, "view failed");
        e.to_string()
    })
}

fn cmd_show(section: Section, format: OutputFormat) -> Result<(), String> {
    let output = format_section(section, format).map_err(|e| e.to_string())?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
