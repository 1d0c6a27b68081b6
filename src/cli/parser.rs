use crate::core::assigner::Strategy;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftPlanner
/// CLI application to generate weekly shift schedules
#[derive(Parser)]
#[command(
    name = "rshiftplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple shift planning CLI: generate weekly schedules and export them as HTML, PDF, CSV, JSON or XLSX",
    long_about = None
)]
pub struct Cli {
    /// Override roster configuration file (useful for tests or custom rosters)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and the default roster
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the roster configuration for problems")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the configured roster and week layout
    Roster,

    /// Generate the weekly schedule and write the HTML and PDF documents
    Generate {
        /// Seed for the random generator; the same seed reproduces the
        /// same schedule
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Slot assignment strategy (defaults to the configured one)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// HTML output path (default from configuration)
        #[arg(long = "html", value_name = "FILE")]
        html: Option<String>,

        /// PDF output path (default from configuration)
        #[arg(long = "pdf", value_name = "FILE")]
        pdf: Option<String>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the schedule in a single format
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Seed for the random generator; the same seed reproduces the
        /// same schedule
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Slot assignment strategy (defaults to the configured one)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
