use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Truckload - how many boxes fit in each truck bed
#[derive(Parser)]
#[command(name = "truckload")]
#[command(about = "Calculate how many boxes fit in common truck beds")]
#[command(version)]
pub struct Cli {
    /// Load trucks and presets from a JSON catalog instead of the built-in tables
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file.
    ///
    /// The interactive UI owns the terminal, so it only logs when a file is
    /// given. Headless commands log to stderr otherwise.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive calculator (default)
    Tui,
    /// Print how many boxes fit in every truck
    Calc {
        /// Box width in mm
        #[arg(short, long, required_unless_present = "preset")]
        width: Option<String>,
        /// Box length in mm
        #[arg(short, long, required_unless_present = "preset")]
        length: Option<String>,
        /// Box height in mm
        #[arg(short = 'H', long, required_unless_present = "preset")]
        height: Option<String>,
        /// Use the dimensions of a named preset box
        #[arg(short, long, conflicts_with_all = ["width", "length", "height"])]
        preset: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the truck interiors
    Trucks {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the preset boxes
    Presets {
        /// Only list presets with exactly these dimensions
        #[arg(long = "match", num_args = 3, value_names = ["WIDTH", "LENGTH", "HEIGHT"])]
        matching: Option<Vec<String>>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate a catalog file
    Validate {
        /// Path to the catalog file to validate
        catalog: PathBuf,
    },
    /// Write the active catalog to a JSON file
    ExportCatalog {
        /// Destination path
        path: PathBuf,
    },
}

/// Output format for headless commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
