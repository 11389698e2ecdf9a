mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "fintab",
    version,
    about = "Reconstruct financial-statement tables from annual report PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract statement tables from a PDF, grouped by statement variant
    Extract {
        /// Path to the annual report PDF
        input_file: PathBuf,

        /// Custom heading catalog JSON file (default: builtin catalog)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted tables to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// List the pages carrying recognizable statement headings
    Pages {
        /// Path to the annual report PDF
        input_file: PathBuf,

        /// Custom heading catalog JSON file (default: builtin catalog)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Manage and inspect heading catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Show the builtin heading catalog
    Show,
    /// Print the catalog JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            catalog,
            output,
            out,
        } => commands::extract::run(input_file, catalog, &output, out),
        Commands::Pages {
            input_file,
            catalog,
        } => commands::pages::run(input_file, catalog),
        Commands::Catalog { action } => match action {
            CatalogAction::Show => commands::catalog::show(),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
