//! jetbrains-projects: recently opened JetBrains IDE projects for app launchers
//!
//! This tool is not affiliated with or endorsed by JetBrains s.r.o.
//! It only reads locally stored IDE configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

use jetbrains_projects::config::Config;
use jetbrains_projects::jetbrains::load_product;
use jetbrains_projects::logging;

mod commands;

#[derive(Parser)]
#[command(name = "jetbrains-projects")]
#[command(
    about = "Work with recent projects in JetBrains IDEs",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent projects from an IDE as Alfred script filter JSON
    Ls {
        /// The keyword of the application, e.g. pycharm
        app_keyword: String,

        /// The query from Alfred
        #[arg(default_value = "")]
        query: String,
    },

    /// Open an IDE
    Open {
        /// The keyword of the application
        app_keyword: String,

        /// Optional arguments to pass when opening the app, e.g. a project path
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show recent projects in a table
    List {
        /// Only this application (all installed IDEs if omitted)
        app_keyword: Option<String>,

        /// Filter by name, path or initials
        #[arg(long, short)]
        filter: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the IDEs this tool knows about
    Products,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = Config::load();

    match cli.command {
        Commands::Ls { app_keyword, query } => {
            let output = commands::ls::execute(&app_keyword, &query, &config)?;
            // Alfred reads the whole of stdout as JSON
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }

        Commands::Open { app_keyword, args } => {
            let product = load_product(&app_keyword, &config)?;
            commands::open::execute(&product, &args)?;
        }

        Commands::List {
            app_keyword,
            filter,
            limit,
            json,
        } => {
            let options = commands::list::ListOptions {
                keyword: app_keyword,
                filter,
                limit,
                json,
            };
            let output = commands::list::execute(options, &config)?;
            println!("{}", output);
        }

        Commands::Products => {
            println!("{}", commands::products::execute(&config)?);
        }
    }

    Ok(())
}
