mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use toolswitch_config::{DISABLED_TOOLS_VAR, EnvFile, Layered, ProcessEnv, ToolFilter};

#[derive(Parser)]
#[command(name = "toolswitch", about = "Inspect which tools are disabled by configuration")]
struct Cli {
    /// Dotenv file whose values override the process environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Variable holding the comma-separated disabled tool list
    #[arg(long, global = true, default_value = DISABLED_TOOLS_VAR)]
    var: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List disabled tools, one per line
    List,
    /// Report whether each named tool is enabled (exits 1 if any is disabled)
    Check {
        /// Tool names to check
        #[arg(required = true)]
        names: Vec<String>,

        /// Print a JSON array instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let env_file = match &cli.env_file {
        Some(path) => toolswitch_config::load_env_file(path)
            .with_context(|| format!("failed to load env file {}", path.display()))?,
        None => EnvFile::default(),
    };
    let filter = ToolFilter::new(Layered::new(env_file, ProcessEnv)).with_var(cli.var);

    match cli.command {
        Commands::List => {
            let names = report::sorted_disabled(&filter);
            if names.is_empty() {
                tracing::info!("No tools disabled via {}", filter.var_name());
            }
            for name in names {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { names, json } => {
            let statuses = report::check(&filter, &names);
            if json {
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            } else {
                for status in &statuses {
                    println!("{status}");
                }
            }

            Ok(report::exit_code(&statuses))
        }
    }
}
