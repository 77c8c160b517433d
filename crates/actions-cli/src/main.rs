mod cmd;
mod config_path;
mod output;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actions-demo",
    about = "Invoke demo actions by name and report their log output and outcome",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: nearest actions-demo.yaml, walking upward)
    #[arg(long, global = true, env = "ACTIONS_DEMO_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available actions
    List,

    /// Show the parameter schema of an action
    Describe {
        /// Action name (e.g. multi-input)
        action: String,
    },

    /// Invoke an action once
    Run {
        /// Action name (e.g. combo)
        action: String,

        /// Parameter as KEY=VALUE (repeatable)
        #[arg(long = "param", short = 'p', value_name = "KEY=VALUE")]
        param: Vec<String>,

        /// Parameters as a JSON object; --param values override these
        #[arg(long, value_name = "JSON")]
        params: Option<String>,
    },

    /// Serve invocations as JSON lines on stdin/stdout
    Serve,

    /// Inspect and validate the config
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = config_path::resolve_config_path(cli.config.as_deref());

    let result = match cli.command {
        Commands::List => cmd::list::run(&config_path, cli.json),
        Commands::Describe { action } => cmd::describe::run(&config_path, &action, cli.json),
        Commands::Run {
            action,
            param,
            params,
        } => cmd::run::run(&config_path, &action, &param, params.as_deref(), cli.json),
        Commands::Serve => cmd::serve::run(&config_path),
        Commands::Config { subcommand } => cmd::config::run(&config_path, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
