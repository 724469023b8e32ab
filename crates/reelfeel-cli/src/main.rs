use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{analyze, config, interactive};
use diary_sentiment_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelfeel")]
#[command(about = "ReelFeel - How do your film diary reviews feel?")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the reviews in a user's film diary
    #[command(long_about = "Fetch a user's diary feed (or read a saved JSON diary with --file), score every review and the combined text for sentiment, and rank the most used words.")]
    Analyze {
        /// Diary username to fetch
        #[arg(required_unless_present = "file")]
        username: Option<String>,

        /// Read diary entries from a JSON file instead of the feed
        #[arg(long, value_name = "PATH", conflicts_with = "username")]
        file: Option<PathBuf>,

        /// Also write the ranked word cloud to this CSV file
        #[arg(long, value_name = "PATH")]
        word_cloud_csv: Option<PathBuf>,

        /// Keep only the top N words of the word cloud
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Analyze usernames read line by line from stdin
    #[command(long_about = "Read usernames from stdin, one per line. Every line starts a new analysis and supersedes the one still running, so only the result for the most recent username is shown.")]
    Interactive {
        /// Read diary entries from a JSON file instead of the feed
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_file = match cli.config.clone() {
        Some(path) => path,
        None => PathManager::new().map_err(|e| eyre!("{}", e))?.config_file(),
    };
    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    logging::init_logging_with_file(cli.verbose, cli.quiet, config.logging.file.clone())
        .map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Analyze {
            username,
            file,
            word_cloud_csv,
            limit,
        } => analyze::run_analyze(config, username, file, word_cloud_csv, limit, &output).await,
        Commands::Interactive { file } => interactive::run_interactive(config, file, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, config, &config_file, &output)
        }
    };

    if let Err(e) = result {
        output.error(e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
