use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use roster::commands::{
    LsOptions, SourceOptions, cmd_config_path, cmd_config_show, cmd_ls, cmd_view,
};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Terminal admin dashboard for member lists")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Feed location and paging flags shared by `view` and `ls`
#[derive(clap::Args, Debug, Default)]
struct SourceArgs {
    /// Feed URL (overrides config and ROSTER_FEED_URL)
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Read records from a local JSON file instead of the network
    #[arg(long)]
    file: Option<PathBuf>,

    /// Rows per page
    #[arg(long, value_parser = parse_page_size)]
    page_size: Option<usize>,
}

impl From<SourceArgs> for SourceOptions {
    fn from(args: SourceArgs) -> Self {
        SourceOptions {
            url: args.url,
            file: args.file,
            page_size: args.page_size,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit members interactively (default)
    #[command(visible_alias = "v")]
    View {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print one page of members
    Ls {
        #[command(flatten)]
        source: SourceArgs,

        /// Case-insensitive search over id, name, email and role
        #[arg(short, long)]
        query: Option<String>,

        /// Page to print (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("Page size must be a positive integer".to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    roster::logging::init();

    let result = match cli.command.unwrap_or(Commands::View {
        source: SourceArgs::default(),
    }) {
        Commands::View { source } => cmd_view(source.into()).await,
        Commands::Ls {
            source,
            query,
            page,
            json,
        } => {
            cmd_ls(LsOptions {
                source: source.into(),
                query,
                page,
                json,
            })
            .await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Path => cmd_config_path(),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
