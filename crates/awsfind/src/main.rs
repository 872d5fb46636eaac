mod commands;

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "awsfind")]
#[command(
    about = "Find EC2 instances and IAM access-key owners across many AWS accounts",
    long_about = None
)]
struct Cli {
    /// Path to the YAML account store (default: aws-accounts.yaml)
    #[arg(long, global = true, env = "AWSFIND_CONFIG")]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an AWS account
    Add {
        /// Account name (must be unique)
        #[arg(long)]
        account_name: String,
        /// Access key id
        #[arg(long)]
        access_key: String,
        /// Secret access key
        #[arg(long)]
        secret_key: String,
        /// Comma-separated regions to search
        #[arg(long, default_value = "us-east-1")]
        regions: String,
    },
    /// Remove an AWS account
    Remove {
        /// Account name
        #[arg(long)]
        account_name: String,
    },
    /// List configured accounts
    List,
    /// Search every account and region
    Find {
        /// Instance ID to search for
        #[arg(long, conflicts_with = "ip")]
        instance_id: Option<String>,
        /// IP address (private or public) to search for
        #[arg(long)]
        ip: Option<String>,
        /// Find the IAM user owning this access key (takes priority)
        #[arg(long, value_name = "ACCESS_KEY_ID")]
        iam: Option<String>,
        /// Stop at the first match
        #[arg(long, conflicts_with = "scan_all")]
        first_match: bool,
        /// Report matches from every account and region
        #[arg(long)]
        scan_all: bool,
        /// Follow paginated listings instead of reading only the first page
        #[arg(long)]
        all_pages: bool,
    },
    /// Show version information
    Version,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Version needs no account store
    if matches!(cli.command, Commands::Version) {
        println!("awsfind {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let store = commands::open_store(cli.config)?;

    match cli.command {
        Commands::Add {
            account_name,
            access_key,
            secret_key,
            regions,
        } => {
            commands::add::handle(&store, account_name, access_key, secret_key, &regions)?;
        }
        Commands::Remove { account_name } => {
            commands::remove::handle(&store, &account_name)?;
        }
        Commands::List => {
            commands::list::handle(&store)?;
        }
        Commands::Find {
            instance_id,
            ip,
            iam,
            first_match,
            scan_all,
            all_pages,
        } => {
            let request = commands::find::FindRequest {
                instance_id,
                ip,
                iam,
                first_match,
                scan_all,
                all_pages,
            };
            commands::find::handle(&store, request).await?;
        }
        Commands::Version => {
            unreachable!("Version is handled before opening the store");
        }
    }

    Ok(())
}
