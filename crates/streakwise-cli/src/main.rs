use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "streakwise", version, about = "Streakwise habit tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory with an example habits file
    Init,
    /// Habit graphs and the daily score
    Log(commands::log::LogArgs),
    /// Per-habit statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Habits still missing an entry
    Todo {
        /// Look back this many days before today
        #[arg(long, default_value_t = 2)]
        days: u32,
    },
    /// Record a result for a habit
    Record(commands::record::RecordArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "streakwise=warn,streakwise_core=warn".into()),
    );

    // stdout carries graphs and JSON
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Log(args) => commands::log::run(args).await,
        Commands::Stats { json } => commands::stats::run(json),
        Commands::Todo { days } => commands::todo::run(days),
        Commands::Record(args) => commands::record::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
