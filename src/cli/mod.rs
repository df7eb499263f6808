mod args;
mod config;
mod global;
mod handlers;
mod logging;

use clap::{Parser, Subcommand};

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base-rc")]
#[command(version)]
#[command(about = "Range-coded base-N encoder: binary data as text over any alphabet of 2 to 256 symbols", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data as text
    Encode(EncodeArgs),

    /// Decode text back to binary data
    Decode(DecodeArgs),

    /// Inspect the available dictionaries
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.global);

    // Load dictionaries configuration with user overrides
    let config = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Config { action } => handlers::config::handle(action, &config),
    }
}
