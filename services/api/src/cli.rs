use crate::estimate::{run_estimate, run_rules, EstimateArgs, RulesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use toeslagen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Toeslagen estimator",
    about = "Serve and run the toeslagen eligibility engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate eligibility for a household described in a JSON file
    Estimate(EstimateArgs),
    /// Print the rules table for a program year as JSON
    Rules(RulesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Rules(args) => run_rules(args),
    }
}
