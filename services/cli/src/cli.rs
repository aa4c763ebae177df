use crate::scan::{run_scan, ScanArgs};
use clap::{Parser, Subcommand};
use philo_census::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "philo-census",
    about = "Count the philosophers named in a video channel's titles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List channel titles and report the philosophers they name (default command)
    Scan(ScanArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Scan(ScanArgs::default()));

    match command {
        Command::Scan(args) => run_scan(args).await,
    }
}
