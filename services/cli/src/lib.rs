mod cli;
mod scan;

use philo_census::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
