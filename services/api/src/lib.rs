//! Command-line entry point and HTTP wiring for the assessment service.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use spiritual_health::error::AppError;

/// Parses the command line and runs the selected command (`serve` by default).
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
