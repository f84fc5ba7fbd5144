mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use contact_cleaner::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
