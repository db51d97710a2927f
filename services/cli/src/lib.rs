mod cli;
mod commands;
mod demo;
mod infra;

use leads_navigator::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
