mod cli;
mod domain;
mod errors;
mod prelude;
pub mod storage;

use crate::errors::AppError;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();

    cli::run_app()
}
