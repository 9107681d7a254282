use std::path::PathBuf;

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Scenario error: {0}")]
    Tank(#[from] qf_tank::TankError),

    #[error("Envisionment failed: {0}")]
    Envision(#[from] qf_envision::EnvisionError),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
