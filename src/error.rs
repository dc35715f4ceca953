use structopt::clap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Generic(String),
}

impl From<clap::Error> for SimError {
    fn from(error: clap::Error) -> Self {
        SimError::Generic(error.to_string())
    }
}
