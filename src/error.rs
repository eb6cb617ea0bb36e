use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("'{0}' not found in the catalog")]
    NotFound(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Malformed record for '{0}': {1}")]
    BadRecord(String, String),

    #[error("Team is full ({0} members)")]
    TeamFull(usize),

    #[error("Team is empty")]
    EmptyTeam,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

impl From<ron::Error> for Error {
    fn from(e: ron::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
