use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tintwork error: {0}")]
    Tintwork(#[from] tintwork::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("part has no light component")]
    NoLight,
}

impl From<tintwork::ParseError> for Error {
    fn from(err: tintwork::ParseError) -> Self {
        Self::Tintwork(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
