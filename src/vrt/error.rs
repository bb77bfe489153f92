use thiserror::Error;

#[derive(Error, Debug)]
pub enum VrtError {
    #[error("could not parse line {0:?}")]
    MalformedLine(String),

    #[error("sentence contains no token lines")]
    EmptySentence,

    #[error("no <{0}> regions found")]
    NoSentenceFound(String),

    #[error("invalid token class: {0:?}")]
    UnknownTokenClass(String),

    #[error("invalid region tag: {0}")]
    Pattern(#[from] regex::Error),
}
