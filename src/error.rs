use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PomodoroError {
    #[error("invalid whole number {input:?} for \"{prompt}\": {source}")]
    Parse {
        prompt: String,
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("input ended before answering \"{prompt}\"")]
    UnexpectedEof { prompt: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the sound port. The session runner logs and drops these.
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("failed to start sound player {player}: {source}")]
    Spawn {
        player: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to ring terminal bell: {0}")]
    Bell(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("notification delivery failed: {0}")]
pub struct NotifyError(pub String);
