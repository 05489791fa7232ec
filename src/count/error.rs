use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `stop` was called before a successful `start`.
    #[error("counter group was not started")]
    NotStarted,

    /// `start` was called on a stopped session, its descriptors are gone.
    #[error("counter group was already stopped")]
    Stopped,

    /// The counter at `index` (0 is the leader) could not be opened.
    #[error("failed to open counter {index}")]
    OpenFailed {
        index: usize,
        #[source]
        source: io::Error,
    },

    /// Enabling, disabling or resetting the group failed.
    #[error("failed to control counter group")]
    ControlFailed(#[source] io::Error),

    /// The grouped read on the leader failed.
    #[error("failed to read counter group")]
    ReadFailed(#[source] io::Error),

    /// The grouped read returned fewer records than counters requested.
    #[error("corrupt group read: expected {expected} records, got {got}")]
    Corrupt { expected: usize, got: usize },
}

impl Error {
    /// Returns the OS error code carried by this error, if any.
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::OpenFailed { source, .. }
            | Error::ControlFailed(source)
            | Error::ReadFailed(source) => source.raw_os_error(),
            Error::NotStarted | Error::Stopped | Error::Corrupt { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
