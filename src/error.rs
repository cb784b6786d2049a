//! Error handling stuff
use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Error type for [`crate::pwm`]
#[derive(Debug, Display, Error)]
pub enum PwmError {
    /// Channel 0 on chip {0} is not exported
    NotExported(u16),

    /// Couldn't open `{0}`: {1}
    Open(PathBuf, #[source] io::Error),

    /// Couldn't write to `{0}`: {1}
    Write(PathBuf, #[source] io::Error),

    /// Couldn't close `{0}`: {1}
    Close(PathBuf, #[source] io::Error),
}
