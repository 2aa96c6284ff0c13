//! Error types for Emberglow core.

use std::fmt;

use crate::object::ObjectError;

/// The main error type for Emberglow core operations.
#[derive(Debug)]
pub enum GlowError {
    /// Timer-related error.
    Timer(TimerError),
    /// Object-related error.
    Object(ObjectError),
}

impl fmt::Display for GlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timer(err) => write!(f, "Timer error: {err}"),
            Self::Object(err) => write!(f, "Object error: {err}"),
        }
    }
}

impl std::error::Error for GlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Timer(err) => Some(err),
            Self::Object(err) => Some(err),
        }
    }
}

/// Timer-specific errors.
#[derive(Debug)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    InvalidTimerId,
    /// The global timer manager has not been initialized.
    ManagerNotInitialized,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimerId => write!(f, "Invalid or expired timer ID"),
            Self::ManagerNotInitialized => {
                write!(f, "Timer manager not initialized. Call init_global_timers() first")
            }
        }
    }
}

impl std::error::Error for TimerError {}

impl From<TimerError> for GlowError {
    fn from(err: TimerError) -> Self {
        Self::Timer(err)
    }
}

impl From<ObjectError> for GlowError {
    fn from(err: ObjectError) -> Self {
        Self::Object(err)
    }
}

/// A specialized Result type for Emberglow core operations.
pub type Result<T> = std::result::Result<T, GlowError>;
