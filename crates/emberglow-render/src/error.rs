//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur during display-list recording.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The display list was taken while a frame was still being recorded.
    #[error("frame still in progress; call end_frame() before finish()")]
    FrameInProgress,

    /// `save()` calls were not balanced by `restore()` when the frame ended.
    #[error("unbalanced save/restore: {depth} state(s) left on the stack")]
    UnbalancedSave { depth: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
