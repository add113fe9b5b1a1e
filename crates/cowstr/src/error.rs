use thiserror::Error;

/// Allocation failure for a computed buffer size.
///
/// Raised by every operation that has to obtain fresh backing storage:
/// construction, assignment, appending, formatting, case folding, trimming
/// copies, splitting, joining. Callers generally treat it as fatal; nothing
/// in this crate recovers from it locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot allocate {bytes} bytes of string storage")]
pub struct OomError {
    bytes: usize,
}

impl OomError {
    pub(crate) fn new(bytes: usize) -> Self {
        Self { bytes }
    }

    /// Size of the request the allocator refused.
    #[must_use]
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

/// Errors surfaced by the file and OS collaborators.
///
/// I/O failures carry the OS error description untouched; they are never
/// converted into truncated or partial content.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    OutOfMemory(#[from] OomError),

    /// The handle is closed, or was opened in the wrong mode for the call.
    #[error("file is not open")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
