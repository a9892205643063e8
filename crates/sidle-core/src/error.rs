/// Fatal surface acquisition/attachment failures.
///
/// The drawer never retries these internally; they bubble out of the
/// operation that needed the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host has no content surface to push aside.
    MissingContent,
    /// The host failed to inflate the panel surface.
    Inflation { reason: &'static str },
    /// A surface could not be parented into the host window.
    Attach { reason: &'static str },
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::MissingContent => write!(f, "host window has no content surface"),
            SurfaceError::Inflation { reason } => {
                write!(f, "panel surface inflation failed: {reason}")
            }
            SurfaceError::Attach { reason } => write!(f, "surface attach failed: {reason}"),
        }
    }
}

impl std::error::Error for SurfaceError {}
