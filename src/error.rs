use std::fmt;

/// Errors surfaced by the visibility engine and its I/O boundary.
///
/// There is no recoverable path: any of these aborts the run. The
/// computation is deterministic, so a caller that wants a retry simply
/// reruns the whole pass.
#[derive(Debug)]
pub enum VisError {
    /// Fatal pre-run validation failure: malformed grid dimensions,
    /// ragged rows, worker count below 1, or coordinates outside the grid.
    Config(String),
    /// A defect in partitioning or aggregation (duplicate or missing key,
    /// stray partial result). Should never occur on a correct build.
    Invariant(String),
    /// A worker terminated abnormally; the partial map is discarded.
    Worker(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
}

impl fmt::Display for VisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisError::Config(msg) => write!(f, "configuration error: {}", msg),
            VisError::Invariant(msg) => write!(f, "invariant violation: {}", msg),
            VisError::Worker(msg) => write!(f, "worker failure: {}", msg),
            VisError::Io(e) => write!(f, "io error: {}", e),
            VisError::Json(e) => write!(f, "json error: {}", e),
            VisError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for VisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisError::Io(e) => Some(e),
            VisError::Json(e) => Some(e),
            VisError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VisError {
    fn from(e: std::io::Error) -> Self {
        VisError::Io(e)
    }
}

impl From<serde_json::Error> for VisError {
    fn from(e: serde_json::Error) -> Self {
        VisError::Json(e)
    }
}

impl From<image::ImageError> for VisError {
    fn from(e: image::ImageError) -> Self {
        VisError::Image(e)
    }
}
