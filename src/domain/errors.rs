use derive_more::Display;

/// Failure of a single backend price fetch. Caught at the spawn site, logged
/// and swallowed; it never reaches the render tree.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "transport error: {}", _0)]
    Transport(String),
    #[display(fmt = "HTTP status {}", _0)]
    Status(u16),
    #[display(fmt = "malformed payload: {}", _0)]
    Decode(String),
    #[display(fmt = "request timed out")]
    Timeout,
}

impl std::error::Error for FetchError {}

/// Canvas-side failure while painting a chart.
#[derive(Debug, Clone, Display)]
pub enum RenderError {
    #[display(fmt = "canvas error: {}", _0)]
    Canvas(String),
}

impl std::error::Error for RenderError {}

// Simple convenience type aliases
pub type FetchResult<T> = Result<T, FetchError>;
pub type RenderResult<T> = Result<T, RenderError>;
