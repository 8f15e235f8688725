use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No transparent region was found, or it collapsed to a line or point.
    #[error("degenerate region: detected rectangle is {width}x{height} pixels")]
    DegenerateRegion { width: i64, height: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
