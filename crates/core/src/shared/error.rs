use thiserror::Error;

/// Precondition failures of the placement calculator.
///
/// Finding no face is not an error; it is reported as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
