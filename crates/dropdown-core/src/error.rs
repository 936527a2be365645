use thiserror::Error;

/// A focus surface could not bring an option row into view.
///
/// Never surfaced to the caller of the controller: the focus step logs it and
/// moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("option panel is not mounted")]
    NotMounted,
    #[error("option {index} is out of range ({len} rows)")]
    OutOfRange { index: usize, len: usize },
}
