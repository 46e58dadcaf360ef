use tabula_core::Failure;
use tabula_sheet::SheetError;
use thiserror::Error;

/// User-facing failures of the edit commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Invalid cell range: '{0}'")]
    InvalidCellRange(String),
    #[error("The cut buffer is empty")]
    EmptyCutBuffer,
}

impl EditError {
    /// Collapse any sheet rejection of `address` into one error.
    pub(crate) fn from_sheet(address: &str, err: SheetError) -> Failure<Self> {
        match err {
            SheetError::RangeOutOfBounds(_) | SheetError::UnrecognizedCoords(_) => {
                tracing::debug!(address, reason = %err, "Address rejected by sheet");
                Failure::Command(Self::InvalidCellRange(address.to_string()))
            }
        }
    }
}
