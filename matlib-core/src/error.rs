//! Error types for matrix operations

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatError {
    /// Operand shapes are incompatible with the requested operation
    DimensionMismatch,
    /// Index out of bounds
    IndexOutOfBounds,
    /// Dimension product does not fit in usize
    SizeOverflow,
}

impl core::fmt::Display for MatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatError::DimensionMismatch => "There is no match between matrices dimensions",
            MatError::IndexOutOfBounds => "Index out of bounds",
            MatError::SizeOverflow => "Matrix dimensions overflow usize",
        };
        write!(f, "{msg}")
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatError>;
