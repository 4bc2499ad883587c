//! Dimension and bounds validation for dense matrix operations
//!
//! Pure mathematical checks with overflow protection and no I/O.

use crate::MatError;

/// Validate that a buffer length matches the declared dimensions
///
/// Rejects dimension pairs whose product overflows `usize` before
/// comparing against the buffer length.
pub const fn validate_data_length(
    rows: usize,
    cols: usize,
    len: usize,
) -> Result<(), MatError> {
    let expected = match rows.checked_mul(cols) {
        Some(n) => n,
        None => return Err(MatError::SizeOverflow),
    };

    if len != expected {
        return Err(MatError::DimensionMismatch);
    }

    Ok(())
}

/// Validate an element position against matrix bounds
///
/// Indices are unsigned, so only the upper bound can be violated.
pub const fn validate_index(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> Result<(), MatError> {
    if row >= rows || col >= cols {
        return Err(MatError::IndexOutOfBounds);
    }

    Ok(())
}

/// Validate that two operands have identical shape
///
/// Element-wise operations (addition, subtraction) require both row and
/// column counts to agree.
pub const fn validate_same_shape(
    lhs_rows: usize,
    lhs_cols: usize,
    rhs_rows: usize,
    rhs_cols: usize,
) -> Result<(), MatError> {
    if lhs_rows != rhs_rows || lhs_cols != rhs_cols {
        return Err(MatError::DimensionMismatch);
    }

    Ok(())
}

/// Validate the inner dimensions of a matrix product
///
/// The left operand's column count must equal the right operand's row
/// count.
pub const fn validate_inner_dim(lhs_cols: usize, rhs_rows: usize) -> Result<(), MatError> {
    if lhs_cols != rhs_rows {
        return Err(MatError::DimensionMismatch);
    }

    Ok(())
}

/// Validate that a matrix is square
///
/// Transposition is only defined for square matrices in this container.
pub const fn validate_square(rows: usize, cols: usize) -> Result<(), MatError> {
    if rows != cols {
        return Err(MatError::DimensionMismatch);
    }

    Ok(())
}
