//! Matlib - Generic Dense Matrix Library
//!
//! This library provides a generic dense matrix container with element-wise
//! and product arithmetic, conjugate-aware transposition, and bounds-checked
//! access, plus the std-side utilities around it.
//!
//! ## Architecture
//!
//! Matlib follows a clean specification/implementation separation:
//!
//! - **matlib-core**: Pure container, element traits, and shape validation (no_std)
//! - **matlib**: Matrix generation, wall-clock timing, drivers, and benchmarks
//!
//! ## Quick Start
//!
//! ```rust
//! use matlib::{MatError, Matrix};
//!
//! fn example() -> Result<(), MatError> {
//!     let a = Matrix::from_vec(2, 2, vec![1, 0, 0, 1])?;
//!     let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8])?;
//!
//!     // Multiplying by the identity returns the operand
//!     assert_eq!(a.mul(&b)?, b);
//!
//!     // Transposition is square-only and bounds are always checked
//!     assert!(b.transpose().is_ok());
//!     assert!(b.get(2, 0).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Value semantics**: Cloning duplicates storage; matrices never alias
//! - **Conjugate transpose**: Complex elements are conjugated during transpose
//! - **Explicit errors**: Every shape violation surfaces as a `Result`
//! - **no_std core**: The container itself needs only `alloc`

// Re-export core abstractions and the container
pub use matlib_core::{
    // Container
    Matrix,
    // Element capability
    Element,
    // Error handling
    MatError, Result,
    // Validation utilities
    validate_data_length, validate_index, validate_inner_dim, validate_same_shape,
    validate_square,
};

// Implementation modules
pub mod generate;
pub mod timing;

// Public exports
pub use generate::random;
pub use timing::TicToc;
