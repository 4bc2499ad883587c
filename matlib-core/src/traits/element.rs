//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements and used in matrix arithmetic.

use core::ops::{Add, AddAssign, Mul, Sub};

/// Trait for types that can be used as matrix elements
///
/// This trait defines the requirements for types that participate in
/// matrix arithmetic. All element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Closed under addition, subtraction, and multiplication
/// - Sized: Have a known size at compile time
pub trait Element:
    Copy
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Sized
{
    /// The additive identity of this element type
    ///
    /// Used to zero-fill new matrices and to seed the accumulator in
    /// matrix multiplication.
    fn zero() -> Self;

    /// The complex conjugate of this element
    ///
    /// Real types are their own conjugate, so the default returns the
    /// value unchanged. Types with a non-trivial conjugation override
    /// this, which makes [`Matrix::transpose`](crate::Matrix::transpose)
    /// produce the conjugate transpose instead of the plain transpose.
    fn conjugate(self) -> Self {
        self
    }
}

// Implement Element for standard numeric types

impl Element for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Element for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Element for i32 {
    fn zero() -> Self {
        0
    }
}

impl Element for i64 {
    fn zero() -> Self {
        0
    }
}

impl Element for u32 {
    fn zero() -> Self {
        0
    }
}

impl Element for u64 {
    fn zero() -> Self {
        0
    }
}

#[cfg(feature = "complex")]
impl Element for num_complex::Complex<f32> {
    fn zero() -> Self {
        num_complex::Complex::new(0.0, 0.0)
    }

    fn conjugate(self) -> Self {
        self.conj()
    }
}

#[cfg(feature = "complex")]
impl Element for num_complex::Complex<f64> {
    fn zero() -> Self {
        num_complex::Complex::new(0.0, 0.0)
    }

    fn conjugate(self) -> Self {
        self.conj()
    }
}
