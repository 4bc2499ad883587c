#![no_std]

//! Matlib Core - Dense Matrix Container Definitions
//!
//! This crate provides the generic dense matrix container, element
//! capability traits, and pure shape validation. No I/O, no std.

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use validation::*;
