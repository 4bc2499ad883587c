//! Shape validation utilities for matrix operations
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are mathematical checks on dimensions and indices; every
//! fallible container operation funnels its shape requirement through one
//! of them.

pub mod shape;

pub use shape::{
    validate_data_length, validate_index, validate_inner_dim, validate_same_shape,
    validate_square,
};
