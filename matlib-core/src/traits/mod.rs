//! Abstract interfaces for matrix elements
//!
//! This module defines the trait abstractions the container is generic
//! over. Traits describe capabilities - the container never inspects
//! concrete element types.

pub mod element;

pub use element::Element;
