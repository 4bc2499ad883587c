//! Wall-clock timing utilities for the driver

use std::time::{Duration, Instant};

/// Stack-based tic/toc timer
///
/// [`tic`](TicToc::tic) pushes the current instant; [`toc`](TicToc::toc)
/// pops the most recent one and returns the elapsed time. Pushes and pops
/// nest, so inner measurements can run inside outer ones.
#[derive(Debug, Default)]
pub struct TicToc {
    stack: Vec<Instant>,
}

impl TicToc {
    /// Create an empty timer
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Start a measurement
    pub fn tic(&mut self) {
        self.stack.push(Instant::now());
    }

    /// Finish the most recent measurement
    ///
    /// Returns `None` when there is no matching `tic`.
    pub fn toc(&mut self) -> Option<Duration> {
        self.stack.pop().map(|start| start.elapsed())
    }

    /// Number of measurements currently in flight
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
