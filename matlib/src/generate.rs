//! Matrix generators for drivers and benchmarks

use matlib_core::{Matrix, Result};
use rand::Rng;

/// Generate a rows x cols matrix with uniform random elements in [-1, 1)
///
/// This is the random fill used by the timing driver and the benches.
/// Callers control determinism through the supplied generator (for
/// example a seeded `StdRng`).
///
/// # Errors
///
/// Returns [`MatError::SizeOverflow`](matlib_core::MatError) if
/// `rows * cols` does not fit in `usize`.
pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix<f64>> {
    let mut m = Matrix::zeros(rows, cols)?;
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, rng.gen_range(-1.0..1.0))?;
        }
    }

    Ok(m)
}
