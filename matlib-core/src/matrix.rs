//! Generic dense matrix container
//!
//! This module provides [`Matrix<T>`], a dense 2D container with row-major
//! storage. Every fallible operation returns a [`Result`] rather than
//! panicking; shape requirements are checked by the pure functions in
//! [`crate::validation`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::Element;
use crate::validation::{
    validate_data_length, validate_index, validate_inner_dim, validate_same_shape,
    validate_square,
};
use crate::{MatError, Result};

/// Dense 2D matrix with row-major storage
///
/// The element at logical position (i, j) lives at linear index
/// `i * cols + j` in a single contiguous buffer. Each instance owns its
/// buffer exclusively; `Clone` duplicates it, so no two matrices ever
/// alias.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix<T>"))]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unvalidated mirror of [`Matrix`] used during deserialization
///
/// Deserialized input goes through [`Matrix::from_vec`], so a payload
/// whose buffer length disagrees with its declared dimensions is rejected
/// instead of producing a matrix that violates the storage invariant.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = MatError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl<T> Matrix<T> {
    /// Create a matrix adopting `data` as its row-major storage
    ///
    /// # Errors
    ///
    /// Returns [`MatError::DimensionMismatch`](crate::MatError) if the
    /// buffer length does not equal `rows * cols`, or
    /// [`MatError::SizeOverflow`](crate::MatError) if that product does
    /// not fit in `usize`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        validate_data_length(rows, cols, data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Mutable reference to the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`MatError::IndexOutOfBounds`](crate::MatError) if
    /// `row >= rows` or `col >= cols`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        validate_index(self.rows, self.cols, row, col)?;
        Ok(&mut self.data[row * self.cols + col])
    }

    /// Overwrite the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`MatError::IndexOutOfBounds`](crate::MatError) if
    /// `row >= rows` or `col >= cols`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_index(self.rows, self.cols, row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Read-only iterator over the elements in row-major order
    ///
    /// The iterator is finite and restartable; calling `iter` again
    /// starts over from the first element.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The underlying row-major storage as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy> Matrix<T> {
    /// Create a matrix with every element set to `value`
    ///
    /// # Errors
    ///
    /// Returns [`MatError::SizeOverflow`](crate::MatError) if
    /// `rows * cols` does not fit in `usize`. Allocation failure follows
    /// the usual `Vec` convention and is not recovered.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = match rows.checked_mul(cols) {
            Some(len) => len,
            None => return Err(MatError::SizeOverflow),
        };

        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// The element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`MatError::IndexOutOfBounds`](crate::MatError) if
    /// `row >= rows` or `col >= cols`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        validate_index(self.rows, self.cols, row, col)?;
        Ok(self.data[row * self.cols + col])
    }
}

impl<T: Element> Matrix<T> {
    /// Create a zero-filled rows x cols matrix
    ///
    /// # Errors
    ///
    /// Returns [`MatError::SizeOverflow`](crate::MatError) if
    /// `rows * cols` does not fit in `usize`. Allocation failure follows
    /// the usual `Vec` convention and is not recovered.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::zero())
    }

    /// Element-wise sum, producing a new matrix of the same shape
    ///
    /// # Errors
    ///
    /// Returns [`MatError::DimensionMismatch`](crate::MatError) unless
    /// both operands have identical row and column counts.
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate_same_shape(self.rows, self.cols, other.rows, other.cols)?;

        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Element-wise difference, producing a new matrix of the same shape
    ///
    /// # Errors
    ///
    /// Returns [`MatError::DimensionMismatch`](crate::MatError) unless
    /// both operands have identical row and column counts.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        validate_same_shape(self.rows, self.cols, other.rows, other.cols)?;

        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Standard matrix product
    ///
    /// Triple-nested accumulation with the accumulator seeded at
    /// `T::zero()`. The operands are read fully and the result is written
    /// into a separate buffer, so no aliasing between operand and result
    /// can occur.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::DimensionMismatch`](crate::MatError) unless
    /// `self.cols() == other.rows()`, and
    /// [`MatError::SizeOverflow`](crate::MatError) if the result's
    /// dimension product does not fit in `usize`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate_inner_dim(self.cols, other.rows)?;

        let mut out = Self::zeros(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * other.cols + j] = acc;
            }
        }

        Ok(out)
    }

    /// Transpose of a square matrix
    ///
    /// Every element passes through [`Element::conjugate`] on the way to
    /// its transposed position. Real element types are self-conjugate, so
    /// they get the plain transpose; complex element types get the
    /// conjugate transpose (Hermitian adjoint). Conjugation is applied
    /// exactly once per call.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::DimensionMismatch`](crate::MatError) if the
    /// matrix is not square.
    pub fn transpose(&self) -> Result<Self> {
        validate_square(self.rows, self.cols)?;

        let mut out = Self::zeros(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j].conjugate();
            }
        }

        Ok(out)
    }
}

impl<T: Element> Default for Matrix<T> {
    /// The 1x1 zero matrix
    fn default() -> Self {
        Self {
            data: vec![T::zero()],
            rows: 1,
            cols: 1,
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Row-major text dump: tab after every element, one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{}\t", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_zeros_shape_and_contents() {
        let m: Matrix<i32> = Matrix::zeros(3, 4).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.shape(), (3, 4));
        assert!(m.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_default_is_one_by_one_zero() {
        let m: Matrix<f64> = Matrix::default();
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m.get(0, 0), Ok(0.0));
    }

    #[test]
    fn test_from_vec_adopts_row_major_data() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m.get(0, 2), Ok(3));
        assert_eq!(m.get(1, 0), Ok(4));
    }

    #[test]
    fn test_from_vec_rejects_length_mismatch() {
        assert_eq!(
            Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5]),
            Err(MatError::DimensionMismatch)
        );
        assert_eq!(
            Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6, 7]),
            Err(MatError::DimensionMismatch)
        );
    }

    #[test]
    fn test_filled() {
        let m = Matrix::filled(2, 2, 7).unwrap();
        assert_eq!(m.as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn test_constructors_reject_overflow() {
        assert_eq!(
            Matrix::<i32>::zeros(usize::MAX, 2),
            Err(MatError::SizeOverflow)
        );
        assert_eq!(
            Matrix::filled(usize::MAX, 2, 1),
            Err(MatError::SizeOverflow)
        );
    }

    #[test]
    fn test_get_bounds() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();

        for i in 0..2 {
            for j in 0..3 {
                assert!(m.get(i, j).is_ok());
            }
        }

        assert_eq!(m.get(2, 0), Err(MatError::IndexOutOfBounds));
        assert_eq!(m.get(0, 3), Err(MatError::IndexOutOfBounds));
        assert_eq!(m.get(2, 3), Err(MatError::IndexOutOfBounds));
    }

    #[test]
    fn test_set_and_get_mut() {
        let mut m: Matrix<i32> = Matrix::zeros(2, 2).unwrap();
        m.set(0, 1, 5).unwrap();
        assert_eq!(m.get(0, 1), Ok(5));

        *m.get_mut(1, 0).unwrap() = 9;
        assert_eq!(m.get(1, 0), Ok(9));

        assert_eq!(m.set(2, 0, 1), Err(MatError::IndexOutOfBounds));
        assert_eq!(
            m.get_mut(0, 2).map(|v| *v),
            Err(MatError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_equality_includes_shape() {
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let c = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let d = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 7]).unwrap();

        // reflexive and symmetric
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);

        // same buffer, different shape
        assert_ne!(a, c);
        // same shape, different elements
        assert_ne!(a, d);
    }

    #[test]
    fn test_add_elementwise() {
        let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![10, 20, 30, 40]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum, Matrix::from_vec(2, 2, vec![11, 22, 33, 44]).unwrap());
    }

    #[test]
    fn test_add_sub_shape_mismatch() {
        let a: Matrix<i32> = Matrix::zeros(2, 3).unwrap();
        let b: Matrix<i32> = Matrix::zeros(3, 2).unwrap();

        assert_eq!(a.add(&b), Err(MatError::DimensionMismatch));
        assert_eq!(a.sub(&b), Err(MatError::DimensionMismatch));
    }

    #[test]
    fn test_sub_round_trips_add() {
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Matrix::from_vec(2, 3, vec![9, 8, 7, 6, 5, 4]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.sub(&b).unwrap(), a);
    }

    #[test]
    fn test_mul_by_identity() {
        let eye = Matrix::from_vec(2, 2, vec![1, 0, 0, 1]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();

        assert_eq!(eye.mul(&b).unwrap(), b);
    }

    #[test]
    fn test_mul_row_by_column() {
        let row = Matrix::from_vec(1, 2, vec![2, 3]).unwrap();
        let col = Matrix::from_vec(2, 1, vec![4, 5]).unwrap();

        // 2*4 + 3*5 = 23
        let product = row.mul(&col).unwrap();
        assert_eq!(product, Matrix::from_vec(1, 1, vec![23]).unwrap());
    }

    #[test]
    fn test_mul_shape_rules() {
        let a: Matrix<i32> = Matrix::zeros(2, 3).unwrap();
        let b: Matrix<i32> = Matrix::zeros(3, 4).unwrap();
        let c: Matrix<i32> = Matrix::zeros(2, 4).unwrap();

        let product = a.mul(&b).unwrap();
        assert_eq!(product.shape(), (2, 4));

        assert_eq!(a.mul(&c), Err(MatError::DimensionMismatch));
    }

    #[test]
    fn test_transpose_square() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let t = m.transpose().unwrap();
        assert_eq!(t, Matrix::from_vec(2, 2, vec![1, 3, 2, 4]).unwrap());
    }

    #[test]
    fn test_transpose_rejects_non_square() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.transpose(), Err(MatError::DimensionMismatch));
    }

    #[test]
    fn test_transpose_is_involution_for_reals() {
        let m = Matrix::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(m.transpose().unwrap().transpose().unwrap(), m);
    }

    #[test]
    fn test_iteration_is_row_major_and_restartable() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();

        let collected: Vec<i32> = m.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);

        // a second traversal starts over
        let again: Vec<i32> = (&m).into_iter().copied().collect();
        assert_eq!(again, collected);
    }

    #[test]
    fn test_is_square() {
        let square: Matrix<i32> = Matrix::zeros(2, 2).unwrap();
        let wide: Matrix<i32> = Matrix::zeros(2, 3).unwrap();

        assert!(square.is_square());
        assert!(!wide.is_square());
    }

    #[test]
    fn test_display_tab_separated_rows() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.to_string(), "1\t2\t\n3\t4\t\n");
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let mut a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = a.clone();

        a.set(0, 0, 99).unwrap();
        assert_eq!(b.get(0, 0), Ok(1));
    }

    #[cfg(feature = "serde")]
    mod serde_io {
        use super::*;

        #[test]
        fn test_deserialize_rejects_length_mismatch() {
            // a 2x3 matrix with a single stored element must not come to life
            let err = serde_json::from_str::<Matrix<i32>>(r#"{"data":[1],"rows":2,"cols":3}"#)
                .unwrap_err();
            assert!(err
                .to_string()
                .contains("no match between matrices dimensions"));
        }

        #[test]
        fn test_deserialize_round_trip() {
            let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();

            let json = serde_json::to_string(&m).unwrap();
            let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
            assert_eq!(back, m);
            assert_eq!(back.get(1, 2), Ok(6));
        }
    }

    #[cfg(feature = "complex")]
    mod complex {
        use super::*;
        use num_complex::Complex;

        fn c(re: f64, im: f64) -> Complex<f64> {
            Complex::new(re, im)
        }

        #[test]
        fn test_transpose_conjugates_exactly_once() {
            let m = Matrix::from_vec(
                2,
                2,
                vec![c(1.0, 2.0), c(3.0, -4.0), c(5.0, 6.0), c(7.0, 0.0)],
            )
            .unwrap();

            // conjugate transpose: element (i, j) is conj of source (j, i)
            let t = m.transpose().unwrap();
            assert_eq!(
                t,
                Matrix::from_vec(
                    2,
                    2,
                    vec![c(1.0, -2.0), c(5.0, -6.0), c(3.0, 4.0), c(7.0, 0.0)],
                )
                .unwrap()
            );

            // applying it twice undoes both the move and the conjugation
            assert_eq!(t.transpose().unwrap(), m);
        }

        #[test]
        fn test_complex_arithmetic() {
            let a = Matrix::from_vec(1, 2, vec![c(1.0, 1.0), c(2.0, 0.0)]).unwrap();
            let b = Matrix::from_vec(2, 1, vec![c(0.0, 1.0), c(1.0, 0.0)]).unwrap();

            // (1+i)*i + 2*1 = i - 1 + 2 = 1 + i
            let product = a.mul(&b).unwrap();
            assert_eq!(product.get(0, 0), Ok(c(1.0, 1.0)));
        }
    }
}
