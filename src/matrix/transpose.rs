use ndarray::Zip;

use crate::matrix::DenseMatrix;

/// Write the transpose of the square matrix `src` into `dst`.
///
/// `dst` must already have the same shape as `src`. The borrows rule out
/// `dst` and `src` aliasing the same storage.
pub fn transpose(dst: &mut DenseMatrix, src: &DenseMatrix) {
    assert!(src.is_square(), "transpose requires a square matrix, got {} x {}", src.rows(), src.cols());
    assert!(dst.shape() == src.shape(), "dst must be {} x {}, got {} x {}",
        src.rows(), src.cols(), dst.rows(), dst.cols());

    Zip::from(dst.data_mut()).and(src.view().reversed_axes()).for_each(|d, &s| *d = s);
}

impl DenseMatrix {
    /// Allocate and return the transpose of a square matrix.
    pub fn transposed(&self) -> DenseMatrix {
        let mut dst = DenseMatrix::allocate(self.cols(), self.rows());
        transpose(&mut dst, self);
        dst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_swaps_indices() {
        let src = DenseMatrix::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
        ]).unwrap();
        let mut dst = DenseMatrix::allocate(3, 3);
        transpose(&mut dst, &src);

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dst.get(i, j), src.get(j, i));
            }
        }
        assert_eq!(dst.row(0).to_vec(), vec![1, 4, 7]);
    }

    #[test]
    fn transpose_overwrites_existing_contents() {
        let src = DenseMatrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        let mut dst = DenseMatrix::from_rows(vec![vec![9, 9], vec![9, 9]]).unwrap();
        transpose(&mut dst, &src);
        assert_eq!(dst, DenseMatrix::from_rows(vec![vec![0, 0], vec![1, 0]]).unwrap());
    }

    #[test]
    fn double_transpose_is_identity() {
        let a = DenseMatrix::from_rows(vec![
            vec![0, 1, 0, 2],
            vec![0, 0, 1, 0],
            vec![3, 0, 0, 1],
            vec![1, 1, 0, 0],
        ]).unwrap();
        assert_eq!(a.transposed().transposed(), a);
    }

    #[test]
    fn empty_matrix_transposes_to_empty() {
        let a = DenseMatrix::allocate(0, 0);
        assert_eq!(a.transposed().shape(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "transpose requires a square matrix")]
    fn transpose_panics_on_non_square_input() {
        let src = DenseMatrix::allocate(2, 3);
        let mut dst = DenseMatrix::allocate(3, 2);
        transpose(&mut dst, &src);
    }

    #[test]
    #[should_panic(expected = "dst must be 2 x 2")]
    fn transpose_panics_on_mismatched_dst() {
        let src = DenseMatrix::allocate(2, 2);
        let mut dst = DenseMatrix::allocate(3, 3);
        transpose(&mut dst, &src);
    }
}
