use ndarray::{Array2, ArrayView1, ArrayView2};

/// A dense, row-major grid of integer entries.
///
/// Entry `(i, j)` lives at offset `i * cols + j` of a single contiguous buffer.
/// The matrix is exclusively owned; dropping it (or calling [`DenseMatrix::release`])
/// frees the whole buffer at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenseMatrix {
    data: Array2<i64>,
}

impl DenseMatrix {
    /// Allocate a zero-filled `rows x cols` matrix.
    pub fn allocate(rows: usize, cols: usize) -> Self {
        Self { data: Array2::zeros((rows, cols)) }
    }

    /// Build a matrix from a list of equally sized rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> anyhow::Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != num_cols) {
            anyhow::bail!("row {i} has {} entries, expected {num_cols}", row.len());
        }

        Self::from_shape_vec(num_rows, num_cols, rows.into_iter().flatten().collect())
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(rows: usize, cols: usize, entries: Vec<i64>) -> anyhow::Result<Self> {
        let data = Array2::from_shape_vec((rows, cols), entries)
            .map_err(|e| anyhow::anyhow!("cannot shape buffer as {rows} x {cols}: {e}"))?;
        Ok(Self { data })
    }

    /// Release the matrix. Consuming `self` makes any later use a compile error.
    #[inline] pub fn release(self) { drop(self) }

    /// Number of rows.
    #[inline] pub fn rows(&self) -> usize { self.data.nrows() }

    /// Number of columns.
    #[inline] pub fn cols(&self) -> usize { self.data.ncols() }

    /// `(rows, cols)`.
    #[inline] pub fn shape(&self) -> (usize, usize) { self.data.dim() }

    /// True when rows == cols.
    #[inline] pub fn is_square(&self) -> bool { self.rows() == self.cols() }

    /// Get entry `(i, j)`. Panics if out of bounds.
    #[inline] pub fn get(&self, i: usize, j: usize) -> i64 { self.data[[i, j]] }

    /// Set entry `(i, j)`. Panics if out of bounds.
    #[inline] pub fn set(&mut self, i: usize, j: usize, value: i64) { self.data[[i, j]] = value }

    /// Contiguous view of row `i`.
    #[inline] pub fn row(&self, i: usize) -> ArrayView1<'_, i64> { self.data.row(i) }

    /// Borrow the backing array.
    #[inline] pub fn view(&self) -> ArrayView2<'_, i64> { self.data.view() }

    #[inline] pub(crate) fn data_mut(&mut self) -> &mut Array2<i64> { &mut self.data }

    /// Iterate over `(i, j, value)` for every entry in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.data.indexed_iter().map(|((i, j), &v)| (i, j, v))
    }
}

impl From<Array2<i64>> for DenseMatrix {
    fn from(data: Array2<i64>) -> Self { Self { data } }
}
