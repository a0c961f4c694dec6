use ndarray::{ArrayView1, ArrayViewMut1, Zip};
use tracing::{debug, info, trace};

use crate::bfs::{BfsError, BfsResult, Color, UNREACHED};
use crate::matrix::DenseMatrix;
use crate::vector::{print_bfs_result, print_matrix, print_vector, render, reset};

/// Runtime switches for the SpMV-BFS engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BfsOptions {
    /// Dump the transposed matrix, each frontier, and the final table at debug/trace level.
    pub verbose: bool,
    /// Compute the SpMV row sums on the rayon pool.
    pub parallel: bool,
}

impl BfsOptions {
    pub fn verbose(mut self, verbose: bool) -> Self { self.verbose = verbose; self }

    pub fn parallel(mut self, parallel: bool) -> Self { self.parallel = parallel; self }
}

/// Breadth-first search expressed as repeated products of the transposed
/// adjacency matrix with the current frontier vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpmvBfs {
    options: BfsOptions,
}

impl SpmvBfs {
    pub fn new(options: BfsOptions) -> Self { Self { options } }

    #[inline] pub fn options(&self) -> BfsOptions { self.options }

    /// Search from `source`, returning freshly allocated color and distance arrays.
    pub fn run(&self, adjacency: &DenseMatrix, source: usize) -> Result<BfsResult, BfsError> {
        let n = adjacency.rows();
        let mut color = vec![Color::Unvisited; n];
        let mut distance = vec![UNREACHED; n];
        let iterations = self.run_into(adjacency, source, &mut color, &mut distance)?;
        Ok(BfsResult { color, distance, iterations })
    }

    /// Search from `source`, filling the caller-owned `color` and `distance` arrays.
    ///
    /// Returns the number of SpMV rounds that produced a non-empty product.
    /// On error neither array is touched.
    pub fn run_into(&self, adjacency: &DenseMatrix, source: usize,
        color: &mut [Color],
        distance: &mut [i64],
    ) -> Result<usize, BfsError> {
        validate(adjacency, source)?;
        let n = adjacency.rows();
        if color.len() != n || distance.len() != n {
            return Err(BfsError::BufferLength { expected: n, color: color.len(), distance: distance.len() });
        }

        info!(vertices = n, source, parallel = self.options.parallel, "breadth first search using SpMV");

        // Row i of the transpose holds the incoming edges of vertex i.
        let transposed = adjacency.transposed();
        if self.options.verbose {
            debug!("transposed adjacency\n{}", render(|out| print_matrix(out, &transposed)));
        }

        let mut frontier = vec![0i64; n];
        let mut result = vec![0i64; n];
        color.fill(Color::Unvisited);
        distance.fill(UNREACHED);
        color[source] = Color::Visited;
        distance[source] = 0;
        frontier[source] = 1;

        let mut pass: i64 = 1;
        let mut iterations = 0;
        loop {
            reset(&mut result);

            frontier.iter().zip(color.iter_mut())
                .filter(|(active, _)| **active != 0)
                .for_each(|(_, c)| *c = Color::Visited);

            spmv(&transposed, &frontier, &mut result, self.options.parallel);

            let mut activity: i64 = 0;
            for i in 0..n {
                frontier[i] = result[i];
                if result[i] != 0 {
                    if color[i] != Color::Unvisited {
                        frontier[i] = 0;
                    } else {
                        distance[i] = pass;
                    }
                }
                activity = activity.saturating_add(result[i]);
            }

            trace!(pass, activity, "spmv round");
            if self.options.verbose {
                trace!("frontier after pass {pass}\n{}", render(|out| print_vector(out, &frontier)));
            }

            if activity == 0 { break }
            iterations += 1;
            pass += 1;
        }
        debug_assert!(iterations <= n, "{iterations} productive rounds for {n} vertices");

        transposed.release();

        info!(iterations, reached = color.iter().filter(|c| c.is_visited()).count(), "done");
        if self.options.verbose {
            debug!("bfs result\n{}", render(|out| print_bfs_result(out, color, distance)));
        }

        Ok(iterations)
    }
}

/// Search from `source` with default options.
pub fn bfs(adjacency: &DenseMatrix, source: usize) -> Result<BfsResult, BfsError> {
    SpmvBfs::default().run(adjacency, source)
}

/// Check that `adjacency` is square with non-negative entries and `source` is a vertex.
fn validate(adjacency: &DenseMatrix, source: usize) -> Result<(), BfsError> {
    let (rows, cols) = adjacency.shape();
    if rows != cols {
        return Err(BfsError::InvalidDimensions { rows, cols });
    }
    if source >= rows {
        return Err(BfsError::SourceOutOfRange { vertex: source, vertices: rows });
    }
    if let Some((row, col, value)) = adjacency.entries().find(|&(_, _, v)| v < 0) {
        return Err(BfsError::NegativeEntry { row, col, value });
    }
    Ok(())
}

/// Dense product `y = m * x`, saturating at `i64::MAX`.
fn spmv(m: &DenseMatrix, x: &[i64], y: &mut [i64], parallel: bool) {
    assert!(m.cols() == x.len() && m.rows() == y.len(), "spmv shape mismatch");

    let x = ArrayView1::from(x);
    let view = m.view();
    let zip = Zip::from(ArrayViewMut1::from(y)).and(view.rows());

    if parallel {
        zip.par_for_each(|yi, row| accumulate_row(yi, row, &x));
    } else {
        zip.for_each(|yi, row| accumulate_row(yi, row, &x));
    }
}

#[inline]
fn accumulate_row(yi: &mut i64, row: ArrayView1<'_, i64>, x: &ArrayView1<'_, i64>) {
    *yi = row.iter().zip(x.iter())
        .fold(*yi, |acc, (&a, &b)| acc.saturating_add(a.saturating_mul(b)));
}
