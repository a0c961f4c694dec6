#![doc = "Breadth-first search over dense adjacency matrices, one matrix-vector product per level"]
mod bfs;
mod io;
mod matrix;
mod vector;

#[doc(inline)]
pub use bfs::{bfs, BfsError, BfsOptions, BfsResult, Color, SpmvBfs, UNREACHED};

#[doc(inline)]
pub use matrix::{transpose, DenseMatrix};

#[doc(inline)]
pub use io::{read_matrix, read_matrix_file};

#[doc(inline)]
pub use vector::{print_bfs_result, print_matrix, print_vector, reset};
