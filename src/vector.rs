use std::io::{self, Write};

use crate::bfs::Color;
use crate::matrix::DenseMatrix;

/// Set every entry of `vector` to zero.
#[inline]
pub fn reset(vector: &mut [i64]) {
    vector.fill(0);
}

/// Write a vector, one entry per line.
pub fn print_vector<W: Write>(out: &mut W, vector: &[i64]) -> io::Result<()> {
    writeln!(out, "---- Print Vector ----")?;
    for value in vector {
        writeln!(out, "{value}")?;
    }
    writeln!(out, "--------\n")
}

/// Write a matrix row by row, each entry followed by a space.
pub fn print_matrix<W: Write>(out: &mut W, matrix: &DenseMatrix) -> io::Result<()> {
    writeln!(out, "---- Print Matrix ----")?;
    writeln!(out, "This matrix is {} x {}", matrix.rows(), matrix.cols())?;
    for i in 0..matrix.rows() {
        for value in matrix.row(i) {
            write!(out, "{value} ")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "--------\n")
}

/// Write the per-vertex color and distance table.
pub fn print_bfs_result<W: Write>(out: &mut W, color: &[Color], distance: &[i64]) -> io::Result<()> {
    assert!(color.len() == distance.len(), "color and distance must have equal length");

    writeln!(out, "---- Print BFS Matrix Result ----")?;
    writeln!(out, "Vert\tCol\tDis")?;
    for (v, (c, d)) in color.iter().zip(distance).enumerate() {
        writeln!(out, "{v}\t{}\t{d}", c.code())?;
    }
    writeln!(out, "--------\n")
}

/// Render one of the printers into a `String` for logging.
pub(crate) fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec<u8> cannot fail.
    let _ = f(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
