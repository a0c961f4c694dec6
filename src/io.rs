//! Plain-text adjacency matrix reading.
//!
//! The format is a `rows cols` header line followed by `rows` lines of `cols`
//! whitespace-separated integers. Blank lines and lines starting with `#` are
//! skipped.

use std::{fs::File, io::{self, BufRead, BufReader}, path::Path};

use anyhow::{Context, Result, bail, ensure};

use crate::matrix::DenseMatrix;

/// Upper bound on entries reserved up front from the header.
const MAX_PREALLOC: usize = 1 << 16;

/// Read a matrix from `path`, or from stdin when `path` is `-`.
pub fn read_matrix_file(path: &Path) -> Result<DenseMatrix> {
    if path == Path::new("-") {
        return read_matrix(io::stdin().lock()).context("[io::read] Failed to read matrix from stdin");
    }
    let file = File::open(path)
        .with_context(|| format!("[io::read] Failed to open matrix file: {}", path.display()))?;
    read_matrix(BufReader::new(file))
        .with_context(|| format!("[io::read] Failed to read matrix from {}", path.display()))
}

/// Read a matrix from any buffered reader. Non-square shapes are accepted.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<DenseMatrix> {
    let mut lines = reader.lines().enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)))
        .filter(|line| line.as_ref().map_or(true, |(_, l)| {
            let l = l.trim();
            !l.is_empty() && !l.starts_with('#')
        }));

    let (lineno, header) = match lines.next() {
        Some(line) => line?,
        None => bail!("missing `rows cols` header"),
    };
    let dims = parse_ints(&header, lineno)?;
    ensure!(dims.len() == 2, "line {lineno}: header must be `rows cols`, got {} values", dims.len());
    let (rows, cols) = (to_dim(dims[0], lineno)?, to_dim(dims[1], lineno)?);

    let len = rows.checked_mul(cols)
        .with_context(|| format!("line {lineno}: {rows} x {cols} matrix is too large"))?;

    // Grow row by row past this; the header alone is not trusted to size the buffer.
    let mut entries = Vec::with_capacity(len.min(MAX_PREALLOC));
    for row in 0..rows {
        let (lineno, line) = match lines.next() {
            Some(line) => line?,
            None => bail!("expected {rows} rows, found {row}"),
        };
        let values = parse_ints(&line, lineno)?;
        ensure!(values.len() == cols, "line {lineno}: expected {cols} entries, got {}", values.len());
        entries.extend(values);
    }
    if let Some(extra) = lines.next() {
        let (lineno, _) = extra?;
        bail!("line {lineno}: unexpected data after {rows} rows");
    }

    DenseMatrix::from_shape_vec(rows, cols, entries)
}

fn parse_ints(line: &str, lineno: usize) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|tok| tok.parse::<i64>().with_context(|| format!("line {lineno}: invalid integer {tok:?}")))
        .collect()
}

fn to_dim(value: i64, lineno: usize) -> Result<usize> {
    usize::try_from(value).with_context(|| format!("line {lineno}: dimension must be non-negative, got {value}"))
}
