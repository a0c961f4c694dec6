mod matrix;
mod transpose;

pub use matrix::DenseMatrix;
pub use transpose::transpose;
