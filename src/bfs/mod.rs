mod engine;
mod error;
mod result;

pub use engine::{bfs, BfsOptions, SpmvBfs};
pub use error::BfsError;
pub use result::{BfsResult, Color, UNREACHED};
