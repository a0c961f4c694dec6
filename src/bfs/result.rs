/// Distance of a vertex the search never reached.
pub const UNREACHED: i64 = -1;

/// Visitation marker for a vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Unvisited,
    Visited,
}

impl Color {
    /// Integer code used in printed tables: 0 for unvisited, 2 for visited.
    #[inline]
    pub fn code(self) -> i64 {
        match self {
            Color::Unvisited => 0,
            Color::Visited => 2,
        }
    }

    #[inline] pub fn is_visited(self) -> bool { self == Color::Visited }
}

/// Final per-vertex visitation state of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfsResult {
    pub(crate) color: Vec<Color>,
    pub(crate) distance: Vec<i64>,
    pub(crate) iterations: usize,
}

impl BfsResult {
    /// Number of vertices in the searched graph.
    #[inline] pub fn len(&self) -> usize { self.color.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.color.is_empty() }

    /// Per-vertex colors.
    #[inline] pub fn color(&self) -> &[Color] { &self.color }

    /// Per-vertex hop counts, `UNREACHED` (-1) for unreached vertices.
    #[inline] pub fn distance(&self) -> &[i64] { &self.distance }

    /// Number of SpMV rounds that produced a non-empty product.
    #[inline] pub fn iterations(&self) -> usize { self.iterations }

    /// Hop count to `vertex`, or `None` if it was not reached or does not exist.
    pub fn distance_to(&self, vertex: usize) -> Option<usize> {
        self.distance.get(vertex).and_then(|&d| usize::try_from(d).ok())
    }

    /// Iterate over reached vertices in index order.
    pub fn reachable(&self) -> impl Iterator<Item = usize> + '_ {
        self.color.iter().enumerate().filter(|(_, c)| c.is_visited()).map(|(v, _)| v)
    }

    /// Split into `(color, distance)`.
    pub fn into_parts(self) -> (Vec<Color>, Vec<i64>) { (self.color, self.distance) }
}
