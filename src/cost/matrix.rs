//! Dense directed cost matrix.

/// Sentinel cost meaning "no direct edge between these nodes".
///
/// Infinity is closed under the arithmetic the solvers rely on:
/// `finite + UNREACHABLE == UNREACHABLE`, and `UNREACHABLE` compares
/// worse than any finite cost, so search code can treat an unreachable
/// segment as infinitely bad and prune uniformly.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Returns `true` if `cost` denotes a usable edge.
#[inline]
pub fn is_reachable(cost: f64) -> bool {
    cost != UNREACHABLE
}

/// A dense n×n directed cost matrix stored in row-major order.
///
/// `cost(i, j)` and `cost(j, i)` may differ (asymmetric instances are
/// valid), and the triangle inequality is not assumed. Diagonal entries
/// are conventionally zero and never traversed.
///
/// Malformed queries never panic: out-of-bounds indices and queries
/// against an unset matrix degrade to [`UNREACHABLE`].
///
/// # Examples
///
/// ```
/// use tsp_engine::cost::{CostMatrix, UNREACHABLE};
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0],
///     vec![7.0, 0.0],
/// ]);
/// assert_eq!(m.num_nodes(), 2);
/// assert_eq!(m.cost(0, 1), 5.0);
/// assert_eq!(m.cost(1, 0), 7.0);
/// assert_eq!(m.cost(0, 9), UNREACHABLE);
/// assert_eq!(m.path_cost(&[0, 1, 0]), 12.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostMatrix {
    data: Vec<f64>,
    n: usize,
}

impl CostMatrix {
    /// Creates an unset matrix (`n = 0`). Every query degrades until
    /// [`set_matrix`](Self::set_matrix) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matrix directly from an n×n grid of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let mut m = Self::new();
        m.set_matrix(rows);
        m
    }

    /// Replaces the cost data and recomputes `n` from the row count.
    ///
    /// An empty grid yields `n = 0`. Ragged input degrades rather than
    /// panics: short rows are padded with [`UNREACHABLE`], long rows
    /// truncated to `n` entries.
    pub fn set_matrix(&mut self, rows: Vec<Vec<f64>>) {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in &rows {
            data.extend(row.iter().copied().take(n));
            data.extend(std::iter::repeat(UNREACHABLE).take(n.saturating_sub(row.len())));
        }
        self.data = data;
        self.n = n;
    }

    /// Number of nodes in the current matrix.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Returns the cost of the directed edge `from → to`.
    ///
    /// Out-of-bounds indices and an unset matrix yield [`UNREACHABLE`]
    /// so callers can treat the query result uniformly.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        if from >= self.n || to >= self.n {
            log::warn!("cost query ({from}, {to}) outside {0}x{0} matrix", self.n);
            return UNREACHABLE;
        }
        self.data[from * self.n + to]
    }

    /// Total cost of a path, summed over consecutive node pairs.
    ///
    /// Returns 0.0 for paths shorter than two nodes or an unset matrix;
    /// [`UNREACHABLE`] if any traversed segment is unreachable.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        if path.len() < 2 || self.n == 0 {
            return 0.0;
        }
        let mut total = 0.0;
        for pair in path.windows(2) {
            let segment = self.cost(pair[0], pair[1]);
            if !is_reachable(segment) {
                return UNREACHABLE;
            }
            total += segment;
        }
        total
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if (self.cost(i, j) - self.cost(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 4.0],
            vec![8.0, 4.0, 0.0],
        ])
    }

    #[test]
    fn test_set_matrix_recomputes_n() {
        let mut m = CostMatrix::new();
        assert_eq!(m.num_nodes(), 0);
        m.set_matrix(vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert_eq!(m.num_nodes(), 2);
        m.set_matrix(vec![]);
        assert_eq!(m.num_nodes(), 0);
    }

    #[test]
    fn test_cost_lookup() {
        let m = sample();
        assert_eq!(m.cost(0, 1), 5.0);
        assert_eq!(m.cost(1, 0), 5.0);
        assert_eq!(m.cost(2, 2), 0.0);
    }

    #[test]
    fn test_out_of_bounds_degrades() {
        let m = sample();
        assert_eq!(m.cost(0, 3), UNREACHABLE);
        assert_eq!(m.cost(7, 0), UNREACHABLE);
    }

    #[test]
    fn test_unset_matrix_degrades() {
        let m = CostMatrix::new();
        assert_eq!(m.cost(0, 0), UNREACHABLE);
        assert_eq!(m.path_cost(&[0, 1, 0]), 0.0);
    }

    #[test]
    fn test_path_cost() {
        let m = sample();
        assert_eq!(m.path_cost(&[0, 1, 2, 0]), 17.0);
        assert_eq!(m.path_cost(&[0]), 0.0);
        assert_eq!(m.path_cost(&[]), 0.0);
    }

    #[test]
    fn test_path_cost_unreachable_segment() {
        let m = CostMatrix::from_rows(vec![
            vec![0.0, UNREACHABLE],
            vec![3.0, 0.0],
        ]);
        assert_eq!(m.path_cost(&[0, 1, 0]), UNREACHABLE);
        assert_eq!(m.path_cost(&[1, 0]), 3.0);
    }

    #[test]
    fn test_path_cost_idempotent() {
        let m = sample();
        let path = [0, 2, 1, 0];
        assert_eq!(m.path_cost(&path), m.path_cost(&path));
        assert_eq!(m.cost(0, 2), m.cost(0, 2));
    }

    #[test]
    fn test_ragged_rows_pad_with_unreachable() {
        let m = CostMatrix::from_rows(vec![
            vec![0.0, 1.0],
            vec![2.0],
        ]);
        assert_eq!(m.num_nodes(), 2);
        assert_eq!(m.cost(1, 0), 2.0);
        assert_eq!(m.cost(1, 1), UNREACHABLE);
    }

    #[test]
    fn test_symmetry() {
        assert!(sample().is_symmetric(1e-10));
        let asym = CostMatrix::from_rows(vec![
            vec![0.0, 10.0],
            vec![15.0, 0.0],
        ]);
        assert!(!asym.is_symmetric(1e-10));
    }

    #[test]
    fn test_unreachable_arithmetic() {
        assert_eq!(3.0 + UNREACHABLE, UNREACHABLE);
        assert!(UNREACHABLE > 1e300);
        assert!(!is_reachable(UNREACHABLE));
        assert!(is_reachable(0.0));
    }
}
