//! Dense cost matrix.

use tracing::warn;

use crate::error::ConfigError;

/// Travel cost between two locations.
///
/// Implemented by [`CostMatrix`] and by the arc penalty table of guided
/// local search, so the same tour evaluation runs over either.
pub trait ArcCost {
    /// Cost of travelling from `from` to `to`.
    fn arc(&self, from: usize, to: usize) -> f64;
}

/// A dense n×n travel cost matrix stored in row-major order.
///
/// Index 0 is the depot. Entries are distances (meters) or durations
/// (seconds) and may be asymmetric. An entry of `f64::INFINITY` marks an
/// arc whose cost is unknown, typically a failed lookup at the matrix
/// provider; negative and `NaN` entries are rejected.
///
/// # Examples
///
/// ```
/// use u_delivery::matrix::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 3.0],
///     vec![8.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.get(0, 1), 5.0);
/// assert_eq!(m.size(), 3);
/// assert!(m.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from an explicit row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, ConfigError> {
        if data.len() != size * size {
            return Err(ConfigError::MatrixDataLength {
                size,
                len: data.len(),
            });
        }
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Creates a cost matrix from nested rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(ConfigError::NonSquareMatrix {
                    row,
                    len: values.len(),
                    size,
                });
            }
            data.extend(values);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from per-arc lookups.
    ///
    /// `lookup(i, j)` returns `None` when the cost could not be obtained; such
    /// arcs are stored as unknown (`INFINITY`) instead of zero so that the
    /// search never treats a failed lookup as a free edge. With `symmetric`,
    /// only `i < j` is looked up and mirrored.
    pub fn from_lookups<F>(size: usize, symmetric: bool, mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(usize, usize) -> Option<f64>,
    {
        let mut matrix = Self::new(size);
        let mut unknown = 0usize;
        for i in 0..size {
            for j in 0..size {
                if i == j || (symmetric && j < i) {
                    continue;
                }
                let cost = lookup(i, j).unwrap_or_else(|| {
                    unknown += 1;
                    f64::INFINITY
                });
                matrix.set(i, j, cost);
                if symmetric {
                    matrix.set(j, i, cost);
                }
            }
        }
        if unknown > 0 {
            warn!(size, unknown, "cost matrix has arcs with unknown cost");
        }
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                let bad_diagonal = from == to && value != 0.0;
                if value.is_nan() || value < 0.0 || bad_diagonal {
                    return Err(ConfigError::InvalidEntry { from, to, value });
                }
            }
        }
        Ok(())
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_nan() || b.is_nan() {
                    return false;
                }
            }
        }
        true
    }

    /// Number of off-diagonal arcs whose cost is unknown.
    pub fn unknown_entries(&self) -> usize {
        self.data.iter().filter(|v| v.is_infinite()).count()
    }

    /// Returns the cheapest successor of `from` among the given candidates.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

impl ArcCost for CostMatrix {
    fn arc(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}
