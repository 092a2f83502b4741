use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Directed travel costs indexed by waypoint position.
///
/// Entries are taken as given: negative, NaN and infinite costs are kept and
/// simply take part in the comparison. An unavailable edge is
/// `f64::INFINITY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build a matrix from rows, rejecting anything that is not square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = rows.len();
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::NonSquareMatrix {
                row,
                expected,
                found,
            });
        }

        Ok(Self { rows })
    }

    /// `size` x `size` matrix with zero on the diagonal and every other
    /// edge unavailable.
    pub fn unreachable(size: usize) -> Self {
        let rows = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { 0.0 } else { f64::INFINITY })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.rows[from][to] = cost;
    }

    pub fn row(&self, origin: usize) -> &[f64] {
        &self.rows[origin]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sub-matrix for a reduced waypoint set; `positions[k]` becomes index `k`.
    /// Positions may repeat.
    pub fn select(&self, positions: &[usize]) -> Self {
        let rows = positions
            .iter()
            .map(|&from| positions.iter().map(|&to| self.cost(from, to)).collect())
            .collect();
        debug!("Selected {}x{} sub-matrix", positions.len(), positions.len());
        Self { rows }
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.rows
    }
}

// Print distance matrix for debugging
pub fn print_dist_matrix(matrix: &DistanceMatrix) {
    debug!("Distance matrix:");
    for row in matrix.rows() {
        debug!("{:?}", row);
    }
}
