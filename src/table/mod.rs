//! Tabulated critical values with column interpolation.
//!
//! A [`CriticalValueTable`] is a rectangular grid of critical values indexed
//! by two ordered axes: a row axis of degrees-of-freedom markers and a
//! strictly descending column axis of significance levels. The table is
//! built once as immutable reference data and shared read-only; lookups
//! between tabulated columns are resolved by linear interpolation.
//!
//! # Examples
//!
//! ```
//! use contrastar::table::CriticalValueTable;
//!
//! let table = CriticalValueTable::new(
//!     vec![vec![3.078, 6.314], vec![1.886, 2.920]],
//!     vec![1.0, 2.0],
//!     vec![0.10, 0.05],
//! )
//! .expect("well-formed table");
//!
//! // Exact hit on a tabulated column
//! assert_eq!(table.interpolate(0.05, 0).expect("in domain"), 6.314);
//! // Midpoint between columns
//! let mid = table.interpolate(0.075, 0).expect("in domain");
//! assert!((mid - 4.696).abs() < 1e-3);
//! ```

mod student_t;

use crate::error::{ContrastarError, Result};
use std::sync::OnceLock;

/// Rectangular grid of tabulated critical values with ordered axes.
///
/// The column axis is strictly descending; a column lookup value is valid
/// only inside the closed interval spanned by the axis endpoints. The row
/// axis labels the grid rows and is never interpolated across.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalValueTable {
    grid: Vec<Vec<f32>>,
    row_axis: Vec<f32>,
    col_axis: Vec<f32>,
}

impl CriticalValueTable {
    /// Builds a table, validating its shape invariants.
    ///
    /// # Errors
    ///
    /// Returns error if the grid is empty or ragged, if either axis length
    /// disagrees with the grid shape, if the column axis is not strictly
    /// descending, or if the row axis is not strictly ascending.
    pub fn new(grid: Vec<Vec<f32>>, row_axis: Vec<f32>, col_axis: Vec<f32>) -> Result<Self> {
        if grid.is_empty() || col_axis.is_empty() {
            return Err(ContrastarError::empty_input("critical value table"));
        }
        if row_axis.len() != grid.len() {
            return Err(ContrastarError::DimensionMismatch {
                expected: format!("{} row markers", grid.len()),
                actual: format!("{}", row_axis.len()),
            });
        }
        for (i, row) in grid.iter().enumerate() {
            if row.len() != col_axis.len() {
                return Err(ContrastarError::DimensionMismatch {
                    expected: format!("{} columns in row {i}", col_axis.len()),
                    actual: format!("{}", row.len()),
                });
            }
        }
        if col_axis.windows(2).any(|w| w[0] <= w[1]) {
            return Err(ContrastarError::Other(
                "column axis must be strictly descending".to_string(),
            ));
        }
        if row_axis.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ContrastarError::Other(
                "row axis must be strictly ascending".to_string(),
            ));
        }
        Ok(Self {
            grid,
            row_axis,
            col_axis,
        })
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Position of an exact row marker, if tabulated.
    #[must_use]
    pub fn row_position(&self, marker: f32) -> Option<usize> {
        self.row_axis
            .iter()
            .position(|&m| (m - marker).abs() < f32::EPSILON)
    }

    /// Smallest row marker.
    #[must_use]
    pub fn row_min(&self) -> f32 {
        self.row_axis[0]
    }

    /// Largest row marker.
    #[must_use]
    pub fn row_max(&self) -> f32 {
        self.row_axis[self.row_axis.len() - 1]
    }

    /// Resolves a column lookup value within one grid row by linear
    /// interpolation between the two tabulated columns bracketing it.
    ///
    /// A lookup that lands exactly on a tabulated column reproduces the
    /// tabulated value. A degenerate bracket (both endpoints equal) falls
    /// back to the row marker itself, a quirk preserved from the reference
    /// tables.
    ///
    /// # Errors
    ///
    /// Returns [`ContrastarError::OutOfDomain`] if `c0` lies outside the
    /// closed interval spanned by the column axis, or an index error if
    /// `row_index` exceeds the grid.
    pub fn interpolate(&self, c0: f32, row_index: usize) -> Result<f32> {
        if row_index >= self.grid.len() {
            return Err(ContrastarError::index_out_of_bounds(
                row_index,
                self.grid.len(),
            ));
        }
        let last = self.col_axis.len() - 1;
        if c0 > self.col_axis[0] || c0 < self.col_axis[last] {
            return Err(ContrastarError::OutOfDomain {
                value: c0,
                min: self.col_axis[last],
                max: self.col_axis[0],
            });
        }

        // A single-column table has no bracket at all; same fallback as a
        // degenerate bracket.
        if last == 0 {
            return Ok(self.row_axis[row_index]);
        }

        // Columns descend, so the first adjacent pair whose lower endpoint
        // does not exceed c0 is the bracket containing it.
        let mut idx = last - 1;
        for i in 0..last {
            if c0 >= self.col_axis[i + 1] {
                idx = i;
                break;
            }
        }

        let (l0, r0) = (self.col_axis[idx + 1], self.col_axis[idx]);
        let (l, r) = (self.grid[row_index][idx + 1], self.grid[row_index][idx]);
        if l0 == r0 {
            return Ok(self.row_axis[row_index]);
        }
        Ok(l + (r - l) / (r0 - l0) * (c0 - l0))
    }
}

static STUDENT_T: OnceLock<CriticalValueTable> = OnceLock::new();

/// Shared one-tailed Student's t table: rows for degrees of freedom 1..=100,
/// columns for significance levels 0.25 down to 0.001.
///
/// Initialized on first access and shared read-only afterwards.
#[must_use]
pub fn student_t() -> &'static CriticalValueTable {
    STUDENT_T.get_or_init(|| {
        CriticalValueTable::new(
            student_t::GRID.iter().map(|row| row.to_vec()).collect(),
            (1..=student_t::GRID.len()).map(|df| df as f32).collect(),
            student_t::ALPHAS.to_vec(),
        )
        .expect("embedded Student's t table is well formed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> CriticalValueTable {
        // df = 1 and df = 2 rows of a one-tailed t table
        CriticalValueTable::new(
            vec![vec![3.078, 6.314, 12.706], vec![1.886, 2.920, 4.303]],
            vec![1.0, 2.0],
            vec![0.10, 0.05, 0.025],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_grid() {
        let err = CriticalValueTable::new(
            vec![vec![1.0, 2.0], vec![3.0]],
            vec![1.0, 2.0],
            vec![0.10, 0.05],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_new_rejects_row_axis_mismatch() {
        let err = CriticalValueTable::new(
            vec![vec![1.0, 2.0]],
            vec![1.0, 2.0],
            vec![0.10, 0.05],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_new_rejects_ascending_columns() {
        let err = CriticalValueTable::new(
            vec![vec![1.0, 2.0]],
            vec![1.0],
            vec![0.05, 0.10],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_new_rejects_unsorted_row_axis() {
        let err = CriticalValueTable::new(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![2.0, 1.0],
            vec![0.10, 0.05],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(CriticalValueTable::new(vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn test_interpolate_exact_column_hits() {
        let table = fixture();
        assert_eq!(table.interpolate(0.10, 0).unwrap(), 3.078);
        assert_eq!(table.interpolate(0.05, 0).unwrap(), 6.314);
        assert_eq!(table.interpolate(0.025, 0).unwrap(), 12.706);
        assert_eq!(table.interpolate(0.05, 1).unwrap(), 2.920);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let table = fixture();
        // Halfway between columns 0.10 and 0.05 of the df = 1 row
        let got = table.interpolate(0.075, 0).unwrap();
        assert!((got - (3.078 + 6.314) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_interpolate_monotonic_within_bracket() {
        let table = fixture();
        let mut prev = table.interpolate(0.10, 0).unwrap();
        for step in 1..=10 {
            let c0 = 0.10 - 0.005 * step as f32;
            let cur = table.interpolate(c0, 0).unwrap();
            assert!(cur >= prev, "not monotonic at c0 = {c0}");
            prev = cur;
        }
    }

    #[test]
    fn test_interpolate_out_of_domain() {
        let table = fixture();
        assert!(matches!(
            table.interpolate(0.11, 0),
            Err(ContrastarError::OutOfDomain { .. })
        ));
        assert!(matches!(
            table.interpolate(0.02, 0),
            Err(ContrastarError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_interpolate_row_index_out_of_bounds() {
        let table = fixture();
        assert!(table.interpolate(0.05, 2).is_err());
    }

    #[test]
    fn test_degenerate_bracket_returns_row_marker() {
        // Duplicate columns are rejected by the constructor, so build the
        // degenerate shape directly.
        let table = CriticalValueTable {
            grid: vec![vec![5.0, 7.0]],
            row_axis: vec![42.0],
            col_axis: vec![0.05, 0.05],
        };
        assert_eq!(table.interpolate(0.05, 0).unwrap(), 42.0);
    }

    #[test]
    fn test_single_column_table_returns_row_marker() {
        let table = CriticalValueTable::new(vec![vec![6.314]], vec![1.0], vec![0.05]).unwrap();
        assert_eq!(table.interpolate(0.05, 0).unwrap(), 1.0);
        // Domain is the single tabulated column
        assert!(table.interpolate(0.06, 0).is_err());
    }

    #[test]
    fn test_student_t_shape() {
        let table = student_t();
        assert_eq!(table.rows(), 100);
        assert_eq!(table.row_min(), 1.0);
        assert_eq!(table.row_max(), 100.0);
        assert_eq!(table.row_position(89.0), Some(88));
        assert_eq!(table.row_position(100.5), None);
    }

    #[test]
    fn test_student_t_reference_values() {
        let table = student_t();
        assert_eq!(table.interpolate(0.10, 0).unwrap(), 3.078);
        assert_eq!(table.interpolate(0.05, 11).unwrap(), 1.782);
        assert_eq!(table.interpolate(0.05, 88).unwrap(), 1.662);
    }

    #[test]
    fn test_student_t_shared_instance() {
        assert!(std::ptr::eq(student_t(), student_t()));
    }
}
