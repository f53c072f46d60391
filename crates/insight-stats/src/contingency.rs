//! Contingency tables and the chi-square test of independence.

use std::collections::BTreeMap;

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::TestResult;
use crate::error::{Result, StatsError};

/// A labeled two-way frequency table.
///
/// `cells[r][c]` holds the count (or share, after normalization) for row
/// label `r` and column label `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<Vec<f64>>,
}

impl ContingencyTable {
    /// Builds a table from explicit labels and cells.
    pub fn new(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        cells: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if cells.len() != row_labels.len() {
            return Err(StatsError::InvalidTable {
                message: format!(
                    "{} rows of cells for {} row labels",
                    cells.len(),
                    row_labels.len()
                ),
            });
        }
        if let Some(row) = cells.iter().find(|row| row.len() != col_labels.len()) {
            return Err(StatsError::InvalidTable {
                message: format!(
                    "row of {} cells for {} column labels",
                    row.len(),
                    col_labels.len()
                ),
            });
        }
        Ok(Self {
            row_labels,
            col_labels,
            cells,
        })
    }

    /// Cross-tabulates observation pairs.
    ///
    /// Row and column labels are the distinct keys in ascending key order,
    /// rendered with `to_string`.
    pub fn crosstab<R, C>(pairs: impl IntoIterator<Item = (R, C)>) -> Self
    where
        R: Ord + ToString,
        C: Ord + ToString,
    {
        let mut counts: BTreeMap<R, BTreeMap<C, f64>> = BTreeMap::new();
        for (row, col) in pairs {
            *counts.entry(row).or_default().entry(col).or_insert(0.0) += 1.0;
        }

        let mut col_keys: Vec<&C> = counts.values().flat_map(BTreeMap::keys).collect();
        col_keys.sort();
        col_keys.dedup();

        let cells = counts
            .values()
            .map(|row| {
                col_keys
                    .iter()
                    .map(|key| row.get(*key).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();
        let col_labels = col_keys.iter().map(|key| key.to_string()).collect();
        let row_labels = counts.keys().map(ToString::to_string).collect();

        Self {
            row_labels,
            col_labels,
            cells,
        }
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        (col < self.n_cols()).then(|| self.cells.iter().map(|row| row[col]).collect())
    }

    /// Position of a column label.
    pub fn col_index(&self, label: &str) -> Option<usize> {
        self.col_labels.iter().position(|l| l == label)
    }

    /// Replaces the row labels, keeping the cell order.
    pub fn with_row_labels(mut self, labels: Vec<String>) -> Result<Self> {
        if labels.len() != self.n_rows() {
            return Err(StatsError::InvalidTable {
                message: format!("{} row labels for {} rows", labels.len(), self.n_rows()),
            });
        }
        self.row_labels = labels;
        Ok(self)
    }

    /// Replaces the column labels, keeping the cell order.
    pub fn with_col_labels(mut self, labels: Vec<String>) -> Result<Self> {
        if labels.len() != self.n_cols() {
            return Err(StatsError::InvalidTable {
                message: format!("{} column labels for {} columns", labels.len(), self.n_cols()),
            });
        }
        self.col_labels = labels;
        Ok(self)
    }

    /// Divides every cell by its column total. Columns summing to zero stay zero.
    pub fn normalize_columns(&self) -> Self {
        let totals: Vec<f64> = (0..self.n_cols())
            .map(|c| self.cells.iter().map(|row| row[c]).sum())
            .collect();
        let cells = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&totals)
                    .map(|(v, total)| if *total == 0.0 { 0.0 } else { v / total })
                    .collect()
            })
            .collect();
        Self {
            row_labels: self.row_labels.clone(),
            col_labels: self.col_labels.clone(),
            cells,
        }
    }

    /// Divides every cell by its row total. Rows summing to zero stay zero.
    pub fn normalize_rows(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|row| {
                let total: f64 = row.iter().sum();
                row.iter()
                    .map(|v| if total == 0.0 { 0.0 } else { v / total })
                    .collect()
            })
            .collect();
        Self {
            row_labels: self.row_labels.clone(),
            col_labels: self.col_labels.clone(),
            cells,
        }
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let cells = (0..self.n_cols())
            .map(|c| self.cells.iter().map(|row| row[c]).collect())
            .collect();
        Self {
            row_labels: self.col_labels.clone(),
            col_labels: self.row_labels.clone(),
            cells,
        }
    }

    pub fn total(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }
}

/// Result of a chi-square test of independence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub dof: usize,
    /// Expected frequencies under independence, same shape as the table.
    pub expected: Vec<Vec<f64>>,
}

impl ChiSquareOutcome {
    pub fn result(&self) -> TestResult {
        TestResult::new(self.statistic, self.p_value)
    }
}

/// Chi-square test of independence on a table of counts.
///
/// With one degree of freedom, Yates' continuity correction moves every
/// observed count up to 0.5 toward its expected count. A table with zero
/// degrees of freedom yields a statistic of 0 and a p-value of 1.
pub fn chi2_contingency(table: &ContingencyTable) -> Result<ChiSquareOutcome> {
    if table.n_rows() == 0 || table.n_cols() == 0 {
        return Err(StatsError::InvalidTable {
            message: "table is empty".to_string(),
        });
    }
    if table.cells.iter().flatten().any(|v| *v < 0.0 || !v.is_finite()) {
        return Err(StatsError::InvalidTable {
            message: "counts must be finite and non-negative".to_string(),
        });
    }

    let total = table.total();
    let row_totals: Vec<f64> = table.cells.iter().map(|row| row.iter().sum()).collect();
    let col_totals: Vec<f64> = (0..table.n_cols())
        .map(|c| table.cells.iter().map(|row| row[c]).sum())
        .collect();
    let expected: Vec<Vec<f64>> = row_totals
        .iter()
        .map(|r| {
            col_totals
                .iter()
                .map(|c| if total == 0.0 { 0.0 } else { r * c / total })
                .collect()
        })
        .collect();
    if expected.iter().flatten().any(|e| *e == 0.0) {
        return Err(StatsError::ZeroExpected);
    }

    let dof = (table.n_rows() - 1) * (table.n_cols() - 1);
    if dof == 0 {
        return Ok(ChiSquareOutcome {
            statistic: 0.0,
            p_value: 1.0,
            dof,
            expected,
        });
    }

    let mut statistic = 0.0;
    for (observed_row, expected_row) in table.cells.iter().zip(&expected) {
        for (&observed, &exp) in observed_row.iter().zip(expected_row) {
            let mut observed = observed;
            if dof == 1 {
                let diff = exp - observed;
                observed += diff.signum() * diff.abs().min(0.5);
            }
            statistic += (observed - exp).powi(2) / exp;
        }
    }

    let dist = ChiSquared::new(dof as f64).map_err(StatsError::distribution)?;
    let p_value = dist.sf(statistic).clamp(0.0, 1.0);
    Ok(ChiSquareOutcome {
        statistic,
        p_value,
        dof,
        expected,
    })
}
