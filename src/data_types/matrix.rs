use eyre::{bail, Result};

use super::RowType;

/// Read-only correlation input: row titles and types plus two precomputed
/// N×N value matrices. The crate never computes correlations, only renders
/// them.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    titles: Vec<String>,
    row_types: Vec<RowType>,
    correlations: Vec<Vec<f64>>,
    correlations_sqr: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Validates that all four collections share the primary length N and
    /// that N is non-zero. Rejecting N = 0 here keeps every later division
    /// by N safe.
    pub fn new(
        row_types: Vec<RowType>,
        titles: Vec<String>,
        correlations: Vec<Vec<f64>>,
        correlations_sqr: Vec<Vec<f64>>,
    ) -> Result<Self> {
        let length = titles.len();
        if length == 0 {
            bail!("correlation matrix must have at least one row");
        }
        if row_types.len() != length
            || correlations.len() != length
            || correlations_sqr.len() != length
        {
            bail!(
                "input length mismatch: {} titles, {} row types, {} correlation rows, {} squared rows",
                length,
                row_types.len(),
                correlations.len(),
                correlations_sqr.len()
            );
        }
        Ok(Self {
            titles,
            row_types,
            correlations,
            correlations_sqr,
        })
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn title(&self, index: usize) -> &str {
        &self.titles[index]
    }

    pub fn row_types(&self) -> &[RowType] {
        &self.row_types
    }

    pub fn row_type(&self, index: usize) -> RowType {
        self.row_types[index]
    }

    /// Correlation at (i, j); NaN when the entry is absent, including reads
    /// past a short inner row.
    pub fn correlation(&self, i: usize, j: usize) -> f64 {
        entry(&self.correlations, i, j)
    }

    /// Squared correlation at (i, j), same NaN convention.
    pub fn correlation_sqr(&self, i: usize, j: usize) -> f64 {
        entry(&self.correlations_sqr, i, j)
    }

    /// Squared magnitude re-signed by the raw correlation's sign. NaN in
    /// either input short-circuits to NaN before the sign branch, so the
    /// branch never sees NaN.
    pub fn signed_value(&self, i: usize, j: usize) -> f64 {
        let correlation = self.correlation(i, j);
        let squared = self.correlation_sqr(i, j);
        if correlation.is_nan() || squared.is_nan() {
            return f64::NAN;
        }
        if correlation < 0.0 {
            -squared
        } else {
            squared
        }
    }
}

fn entry(rows: &[Vec<f64>], i: usize, j: usize) -> f64 {
    rows.get(i)
        .and_then(|row| row.get(j))
        .copied()
        .unwrap_or(f64::NAN)
}
