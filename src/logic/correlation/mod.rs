//! Correlation Module - Pairwise Pearson Matrix
//!
//! Computes linear correlation between every pair of numeric columns.
//! Text columns are skipped. Each pair uses only rows where both cells
//! are populated; pairs with fewer than two shared observations or a
//! zero-variance side come out as NaN.


use ndarray::Array2;

use super::dataset::Frame;

/// Square Pearson matrix plus the ordered column names it covers
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    pub values: Array2<f64>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[[row, col]]
    }
}

/// Pearson correlation across all numeric columns of the frame
pub fn correlation_matrix(frame: &Frame) -> CorrelationMatrix {
    let columns = frame.numeric_columns();
    let n = columns.len();

    let names = columns.iter().map(|c| c.name.clone()).collect();
    let cells: Vec<&[Option<f64>]> = columns
        .iter()
        .filter_map(|c| c.numeric_cells())
        .collect();

    let mut values = Array2::from_elem((n, n), f64::NAN);
    for i in 0..n {
        for j in i..n {
            let r = pearson(cells[i], cells[j]);
            values[[i, j]] = r;
            values[[j, i]] = r;
        }
    }

    CorrelationMatrix { names, values }
}

/// Pearson coefficient over pairwise-complete cells
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let mut n = 0usize;
    let (mut sx, mut sy) = (0.0f64, 0.0f64);
    let (mut sxx, mut syy, mut sxy) = (0.0f64, 0.0f64, 0.0f64);

    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1;
            sx += x;
            sy += y;
            sxx += x * x;
            syy += y * y;
            sxy += x * y;
        }
    }

    if n < 2 {
        return f64::NAN;
    }

    let nf = n as f64;
    let cov = sxy - sx * sy / nf;
    let var_x = sxx - sx * sx / nf;
    let var_y = syy - sy * sy / nf;

    if var_x <= 0.0 || var_y <= 0.0 {
        return f64::NAN;
    }

    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}
