use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Dense row-major matrix returned by the adjacency queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl AdjacencyMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.values[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.rows && col < self.cols {
            self.values[row * self.cols + col] = value;
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            writeln!(f, "{}", self.row(r).iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::AdjacencyMatrix;

    #[test]
    fn set_and_get() {
        let mut m = AdjacencyMatrix::zeros(2, 3);
        m.set(1, 2, 1.0);
        m.set(5, 5, 1.0);
        assert_eq!(m.get(1, 2), Some(1.0));
        assert_eq!(m.get(0, 0), Some(0.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(1), &[0.0, 0.0, 1.0]);
        assert_eq!(m.sum(), 1.0);
        assert_eq!(m.to_string(), "0 0 0\n0 0 1\n");
    }
}
