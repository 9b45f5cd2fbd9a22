use serde::{Serialize, Deserialize};

use crate::{Matrix, Sample, Hypothesis};


/// A look-up-table machine.
/// Each output holds one selected feature index and one column of
/// the table; an example scores `lut[feature value][output]`.
/// Every table entry is exactly `-1.0` or `+1.0`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LutMachine {
    /// The look-up table, `entries × outputs`.
    pub lut: Matrix,
    /// The selected feature index per output.
    pub feature_indices: Vec<usize>,
}


impl LutMachine {
    /// Construct a new `LutMachine`.
    /// The number of table columns must equal the number of
    /// selected feature indices.
    #[inline]
    pub fn new(lut: Matrix, feature_indices: Vec<usize>) -> Self {
        assert_eq!(lut.n_cols(), feature_indices.len());
        Self { lut, feature_indices, }
    }


    /// The number of entries of the table.
    #[inline]
    pub fn n_entries(&self) -> usize {
        self.lut.n_rows()
    }
}


impl Hypothesis for LutMachine {
    fn n_outputs(&self) -> usize {
        self.lut.n_cols()
    }


    fn feature_indices(&self) -> Vec<usize> {
        self.feature_indices.clone()
    }


    fn score(&self, sample: &Sample, row: usize, output: usize) -> f64 {
        let value = sample.feature(self.feature_indices[output])[row];
        self.lut[(value as usize, output)]
    }
}
