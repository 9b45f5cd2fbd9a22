use polars::prelude::*;
use rayon::prelude::*;

use super::feature_struct::*;
use crate::Matrix;

use std::io;


/// Struct `Sample` holds a batch sample:
/// a set of dense feature columns together with a target matrix
/// of shape `samples × outputs`.
/// For binary classification the target matrix has a single column
/// taking values in `{-1.0, +1.0}`;
/// for multi-class tasks one column per class
/// (a single `+1.0` per row, `-1.0` elsewhere);
/// for regression arbitrary real values.
#[derive(Debug)]
pub struct Sample {
    pub(crate) features: Vec<Feature>,
    pub(crate) targets: Matrix,
    pub(crate) n_sample: usize,
    pub(crate) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from row-major feature vectors
    /// and a target matrix.
    /// Feature columns get the dummy names `Feat. [1]`, `Feat. [2]`, ...
    ///
    /// A 1-D target vector can be passed
    /// via [`Matrix::from_column`](Matrix::from_column).
    pub fn from_rows<T: AsRef<[f64]>>(rows: &[T], targets: Matrix) -> Self {
        let n_sample = rows.len();
        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);

        let mut features = (1..=n_feature).map(|i| {
                let name = format!("Feat. [{i}]");
                Feature::new(name)
            })
            .collect::<Vec<_>>();

        for row in rows {
            let row = row.as_ref();
            assert!(
                row.len() == n_feature,
                "All rows must have the same number of features"
            );
            for (feat, &x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
        }

        Self::from_features(features, targets)
    }


    /// Construct a `Sample` from feature columns and a target matrix.
    pub fn from_features(features: Vec<Feature>, targets: Matrix) -> Self {
        let n_feature = features.len();
        let n_sample = features.first().map(Feature::len).unwrap_or(0);

        assert!(
            features.iter().all(|feat| feat.len() == n_sample),
            "All features must have the same number of examples"
        );
        assert!(
            targets.n_rows() == n_sample,
            "The target matrix must have one row per example. \
             Expected {n_sample} rows, got {} rows.",
            targets.n_rows(),
        );

        Self { features, targets, n_sample, n_feature, }
    }


    /// Convert a pair of `polars::DataFrame`s into `Sample`.
    /// `data` holds the feature columns and `targets` holds
    /// one column per output.
    /// This method takes the ownership for the given pair.
    pub fn from_dataframe(data: DataFrame, targets: DataFrame)
        -> io::Result<Self>
    {
        let (n_sample, n_feature) = data.shape();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        let target_columns = targets.get_columns()
            .iter()
            .map(|series| {
                series.f64()
                    .expect("The target is not a dtype f64")
                    .into_iter()
                    .collect::<Option<Vec<_>>>()
                    .unwrap()
            })
            .collect::<Vec<_>>();
        let targets = Matrix::from_columns(target_columns);

        assert!(
            targets.n_rows() == n_sample,
            "The target frame must have one row per example"
        );

        let sample = Self { features, targets, n_sample, n_feature, };
        Ok(sample)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the number of target outputs.
    pub fn n_outputs(&self) -> usize {
        self.targets.n_cols()
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `j`-th feature column.
    pub fn feature(&self, j: usize) -> &Feature {
        &self.features[j]
    }


    /// Returns the target matrix.
    pub fn targets(&self) -> &Matrix {
        &self.targets
    }
}
