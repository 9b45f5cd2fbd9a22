use serde::{Serialize, Deserialize};

use crate::{Matrix, Sample, Hypothesis, WeakMachine};
use crate::common::checker;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;


/// The version tag written into every serialized machine.
const FORMAT_VERSION: u32 = 0;


/// The strong classifier the boosting driver returns:
/// an ordered collection of weak machines,
/// each scaled by a per-output weight.
/// The collection only ever grows;
/// a trained machine can be handed back to the driver
/// as a warm start for further rounds.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoostedMachine {
    version: u32,
    n_outputs: usize,
    /// One weight vector per round, each of length `n_outputs`.
    weights: Vec<Vec<f64>>,
    /// One weak machine per round.
    machines: Vec<WeakMachine>,

    // Union of the selected feature indices.
    // Derived from `machines`; refreshed on every append and
    // after loading.
    #[serde(skip)]
    selected_indices: BTreeSet<usize>,
}


impl BoostedMachine {
    /// Construct an empty `BoostedMachine` with the given
    /// number of outputs.
    /// The output count is fixed for the lifetime of the machine.
    #[inline]
    pub fn new(n_outputs: usize) -> Self {
        assert!(n_outputs > 0);
        Self {
            version: FORMAT_VERSION,
            n_outputs,
            weights: Vec::new(),
            machines: Vec::new(),
            selected_indices: BTreeSet::new(),
        }
    }


    /// The number of outputs of this machine.
    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }


    /// The number of weak machines collected so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.machines.len()
    }


    /// Returns `true` if no weak machine was appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }


    /// The weight vectors, one per round.
    #[inline]
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights[..]
    }


    /// The weak machines, one per round.
    #[inline]
    pub fn machines(&self) -> &[WeakMachine] {
        &self.machines[..]
    }


    /// Append a pair `(machine, alpha)` to the current machine.
    /// The appended machine must predict `self.n_outputs()` outputs
    /// and `alpha` must hold one weight per output.
    #[inline]
    pub fn add_weak_machine<H>(&mut self, machine: H, alpha: Vec<f64>)
        where H: Into<WeakMachine>,
    {
        let machine = machine.into();
        checker::check_output_counts(self.n_outputs, machine.n_outputs());
        assert_eq!(alpha.len(), self.n_outputs);

        machine.feature_indices()
            .into_iter()
            .for_each(|i| { self.selected_indices.insert(i); });

        self.weights.push(alpha);
        self.machines.push(machine);
    }


    /// The sorted union of the feature indices selected by the
    /// collected weak machines.
    #[inline]
    pub fn feature_indices(&self) -> Vec<usize> {
        if self.selected_indices.is_empty() && !self.machines.is_empty() {
            // The cache is cold, e.g. after raw deserialization.
            return self.derived_indices().into_iter().collect();
        }
        self.selected_indices.iter().copied().collect()
    }


    /// Computes the strong score of the `row`-th example of `sample`
    /// for the given `output`.
    #[inline]
    pub fn score(&self, sample: &Sample, row: usize, output: usize) -> f64 {
        self.weights.iter()
            .zip(&self.machines[..])
            .map(|(alpha, h)| alpha[output] * h.score(sample, row, output))
            .sum::<f64>()
    }


    /// Computes the strong scores and the predicted labels of `sample`.
    ///
    /// The score matrix is the weighted sum of the weak scores.
    /// For a single output the label is `+1.0` if the score is
    /// non-negative and `-1.0` otherwise;
    /// for multiple outputs the label row is `-1.0` everywhere
    /// except for a single `+1.0` at the column of the largest score.
    pub fn predict(&self, sample: &Sample) -> (Matrix, Matrix) {
        let n_sample = sample.shape().0;

        let mut scores = Matrix::zeros(n_sample, self.n_outputs);
        let mut weak_scores = Matrix::zeros(n_sample, self.n_outputs);
        for (alpha, machine) in self.weights.iter().zip(&self.machines[..]) {
            machine.score_all(sample, &mut weak_scores);
            scores.scaled_add(&alpha[..], &weak_scores);
        }

        let labels = self.labels_of(&scores);
        (scores, labels)
    }


    /// Save this machine to a JSON file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string(self)
            .map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;
        fs::write(path, json)
    }


    /// Load a machine from a JSON file at `path`.
    /// The selected-index cache is rebuilt after loading.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let mut machine: Self = serde_json::from_str(&json)
            .map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;
        machine.selected_indices = machine.derived_indices();
        Ok(machine)
    }


    fn derived_indices(&self) -> BTreeSet<usize> {
        self.machines.iter()
            .flat_map(|h| h.feature_indices())
            .collect()
    }


    fn labels_of(&self, scores: &Matrix) -> Matrix {
        let n_sample = scores.n_rows();

        if self.n_outputs == 1 {
            let labels = scores.col(0)
                .iter()
                .map(|&s| if s >= 0.0 { 1.0 } else { -1.0 })
                .collect::<Vec<_>>();
            return Matrix::from_column(labels);
        }

        let mut labels = Matrix::zeros(n_sample, self.n_outputs);
        labels.fill(-1.0);
        for i in 0..n_sample {
            let row = scores.row(i);
            // Keep the first column on ties.
            let mut best = 0;
            for (j, &s) in row.iter().enumerate().skip(1) {
                if s > row[best] {
                    best = j;
                }
            }
            labels.set(i, best, 1.0);
        }
        labels
    }
}
