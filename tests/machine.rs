use lutboost::prelude::*;

use std::env;


#[test]
fn stump_machine_scores() {
    let machine = StumpMachine::new(0.0, 1.0, 0);

    let sample = Sample::from_rows(
        &[vec![1.0]], Matrix::from_column(vec![1.0])
    );
    assert_eq!(machine.score(&sample, 0, 0), 1.0);

    let sample = Sample::from_rows(
        &[vec![-1.0]], Matrix::from_column(vec![1.0])
    );
    assert_eq!(machine.score(&sample, 0, 0), -1.0);

    // The polarity flips the decision.
    let machine = StumpMachine::new(0.0, -1.0, 0);
    assert_eq!(machine.score(&sample, 0, 0), 1.0);
}


#[test]
fn lut_machine_scores() {
    let lut = Matrix::from_column(vec![1.0, -1.0, 1.0]);
    let machine = LutMachine::new(lut, vec![0]);

    let sample = Sample::from_rows(
        &[vec![0.0], vec![1.0], vec![2.0]],
        Matrix::from_column(vec![1.0, -1.0, 1.0]),
    );
    assert_eq!(machine.score(&sample, 0, 0), 1.0);
    assert_eq!(machine.score(&sample, 1, 0), -1.0);
    assert_eq!(machine.score(&sample, 2, 0), 1.0);
}


#[test]
fn stumps_and_luts_coexist_in_one_machine() {
    let stump = StumpMachine::new(0.0, 1.0, 0);
    let lut = LutMachine::new(Matrix::from_column(vec![1.0]), vec![0]);

    let mut machine = BoostedMachine::new(1);
    machine.add_weak_machine(stump, vec![1.0]);
    machine.add_weak_machine(lut, vec![1.0]);
    assert_eq!(machine.len(), 2);

    let sample = Sample::from_rows(
        &[vec![0.0]], Matrix::from_column(vec![1.0])
    );
    let (scores, labels) = machine.predict(&sample);
    assert_eq!(scores[(0, 0)], 2.0);
    assert_eq!(labels[(0, 0)], 1.0);

    assert_eq!(machine.score(&sample, 0, 0), 2.0);
    assert_eq!(machine.feature_indices(), vec![0]);
}


#[test]
#[should_panic]
fn output_count_mismatch_is_rejected() {
    let mut machine = BoostedMachine::new(2);
    machine.add_weak_machine(StumpMachine::new(0.0, 1.0, 0), vec![1.0, 1.0]);
}


#[test]
fn serialization_round_trip() {
    let stump = StumpMachine::new(0.25, -1.0, 3);
    let lut = LutMachine::new(
        Matrix::from_column(vec![1.0, -1.0, -1.0, 1.0]), vec![1]
    );

    let mut machine = BoostedMachine::new(1);
    machine.add_weak_machine(stump, vec![-1.25]);
    machine.add_weak_machine(lut, vec![0.75]);

    let path = env::temp_dir().join("lutboost_machine_round_trip.json");
    machine.save(&path).unwrap();
    let loaded = BoostedMachine::load(&path).unwrap();

    assert_eq!(machine.n_outputs(), loaded.n_outputs());
    assert_eq!(machine.weights(), loaded.weights());
    assert_eq!(machine.machines(), loaded.machines());
    assert_eq!(machine.feature_indices(), loaded.feature_indices());

    // The reconstructed machine predicts identically.
    let rows = vec![
        vec![0.1, 0.0, 0.0, 0.3],
        vec![0.9, 2.0, 0.0, 0.1],
        vec![0.0, 3.0, 0.0, 0.9],
    ];
    let sample = Sample::from_rows(
        &rows[..], Matrix::from_column(vec![1.0, -1.0, 1.0])
    );
    let (scores, labels) = machine.predict(&sample);
    let (loaded_scores, loaded_labels) = loaded.predict(&sample);
    assert_eq!(scores, loaded_scores);
    assert_eq!(labels, loaded_labels);
}


#[test]
fn prediction_is_idempotent() {
    let mut machine = BoostedMachine::new(1);
    machine.add_weak_machine(StumpMachine::new(0.5, 1.0, 0), vec![2.0]);
    machine.add_weak_machine(StumpMachine::new(1.5, -1.0, 1), vec![-0.5]);

    let rows = vec![vec![0.0, 2.0], vec![1.0, 1.0], vec![2.0, 0.0]];
    let sample = Sample::from_rows(
        &rows[..], Matrix::from_column(vec![1.0, -1.0, 1.0])
    );

    let (first_scores, first_labels) = machine.predict(&sample);
    let (second_scores, second_labels) = machine.predict(&sample);
    assert_eq!(first_scores, second_scores);
    assert_eq!(first_labels, second_labels);
}


#[test]
fn multi_output_labels_are_one_hot() {
    // Two outputs reading two different features.
    let lut = LutMachine::new(
        Matrix::from_columns(vec![
            vec![1.0, -1.0],
            vec![-1.0, 1.0],
        ]),
        vec![0, 1],
    );

    let mut machine = BoostedMachine::new(2);
    machine.add_weak_machine(lut, vec![1.0, 1.0]);

    let rows = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
    let targets = Matrix::from_rows(&[
        vec![1.0, -1.0],
        vec![-1.0, 1.0],
    ]);
    let sample = Sample::from_rows(&rows[..], targets);

    let (_, labels) = machine.predict(&sample);
    assert_eq!(labels[(0, 0)], 1.0);
    assert_eq!(labels[(0, 1)], -1.0);
    assert_eq!(labels[(1, 0)], -1.0);
    assert_eq!(labels[(1, 1)], 1.0);

    // Every row holds exactly one `+1`.
    for i in 0..2 {
        let positives = labels.row(i)
            .into_iter()
            .filter(|&v| v == 1.0)
            .count();
        assert_eq!(positives, 1);
    }
}
