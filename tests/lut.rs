use lutboost::prelude::*;
use lutboost::weighted_histogram;

use rand::prelude::*;


#[test]
fn weighted_histogram_matches_the_naive_sum() {
    let mut rng = StdRng::seed_from_u64(1234);

    let n_entries = 10;
    let values = (0..100)
        .map(|_| rng.gen_range(0..n_entries) as f64)
        .collect::<Vec<_>>();
    let weights = (0..100)
        .map(|_| rng.gen_range(-1.0..1.0))
        .collect::<Vec<_>>();

    let feature = Feature::from_values("f", values.clone());
    let mut histogram = vec![0.0; n_entries];
    weighted_histogram(&feature, &weights[..], &mut histogram[..]);

    for bucket in 0..n_entries {
        let expected = values.iter()
            .zip(&weights[..])
            .filter(|(&v, _)| v as usize == bucket)
            .map(|(_, &w)| w)
            .sum::<f64>();
        assert!(
            (histogram[bucket] - expected).abs() < 1e-12,
            "bucket {bucket}: {} vs {expected}",
            histogram[bucket],
        );
    }
}


#[test]
fn unweighted_histogram_counts_the_values() {
    let values = vec![2.0, 8.0, 4.0, 7.0, 1.0, 0.0, 6.0, 3.0, 6.0, 1.0];
    let feature = Feature::from_values("f", values);
    let weights = vec![1.0; 10];

    let mut histogram = vec![0.0; 10];
    weighted_histogram(&feature, &weights[..], &mut histogram[..]);

    let expected = [1.0, 2.0, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 0.0];
    assert_eq!(&histogram[..], &expected[..]);
}


/// A two-class sample over integer features in `[0, 10)`.
/// Every feature except `selected` carries the same values in both
/// classes (so their gradient histograms cancel exactly);
/// the `selected` feature is shifted by `10` for the positive
/// class and separates the classes perfectly.
fn shifted_sample(n: usize, n_feature: usize, selected: usize) -> Sample {
    let base = (0..n)
        .map(|i| {
            (0..n_feature)
                .map(|j| ((i + j) % 10) as f64)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut rows = Vec::with_capacity(2 * n);
    let mut labels = Vec::with_capacity(2 * n);
    for row in &base {
        let mut row = row.clone();
        row[selected] += 10.0;
        rows.push(row);
        labels.push(1.0);
    }
    for row in &base {
        rows.push(row.clone());
        labels.push(-1.0);
    }

    Sample::from_rows(&rows[..], Matrix::from_column(labels))
}


fn logistic_gradient(sample: &Sample) -> Matrix {
    let (n_sample, _) = sample.shape();
    let zeros = Matrix::zeros(n_sample, sample.n_outputs());
    Loss::Logistic.loss_gradient(sample.targets(), &zeros)
}


#[test]
fn the_discriminative_feature_is_selected() {
    let sample = shifted_sample(100, 8, 5);

    let trainer = LutTrainer::new(20, 1, SelectionType::Independent);
    let gradient = logistic_gradient(&sample);
    let machine = trainer.produce(&sample, &gradient);

    assert_eq!(machine.feature_indices(), vec![5]);
}


#[test]
fn lut_entries_are_the_negated_class_signs() {
    let sample = shifted_sample(100, 4, 2);

    let trainer = LutTrainer::new(20, 1, SelectionType::Independent);
    let gradient = logistic_gradient(&sample);
    let machine = trainer.produce(&sample, &gradient);

    // Buckets 0..10 hold the negative class, buckets 10..20 the
    // positive one; the table carries the negated class signs.
    let column = machine.lut.col(0);
    assert!(column[..10].iter().all(|&v| v == 1.0));
    assert!(column[10..].iter().all(|&v| v == -1.0));
}


#[test]
fn every_lut_entry_is_plus_or_minus_one() {
    // Unbalanced random labels leave some buckets unobserved;
    // those entries still must come out as valid scores.
    let mut rng = StdRng::seed_from_u64(7);
    let rows = (0..50)
        .map(|_| {
            (0..6).map(|_| rng.gen_range(0..12) as f64).collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let labels = (0..50)
        .map(|_| if rng.gen_bool(0.8) { 1.0 } else { -1.0 })
        .collect::<Vec<_>>();

    let sample = Sample::from_rows(&rows[..], Matrix::from_column(labels));
    let trainer = LutTrainer::new(64, 1, SelectionType::Independent);
    let gradient = logistic_gradient(&sample);
    let machine = trainer.produce(&sample, &gradient);

    for column in machine.lut.columns() {
        assert!(column.iter().all(|&v| v == 1.0 || v == -1.0));
    }
}


/// Four classes with one-vs-all targets over six integer features:
/// feature `o < 4` separates class `o` from the rest,
/// feature `4` separates all four classes at once,
/// feature `5` is constant.
fn four_class_sample(n_per_class: usize) -> Sample {
    let n_class = 4;
    let mut rows = Vec::new();
    let mut target_rows = Vec::new();

    for class in 0..n_class {
        for i in 0..n_per_class {
            let jitter = (i % 5) as f64;
            let mut row = vec![0.0; 6];
            for (o, value) in row.iter_mut().enumerate().take(4) {
                *value = if class == o { 10.0 + jitter } else { jitter };
            }
            row[4] = (class * 5) as f64 + jitter;
            row[5] = 0.0;
            rows.push(row);

            let mut target = vec![-1.0; n_class];
            target[class] = 1.0;
            target_rows.push(target);
        }
    }

    Sample::from_rows(&rows[..], Matrix::from_rows(&target_rows[..]))
}


#[test]
fn independent_selection_picks_one_feature_per_output() {
    let sample = four_class_sample(25);

    let trainer = LutTrainer::new(20, 4, SelectionType::Independent);
    let gradient = logistic_gradient(&sample);
    let machine = trainer.produce(&sample, &gradient);

    assert_eq!(machine.feature_indices(), vec![0, 1, 2, 3]);
}


#[test]
fn shared_selection_picks_a_single_feature_for_all_outputs() {
    let sample = four_class_sample(25);

    let trainer = LutTrainer::new(20, 4, SelectionType::Shared);
    let gradient = logistic_gradient(&sample);
    let machine = trainer.produce(&sample, &gradient);

    assert_eq!(machine.feature_indices(), vec![4, 4, 4, 4]);
}


#[test]
#[should_panic]
fn out_of_range_features_are_rejected() {
    let rows = vec![vec![0.0], vec![25.0]];
    let targets = Matrix::from_column(vec![1.0, -1.0]);
    let sample = Sample::from_rows(&rows[..], targets);

    let trainer = LutTrainer::new(20, 1, SelectionType::Independent);
    let gradient = logistic_gradient(&sample);
    let _ = trainer.produce(&sample, &gradient);
}


#[test]
#[should_panic]
fn fractional_features_are_rejected() {
    let rows = vec![vec![0.5], vec![3.0]];
    let targets = Matrix::from_column(vec![1.0, -1.0]);
    let sample = Sample::from_rows(&rows[..], targets);

    let trainer = LutTrainer::new(20, 1, SelectionType::Independent);
    let gradient = logistic_gradient(&sample);
    let _ = trainer.produce(&sample, &gradient);
}
