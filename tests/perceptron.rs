use miniperceptrons::prelude::*;

use polars::prelude::*;


// Toy example  (+/- are the pos/neg examples)
// Separable at x = 0.
//
//   -   -       +   +
// --+---+---|---+---+--
//  -2  -1   0   1   2
//
fn separable() -> Sample {
    let s1 = Series::new("x", &[2.0, 1.0, -1.0, -2.0]);
    let target = Series::new("Outcome", &[1_f64, 1.0, 0.0, 0.0]);

    let df = DataFrame::new(vec![s1]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


// A few rows of the diabetes dataset, zeros included.
fn diabetes() -> Sample {
    let rows = vec![
        vec![6.0, 148.0, 72.0, 35.0,   0.0, 33.6, 0.627, 50.0],
        vec![1.0,  85.0, 66.0, 29.0,   0.0, 26.6, 0.351, 31.0],
        vec![8.0, 183.0, 64.0,  0.0,   0.0, 23.3, 0.672, 32.0],
        vec![1.0,  89.0, 66.0, 23.0,  94.0, 28.1, 0.167, 21.0],
        vec![0.0, 137.0, 40.0, 35.0, 168.0, 43.1, 2.288, 33.0],
        vec![5.0, 116.0, 74.0,  0.0,   0.0, 25.6, 0.201, 30.0],
        vec![3.0,  78.0, 50.0, 32.0,  88.0, 31.0, 0.248, 26.0],
        vec![10.0, 115.0, 0.0,  0.0,   0.0, 35.3, 0.134, 29.0],
        vec![2.0, 197.0, 70.0, 45.0, 543.0, 30.5, 0.158, 53.0],
        vec![8.0, 125.0, 96.0,  0.0,   0.0,  0.0, 0.232, 54.0],
    ];
    let target = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    Sample::from_rows(&DIABETES_FEATURES, &rows, Some(&target[..])).unwrap()
}


fn training_accuracy(f: &PerceptronClassifier, sample: &Sample) -> f64 {
    let predictions = f.predict_all(sample).unwrap();
    let target = sample.binary_target().unwrap();
    let n_correct = predictions.into_iter()
        .zip(target)
        .filter(|(p, y)| p == y)
        .count();
    n_correct as f64 / sample.shape().0 as f64
}


#[test]
fn separable_toy_test() {
    let sample = separable();

    let f = Perceptron::init()
        .learning_rate(0.1)
        .n_epochs(20)
        .fit(&sample)
        .unwrap();

    // The only mistake is `x = -1` in the first epoch (score 0 -> label 1).
    assert_eq!(f.weights(), &[0.1]);
    assert_eq!(f.bias(), -0.1);

    let history = f.history();
    assert_eq!(history.len(), 20);
    assert_eq!(history.errors_per_epoch()[0], 1);
    assert!(history.errors_per_epoch()[1..].iter().all(|&e| e == 0));
    assert!(history.accuracy_per_epoch().iter().all(|&a| a == 1.0));

    assert_eq!(f.predict_all(&sample).unwrap(), vec![1, 1, 0, 0]);
}


#[test]
fn history_has_one_entry_per_epoch() {
    let sample = diabetes();
    let preprocessor = Preprocessor::fit(ZeroImputer::diabetes(), &sample)
        .unwrap();
    let sample = preprocessor.preprocess(&sample).unwrap();

    for n_epochs in [1, 7, 100] {
        let f = Perceptron::init()
            .n_epochs(n_epochs)
            .fit(&sample)
            .unwrap();
        let history = f.history();
        assert_eq!(history.errors_per_epoch().len(), n_epochs);
        assert_eq!(history.accuracy_per_epoch().len(), n_epochs);
        assert!(history.errors_per_epoch().iter().all(|&e| e <= 10));
    }
}


#[test]
fn final_accuracy_matches_predictions() {
    let sample = diabetes();
    let preprocessor = Preprocessor::fit(ZeroImputer::diabetes(), &sample)
        .unwrap();
    let sample = preprocessor.preprocess(&sample).unwrap();

    let f = Perceptron::init()
        .fit(&sample)
        .unwrap();

    let last = f.history().final_accuracy().unwrap();
    assert_eq!(last, training_accuracy(&f, &sample));
}


#[test]
fn training_is_deterministic() {
    let sample = diabetes();

    let f = Perceptron::init().n_epochs(30).fit(&sample).unwrap();
    let g = Perceptron::init().n_epochs(30).fit(&sample).unwrap();

    assert_eq!(f, g);
}


#[test]
fn fit_records_hyperparameters() {
    let sample = separable();
    let f = Perceptron::init()
        .learning_rate(0.5)
        .n_epochs(3)
        .seed(7)
        .fit(&sample)
        .unwrap();

    let hp = f.hyperparameters().unwrap();
    assert_eq!(hp.learning_rate, 0.5);
    assert_eq!(hp.n_epochs, 3);
    assert_eq!(hp.seed, 7);
    assert_eq!(f.class_weights(), &ClassWeights::UNIFORM);
}


#[test]
fn fit_requires_a_binary_target() {
    let s1 = Series::new("x", &[1.0, 2.0]);
    let df = DataFrame::new(vec![s1]).unwrap();
    let unlabeled = Sample::from_features(df).unwrap();
    assert!(matches!(
        Perceptron::init().fit(&unlabeled),
        Err(PerceptronError::MissingTarget)
    ));

    let s1 = Series::new("x", &[1.0, 2.0]);
    let target = Series::new("class", &[1_f64, -1.0]);
    let df = DataFrame::new(vec![s1]).unwrap();
    let signed = Sample::from_dataframe(df, target).unwrap();
    assert!(matches!(
        Perceptron::init().fit(&signed),
        Err(PerceptronError::NonBinaryLabel { row: 1, .. })
    ));
}


#[test]
fn set_target_moves_the_column() {
    let s1 = Series::new("x", &[2.0, -2.0]);
    let s2 = Series::new("Outcome", &[1_i64, 0]);
    let df = DataFrame::new(vec![s1, s2]).unwrap();

    let sample = Sample::from_features(df)
        .unwrap()
        .set_target(TARGET_FEATURE)
        .unwrap();
    assert_eq!(sample.shape(), (2, 1));
    assert_eq!(sample.target(), &[1.0, 0.0]);

    let f = Perceptron::init().n_epochs(5).fit(&sample).unwrap();
    assert_eq!(f.predict_all(&sample).unwrap(), vec![1, 0]);
}


#[test]
fn predictions_are_deterministic() {
    let f = PerceptronClassifier::from_parts(
        vec![0.3, -0.2, 0.0, 0.1, 0.05, 0.4, 1.2, 0.01], -0.5
    ).unwrap();

    let sample = diabetes();
    let preprocessor = Preprocessor::fit(ZeroImputer::diabetes(), &sample)
        .unwrap();
    let sample = preprocessor.preprocess(&sample).unwrap();

    let first = f.predict_all(&sample).unwrap();
    let second = f.predict_all(&sample).unwrap();
    assert_eq!(first, second);
    assert!(first.iter().all(|&p| p == 0 || p == 1));
}


#[test]
fn history_is_plotted_to_svg() {
    let sample = separable();
    let f = Perceptron::init()
        .learning_rate(0.1)
        .n_epochs(5)
        .fit(&sample)
        .unwrap();

    let mut path = std::env::temp_dir();
    path.push(format!("miniperceptrons_history_{}.svg", std::process::id()));

    f.history().plot(&path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(!svg.is_empty());
    assert!(svg.contains("<svg"));
}
