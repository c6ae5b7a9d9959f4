use miniperceptrons::prelude::*;


#[test]
fn one_of_each_outcome() {
    let predictions = [1, 0, 1, 0];
    let labels = [1, 1, 0, 0];

    let metrics = evaluate(&predictions, &labels).unwrap();
    let cm = metrics.confusion_matrix;
    assert_eq!((cm.tp, cm.tn, cm.fp, cm.fn_), (1, 1, 1, 1));
    assert_eq!(cm.total(), 4);

    assert_eq!(metrics.accuracy, 0.5);
    assert_eq!(metrics.precision, 0.5);
    assert_eq!(metrics.recall, 0.5);
    assert_eq!(metrics.f1_score, 0.5);
}


#[test]
fn perfect_predictions() {
    let labels = [1, 0, 0, 1, 1];
    let metrics = evaluate(&labels, &labels).unwrap();

    assert_eq!(metrics.accuracy, 1.0);
    assert_eq!(metrics.precision, 1.0);
    assert_eq!(metrics.recall, 1.0);
    assert_eq!(metrics.f1_score, 1.0);
}


#[test]
fn zero_denominators_give_zero() {
    // Nothing predicted positive.
    let metrics = evaluate(&[0, 0, 0], &[1, 0, 1]).unwrap();
    assert_eq!(metrics.precision, 0.0);
    assert_eq!(metrics.recall, 0.0);
    assert_eq!(metrics.f1_score, 0.0);
    assert_eq!(metrics.accuracy, 1.0 / 3.0);

    // Nothing labeled positive.
    let metrics = evaluate(&[1, 0], &[0, 0]).unwrap();
    assert_eq!(metrics.precision, 0.0);
    assert_eq!(metrics.recall, 0.0);
    assert_eq!(metrics.f1_score, 0.0);
}


#[test]
fn unequal_lengths_are_rejected() {
    let err = evaluate(&[1, 0, 1], &[1, 0]).unwrap_err();
    assert!(matches!(
        err,
        PerceptronError::ShapeMismatch { got: 2, expected: 3, .. }
    ));

    assert!(evaluate(&[], &[]).is_err());
}


#[test]
fn prediction_summary_and_labels() {
    let predictions = [1, 0, 0, 1, 0];
    let summary = PredictionSummary::from_predictions(&predictions);
    assert_eq!(summary.diabetic, 2);
    assert_eq!(summary.non_diabetic, 3);

    assert_eq!(Label::from_prediction(1).name(), "Diabetic");
    assert_eq!(Label::from_prediction(0).name(), "Non-Diabetic");
}


#[test]
fn metrics_serialize_with_short_keys() {
    let metrics = evaluate(&[1, 0, 1, 0], &[1, 1, 0, 0]).unwrap();
    let json = serde_json::to_value(metrics).unwrap();

    let cm = &json["confusion_matrix"];
    assert_eq!(cm["tp"], 1);
    assert_eq!(cm["fn"], 1);
    assert_eq!(json["f1_score"], 0.5);

    let label = serde_json::to_value(Label::NonDiabetic).unwrap();
    assert_eq!(label, "Non-Diabetic");
}
