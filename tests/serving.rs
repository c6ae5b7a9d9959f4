use miniperceptrons::prelude::*;

use polars::prelude::{DataFrame, NamedFrom, Series};


const METADATA: &str = r#"{
    "feature_names": [
        "Pregnancies", "Glucose", "BloodPressure", "SkinThickness",
        "Insulin", "BMI", "DiabetesPedigreeFunction", "Age"
    ],
    "models": [
        {
            "model_name": "glucose_threshold",
            "description": "Predicts diabetic above a glucose of 100.",
            "metrics": {"accuracy": 0.75}
        },
        {
            "model_name": "always_positive",
            "description": "Predicts diabetic for everyone."
        }
    ],
    "best_model": "glucose_threshold",
    "preprocessing_steps": [
        "Replace zeros with the median",
        "Standard scaling"
    ]
}"#;


fn identity_preprocessor() -> Preprocessor {
    let scaler = StandardScaler::from_parts(vec![0.0; 8], vec![1.0; 8])
        .unwrap();
    Preprocessor::new(ZeroImputer::diabetes(), scaler)
}


// `Glucose >= 100`.
fn glucose_threshold() -> PerceptronClassifier {
    let mut weights = vec![0.0; 8];
    weights[1] = 1.0;
    PerceptronClassifier::from_parts(weights, -100.0).unwrap()
}


fn always_positive() -> PerceptronClassifier {
    PerceptronClassifier::from_parts(vec![0.0; 8], 1.0).unwrap()
}


fn context() -> ServingContext {
    let metadata = ModelMetadata::from_json(METADATA).unwrap();
    ServingContextBuilder::new()
        .metadata(&metadata)
        .preprocessor(identity_preprocessor())
        .model("glucose_threshold", "Glucose Threshold", glucose_threshold())
        .model("always_positive", "Always Positive", always_positive())
        .build()
        .unwrap()
}


fn rows() -> Vec<Vec<f64>> {
    vec![
        vec![6.0, 148.0, 72.0, 35.0,  80.0, 33.6, 0.627, 50.0],
        vec![1.0,  85.0, 66.0, 29.0,  90.0, 26.6, 0.351, 31.0],
        vec![8.0, 183.0, 64.0, 20.0, 100.0, 23.3, 0.672, 32.0],
        vec![1.0,  89.0, 66.0, 23.0,  94.0, 28.1, 0.167, 21.0],
    ]
}


#[test]
fn labeled_batch_is_evaluated() {
    let context = context();
    let labels = [1.0, 0.0, 1.0, 1.0];
    let sample = context.sample_from_rows(&rows(), Some(&labels[..]))
        .unwrap();

    let report = context.predict(&["glucose_threshold", "always_positive"], &sample)
        .unwrap();
    assert!(report.has_ground_truth);
    assert_eq!(report.num_samples, 4);
    assert_eq!(report.results.len(), 2);


    let threshold = &report.results[0];
    assert_eq!(threshold.model_name, "glucose_threshold");
    assert_eq!(threshold.model_display_name, "Glucose Threshold");
    assert_eq!(threshold.outcome.predictions(), &[1, 0, 1, 0]);

    let metrics = threshold.outcome.metrics().unwrap();
    assert_eq!(metrics.accuracy, 0.75);
    assert_eq!(metrics.precision, 1.0);
    assert_eq!(metrics.recall, 2.0 / 3.0);


    let positive = &report.results[1];
    assert_eq!(positive.outcome.predictions(), &[1, 1, 1, 1]);
    match &positive.outcome {
        PredictionOutcome::Evaluated { metrics, prediction_summary, .. } => {
            assert_eq!(metrics.confusion_matrix.fp, 1);
            assert_eq!(metrics.recall, 1.0);
            assert_eq!(prediction_summary.diabetic, 4);
            assert_eq!(prediction_summary.non_diabetic, 0);
        },
        PredictionOutcome::Unlabeled { .. } => {
            panic!("a labeled batch must be evaluated");
        },
    }
}


#[test]
fn unlabeled_batch_gets_label_names() {
    let context = context();
    let sample = context.sample_from_rows(&rows()[..1], None).unwrap();

    let report = context.predict(&["glucose_threshold"], &sample).unwrap();
    assert!(!report.has_ground_truth);
    assert_eq!(report.num_samples, 1);

    match &report.results[0].outcome {
        PredictionOutcome::Unlabeled { predictions, prediction_labels } => {
            assert_eq!(predictions, &vec![1]);
            assert_eq!(prediction_labels, &vec![Label::Diabetic]);
        },
        PredictionOutcome::Evaluated { .. } => {
            panic!("an unlabeled batch cannot be evaluated");
        },
    }
}


#[test]
fn report_serializes_like_a_response() {
    let context = context();
    let sample = context.sample_from_rows(&rows()[..1], None).unwrap();
    let report = context.predict(&["always_positive"], &sample).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    let result = &json["results"][0];
    assert_eq!(result["model_name"], "always_positive");
    assert_eq!(result["predictions"][0], 1);
    assert_eq!(result["prediction_labels"][0], "Diabetic");
    assert_eq!(json["has_ground_truth"], false);
}


#[test]
fn unknown_model_is_rejected() {
    let context = context();
    let sample = context.sample_from_rows(&rows(), None).unwrap();

    let err = context.predict(&["random_forest"], &sample).unwrap_err();
    assert!(matches!(err, PerceptronError::UnknownModel(name) if name == "random_forest"));
}


#[test]
fn columns_must_follow_the_feature_order() {
    let context = context();

    let mut names = DIABETES_FEATURES;
    names.swap(0, 1);
    let sample = Sample::from_rows(&names, &rows(), None).unwrap();
    let err = context.predict(&["always_positive"], &sample).unwrap_err();
    assert!(matches!(err, PerceptronError::FeatureNameMismatch { index: 0, .. }));

    let s1 = Series::new("Glucose", &[148.0]);
    let df = DataFrame::new(vec![s1]).unwrap();
    let narrow = Sample::from_features(df).unwrap();
    let err = context.predict(&["always_positive"], &narrow).unwrap_err();
    assert!(matches!(
        err,
        PerceptronError::ShapeMismatch { got: 1, expected: 8, .. }
    ));
}


#[test]
fn model_info_follows_the_metadata() {
    let info = context().model_info();

    assert_eq!(info.best_model.as_deref(), Some("glucose_threshold"));
    assert_eq!(info.feature_names, DIABETES_FEATURES.to_vec());
    assert_eq!(info.preprocessing_steps.len(), 2);

    let names = info.models.iter()
        .map(|model| model.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["glucose_threshold", "always_positive"]);
    assert_eq!(
        info.models[1].description,
        "Predicts diabetic for everyone."
    );

    // Recorded metrics are carried verbatim.
    assert_eq!(info.models[0].metrics["accuracy"], 0.75);
    assert!(info.models[1].metrics.is_null());

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["models"][0]["metrics"]["accuracy"], 0.75);
}


#[test]
fn metrics_can_be_attached_without_metadata() {
    let context = ServingContext::builder()
        .feature_names(DIABETES_FEATURES)
        .preprocessor(identity_preprocessor())
        .model("always_positive", "Always Positive", always_positive())
        .metrics("always_positive", serde_json::json!({"recall": 1.0}))
        .build()
        .unwrap();

    let model = context.model("always_positive").unwrap();
    assert_eq!(model.metrics()["recall"], 1.0);
    assert_eq!(context.model_info().models[0].metrics["recall"], 1.0);
}


#[test]
fn metadata_round_trips_through_json() {
    let metadata = ModelMetadata::from_json(METADATA).unwrap();
    assert_eq!(metadata.models.len(), 2);
    assert_eq!(metadata.record("glucose_threshold").unwrap().metrics["accuracy"], 0.75);
    assert!(metadata.models[1].metrics.is_null());
    assert!(metadata.record("perceptron").is_none());

    let json = metadata.to_json().unwrap();
    assert_eq!(ModelMetadata::from_json(&json).unwrap(), metadata);
}


#[test]
fn builder_requires_every_component() {
    let err = ServingContext::builder()
        .preprocessor(identity_preprocessor())
        .model("always_positive", "Always Positive", always_positive())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PerceptronError::MissingComponent(_)));

    let err = ServingContext::builder()
        .feature_names(DIABETES_FEATURES)
        .model("always_positive", "Always Positive", always_positive())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PerceptronError::MissingComponent(_)));

    let err = ServingContext::builder()
        .feature_names(DIABETES_FEATURES)
        .preprocessor(identity_preprocessor())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PerceptronError::MissingComponent(_)));
}


#[test]
fn builder_checks_the_registry() {
    let narrow = PerceptronClassifier::from_parts(vec![1.0; 3], 0.0).unwrap();
    let err = ServingContext::builder()
        .feature_names(DIABETES_FEATURES)
        .preprocessor(identity_preprocessor())
        .model("narrow", "Narrow", narrow)
        .build()
        .err()
        .unwrap();
    assert!(matches!(
        err,
        PerceptronError::ShapeMismatch { got: 3, expected: 8, .. }
    ));

    let err = ServingContext::builder()
        .feature_names(DIABETES_FEATURES)
        .preprocessor(identity_preprocessor())
        .model("always_positive", "Always Positive", always_positive())
        .model("always_positive", "Again", always_positive())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PerceptronError::DuplicateModel(_)));

    let err = ServingContext::builder()
        .feature_names(DIABETES_FEATURES)
        .preprocessor(identity_preprocessor())
        .model("always_positive", "Always Positive", always_positive())
        .best_model("perceptron")
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PerceptronError::UnknownModel(_)));
}


#[test]
fn trained_models_can_be_served() {
    let labels = [1.0, 0.0, 1.0, 0.0];
    let train = Sample::from_rows(&DIABETES_FEATURES, &rows(), Some(&labels[..]))
        .unwrap();

    let preprocessor = Preprocessor::fit(ZeroImputer::diabetes(), &train)
        .unwrap();
    let scaled = preprocessor.preprocess(&train).unwrap();
    let perceptron = Perceptron::init().fit(&scaled).unwrap();
    let weighted = Perceptron::weighted(ClassWeight::Balanced)
        .fit(&scaled)
        .unwrap();
    let expected = perceptron.predict_all(&scaled).unwrap();

    let context = ServingContext::builder()
        .feature_names(DIABETES_FEATURES)
        .preprocessor(preprocessor)
        .model("perceptron", "Perceptron", perceptron)
        .model("weighted_perceptron", "Weighted Perceptron", weighted)
        .best_model("weighted_perceptron")
        .build()
        .unwrap();

    let report = context.predict(&["perceptron", "weighted_perceptron"], &train)
        .unwrap();
    assert_eq!(report.results[0].outcome.predictions(), &expected[..]);
    assert_eq!(context.model("weighted_perceptron").unwrap().display_name(), "Weighted Perceptron");
}
