use std::path::Path;

use classifier::{
    ClassifierErr, FEATURES, InputVector, Label, LoadPolicy, Notification, Predictor, Registry,
    Result, Session, Validation, Value, classify, collect, load,
};

const SICK: [&str; 24] = [
    "62", "80", "1.010", "3", "0", "normal", "abnormal", "present", "notpresent", "423", "53",
    "1.8", "135", "4.5", "9.6", "31", "7500", "3.9", "yes", "yes", "no", "poor", "no", "yes",
];

const HEALTHY: [&str; 24] = [
    "40", "80", "1.025", "0", "0", "normal", "normal", "notpresent", "notpresent", "140", "10",
    "1.2", "135", "5.0", "15", "48", "10400", "4.5", "no", "no", "no", "good", "no", "no",
];

/// Answers "ckd" only for the exact vector it was built with.
struct ExactStub {
    expected: InputVector,
}

impl Predictor for ExactStub {
    fn predict(&self, batch: &[InputVector]) -> Result<Vec<Label>> {
        Ok(batch
            .iter()
            .map(|row| {
                if *row == self.expected {
                    Value::from("ckd")
                } else {
                    Value::from("unexpected")
                }
            })
            .collect())
    }
}

fn numeric_entries_with_text_hypertension() -> Vec<String> {
    FEATURES
        .iter()
        .enumerate()
        .map(|(i, feature)| match *feature {
            "hypertension" => "yes".to_string(),
            _ => format!("{}.5", i + 1),
        })
        .collect()
}

#[test]
fn stub_registry_classifies_the_collected_vector() {
    let raw = numeric_entries_with_text_hypertension();

    let vector = collect(&FEATURES, &raw, Validation::Lenient).unwrap();
    assert_eq!(vector.len(), 24);
    assert_eq!(vector.iter().filter(|v| v.as_number().is_some()).count(), 23);
    assert_eq!(vector[18], Value::from("yes"));
    assert_eq!(vector[0], Value::Number(1.5));

    let mut registry = Registry::new();
    registry.insert(
        "rf",
        Box::new(ExactStub {
            expected: vector.clone(),
        }),
    );

    let predictor = registry.get("rf").unwrap();
    assert_eq!(classify(predictor, &vector).unwrap(), Value::from("ckd"));

    let session = Session::new(&registry, Validation::Lenient);
    assert_eq!(
        session.submit(Some("rf"), &raw),
        Notification::Prediction(Value::from("ckd"))
    );
}

fn shipped() -> Registry {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../models");
    load(dir, LoadPolicy::FailFast).unwrap().registry
}

#[test]
fn shipped_models_agree_on_clear_cases() {
    let registry = shipped();
    let session = Session::new(&registry, Validation::Lenient);

    for name in ["logistic_regression", "decision_tree", "random_forest", "neural_net"] {
        assert_eq!(
            session.submit(Some(name), &SICK),
            Notification::Prediction(Value::from("ckd")),
            "{name}"
        );
        assert_eq!(
            session.submit(Some(name), &HEALTHY),
            Notification::Prediction(Value::from("notckd")),
            "{name}"
        );
    }
}

#[test]
fn unencodable_text_is_an_inference_failure() {
    let registry = shipped();
    let session = Session::new(&registry, Validation::Lenient);

    let mut raw = SICK;
    raw[21] = "ravenous";

    let note = session.submit(Some("logistic_regression"), &raw);
    assert!(matches!(&note, Notification::InferenceFailed(msg) if msg.contains("appetite")));
}

#[test]
fn short_vectors_never_reach_a_model() {
    let short = InputVector::try_from(vec![Value::Number(1.0); 23]);
    assert!(matches!(
        short,
        Err(ClassifierErr::SizeMismatch {
            got: 23,
            expected: 24,
            ..
        })
    ));

    let registry = shipped();
    let session = Session::new(&registry, Validation::Lenient);
    let note = session.submit(Some("decision_tree"), &SICK[..23]);
    assert!(matches!(note, Notification::InferenceFailed(_)));
}
