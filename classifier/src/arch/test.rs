#![cfg(test)]

use ndarray::array;

use super::*;
use crate::{ClassifierErr, InputVector, Predictor, Value};

fn row(values: &[f64]) -> InputVector {
    InputVector::unchecked(values.iter().map(|v| Value::Number(*v)).collect())
}

fn labels(names: &[&str]) -> Vec<Value> {
    names.iter().map(|n| Value::from(*n)).collect()
}

#[test]
fn binary_logistic_thresholds_at_half() {
    let model = Logistic::new(vec![vec![1., -1.]], vec![0.]).unwrap();
    let x = array![[2., 1.], [0., 3.], [1., 1.]];

    assert_eq!(model.n_classes(), 2);
    assert_eq!(model.decide(x.view()), vec![1, 0, 1]);
}

#[test]
fn multinomial_logistic_picks_best_score() {
    let coef = vec![vec![1., 0.], vec![0., 1.], vec![0., 0.]];
    let model = Logistic::new(coef, vec![0., 0., 0.5]).unwrap();
    let x = array![[2., 1.], [0., 0.], [0., 4.]];

    assert_eq!(model.decide(x.view()), vec![0, 2, 1]);
}

#[test]
fn logistic_rejects_ragged_coefficients() {
    let err = Logistic::new(vec![vec![1., 2.], vec![1.]], vec![0., 0.]).unwrap_err();
    assert!(matches!(err, ClassifierErr::SizeMismatch { got: 1, expected: 2, .. }));
}

fn small_tree() -> Vec<Node> {
    vec![
        Node::Split {
            feature: 0,
            threshold: 1.5,
            left: 1,
            right: 2,
        },
        Node::Leaf { class: 0 },
        Node::Split {
            feature: 1,
            threshold: 0.5,
            left: 3,
            right: 4,
        },
        Node::Leaf { class: 1 },
        Node::Leaf { class: 0 },
    ]
}

#[test]
fn tree_goes_left_on_equal_threshold() {
    let tree = Tree::new(small_tree(), 2, 2).unwrap();
    let x = array![[1.5, 9.], [2., 0.5], [2., 0.6]];

    assert_eq!(tree.decide(x.view()), vec![0, 1, 0]);
}

#[test]
fn tree_rejects_backward_children() {
    let mut nodes = small_tree();
    nodes[2] = Node::Split {
        feature: 1,
        threshold: 0.5,
        left: 0,
        right: 4,
    };

    assert!(matches!(
        Tree::new(nodes, 2, 2),
        Err(ClassifierErr::InvalidModel(_))
    ));
}

#[test]
fn tree_rejects_out_of_range_classes() {
    assert!(Tree::new(vec![Node::Leaf { class: 2 }], 1, 2).is_err());
}

#[test]
fn forest_majority_vote_breaks_ties_low() {
    let always = |class| Tree::new(vec![Node::Leaf { class }], 1, 3).unwrap();

    let majority = Forest::new(vec![always(2), always(1), always(2)]).unwrap();
    let tie = Forest::new(vec![always(2), always(1)]).unwrap();
    let x = array![[0.]];

    assert_eq!(majority.decide(x.view()), vec![2]);
    assert_eq!(tie.decide(x.view()), vec![1]);
}

#[test]
fn forest_rejects_mixed_shapes() {
    let a = Tree::new(vec![Node::Leaf { class: 0 }], 1, 2).unwrap();
    let b = Tree::new(vec![Node::Leaf { class: 0 }], 2, 2).unwrap();
    assert!(Forest::new(vec![a, b]).is_err());
    assert!(Forest::new(vec![]).is_err());
}

fn comparator() -> Sequential {
    Sequential::new([
        Dense::new((2, 2), vec![1., 0., 0., 1.], vec![0., 0.], Some(ActFn::relu())).unwrap(),
        Dense::new((2, 1), vec![1., -1.], vec![0.], Some(ActFn::sigmoid(1.))).unwrap(),
    ])
    .unwrap()
}

#[test]
fn sequential_single_output_thresholds_at_half() {
    let model = comparator();
    let x = array![[3., 1.], [1., 3.], [-1., -2.]];

    assert_eq!(model.n_features(), 2);
    assert_eq!(model.n_classes(), 2);
    assert_eq!(model.decide(x.view()), vec![1, 0, 1]);
}

#[test]
fn sequential_multi_output_uses_argmax() {
    let model = Sequential::new([Dense::new(
        (2, 3),
        vec![1., 0., 0., 0., 1., 0.],
        vec![0., 0., 0.5],
        None,
    )
    .unwrap()])
    .unwrap();
    let x = array![[2., 1.], [0., 0.]];

    assert_eq!(model.decide(x.view()), vec![0, 2]);
}

#[test]
fn sequential_rejects_unchained_layers() {
    let err = Sequential::new([
        Dense::new((2, 3), vec![0.; 6], vec![0.; 3], None).unwrap(),
        Dense::new((2, 1), vec![0.; 2], vec![0.], None).unwrap(),
    ])
    .unwrap_err();

    assert!(matches!(err, ClassifierErr::SizeMismatch { got: 2, expected: 3, .. }));
}

#[test]
fn dense_rejects_empty_shapes() {
    assert!(matches!(
        Dense::new((24, 0), vec![], vec![], None),
        Err(ClassifierErr::InvalidModel(_))
    ));
    assert!(Dense::new((0, 2), vec![], vec![0.; 2], None).is_err());
}

#[test]
fn dense_rejects_wrong_parameter_count() {
    assert!(Dense::new((2, 2), vec![0.; 3], vec![0.; 2], None).is_err());
    assert!(Dense::new((2, 2), vec![0.; 4], vec![0.; 1], None).is_err());
}

#[test]
fn encoder_maps_text_through_categories() {
    let encoder = Encoder::new(2)
        .with_categories(1, [("yes", 1.), ("no", 0.)])
        .unwrap();
    let batch = [InputVector::unchecked(vec![Value::Number(4.), Value::from(" YES ")])];

    assert_eq!(encoder.encode(&batch).unwrap(), array![[4f32, 1.]]);
}

#[test]
fn encoder_reports_unknown_text() {
    let encoder = Encoder::new(2)
        .with_categories(1, [("yes", 1.), ("no", 0.)])
        .unwrap();
    let batch = [InputVector::unchecked(vec![Value::from("high"), Value::from("no")])];

    let err = encoder.encode(&batch).unwrap_err();
    assert!(matches!(
        err,
        ClassifierErr::UnencodedValue { feature, value } if feature == "age" && value == "high"
    ));
}

#[test]
fn encoder_checks_arity() {
    let err = Encoder::new(3).encode(&[row(&[1., 2.])]).unwrap_err();
    assert!(matches!(err, ClassifierErr::SizeMismatch { got: 2, expected: 3, .. }));
}

#[test]
fn encoder_applies_scaler() {
    let encoder = Encoder::new(2)
        .with_scaler(vec![1., 10.], vec![2., 5.])
        .unwrap();

    assert_eq!(encoder.encode(&[row(&[3., 0.])]).unwrap(), array![[1f32, -2.]]);
    assert!(Encoder::new(2).with_scaler(vec![0., 0.], vec![1., 0.]).is_err());
}

#[test]
fn pipeline_maps_indices_to_labels() {
    let tree = Tree::new(small_tree(), 2, 2).unwrap();
    let pipeline = Pipeline::new(Encoder::new(2), labels(&["notckd", "ckd"]), tree).unwrap();

    let out = pipeline.predict(&[row(&[0., 0.]), row(&[2., 0.])]).unwrap();
    assert_eq!(out, labels(&["notckd", "ckd"]));
}

#[test]
fn pipeline_rejects_mismatched_parts() {
    let tree = || Tree::new(small_tree(), 2, 2).unwrap();

    assert!(Pipeline::new(Encoder::new(3), labels(&["a", "b"]), tree()).is_err());
    assert!(Pipeline::new(Encoder::new(2), labels(&["a"]), tree()).is_err());
}

#[test]
fn pipeline_rejects_empty_class_lists() {
    let leaf = Tree::new(vec![Node::Leaf { class: 0 }], 1, 0);
    assert!(leaf.is_err());

    let tree = Tree::new(small_tree(), 2, 2).unwrap();
    let err = Pipeline::new(Encoder::new(2), vec![], tree).unwrap_err();
    assert!(matches!(err, ClassifierErr::InvalidModel(_)));
}

/// Claims more classes than it was built with.
struct Liar;

impl Estimator for Liar {
    fn n_features(&self) -> usize {
        1
    }

    fn n_classes(&self) -> usize {
        1
    }

    fn decide(&self, x: ndarray::ArrayView2<f32>) -> Vec<usize> {
        vec![3; x.nrows()]
    }
}

#[test]
fn pipeline_reports_out_of_range_classes() {
    let pipeline = Pipeline::new(Encoder::new(1), labels(&["ckd"]), Liar).unwrap();

    let err = pipeline.predict(&[row(&[0.])]).unwrap_err();
    assert!(matches!(err, ClassifierErr::InvalidModel(msg) if msg.contains("class index 3")));
}
