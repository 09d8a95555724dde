#![allow(dead_code)]

use std::sync::Arc;

use ptsd_core::fields::{FEATURE_COUNT, feature_names};
use ptsd_model::artifact::{
    ClassifierArtifact, ClassifierModel, FORMAT_VERSION, ModelBundle, ScalerArtifact,
};
use ptsd_model::estimator::RiskEstimator;
use ptsd_model::forest::{DecisionTree, LEAF, RandomForest};
use ptsd_model::logistic::LogisticRegression;
use ptsd_model::scaler::StandardScaler;

pub fn scaler(mean: Vec<f64>, scale: Vec<f64>) -> ScalerArtifact {
    ScalerArtifact {
        format_version: FORMAT_VERSION,
        feature_names: None,
        scaler: StandardScaler { mean, scale },
    }
}

pub fn identity_scaler() -> ScalerArtifact {
    scaler(vec![0.0; FEATURE_COUNT], vec![1.0; FEATURE_COUNT])
}

/// Scaler centred on the intake form defaults.
pub fn intake_scaler() -> ScalerArtifact {
    scaler(
        vec![
            50.0, 1.5, 1.0, 80.0, 1.5, 6.0, 102.0, 1.0, 50.0, 1.2, 1.4, 12.5, 2.0, 0.5, 75.0, 1.5,
        ],
        vec![
            15.0, 1.1, 0.8, 10.0, 1.1, 2.5, 3.0, 0.8, 10.0, 0.4, 0.3, 1.8, 1.4, 0.2, 12.0, 1.1,
        ],
    )
}

pub fn logistic(coefficients: Vec<f64>, intercept: f64) -> ClassifierArtifact {
    ClassifierArtifact {
        format_version: FORMAT_VERSION,
        feature_names: None,
        model: ClassifierModel::LogisticRegression(LogisticRegression {
            coefficients,
            intercept,
        }),
    }
}

/// Distinct weight per feature so that any swap of two inputs moves the score.
pub fn distinct_logistic() -> ClassifierArtifact {
    logistic(
        (0..FEATURE_COUNT).map(|i| 0.1 * (i as f64 + 1.0)).collect(),
        -0.3,
    )
}

/// Depth-one tree splitting on `feature` at `threshold`.
pub fn stump(feature: i64, threshold: f64, left: [f64; 2], right: [f64; 2]) -> DecisionTree {
    DecisionTree {
        children_left: vec![1, LEAF, LEAF],
        children_right: vec![2, LEAF, LEAF],
        feature: vec![feature, -2, -2],
        threshold: vec![threshold, -2.0, -2.0],
        value: vec![
            vec![left[0] + right[0], left[1] + right[1]],
            left.to_vec(),
            right.to_vec(),
        ],
    }
}

pub fn forest(trees: Vec<DecisionTree>) -> ClassifierArtifact {
    ClassifierArtifact {
        format_version: FORMAT_VERSION,
        feature_names: None,
        model: ClassifierModel::RandomForest(RandomForest {
            n_features: FEATURE_COUNT,
            trees,
        }),
    }
}

/// Three stumps on ASDS, anxiety and fear at trauma (all on scaled values).
pub fn sample_forest() -> ClassifierArtifact {
    forest(vec![
        stump(0, 0.0, [8.0, 2.0], [3.0, 7.0]),
        stump(8, 0.5, [9.0, 1.0], [2.0, 8.0]),
        stump(15, -0.2, [6.0, 4.0], [1.0, 9.0]),
    ])
}

pub fn estimator(scaler: ScalerArtifact, classifier: ClassifierArtifact) -> RiskEstimator {
    RiskEstimator::new(Arc::new(ModelBundle { scaler, classifier })).unwrap()
}

pub fn names() -> Vec<String> {
    feature_names().into_iter().map(str::to_string).collect()
}
