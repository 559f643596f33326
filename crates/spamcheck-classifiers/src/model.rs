//! Logistic-regression inference over TF-IDF features

use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};

/// Fitted binary decision function over the vectorizer's feature space.
///
/// Probability pairs are ordered (ham, spam), matching class indices 0 and
/// 1 of the training pipeline.
pub trait BinaryClassifier: Send + Sync {
    /// Hard prediction: true when the features score as spam.
    fn predict_label(&self, features: &[f64]) -> Result<bool>;

    /// Class probability pair (ham, spam), summing to 1.
    fn predict_probabilities(&self, features: &[f64]) -> Result<(f64, f64)>;
}

/// Logistic regression restored from a fitted artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    /// Build a model from fitted coefficients.
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Deserialize a fitted model from its JSON artifact.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::classifier(format!("invalid classifier artifact: {}", e)))
    }

    /// Dimension of the feature space the model was fitted on.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    fn decision(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(Error::classifier(format!(
                "feature vector has {} dimensions, classifier expects {}",
                features.len(),
                self.weights.len()
            )));
        }

        let score: f64 = self.weights.iter().zip(features).map(|(w, x)| w * x).sum();
        Ok(score + self.intercept)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl BinaryClassifier for LogisticRegression {
    fn predict_label(&self, features: &[f64]) -> Result<bool> {
        Ok(self.decision(features)? >= 0.0)
    }

    fn predict_probabilities(&self, features: &[f64]) -> Result<(f64, f64)> {
        let spam = sigmoid(self.decision(features)?);
        Ok((1.0 - spam, spam))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> LogisticRegression {
        LogisticRegression::new(vec![2.0, -1.0], -0.5)
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (ham, spam) = fixture().predict_probabilities(&[1.0, 0.3]).unwrap();
        assert!((ham + spam - 1.0).abs() < 1e-12);
        assert!(ham > 0.0 && ham < 1.0);
        assert!(spam > 0.0 && spam < 1.0);
    }

    #[test]
    fn test_label_agrees_with_probabilities() {
        let model = fixture();
        for features in [[1.0, 0.0], [0.0, 1.0], [0.5, 0.5], [0.25, 0.0]] {
            let is_spam = model.predict_label(&features).unwrap();
            let (ham, spam) = model.predict_probabilities(&features).unwrap();
            assert_eq!(is_spam, spam >= ham);
        }
    }

    #[test]
    fn test_positive_decision_is_spam() {
        // 2.0 * 1.0 - 0.5 = 1.5 > 0
        assert!(fixture().predict_label(&[1.0, 0.0]).unwrap());
        // -1.0 * 1.0 - 0.5 = -1.5 < 0
        assert!(!fixture().predict_label(&[0.0, 1.0]).unwrap());
    }

    #[test]
    fn test_dimension_mismatch_is_classifier_error() {
        let err = fixture().predict_label(&[1.0]).unwrap_err();
        assert!(matches!(err, Error::Classifier(_)));

        let err = fixture().predict_probabilities(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::Classifier(_)));
    }

    #[test]
    fn test_garbage_bytes_are_classifier_error() {
        let err = LogisticRegression::from_bytes(b"[1, 2").unwrap_err();
        assert!(matches!(err, Error::Classifier(_)));
    }
}
