//! Configuration for artifact resolution

use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Configuration for the predictor's artifact resolution.
///
/// The defaults mirror the layout the training pipeline writes: a required
/// vectorizer, a classifier under its canonical name with two legacy
/// fallback names, and an optional metrics record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Directory holding the serialized artifacts.
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Key of the required vectorizer artifact.
    #[serde(default = "default_vectorizer_key")]
    pub vectorizer_key: String,

    /// Classifier artifact keys, tried in order; first match wins.
    #[serde(default = "default_classifier_keys")]
    pub classifier_keys: Vec<String>,

    /// Key of the optional metrics artifact.
    #[serde(default = "default_metrics_key")]
    pub metrics_key: String,

    /// Canonical model name, used to select metrics and tag predictions.
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_vectorizer_key() -> String {
    "vectorizer.json".to_string()
}

fn default_classifier_keys() -> Vec<String> {
    vec![
        "logistic_regression_model.json".to_string(),
        "logistic_regression.json".to_string(),
        "model.json".to_string(),
    ]
}

fn default_metrics_key() -> String {
    "metrics.json".to_string()
}

fn default_model_name() -> String {
    "logistic_regression".to_string()
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            vectorizer_key: default_vectorizer_key(),
            classifier_keys: default_classifier_keys(),
            metrics_key: default_metrics_key(),
            model_name: default_model_name(),
        }
    }
}

impl PredictorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::config(format!("failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| Error::config(format!("failed to parse config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PredictorConfig::default();

        assert_eq!(config.models_dir, PathBuf::from("models"));
        assert_eq!(config.vectorizer_key, "vectorizer.json");
        assert_eq!(
            config.classifier_keys,
            vec![
                "logistic_regression_model.json",
                "logistic_regression.json",
                "model.json",
            ]
        );
        assert_eq!(config.metrics_key, "metrics.json");
        assert_eq!(config.model_name, "logistic_regression");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: PredictorConfig = serde_yaml::from_str("models_dir: /srv/artifacts\n").unwrap();

        assert_eq!(config.models_dir, PathBuf::from("/srv/artifacts"));
        assert_eq!(config.vectorizer_key, "vectorizer.json");
        assert_eq!(config.model_name, "logistic_regression");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictor.yaml");
        std::fs::write(
            &path,
            "models_dir: artifacts\nclassifier_keys:\n  - primary.json\n  - backup.json\n",
        )
        .unwrap();

        let config = PredictorConfig::from_file(&path).unwrap();
        assert_eq!(config.models_dir, PathBuf::from("artifacts"));
        assert_eq!(config.classifier_keys, vec!["primary.json", "backup.json"]);

        let err = PredictorConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
