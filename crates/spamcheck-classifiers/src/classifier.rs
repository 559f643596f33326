//! Classifier trait exposed to the API layer

use crate::loader::MetricsMap;
use async_trait::async_trait;
use spamcheck_core::{Prediction, Result};

/// Trait for text classifiers backed by pre-trained artifacts.
#[async_trait]
pub trait SpamClassifier: Send + Sync {
    /// Classify a single message.
    ///
    /// Fails with a load error when the mandatory artifacts are
    /// unavailable, and with a model-missing error when the vectorizer
    /// loaded but no classifier artifact could be resolved.
    async fn predict(&self, text: &str) -> Result<Prediction>;

    /// Performance statistics recorded for the loaded model.
    ///
    /// Never fails; when nothing could be loaded the map is empty.
    async fn metrics(&self) -> MetricsMap;

    /// Get the classifier name.
    fn name(&self) -> &str;
}
