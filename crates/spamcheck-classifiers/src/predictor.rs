//! Prediction orchestration
//!
//! `SpamPredictor` owns the lazily-loaded artifact bundle and wires the
//! normalizer, vectorizer, and classifier together.

use crate::classifier::SpamClassifier;
use crate::config::PredictorConfig;
use crate::loader::{load_bundle, ArtifactBundle, MetricsMap};
use crate::model::BinaryClassifier;
use crate::normalize::TextNormalizer;
use crate::store::{ArtifactStore, FsArtifactStore};
use crate::vectorizer::Vectorizer;
use once_cell::sync::OnceCell;
use spamcheck_core::{Error, Prediction, Result};
use std::sync::Arc;
use tracing::debug;

/// Spam predictor backed by pre-trained artifacts.
///
/// Artifacts load on first use and are shared read-only for the life of
/// the process. Concurrent first calls trigger at most one load; a failed
/// load leaves the predictor unloaded so a later call retries once the
/// artifacts become available.
pub struct SpamPredictor {
    store: Arc<dyn ArtifactStore>,
    config: PredictorConfig,
    normalizer: TextNormalizer,
    bundle: OnceCell<ArtifactBundle>,
}

impl SpamPredictor {
    /// Create a predictor resolving artifacts through the given store.
    pub fn new(store: Arc<dyn ArtifactStore>, config: PredictorConfig) -> Result<Self> {
        Ok(Self {
            store,
            config,
            normalizer: TextNormalizer::new()?,
            bundle: OnceCell::new(),
        })
    }

    /// Predictor over the default `models/` directory layout.
    pub fn with_defaults() -> Result<Self> {
        let config = PredictorConfig::default();
        let store = Arc::new(FsArtifactStore::new(&config.models_dir));
        Self::new(store, config)
    }

    /// Load the artifact bundle now instead of on the first prediction.
    pub fn load(&self) -> Result<()> {
        self.ensure_loaded().map(|_| ())
    }

    /// Whether the artifact bundle has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.bundle.get().is_some()
    }

    fn ensure_loaded(&self) -> Result<&ArtifactBundle> {
        self.bundle
            .get_or_try_init(|| load_bundle(self.store.as_ref(), &self.config))
    }
}

#[async_trait::async_trait]
impl SpamClassifier for SpamPredictor {
    async fn predict(&self, text: &str) -> Result<Prediction> {
        let bundle = self.ensure_loaded()?;

        let classifier = bundle.classifier.as_ref().ok_or_else(|| {
            Error::model_missing(format!(
                "vectorizer loaded but no classifier artifact resolved for '{}'",
                self.config.model_name
            ))
        })?;

        let normalized = self.normalizer.normalize(text);
        let features = bundle.vectorizer.transform(&normalized)?;

        let is_spam = classifier.predict_label(&features)?;
        let (ham_probability, spam_probability) = classifier.predict_probabilities(&features)?;

        debug!(is_spam, spam_probability, "message classified");

        Ok(Prediction::from_scores(
            is_spam,
            ham_probability,
            spam_probability,
            &self.config.model_name,
        ))
    }

    async fn metrics(&self) -> MetricsMap {
        match self.ensure_loaded() {
            Ok(bundle) => bundle.metrics.clone(),
            Err(_) => MetricsMap::new(),
        }
    }

    fn name(&self) -> &str {
        &self.config.model_name
    }
}
