//! Artifact bundle resolution
//!
//! The vectorizer is the load's single hard dependency. Classifier and
//! metrics loads are best-effort; their failures become bundle state
//! (missing classifier, empty metrics) instead of errors.

use crate::config::PredictorConfig;
use crate::model::LogisticRegression;
use crate::store::ArtifactStore;
use crate::vectorizer::TfidfVectorizer;
use serde_json::{Map, Value};
use spamcheck_core::{Error, Result};
use tracing::{info, warn};

/// Metrics record keyed by free-form statistic name.
pub type MetricsMap = Map<String, Value>;

/// Artifacts shared read-only by every prediction once loaded.
#[derive(Debug)]
pub struct ArtifactBundle {
    /// Fitted text-to-feature-vector transformer.
    pub vectorizer: TfidfVectorizer,

    /// Fitted classifier, absent when no candidate artifact resolved.
    pub classifier: Option<LogisticRegression>,

    /// Performance statistics for the loaded classifier, possibly empty.
    pub metrics: MetricsMap,
}

/// Load the artifact bundle from the store.
///
/// Fails only when the vectorizer artifact is missing or invalid; a bundle
/// without a classifier still loads successfully and predictions from it
/// fail fast with a model-missing error.
pub fn load_bundle(store: &dyn ArtifactStore, config: &PredictorConfig) -> Result<ArtifactBundle> {
    let vectorizer = load_vectorizer(store, &config.vectorizer_key)?;
    let classifier = load_classifier(store, &config.classifier_keys);
    let metrics = load_metrics(store, &config.metrics_key, &config.model_name);

    Ok(ArtifactBundle {
        vectorizer,
        classifier,
        metrics,
    })
}

fn load_vectorizer(store: &dyn ArtifactStore, key: &str) -> Result<TfidfVectorizer> {
    if !store.exists(key) {
        return Err(Error::load(format!("vectorizer artifact '{}' not found", key)));
    }

    let bytes = store
        .read(key)
        .map_err(|e| Error::load(format!("failed to read vectorizer artifact '{}': {}", key, e)))?;
    let vectorizer = TfidfVectorizer::from_bytes(&bytes)?;

    info!(key, terms = vectorizer.dimension(), "vectorizer loaded");
    Ok(vectorizer)
}

fn load_classifier(store: &dyn ArtifactStore, keys: &[String]) -> Option<LogisticRegression> {
    for key in keys {
        if !store.exists(key) {
            continue;
        }

        match store
            .read(key)
            .and_then(|bytes| LogisticRegression::from_bytes(&bytes))
        {
            Ok(classifier) => {
                info!(key = %key, "classifier loaded");
                return Some(classifier);
            }
            Err(e) => {
                warn!(key = %key, error = %e, "classifier candidate failed to load, trying next");
            }
        }
    }

    warn!("no classifier artifact found at any candidate key");
    None
}

fn load_metrics(store: &dyn ArtifactStore, key: &str, model_name: &str) -> MetricsMap {
    if !store.exists(key) {
        return MetricsMap::new();
    }

    let all_metrics = match store
        .read(key)
        .and_then(|bytes| Ok(serde_json::from_slice::<Map<String, Value>>(&bytes)?))
    {
        Ok(map) => map,
        Err(e) => {
            warn!(key, error = %e, "failed to load metrics artifact");
            return MetricsMap::new();
        }
    };

    // Prefer the canonical model's entry; otherwise adopt the first entry.
    // The map preserves the file's key order, so the fallback is
    // deterministic.
    let (name, record) = match all_metrics.get(model_name) {
        Some(record) => (model_name.to_string(), record.clone()),
        None => match all_metrics.into_iter().next() {
            Some((name, record)) => {
                info!(model = %name, "canonical metrics entry absent, using first available");
                (name, record)
            }
            None => return MetricsMap::new(),
        },
    };

    match record {
        Value::Object(map) => {
            info!(model = %name, "metrics loaded");
            map
        }
        _ => {
            warn!(model = %name, "metrics entry is not an object, ignoring");
            MetricsMap::new()
        }
    }
}
